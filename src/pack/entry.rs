//! Conversion of a single language pack entry value.
use crate::convert::TextConverter;
use crate::utils::terms::TermTable;
use anyhow::Result;

#[derive(Debug)]
/// Converts entry values: character conversion first, then terminology substitution.
pub struct EntryTransform {
    converter: Box<dyn TextConverter>,
    terms: TermTable,
}

impl EntryTransform {
    pub fn new(converter: Box<dyn TextConverter>, terms: TermTable) -> Self {
        Self { converter, terms }
    }

    pub fn converter(&self) -> &dyn TextConverter {
        self.converter.as_ref()
    }

    pub fn terms(&self) -> &TermTable {
        &self.terms
    }

    /// Transforms the text found between the quotes of an entry value.
    pub fn transform(&self, value: &str) -> Result<String> {
        let converted = self.converter.convert(value)?;
        Ok(self.terms.apply(&converted))
    }
}
