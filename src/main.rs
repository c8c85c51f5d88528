pub mod args;

use langpack_tool::convert::build_converter;
use langpack_tool::pack::{EntryTransform, convert_file};
use langpack_tool::types::Encoding;
use langpack_tool::utils::files::collect_files;
use langpack_tool::utils::terms::TermTable;
use langpack_tool::COUNTER;

fn build_transform(arg: &args::Arg) -> anyhow::Result<EntryTransform> {
    let converter = build_converter(arg.converter)?;
    let mut terms = TermTable::taiwan();
    if let Some(path) = &arg.terms {
        terms
            .read_csv(path)
            .map_err(|e| anyhow::anyhow!("Failed to read term table {}: {}", path, e))?;
    }
    Ok(EntryTransform::new(converter, terms))
}

/// Converts every target in order and stops at the first failure.
fn run(arg: &args::Arg) -> anyhow::Result<()> {
    let transform = build_transform(arg)?;
    eprintln!(
        "Using converter {} with {} terms",
        transform.converter().name(),
        transform.terms().entries().len()
    );
    let encoding: Encoding = arg.encoding.into();
    for target in arg.targets() {
        let (files, is_dir) = collect_files(&target, arg.recursive)?;
        if is_dir && files.is_empty() {
            eprintln!("No script files found in {}", target);
            COUNTER.inc_warning();
        }
        for file in files.iter() {
            let (result, report) = convert_file(file, encoding, &transform).map_err(|e| {
                COUNTER.inc_error();
                e.context(format!("Error converting {}", file))
            })?;
            COUNTER.inc(result);
            COUNTER.add_entries(report.entries);
            println!("Converted: {} ({} entries)", file, report.entries);
        }
    }
    Ok(())
}

fn main() {
    let arg = args::parse_args();
    if arg.backtrace {
        unsafe { std::env::set_var("RUST_LIB_BACKTRACE", "1") };
    }
    match run(&arg) {
        Ok(()) => {
            println!();
            println!("All language packs converted.");
            println!("{}", *COUNTER);
        }
        Err(e) => {
            eprintln!("{:#}", e);
            if arg.backtrace {
                eprintln!("Backtrace: {}", e.backtrace());
            }
            eprintln!("{}", *COUNTER);
            std::process::exit(1);
        }
    }
}
