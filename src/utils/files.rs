use std::fs;
use std::io;
use std::io::Write;
use std::path::Path;

/// Extensions of script files that may carry a language pack.
pub const SCRIPT_EXTS: &[&str] = &["js"];

pub fn find_files(path: &str, recursive: bool) -> io::Result<Vec<String>> {
    let mut result = Vec::new();
    let dir_path = Path::new(&path);

    if dir_path.is_dir() {
        let mut entries = fs::read_dir(dir_path)?.collect::<io::Result<Vec<_>>>()?;
        entries.sort_by_key(|e| e.file_name());
        for entry in entries {
            let path = entry.path();

            if path.is_file()
                && path.file_name().map_or(false, |file| {
                    let file = file.to_string_lossy().to_lowercase();
                    SCRIPT_EXTS
                        .iter()
                        .any(|ext| file.ends_with(&format!(".{}", ext)))
                })
            {
                if let Some(path_str) = path.to_str() {
                    result.push(path_str.to_string());
                }
            } else if recursive && path.is_dir() {
                if let Some(path_str) = path.to_str() {
                    let mut sub_files = find_files(path_str, recursive)?;
                    result.append(&mut sub_files);
                }
            }
        }
    }

    Ok(result)
}

pub fn collect_files(path: &str, recursive: bool) -> io::Result<(Vec<String>, bool)> {
    let pa = Path::new(path);
    if pa.is_dir() {
        return Ok((find_files(path, recursive)?, true));
    }
    if pa.is_file() {
        return Ok((vec![path.to_string()], false));
    }
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("Path {} is neither a file nor a directory", pa.display()),
    ))
}

pub fn read_file<F: AsRef<Path> + ?Sized>(f: &F) -> io::Result<Vec<u8>> {
    fs::read(f)
}

/// Replaces the whole content of the file with a single write.
pub fn write_file<F: AsRef<Path> + ?Sized>(f: &F, data: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(f)?;
    file.write_all(data)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("project.js"), "a").unwrap();
        fs::write(root.join("readme.txt"), "b").unwrap();
        fs::write(root.join("sub").join("inner.JS"), "c").unwrap();
        let root_str = root.to_str().unwrap();

        let (files, is_dir) = collect_files(root_str, false).unwrap();
        assert!(is_dir);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("project.js"));

        let (files, _) = collect_files(root_str, true).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.ends_with("inner.JS")));

        let single = root.join("readme.txt");
        let (files, is_dir) = collect_files(single.to_str().unwrap(), false).unwrap();
        assert!(!is_dir);
        assert_eq!(files, vec![single.to_str().unwrap().to_string()]);

        let missing = root.join("missing.js");
        let err = collect_files(missing.to_str().unwrap(), false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_write_file_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.js");
        fs::write(&path, "a much longer original content").unwrap();
        write_file(&path, b"short").unwrap();
        assert_eq!(read_file(&path).unwrap(), b"short");
    }
}
