//!
//! The verification record path enumeration.
//!

use std::ffi::OsString;
use std::io::BufRead;
use std::path::Path;
use std::path::PathBuf;

use crate::error::Error;

///
/// Recursively collects the record files under `directory`, sorted by path.
///
/// Symbolic links are not followed. Directories produced by unpacking a sibling record are not
/// descended into, so that re-running over an unpacked tree does not pick up the JSON files
/// found among the contract sources.
///
pub fn discover(directory: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut paths = Vec::new();
    let walker = walkdir::WalkDir::new(directory)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_unpacked(entry.path()));
    for entry in walker {
        let entry = entry.map_err(|error| {
            let path = error
                .path()
                .map(Path::to_owned)
                .unwrap_or_else(|| directory.to_owned());
            Error::FileSystem(path, error.into())
        })?;
        if entry.file_type().is_file() && crate::output_directory(entry.path()).is_some() {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

///
/// Reads the newline-separated record paths, skipping empty lines.
///
pub fn read_list<R>(reader: R) -> Result<Vec<PathBuf>, std::io::Error>
where
    R: BufRead,
{
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        paths.push(PathBuf::from(line));
    }
    Ok(paths)
}

///
/// Whether `path` is a directory with a sibling record file of the same name.
///
fn is_unpacked(path: &Path) -> bool {
    if !path.is_dir() {
        return false;
    }
    let mut record: OsString = path.as_os_str().to_owned();
    record.push(".");
    record.push(crate::RECORD_EXTENSION);
    Path::new(&record).is_file()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    #[test]
    fn ok_read_list() {
        let input = "a/1.json\r\n\nb/2.json\n   \n";

        let paths = super::read_list(input.as_bytes()).expect("Readable");
        assert_eq!(
            paths,
            vec![
                PathBuf::from("a/1.json"),
                PathBuf::from("b/2.json"),
                PathBuf::from("   "),
            ]
        );
    }

    #[test]
    fn ok_discover() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let root = directory.path();
        std::fs::create_dir_all(root.join("mainnet/0x01")).expect("Created");
        std::fs::create_dir_all(root.join("sepolia")).expect("Created");
        std::fs::write(root.join("mainnet/0x01.json"), "{}").expect("Written");
        std::fs::write(root.join("mainnet/0x01/package.json"), "{}").expect("Written");
        std::fs::write(root.join("mainnet/0x02.json"), "{}").expect("Written");
        std::fs::write(root.join("mainnet/notes.txt"), "").expect("Written");
        std::fs::write(root.join("sepolia/0x03.json"), "{}").expect("Written");

        let paths = super::discover(root).expect("Discovered");
        assert_eq!(
            paths,
            vec![
                root.join("mainnet/0x01.json"),
                root.join("mainnet/0x02.json"),
                root.join("sepolia/0x03.json"),
            ]
        );
    }

    #[test]
    fn error_discover_missing_directory() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        assert!(super::discover(directory.path().join("missing").as_path()).is_err());
    }
}
