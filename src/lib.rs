//!
//! Contract verification record unpacker library.
//!

pub mod abi;
pub mod config;
pub mod error;
pub mod input;
pub mod lenient;
pub mod output;
pub mod record;
pub mod solc;
pub mod summary;


use std::path::Path;
use std::path::PathBuf;

pub use self::config::Config;
pub use self::error::Error;
pub use self::output::outcome::Outcome;
pub use self::output::outcome::SkipReason;
pub use self::output::OutputTree;
pub use self::record::contract::Contract;
pub use self::record::error::SchemaViolation;
pub use self::record::source_code::Encoding;
pub use self::record::source_code::SourceCode;
pub use self::record::Record;
pub use self::summary::Summary;

/// The verification record file extension.
pub const RECORD_EXTENSION: &str = "json";

/// The standard JSON input language file name.
pub const FILE_NAME_LANGUAGE: &str = "language";

/// The standard JSON input settings file name.
///
/// The file holds the settings as compact JSON text.
pub const FILE_NAME_SETTINGS: &str = "settings";

/// The ABI file extension.
pub const EXTENSION_ABI: &str = "abi";

///
/// Unpacks the verification record at `record_path` into the sibling directory named after
/// the record without its extension.
///
/// Records which are not `*.json` files or whose directory already exists are skipped.
/// Everything is parsed and validated before the directory is created, so a malformed record
/// leaves nothing behind.
///
pub fn unpack(record_path: &Path, config: &Config) -> Result<Outcome, Error> {
    let directory = match output_directory(record_path) {
        Some(directory) => directory,
        None => {
            return Ok(Outcome::Skipped(SkipReason::NotARecord(
                record_path.to_owned(),
            )))
        }
    };
    if directory.exists() {
        return Ok(Outcome::Skipped(SkipReason::AlreadyExists(directory)));
    }

    let text = std::fs::read_to_string(record_path)
        .map_err(|error| Error::FileSystem(record_path.to_owned(), error))?;
    let record: Record = serde_json::from_str(text.as_str())
        .map_err(|error| Error::Record(record_path.to_owned(), error))?;
    let contract = record
        .try_into_entry()
        .and_then(Contract::try_from)
        .map_err(|violation| Error::Schema(record_path.to_owned(), violation))?;

    let name = match contract.name.as_deref() {
        Some(name) => name.to_owned(),
        None => directory
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    let abi = match contract.abi.as_deref() {
        Some(abi) if config.export_abi => Some(
            crate::abi::prettify(abi)
                .map_err(|error| Error::Abi(record_path.to_owned(), error))?,
        ),
        _ => None,
    };
    let extension = contract.extension();
    let source_code = SourceCode::decode(contract.source_code)
        .map_err(|error| Error::Bundle(record_path.to_owned(), error))?;

    let abi_file_name = format!("{}.{}", name, EXTENSION_ABI);
    let plain_file_name = format!("{}.{}", name, extension);
    let mut file_names = source_code.paths();
    if matches!(source_code, SourceCode::Plain(_)) {
        file_names.push(plain_file_name.as_str());
    }
    if abi.is_some() {
        file_names.push(abi_file_name.as_str());
    }
    if let Some(path) = file_names
        .into_iter()
        .find(|path| OutputTree::relative_path(path).is_none())
    {
        return Err(Error::UnsafePath(record_path.to_owned(), path.to_owned()));
    }

    let mut tree = match OutputTree::create(directory.clone())? {
        Some(tree) => tree,
        None => return Ok(Outcome::Skipped(SkipReason::AlreadyExists(directory))),
    };
    if let Some(abi) = abi {
        tree.write(abi_file_name.as_str(), abi.as_str())?;
    }

    let encoding = source_code.encoding();
    match source_code {
        SourceCode::StandardJson(input) => {
            tree.write(FILE_NAME_LANGUAGE, input.language.as_str())?;
            tree.write(FILE_NAME_SETTINGS, input.settings.to_string().as_str())?;
            tree.write_all(
                input
                    .sources
                    .iter()
                    .map(|(path, source)| (path.as_str(), source.content.as_str())),
            )?;
        }
        SourceCode::Bundle(sources) => {
            tree.write_all(
                sources
                    .iter()
                    .map(|(path, source)| (path.as_str(), source.content.as_str())),
            )?;
        }
        SourceCode::Plain(text) => {
            tree.write(plain_file_name.as_str(), text.as_str())?;
        }
    }

    Ok(Outcome::Unpacked {
        directory: tree.root().to_owned(),
        encoding,
        files: tree.written().len(),
    })
}

///
/// Returns the output directory of the record at `record_path`.
///
/// Returns `None` if the path does not have the record extension.
///
pub fn output_directory(record_path: &Path) -> Option<PathBuf> {
    match record_path.extension() {
        Some(extension) if extension == RECORD_EXTENSION => Some(record_path.with_extension("")),
        _ => None,
    }
}
