//!
//! The unpacked contract source tree.
//!

pub mod outcome;

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::error::Error;

///
/// The unpacked contract source tree.
///
/// The root directory is created exclusively, so it doubles as the marker of an already
/// unpacked record.
///
#[derive(Debug)]
pub struct OutputTree {
    /// The root directory.
    root: PathBuf,
    /// The files written so far, relative to the root.
    written: Vec<PathBuf>,
}

impl OutputTree {
    ///
    /// Creates the root directory.
    ///
    /// Returns `None` if the directory already exists, e.g. if it has been created by another
    /// worker after the existence check.
    ///
    pub fn create(root: PathBuf) -> Result<Option<Self>, Error> {
        match std::fs::create_dir(root.as_path()) {
            Ok(()) => Ok(Some(Self {
                root,
                written: Vec::new(),
            })),
            Err(error) if error.kind() == std::io::ErrorKind::AlreadyExists => Ok(None),
            Err(error) => Err(Error::FileSystem(root, error)),
        }
    }

    ///
    /// Writes the `text` to the file at `path` relative to the root.
    ///
    /// The carriage returns are removed and a line feed is appended. Missing intermediate
    /// directories are created.
    ///
    pub fn write(&mut self, path: &str, text: &str) -> Result<(), Error> {
        let relative = Self::relative_path(path)
            .ok_or_else(|| Error::UnsafePath(self.root.clone(), path.to_owned()))?;
        let full_path = self.root.join(relative);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|error| Error::FileSystem(parent.to_owned(), error))?;
        }

        let mut text = text.replace('\r', "");
        text.push('\n');
        std::fs::write(full_path.as_path(), text)
            .map_err(|error| Error::FileSystem(full_path.clone(), error))?;

        self.written.push(relative.to_owned());
        Ok(())
    }

    ///
    /// Writes every `(path, text)` pair.
    ///
    pub fn write_all<'a, I>(&mut self, files: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (path, text) in files.into_iter() {
            self.write(path, text)?;
        }
        Ok(())
    }

    ///
    /// Converts the bundle `path` into a path relative to the root.
    ///
    /// Leading slashes are dropped. Returns `None` for empty paths, paths naming a directory
    /// with a trailing separator, and paths with parent directory or platform prefix components.
    ///
    pub fn relative_path(path: &str) -> Option<&Path> {
        if path.ends_with('/') || path.ends_with(std::path::MAIN_SEPARATOR) {
            return None;
        }
        let path = Path::new(path.trim_start_matches('/'));
        let mut has_file = false;
        for component in path.components() {
            match component {
                Component::Normal(_) => has_file = true,
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        if has_file {
            Some(path)
        } else {
            None
        }
    }

    ///
    /// The root directory.
    ///
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    ///
    /// The files written so far, relative to the root.
    ///
    pub fn written(&self) -> &[PathBuf] {
        self.written.as_slice()
    }
}
