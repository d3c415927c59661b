//!
//! Contract verification record unpacker arguments.
//!

use std::path::PathBuf;

use structopt::StructOpt;

///
/// Unpacks the explorer contract verification records into source trees.
///
/// Each `<name>.json` record is unpacked into the sibling `<name>` directory, which receives
/// the contract source files and, for the standard JSON input records, the `language` and
/// `settings` files. Records whose directory already exists are skipped.
///
/// Example: unpack-sources ./records/ --abi --parallel
///
#[derive(Debug, StructOpt)]
#[structopt(name = "Contract verification record unpacker")]
pub struct Arguments {
    /// The record file path, or a directory to scan recursively for `*.json` records.
    /// If omitted, newline-separated record paths are read from the standard input.
    #[structopt(parse(from_os_str))]
    pub input: Option<PathBuf>,

    /// Export the contract ABI into `<ContractName>.abi`.
    #[structopt(long = "abi")]
    pub export_abi: bool,

    /// Unpack the records in parallel.
    #[structopt(long = "parallel")]
    pub parallel: bool,

    /// The number of worker threads. Implies `--parallel`.
    #[structopt(short = "j", long = "threads")]
    pub threads: Option<usize>,

    /// Do not print the successfully unpacked records.
    #[structopt(short = "q", long = "quiet")]
    pub quiet: bool,
}

impl Arguments {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::from_args()
    }

    ///
    /// Validates the arguments.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.threads == Some(0) {
            anyhow::bail!("The number of threads must be positive.");
        }

        Ok(())
    }

    ///
    /// Whether the records must be unpacked on the thread pool.
    ///
    pub fn is_parallel(&self) -> bool {
        self.parallel || self.threads.is_some()
    }
}

impl Default for Arguments {
    fn default() -> Self {
        Self::new()
    }
}
