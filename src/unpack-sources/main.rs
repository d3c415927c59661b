//!
//! Contract verification record unpacker binary.
//!

pub mod arguments;

use std::path::Path;
use std::path::PathBuf;

use colored::Colorize;
use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;

use contract_source_unpacker::Config;
use contract_source_unpacker::Error;
use contract_source_unpacker::Outcome;
use contract_source_unpacker::Summary;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    std::process::exit(match main_inner() {
        Ok(summary) if summary.is_success() => 0,
        Ok(_) => 1,
        Err(error) => {
            eprintln!("{:?}", error);
            1
        }
    })
}

///
/// The auxiliary `main` function to facilitate the `?` error conversion operator.
///
fn main_inner() -> anyhow::Result<Summary> {
    let arguments = Arguments::new();
    arguments.validate()?;

    let config = Config::new(arguments.export_abi);
    let paths = collect_paths(arguments.input.as_deref())?;

    let summary = if arguments.is_parallel() {
        if let Some(threads) = arguments.threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()?;
        }
        println!(
            "[{}] Started with {} worker threads",
            "UNPACK".bright_cyan(),
            rayon::current_num_threads(),
        );
        paths
            .par_iter()
            .map(|path| unpack(path.as_path(), &config, arguments.quiet))
            .reduce(Summary::default, Summary::merge)
    } else {
        paths
            .iter()
            .map(|path| unpack(path.as_path(), &config, arguments.quiet))
            .fold(Summary::default(), Summary::merge)
    };

    let status = if summary.is_success() {
        "FINISHED".green()
    } else {
        "FINISHED".bright_red()
    };
    println!("[{}] {} ({})", "UNPACK".bright_cyan(), status, summary);

    Ok(summary)
}

///
/// Collects the record paths from the argument or the standard input.
///
fn collect_paths(input: Option<&Path>) -> anyhow::Result<Vec<PathBuf>> {
    let paths = match input {
        Some(directory) if directory.is_dir() => {
            contract_source_unpacker::input::discover(directory)?
        }
        Some(path) => vec![path.to_owned()],
        None => contract_source_unpacker::input::read_list(std::io::stdin().lock())?,
    };
    Ok(paths)
}

///
/// Unpacks a single record and prints its outcome.
///
fn unpack(path: &Path, config: &Config, quiet: bool) -> Summary {
    let result = contract_source_unpacker::unpack(path, config);
    match result {
        Ok(Outcome::Unpacked {
            ref directory,
            encoding,
            files,
        }) => {
            if !quiet {
                println!(
                    "[{}] {} {} ({}, {} files)",
                    "UNPACK".green(),
                    "DONE".green(),
                    directory.display(),
                    encoding,
                    files,
                );
            }
        }
        Ok(Outcome::Skipped(ref reason)) => {
            println!(
                "[{}] {} {}",
                "UNPACK".yellow(),
                "SKIPPED".yellow(),
                reason
            );
        }
        Err(ref error) => print_error(error),
    }
    Summary::default().add(&result)
}

///
/// Prints the record error.
///
fn print_error(error: &Error) {
    let kind = if error.is_parsing() {
        "PARSE ERROR"
    } else {
        "FAILED"
    };
    eprintln!("[{}] {} {}", "UNPACK".bright_red(), kind.bright_red(), error);
}
