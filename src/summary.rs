//!
//! The batch unpacking summary.
//!

use crate::error::Error;
use crate::output::outcome::Outcome;

///
/// The batch unpacking summary.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// The number of unpacked records.
    pub unpacked: usize,
    /// The number of skipped records.
    pub skipped: usize,
    /// The number of failed records.
    pub failed: usize,
}

impl Summary {
    ///
    /// Accounts the result of a single record.
    ///
    pub fn add(mut self, result: &Result<Outcome, Error>) -> Self {
        match result {
            Ok(Outcome::Unpacked { .. }) => self.unpacked += 1,
            Ok(Outcome::Skipped(_)) => self.skipped += 1,
            Err(_) => self.failed += 1,
        }
        self
    }

    ///
    /// Merges two partial summaries.
    ///
    pub fn merge(self, other: Self) -> Self {
        Self {
            unpacked: self.unpacked + other.unpacked,
            skipped: self.skipped + other.skipped,
            failed: self.failed + other.failed,
        }
    }

    ///
    /// Whether every record has been either unpacked or skipped.
    ///
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} unpacked, {} skipped, {} failed",
            self.unpacked, self.skipped, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::Summary;
    use crate::error::Error;
    use crate::output::outcome::Outcome;
    use crate::output::outcome::SkipReason;
    use crate::record::error::SchemaViolation;

    #[test]
    fn ok_add_and_merge() {
        let skipped = Ok(Outcome::Skipped(SkipReason::NotARecord(PathBuf::from("a.txt"))));
        let failed = Err(Error::Schema(
            PathBuf::from("b.json"),
            SchemaViolation::EmptySourceCode,
        ));

        let first = Summary::default().add(&skipped);
        let second = Summary::default().add(&failed).add(&skipped);
        let summary = first.merge(second);

        assert_eq!(
            summary,
            Summary {
                unpacked: 0,
                skipped: 2,
                failed: 1,
            }
        );
        assert!(!summary.is_success());
        assert_eq!(summary.to_string(), "0 unpacked, 2 skipped, 1 failed");
    }
}
