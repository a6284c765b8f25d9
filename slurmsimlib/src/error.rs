// Copyright (c) 2026 slurmsim developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

// Errors

use std::{num::ParseIntError, path::PathBuf};

/// Errors raised by the job registry
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No platform config directory could be determined
    #[error("There is no valid config directory")]
    ConfigDir,
    /// The backing job file has not been created yet
    #[error("job file '{}' does not exist", path.display())]
    MissingJobFile {
        /// The path that was looked up
        path: PathBuf,
    },
    /// A job record did not split into the expected number of fields
    #[error("expected {expected} fields in job record, found {found}")]
    FieldCount {
        /// The number of fields a record carries
        expected: usize,
        /// The number of fields actually found
        found: usize,
    },
    /// An existing job id could not be read as an integer
    #[error("job id '{id}' is not numeric")]
    NonNumericId {
        /// The offending id
        id: String,
        /// The underlying parse failure
        #[source]
        source: ParseIntError,
    },
    /// The largest existing id has no successor
    #[error("job id {id} is the largest id that can be assigned")]
    IdOverflow {
        /// The largest existing id
        id: i128,
    },
    /// There is no existing job to derive a new id from
    #[error("the registry holds no jobs to derive a new job id from")]
    NoJobs,
    /// A flag the command insists on was not given
    #[error("{command} requires {flag}")]
    MissingFlag {
        /// The command that was run
        command: &'static str,
        /// The missing flag
        flag: &'static str,
    },
    /// The requested field cannot be shown
    #[error("{command} only supports job info, not '{field}'")]
    UnsupportedField {
        /// The command that was run
        command: &'static str,
        /// The requested field
        field: String,
    },
}

impl Error {
    /// Is this error caused by how the command was invoked?
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::MissingFlag { .. } | Error::UnsupportedField { .. }
        )
    }
}

#[cfg(test)]
mod test {
    use super::Error;
    use std::path::PathBuf;

    #[test]
    fn usage_errors_are_flagged() {
        assert!(Error::MissingFlag {
            command: "squeue",
            flag: "--me"
        }
        .is_usage());
        assert!(Error::UnsupportedField {
            command: "scontrol show",
            field: "node".to_string()
        }
        .is_usage());
        assert!(!Error::NoJobs.is_usage());
        assert!(!Error::MissingJobFile {
            path: PathBuf::from("/tmp/.jobfile")
        }
        .is_usage());
    }

    #[test]
    fn messages_name_the_problem() {
        let err = Error::MissingFlag {
            command: "squeue",
            flag: "-O",
        };
        assert_eq!(format!("{err}"), "squeue requires -O");
        let err = Error::FieldCount {
            expected: 9,
            found: 3,
        };
        assert_eq!(
            format!("{err}"),
            "expected 9 fields in job record, found 3"
        );
    }
}
