// Copyright (c) 2026 slurmsim developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Constants

use const_format::concatcp;

// Constants building blocks
const COULD_NOT: &str = "Could not ";
const CONFIG_FILE: &str = " config file!";
const JOB_FILE: &str = " job file!";

/// The default location of the backing job file
pub const DEFAULT_JOB_FILE: &str = "/tmp/.jobfile";
/// The configuration file base path for slurmsim
pub(crate) const CONFIG_FILE_BASE_PATH: &str = "slurmsim";
/// The configuration file base name for slurmsim
pub(crate) const CONFIG_FILE_NAME: &str = concatcp!(CONFIG_FILE_BASE_PATH, ".toml");
/// Context if the config file is unable to be parsed
pub(crate) const UNABLE: &str = concatcp!(COULD_NOT, "parse", CONFIG_FILE);
/// Context if the config file is unable to be read
pub(crate) const READ: &str = concatcp!(COULD_NOT, "read", CONFIG_FILE);
/// Context if the config file is unable to be opened
pub(crate) const FILE_OPEN: &str = concatcp!(COULD_NOT, "open", CONFIG_FILE);
/// Context if the job file is unable to be read
pub(crate) const JOBS_READ: &str = concatcp!(COULD_NOT, "read", JOB_FILE);
/// Context if the job file is unable to be parsed
pub(crate) const JOBS_PARSE: &str = concatcp!(COULD_NOT, "parse", JOB_FILE);
/// Context if the job file is unable to be written
pub(crate) const JOBS_WRITE: &str = concatcp!(COULD_NOT, "write", JOB_FILE);

/// The number of fields in a serialized job record
pub(crate) const FIELD_COUNT: usize = 9;
/// The separator between `squeue` output columns
pub(crate) const COLUMN_SEPARATOR: &str = "   ";

#[cfg(test)]
pub(crate) const TEST_PATH: &str = "test/config.toml";
