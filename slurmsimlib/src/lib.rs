// Copyright (c) 2026 slurmsim developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Library backing `slurmsim`, a flat-file stand-in for a Slurm-style
//! workload manager.
//!
//! The registry is a plain text file holding one [`Job`] per line.  Every
//! command loads the whole file through a [`Store`], mutates it in memory,
//! writes it back when needed, and prints scheduler-style output to the
//! writer it was handed.
//!
//! ```
//! # use anyhow::Result;
//! # use slurmsimlib::{Job, parse_jobs, serialize_jobs, seed_jobs};
//! # fn main() -> Result<()> {
//! let seeds = seed_jobs();
//! let contents = serialize_jobs(&seeds);
//! let jobs: Vec<Job> = parse_jobs(&contents)?;
//! assert_eq!(jobs, seeds);
//! # Ok(())
//! # }
//! ```

#![deny(
    absolute_paths_not_starting_with_crate,
    anonymous_parameters,
    array_into_iter,
    bare_trait_objects,
    dead_code,
    drop_bounds,
    ellipsis_inclusive_range_patterns,
    exported_private_dependencies,
    keyword_idents,
    non_ascii_idents,
    non_camel_case_types,
    non_shorthand_field_patterns,
    non_snake_case,
    non_upper_case_globals,
    overlapping_range_endpoints,
    unconditional_recursion,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces,
    unused_must_use,
    unused_mut,
    unused_parens,
    while_true
)]
#![warn(
    missing_docs,
    unreachable_pub,
    unused_qualifications,
    unused_results
)]

mod command;
mod config;
mod constants;
mod error;
mod job;
mod log;
mod store;

pub use self::command::cancel;
pub use self::command::inspect;
pub use self::command::list;
pub use self::command::reset;
pub use self::command::submit;
pub use self::command::ListArgs;
pub use self::config::load;
pub use self::config::Defaults;
pub use self::config::Verbosity;
pub use self::constants::DEFAULT_JOB_FILE;
pub use self::error::Error;
pub use self::job::parse_jobs;
pub use self::job::seed_jobs;
pub use self::job::serialize_jobs;
pub use self::job::Job;
pub use self::log::initialize;
pub use self::log::Config as LogConfig;
pub use self::store::JobFile;
pub use self::store::Store;
