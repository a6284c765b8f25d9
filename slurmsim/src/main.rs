// Copyright (c) 2026 slurmsim developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! `slurmsim` stands in for `sbatch`, `squeue`, `scancel` and `scontrol`
//! in test environments without a real cluster.  Jobs live in a flat
//! registry file (`/tmp/.jobfile` unless `--jobfile` says otherwise).
//!
//! ```text
//! slurmsim sreset
//! slurmsim sbatch path/to/foo.sbatch
//! slurmsim squeue --me --noheader -O JobID,Name
//! slurmsim scancel 123457
//! slurmsim scontrol show job 123456
//! ```

#![deny(
    absolute_paths_not_starting_with_crate,
    anonymous_parameters,
    bare_trait_objects,
    dead_code,
    keyword_idents,
    non_ascii_idents,
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
    unused_qualifications,
    unused_results
)]

mod constants;
mod error;
mod model;
mod runtime;

use self::error::{clap_or_error, success};
use std::{io, process};

fn main() {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    process::exit(
        runtime::run::<Vec<&str>, &str, _>(None, &mut writer).map_or_else(clap_or_error, success),
    )
}
