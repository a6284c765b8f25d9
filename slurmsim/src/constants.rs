// Copyright (c) 2026 slurmsim developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Constants

use const_format::concatcp;

/// The version string shown by `--version`
pub(crate) const LONG_VERSION: &str = concatcp!(
    env!("CARGO_PKG_VERSION"),
    "\nbuilt:  ",
    env!("VERGEN_BUILD_TIMESTAMP"),
    "\nrustc:  ",
    env!("VERGEN_RUSTC_SEMVER"),
    "\ntarget: ",
    env!("VERGEN_CARGO_TARGET_TRIPLE"),
);

#[cfg(test)]
pub(crate) const TEST_PATH: &str = "test/config.toml";
#[cfg(test)]
pub(crate) const PARTIAL_TEST_PATH: &str = "test/partial.toml";
