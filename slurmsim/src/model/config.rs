// Copyright (c) 2026 slurmsim developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

// configuration structs

use crate::error::Error::{self, EmptyJobFile};
use getset::Getters;
use serde::{Deserialize, Serialize};
use slurmsimlib::{LogConfig, Verbosity, DEFAULT_JOB_FILE};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// The configuration
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Eq, Getters, PartialEq)]
pub(crate) struct Config {
    quiet: u8,
    verbose: u8,
    #[getset(get = "pub(crate)")]
    jobfile: PathBuf,
    target: bool,
    thread_id: bool,
    thread_names: bool,
    line_numbers: bool,
    with_level: bool,
    level: Option<LevelFilter>,
}

impl Config {
    /// Point at a job file given on the command line
    pub(crate) fn override_jobfile(&mut self, jobfile: &Path) -> Result<&mut Self, Error> {
        if is_blank(&jobfile.to_string_lossy()) {
            return Err(EmptyJobFile);
        }
        self.jobfile = jobfile.to_path_buf();
        Ok(self)
    }
}

fn is_blank(jobfile: &str) -> bool {
    jobfile.trim().is_empty()
}

impl Verbosity for Config {
    fn set_quiet(&mut self, quiet: u8) -> &mut Self {
        self.quiet = quiet;
        self
    }

    fn set_verbose(&mut self, verbose: u8) -> &mut Self {
        self.verbose = verbose;
        self
    }
}

impl LogConfig for Config {
    fn quiet(&self) -> u8 {
        self.quiet
    }

    fn verbose(&self) -> u8 {
        self.verbose
    }

    fn target(&self) -> bool {
        self.target
    }

    fn thread_id(&self) -> bool {
        self.thread_id
    }

    fn thread_names(&self) -> bool {
        self.thread_names
    }

    fn line_numbers(&self) -> bool {
        self.line_numbers
    }

    fn with_level(&self) -> bool {
        self.with_level
    }

    fn level(&self) -> Option<LevelFilter> {
        self.level
    }

    fn set_level(&mut self, level: LevelFilter) -> &mut Self {
        self.level = Some(level);
        self
    }
}

impl TryFrom<TomlConfig> for Config {
    type Error = Error;

    fn try_from(config: TomlConfig) -> Result<Self, Self::Error> {
        let jobfile = match config.jobfile() {
            Some(jobfile) if is_blank(jobfile) => return Err(EmptyJobFile),
            Some(jobfile) => PathBuf::from(jobfile),
            None => PathBuf::from(DEFAULT_JOB_FILE),
        };
        let (target, thread_id, thread_names, line_numbers, with_level) =
            if let Some(tracing) = config.tracing() {
                (
                    *tracing.target(),
                    *tracing.thread_id(),
                    *tracing.thread_names(),
                    *tracing.line_numbers(),
                    *tracing.with_level(),
                )
            } else {
                (false, false, false, false, true)
            };
        Ok(Config {
            verbose: 0,
            quiet: 0,
            jobfile,
            target,
            thread_id,
            thread_names,
            line_numbers,
            with_level,
            level: None,
        })
    }
}

/// The TOML configuration.
#[derive(Clone, Debug, Default, Deserialize, Eq, Getters, PartialEq, Serialize)]
#[getset(get = "pub(crate)")]
pub(crate) struct TomlConfig {
    /// The path to the job registry file
    jobfile: Option<String>,
    /// The tracing configuration
    tracing: Option<Tracing>,
}

/// tracing configuration
///
/// Keys left out of the table take their default, which only shows the level.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize)]
#[getset(get = "pub(crate)")]
#[serde(default)]
pub(crate) struct Tracing {
    /// Should we trace the event target
    target: bool,
    /// Should we trace the thread id
    thread_id: bool,
    /// Should we trace the thread names
    thread_names: bool,
    /// Should we trace the line numbers
    line_numbers: bool,
    /// Should we trace the level
    with_level: bool,
}

impl Default for Tracing {
    fn default() -> Self {
        Self {
            target: false,
            thread_id: false,
            thread_names: false,
            line_numbers: false,
            with_level: true,
        }
    }
}
