// Copyright (c) 2026 slurmsim developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! configuration for the slurmsim binary

use crate::{
    constants::{CONFIG_FILE_BASE_PATH, CONFIG_FILE_NAME, FILE_OPEN, READ, UNABLE},
    error::Error::ConfigDir,
};
use anyhow::{Context, Result};
use getset::CopyGetters;
use serde::de::DeserializeOwned;
use std::{fs::File, io::Read, path::PathBuf};
use tracing::debug;

/// Can store verbosity information
pub trait Verbosity {
    /// Set the level of quiet.
    fn set_quiet(&mut self, quiet: u8) -> &mut Self;
    /// Set the level of verbose.
    fn set_verbose(&mut self, verbose: u8) -> &mut Self;
}

/// Where a binary looks for its config file when none is given
#[derive(Clone, Copy, CopyGetters, Debug)]
#[getset(get_copy = "pub")]
pub struct Defaults {
    /// The default base path to the config, under the platform config directory
    default_base_path: &'static str,
    /// The default config file name
    default_file_name: &'static str,
}

impl Defaults {
    /// The defaults for the slurmsim binary
    #[must_use]
    pub fn slurmsim() -> Self {
        Defaults {
            default_base_path: CONFIG_FILE_BASE_PATH,
            default_file_name: CONFIG_FILE_NAME,
        }
    }
}

/// Load configuration
///
/// An explicitly given config file must exist.  Without one, the default
/// config file is used if present, otherwise `T::default()`.
///
/// # Errors
/// * I/O error if the file cannot be read
/// * TOML parse errors
/// * `std::from::TryFrom` error if the TOML cannot be converted to the final config.
///
pub fn load<T, U>(
    config_file_path: Option<&String>,
    verbose: u8,
    quiet: u8,
    defaults: Defaults,
) -> Result<U>
where
    T: DeserializeOwned + Default,
    U: TryFrom<T> + Verbosity,
    <U as TryFrom<T>>::Error: std::error::Error + 'static,
    <U as TryFrom<T>>::Error: Sync,
    <U as TryFrom<T>>::Error: Send,
{
    let config = match config_file_path {
        Some(path) => read_and_parse(PathBuf::from(path))?,
        None => match default_config_file_path(defaults) {
            Ok(path) if path.exists() => read_and_parse(path)?,
            Ok(path) => {
                debug!("no config at {}, using defaults", path.display());
                T::default()
            }
            Err(e) => {
                debug!("{e}, using defaults");
                T::default()
            }
        },
    };
    // Convert the toml config to base config
    transform(config, verbose, quiet)
}

fn read_and_parse<T>(config_file_path: PathBuf) -> Result<T>
where
    T: DeserializeOwned,
{
    // Setup error handling
    let path = config_file_path.clone();
    let ctx = |msg: &'static str| -> String { format!("{msg} {}", path.display()) };
    // Read the config file
    let config_file = read_config_file(config_file_path, ctx)?;
    // Parse the config file
    toml::from_str(&config_file).with_context(|| ctx(UNABLE))
}

fn default_config_file_path(defaults: Defaults) -> Result<PathBuf> {
    let mut config_file_path = dirs2::config_dir().ok_or(ConfigDir)?;
    config_file_path.push(defaults.default_base_path());
    config_file_path.push(defaults.default_file_name());
    Ok(config_file_path)
}

fn read_config_file<F>(config_file_path: PathBuf, ctx: F) -> Result<String>
where
    F: FnOnce(&'static str) -> String + Copy,
{
    let mut buf = String::new();
    let mut file = File::open(config_file_path).with_context(|| ctx(FILE_OPEN))?;
    let _ = file.read_to_string(&mut buf).with_context(|| ctx(READ))?;
    Ok(buf)
}

fn transform<T, U>(config: T, verbose: u8, quiet: u8) -> Result<U>
where
    U: TryFrom<T> + Verbosity,
    <U as TryFrom<T>>::Error: std::error::Error + 'static,
    <U as TryFrom<T>>::Error: Sync,
    <U as TryFrom<T>>::Error: Send,
{
    let mut config: U = U::try_from(config)?;
    let _ = config.set_verbose(verbose);
    let _ = config.set_quiet(quiet);
    Ok(config)
}
