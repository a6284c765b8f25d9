// Copyright (c) 2026 slurmsim developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

// Errors

use clap::error::ErrorKind;
use slurmsimlib::Error as RegistryError;
use tracing::{debug, error};

const FAILURE: i32 = 1;
const USAGE: i32 = 2;

#[derive(thiserror::Error, Debug)]
pub(crate) enum Error {
    #[error("the configured job file path is empty")]
    EmptyJobFile,
}

#[allow(clippy::needless_pass_by_value)]
pub(crate) fn clap_or_error(err: anyhow::Error) -> i32 {
    let disp_err = |code: i32| {
        eprintln!("{err:?}");
        code
    };
    if let Some(e) = err.downcast_ref::<clap::Error>() {
        match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                0
            }
            ErrorKind::InvalidValue
            | ErrorKind::UnknownArgument
            | ErrorKind::InvalidSubcommand
            | ErrorKind::NoEquals
            | ErrorKind::ValueValidation
            | ErrorKind::TooManyValues
            | ErrorKind::TooFewValues
            | ErrorKind::WrongNumberOfValues
            | ErrorKind::ArgumentConflict
            | ErrorKind::MissingRequiredArgument
            | ErrorKind::MissingSubcommand
            | ErrorKind::InvalidUtf8
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                eprint!("{e}");
                USAGE
            }
            ErrorKind::Io | ErrorKind::Format => disp_err(FAILURE),
            _ => {
                error!("Unknown ErrorKind");
                disp_err(FAILURE)
            }
        }
    } else if let Some(e) = err.downcast_ref::<RegistryError>() {
        match e {
            RegistryError::MissingJobFile { path } => {
                debug!("no job file at {}", path.display());
                FAILURE
            }
            e if e.is_usage() => {
                eprintln!("{e}");
                USAGE
            }
            _ => disp_err(FAILURE),
        }
    } else {
        disp_err(FAILURE)
    }
}

pub(crate) fn success((): ()) -> i32 {
    0
}

#[cfg(test)]
mod test {
    use super::{clap_or_error, success};
    use anyhow::{anyhow, Error};
    use clap::{
        error::ErrorKind::{self, DisplayHelp, DisplayVersion},
        Command,
    };
    use slurmsimlib::Error as RegistryError;

    #[test]
    fn success_works() {
        assert_eq!(0, success(()));
    }

    #[test]
    fn clap_or_error_is_error() {
        assert_eq!(1, clap_or_error(anyhow!("test")));
    }

    #[test]
    fn clap_or_error_is_help() {
        let mut cmd = Command::new(env!("CARGO_PKG_NAME"));
        let error = cmd.error(DisplayHelp, "help");
        let clap_error = Error::new(error);
        assert_eq!(0, clap_or_error(clap_error));
    }

    #[test]
    fn clap_or_error_is_version() {
        let mut cmd = Command::new(env!("CARGO_PKG_NAME"));
        let error = cmd.error(DisplayVersion, "1.0");
        let clap_error = Error::new(error);
        assert_eq!(0, clap_or_error(clap_error));
    }

    #[test]
    fn clap_or_error_is_other_clap_error() {
        let mut cmd = Command::new(env!("CARGO_PKG_NAME"));
        let error = cmd.error(ErrorKind::InvalidValue, "Some failure case");
        let clap_error = Error::new(error);
        assert_eq!(2, clap_or_error(clap_error));
    }

    #[test]
    fn clap_or_error_is_missing_job_file() {
        let err = Error::new(RegistryError::MissingJobFile {
            path: "/tmp/.jobfile".into(),
        });
        assert_eq!(1, clap_or_error(err));
    }

    #[test]
    fn clap_or_error_is_usage() {
        let err = Error::new(RegistryError::MissingFlag {
            command: "squeue",
            flag: "--me",
        });
        assert_eq!(2, clap_or_error(err));
    }

    #[test]
    fn clap_or_error_is_wrapped_registry_error() {
        let err = Error::new(RegistryError::NoJobs).context("submit failed");
        assert_eq!(1, clap_or_error(err));
    }
}
