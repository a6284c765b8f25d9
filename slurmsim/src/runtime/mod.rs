// Copyright (c) 2026 slurmsim developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

// Runtime

use crate::model::{
    cli::{Cli, InspectCommands, Subcommands},
    config::{Config, TomlConfig},
};
use anyhow::Result;
use clap::Parser;
use slurmsimlib::{
    cancel, initialize, inspect, list, load, reset, submit, Defaults, JobFile, ListArgs,
};
use std::{ffi::OsString, io::Write};
use tracing::{debug, trace};

pub(crate) fn run<I, T, W>(args: Option<I>, writer: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write + ?Sized,
{
    // Parse the command line
    let args = if let Some(args) = args {
        Cli::try_parse_from(args)?
    } else {
        Cli::try_parse()?
    };

    // Load the configuration
    let mut config = load::<TomlConfig, Config>(
        args.config_file_path().as_ref(),
        *args.verbose(),
        *args.quiet(),
        Defaults::slurmsim(),
    )?;
    if let Some(jobfile) = args.jobfile() {
        let _ = config.override_jobfile(jobfile)?;
    }

    // Setup logging
    initialize(&mut config)?;
    trace!("{config:?}");

    let store = JobFile::new(config.jobfile());
    debug!("using job file {}", store.path().display());

    match args.sub_cmd() {
        Subcommands::Reset => reset(&store)?,
        Subcommands::Submit { script } => submit(&store, script, writer)?,
        Subcommands::List {
            me,
            noheader,
            format,
        } => {
            let list_args = ListArgs::builder()
                .me(*me)
                .noheader(*noheader)
                .format(format.clone())
                .build();
            list(&store, &list_args, writer)?;
        }
        Subcommands::Cancel { jobid } => cancel(&store, jobid, writer)?,
        Subcommands::Inspect(InspectCommands::Show { field, value }) => {
            inspect(&store, field, value, writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::run;
    use crate::error::Error as CliError;
    use anyhow::{anyhow, Result};
    use assert_fs::{prelude::*, TempDir};
    use slurmsimlib::Error;

    fn run_with(jobfile: &str, args: &[&str]) -> Result<String> {
        let mut full = vec![env!("CARGO_PKG_NAME"), "--jobfile", jobfile];
        full.extend_from_slice(args);
        let mut buf = vec![];
        run(Some(full), &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn reset_then_submit_works() -> Result<()> {
        let temp = TempDir::new()?;
        let child = temp.child(".jobfile");
        let jobfile = child.path().to_string_lossy().to_string();
        assert_eq!(run_with(&jobfile, &["reset"])?, "");
        assert_eq!(
            run_with(&jobfile, &["submit", "path/to/foo.sbatch"])?,
            "Submitted batch job 123459\n"
        );
        let listing = run_with(&jobfile, &["squeue", "--me", "--noheader", "-O", "JobID"])?;
        assert_eq!(listing.lines().count(), 4);
        child.assert(predicates::str::contains(
            "123459 foo PENDING [] batch path/to/foo.sbatch foo-123459.out 00:00:00 00:00:00\n",
        ));
        temp.close()?;
        Ok(())
    }

    #[test]
    fn missing_job_file_fails() -> Result<()> {
        let temp = TempDir::new()?;
        let jobfile = temp.child("missing").path().to_string_lossy().to_string();
        match run_with(&jobfile, &["cancel", "123456"]) {
            Ok(_) => Err(anyhow!("there is no job file to cancel from")),
            Err(e) => {
                assert!(matches!(
                    e.downcast_ref::<Error>(),
                    Some(Error::MissingJobFile { .. })
                ));
                Ok(())
            }
        }
    }

    #[test]
    fn unknown_subcommand_is_error() {
        let mut buf = vec![];
        assert!(run(Some(vec![env!("CARGO_PKG_NAME"), "bogus"]), &mut buf).is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn blank_jobfile_flag_is_error() -> Result<()> {
        let mut buf = vec![];
        match run(Some(vec![env!("CARGO_PKG_NAME"), "--jobfile", "  ", "reset"]), &mut buf) {
            Ok(()) => Err(anyhow!("a blank --jobfile should be rejected")),
            Err(e) => {
                assert!(matches!(
                    e.downcast_ref::<CliError>(),
                    Some(CliError::EmptyJobFile)
                ));
                Ok(())
            }
        }
    }
}
