// Copyright (c) 2026 slurmsim developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! command line interface

use crate::constants::LONG_VERSION;
use clap::{ArgAction::Count, Parser, Subcommand};
use getset::Getters;
use std::path::PathBuf;

const CONFIG_FILE_PATH: &str = "config_file_path";
const JOBFILE: &str = "jobfile";

#[derive(Parser, Debug, Getters)]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
#[getset(get = "pub(crate)")]
pub(crate) struct Cli {
    #[clap(
        short,
        long,
        action = Count,
        global = true,
        help = "Turn up logging verbosity (multiple will turn it up more)",
        conflicts_with = "quiet"
    )]
    verbose: u8,
    #[clap(
        short,
        long,
        action = Count,
        global = true,
        help = "Turn down logging verbosity (multiple will turn it down more)",
        conflicts_with = "verbose"
    )]
    quiet: u8,
    #[arg(
        short = 'c',
        long,
        global = true,
        value_name = CONFIG_FILE_PATH,
        help = "Set the path to a valid config file"
    )]
    config_file_path: Option<String>,
    #[arg(
        long,
        global = true,
        value_name = JOBFILE,
        help = "Set the path to the job registry file"
    )]
    jobfile: Option<PathBuf>,
    #[command(subcommand)]
    sub_cmd: Subcommands,
}

#[derive(Clone, Debug, Eq, PartialEq, Subcommand)]
pub(crate) enum Subcommands {
    /// Replace the registry with the seed jobs
    #[command(visible_alias = "sreset")]
    Reset,
    /// Submit a batch script
    #[command(visible_alias = "sbatch")]
    Submit {
        /// The batch script to submit
        script: String,
    },
    /// List the jobs in the registry
    #[command(visible_alias = "squeue")]
    List {
        /// Only list your own jobs (required)
        #[arg(long)]
        me: bool,
        /// Don't print a header (required)
        #[arg(long)]
        noheader: bool,
        /// The output format (required, columns are fixed)
        #[arg(short = 'O', value_name = "format")]
        format: Option<String>,
    },
    /// Cancel a job
    #[command(visible_alias = "scancel")]
    Cancel {
        /// The id of the job to cancel
        jobid: String,
    },
    /// Inspect the registry
    #[command(visible_alias = "scontrol", subcommand)]
    Inspect(InspectCommands),
}

#[derive(Clone, Debug, Eq, PartialEq, Subcommand)]
pub(crate) enum InspectCommands {
    /// Show the details of an entity
    Show {
        /// The kind of entity to show, only 'job' is supported
        field: String,
        /// The entity to show
        value: String,
    },
}
