// Copyright (c) 2026 slurmsim developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! The registry commands
//!
//! Each command takes the [`Store`] to work against, only the arguments it
//! needs, and the writer its scheduler-style output goes to.

use crate::{
    constants::COLUMN_SEPARATOR,
    error::Error::{self, IdOverflow, MissingFlag, NoJobs, NonNumericId, UnsupportedField},
    job::{seed_jobs, Job},
    store::Store,
};
use anyhow::Result;
use getset::Getters;
use std::{io::Write, path::Path};
use tracing::{debug, info};
use typed_builder::TypedBuilder;

const SQUEUE: &str = "squeue";
const SCONTROL_SHOW: &str = "scontrol show";
const JOB_FIELD: &str = "job";

/// The flags `squeue` is invoked with
///
/// All three must be given.  The output format is accepted but the
/// columns printed are fixed.
#[derive(Clone, Debug, Default, Eq, Getters, PartialEq, TypedBuilder)]
#[getset(get = "pub")]
pub struct ListArgs {
    /// Only list the invoking user's jobs
    #[builder(default)]
    me: bool,
    /// Don't print a header line
    #[builder(default)]
    noheader: bool,
    /// The requested output format
    #[builder(default)]
    format: Option<String>,
}

impl ListArgs {
    fn validate(&self) -> Result<(), Error> {
        if !self.me {
            Err(MissingFlag {
                command: SQUEUE,
                flag: "--me",
            })
        } else if !self.noheader {
            Err(MissingFlag {
                command: SQUEUE,
                flag: "--noheader",
            })
        } else if self.format.is_none() {
            Err(MissingFlag {
                command: SQUEUE,
                flag: "-O",
            })
        } else {
            Ok(())
        }
    }
}

/// Replace the registry with the seed jobs
///
/// # Errors
/// * The registry cannot be written
///
pub fn reset<S: Store>(store: &S) -> Result<()> {
    let jobs = seed_jobs();
    store.save(&jobs)?;
    info!("registry reset to {} seed jobs", jobs.len());
    Ok(())
}

/// Append a pending job for the given batch script
///
/// The new id is one more than the largest existing id.  The job name is
/// the script's file name up to its first `.`.
///
/// # Errors
/// * The registry cannot be loaded or written
/// * An existing id is not numeric
/// * The registry is empty, so there is no id to follow
/// * The largest id has no successor
///
pub fn submit<S, W>(store: &S, script: &str, writer: &mut W) -> Result<()>
where
    S: Store,
    W: Write + ?Sized,
{
    let mut jobs = store.load()?;
    let id = next_id(&jobs)?.to_string();
    let name = job_name(script);
    let output_file = format!("{name}-{id}.out");
    debug!("submitting '{script}' as job {id} ({name})");
    let job = Job::builder()
        .id(id.clone())
        .name(name)
        .status("PENDING")
        .queue("[]")
        .node_list("batch")
        .batch_file(script)
        .output_file(output_file)
        .max_time("00:00:00")
        .cur_time("00:00:00")
        .build();
    jobs.push(job);
    store.save(&jobs)?;
    writeln!(writer, "Submitted batch job {id}")?;
    Ok(())
}

/// Print one line per job, in registry order
///
/// The columns are id, name, state, partition, node list, partition,
/// stdout, time limit, time used and command.
///
/// # Errors
/// * `--me`, `--noheader` or `-O` was not given
/// * The registry cannot be loaded
///
pub fn list<S, W>(store: &S, args: &ListArgs, writer: &mut W) -> Result<()>
where
    S: Store,
    W: Write + ?Sized,
{
    args.validate()?;
    if let Some(format) = args.format() {
        debug!("ignoring output format '{format}'");
    }
    for job in store.load()? {
        let columns: [&str; 10] = [
            job.id(),
            job.name(),
            job.status(),
            job.queue(),
            job.node_list(),
            job.queue(),
            job.output_file(),
            job.max_time(),
            job.cur_time(),
            job.batch_file(),
        ];
        writeln!(writer, "{}", columns.join(COLUMN_SEPARATOR))?;
    }
    Ok(())
}

/// Remove every job with the given id
///
/// Cancelling an unknown id is not an error.
///
/// # Errors
/// * The registry cannot be loaded or written
///
pub fn cancel<S, W>(store: &S, job_id: &str, writer: &mut W) -> Result<()>
where
    S: Store,
    W: Write + ?Sized,
{
    let mut jobs = store.load()?;
    let before = jobs.len();
    jobs.retain(|job| job.id() != job_id);
    debug!("cancel {job_id} removed {} jobs", before - jobs.len());
    store.save(&jobs)?;
    writeln!(writer, "Canceled job {job_id}")?;
    Ok(())
}

/// Print the details of every job whose id matches `value`
///
/// Only the `job` field is supported.
///
/// # Errors
/// * `field` is not `job`
/// * The registry cannot be loaded
///
pub fn inspect<S, W>(store: &S, field: &str, value: &str, writer: &mut W) -> Result<()>
where
    S: Store,
    W: Write + ?Sized,
{
    if field != JOB_FIELD {
        return Err(UnsupportedField {
            command: SCONTROL_SHOW,
            field: field.to_string(),
        }
        .into());
    }
    for job in store.load()?.iter().filter(|job| job.id() == value) {
        writeln!(writer, "JobId={}", job.id())?;
        writeln!(writer, "JobName={}", job.name())?;
        writeln!(writer, "JobState={}", job.status())?;
        writeln!(writer, "NodeList={}", job.node_list())?;
        writeln!(writer, "Partition={}", job.queue())?;
        writeln!(writer, "Command={}", job.batch_file())?;
        writeln!(writer, "StdOut={}", job.output_file())?;
        writeln!(writer, "Timelimit={}", job.max_time())?;
    }
    Ok(())
}

fn next_id(jobs: &[Job]) -> Result<i128, Error> {
    let ids = jobs
        .iter()
        .map(|job| {
            job.id().parse::<i128>().map_err(|source| NonNumericId {
                id: job.id().clone(),
                source,
            })
        })
        .collect::<Result<Vec<i128>, Error>>()?;
    let max = ids.into_iter().max().ok_or(NoJobs)?;
    max.checked_add(1).ok_or(IdOverflow { id: max })
}

// Only the first '.' counts, so 'a.b.sh' names the job 'a'
fn job_name(script: &str) -> String {
    let file_name = Path::new(script)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    file_name
        .split('.')
        .next()
        .unwrap_or_default()
        .to_string()
}
