// Copyright (c) 2026 slurmsim developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

// Job records

use crate::{constants::FIELD_COUNT, error::Error::FieldCount};
use anyhow::{Context, Result};
use getset::Getters;
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};
use typed_builder::TypedBuilder;

/// A single job in the registry
///
/// Every field is opaque text.  A record is stored as its nine fields
/// joined by single spaces, so no field may contain whitespace.
#[derive(Clone, Debug, Eq, Getters, Hash, PartialEq, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
#[getset(get = "pub")]
pub struct Job {
    /// The job id
    id: String,
    /// The job name
    name: String,
    /// The job state, i.e. PENDING, RUNNING, COMPLETED
    status: String,
    /// The partition the job runs in
    queue: String,
    /// The node list, kept verbatim (`[]`, `[node1]`)
    node_list: String,
    /// The submitted batch script
    batch_file: String,
    /// The file stdout is written to
    output_file: String,
    /// The time limit, `HH:MM:SS` or `D-HH:MM:SS`
    max_time: String,
    /// The elapsed time, same format as `max_time`
    cur_time: String,
}

impl Display for Job {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} {}",
            self.id,
            self.name,
            self.status,
            self.queue,
            self.node_list,
            self.batch_file,
            self.output_file,
            self.max_time,
            self.cur_time
        )
    }
}

impl FromStr for Job {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        match fields[..] {
            [id, name, status, queue, node_list, batch_file, output_file, max_time, cur_time] => {
                Ok(Job {
                    id: id.to_string(),
                    name: name.to_string(),
                    status: status.to_string(),
                    queue: queue.to_string(),
                    node_list: node_list.to_string(),
                    batch_file: batch_file.to_string(),
                    output_file: output_file.to_string(),
                    max_time: max_time.to_string(),
                    cur_time: cur_time.to_string(),
                })
            }
            _ => Err(FieldCount {
                expected: FIELD_COUNT,
                found: fields.len(),
            }),
        }
    }
}

/// Parse the contents of a job file, one record per line
///
/// # Errors
/// * A line that does not hold exactly nine fields, blank lines included
///
pub fn parse_jobs(contents: &str) -> Result<Vec<Job>> {
    contents
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            line.parse::<Job>()
                .with_context(|| format!("malformed record on line {}", idx + 1))
        })
        .collect()
}

/// Serialize jobs to the job file format, one newline-terminated record per job
#[must_use]
pub fn serialize_jobs(jobs: &[Job]) -> String {
    jobs.iter().map(|job| format!("{job}\n")).collect()
}

/// The fixed jobs installed by a registry reset
#[must_use]
pub fn seed_jobs() -> Vec<Job> {
    vec![
        Job::builder()
            .id("123456")
            .name("job1")
            .status("COMPLETED")
            .queue("batch")
            .node_list("[]")
            .batch_file("job1.sbatch")
            .output_file("job1.out")
            .max_time("1-00:00:00")
            .cur_time("01:37:16")
            .build(),
        Job::builder()
            .id("123457")
            .name("job2")
            .status("RUNNING")
            .queue("batch")
            .node_list("[node1]")
            .batch_file("job2.sbatch")
            .output_file("job2.out")
            .max_time("06:00:00")
            .cur_time("00:14:39")
            .build(),
        Job::builder()
            .id("123458")
            .name("job3")
            .status("PENDING")
            .queue("batch")
            .node_list("[]")
            .batch_file("more/job3.job")
            .output_file("job3.out")
            .max_time("00:15:00")
            .cur_time("00:00:00")
            .build(),
    ]
}
