// Copyright (c) 2026 slurmsim developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

// Registry persistence

use crate::{
    constants::{JOBS_PARSE, JOBS_READ, JOBS_WRITE},
    error::Error::MissingJobFile,
    job::{parse_jobs, serialize_jobs, Job},
};
use anyhow::{Context, Result};
use getset::Getters;
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::{debug, trace};

/// Loads and persists the whole registry at once
pub trait Store {
    /// Load every job, in registry order
    ///
    /// # Errors
    /// * The registry has never been written
    /// * The registry cannot be read or parsed
    ///
    fn load(&self) -> Result<Vec<Job>>;

    /// Replace the registry with the given jobs
    ///
    /// # Errors
    /// * The registry cannot be written
    ///
    fn save(&self, jobs: &[Job]) -> Result<()>;
}

/// A registry kept in a plain text file, one job per line
#[derive(Clone, Debug, Eq, Getters, PartialEq)]
#[getset(get = "pub")]
pub struct JobFile {
    /// The path to the backing file
    path: PathBuf,
}

impl JobFile {
    /// Create a job file store at the given path
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn ctx(&self, msg: &'static str) -> String {
        format!("{msg} {}", self.path.display())
    }
}

impl Store for JobFile {
    fn load(&self) -> Result<Vec<Job>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(MissingJobFile {
                    path: self.path.clone(),
                }
                .into())
            }
            Err(e) => return Err(e).with_context(|| self.ctx(JOBS_READ)),
        };
        trace!("read {} bytes from {}", contents.len(), self.path.display());
        let jobs = parse_jobs(&contents).with_context(|| self.ctx(JOBS_PARSE))?;
        debug!("loaded {} jobs from {}", jobs.len(), self.path.display());
        Ok(jobs)
    }

    fn save(&self, jobs: &[Job]) -> Result<()> {
        fs::write(&self.path, serialize_jobs(jobs)).with_context(|| self.ctx(JOBS_WRITE))?;
        debug!("saved {} jobs to {}", jobs.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{JobFile, Store};
    use crate::{error::Error, job::seed_jobs};
    use anyhow::{anyhow, Result};
    use assert_fs::{prelude::*, TempDir};

    #[test]
    fn save_then_load_works() -> Result<()> {
        let temp = TempDir::new()?;
        let store = JobFile::new(temp.child(".jobfile").path());
        store.save(&seed_jobs())?;
        assert_eq!(store.load()?, seed_jobs());
        temp.close()?;
        Ok(())
    }

    #[test]
    fn save_writes_one_line_per_job() -> Result<()> {
        let temp = TempDir::new()?;
        let child = temp.child(".jobfile");
        let store = JobFile::new(child.path());
        store.save(&seed_jobs()[..1])?;
        child.assert(
            "123456 job1 COMPLETED batch [] job1.sbatch job1.out 1-00:00:00 01:37:16\n",
        );
        temp.close()?;
        Ok(())
    }

    #[test]
    fn save_overwrites() -> Result<()> {
        let temp = TempDir::new()?;
        let store = JobFile::new(temp.child(".jobfile").path());
        store.save(&seed_jobs())?;
        store.save(&[])?;
        assert!(store.load()?.is_empty());
        temp.close()?;
        Ok(())
    }

    #[test]
    fn load_missing_file_fails() -> Result<()> {
        let temp = TempDir::new()?;
        let store = JobFile::new(temp.child("nope").path());
        match store.load() {
            Ok(_) => Err(anyhow!("this job file shouldn't exist!")),
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
    fn load_malformed_file_fails() -> Result<()> {
        let temp = TempDir::new()?;
        let child = temp.child(".jobfile");
        child.write_str("123456 job1 COMPLETED\n")?;
        let store = JobFile::new(child.path());
        match store.load() {
            Ok(_) => Err(anyhow!("this job file shouldn't parse!")),
            Err(e) => {
                assert!(matches!(
                    e.downcast_ref::<Error>(),
                    Some(Error::FieldCount { found: 3, .. })
                ));
                let chain = format!("{e:?}");
                assert!(chain.contains("Could not parse job file!"));
                assert!(chain.contains("malformed record on line 1"));
                Ok(())
            }
        }
    }

    #[test]
    fn path_is_kept() {
        let store = JobFile::new("/tmp/.jobfile");
        assert_eq!(store.path().to_str(), Some("/tmp/.jobfile"));
    }
}
