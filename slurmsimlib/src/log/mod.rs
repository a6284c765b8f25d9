// Copyright (c) 2026 slurmsim developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

// Logging

use anyhow::Result;
use lazy_static::lazy_static;
use std::{
    io,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};
use time::format_description::well_known::Iso8601;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, time::UtcTime},
    prelude::__tracing_subscriber_SubscriberExt,
    registry,
    util::{SubscriberInitExt, TryInitError},
};

/// Supply quiet, verbose and allow tracing level setting
pub trait Config {
    /// Get the quiet count
    fn quiet(&self) -> u8;
    /// Get the verbose count
    fn verbose(&self) -> u8;
    /// Should we log the event target?
    fn target(&self) -> bool;
    /// Should we log the thread id?
    fn thread_id(&self) -> bool;
    /// Should we log the thread names?
    fn thread_names(&self) -> bool;
    /// Should we log the line numbers?
    fn line_numbers(&self) -> bool;
    /// Should we log the level?
    fn with_level(&self) -> bool;
    /// Get the effective level filter
    fn level(&self) -> Option<LevelFilter>;
    /// Allow initialization to set the effective level filter
    fn set_level(&mut self, level: LevelFilter) -> &mut Self;
}

lazy_static! {
    static ref INIT_LOCK: Arc<Mutex<AtomicBool>> = Arc::new(Mutex::new(AtomicBool::new(false)));
}

/// Initialize tracing
///
/// Events are written to stderr, stdout is reserved for command output.
///
/// # Errors
/// * An error can be thrown on registry initialization
///
pub fn initialize<T: Config>(config: &mut T) -> Result<()> {
    let init = match INIT_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    let level = get_effective_level(config.quiet(), config.verbose());
    let _ = config.set_level(level);
    if init.load(Ordering::SeqCst) {
        Ok(())
    } else {
        let format = fmt::layer()
            .compact()
            .with_writer(io::stderr)
            .with_level(config.with_level())
            .with_ansi(true)
            .with_target(config.target())
            .with_thread_ids(config.thread_id())
            .with_thread_names(config.thread_names())
            .with_line_number(config.line_numbers())
            .with_timer(UtcTime::new(Iso8601::DEFAULT));
        match registry().with(format).with(level).try_init() {
            Ok(()) => {
                init.store(true, Ordering::SeqCst);
                Ok(())
            }
            Err(e) => ok_on_test(e),
        }
    }
}

#[cfg(not(test))]
fn ok_on_test(e: TryInitError) -> Result<()> {
    Err(e.into())
}

#[cfg(test)]
#[allow(clippy::unnecessary_wraps, clippy::needless_pass_by_value)]
fn ok_on_test(_e: TryInitError) -> Result<()> {
    Ok(())
}

fn get_effective_level(quiet: u8, verbosity: u8) -> LevelFilter {
    match (quiet, verbosity) {
        (0, 0) => LevelFilter::WARN,
        (0, 1) => LevelFilter::INFO,
        (0, 2) => LevelFilter::DEBUG,
        (0, _) => LevelFilter::TRACE,
        (1, _) => LevelFilter::ERROR,
        _ => LevelFilter::OFF,
    }
}
