// src/stress.rs
//! Stress testing on top of [`Failure`]
//!
//! Generates inputs from a seeded rng, runs a check on each one and keeps every input the check
//! failed on instead of stopping at the first.

use std::{
    any::Any,
    fmt::Debug,
    fs::{
        self,
        File,
    },
    io::{
        BufWriter,
        Write,
    },
    panic::{
        self,
        AssertUnwindSafe,
    },
    path::Path,
};

use anyhow::{
    Context,
    Result,
};
use rand::{
    SeedableRng,
    rngs::StdRng,
};
use serde::Serialize;
use tracing::{
    debug,
    info,
    instrument,
};

use crate::{
    config::StressConfig,
    failure::Failure,
    report,
};

#[derive(Debug, Clone)]
pub struct Stress {
    iterations: u64,
    seed:       u64,
    stop_after: Option<usize>,
    echo:       bool,
}

/// An input the check failed on
#[derive(Debug, Clone, Serialize)]
pub struct FailedCase {
    pub iteration:   u64,
    /// `Debug` rendering of the input
    pub input:       String,
    pub failure:     Failure,
    /// Diagnostic lines the check wrote before failing
    pub diagnostics: String,
}

#[derive(Debug, Default, Serialize)]
pub struct Summary {
    /// Number of inputs actually checked
    pub iterations: u64,
    pub failures:   Vec<FailedCase>,
}

impl Stress {
    pub fn new(iterations: u64, seed: u64) -> Self {
        Self {
            iterations,
            seed,
            stop_after: None,
            echo: true,
        }
    }

    pub fn from_config(config: &StressConfig) -> Self {
        Self {
            stop_after: config.stop_after,
            ..Self::new(config.iterations, config.seed)
        }
    }

    /// Stop once `n` failing inputs were collected
    pub fn stop_after(mut self, n: usize) -> Self {
        self.stop_after = Some(n);
        self
    }

    /// Whether diagnostics written by the check are passed on to stderr (default: yes)
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    #[instrument(skip(generate, check))]
    pub fn run<I, G, C>(&self, mut generate: G, check: C) -> Summary
    where
        I: Debug,
        G: FnMut(&mut StdRng) -> I,
        C: Fn(&I),
    {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut summary = Summary::default();

        for iteration in 0..self.iterations {
            let input = generate(&mut rng);
            summary.iterations += 1;

            let (outcome, diagnostics) =
                report::capture(|| panic::catch_unwind(AssertUnwindSafe(|| check(&input))));
            if self.echo && !diagnostics.is_empty() {
                report::emit(&diagnostics);
            }

            let Err(payload) = outcome else { continue };
            let failure = into_failure(payload);
            debug!("Iteration {iteration} failed with {failure} on {input:?}");
            summary.failures.push(FailedCase {
                iteration,
                input: format!("{input:?}"),
                failure,
                diagnostics,
            });

            if self.stop_after.is_some_and(|n| summary.failures.len() >= n) {
                info!("Stopping after {} failures", summary.failures.len());
                break;
            }
        }

        info!(
            "Checked {} inputs, {} failed",
            summary.iterations,
            summary.failures.len()
        );
        summary
    }
}

/// Plain panics count as failures too, without a location
fn into_failure(payload: Box<dyn Any + Send>) -> Failure {
    let payload = match payload.downcast::<Failure>() {
        | Ok(failure) => return *failure,
        | Err(payload) => payload,
    };

    let message = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_default();
    Failure::new(format!("panicked: {message}"), None)
}

impl Summary {
    pub fn passed(&self) -> bool { self.failures.is_empty() }

    /// Writes one JSON object per failed case
    pub fn write_jsonl(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create report directory {parent:?}"))?;
        }

        let file = File::create(path).with_context(|| format!("Failed to create report {path:?}"))?;
        let mut writer = BufWriter::new(file);
        for case in &self.failures {
            serde_json::to_writer(&mut writer, case)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        debug!("Wrote {} failed cases to {path:?}", self.failures.len());
        Ok(())
    }
}
