use std::io::Write;
use std::time::{Duration, Instant};

use colours::{CYAN, GREEN, styled_writeln, styles};
use uuid::Uuid;

use crate::error::Result;
use crate::hasher::{CostParams, HashPrimitive};


pub const ITERATIONS: u32 = 1000;

// same working set and pass count for both phases, only lanes change
pub const MEMORY_COST_KIB: u32 = 65536;
pub const TIME_COST: u32 = 1;


#[derive(Debug, Clone, Copy)]
pub struct PhaseReport {
    pub parallelism: u32,
    pub iterations: u32,
    pub elapsed: Duration,
}

impl PhaseReport {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Hashes per second. Infinite if the clock did not advance.
    pub fn rate(&self) -> f64 {
        self.iterations as f64 / self.elapsed_secs()
    }
}


pub struct HardwareChecker<H> {
    hasher: H,
    iterations: u32,
}

impl<H: HashPrimitive> HardwareChecker<H> {
    pub fn new(hasher: H) -> Self {
        HardwareChecker { hasher, iterations: ITERATIONS }
    }

    /// Runs the single-core phase and then the phase over `cores` lanes.
    ///
    /// # Arguments
    /// * `out` - Where the report lines go, stdout in the binary.
    /// * `cores` - Lane count for the second phase, see [`available_cores`].
    ///
    /// # Returns
    /// * Both phase reports in the order they ran. The first error stops the run.
    pub fn run<W: Write>(&self, out: &mut W, cores: u32) -> Result<[PhaseReport; 2]> {
        // CPU single-core
        styled_writeln!(out, styles(&[CYAN]), "\nChecking CPU...")?;
        let single_core = self.check_cpu(out, 1)?;

        // CPU multi-core
        styled_writeln!(out, styles(&[CYAN]), "\nChecking CPU over {} cores...", cores)?;
        let multi_core = self.check_cpu(out, cores)?;

        Ok([single_core, multi_core])
    }

    /// Times `ITERATIONS` sequential hashes. `parallelism` is handed to the hash
    /// itself, the loop never runs hashes concurrently.
    pub fn check_cpu<W: Write>(&self, out: &mut W, parallelism: u32) -> Result<PhaseReport> {
        let cost = Self::cost(parallelism);
        styled_writeln!(
            out,
            styles(&[]),
            "Hash algorithm: {}; N = {}",
            self.hasher.describe(&cost),
            self.iterations
        )?;

        tracing::debug!("Starting {} hashes with parallelism {}", self.iterations, parallelism);
        let start = Instant::now();
        for _ in 0..self.iterations {
            self.calc_hash(parallelism)?;
        }
        let report = PhaseReport {
            parallelism,
            iterations: self.iterations,
            elapsed: start.elapsed(),
        };

        styled_writeln!(out, styles(&[]), "Took {:.2} sec", report.elapsed_secs())?;
        styled_writeln!(out, styles(&[GREEN]), "Result: {:.2} hashes/s", report.rate())?;

        tracing::info!(
            "CPU check with parallelism {} finished in {:?} ({:.2} hashes/s)",
            report.parallelism,
            report.elapsed,
            report.rate()
        );
        Ok(report)
    }

    /// Hashes a random UUID. The UUID is only filler input, never stored.
    pub fn calc_hash(&self, parallelism: u32) -> Result<String> {
        let password = Uuid::new_v4().to_string();
        self.hasher.hash(password.as_bytes(), &Self::cost(parallelism))
    }

    fn cost(parallelism: u32) -> CostParams {
        CostParams {
            memory_kib: MEMORY_COST_KIB,
            time_cost: TIME_COST,
            parallelism,
        }
    }
}


pub fn available_cores() -> u32 {
    match std::thread::available_parallelism() {
        Ok(cores) => u32::try_from(cores.get()).unwrap_or(u32::MAX),
        Err(err) => {
            tracing::warn!("Could not determine available parallelism: {}, assuming 1 core", err);
            1
        }
    }
}
