//! Status simulation: clock text and pseudo-random gauge readings

use chrono::{DateTime, TimeZone};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cyberusb_core::{GaugeReading, CPU_RANGE, DISK_RANGE, MEMORY_RANGE};

/// Format a time as 12-hour `HH:MM AM/PM`
pub fn format_clock<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%I:%M %p").to_string()
}

/// Source of gauge readings.
///
/// Only the simulated source ships; a real collector would implement this
/// and be handed to the engine instead.
pub trait GaugeSource: Send {
    fn sample(&mut self) -> GaugeReading;
}

/// Independent uniform draws within the documented ranges, no history
#[derive(Debug)]
pub struct SimulatedGauges<R: Rng + Send = StdRng> {
    rng: R,
}

impl SimulatedGauges<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SimulatedGauges<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send> GaugeSource for SimulatedGauges<R> {
    fn sample(&mut self) -> GaugeReading {
        GaugeReading {
            cpu: self.rng.gen_range(CPU_RANGE),
            memory: self.rng.gen_range(MEMORY_RANGE),
            disk: self.rng.gen_range(DISK_RANGE),
        }
    }
}
