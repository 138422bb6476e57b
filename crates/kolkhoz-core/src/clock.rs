//! Plan clock: ticks, calendar years, and five-year-plan periods.
//!
//! The tick counter is the single source of truth. The calendar year and
//! the plan period are derived from it, never stored. The era is set
//! externally when the campaign advances.

use kolkhoz_types::Era;

use crate::config::PlanConfig;

/// Errors that can occur during clock operations.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Tick counter would overflow.
    #[error("tick counter overflow: cannot advance beyond u64::MAX")]
    TickOverflow,

    /// Invalid plan configuration (e.g. zero ticks per year).
    #[error("invalid plan configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

/// Campaign clock tracking ticks, years, plan periods, and the era.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanClock {
    /// Current tick number (0-indexed, incremented at the start of each tick).
    tick: u64,

    /// Current campaign era.
    era: Era,

    /// Ticks in one calendar year. At least 1.
    ticks_per_year: u64,

    /// Calendar years in one plan period. At least 1.
    years_per_plan: u64,

    /// Calendar year at tick 0.
    start_year: u64,
}

impl PlanClock {
    /// Create a clock at tick 0 in `era` from a plan configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if the configuration is invalid.
    pub fn new(config: &PlanConfig, era: Era) -> Result<Self, ClockError> {
        Self::from_parts(
            0,
            era,
            config.ticks_per_year,
            config.years_per_plan,
            config.start_year,
        )
    }

    /// Create a clock from explicit parameters (state restoration, tests).
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if `ticks_per_year` or
    /// `years_per_plan` is 0, or a plan period does not fit in `u64` ticks.
    pub fn from_parts(
        tick: u64,
        era: Era,
        ticks_per_year: u64,
        years_per_plan: u64,
        start_year: u64,
    ) -> Result<Self, ClockError> {
        if ticks_per_year == 0 {
            return Err(ClockError::InvalidConfig {
                reason: "ticks_per_year must be at least 1".to_owned(),
            });
        }
        if years_per_plan == 0 {
            return Err(ClockError::InvalidConfig {
                reason: "years_per_plan must be at least 1".to_owned(),
            });
        }
        if ticks_per_year.checked_mul(years_per_plan).is_none() {
            return Err(ClockError::InvalidConfig {
                reason: "ticks per plan period overflow".to_owned(),
            });
        }
        Ok(Self {
            tick,
            era,
            ticks_per_year,
            years_per_plan,
            start_year,
        })
    }

    /// Advance the clock by one tick. Returns the new tick number.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::TickOverflow`] if the tick counter would exceed
    /// `u64::MAX`.
    pub fn advance(&mut self) -> Result<u64, ClockError> {
        self.tick = self.tick.checked_add(1).ok_or(ClockError::TickOverflow)?;
        Ok(self.tick)
    }

    /// Return the current tick number.
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Return the current era.
    pub const fn era(&self) -> Era {
        self.era
    }

    /// Set the era (called by the simulation loop on era transitions).
    pub const fn set_era(&mut self, era: Era) {
        self.era = era;
    }

    /// Ticks in one plan period.
    pub const fn ticks_per_plan(&self) -> u64 {
        // Checked in the constructor.
        self.ticks_per_year.saturating_mul(self.years_per_plan)
    }

    /// Calendar year of the current tick.
    pub fn year(&self) -> u64 {
        let elapsed = self.tick.checked_div(self.ticks_per_year).unwrap_or(0);
        self.start_year.saturating_add(elapsed)
    }

    /// Zero-based index of the plan period containing the current tick.
    pub fn plan_period(&self) -> u64 {
        self.tick.checked_div(self.ticks_per_plan()).unwrap_or(0)
    }

    /// Ticks left before the next plan period begins.
    pub fn ticks_until_next_plan(&self) -> u64 {
        let offset = self.tick.checked_rem(self.ticks_per_plan()).unwrap_or(0);
        self.ticks_per_plan().saturating_sub(offset)
    }
}
