//! Plan clock, configuration, and the per-tick construction cycle for the
//! Kolkhoz simulation.
//!
//! This crate owns the loop that composes the planning components:
//! advance the clock, roll the five-year plan over, detect demands, build
//! the queue, and filter the build menu.
//!
//! # Modules
//!
//! - [`clock`] -- Tick counter with derived calendar year and plan period.
//! - [`config`] -- Configuration loading from `kolkhoz-config.yaml` into
//!   strongly-typed structs.
//! - [`cycle`] -- [`ConstructionCycle`] and the [`TickPlan`] it produces.
//!
//! [`ConstructionCycle`]: cycle::ConstructionCycle
//! [`TickPlan`]: cycle::TickPlan

pub mod clock;
pub mod config;
pub mod cycle;
