//! Skycast Library
//!
//! This module exposes the application modules for use in integration
//! tests.

pub mod app;
pub mod cli;
pub mod conditions;
pub mod data;
pub mod location;
pub mod search;
pub mod timefmt;
pub mod ui;
pub mod wind;
