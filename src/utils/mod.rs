//! Utility functions and helpers.

pub mod coerce;
