//! A four-function calculator with a bounded, session-scoped history.
//!
//! [`calculator::CalculatorEngine`] owns the display state machine and
//! emits a [`history::CalculationRecord`] for every completed calculation;
//! [`session::Session`] wires those records into a [`history::HistoryLog`].

pub mod calculator;
pub mod clock;
pub mod config;
pub mod error;
pub mod history;
pub mod session;

pub use error::{Error, Result};
