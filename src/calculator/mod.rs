//! Four-function calculator.
//!
//! This module provides:
//! - The display state machine driven by digit, operator, and equals input
//! - Mapping from keyboard keys and button labels to inputs
//! - Operand parsing and result formatting
//! - Copying values to the clipboard

mod clipboard;
mod engine;
mod format;
mod input;
mod operation;

pub use clipboard::copy_to_clipboard;
pub use engine::{CalculatorEngine, CalculatorState};
pub use format::{ERROR_DISPLAY, MAX_DISPLAY_LEN, format_number, parse_operand};
pub use input::{Input, parse_keys};
pub use operation::Operation;
