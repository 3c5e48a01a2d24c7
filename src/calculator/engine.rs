//! The calculator state machine.
//!
//! Operands are kept as display strings. Binary operators evaluate left to
//! right: choosing a second operator folds the pending operation into the
//! display before the new one is captured, like a pocket calculator.

use super::format::{ERROR_DISPLAY, MAX_DISPLAY_LEN, format_result, parse_operand};
use super::input::Input;
use super::operation::Operation;
use crate::clock::{Clock, IdSource, SystemClock, UuidIds};
use crate::history::CalculationRecord;

/// Mutable state behind the display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculatorState {
    /// The value being entered or shown.
    pub display: String,
    /// Left operand captured when an operator was chosen.
    pub pending_operand: Option<String>,
    /// Operator waiting for its right operand.
    pub pending_operator: Option<Operation>,
    /// When set, the next digit starts a fresh number.
    pub awaiting_reset: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            pending_operand: None,
            pending_operator: None,
            awaiting_reset: false,
        }
    }
}

impl CalculatorState {
    /// Whether the display holds the division-by-zero sentinel.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }
}

/// Four-function calculator.
///
/// `C` and `I` stamp the records emitted by [`compute_result`]; tests swap
/// in a fixed clock and sequential ids.
///
/// [`compute_result`]: CalculatorEngine::compute_result
#[derive(Debug)]
pub struct CalculatorEngine<C = SystemClock, I = UuidIds> {
    state: CalculatorState,
    clock: C,
    ids: I,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Engine stamped with the wall clock and random UUIDs.
    pub fn new() -> Self {
        Self::with_sources(SystemClock, UuidIds)
    }
}

impl<C: Clock, I: IdSource> CalculatorEngine<C, I> {
    pub fn with_sources(clock: C, ids: I) -> Self {
        Self {
            state: CalculatorState::default(),
            clock,
            ids,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Secondary line shown while an operator is pending, e.g. `"7 ×"`.
    pub fn pending_line(&self) -> Option<String> {
        match (&self.state.pending_operand, self.state.pending_operator) {
            (Some(operand), Some(op)) => Some(format!("{} {}", operand, op.symbol())),
            _ => None,
        }
    }

    /// Apply one input. Returns the record of a completed calculation, if any.
    pub fn apply(&mut self, input: Input) -> Option<CalculationRecord> {
        match input {
            Input::Digit(digit) => self.enter_digit(digit),
            Input::DecimalPoint => self.enter_decimal_point(),
            Input::ToggleSign => self.toggle_sign(),
            Input::Percent => self.apply_percent(),
            Input::Operator(op) => self.choose_operator(op),
            Input::Equals => return self.compute_result(),
            Input::Clear => self.clear(),
            Input::Backspace => self.delete_last(),
        }
        None
    }

    /// Type a digit. Input beyond the display limit is dropped.
    pub fn enter_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        let state = &mut self.state;
        if state.display == "0" || state.awaiting_reset || state.is_error() {
            state.display = digit.to_string();
            state.awaiting_reset = false;
        } else if state.display.chars().count() < MAX_DISPLAY_LEN {
            state.display.push(digit);
        }
    }

    /// Type a decimal point. A second point in the same number is ignored.
    pub fn enter_decimal_point(&mut self) {
        let state = &mut self.state;
        if state.awaiting_reset || state.is_error() {
            state.display = "0.".to_string();
            state.awaiting_reset = false;
        } else if !state.display.contains('.') && state.display.chars().count() < MAX_DISPLAY_LEN {
            state.display.push('.');
        }
    }

    /// Flip the sign of the display. Applying it twice restores the display.
    pub fn toggle_sign(&mut self) {
        let state = &mut self.state;
        if state.is_error() {
            return;
        }
        state.display = match state.display.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", state.display),
        };
    }

    /// Divide the display by 100.
    pub fn apply_percent(&mut self) {
        let state = &mut self.state;
        if state.is_error() {
            return;
        }
        let value = parse_operand(&state.display) / 100.0;
        state.display = if value.is_nan() {
            ERROR_DISPLAY.to_string()
        } else {
            format_result(value)
        };
    }

    /// Select a binary operator, folding any pending operation first.
    pub fn choose_operator(&mut self, op: Operation) {
        if self.state.pending_operator.is_some() {
            // The intermediate step of a chain is not recorded.
            let _ = self.evaluate();
        }
        let state = &mut self.state;
        state.pending_operand = Some(state.display.clone());
        state.pending_operator = Some(op);
        state.awaiting_reset = true;
    }

    /// Evaluate the pending operation.
    ///
    /// Returns the record for the history log, or `None` when nothing was
    /// pending or the result is the `Error` sentinel.
    pub fn compute_result(&mut self) -> Option<CalculationRecord> {
        let (expression, result) = self.evaluate()?;
        let record = CalculationRecord {
            id: self.ids.next_id(),
            expression,
            result,
            timestamp: self.clock.now_millis(),
        };
        tracing::debug!(
            id = %record.id,
            expression = %record.expression,
            result = %record.result,
            "calculation completed"
        );
        Some(record)
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
    }

    /// Remove the last typed character.
    pub fn delete_last(&mut self) {
        let state = &mut self.state;
        if state.is_error() || state.display.chars().count() <= 1 {
            state.display = "0".to_string();
            return;
        }
        state.display.pop();
        if state.display == "-" {
            state.display = "0".to_string();
        }
    }

    /// Apply the pending operator to the display and reset the pending state.
    ///
    /// Returns `(expression, result)` unless nothing was pending or the
    /// computation failed.
    fn evaluate(&mut self) -> Option<(String, String)> {
        let state = &mut self.state;
        let (Some(operand), Some(op)) =
            (state.pending_operand.take(), state.pending_operator.take())
        else {
            return None;
        };

        let value = op.apply(parse_operand(&operand), parse_operand(&state.display));
        let expression = format!("{} {} {}", operand, op.symbol(), state.display);

        state.awaiting_reset = true;
        if value.is_nan() {
            tracing::debug!(%expression, "calculation failed");
            state.display = ERROR_DISPLAY.to_string();
            return None;
        }

        state.display = format_result(value);
        Some((expression, state.display.clone()))
    }
}
