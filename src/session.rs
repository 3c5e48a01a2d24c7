//! A calculator session: one engine feeding one history log.

use crate::calculator::{CalculatorEngine, Input};
use crate::clock::{Clock, IdSource, SystemClock, UuidIds};
use crate::history::{CalculationRecord, HistoryLog};

/// What the host renders after each input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionView {
    pub display: String,
    /// `"<operand> <symbol>"` while an operator is pending.
    pub pending: Option<String>,
    /// Records, newest first.
    pub history: Vec<CalculationRecord>,
}

pub struct Session<C = SystemClock, I = UuidIds> {
    engine: CalculatorEngine<C, I>,
    history: HistoryLog,
}

impl Session {
    pub fn new(history_capacity: usize) -> Self {
        Self::with_engine(CalculatorEngine::new(), history_capacity)
    }
}

impl<C: Clock, I: IdSource> Session<C, I> {
    pub fn with_engine(engine: CalculatorEngine<C, I>, history_capacity: usize) -> Self {
        Self {
            engine,
            history: HistoryLog::with_capacity(history_capacity),
        }
    }

    /// Apply one input; a completed calculation lands in the history.
    pub fn press(&mut self, input: Input) {
        tracing::debug!(?input, "input");
        if let Some(record) = self.engine.apply(input) {
            tracing::info!(expression = %record.expression, result = %record.result, "recorded calculation");
            self.history.append(record);
        }
    }

    pub fn press_all(&mut self, inputs: impl IntoIterator<Item = Input>) {
        for input in inputs {
            self.press(input);
        }
    }

    pub fn display(&self) -> &str {
        self.engine.display()
    }

    pub fn engine(&self) -> &CalculatorEngine<C, I> {
        &self.engine
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn clear_history(&mut self) {
        tracing::debug!(records = self.history.len(), "clearing history");
        self.history.clear();
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            display: self.engine.display().to_string(),
            pending: self.engine.pending_line(),
            history: self.history.list(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{ERROR_DISPLAY, Operation, parse_keys};
    use crate::clock::{FixedClock, SequentialIds};

    fn session() -> Session<FixedClock, SequentialIds> {
        let engine = CalculatorEngine::with_sources(FixedClock(42), SequentialIds::new());
        Session::with_engine(engine, 50)
    }

    #[test]
    fn test_equals_appends_to_history() {
        let mut session = session();
        session.press_all(parse_keys("7 × 8 =").unwrap());
        let view = session.view();
        assert_eq!(view.display, "56");
        assert_eq!(view.pending, None);
        assert_eq!(view.history.len(), 1);
        assert_eq!(view.history[0].expression, "7 × 8");
        assert_eq!(view.history[0].result, "56");
        assert_eq!(view.history[0].timestamp, 42);
    }

    #[test]
    fn test_pending_line_in_view() {
        let mut session = session();
        session.press_all([Input::Digit('9'), Input::Operator(Operation::Divide)]);
        assert_eq!(session.view().pending.as_deref(), Some("9 ÷"));
    }

    #[test]
    fn test_division_by_zero_not_recorded() {
        let mut session = session();
        session.press_all(parse_keys("5/0=").unwrap());
        assert_eq!(session.display(), ERROR_DISPLAY);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_history_newest_first() {
        let mut session = session();
        session.press_all(parse_keys("1+1= 2+2=").unwrap());
        let results: Vec<_> = session.history().iter().map(|r| r.result.clone()).collect();
        assert_eq!(results, ["4", "2"]);
        assert_eq!(session.history().latest().map(|r| r.id.as_str()), Some("calc-2"));
    }

    #[test]
    fn test_clear_history_keeps_display() {
        let mut session = session();
        session.press_all(parse_keys("3*3=").unwrap());
        session.clear_history();
        assert!(session.history().is_empty());
        assert_eq!(session.display(), "9");
    }
}
