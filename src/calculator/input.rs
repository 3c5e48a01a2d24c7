//! Input events feeding the calculator.
//!
//! Keyboard keys and on-screen buttons map onto the same [`Input`] values,
//! so both sources drive one engine without separate logic.

use super::operation::Operation;
use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;

/// One discrete calculator input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Digit(char),
    DecimalPoint,
    ToggleSign,
    Percent,
    Operator(Operation),
    Equals,
    Clear,
    Backspace,
}

impl Input {
    /// Map a keyboard key name (`"7"`, `"*"`, `"Enter"`, `"Escape"`, ...).
    pub fn from_key(key: &str) -> Option<Self> {
        let input = match key {
            "." => Self::DecimalPoint,
            "+" => Self::Operator(Operation::Add),
            "-" => Self::Operator(Operation::Subtract),
            "*" => Self::Operator(Operation::Multiply),
            "/" => Self::Operator(Operation::Divide),
            "Enter" | "=" => Self::Equals,
            "Escape" => Self::Clear,
            "Backspace" => Self::Backspace,
            _ => return single_digit(key).map(Self::Digit),
        };
        Some(input)
    }

    /// Map an on-screen button label (`"AC"`, `"+/-"`, `"%"`, `"÷"`, ...).
    pub fn from_button(label: &str) -> Option<Self> {
        let input = match label {
            "." => Self::DecimalPoint,
            "AC" => Self::Clear,
            "+/-" => Self::ToggleSign,
            "%" => Self::Percent,
            "÷" => Self::Operator(Operation::Divide),
            "×" => Self::Operator(Operation::Multiply),
            "-" => Self::Operator(Operation::Subtract),
            "+" => Self::Operator(Operation::Add),
            "=" => Self::Equals,
            _ => return single_digit(label).map(Self::Digit),
        };
        Some(input)
    }
}

fn single_digit(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => Some(c),
        _ => None,
    }
}

lazy_static! {
    /// One token at the start of a key line: a named key, a button label,
    /// or a single symbol. `+/-` is listed before `+` so it wins.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"^(?:(?i:enter|escape|esc|backspace|ac)|\+/-|[0-9.+\-*/×÷=%])"
    ).unwrap();

    static ref WHITESPACE: Regex = Regex::new(r"^\s+").unwrap();
}

/// Split a line of typed keys into inputs, e.g. `"12.5*4="` or `"7 × 8 Enter"`.
///
/// Fails on the first unrecognized token; nothing of the line is returned then.
pub fn parse_keys(line: &str) -> Result<Vec<Input>> {
    let mut inputs = Vec::new();
    let mut rest = line;

    while !rest.is_empty() {
        if let Some(space) = WHITESPACE.find(rest) {
            rest = &rest[space.end()..];
            continue;
        }

        let Some(token) = KEY_TOKEN.find(rest) else {
            let unknown = rest.split_whitespace().next().unwrap_or(rest);
            return Err(Error::UnknownKey(unknown.to_string()));
        };
        let input = token_input(token.as_str())
            .ok_or_else(|| Error::UnknownKey(token.as_str().to_string()))?;
        inputs.push(input);
        rest = &rest[token.end()..];
    }

    Ok(inputs)
}

fn token_input(token: &str) -> Option<Input> {
    match token.to_ascii_lowercase().as_str() {
        "enter" => Some(Input::Equals),
        "escape" | "esc" | "ac" => Some(Input::Clear),
        "backspace" => Some(Input::Backspace),
        // Keyboard spellings first, then button labels (`×`, `+/-`, `%`).
        other => Input::from_key(other).or_else(|| Input::from_button(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_keys() {
        assert_eq!(Input::from_key("7"), Some(Input::Digit('7')));
        assert_eq!(Input::from_key("."), Some(Input::DecimalPoint));
        assert_eq!(Input::from_key("*"), Some(Input::Operator(Operation::Multiply)));
        assert_eq!(Input::from_key("/"), Some(Input::Operator(Operation::Divide)));
        assert_eq!(Input::from_key("Enter"), Some(Input::Equals));
        assert_eq!(Input::from_key("="), Some(Input::Equals));
        assert_eq!(Input::from_key("Escape"), Some(Input::Clear));
        assert_eq!(Input::from_key("Backspace"), Some(Input::Backspace));
    }

    #[test]
    fn test_keyboard_has_no_sign_or_percent() {
        assert_eq!(Input::from_key("%"), None);
        assert_eq!(Input::from_key("F5"), None);
        assert_eq!(Input::from_key("77"), None);
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(Input::from_button("AC"), Some(Input::Clear));
        assert_eq!(Input::from_button("+/-"), Some(Input::ToggleSign));
        assert_eq!(Input::from_button("%"), Some(Input::Percent));
        assert_eq!(Input::from_button("×"), Some(Input::Operator(Operation::Multiply)));
        assert_eq!(Input::from_button("÷"), Some(Input::Operator(Operation::Divide)));
        assert_eq!(Input::from_button("0"), Some(Input::Digit('0')));
        assert_eq!(Input::from_button("*"), None);
    }

    #[test]
    fn test_parse_compact_line() {
        let inputs = parse_keys("12.5*4=").unwrap();
        assert_eq!(
            inputs,
            vec![
                Input::Digit('1'),
                Input::Digit('2'),
                Input::DecimalPoint,
                Input::Digit('5'),
                Input::Operator(Operation::Multiply),
                Input::Digit('4'),
                Input::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_named_keys_and_labels() {
        let inputs = parse_keys("7 × 8 enter AC +/- % Backspace ESC").unwrap();
        assert_eq!(
            inputs,
            vec![
                Input::Digit('7'),
                Input::Operator(Operation::Multiply),
                Input::Digit('8'),
                Input::Equals,
                Input::Clear,
                Input::ToggleSign,
                Input::Percent,
                Input::Backspace,
                Input::Clear,
            ]
        );
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = parse_keys("1 + sqrt 4").unwrap_err();
        assert!(matches!(err, Error::UnknownKey(ref key) if key == "sqrt"));
        assert!(parse_keys("").unwrap().is_empty());
    }
}
