use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::lex::*;
use crate::ops::Operation;
use crate::parse::*;

#[derive(Debug, PartialEq, Error)]
pub enum CalcError {
    #[error("No value provided")]
    MissingValue,
    #[error("Empty input")]
    EmptyInput,
    #[error("Invalid number: {}", quoted(.0))]
    InvalidNumber(String),
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
    #[error("Division by zero is not allowed")]
    DivisionByZero,
}

#[derive(Debug, PartialEq, Error)]
pub enum EvaluatorError {
    #[error(transparent)]
    ParseError(ParseError),
    #[error(transparent)]
    CalcError(CalcError),
}

lazy_static! {
    // an underscore is only allowed between two digits: `1_000`, `1e1_0`
    static ref MISPLACED_UNDERSCORE_REGEX: Regex = Regex::new(r#"(^|\D)_|_(\D|$)"#).unwrap();
}

/// What a single input line asks the session to do.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Nothing,
    Exit,
    Help,
    Calculated { operation: Operation, value: f64 },
}

pub fn parse_number(value: Option<&str>) -> Result<f64, CalcError> {
    let value = value.ok_or(CalcError::MissingValue)?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CalcError::EmptyInput);
    }

    let invalid = || CalcError::InvalidNumber(value.to_string());

    if MISPLACED_UNDERSCORE_REGEX.is_match(trimmed) {
        return Err(invalid());
    }

    trimmed.replace('_', "").parse::<f64>().map_err(|_| invalid())
}

/// Quotes `text` for an error message: single quotes unless the text holds a
/// single quote and no double quote, with backslashes and control characters
/// escaped.
fn quoted(text: &str) -> String {
    let quote = match text.contains('\'') && !text.contains('"') {
        true => '"',
        false => '\'',
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);

    out
}

/// Parses both operands, then resolves `op` through the alias table and
/// applies it.
///
/// Returns the canonical operation together with the unrounded result.
pub fn evaluate(op: &str, left: &str, right: &str) -> Result<(Operation, f64), CalcError> {
    let lhs = parse_number(Some(left))?;
    let rhs = parse_number(Some(right))?;

    let operation =
        Operation::resolve(op).ok_or_else(|| CalcError::UnknownOperation(op.to_string()))?;

    Ok((operation, operation.apply(lhs, rhs)?))
}

pub fn eval(text: &str) -> Result<Outcome, EvaluatorError> {
    let tokens = lex(text);
    let cmd = parse(&tokens)?;

    match cmd {
        Cmd::Blank => Ok(Outcome::Nothing),
        Cmd::Exit => Ok(Outcome::Exit),
        Cmd::Help => Ok(Outcome::Help),
        Cmd::Calc(Request { op, left, right }) => {
            let (operation, value) = evaluate(op, left, right)?;
            Ok(Outcome::Calculated { operation, value })
        }
    }
}

impl From<ParseError> for EvaluatorError {
    fn from(value: ParseError) -> Self {
        EvaluatorError::ParseError(value)
    }
}

impl From<CalcError> for EvaluatorError {
    fn from(value: CalcError) -> Self {
        EvaluatorError::CalcError(value)
    }
}
