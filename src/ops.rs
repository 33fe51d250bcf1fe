use std::{collections::HashMap, fmt::Display};

use lazy_static::lazy_static;

use crate::eval::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

lazy_static! {
    static ref ALIASES: HashMap<&'static str, Operation> = {
        let mut aliases = HashMap::new();
        for op in Operation::ALL {
            for alias in op.aliases() {
                aliases.insert(*alias, op);
            }
        }
        aliases
    };
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
    ];

    /// Canonical name of the operation.
    pub fn key(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
        }
    }

    /// Lowercase tokens accepted for this operation, canonical key first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Operation::Add => &["add", "+", "plus"],
            Operation::Sub => &["sub", "-", "minus"],
            Operation::Mul => &["mul", "*", "x", "times"],
            Operation::Div => &["div", "/", "divide"],
        }
    }

    /// Looks up a user supplied token, ignoring case and surrounding whitespace.
    pub fn resolve(token: &str) -> Option<Operation> {
        ALIASES.get(token.trim().to_lowercase().as_str()).copied()
    }

    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Operation::Add => Ok(lhs + rhs),
            Operation::Sub => Ok(lhs - rhs),
            Operation::Mul => Ok(lhs * rhs),
            Operation::Div if rhs == 0.0 => Err(CalcError::DivisionByZero),
            Operation::Div => Ok(lhs / rhs),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
