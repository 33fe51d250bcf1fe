use thiserror::Error;
use tracing::debug;

use crate::lex::Token;

// <cmd> ::= <blank> | <exit> | <help> | <calc>
// <exit> ::= exit | quit
// <help> ::= help | h | ?
// <calc> ::= <op> <value> <value>

// add 2 3
// * 4 5
// DIV 10 2
// quit

#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("expected 3 tokens: <operation> <num1> <num2>")]
    WrongTokenCount,
}

#[derive(Debug, PartialEq)]
pub enum Cmd<'text> {
    Blank,
    Exit,
    Help,
    Calc(Request<'text>),
}

/// One arithmetic request, borrowed from the input line.
#[derive(Debug, PartialEq)]
pub struct Request<'text> {
    pub op: &'text str,
    pub left: &'text str,
    pub right: &'text str,
}

pub fn parse<'text>(tokens: &[Token<'text>]) -> Result<Cmd<'text>, ParseError> {
    match tokens.first() {
        None => Ok(Cmd::Blank),
        Some(Token::Keyword(word)) => match word.to_lowercase().as_str() {
            "exit" | "quit" => Ok(Cmd::Exit),
            "help" | "h" | "?" => Ok(Cmd::Help),
            _ => parse_calc(tokens),
        },
        Some(Token::Value(_)) => parse_calc(tokens),
    }
}

fn parse_calc<'text>(tokens: &[Token<'text>]) -> Result<Cmd<'text>, ParseError> {
    let [op, left, right] = tokens else {
        debug!(found = tokens.len(), "wrong number of tokens");
        return Err(ParseError::WrongTokenCount);
    };

    Ok(Cmd::Calc(Request {
        op: op.text(),
        left: left.text(),
        right: right.text(),
    }))
}
