use crate::lexing::TokenKind;
use colored::*;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Severity {
    Error,
    // Warning,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

pub type DiagnosticResult<T> = Result<T, Diagnostic>;

impl Diagnostic {
    pub fn error(message: &str) -> Self {
        Diagnostic {
            severity: Severity::Error,
            message: String::from(message),
        }
    }

    pub fn expected_token(expected: TokenKind, got: TokenKind) -> Self {
        Diagnostic::error(&format!(
            "expected next token to be {}, got {} instead",
            expected, got
        ))
    }

    pub fn no_prefix_parse_fn(kind: TokenKind) -> Self {
        Diagnostic::error(&format!("no prefix parse function for {} found", kind))
    }

    pub fn invalid_integer(literal: &str) -> Self {
        Diagnostic::error(&format!("could not parse {} as integer", literal))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

pub trait DiagnosticString {
    fn diagnostic_string(&self) -> String;
}

impl DiagnosticString for [Diagnostic] {
    fn diagnostic_string(&self) -> String {
        self.iter()
            .map(|d| format!("  {}", d))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub trait Reporter {
    fn report(&self, diagnostic: Diagnostic);
}

pub struct DefaultReporter {}

impl DefaultReporter {
    pub fn new() -> Rc<Self> {
        Rc::new(DefaultReporter {})
    }
}

impl Reporter for DefaultReporter {
    fn report(&self, diagnostic: Diagnostic) {
        let header = match diagnostic.severity {
            Severity::Error => "• Error:".red().bold(),
        };
        println!("{} {}", header, diagnostic.message);
    }
}
