use std::fmt::Display;

use cursor::Line;
use itertools::Itertools;

/// Lexical errors. None of them stop the scan; they are handed to a [`Reporter`] and the
/// scanner carries on with the next character.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ScanErrorType {
    #[error("Unterminated String")]
    UnterminatedString,
    #[error("Unexpected character.")]
    UnexpectedCharacter(char),
}

/// Sink for diagnostics produced while scanning.
pub trait Reporter {
    fn report(&mut self, line: Line, message: &str);
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("[line {line}] Error: {message}")]
pub struct ScanError {
    pub line: Line,
    pub message: String,
}

impl ScanError {
    pub fn new(line: Line, message: impl ToString) -> Self {
        Self { line, message: message.to_string() }
    }
}

/// Collects every reported diagnostic, in order.
#[derive(thiserror::Error, Debug, Default, Clone, PartialEq, derive_more::Deref)]
pub struct ScanErrors(pub Vec<ScanError>);

impl Display for ScanErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join("\n"))
    }
}

impl Reporter for ScanErrors {
    fn report(&mut self, line: Line, message: &str) {
        self.0.push(ScanError::new(line, message));
    }
}

impl From<ScanError> for ScanErrors {
    fn from(e: ScanError) -> Self {
        Self(vec![e])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(ScanErrorType::UnterminatedString.to_string(), "Unterminated String");
        assert_eq!(ScanErrorType::UnexpectedCharacter('@').to_string(), "Unexpected character.");
    }

    #[test]
    fn collect_and_display() {
        let mut errors = ScanErrors::default();
        assert!(errors.is_empty());

        errors.report(Line(1), "Unexpected character.");
        errors.report(Line(3), "Unterminated String");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1], ScanError::new(Line(3), "Unterminated String"));
        assert_eq!(
            errors.to_string(),
            "[line 1] Error: Unexpected character.\n[line 3] Error: Unterminated String"
        );
    }
}
