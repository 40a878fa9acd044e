use cursor::Cursor;
pub use cursor::Line;

mod error;
pub use error::{Reporter, ScanError, ScanErrorType, ScanErrors};

pub mod token;
pub use token::{Literal, Token, TokenType};

use TokenType::*;

/// Single-pass scanner turning source text into tokens.
///
/// `start` marks the beginning of the lexeme currently being scanned, `current` the next unread
/// character. Both carry their own line, so a token is always attributed to the line its first
/// character is on, even if the lexeme spans several lines.
pub struct Scanner<'a> {
    start: Cursor<'a>,
    current: Cursor<'a>,
    tokens: Vec<Token<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        let cursor = Cursor::new(source);
        Self { start: cursor.clone(), current: cursor, tokens: Vec::new() }
    }

    /// Scans the whole source. Lexical errors go to `reporter` and never abort the scan, so the
    /// returned tokens always end with exactly one EOF token.
    pub fn scan_tokens(mut self, reporter: &mut dyn Reporter) -> Vec<Token<'a>> {
        loop {
            self.start = self.current.clone();
            let Some(c) = self.current.next() else {
                break;
            };

            match c {
                '(' => self.add_token(LeftParen),
                ')' => self.add_token(RightParen),
                '{' => self.add_token(LeftBrace),
                '}' => self.add_token(RightBrace),
                ',' => self.add_token(Comma),
                '.' => self.add_token(Dot),
                '-' => self.add_token(Minus),
                '+' => self.add_token(Plus),
                ';' => self.add_token(Semicolon),
                '*' => self.add_token(Star),
                #[cfg(feature = "ternary")]
                '?' => self.add_token(Question),
                #[cfg(feature = "ternary")]
                ':' => self.add_token(Colon),

                '!' => {
                    let kind = if self.current.advance_if('=') { BangEqual } else { Bang };
                    self.add_token(kind)
                }
                '=' => {
                    let kind = if self.current.advance_if('=') { EqualEqual } else { Equal };
                    self.add_token(kind)
                }
                '<' => {
                    let kind = if self.current.advance_if('=') { LessEqual } else { Less };
                    self.add_token(kind)
                }
                '>' => {
                    let kind = if self.current.advance_if('=') { GreaterEqual } else { Greater };
                    self.add_token(kind)
                }

                '/' => {
                    if self.current.advance_if('/') {
                        // Comment, the newline is left for the next iteration
                        self.current.advance_while(|c| c != '\n');
                    } else {
                        self.add_token(Slash)
                    }
                }

                ' ' | '\r' | '\t' | '\n' => (),

                '"' => self.string(reporter),

                d if d.is_ascii_digit() => self.number(),

                c if is_alpha(c) => self.identifier(),

                c => self.error(reporter, self.start.line(), ScanErrorType::UnexpectedCharacter(c)),
            }
        }

        let eof = Token::eof(self.current.line());
        log::trace!("Scanned {:?}", eof);
        self.tokens.push(eof);
        self.tokens
    }

    fn lexeme(&self) -> &'a str {
        self.start.slice_until(&self.current)
    }

    fn add_token(&mut self, kind: TokenType) {
        self.push_token(kind, None)
    }

    fn push_token(&mut self, kind: TokenType, literal: Option<Literal<'a>>) {
        let token = Token::new(kind, self.lexeme(), literal, self.start.line());
        log::trace!("Scanned {:?}", token);
        self.tokens.push(token);
    }

    fn error(&self, reporter: &mut dyn Reporter, line: Line, error: ScanErrorType) {
        log::debug!("[line {}] {:?}", line, error);
        reporter.report(line, &error.to_string());
    }

    fn string(&mut self, reporter: &mut dyn Reporter) {
        self.current.advance_while(|c| c != '"');

        if self.current.is_at_end() {
            self.error(reporter, self.current.line(), ScanErrorType::UnterminatedString);
            return;
        }

        // The closing '"'
        self.current.next();

        let lexeme = self.lexeme();
        let value = &lexeme[1..lexeme.len() - 1];
        self.push_token(String, Some(Literal::Str(value)));
    }

    fn number(&mut self) {
        self.current.advance_while(|c| c.is_ascii_digit());

        // A trailing '.' is not part of the number, e.g. `3.` is NUMBER DOT
        if self.current.peek() == Some('.')
            && self.current.peek_next().map_or(false, |c| c.is_ascii_digit())
        {
            self.current.next();
            self.current.advance_while(|c| c.is_ascii_digit());
        }

        // Digits with an optional fraction always parse, overly long ones round to infinity
        if let Ok(value) = self.lexeme().parse() {
            self.push_token(Number, Some(Literal::Number(value)));
        }
    }

    fn identifier(&mut self) {
        self.current.advance_while(is_alphanumeric);
        let kind = TokenType::keyword(self.lexeme()).unwrap_or(Identifier);
        self.add_token(kind)
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}
