//! Safe arithmetic evaluation for matched fragments.
//!
//! A small recursive-descent parser over the grammar
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := ['-'] (number | '(' expr ')')
//! number := digits ['.' digits]
//! ```
//!
//! There is no dynamic code evaluation anywhere in this path: anything
//! outside the grammar fails with a typed [`EvalError`], so untrusted note
//! text can never execute more than four-function arithmetic.

use thiserror::Error;

/// Maximum parenthesis nesting depth accepted by the parser.
///
/// Keeps pathological input (thousands of nested parens) from exhausting
/// the call stack.
const MAX_NESTING_DEPTH: usize = 64;

/// Errors produced while tokenizing, parsing, or evaluating an expression.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvalError {
    /// The input contained no tokens.
    #[error("empty expression")]
    Empty,
    /// A character outside the arithmetic token set was encountered.
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    /// A token appeared where the grammar does not allow one. Carries the
    /// index of the offending token, not a character offset into the input.
    #[error("unexpected token at token index {0}")]
    UnexpectedToken(usize),
    /// Input ended in the middle of an expression.
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    /// A number literal could not be parsed (e.g. `".5"`, `"1."`, `"1.2.3"`).
    #[error("malformed number")]
    MalformedNumber,
    /// The right-hand side of a division evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Parentheses nested deeper than the supported limit.
    #[error("expression nested too deeply")]
    TooDeep,
    /// The result overflowed to infinity or was not a number.
    #[error("result is not a finite number")]
    NotFinite,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// Evaluate an arithmetic expression.
///
/// Returns a finite `f64` on success. Any syntactic or arithmetic problem
/// is reported as an [`EvalError`]; this function never panics on any input.
pub fn evaluate_expression(input: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;

    // Trailing tokens (e.g. "1 2" or "3)") are a syntax error.
    if parser.pos != tokens.len() {
        return Err(EvalError::UnexpectedToken(parser.pos));
    }

    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NotFinite)
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            _ if c.is_whitespace() => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            _ if c.is_ascii_digit() => {
                let mut end = start;
                while let Some(&(idx, d)) = chars.peek() {
                    if d.is_ascii_digit() {
                        end = idx + d.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                // Optional fraction; the dot requires at least one digit after it.
                if let Some(&(_, '.')) = chars.peek() {
                    chars.next();
                    let mut frac_digits = 0;
                    while let Some(&(idx, d)) = chars.peek() {
                        if d.is_ascii_digit() {
                            end = idx + d.len_utf8();
                            frac_digits += 1;
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    if frac_digits == 0 {
                        return Err(EvalError::MalformedNumber);
                    }
                }
                let literal = &input[start..end];
                let value = literal.parse::<f64>().map_err(|_| EvalError::MalformedNumber)?;
                tokens.push(Token::Number(value));
            }
            // A dot with no integer part ahead of it is not a valid number.
            '.' => return Err(EvalError::MalformedNumber),
            _ => return Err(EvalError::UnexpectedChar(c)),
        }
    }

    Ok(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Result<Token, EvalError> {
        let token = self.tokens.get(self.pos).copied().ok_or(EvalError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.factor()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    value *= self.factor()?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    let rhs = self.factor()?;
                    if rhs == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    value /= rhs;
                }
                _ => return Ok(value),
            }
        }
    }

    fn factor(&mut self) -> Result<f64, EvalError> {
        let negate = if self.peek() == Some(Token::Minus) {
            self.pos += 1;
            true
        } else {
            false
        };

        let value = match self.next()? {
            Token::Number(n) => n,
            Token::LParen => {
                self.depth += 1;
                if self.depth > MAX_NESTING_DEPTH {
                    return Err(EvalError::TooDeep);
                }
                let inner = self.expr()?;
                match self.next()? {
                    Token::RParen => {}
                    _ => return Err(EvalError::UnexpectedToken(self.pos - 1)),
                }
                self.depth -= 1;
                inner
            }
            _ => return Err(EvalError::UnexpectedToken(self.pos - 1)),
        };

        Ok(if negate { -value } else { value })
    }
}
