//! Dimension expression evaluation
//!
//! Width and height flags accept either a bare number or a small arithmetic
//! expression (`+ - * /`, parentheses, unary minus) over a scope that binds
//! the symbolic constant `a4` to the corresponding A4 extent, e.g.
//! `a4 / 2` or `(a4 + 20) * 1.5`. Unknown identifiers and malformed syntax
//! are configuration errors raised before any document is touched.

use crate::types::{RestackError, Result};

/// Evaluate a dimension expression. `a4` is the value the symbolic page-size
/// constant resolves to (width or height of an A4 page depending on which
/// flag is being parsed).
pub fn eval_dimension(input: &str, a4: f32) -> Result<f32> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        a4,
    };
    let value = parser.expression()?;
    if parser.pos != tokens.len() {
        return Err(syntax_error(input));
    }
    if !value.is_finite() {
        return Err(RestackError::Config(format!(
            "expression '{input}' does not evaluate to a finite number"
        )));
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f32),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            ' ' | '\t' => {
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
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = start;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let text = &input[start..end];
                let value = text
                    .parse::<f32>()
                    .map_err(|_| RestackError::Config(format!("'{text}' is not a number")))?;
                tokens.push(Token::Number(value));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut end = start;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Ident(input[start..end].to_string()));
            }
            other => {
                return Err(RestackError::Config(format!(
                    "unexpected character '{other}' in expression '{input}'"
                )));
            }
        }
    }

    Ok(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    a4: f32,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expression(&mut self) -> Result<f32> {
        let mut value = self.term()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Plus => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Token::Minus => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f32> {
        let mut value = self.factor()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Star => {
                    self.pos += 1;
                    value *= self.factor()?;
                }
                Token::Slash => {
                    self.pos += 1;
                    value /= self.factor()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<f32> {
        match self.next() {
            Some(Token::Number(n)) => Ok(*n),
            Some(Token::Ident(name)) => {
                if name == "a4" {
                    Ok(self.a4)
                } else {
                    Err(RestackError::Config(format!(
                        "unknown identifier '{name}' in dimension expression"
                    )))
                }
            }
            Some(Token::Minus) => Ok(-self.factor()?),
            Some(Token::LParen) => {
                let value = self.expression()?;
                match self.next() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err(RestackError::Config(
                        "unbalanced parentheses in dimension expression".to_string(),
                    )),
                }
            }
            _ => Err(RestackError::Config(
                "empty or truncated dimension expression".to_string(),
            )),
        }
    }
}

fn syntax_error(input: &str) -> RestackError {
    RestackError::Config(format!("could not parse dimension expression '{input}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_number() {
        assert_eq!(eval_dimension("595", 595.0).unwrap(), 595.0);
        assert_eq!(eval_dimension("12.5", 595.0).unwrap(), 12.5);
    }

    #[test]
    fn test_scope_constant() {
        assert_eq!(eval_dimension("a4", 842.0).unwrap(), 842.0);
        assert_eq!(eval_dimension("a4 / 2", 842.0).unwrap(), 421.0);
        assert_eq!(eval_dimension("a4 * 2 + 10", 595.0).unwrap(), 1200.0);
    }

    #[test]
    fn test_precedence_and_parens() {
        assert_eq!(eval_dimension("2 + 3 * 4", 0.0).unwrap(), 14.0);
        assert_eq!(eval_dimension("(2 + 3) * 4", 0.0).unwrap(), 20.0);
        assert_eq!(eval_dimension("-(3 - 5) * 2", 0.0).unwrap(), 4.0);
    }

    #[test]
    fn test_unknown_identifier_fails() {
        assert!(eval_dimension("letter", 595.0).is_err());
        assert!(eval_dimension("a4 + foo", 595.0).is_err());
    }

    #[test]
    fn test_malformed_expression_fails() {
        assert!(eval_dimension("", 595.0).is_err());
        assert!(eval_dimension("2 +", 595.0).is_err());
        assert!(eval_dimension("(2 + 3", 595.0).is_err());
        assert!(eval_dimension("2 3", 595.0).is_err());
        assert!(eval_dimension("a4 @ 2", 595.0).is_err());
    }

    #[test]
    fn test_division_by_zero_rejected() {
        assert!(eval_dimension("1 / 0", 595.0).is_err());
    }
}
