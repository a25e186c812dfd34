//! Real and vector arithmetic.
//!
//! ```text
//! number := ('-' | '+') number | '(' real ')' | numeral
//! term   := number (('*' | '/') number)*        -- a '*' directly before '<' ends the term
//! real   := term (('+' | '-') term)*
//! vterm  := [real '*'] '<' real ',' real ',' real '>' (('*' | '/') number)*
//! vector := vterm (('+' | '-') vterm)*
//! ```

use math::hcm::{vec3, Vec3};

use crate::error::{ParseError, Result};
use crate::parser::SceneReader;
use crate::token::Token;

fn is_numeral(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_digit() || c == '.')
        && word.chars().filter(|c| *c == '.').count() <= 1
        && word.chars().any(|c| c.is_ascii_digit())
}

impl<'a> SceneReader<'a> {
    pub(crate) fn parse_number(&mut self) -> Result<f32> {
        let lexeme = self.tokens.next()?;
        match &lexeme.token {
            Some(Token::Minus) => Ok(-self.parse_number()?),
            Some(Token::Plus) => self.parse_number(),
            Some(Token::LParen) => {
                let r = self.parse_real()?;
                self.consume_next(Token::RParen)?;
                Ok(r)
            }
            Some(Token::Word(w)) if is_numeral(w) => w
                .parse::<f32>()
                .map_err(|_| ParseError::syntax("_Real_", &lexeme)),
            _ => Err(ParseError::syntax("_Real_", &lexeme)),
        }
    }

    pub(crate) fn parse_term(&mut self) -> Result<f32> {
        let mut r = self.parse_number()?;
        loop {
            let lexeme = self.tokens.next()?;
            if lexeme.is(&Token::Star) && !self.tokens.peek_is(&Token::LAngle)? {
                r *= self.parse_number()?;
            } else if lexeme.is(&Token::Slash) {
                r /= self.parse_number()?;
            } else {
                self.tokens.unget(lexeme);
                break;
            }
        }
        Ok(r)
    }

    pub(crate) fn parse_real(&mut self) -> Result<f32> {
        let mut r = self.parse_term()?;
        loop {
            let lexeme = self.tokens.next()?;
            if lexeme.is(&Token::Plus) {
                r += self.parse_term()?;
            } else if lexeme.is(&Token::Minus) {
                r -= self.parse_term()?;
            } else {
                self.tokens.unget(lexeme);
                break;
            }
        }
        Ok(r)
    }

    /// A real in degrees, returned in radians.
    pub(crate) fn parse_angle(&mut self) -> Result<f32> {
        Ok(self.parse_real()?.to_radians())
    }

    pub(crate) fn parse_triplet(&mut self) -> Result<Vec3> {
        self.consume_next(Token::LAngle)?;
        let x = self.parse_real()?;
        self.consume_next(Token::Comma)?;
        let y = self.parse_real()?;
        self.consume_next(Token::Comma)?;
        let z = self.parse_real()?;
        self.consume_next(Token::RAngle)?;
        Ok(vec3(x, y, z))
    }

    pub(crate) fn parse_vector_term(&mut self) -> Result<Vec3> {
        let mut coef = 1.0;
        if !self.tokens.peek_is(&Token::LAngle)? {
            coef = self.parse_real()?;
            self.consume_next(Token::Star)?;
        }
        let v = self.parse_triplet()?;
        loop {
            if self.accept(&Token::Star)? {
                coef *= self.parse_number()?;
            } else if self.accept(&Token::Slash)? {
                coef /= self.parse_number()?;
            } else {
                break;
            }
        }
        Ok(v * coef)
    }

    pub(crate) fn parse_vector(&mut self) -> Result<Vec3> {
        let mut v = self.parse_vector_term()?;
        loop {
            let lexeme = self.tokens.next()?;
            if lexeme.is(&Token::Plus) {
                v += self.parse_vector_term()?;
            } else if lexeme.is(&Token::Minus) {
                v = v - self.parse_vector_term()?;
            } else {
                self.tokens.unget(lexeme);
                break;
            }
        }
        Ok(v)
    }
}
