use std::collections::{HashMap, VecDeque};
use std::fmt;

use logos::Logos;

use crate::error::{ParseError, Result};
use crate::token::Token;

/// A token together with the line it was read on. `token` is `None` at end of input.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Option<Token>,
    pub line: usize,
}

impl Lexeme {
    pub fn is(&self, t: &Token) -> bool {
        self.token.as_ref() == Some(t)
    }

    pub fn is_end(&self) -> bool {
        self.token.is_none()
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Some(t) => write!(f, "{}", t),
            None => write!(f, "_EOF_"),
        }
    }
}

/// Macro name to replacement body. Lives on the `Parser` so definitions made in one scene file
/// (or through `set_constant`) stay visible to later parses.
pub type MacroTable = HashMap<String, Vec<Token>>;

/// Lexes `source` completely, without macro expansion. Used for text that does not come from a
/// scene file, so errors carry line 0.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = vec![];
    while let Some(token) = lexer.next() {
        if token == Token::Error {
            return Err(ParseError::Syntax {
                expected: "_Token_".to_owned(),
                actual: lexer.slice().to_owned(),
                line: 0,
            });
        }
        tokens.push(token);
    }
    Ok(tokens)
}

/// The token source the grammar reads from.
///
/// Words naming a macro are replaced by the macro body as they are read; the replacement tokens
/// report the line of the use site and are not themselves expanded again. On top of that the
/// stream offers one token of peek plus one token of push-back, which is what the grammar needs
/// to look two tokens ahead at `* <`. A second push-back before the first is consumed panics.
pub struct TokenStream<'a> {
    source: &'a str,
    lexer: logos::Lexer<'a, Token>,
    macros: &'a mut MacroTable,
    line: usize,
    scanned: usize,
    expansion: VecDeque<Lexeme>,
    peeked: Option<Lexeme>,
    pushed_back: Option<Lexeme>,
}

impl<'a> TokenStream<'a> {
    pub fn new(source: &'a str, macros: &'a mut MacroTable) -> Self {
        Self {
            source,
            lexer: Token::lexer(source),
            macros,
            line: 1,
            scanned: 0,
            expansion: VecDeque::new(),
            peeked: None,
            pushed_back: None,
        }
    }

    /// Consumes and returns the next token.
    pub fn next(&mut self) -> Result<Lexeme> {
        self.take(true)
    }

    /// Like `next`, but a word naming a macro comes back as itself. Used for the name in
    /// `Define NAME { ... }` so that an existing macro can be redefined.
    pub fn next_unexpanded(&mut self) -> Result<Lexeme> {
        self.take(false)
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Result<&Lexeme> {
        if let Some(lexeme) = self.pushed_back.take() {
            return Ok(self.pushed_back.insert(lexeme));
        }
        let lexeme = match self.peeked.take() {
            Some(lexeme) => lexeme,
            None => self.pull(true)?,
        };
        Ok(self.peeked.insert(lexeme))
    }

    pub fn peek_is(&mut self, t: &Token) -> Result<bool> {
        Ok(self.peek()?.is(t))
    }

    /// Puts back a token taken with `next`. At most one token may be pushed back at a time, on
    /// top of a pending peek.
    pub fn unget(&mut self, lexeme: Lexeme) {
        assert!(
            self.pushed_back.is_none(),
            "unget of {} while {:?} is still pushed back",
            lexeme,
            self.pushed_back
        );
        self.pushed_back = Some(lexeme);
    }

    pub fn define(&mut self, name: String, body: Vec<Token>) {
        self.macros.insert(name, body);
    }

    fn take(&mut self, expand: bool) -> Result<Lexeme> {
        match self.pushed_back.take().or_else(|| self.peeked.take()) {
            Some(lexeme) => Ok(lexeme),
            None => self.pull(expand),
        }
    }

    fn pull(&mut self, expand: bool) -> Result<Lexeme> {
        loop {
            if let Some(lexeme) = self.expansion.pop_front() {
                return Ok(lexeme);
            }
            let token = match self.lexer.next() {
                Some(token) => token,
                None => {
                    self.advance_line(self.source.len());
                    return Ok(Lexeme {
                        token: None,
                        line: self.line,
                    });
                }
            };
            self.advance_line(self.lexer.span().start);
            let line = self.line;
            match token {
                Token::Error => {
                    return Err(ParseError::Syntax {
                        expected: "_Token_".to_owned(),
                        actual: self.lexer.slice().to_owned(),
                        line,
                    })
                }
                Token::Word(ref name) if expand && self.macros.contains_key(name) => {
                    if let Some(body) = self.macros.get(name) {
                        self.expansion.extend(body.iter().map(|t| Lexeme {
                            token: Some(t.clone()),
                            line,
                        }));
                    }
                }
                token => {
                    return Ok(Lexeme {
                        token: Some(token),
                        line,
                    })
                }
            }
        }
    }

    fn advance_line(&mut self, offset: usize) {
        if offset > self.scanned {
            self.line += self.source[self.scanned..offset].matches('\n').count();
            self.scanned = offset;
        }
    }
}
