use itertools::Itertools;
use log::debug;

use crate::error::{ParseError, Result};
use crate::parser::SceneReader;
use crate::token::{self, Token};

impl<'a> SceneReader<'a> {
    /// `Define NAME { tokens }`
    ///
    /// The body runs to the matching close brace; nested braces are kept in the body. Macros used
    /// inside the body are expanded once, when the definition is read.
    pub(crate) fn parsed_macro(&mut self) -> Result<bool> {
        if !self.accept(&Token::KwDefine)? {
            return Ok(false);
        }
        let name_lexeme = self.tokens.next_unexpanded()?;
        let name = match &name_lexeme.token {
            Some(Token::Word(w)) if token::is_identifier(w) => w.clone(),
            _ => return Err(ParseError::syntax("_MacroName_", &name_lexeme)),
        };
        self.consume_next(Token::LBrace)?;

        let mut depth = 1;
        let mut body = vec![];
        loop {
            let lexeme = self.tokens.next()?;
            if lexeme.is_end() {
                return Err(ParseError::syntax("}", &lexeme));
            } else if lexeme.is(&Token::LBrace) {
                depth += 1;
            } else if lexeme.is(&Token::RBrace) {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            body.extend(lexeme.token);
        }
        debug!("macro {} = {}", name, body.iter().join(" "));
        self.tokens.define(name, body);
        Ok(true)
    }
}
