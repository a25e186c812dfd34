use log::{info, warn};

use material::Material;
use scene::Scene;
use shape::ObjectSet;

use crate::error::{ParseError, Result};
use crate::obj;
use crate::parser::SceneReader;
use crate::token::Token;

impl<'a> SceneReader<'a> {
    /// `OBJ { file (modifier | unit axis | center | material)* }`
    ///
    /// Every triangle of the mesh becomes a scene object. Modifiers act on all of them at once as
    /// they are read; the material is assigned to all of them after the block.
    pub(crate) fn parsed_mesh(&mut self, scene: &mut Scene) -> Result<bool> {
        if !self.accept(&Token::KwObj)? {
            return Ok(false);
        }
        self.consume_next(Token::LBrace)?;
        let file = self.tokens.next()?;
        let file_name = match &file.token {
            Some(Token::Word(name)) | Some(Token::QuotedString(name)) => name.clone(),
            _ => return Err(ParseError::syntax("_FileName_", &file)),
        };
        let path = self.root_dir.join(&file_name);
        let mut set = obj::read_obj(&path)?;

        let mut material = Material::default();
        loop {
            if let Some(step) = self.parse_modifier()? {
                set.apply_modifier(step);
            } else if !(self.parsed_set_modifier(&mut set)? || self.parsed_material(&mut material)?)
            {
                break;
            }
        }
        self.consume_next(Token::RBrace)?;

        set.set_material(&material);
        info!("{}: {} triangles added", path.display(), set.len());
        for object in set {
            scene.add_object(object);
        }
        Ok(true)
    }

    /// `unit x|y|z` or `center`.
    fn parsed_set_modifier(&mut self, set: &mut ObjectSet) -> Result<bool> {
        if self.accept(&Token::KwUnit)? {
            let at = self.tokens.peek()?.clone();
            let axis = self.parse_axis()?;
            if set.is_empty() {
                warn!("line {}: unit on an empty mesh ignored", at.line);
            } else if set.unit_axis(axis).is_none() {
                return Err(ParseError::syntax("_NonZeroExtent_", &at));
            }
            Ok(true)
        } else if self.accept(&Token::KwCenter)? {
            if set.center().is_none() {
                warn!("center on an empty or unbounded mesh ignored");
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
