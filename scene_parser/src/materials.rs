use material::Material;
use radiometry::color::Color;

use crate::error::Result;
use crate::parser::SceneReader;
use crate::token::Token;

impl<'a> SceneReader<'a> {
    /// `material { property* }`, applied on top of `target`. Properties not mentioned keep their
    /// current value.
    pub(crate) fn parsed_material(&mut self, target: &mut Material) -> Result<bool> {
        if !self.accept(&Token::KwMaterial)? {
            return Ok(false);
        }
        self.consume_next(Token::LBrace)?;
        while self.parsed_material_property(target)? {}
        self.consume_next(Token::RBrace)?;
        Ok(true)
    }

    fn parsed_material_property(&mut self, mat: &mut Material) -> Result<bool> {
        let lexeme = self.tokens.next()?;
        match lexeme.token {
            Some(Token::KwInvisible) => mat.invisible = true,
            Some(Token::KwShadowless) => mat.shadowless = true,
            Some(Token::KwTwosided) => mat.twosided = true,
            Some(Token::KwAmbient) => mat.ambient = self.parse_color()?,
            Some(Token::KwDiffuse) => mat.diffuse = self.parse_color()?,
            Some(Token::KwReflective) => mat.reflective = self.parse_color()?,
            Some(Token::KwRefractive) => {
                mat.refractive = self.parse_color()?;
                mat.refractive_index = self.parse_real()?;
            }
            Some(Token::KwSpecular) => mat.specular = self.parse_real()?,
            Some(Token::KwShininess) => mat.shininess = self.parse_real()?,
            _ => {
                self.tokens.unget(lexeme);
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn parse_color(&mut self) -> Result<Color> {
        Ok(Color::from(self.parse_vector()?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ParseError;
    use crate::stream::{MacroTable, TokenStream};
    use std::path::PathBuf;

    fn material(src: &str) -> Result<(bool, Material)> {
        let mut macros = MacroTable::new();
        let mut reader = SceneReader {
            tokens: TokenStream::new(src, &mut macros),
            root_dir: PathBuf::new(),
        };
        let mut mat = Material::default();
        let parsed = reader.parsed_material(&mut mat)?;
        Ok((parsed, mat))
    }

    #[test]
    fn all_properties() {
        let (parsed, mat) = material(
            "material { invisible shadowless twosided ambient <0.1, 0.1, 0.1> \
             diffuse <1, 0, 0> reflective 0.5 * <1, 1, 1> refractive <0, 0, 1> 1.5 \
             specular 0.3 shininess 20 }",
        )
        .unwrap();
        assert!(parsed);
        assert!(mat.invisible && mat.shadowless && mat.twosided);
        assert_eq!(mat.ambient, Color::gray(0.1));
        assert_eq!(mat.diffuse, Color::new(1.0, 0.0, 0.0));
        assert_eq!(mat.reflective, Color::gray(0.5));
        assert_eq!(mat.refractive, Color::new(0.0, 0.0, 1.0));
        assert_eq!(mat.refractive_index, 1.5);
        assert_eq!(mat.specular, 0.3);
        assert_eq!(mat.shininess, 20.0);
    }

    #[test]
    fn empty_block_keeps_defaults() {
        let (parsed, mat) = material("material { }").unwrap();
        assert!(parsed);
        assert_eq!(mat, Material::default());
    }

    #[test]
    fn not_a_material() {
        let (parsed, _) = material("translate <1, 0, 0>").unwrap();
        assert!(!parsed);
    }

    #[test]
    fn unknown_property() {
        match material("material { glossy }") {
            Err(ParseError::Syntax {
                expected, actual, ..
            }) => {
                assert_eq!(expected, "}");
                assert_eq!(actual, "glossy");
            }
            other => panic!("{:?}", other),
        }
    }
}
