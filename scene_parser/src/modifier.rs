use geometry::Modifier;
use math::hcm::Vec3;

use crate::error::{ParseError, Result};
use crate::parser::SceneReader;
use crate::token::Token;

impl<'a> SceneReader<'a> {
    /// Reads one modifier if the next token starts one:
    ///
    /// ```text
    /// translate <v> | scale <v> | rotate (x|y|z) degrees | pinch m n
    /// ```
    ///
    /// The returned step is meant to be composed after whatever the target already carries.
    pub(crate) fn parse_modifier(&mut self) -> Result<Option<Modifier>> {
        let lexeme = self.tokens.next()?;
        let step = if lexeme.is(&Token::KwTranslate) {
            Modifier::translater(self.parse_vector()?)
        } else if lexeme.is(&Token::KwScale) {
            Modifier::scaler(self.parse_vector()?)
        } else if lexeme.is(&Token::KwRotate) {
            let axis = self.parse_axis()?;
            // Positive angles turn clockwise when looking down the axis towards the origin.
            let angle = math::new_rad(-self.parse_angle()?);
            match axis {
                0 => Modifier::rotater_x(angle),
                1 => Modifier::rotater_y(angle),
                _ => Modifier::rotater_z(angle),
            }
        } else if lexeme.is(&Token::KwPinch) {
            let m = self.parse_real()?;
            let n = self.parse_real()?;
            Modifier::pincher(m, n)
        } else {
            self.tokens.unget(lexeme);
            return Ok(None);
        };
        Ok(Some(step))
    }

    pub(crate) fn parse_axis(&mut self) -> Result<usize> {
        let lexeme = self.tokens.next()?;
        lexeme
            .token
            .as_ref()
            .and_then(Token::axis)
            .ok_or_else(|| ParseError::syntax("_Axis_", &lexeme))
    }
}

/// Uniform scale by `s`.
pub(crate) fn uniform(s: f32) -> Modifier {
    Modifier::scaler(Vec3::splat(s))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::stream::{MacroTable, TokenStream};
    use geometry::Transform;
    use math::assert_close;
    use math::hcm::{point3, vec3, Point3};
    use std::path::PathBuf;

    fn modifiers(src: &str) -> Result<Modifier> {
        let mut macros = MacroTable::new();
        let mut reader = SceneReader {
            tokens: TokenStream::new(src, &mut macros),
            root_dir: PathBuf::new(),
        };
        let mut total = Modifier::identity();
        while let Some(step) = reader.parse_modifier()? {
            total = step * total;
        }
        Ok(total)
    }

    #[test]
    fn applied_in_written_order() {
        let scale_then_move = modifiers("scale <2, 2, 2> translate <1, 0, 0>").unwrap();
        assert_eq!(scale_then_move.apply(Point3::ORIGIN), point3(1.0, 0.0, 0.0));
        assert_eq!(
            scale_then_move.apply(point3(1.0, 0.0, 0.0)),
            point3(3.0, 0.0, 0.0)
        );

        let move_then_scale = modifiers("translate <1, 0, 0> scale <2, 2, 2>").unwrap();
        assert_eq!(move_then_scale.apply(Point3::ORIGIN), point3(2.0, 0.0, 0.0));
    }

    #[test]
    fn rotation_direction() {
        let m = modifiers("rotate z 90").unwrap();
        let p = m.apply(point3(1.0, 0.0, 0.0));
        assert_close!(Vec3::from(p), vec3(0.0, -1.0, 0.0));

        let m = modifiers("rotate y 90").unwrap();
        assert_close!(m.apply(Vec3::Z), vec3(-1.0, 0.0, 0.0));
    }

    #[test]
    fn pinch_shears_by_y() {
        let m = modifiers("pinch 0.5 2").unwrap();
        assert_eq!(m.apply(point3(0.0, 2.0, 0.0)), point3(1.0, 2.0, 4.0));
        assert_eq!(m.apply(point3(3.0, 0.0, 1.0)), point3(3.0, 0.0, 1.0));
    }

    #[test]
    fn bad_axis() {
        match modifiers("rotate w 30") {
            Err(ParseError::Syntax {
                expected, actual, ..
            }) => {
                assert_eq!(expected, "_Axis_");
                assert_eq!(actual, "w");
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn non_modifier_is_left_alone() {
        assert_eq!(modifiers("material { }").unwrap(), Modifier::identity());
        assert_eq!(uniform(3.0).apply(Vec3::ONE), Vec3::splat(3.0));
    }
}
