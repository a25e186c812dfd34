use geometry::Modifier;
use math::hcm::Point3;
use shape::{InterpTriangle, Object, Plane, Shape, Triangle};

use crate::error::Result;
use crate::modifier::uniform;
use crate::parser::SceneReader;
use crate::token::Token;

impl<'a> SceneReader<'a> {
    /// Tries each shape in turn; `None` if the next token starts none of them.
    pub(crate) fn parse_shape(&mut self) -> Result<Option<Object>> {
        let object = if self.accept(&Token::KwBox)? {
            self.parse_box()?
        } else if self.accept(&Token::KwSphere)? {
            self.parse_sphere()?
        } else if self.accept(&Token::KwCone)? {
            self.parse_cone()?
        } else if self.accept(&Token::KwPlane)? {
            self.parse_plane()?
        } else if self.accept(&Token::KwTriangle)? {
            self.parse_triangle()?
        } else {
            return Ok(None);
        };
        Ok(Some(object))
    }

    /// Modifiers and material blocks, in any order, up to the closing brace.
    fn parse_object_modifiers(&mut self, object: &mut Object) -> Result<()> {
        loop {
            if let Some(step) = self.parse_modifier()? {
                object.apply_modifier(step);
            } else if !self.parsed_material(&mut object.material)? {
                return Ok(());
            }
        }
    }

    /// `Box { <corner> <opposite corner> modifiers }`
    fn parse_box(&mut self) -> Result<Object> {
        self.consume_next(Token::LBrace)?;
        let upper = self.parse_vector()?;
        let lower = self.parse_vector()?;
        let mut object = Object::new(Shape::Box);
        object.apply_modifier(Modifier::scaler((upper - lower) / 2.0));
        object.apply_modifier(Modifier::translater((upper + lower) / 2.0));
        self.parse_object_modifiers(&mut object)?;
        self.consume_next(Token::RBrace)?;
        Ok(object)
    }

    /// `Sphere { <center> radius modifiers }`
    fn parse_sphere(&mut self) -> Result<Object> {
        self.consume_next(Token::LBrace)?;
        let center = self.parse_vector()?;
        let radius = self.parse_real()?;
        let mut object = Object::new(Shape::Sphere);
        object.apply_modifier(uniform(radius));
        object.apply_modifier(Modifier::translater(center));
        self.parse_object_modifiers(&mut object)?;
        self.consume_next(Token::RBrace)?;
        Ok(object)
    }

    /// `Cone { (nocaps | modifier | material)* }`
    fn parse_cone(&mut self) -> Result<Object> {
        self.consume_next(Token::LBrace)?;
        let mut object = Object::new(Shape::Cone { has_caps: true });
        loop {
            if self.accept(&Token::KwNocaps)? {
                object.shape = Shape::Cone { has_caps: false };
            } else if let Some(step) = self.parse_modifier()? {
                object.apply_modifier(step);
            } else if !self.parsed_material(&mut object.material)? {
                break;
            }
        }
        self.consume_next(Token::RBrace)?;
        Ok(object)
    }

    /// `Plane { <point> <normal> modifiers }`
    fn parse_plane(&mut self) -> Result<Object> {
        self.consume_next(Token::LBrace)?;
        let point = self.parse_vector()?;
        let normal = self.parse_vector()?;
        let mut object = Object::new(Shape::Plane(Plane::new(point.into(), normal)));
        self.parse_object_modifiers(&mut object)?;
        self.consume_next(Token::RBrace)?;
        Ok(object)
    }

    /// `Triangle { <a> <b> <c> [<na> <nb> <nc>] modifiers }`
    ///
    /// Normals are only looked for when the token after the third vertex opens a literal vector.
    fn parse_triangle(&mut self) -> Result<Object> {
        self.consume_next(Token::LBrace)?;
        let a = self.parse_vector()?;
        let b = self.parse_vector()?;
        let c = self.parse_vector()?;
        let vertices: [Point3; 3] = [a.into(), b.into(), c.into()];
        let shape = if self.tokens.peek_is(&Token::LAngle)? {
            let na = self.parse_vector()?;
            let nb = self.parse_vector()?;
            let nc = self.parse_vector()?;
            Shape::InterpTriangle(InterpTriangle::new(vertices, [na, nb, nc]))
        } else {
            Shape::Triangle(Triangle::new(vertices))
        };
        let mut object = Object::new(shape);
        self.parse_object_modifiers(&mut object)?;
        self.consume_next(Token::RBrace)?;
        Ok(object)
    }
}
