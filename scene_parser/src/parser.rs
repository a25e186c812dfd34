use std::path::{Path, PathBuf};

use log::{debug, info};

use light::Light;
use radiometry::color::Color;
use scene::Scene;

use crate::error::{ParseError, Result};
use crate::stream::{self, Lexeme, MacroTable, TokenStream};
use crate::token::{self, Token};

/// Reads scene description files into a `Scene`.
///
/// A `Parser` keeps its macro table between calls: constants registered with `set_constant` and
/// macros defined by one file remain visible to files parsed later with the same parser.
#[derive(Debug, Default)]
pub struct Parser {
    macros: MacroTable,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` as a macro expanding to the tokens of `value`, as if the scene contained
    /// `Define name { value }`. Replaces any earlier definition of `name`.
    ///
    /// `name` must lex as a single identifier word, so keywords such as `radius` or `x` are
    /// refused. Errors report line 0: the text does not come from a scene file.
    pub fn set_constant(&mut self, name: &str, value: &str) -> Result<()> {
        let is_name = matches!(
            stream::tokenize(name).as_deref(),
            Ok([Token::Word(w)]) if token::is_identifier(w)
        );
        if !is_name {
            return Err(ParseError::Syntax {
                expected: "_MacroName_".to_owned(),
                actual: name.to_owned(),
                line: 0,
            });
        }
        let body = stream::tokenize(value)?;
        debug!("constant {} = {}", name, value);
        self.macros.insert(name.to_owned(), body);
        Ok(())
    }

    /// Parses the scene file at `path`, adding everything it declares to `scene`. Mesh file names
    /// inside the scene are resolved relative to the scene file's directory.
    ///
    /// On error the scene may hold a partial result and should be discarded.
    pub fn parse_into<P: AsRef<Path>>(&mut self, path: P, scene: &mut Scene) -> Result<()> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_owned(),
            source,
        })?;
        info!("parsing scene file {}", path.display());
        let root_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        self.parse_source(&source, root_dir, scene)
    }

    /// Parses scene text held in memory. Mesh file names are resolved against the working
    /// directory.
    pub fn parse_str_into(&mut self, source: &str, scene: &mut Scene) -> Result<()> {
        self.parse_source(source, PathBuf::new(), scene)
    }

    fn parse_source(&mut self, source: &str, root_dir: PathBuf, scene: &mut Scene) -> Result<()> {
        let mut reader = SceneReader {
            tokens: TokenStream::new(source, &mut self.macros),
            root_dir,
        };
        reader.read_into(scene)?;
        info!(
            "scene has {} objects and {} lights",
            scene.objects.len(),
            scene.lights.len()
        );
        Ok(())
    }
}

/// Grammar state for one parse. The productions live in the sibling modules, each adding its
/// own `impl SceneReader` block.
pub(crate) struct SceneReader<'a> {
    pub(crate) tokens: TokenStream<'a>,
    pub(crate) root_dir: PathBuf,
}

impl<'a> SceneReader<'a> {
    /// Consumes the next token, which must be `expected`.
    pub(crate) fn consume_next(&mut self, expected: Token) -> Result<Lexeme> {
        let lexeme = self.tokens.next()?;
        if lexeme.is(&expected) {
            Ok(lexeme)
        } else {
            Err(ParseError::syntax(&expected.to_string(), &lexeme))
        }
    }

    /// Consumes the next token if it is `t`.
    pub(crate) fn accept(&mut self, t: &Token) -> Result<bool> {
        if self.tokens.peek_is(t)? {
            self.tokens.next()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Reads scene items until end of input or an `EOF` keyword, whichever comes first.
    pub(crate) fn read_into(&mut self, scene: &mut Scene) -> Result<()> {
        loop {
            let lexeme = self.tokens.peek()?;
            if lexeme.is_end() || lexeme.is(&Token::KwEof) {
                break;
            }
            if !self.parsed_scene_item(scene)? {
                let lexeme = self.tokens.next()?;
                return Err(ParseError::syntax("_SceneItem_", &lexeme));
            }
        }
        Ok(())
    }

    fn parsed_scene_item(&mut self, scene: &mut Scene) -> Result<bool> {
        if self.parsed_macro()? {
            return Ok(true);
        }
        if let Some(object) = self.parse_shape()? {
            scene.add_object(object);
            return Ok(true);
        }
        Ok(self.parsed_mesh(scene)?
            || self.parsed_light(scene)?
            || self.parsed_background(scene)?
            || self.parsed_camera(scene)?)
    }

    /// `Light { <position> <color> [intensity r] [radius r] [falloff] ... }`
    fn parsed_light(&mut self, scene: &mut Scene) -> Result<bool> {
        if !self.accept(&Token::KwLight)? {
            return Ok(false);
        }
        self.consume_next(Token::LBrace)?;
        let position = self.parse_vector()?;
        let color = self.parse_vector()?;
        let mut light = Light::new(position.into(), Color::from(color));
        while !self.tokens.peek_is(&Token::RBrace)? {
            let lexeme = self.tokens.next()?;
            if lexeme.is(&Token::KwIntensity) {
                light.intensity = self.parse_real()?;
            } else if lexeme.is(&Token::KwRadius) {
                light.radius = self.parse_real()?;
            } else if lexeme.is(&Token::KwFalloff) {
                light.falloff = true;
            } else {
                return Err(ParseError::syntax("_LightProperty_", &lexeme));
            }
        }
        self.consume_next(Token::RBrace)?;
        debug!("{}", light);
        scene.add_light(light);
        Ok(true)
    }

    /// `BGColor <color>`
    fn parsed_background(&mut self, scene: &mut Scene) -> Result<bool> {
        if !self.accept(&Token::KwBgColor)? {
            return Ok(false);
        }
        scene.background = Color::from(self.parse_vector()?);
        Ok(true)
    }

    /// `Camera { modifiers }`
    fn parsed_camera(&mut self, scene: &mut Scene) -> Result<bool> {
        if !self.accept(&Token::KwCamera)? {
            return Ok(false);
        }
        self.consume_next(Token::LBrace)?;
        while let Some(step) = self.parse_modifier()? {
            scene.camera.apply_modifier(step);
        }
        self.consume_next(Token::RBrace)?;
        debug!("camera at {}", scene.camera.origin());
        Ok(true)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use math::hcm::point3;

    fn parse(src: &str) -> Result<Scene> {
        let mut scene = Scene::new();
        Parser::new().parse_str_into(src, &mut scene)?;
        Ok(scene)
    }

    fn syntax_error(src: &str) -> (String, String, usize) {
        match parse(src) {
            Err(ParseError::Syntax {
                expected,
                actual,
                line,
            }) => (expected, actual, line),
            other => panic!("expected a syntax error, got {:?}", other),
        }
    }

    #[test]
    fn empty_scene() {
        let scene = parse("  # nothing here\n").unwrap();
        assert!(scene.objects.is_empty());
        assert!(scene.lights.is_empty());
    }

    #[test]
    fn light_properties() {
        let scene =
            parse("Light { <1, 2, 3> <1, 1, 1> intensity 2 radius 0.5 falloff }").unwrap();
        let light = &scene.lights[0];
        assert_eq!(light.position, point3(1.0, 2.0, 3.0));
        assert_eq!(light.color, Color::white());
        assert_eq!(light.intensity, 2.0);
        assert_eq!(light.radius, 0.5);
        assert!(light.falloff);
    }

    #[test]
    fn light_defaults() {
        let scene = parse("Light { <0,0,0> <1,0,0> }").unwrap();
        assert_eq!(scene.lights[0].intensity, 1.0);
        assert!(!scene.lights[0].falloff);
    }

    #[test]
    fn unknown_light_property() {
        let (expected, actual, line) = syntax_error("Light { <0,0,0> <1,1,1>\n brightness 2 }");
        assert_eq!(expected, "_LightProperty_");
        assert_eq!(actual, "brightness");
        assert_eq!(line, 2);
    }

    #[test]
    fn unterminated_light() {
        let (expected, actual, _) = syntax_error("Light { <0,0,0> <1,1,1> intensity 3");
        assert_eq!(expected, "_LightProperty_");
        assert_eq!(actual, "_EOF_");
    }

    #[test]
    fn background_and_camera() {
        let scene = parse("BGColor <0.1, 0.2, 0.3>\nCamera { translate <0, 0, -5> }").unwrap();
        assert_eq!(scene.background, Color::new(0.1, 0.2, 0.3));
        assert_eq!(scene.camera.origin(), point3(0.0, 0.0, -5.0));
    }

    #[test]
    fn camera_rejects_materials() {
        let (expected, actual, _) = syntax_error("Camera { material { twosided } }");
        assert_eq!(expected, "}");
        assert_eq!(actual, "material");
    }

    #[test]
    fn stray_word() {
        let (expected, actual, line) = syntax_error("Sphere { <0,0,0> 1 }\n\nFoo");
        assert_eq!(expected, "_SceneItem_");
        assert_eq!(actual, "Foo");
        assert_eq!(line, 3);
    }

    #[test]
    fn eof_keyword_stops_reading() {
        let scene = parse("Sphere { <0,0,0> 1 }\nEOF\nthis is not parsed {").unwrap();
        assert_eq!(scene.objects.len(), 1);
    }

    #[test]
    fn constants() {
        let mut parser = Parser::new();
        parser.set_constant("RADIUS", "2").unwrap();
        parser.set_constant("ORIGIN", "<1, 0, 0>").unwrap();
        let mut scene = Scene::new();
        parser
            .parse_str_into("Sphere { ORIGIN RADIUS }", &mut scene)
            .unwrap();
        let b = scene.objects[0].bounds();
        assert_eq!(b.min(), point3(-1.0, -2.0, -2.0));
        assert_eq!(b.max(), point3(3.0, 2.0, 2.0));

        assert!(matches!(
            parser.set_constant("2BAD", "1"),
            Err(ParseError::Syntax { .. })
        ));
    }

    #[test]
    fn constant_names_must_be_plain_words() {
        let mut parser = Parser::new();
        for name in &["radius", "x", "center", "scale", "A B", "<", ""] {
            match parser.set_constant(name, "2") {
                Err(ParseError::Syntax {
                    expected,
                    actual,
                    line,
                }) => {
                    assert_eq!(expected, "_MacroName_");
                    assert_eq!(actual, *name);
                    assert_eq!(line, 0);
                }
                other => panic!("{:?} accepted as a constant name: {:?}", name, other),
            }
        }
        match parser.set_constant("SIZE", "1 @") {
            Err(ParseError::Syntax { expected, line, .. }) => {
                assert_eq!(expected, "_Token_");
                assert_eq!(line, 0);
            }
            other => panic!("{:?}", other),
        }

        // Nothing was registered, so the keyword still reads as a keyword.
        let mut scene = Scene::new();
        assert!(parser
            .parse_str_into("Sphere { <0, 0, 0> radius }", &mut scene)
            .is_err());
        parser.set_constant("R", "2").unwrap();
        parser
            .parse_str_into("Sphere { <0, 0, 0> R }", &mut scene)
            .unwrap();
        assert_eq!(scene.objects.len(), 1);
    }

    #[test]
    fn macros_outlive_a_parse() {
        let mut parser = Parser::new();
        let mut scene = Scene::new();
        parser
            .parse_str_into("Define R { 3 }", &mut scene)
            .unwrap();
        parser
            .parse_str_into("Sphere { <0,0,0> R }", &mut scene)
            .unwrap();
        assert_eq!(scene.objects[0].bounds().max(), point3(3.0, 3.0, 3.0));
    }
}
