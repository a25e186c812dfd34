use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[error]
    Error,
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Whitespace,

    #[regex(r"#[^\n]*", logos::skip)]
    Comment,

    // Scene items
    // ----------------------------------------------------------------
    #[token("Define")]
    KwDefine,
    #[token("Box")]
    KwBox,
    #[token("Sphere")]
    KwSphere,
    #[token("Cone")]
    KwCone,
    #[token("Plane")]
    KwPlane,
    #[token("Triangle")]
    KwTriangle,
    #[token("OBJ")]
    KwObj,
    #[token("Light")]
    KwLight,
    #[token("BGColor")]
    KwBgColor,
    #[token("Camera")]
    KwCamera,
    #[token("EOF")]
    KwEof,

    // Shape and mesh options
    // ----------------------------------------------------------------
    #[token("nocaps")]
    KwNocaps,
    #[token("unit")]
    KwUnit,
    #[token("center")]
    KwCenter,

    // Material block and properties
    // ----------------------------------------------------------------
    #[token("material")]
    KwMaterial,
    #[token("invisible")]
    KwInvisible,
    #[token("shadowless")]
    KwShadowless,
    #[token("twosided")]
    KwTwosided,
    #[token("ambient")]
    KwAmbient,
    #[token("diffuse")]
    KwDiffuse,
    #[token("reflective")]
    KwReflective,
    #[token("refractive")]
    KwRefractive,
    #[token("specular")]
    KwSpecular,
    #[token("shininess")]
    KwShininess,

    // Modifiers
    // ----------------------------------------------------------------
    #[token("translate")]
    KwTranslate,
    #[token("scale")]
    KwScale,
    #[token("rotate")]
    KwRotate,
    #[token("pinch")]
    KwPinch,
    #[token("x")]
    KwX,
    #[token("y")]
    KwY,
    #[token("z")]
    KwZ,

    // Light properties
    // ----------------------------------------------------------------
    #[token("intensity")]
    KwIntensity,
    #[token("radius")]
    KwRadius,
    #[token("falloff")]
    KwFalloff,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("<")]
    LAngle,
    #[token(">")]
    RAngle,
    #[token(",")]
    Comma,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    /// Numerals, macro names and bare file names. Numerals are validated by the expression
    /// grammar, so malformed ones like `1.2.3` still lex as a single word.
    #[regex(r"[A-Za-z0-9_.]+", |lex| lex.slice().to_owned())]
    Word(String),
    #[regex("\"[^\"\n]*\"", |lex| lex.slice().trim_matches('\"').to_owned())]
    QuotedString(String),
}

impl Token {
    /// Returns the axis index for `x`, `y` and `z`.
    pub fn axis(&self) -> Option<usize> {
        match self {
            Token::KwX => Some(0),
            Token::KwY => Some(1),
            Token::KwZ => Some(2),
            _ => None,
        }
    }

    /// Returns `true` if the token is a word usable as a macro name.
    pub fn is_identifier(&self) -> bool {
        match self {
            Token::Word(w) => is_identifier(w),
            _ => false,
        }
    }
}

pub fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Token::Word(w) => return write!(f, "{}", w),
            Token::QuotedString(s) => return write!(f, "\"{}\"", s),
            Token::Error => "_Error_",
            Token::Whitespace => " ",
            Token::Comment => "#",
            Token::KwDefine => "Define",
            Token::KwBox => "Box",
            Token::KwSphere => "Sphere",
            Token::KwCone => "Cone",
            Token::KwPlane => "Plane",
            Token::KwTriangle => "Triangle",
            Token::KwObj => "OBJ",
            Token::KwLight => "Light",
            Token::KwBgColor => "BGColor",
            Token::KwCamera => "Camera",
            Token::KwEof => "EOF",
            Token::KwNocaps => "nocaps",
            Token::KwUnit => "unit",
            Token::KwCenter => "center",
            Token::KwMaterial => "material",
            Token::KwInvisible => "invisible",
            Token::KwShadowless => "shadowless",
            Token::KwTwosided => "twosided",
            Token::KwAmbient => "ambient",
            Token::KwDiffuse => "diffuse",
            Token::KwReflective => "reflective",
            Token::KwRefractive => "refractive",
            Token::KwSpecular => "specular",
            Token::KwShininess => "shininess",
            Token::KwTranslate => "translate",
            Token::KwScale => "scale",
            Token::KwRotate => "rotate",
            Token::KwPinch => "pinch",
            Token::KwX => "x",
            Token::KwY => "y",
            Token::KwZ => "z",
            Token::KwIntensity => "intensity",
            Token::KwRadius => "radius",
            Token::KwFalloff => "falloff",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LAngle => "<",
            Token::RAngle => ">",
            Token::Comma => ",",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
        };
        write!(f, "{}", text)
    }
}
