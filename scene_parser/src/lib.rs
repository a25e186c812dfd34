//! Reader for the text scene description format.
//!
//! A scene file is a sequence of items: shapes (`Box`, `Sphere`, `Cone`, `Plane`,
//! `Triangle`), mesh imports (`OBJ`), `Light`s, the `BGColor`, the `Camera`, and
//! `Define` macros. Numbers and vectors may be written as arithmetic expressions.
//!
//! ```no_run
//! let mut scene = scene::Scene::new();
//! let mut parser = scene_parser::Parser::new();
//! parser.set_constant("SIZE", "2")?;
//! parser.parse_into("scenes/room.txt", &mut scene)?;
//! # Ok::<(), scene_parser::ParseError>(())
//! ```

mod expr;
mod macros;
mod materials;
mod mesh;
mod modifier;
mod parser;
mod shapes;

pub mod error;
pub mod obj;
pub mod stream;
pub mod token;

pub use error::{ParseError, Result};
pub use parser::Parser;
