pub mod camera;

use std::fmt;

use geometry::bbox::BBox;
use light::Light;
use radiometry::color::Color;
use shape::Object;

pub use camera::{Camera, Screen};

/// Everything the renderer needs from a scene file: background color, the camera, lights and
/// objects in the order they were declared.
///
/// A `Scene` is only meaningful once a parse has succeeded; after a failed parse it holds whatever
/// was added before the error and must be discarded.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub background: Color,
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub objects: Vec<Object>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_object(&mut self, object: Object) {
        log::debug!("adding {}", object.shape.name());
        self.objects.push(object);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Combined bounds of all bounded objects. Planes are left out since they would make the
    /// result infinite.
    pub fn bounds(&self) -> BBox {
        self.objects
            .iter()
            .filter(|obj| !matches!(obj.shape, shape::Shape::Plane(_)))
            .fold(BBox::empty(), |b, obj| b.merge(obj.bounds()))
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (cell_w, cell_h) = self.camera.cell_size();
        writeln!(f, "Background: {}", self.background)?;
        writeln!(
            f,
            "Camera: at {}, {}x{} px, cell {:.4} x {:.4}",
            self.camera.origin(),
            self.camera.screen.width,
            self.camera.screen.height,
            cell_w,
            cell_h
        )?;
        writeln!(f, "Lights ({}):", self.lights.len())?;
        for light in self.lights.iter() {
            writeln!(f, "  {}", light)?;
        }
        writeln!(f, "Objects ({}):", self.objects.len())?;
        for object in self.objects.iter() {
            writeln!(f, "  {}", object.summary())?;
        }
        if !self.objects.is_empty() {
            writeln!(f, "Bounds: {}", self.bounds())?;
        }
        Ok(())
    }
}
