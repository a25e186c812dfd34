use radiometry::color::Color;

/// Surface appearance of an object, filled in by `material { ... }` blocks.
///
/// Every property has a neutral default, so a block only needs to mention what it changes. Writing
/// a property twice keeps the last value.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// The object is skipped by primary rays but still casts shadows unless `shadowless`.
    pub invisible: bool,
    pub shadowless: bool,
    /// Both faces of the surface are lit, instead of only the one facing along the normal.
    pub twosided: bool,

    pub ambient: Color,
    pub diffuse: Color,
    pub reflective: Color,
    pub refractive: Color,

    pub refractive_index: f32,
    pub specular: f32,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            invisible: false,
            shadowless: false,
            twosided: false,
            ambient: Color::black(),
            diffuse: Color::black(),
            reflective: Color::black(),
            refractive: Color::black(),
            refractive_index: 1.0,
            specular: 0.0,
            shininess: 0.0,
        }
    }
}

impl Material {
    pub fn summary(&self) -> String {
        let flags = [
            ("invisible", self.invisible),
            ("shadowless", self.shadowless),
            ("twosided", self.twosided),
        ]
        .iter()
        .filter_map(|(name, set)| set.then(|| *name))
        .collect::<Vec<_>>();
        format!("diffuse {} [{}]", self.diffuse, flags.join(" "))
    }
}
