use std::f32::consts::PI;
use std::fmt;
use std::ops::Neg;

/// An angle stored in radians. Build one with `new_rad()` or `new_deg()` so the unit is never
/// ambiguous at the call site.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f32,
}

impl Angle {
    pub fn new_rad(radians: f32) -> Self {
        Self { radians }
    }
    pub fn new_deg(degrees: f32) -> Self {
        Self {
            radians: degrees * PI / 180.0,
        }
    }
    pub fn to_rad(self) -> f32 {
        self.radians
    }
    pub fn to_deg(self) -> f32 {
        self.radians * 180.0 / PI
    }
    pub fn sin_cos(self) -> (f32, f32) {
        self.radians.sin_cos()
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle::new_rad(-self.radians)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{:.p$}deg", self.to_deg(), p = precision)
    }
}

pub fn min_max(a: f32, b: f32) -> (f32, f32) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Asserts two scalars are within 1e-4 of each other.
#[macro_export]
macro_rules! assert_near {
    ($left:expr, $right:expr) => {
        if ($left - $right).abs() > 1e-4 {
            panic!(
                "Assertion failed: Near({}, {}) values: {} vs. {}",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn degree_conversion() {
        let right = Angle::new_deg(90.0);
        assert_near!(right.to_rad(), PI / 2.0);
        assert_near!((-right).to_deg(), -90.0);
    }

    #[test]
    fn min_max_orders_pair() {
        assert_eq!(min_max(3.0, -1.0), (-1.0, 3.0));
        assert_eq!(min_max(-1.0, 3.0), (-1.0, 3.0));
    }
}
