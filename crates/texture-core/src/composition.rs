// File: crates/texture-core/src/composition.rs
// Summary: Validated (silt, sand, clay) percentages.

use std::fmt;

use crate::error::InvalidComposition;

/// Fixed-point resolution of the sum check (1e-6 percent).
const SUM_SCALE: f64 = 1e6;

#[inline]
fn to_fixed(value: f64) -> i64 {
    (value * SUM_SCALE).round() as i64
}

/// One of the three soil fractions; also names the triangle axis it drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    Silt,
    Sand,
    Clay,
}

impl Component {
    pub const ALL: [Component; 3] = [Component::Silt, Component::Sand, Component::Clay];

    pub fn name(self) -> &'static str {
        match self {
            Component::Silt => "silt",
            Component::Sand => "sand",
            Component::Clay => "clay",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Percentages of silt, sand and clay.
///
/// Only obtainable through [`Composition::new`] (or [`validate`]), so every
/// value in circulation has components in `0..=100` whose sum, rounded to
/// millionths of a percent, is exactly 100.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Composition {
    silt: f64,
    sand: f64,
    clay: f64,
}

impl Composition {
    /// Validate and build a composition. Inputs are rejected, never rescaled.
    pub fn new(silt: f64, sand: f64, clay: f64) -> Result<Self, InvalidComposition> {
        for (component, value) in Component::ALL.into_iter().zip([silt, sand, clay]) {
            if !value.is_finite() {
                return Err(InvalidComposition::NotANumber { component, raw: value.to_string() });
            }
            if !(0.0..=100.0).contains(&value) {
                return Err(InvalidComposition::OutOfRange { component, value });
            }
        }
        // Summed in millionths of a percent so the result does not depend on argument order.
        let total: i64 = [silt, sand, clay].into_iter().map(to_fixed).sum();
        if total != to_fixed(100.0) {
            return Err(InvalidComposition::BadSum { sum: total as f64 / SUM_SCALE });
        }
        Ok(Self { silt, sand, clay })
    }

    /// Parse textual percentages (CLI arguments, CSV cells) and validate them.
    pub fn parse(silt: &str, sand: &str, clay: &str) -> Result<Self, InvalidComposition> {
        let field = |component: Component, raw: &str| -> Result<f64, InvalidComposition> {
            raw.trim().parse::<f64>().map_err(|_| InvalidComposition::NotANumber {
                component,
                raw: raw.to_string(),
            })
        };
        Self::new(
            field(Component::Silt, silt)?,
            field(Component::Sand, sand)?,
            field(Component::Clay, clay)?,
        )
    }

    pub fn silt(&self) -> f64 {
        self.silt
    }

    pub fn sand(&self) -> f64 {
        self.sand
    }

    pub fn clay(&self) -> f64 {
        self.clay
    }

    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::Silt => self.silt,
            Component::Sand => self.sand,
            Component::Clay => self.clay,
        }
    }

    /// Percentage scaled to the 0..=10 grid-line index range.
    #[inline]
    pub fn line_index(&self, component: Component) -> f64 {
        self.get(component) / 10.0
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "silt {}%, sand {}%, clay {}%", self.silt, self.sand, self.clay)
    }
}

/// Free-function form of [`Composition::new`].
pub fn validate(silt: f64, sand: f64, clay: f64) -> Result<Composition, InvalidComposition> {
    Composition::new(silt, sand, clay)
}
