// File: crates/texture-core/src/theme.rs
// Summary: Color themes for the triangle (axes, text, background, guides).

use crate::composition::Component;

/// Renderer-agnostic 8-bit ARGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// `#rrggbb` form, alpha dropped.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub silt: Color,
    pub sand: Color,
    pub clay: Color,
    pub text: Color,
    pub background: Color,
    pub triangle: Color,
    pub guide: Color,
}

impl Theme {
    /// Colors of the printed chart: red silt, orange sand, blue clay on white.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            silt: Color::from_rgb(255, 0, 0),
            sand: Color::from_rgb(255, 165, 0),
            clay: Color::from_rgb(0, 0, 255),
            text: Color::from_rgb(0, 0, 0),
            background: Color::from_rgb(255, 255, 255),
            triangle: Color::from_rgb(0, 0, 0),
            guide: Color::from_rgb(128, 128, 128),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            silt: Color::from_rgb(255, 99, 99),
            sand: Color::from_rgb(255, 190, 80),
            clay: Color::from_rgb(96, 156, 255),
            text: Color::from_rgb(235, 235, 245),
            background: Color::from_rgb(18, 18, 20),
            triangle: Color::from_rgb(180, 180, 190),
            guide: Color::from_rgb(150, 150, 160),
        }
    }

    pub fn axis(&self, axis: Component) -> Color {
        match axis {
            Component::Silt => self.silt,
            Component::Sand => self.sand,
            Component::Clay => self.clay,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(|| {
            tracing::warn!(name, "unknown theme; using classic");
            Theme::classic()
        })
}
