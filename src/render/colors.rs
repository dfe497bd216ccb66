//! CSS color handling for the grid renderer.
//!
//! Colors are kept as CSS strings, which Canvas 2D takes directly.

/// A CSS color string (e.g., "#FF0000", "rgba(255, 0, 0, 0.5)")
pub type CssColor = String;

/// RGB color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB` (the `#` is optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        match hex.len() {
            3 => {
                let digit = |i: usize| -> Option<u8> {
                    let v = u8::from_str_radix(hex.get(i..=i)?, 16).ok()?;
                    Some(v * 17)
                };
                Some(Self::new(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => {
                let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
                let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
                let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Convert to CSS hex string (#RRGGBB).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS `rgba()` with the given opacity (clamped to 0..=1).
    pub fn to_rgba(self, alpha: f64) -> CssColor {
        format!(
            "rgba({}, {}, {}, {:.2})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

/// Validate a color string and normalize it to CSS format.
///
/// Supports `#RGB`, `#RRGGBB`, bare hex, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
pub fn parse_color(s: &str) -> Option<CssColor> {
    let s = s.trim();
    if let Some(inner) = s.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if let [r, g, b, a] = parts.as_slice() {
            r.parse::<u8>().ok()?;
            g.parse::<u8>().ok()?;
            b.parse::<u8>().ok()?;
            let a: f64 = a.parse().ok()?;
            if (0.0..=1.0).contains(&a) {
                return Some(s.to_string());
            }
        }
        return None;
    }
    if let Some(inner) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if let [r, g, b] = parts.as_slice() {
            let rgb = Rgb::new(r.parse().ok()?, g.parse().ok()?, b.parse().ok()?);
            return Some(rgb.to_hex());
        }
        return None;
    }
    Rgb::from_hex(s).map(Rgb::to_hex)
}

/// `color` at reduced opacity; `None` if `color` is not a hex or `rgb()` color.
pub fn fade(color: &str, alpha: f64) -> Option<CssColor> {
    let hex = parse_color(color)?;
    Rgb::from_hex(&hex).map(|rgb| rgb.to_rgba(alpha))
}

/// Default colors used by the grid renderer (CSS format)
pub mod palette {
    pub const WHITE: &str = "#FFFFFF";

    /// Grid line color (light gray)
    pub const GRID_LINE: &str = "#E0E0E0";

    /// Glyph text color
    pub const GLYPH: &str = "#202124";

    /// Background of a selected character's cell
    pub const SELECTED_FILL: &str = "#CFD8E8";

    /// Text color of a selected character
    pub const SELECTED_GLYPH: &str = "#1A4D9C";

    /// Highlight of the cell under a drag
    pub const DROP_TARGET: &str = "#E6F4EA";

    /// Marquee outline
    pub const MARQUEE_STROKE: &str = "#1A73E8";

    /// Marquee fill
    pub const MARQUEE_FILL: &str = "rgba(26, 115, 232, 0.12)";
}
