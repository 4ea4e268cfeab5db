use crate::geometry;
use crate::geometry::primitives::Point;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use svg::node::element::Circle;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgBundleTheme,
    ///Draw the margin (jacket) as a ring around the enclosing circle
    #[serde(default = "default_true")]
    pub margin: bool,
    ///Mark the center of the enclosing circle
    #[serde(default)]
    pub center: bool,
    ///Print the diameters above the bundle
    #[serde(default = "default_true")]
    pub header: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgBundleTheme::default(),
            margin: true,
            center: false,
            header: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgBundleTheme {
    pub stroke_width_multiplier: f64,
    ///Fill of the area inside the enclosing circle
    pub enclosing_fill: Color,
    pub enclosing_stroke: Color,
    pub margin_fill: Color,
    ///Fill of the smallest wires, wires are shaded towards `large_wire_fill` as their radius grows
    pub small_wire_fill: Color,
    pub large_wire_fill: Color,
}

impl Default for SvgBundleTheme {
    fn default() -> Self {
        SvgBundleTheme::EARTH_TONES
    }
}

impl SvgBundleTheme {
    pub const EARTH_TONES: SvgBundleTheme = SvgBundleTheme {
        stroke_width_multiplier: 2.0,
        enclosing_fill: Color(0x2D, 0x2D, 0x2D),
        enclosing_stroke: Color(0x00, 0x00, 0x00),
        margin_fill: Color(0xCC, 0x82, 0x4A),
        small_wire_fill: Color(0xFF, 0xC8, 0x79),
        large_wire_fill: Color(0xFF, 0x5E, 0x00),
    };

    pub const GRAY: SvgBundleTheme = SvgBundleTheme {
        stroke_width_multiplier: 2.5,
        enclosing_fill: Color(0xFF, 0xFF, 0xFF),
        enclosing_stroke: Color(0x00, 0x00, 0x00),
        margin_fill: Color(0xD3, 0xD3, 0xD3),
        small_wire_fill: Color(0xC3, 0xC3, 0xC3),
        large_wire_fill: Color(0x63, 0x63, 0x63),
    };
}

pub fn change_brightness(color: Color, fraction: f64) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f64 * fraction) as u8;
    let g = (g as f64 * fraction) as u8;
    let b = (b as f64 * fraction) as u8;
    Color(r, g, b)
}

/// Linear interpolation between `color_1` (`t == 0`) and `color_2` (`t == 1`)
pub fn interpolate_colors(color_1: Color, color_2: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |c_1: u8, c_2: u8| (c_1 as f64 * (1.0 - t) + c_2 as f64 * t).round() as u8;

    let Color(r_1, g_1, b_1) = color_1;
    let Color(r_2, g_2, b_2) = color_2;
    Color(mix(r_1, r_2), mix(g_1, g_2), mix(b_1, b_2))
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .ok_or_else(|| format!("invalid color: {s}"))
        };
        match hex.len() {
            6 => Ok(Color(channel(0)?, channel(2)?, channel(4)?)),
            _ => Err(format!("invalid color: {s}")),
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

pub fn point(Point(x, y): Point, fill: Option<&str>, rad: Option<f64>) -> Circle {
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", rad.unwrap_or(0.5))
        .set("fill", fill.unwrap_or("black"))
}

pub fn circle(circle: geometry::primitives::Circle, params: &[(&str, &str)]) -> Circle {
    let mut circle = Circle::new()
        .set("cx", circle.center.0)
        .set("cy", circle.center.1)
        .set("r", circle.radius);
    for param in params {
        circle = circle.set(param.0, param.1)
    }
    circle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex_round_trip() {
        let color = Color::try_from("#CC824A").unwrap();
        assert_eq!(color, Color(0xCC, 0x82, 0x4A));
        assert_eq!(color.to_string(), "#CC824A");
        assert!(Color::try_from("#CC82").is_err());
        assert!(Color::try_from("#GG824A").is_err());
    }

    #[test]
    fn interpolation_hits_both_ends() {
        let (a, b) = (Color(0, 0, 0), Color(200, 100, 50));
        assert_eq!(interpolate_colors(a, b, 0.0), a);
        assert_eq!(interpolate_colors(a, b, 1.0), b);
        assert_eq!(interpolate_colors(a, b, 0.5), Color(100, 50, 25));
    }
}
