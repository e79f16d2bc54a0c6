use serde::{Deserialize, Serialize};

/// Straight-alpha sRGB color with normalized `0..=1` channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Color {
    /// Construct from normalized channels.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            1.0,
        )
    }

    /// Parse `#RRGGBB`, `#RRGGBBAA`, or one of the names `white`, `black`, `transparent`.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" => Ok(Self::rgba(1.0, 1.0, 1.0, 1.0)),
            "black" => Ok(Self::rgba(0.0, 0.0, 0.0, 1.0)),
            "transparent" => Ok(Self::rgba(0.0, 0.0, 0.0, 0.0)),
            _ => parse_hex(s),
        }
    }

    /// `#rrggbb` form for SVG paint attributes; alpha goes to a separate opacity attribute.
    pub fn to_svg_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Alpha as an SVG opacity value, or `None` when fully opaque.
    pub fn svg_opacity(self) -> Option<f64> {
        let a = self.a.clamp(0.0, 1.0);
        if a >= 1.0 { None } else { Some(a) }
    }

    /// Straight-alpha RGBA8 bytes.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }
}

/// Palette entries in config files: a color string, `{"r", "g", "b", "a"?}`, or `[r, g, b, a?]`,
/// channels normalized to `0..=1`.
impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Entry {
            Text(String),
            Channels {
                r: f64,
                g: f64,
                b: f64,
                a: Option<f64>,
            },
            List(Vec<f64>),
        }

        let channels = match Entry::deserialize(deserializer)? {
            Entry::Text(s) => return Self::parse(&s).map_err(serde::de::Error::custom),
            Entry::Channels { r, g, b, a } => [r, g, b, a.unwrap_or(1.0)],
            Entry::List(v) => match *v.as_slice() {
                [r, g, b] => [r, g, b, 1.0],
                [r, g, b, a] => [r, g, b, a],
                _ => {
                    return Err(serde::de::Error::custom(format!(
                        "color list needs 3 or 4 channels, got {}",
                        v.len()
                    )));
                }
            },
        };
        from_channels(channels).map_err(serde::de::Error::custom)
    }
}

fn from_channels([r, g, b, a]: [f64; 4]) -> Result<Color, String> {
    if let Some(bad) = [r, g, b, a].into_iter().find(|c| !(0.0..=1.0).contains(c)) {
        return Err(format!("color channel {bad} is outside 0..=1"));
    }
    Ok(Color::rgba(r, g, b, a))
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err(format!("invalid color \"{s}\""));
    }

    let (r, g, b, a) = match s.len() {
        6 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        ),
        8 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        ),
        _ => {
            return Err(format!(
                "color \"{s}\" must be #RRGGBB, #RRGGBBAA, white, black, or transparent"
            ));
        }
    };

    Ok(Color::rgba(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        f64::from(a) / 255.0,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
