use serde::de::Error;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

#[cfg(test)]
use fake::Dummy;

/// An RGBA color with one byte per channel
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(test, derive(Dummy))]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    pub const fn r(&self) -> u8 {
        self.r
    }

    pub const fn g(&self) -> u8 {
        self.g
    }

    pub const fn b(&self) -> u8 {
        self.b
    }

    pub const fn a(&self) -> u8 {
        self.a
    }

    pub fn from_rgba(arg: u32) -> Color {
        let r = ((arg >> 24) & 0xff) as u8;
        let g = ((arg >> 16) & 0xff) as u8;
        let b = ((arg >> 8) & 0xff) as u8;
        let a = (arg & 0xff) as u8;
        Color { r, g, b, a }
    }

    pub fn rgba(&self) -> u32 {
        let r = (self.r as u32) << 24;
        let g = (self.g as u32) << 16;
        let b = (self.b as u32) << 8;
        let a = self.a as u32;
        r | g | b | a
    }

    /// XOR of the channel values
    pub fn hash_code(&self) -> u8 {
        self.r ^ self.g ^ self.b ^ self.a
    }

    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.hash_code());
    }
}

/**
 * Serializes the color as a string in the format "#RRGGBBAA".
 */
impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format!("#{self}"))
    }
}

/**
 * Deserializes the color from a string in the format "#RRGGBBAA".
 */
impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let invalid = || D::Error::custom("Invalid color format, expected #RRGGBBAA");
        let hex = s
            .strip_prefix('#')
            .filter(|hex| hex.len() == 8 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(invalid)?;
        let channel = |i: usize| -> Result<u8, D::Error> {
            let digits = hex.get(i..i + 2).ok_or_else(invalid)?;
            u8::from_str_radix(digits, 16).map_err(D::Error::custom)
        };
        Ok(Color {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: channel(6)?,
        })
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}
