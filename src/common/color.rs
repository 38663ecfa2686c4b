//! Colour type conversions
//!
//! Cvar colours are stored as four normalized channels and serialized as
//! packed RGBA32 hex (`RRGGBBAA`, red in the high byte).

/// Normalized RGBA colour, each channel in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Rgba {
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parse `RRGGBBAA` hex, with or without a leading '#'. Exactly eight
    /// hex digits are required.
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 8 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        Some(Self::from_rgba32(value))
    }

    /// Unpack an RGBA32 value (red = bits 31-24, alpha = bits 7-0)
    pub fn from_rgba32(rgba: u32) -> Self {
        let channel = |shift: u32| ((rgba >> shift) & 0xFF) as f32 / 255.0;
        Self {
            red: channel(24),
            green: channel(16),
            blue: channel(8),
            alpha: channel(0),
        }
    }

    /// Pack back into RGBA32, rounding each channel to the nearest 8-bit step
    pub fn to_rgba32(self) -> u32 {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (byte(self.red) << 24) | (byte(self.green) << 16) | (byte(self.blue) << 8) | byte(self.alpha)
    }

    /// Uppercase 8-digit hex without prefix (`1A2B3C4D`)
    pub fn to_hex(self) -> String {
        format!("{:08X}", self.to_rgba32())
    }

    /// Channels clamped into `[0, 1]`
    pub fn clamped(self) -> Self {
        Self {
            red: self.red.clamp(0.0, 1.0),
            green: self.green.clamp(0.0, 1.0),
            blue: self.blue.clamp(0.0, 1.0),
            alpha: self.alpha.clamp(0.0, 1.0),
        }
    }

    /// Array form for egui's unmultiplied colour editor
    pub fn to_array(self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    pub fn from_array([red, green, blue, alpha]: [f32; 4]) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_channels() {
        let color = Rgba::parse_hex("#1A2B3C4D").unwrap();
        assert_eq!(color.red, 0x1A as f32 / 255.0);
        assert_eq!(color.green, 0x2B as f32 / 255.0);
        assert_eq!(color.blue, 0x3C as f32 / 255.0);
        assert_eq!(color.alpha, 0x4D as f32 / 255.0);

        // Prefix is optional
        assert_eq!(Rgba::parse_hex("1A2B3C4D"), Some(color));
    }

    #[test]
    fn test_hex_reencodes_uppercase() {
        let color = Rgba::parse_hex("#1a2b3c4d").unwrap();
        assert_eq!(color.to_hex(), "1A2B3C4D");
    }

    #[test]
    fn test_hex_zero_padded() {
        let color = Rgba::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(color.to_hex(), "000000FF");
    }

    #[test]
    fn test_every_byte_survives_pack() {
        for byte in 0..=255u32 {
            let packed = (byte << 24) | (byte << 16) | (byte << 8) | byte;
            assert_eq!(Rgba::from_rgba32(packed).to_rgba32(), packed);
        }
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert_eq!(Rgba::parse_hex("not-a-color"), None);
        assert_eq!(Rgba::parse_hex(""), None);
        assert_eq!(Rgba::parse_hex("#"), None);
        // Too wide for 32 bits
        assert_eq!(Rgba::parse_hex("1A2B3C4D5E"), None);
        // Sign and short forms are not colours
        assert_eq!(Rgba::parse_hex("+1A2B3C4"), None);
        assert_eq!(Rgba::parse_hex("#1A2B3C"), None);
        assert_eq!(Rgba::parse_hex("FFF"), None);
    }

    #[test]
    fn test_clamped() {
        let color = Rgba::new(-0.5, 0.5, 1.5, 1.0).clamped();
        assert_eq!(color, Rgba::new(0.0, 0.5, 1.0, 1.0));
    }
}
