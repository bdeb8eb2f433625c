//! Color generation and parsing.
//!
//! Colors are drawn uniformly from the full 24-bit RGB space.

use rand::Rng;

use crate::error::ColorParseError;
use crate::types::{HexColor, MAX_RGB};

/// Draw a uniformly random color from `#000000` to `#ffffff` inclusive.
pub fn random_color<R: Rng>(rng: &mut R) -> HexColor {
    HexColor::from_u32(rng.random_range(0..=MAX_RGB))
}

/// Parse a canonical `#rrggbb` color string.
///
/// Only lowercase hex digits are accepted: two colors are the same
/// exactly when their strings are byte-for-byte equal.
///
/// # Errors
/// Returns an error if the string is empty, lacks the leading `#`, has
/// the wrong number of digits, or contains anything but `0-9a-f`.
pub fn parse_hex(s: &str) -> Result<HexColor, ColorParseError> {
    if s.is_empty() {
        return Err(ColorParseError::Empty);
    }
    let digits = s.strip_prefix('#').ok_or(ColorParseError::MissingHash)?;

    let count = digits.chars().count();
    if count != 6 {
        return Err(ColorParseError::InvalidLength(count));
    }

    let mut value = 0u32;
    for c in digits.chars() {
        let nibble = match c {
            '0'..='9' | 'a'..='f' => c.to_digit(16),
            _ => None,
        }
        .ok_or(ColorParseError::InvalidHex(c))?;
        value = (value << 4) | nibble;
    }

    Ok(HexColor::from_u32(value))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn is_canonical(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..].chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
    }

    #[test]
    fn random_colors_are_canonical() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let c = random_color(&mut rng);
            assert!(is_canonical(&c.to_string()), "bad color {}", c);
        }
    }

    #[test]
    fn random_colors_vary() {
        let mut rng = StdRng::seed_from_u64(42);
        let first = random_color(&mut rng);
        let differs = (0..20).any(|_| random_color(&mut rng) != first);
        assert!(differs);
    }

    #[test]
    fn random_colors_cover_high_and_low_channels() {
        // 24-bit uniform: over many draws both halves of the space show up.
        let mut rng = StdRng::seed_from_u64(3);
        let draws: Vec<u32> = (0..500).map(|_| random_color(&mut rng).value()).collect();
        assert!(draws.iter().any(|&v| v < 0x80_0000));
        assert!(draws.iter().any(|&v| v >= 0x80_0000));
        assert!(draws.iter().all(|&v| v <= MAX_RGB));
    }

    #[test]
    fn parse_accepts_canonical() {
        assert_eq!(parse_hex("#000000"), Ok(HexColor::from_u32(0)));
        assert_eq!(parse_hex("#1a2b3c"), Ok(HexColor::from_u32(0x1a2b3c)));
        assert_eq!(parse_hex("#ffffff"), Ok(HexColor::from_u32(MAX_RGB)));
    }

    #[test]
    fn parse_round_trips_display() {
        let c = HexColor::from_u32(0x0f00ba);
        assert_eq!(parse_hex(&c.to_string()), Ok(c));
    }

    #[test]
    fn parse_rejects_uppercase() {
        assert_eq!(parse_hex("#ABCDEF"), Err(ColorParseError::InvalidHex('A')));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(parse_hex(""), Err(ColorParseError::Empty));
        assert_eq!(parse_hex("123456"), Err(ColorParseError::MissingHash));
        assert_eq!(parse_hex("#123"), Err(ColorParseError::InvalidLength(3)));
        assert_eq!(parse_hex("#1234567"), Err(ColorParseError::InvalidLength(7)));
        assert_eq!(parse_hex("#12345g"), Err(ColorParseError::InvalidHex('g')));
        assert_eq!(parse_hex("#12 456"), Err(ColorParseError::InvalidHex(' ')));
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let c: HexColor = "#abcdef".parse().unwrap();
        assert_eq!(c.value(), 0xabcdef);
    }
}
