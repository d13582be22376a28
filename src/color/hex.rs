use super::{Rgbw, from_channels};
use crate::error::LightError;

/// Parse a hex color string
///
/// Accepts `RRGGBB` or `RRGGBBWW`, with an optional leading `#`.
/// Digits are case-insensitive.
pub fn parse_hex(text: &str) -> Result<Rgbw, LightError> {
    let digits = text.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if !(digits.len() == 6 || digits.len() == 8)
        || !digits.bytes().all(|byte| byte.is_ascii_hexdigit())
    {
        return Err(malformed(text));
    }

    let mut out = [0u8; 4];
    for (i, channel) in out.iter_mut().enumerate().take(digits.len() / 2) {
        let pair = &digits[i * 2..i * 2 + 2];
        *channel = u8::from_str_radix(pair, 16).map_err(|_| malformed(text))?;
    }
    Ok(from_channels(out))
}

fn malformed(text: &str) -> LightError {
    LightError::InvalidParameter(format!("malformed hex color '{text}'"))
}
