mod hex;
mod utils;
mod wheel;

pub use hex::parse_hex;
use smart_leds::{RGBW, White};
pub use utils::{blend, clamp255, from_ints, lerp, scale};
pub use wheel::wheel;

/// Color of one pixel: red, green, blue and white channels
pub type Rgbw = RGBW<u8>;

/// All channels at zero
pub const BLACK: Rgbw = rgbw(0, 0, 0, 0);

/// Create a color from its four channels
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw { r, g, b, a: White(w) }
}

/// Channels in logical (R, G, B, W) order
pub const fn channels(color: Rgbw) -> [u8; 4] {
    [color.r, color.g, color.b, color.a.0]
}

/// Inverse of [`channels`]
pub const fn from_channels(channels: [u8; 4]) -> Rgbw {
    rgbw(channels[0], channels[1], channels[2], channels[3])
}
