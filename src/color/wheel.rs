use super::{Rgbw, rgbw};

/// Width of one hue segment on the 0-255 wheel
const SEGMENT: i32 = 85;

/// Map a wheel position to a fully saturated hue.
///
/// The position is taken modulo 256, so negative values wrap around and
/// `wheel(p) == wheel(p + 256)`. The wheel is made of three linear segments
/// (0-84 red to green, 85-169 green to blue, 170-255 blue to red), each channel
/// moving by 3 per step. White is always 0.
pub fn wheel(position: i32) -> Rgbw {
    let pos = position.rem_euclid(256);
    if pos < SEGMENT {
        let p = pos as u8;
        return rgbw(255 - p * 3, p * 3, 0, 0);
    }
    if pos < SEGMENT * 2 {
        let p = (pos - SEGMENT) as u8;
        return rgbw(0, 255 - p * 3, p * 3, 0);
    }
    let p = (pos - SEGMENT * 2) as u8;
    rgbw(p * 3, 0, 255 - p * 3, 0)
}
