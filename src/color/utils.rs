use super::{Rgbw, channels, from_channels};

/// Clip a channel value to 0-255, truncating toward zero
#[inline]
pub fn clamp255(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0) as u8
}

/// Linear interpolation between `a` and `b`
///
/// `t` is not constrained, values outside 0..=1 extrapolate.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Blend two colors channel by channel
///
/// # Arguments
/// * `a` - Color returned at `t = 0`
/// * `b` - Color returned at `t = 1`
/// * `t` - Blend factor, extrapolated and clamped when outside 0..=1
pub fn blend(a: Rgbw, b: Rgbw, t: f32) -> Rgbw {
    let a = channels(a);
    let b = channels(b);
    let mut out = [0u8; 4];
    for (i, channel) in out.iter_mut().enumerate() {
        *channel = clamp255(lerp(f32::from(a[i]), f32::from(b[i]), t));
    }
    from_channels(out)
}

/// Scale every channel of a color by `factor`, truncating
///
/// Computed in `f64` so levels such as `44 / 60` land on the same integer as
/// exact arithmetic would give.
pub fn scale(color: Rgbw, factor: f64) -> Rgbw {
    from_channels(channels(color).map(|v| {
        let scaled = f64::from(v) * factor;
        if scaled.is_nan() { 0 } else { scaled.clamp(0.0, 255.0) as u8 }
    }))
}

/// Build a color from wide integers, clamping every channel to 0-255
pub fn from_ints(r: i64, g: i64, b: i64, w: i64) -> Rgbw {
    let clip = |v: i64| v.clamp(0, 255) as u8;
    from_channels([clip(r), clip(g), clip(b), clip(w)])
}
