use serde::{Deserialize, Serialize};

use crate::color::{Rgbw, rgbw};

/// Mapping of logical (R, G, B, W) to the order bytes go out on the wire
///
/// The WS2812 encoders always send green first, then red, blue and white.
/// Other orders are reached by permuting the color before it is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelOrder {
    Rgb,
    Grb,
    Rgbw,
    #[default]
    Grbw,
}

impl ChannelOrder {
    /// Bytes sent per pixel
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb | Self::Grb => 3,
            Self::Rgbw | Self::Grbw => 4,
        }
    }

    /// True for chips with a white LED (SK6812 RGBW)
    pub const fn has_white(self) -> bool {
        matches!(self, Self::Rgbw | Self::Grbw)
    }

    /// Size of the prerendered SPI buffer for `pixels` pixels
    ///
    /// Every data byte takes four SPI bytes.
    pub const fn spi_buffer_len(self, pixels: usize) -> usize {
        pixels * self.bytes_per_pixel() * 4
    }

    /// Permute `color` so a GRB(W) encoder emits this order
    pub const fn to_native(self, color: Rgbw) -> Rgbw {
        match self {
            Self::Grb | Self::Grbw => color,
            Self::Rgb | Self::Rgbw => rgbw(color.g, color.r, color.b, color.a.0),
        }
    }
}
