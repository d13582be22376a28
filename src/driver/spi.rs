//! WS2812/SK6812 output over a Linux spidev device.
//!
//! Frames are prerendered by `ws2812-spi` and pushed in one transfer, so the
//! bus must be clocked at about 3 MHz. The kernel rejects transfers larger
//! than the spidev `bufsiz` parameter (4096 bytes by default); a 250-pixel
//! RGBW frame takes 4000, longer strips need `spidev.bufsiz` raised.

use std::fmt;

use linux_embedded_hal::{
    SpidevBus,
    spidev::{SpiModeFlags, Spidev, SpidevOptions},
};
use log::debug;
use smart_leds::{RGB8, SmartLedsWrite};
use ws2812_spi::prerendered::Ws2812;

use super::{ChannelOrder, OutputDriver};
use crate::{
    color::{Rgbw, scale},
    config::StripConfig,
    error::DriverError,
};

/// SPI clock for the 4-bits-per-data-bit encoding
pub const SPI_SPEED_HZ: u32 = 3_000_000;

/// Color type a `smart-leds` writer accepts, built from a logical pixel
pub trait WireColor {
    fn from_rgbw(color: Rgbw) -> Self;
}

impl WireColor for Rgbw {
    fn from_rgbw(color: Rgbw) -> Self {
        color
    }
}

/// Three-channel chips drop the white channel
impl WireColor for RGB8 {
    fn from_rgbw(color: Rgbw) -> Self {
        RGB8 {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

/// Real-device driver over any `smart-leds` writer
///
/// Brightness and channel order are applied here, at flush time.
pub struct SmartLedsDriver<W> {
    writer: W,
    order: ChannelOrder,
}

impl<W> SmartLedsDriver<W> {
    pub const fn new(writer: W, order: ChannelOrder) -> Self {
        Self { writer, order }
    }
}

impl<W> OutputDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite + Send,
    W::Color: WireColor,
    W::Error: fmt::Debug,
{
    fn write(&mut self, pixels: &[Rgbw], brightness: f32) -> Result<(), DriverError> {
        let order = self.order;
        let brightness = f64::from(brightness);
        let wire = pixels.iter().map(|&color| {
            <W::Color as WireColor>::from_rgbw(order.to_native(scale(color, brightness)))
        });
        self.writer
            .write(wire)
            .map_err(|err| DriverError::Write(format!("{err:?}")))
    }
}

/// Open the spidev device at `config.data_pin` and wrap it in a WS2812 encoder
pub fn open_spi(config: &StripConfig) -> Result<Box<dyn OutputDriver>, DriverError> {
    let path = config.data_pin.as_str();
    let open_error = |source| DriverError::Open {
        path: path.to_string(),
        source,
    };

    let mut spi = Spidev::open(path).map_err(open_error)?;
    let options = SpidevOptions::new()
        .bits_per_word(8)
        .max_speed_hz(SPI_SPEED_HZ)
        .mode(SpiModeFlags::SPI_MODE_0)
        .build();
    spi.configure(&options).map_err(open_error)?;
    let bus = SpidevBus(spi);

    // Lives as long as the driver, which lives as long as the process
    let order = config.channel_order;
    let buffer: &'static mut [u8] =
        Box::leak(vec![0; order.spi_buffer_len(config.pixel_count)].into_boxed_slice());
    debug!("spi frame buffer: {} bytes", buffer.len());

    let driver: Box<dyn OutputDriver> = if order.has_white() {
        Box::new(SmartLedsDriver::new(Ws2812::new_sk6812w(bus, buffer), order))
    } else {
        Box::new(SmartLedsDriver::new(Ws2812::new(bus, buffer), order))
    };
    Ok(driver)
}
