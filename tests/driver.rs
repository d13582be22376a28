mod tests {
    use std::{
        convert::Infallible,
        sync::{Arc, Mutex},
    };

    use ambient_strip::{
        ChannelOrder, DriverKind, LightError, OutputDriver, StripConfig, StripController,
        color::{BLACK, Rgbw, rgbw},
        driver::{NoopDriver, RecordingDriver, SmartLedsDriver, open_spi},
    };
    use embedded_hal::spi::{ErrorType, SpiBus};
    use smart_leds::{RGB8, SmartLedsWrite};
    use ws2812_spi::prerendered::Ws2812;

    #[test]
    fn test_channel_order_permutation() {
        let color = rgbw(1, 2, 3, 4);
        assert_eq!(ChannelOrder::Grb.to_native(color), color);
        assert_eq!(ChannelOrder::Grbw.to_native(color), color);
        assert_eq!(ChannelOrder::Rgb.to_native(color), rgbw(2, 1, 3, 4));
        assert_eq!(ChannelOrder::Rgbw.to_native(color), rgbw(2, 1, 3, 4));

        assert!(ChannelOrder::Grbw.has_white());
        assert!(!ChannelOrder::Grb.has_white());
        assert_eq!(ChannelOrder::Grb.spi_buffer_len(250), 3000);
        assert_eq!(ChannelOrder::Grbw.spi_buffer_len(250), 4000);
    }

    /// Collects whatever a `smart-leds` writer is handed
    #[derive(Clone)]
    struct Capture<C>(Arc<Mutex<Vec<C>>>);

    impl<C> Capture<C> {
        fn new() -> Self {
            Self(Arc::new(Mutex::new(Vec::new())))
        }
    }

    impl<C> SmartLedsWrite for Capture<C> {
        type Error = ();
        type Color = C;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            let mut seen = self.0.lock().unwrap();
            seen.clear();
            seen.extend(iterator.into_iter().map(Into::into));
            Ok(())
        }
    }

    #[test]
    fn test_smart_leds_driver_applies_brightness() {
        let capture = Capture::<Rgbw>::new();
        let mut driver = SmartLedsDriver::new(capture.clone(), ChannelOrder::Grbw);

        driver.write(&[rgbw(200, 100, 50, 10), BLACK], 0.5).unwrap();
        assert_eq!(*capture.0.lock().unwrap(), [rgbw(100, 50, 25, 5), BLACK]);

        driver.write(&[rgbw(200, 100, 50, 10)], 0.0).unwrap();
        assert_eq!(*capture.0.lock().unwrap(), [BLACK]);
        assert!(!driver.is_simulated());
    }

    #[test]
    fn test_smart_leds_driver_channel_order() {
        let capture = Capture::<Rgbw>::new();
        let mut driver = SmartLedsDriver::new(capture.clone(), ChannelOrder::Rgbw);
        driver.write(&[rgbw(10, 20, 30, 40)], 1.0).unwrap();
        assert_eq!(*capture.0.lock().unwrap(), [rgbw(20, 10, 30, 40)]);

        let capture = Capture::<RGB8>::new();
        let mut driver = SmartLedsDriver::new(capture.clone(), ChannelOrder::Grb);
        driver.write(&[rgbw(10, 20, 30, 40)], 1.0).unwrap();
        assert_eq!(*capture.0.lock().unwrap(), [RGB8 { r: 10, g: 20, b: 30 }]);
    }

    /// SPI bus recording every transferred byte
    #[derive(Clone, Default)]
    struct Wire(Arc<Mutex<Vec<u8>>>);

    impl ErrorType for Wire {
        type Error = Infallible;
    }

    impl SpiBus for Wire {
        fn read(&mut self, words: &mut [u8]) -> Result<(), Infallible> {
            words.fill(0);
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Infallible> {
            self.0.lock().unwrap().extend_from_slice(words);
            Ok(())
        }

        fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Infallible> {
            read.fill(0);
            self.write(write)
        }

        fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Infallible> {
            self.0.lock().unwrap().extend_from_slice(words);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Infallible> {
            Ok(())
        }
    }

    #[test]
    fn test_spi_buffer_fits_full_frame() {
        for order in [ChannelOrder::Grb, ChannelOrder::Grbw] {
            let wire = Wire::default();
            let mut buffer = vec![0; order.spi_buffer_len(250)];
            let pixels = vec![rgbw(255, 0, 128, 7); 250];

            let written = if order.has_white() {
                let encoder = Ws2812::new_sk6812w(wire.clone(), &mut buffer);
                SmartLedsDriver::new(encoder, order).write(&pixels, 1.0)
            } else {
                let encoder = Ws2812::new(wire.clone(), &mut buffer);
                SmartLedsDriver::new(encoder, order).write(&pixels, 1.0)
            };

            assert!(written.is_ok(), "{order:?}");
            assert!(wire.0.lock().unwrap().len() >= order.spi_buffer_len(250));
        }
    }

    #[test]
    fn test_missing_device() {
        let mut config = StripConfig::default();
        config.data_pin = "/nonexistent/spidev0.0".into();
        assert!(open_spi(&config).is_err());

        let strict = StripController::new(config.with_driver(DriverKind::Spi));
        assert!(matches!(strict, Err(LightError::HardwareUnavailable(_))));
    }

    #[test]
    fn test_recording_driver() {
        let (mut driver, log) = RecordingDriver::new();
        driver.write(&[rgbw(9, 8, 7, 6)], 0.5).unwrap();

        let frame = log.last().unwrap();
        assert_eq!(frame.pixels, vec![rgbw(9, 8, 7, 6)]);
        assert_eq!(frame.brightness, 0.5);
        assert!(driver.is_simulated());

        let (driver, log) = RecordingDriver::new();
        let mut driver = driver.failing_after(1);
        assert!(driver.write(&[BLACK], 1.0).is_ok());
        assert!(driver.write(&[BLACK], 1.0).is_err());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_noop_driver() {
        let mut driver = NoopDriver;
        assert!(driver.write(&[rgbw(1, 2, 3, 4)], 1.0).is_ok());
        assert!(driver.is_simulated());
    }
}
