mod tests {
    use std::io::Write;

    use ambient_strip::{
        ChannelOrder, ConfigError, DriverKind, Finish, StripConfig,
        config::{DEFAULT_BRIGHTNESS, DEFAULT_PIXEL_COUNT, MAX_STOP_TIMEOUT_MS},
    };

    #[test]
    fn test_defaults() {
        let config = StripConfig::default();
        assert_eq!(config.pixel_count, DEFAULT_PIXEL_COUNT);
        assert_eq!(config.brightness, DEFAULT_BRIGHTNESS);
        assert_eq!(config.data_pin, "/dev/spidev0.0");
        assert_eq!(config.channel_order, ChannelOrder::Grbw);
        assert_eq!(config.driver, DriverKind::Auto);
        assert_eq!(config.override_burn, Finish::Hold);
        assert_eq!(config.stop_timeout().as_millis(), 1_000);
        assert_eq!(config.off_repeats, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(StripConfig::from_toml_str("").unwrap(), StripConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = StripConfig::from_toml_str(
            r#"
            pixel_count = 60
            brightness = 0.5
            channel_order = "grb"
            driver = "noop"
            override_burn = "off"
            stop_timeout_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.pixel_count, 60);
        assert_eq!(config.brightness, 0.5);
        assert_eq!(config.channel_order, ChannelOrder::Grb);
        assert_eq!(config.driver, DriverKind::Noop);
        assert_eq!(config.override_burn, Finish::Off);
        assert_eq!(config.stop_timeout_ms, 250);
        assert_eq!(config.off_repeats, 3);
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pixel_count = 12\ndata_pin = \"/dev/spidev1.0\"").unwrap();

        let config = StripConfig::load(file.path()).unwrap();
        assert_eq!(config.pixel_count, 12);
        assert_eq!(config.data_pin, "/dev/spidev1.0");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = StripConfig::load(dir.path().join("strip.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_rejects_invalid_values() {
        for text in [
            "pixel_count = 0",
            "brightness = 1.5",
            "brightness = -0.1",
            "data_pin = \"  \"",
            "off_repeats = 0",
            "stop_timeout_ms = 60001",
            "stop_timeout_ms = 9223372036854775807",
        ] {
            assert!(
                matches!(StripConfig::from_toml_str(text), Err(ConfigError::Invalid(_))),
                "{text}"
            );
        }
    }

    #[test]
    fn test_stop_timeout_is_capped() {
        let config = StripConfig::default().with_stop_timeout_ms(u64::MAX);
        assert_eq!(config.stop_timeout().as_millis(), MAX_STOP_TIMEOUT_MS);
        assert!(StripConfig::from_toml_str("stop_timeout_ms = 60000").is_ok());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(matches!(
            StripConfig::from_toml_str("pixels = 10"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            StripConfig::from_toml_str("channel_order = \"bgr\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
