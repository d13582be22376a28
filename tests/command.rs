mod tests {
    use ambient_strip::{
        Command, CommandResponse, EffectId, Mode, StripConfig, StripController,
        color::rgbw,
        command::ColorParam,
        driver::{FrameLog, RecordingDriver},
        execute, handle_json,
    };
    use serde_json::{Value, json};

    fn controller() -> (StripController, FrameLog) {
        let (driver, log) = RecordingDriver::new();
        let config = StripConfig::default().with_pixel_count(6);
        (StripController::with_driver(config, Box::new(driver)), log)
    }

    fn error_kind(response: &CommandResponse) -> &'static str {
        match response {
            CommandResponse::Error { kind, .. } => *kind,
            CommandResponse::Ok { mode, .. } => panic!("expected an error, got ok for {mode}"),
        }
    }

    #[test]
    fn test_parse_defaults() {
        let command = Command::from_json(r#"{"mode": "rainbow"}"#).unwrap();
        assert_eq!(command, Command::Rainbow { speed: 0.01, step: 2 });

        let command = Command::from_json(r#"{"mode": "wave", "wavelength": 8}"#).unwrap();
        assert_eq!(
            command,
            Command::Wave {
                base: ColorParam::Channels(vec![0, 0, 255, 0]),
                wavelength: 8,
                speed: 0.02,
            }
        );

        let command = Command::from_json(r#"{"mode": "set_color", "r": 1, "g": 2, "b": 3}"#).unwrap();
        assert_eq!(command, Command::SetColor { r: 1, g: 2, b: 3, w: 0 });
        assert_eq!(command.name(), "set_color");
    }

    #[test]
    fn test_set_color_echoes_color() {
        let (lights, _log) = controller();
        let response = handle_json(&lights, r#"{"mode": "set_color", "r": 10, "g": 20, "b": 30, "w": 40}"#);

        assert!(response.is_ok());
        assert_eq!(response.echoed("color"), Some(&json!([10, 20, 30, 40])));
        assert_eq!(lights.mode(), Mode::Solid);
        assert_eq!(lights.pixels(), vec![rgbw(10, 20, 30, 40); 6]);
    }

    #[test]
    fn test_pulse_duration_units() {
        let (lights, _log) = controller();

        let response = handle_json(&lights, r#"{"mode": "pulse", "color": [0, 0, 255], "ms": 1500}"#);
        assert_eq!(response.echoed("seconds"), Some(&json!(1.5)));
        assert_eq!(lights.mode(), Mode::Running(EffectId::Pulse));

        let response = handle_json(
            &lights,
            r#"{"mode": "pulse", "color": [0, 0, 255], "ms": 500, "seconds": 9.0}"#,
        );
        assert_eq!(response.echoed("seconds"), Some(&json!(0.5)));

        let response = handle_json(&lights, r##"{"mode": "pulse", "color": "#00ff00"}"##);
        assert_eq!(response.echoed("seconds"), Some(&json!(2.0)));
        assert_eq!(response.echoed("color"), Some(&json!([0, 255, 0, 0])));
        lights.off().unwrap();
    }

    #[test]
    fn test_weather_echoes_cue() {
        let (lights, _log) = controller();
        let response = handle_json(&lights, r#"{"mode": "weather", "condition": "Drizzle"}"#);

        assert_eq!(response.echoed("condition"), Some(&json!("Drizzle")));
        assert_eq!(response.echoed("cue"), Some(&json!("rain")));
        assert_eq!(lights.mode(), Mode::Running(EffectId::Wave));
        lights.off().unwrap();
    }

    #[test]
    fn test_unknown_mode() {
        let (lights, log) = controller();
        let response = handle_json(&lights, r#"{"mode": "disco"}"#);

        assert_eq!(error_kind(&response), "invalid_parameter");
        match &response {
            CommandResponse::Error { message, .. } => assert!(message.contains("disco")),
            CommandResponse::Ok { .. } => unreachable!(),
        }
        assert!(log.is_empty());
    }

    #[test]
    fn test_malformed_input() {
        let (lights, _log) = controller();

        for text in [
            "not json",
            "{}",
            r#"{"mode": 3}"#,
            r#"{"mode": "fade_between", "c1": [1, 2, 3]}"#,
            r#"{"mode": "rainbow", "step": -1}"#,
        ] {
            assert_eq!(error_kind(&handle_json(&lights, text)), "invalid_parameter", "{text}");
        }
    }

    #[test]
    fn test_out_of_range_values() {
        let (lights, log) = controller();

        for text in [
            r#"{"mode": "set_color", "r": 256, "g": 0, "b": 0}"#,
            r#"{"mode": "set_color", "r": 0, "g": -1, "b": 0}"#,
            r#"{"mode": "bounce", "color": [0, 0, 300]}"#,
            r#"{"mode": "bounce", "color": [0, 0]}"#,
            r##"{"mode": "pulse", "color": "#12345"}"##,
            r#"{"mode": "wave", "wavelength": 0}"#,
            r#"{"mode": "fade_between", "c1": [0, 0, 0], "c2": [1, 1, 1], "seconds": 0}"#,
            r#"{"mode": "override_burn", "seconds": -2}"#,
        ] {
            assert_eq!(error_kind(&handle_json(&lights, text)), "invalid_parameter", "{text}");
        }
        assert!(log.is_empty());
        assert_eq!(lights.mode(), Mode::Off);
    }

    #[test]
    fn test_execute_parsed_command() {
        let (lights, log) = controller();
        lights.set_color(rgbw(1, 1, 1, 1)).unwrap();

        let response = execute(&lights, &Command::Off);
        assert_eq!(response, CommandResponse::Ok { mode: "off", echo: serde_json::Map::new() });
        assert_eq!(lights.mode(), Mode::Off);
        assert!(log.last().unwrap().pixels.iter().all(|&pixel| pixel == rgbw(0, 0, 0, 0)));
    }

    #[test]
    fn test_response_json_shape() {
        let (lights, _log) = controller();

        let ok = handle_json(&lights, r#"{"mode": "rainbow", "step": 4}"#);
        let value: Value = serde_json::from_str(&ok.to_json().unwrap()).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["mode"], "rainbow");
        assert_eq!(value["step"], 4);

        let err = handle_json(&lights, r#"{"mode": "nope"}"#);
        let value: Value = serde_json::from_str(&err.to_json().unwrap()).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["kind"], "invalid_parameter");
        assert!(value["message"].as_str().unwrap().contains("nope"));
        lights.off().unwrap();
    }
}
