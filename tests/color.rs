mod tests {
    use ambient_strip::color::{
        BLACK, Rgbw, blend, channels, clamp255, from_ints, lerp, parse_hex, rgbw, scale, wheel,
    };

    const RED: Rgbw = rgbw(255, 0, 0, 0);
    const BLUE: Rgbw = rgbw(0, 0, 255, 0);
    const WARM_WHITE: Rgbw = rgbw(255, 170, 40, 200);

    #[test]
    fn test_clamp255() {
        assert_eq!(clamp255(-12.0), 0);
        assert_eq!(clamp255(0.0), 0);
        assert_eq!(clamp255(127.9), 127);
        assert_eq!(clamp255(255.0), 255);
        assert_eq!(clamp255(300.0), 255);
        assert_eq!(clamp255(f32::NAN), 0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
    }

    #[test]
    fn test_blend_endpoints() {
        let pairs = [(RED, BLUE), (BLUE, WARM_WHITE), (BLACK, WARM_WHITE), (WARM_WHITE, RED)];
        for (a, b) in pairs {
            assert_eq!(blend(a, b, 0.0), a);
            assert_eq!(blend(a, b, 1.0), b);
        }
    }

    #[test]
    fn test_blend_midpoint() {
        assert_eq!(blend(RED, BLUE, 0.5), rgbw(127, 0, 127, 0));
        assert_eq!(blend(BLACK, rgbw(200, 100, 50, 20), 0.5), rgbw(100, 50, 25, 10));
    }

    #[test]
    fn test_blend_extrapolates_and_clamps() {
        assert_eq!(blend(RED, BLUE, -1.0), rgbw(255, 0, 0, 0));
        assert_eq!(blend(RED, BLUE, 2.0), rgbw(0, 0, 255, 0));
        assert_eq!(blend(rgbw(100, 0, 0, 0), rgbw(200, 0, 0, 0), 2.0), rgbw(255, 0, 0, 0));
    }

    #[test]
    fn test_wheel_segment_boundaries() {
        assert_eq!(wheel(0), rgbw(255, 0, 0, 0));
        assert_eq!(wheel(84), rgbw(3, 252, 0, 0));
        assert_eq!(wheel(85), rgbw(0, 255, 0, 0));
        assert_eq!(wheel(169), rgbw(0, 3, 252, 0));
        assert_eq!(wheel(170), rgbw(0, 0, 255, 0));
        assert_eq!(wheel(255), rgbw(255, 0, 0, 0));
    }

    #[test]
    fn test_wheel_is_periodic() {
        for p in -300..300 {
            assert_eq!(wheel(p), wheel(p + 256), "position {p}");
        }
    }

    #[test]
    fn test_wheel_white_is_always_zero() {
        for p in 0..256 {
            assert_eq!(wheel(p).a.0, 0);
        }
    }

    #[test]
    fn test_wheel_adjacent_positions_are_close() {
        for p in 0..256 {
            let a = channels(wheel(p));
            let b = channels(wheel(p + 1));
            for i in 0..3 {
                assert!(a[i].abs_diff(b[i]) <= 3, "jump between {p} and {}", p + 1);
            }
        }
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(rgbw(255, 100, 10, 1), 0.0), BLACK);
        assert_eq!(scale(rgbw(255, 100, 10, 1), 1.0), rgbw(255, 100, 10, 1));
        assert_eq!(scale(rgbw(255, 100, 10, 1), 0.5), rgbw(127, 50, 5, 0));
        // 75 * 44 / 60 is just below 55
        assert_eq!(scale(rgbw(75, 0, 0, 0), 44.0 / 60.0), rgbw(54, 0, 0, 0));
        assert_eq!(scale(rgbw(9, 9, 9, 9), f64::NAN), BLACK);
    }

    #[test]
    fn test_from_ints_clamps() {
        assert_eq!(from_ints(-5, 300, 128, 0), rgbw(0, 255, 128, 0));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#ff0000").unwrap(), RED);
        assert_eq!(parse_hex("0000FF").unwrap(), BLUE);
        assert_eq!(parse_hex("#FFAA28C8").unwrap(), WARM_WHITE);
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        for text in [
            "", "#", "#fff", "#gg0000", "12345", "#1234567", "#ffffff00ff", "#+f0000", "+fffff",
            "#-10000", "# 1 2 3",
        ] {
            assert!(parse_hex(text).is_err(), "accepted {text:?}");
        }
    }
}
