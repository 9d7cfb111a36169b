// Item state parsing
//
// Servers report item state as one opaque string; widgets need it as a
// boolean, a number, a color, or a brightness. The four views here are
// total functions: any unparseable input collapses to the documented
// default, never to an error. All four agree on what counts as an HSB
// triple -- `parse_boolean` delegates to `parse_brightness` for that case.

/// `true` when the state reads as "on": the literal `ON`, an HSB triple
/// with non-zero brightness, or a positive integer.
pub fn parse_boolean(state: Option<&str>) -> bool {
    let Some(state) = state else {
        return false;
    };
    if state == "ON" {
        return true;
    }
    if let Some(brightness) = parse_brightness(Some(state)) {
        return brightness != 0;
    }
    state.parse::<i32>().is_ok_and(|value| value > 0)
}

/// Numeric view of the state. `ON` maps to 100 and `OFF` to 0, so switch
/// states slot into percentage scales.
pub fn parse_float(state: Option<&str>) -> f32 {
    match state {
        None => 0.0,
        Some("ON") => 100.0,
        Some("OFF") => 0.0,
        Some(other) => other.parse().unwrap_or(0.0),
    }
}

/// Hue, saturation, value. The server reports saturation and value on a
/// 0-100 scale; the model uses 0-1. Anything but three numeric tokens
/// yields `(0, 0, 0)`.
pub fn parse_hsv(state: Option<&str>) -> (f32, f32, f32) {
    let Some(state) = state else {
        return (0.0, 0.0, 0.0);
    };
    let tokens: Vec<&str> = state.split(',').collect();
    if tokens.len() != 3 {
        return (0.0, 0.0, 0.0);
    }
    match (
        tokens[0].parse::<f32>(),
        tokens[1].parse::<f32>(),
        tokens[2].parse::<f32>(),
    ) {
        (Ok(h), Ok(s), Ok(v)) => (h, s / 100.0, v / 100.0),
        _ => (0.0, 0.0, 0.0),
    }
}

/// Brightness of an `h,s,b` state: the truncated integer value of the
/// third component. `None` unless the state is exactly three unsigned
/// decimal numbers separated by commas.
pub fn parse_brightness(state: Option<&str>) -> Option<i32> {
    let state = state?;
    let mut tokens = state.split(',');
    let (Some(hue), Some(saturation), Some(brightness), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return None;
    };
    if !(is_decimal(hue) && is_decimal(saturation) && is_decimal(brightness)) {
        return None;
    }
    brightness.parse::<f32>().ok().map(|value| value as i32)
}

/// An unsigned decimal number with an optional fractional part: `10`,
/// `0.5`, `.5`; not `5.`, `+5`, or ` 5`.
fn is_decimal(token: &str) -> bool {
    let (integral, fraction) = match token.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (token, None),
    };
    if !integral.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    match fraction {
        Some(fraction) => !fraction.is_empty() && fraction.chars().all(|c| c.is_ascii_digit()),
        None => !integral.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn boolean_of_switch_literals() {
        assert!(parse_boolean(Some("ON")));
        assert!(!parse_boolean(Some("OFF")));
        assert!(!parse_boolean(None));
    }

    #[test]
    fn boolean_of_integers() {
        assert!(parse_boolean(Some("42")));
        assert!(!parse_boolean(Some("0")));
        assert!(!parse_boolean(Some("-42")));
        assert!(!parse_boolean(Some("pertinent")));
    }

    #[test]
    fn boolean_of_hsb_triples_follows_brightness() {
        assert!(!parse_boolean(Some("10,10,0")));
        assert!(parse_boolean(Some("10,10,50")));
        // Brightness wins even with zero hue and saturation.
        assert!(parse_boolean(Some("0,0,100")));
    }

    #[test]
    fn boolean_agrees_with_brightness_for_all_triples() {
        for state in ["10,10,0", "10,10,50", "0,0,100", "359.5,50,0.4"] {
            let brightness = parse_brightness(Some(state)).expect("valid triple");
            assert_eq!(parse_boolean(Some(state)), brightness != 0, "state {state}");
        }
    }

    #[test]
    fn float_of_literals_and_numbers() {
        assert_eq!(parse_float(None), 0.0);
        assert_eq!(parse_float(Some("ON")), 100.0);
        assert_eq!(parse_float(Some("OFF")), 0.0);
        assert_eq!(parse_float(Some("21.5")), 21.5);
        assert_eq!(parse_float(Some("-3")), -3.0);
        assert_eq!(parse_float(Some("garbage")), 0.0);
    }

    #[test]
    fn hsv_scales_saturation_and_value() {
        assert_eq!(parse_hsv(Some("120,100,50")), (120.0, 1.0, 0.5));
        assert_eq!(parse_hsv(Some("0,0,0")), (0.0, 0.0, 0.0));
    }

    #[test]
    fn hsv_rejects_wrong_shapes() {
        assert_eq!(parse_hsv(None), (0.0, 0.0, 0.0));
        assert_eq!(parse_hsv(Some("1,2")), (0.0, 0.0, 0.0));
        assert_eq!(parse_hsv(Some("1,2,3,4")), (0.0, 0.0, 0.0));
        assert_eq!(parse_hsv(Some("a,b,c")), (0.0, 0.0, 0.0));
    }

    #[test]
    fn brightness_truncates_the_third_component() {
        assert_eq!(parse_brightness(Some("10,10,50")), Some(50));
        assert_eq!(parse_brightness(Some("10,10,49.9")), Some(49));
        assert_eq!(parse_brightness(Some("10,10,.5")), Some(0));
    }

    #[test]
    fn brightness_requires_three_plain_decimals() {
        assert_eq!(parse_brightness(None), None);
        assert_eq!(parse_brightness(Some("ON")), None);
        assert_eq!(parse_brightness(Some("10,10")), None);
        assert_eq!(parse_brightness(Some("10,10,10,10")), None);
        assert_eq!(parse_brightness(Some("-10,10,10")), None);
        assert_eq!(parse_brightness(Some("10,10,5.")), None);
        assert_eq!(parse_brightness(Some("10, 10, 10")), None);
    }
}
