use once_cell::sync::OnceCell;

/// Formats hours (or degrees) as `[-]HH:MM[:SS[.f]]`.
///
/// `frac` selects the precision:
/// 3 - `HH:MM`, 5 - `HH:MM.m`, 6 - `HH:MM:SS`, 8 - `HH:MM:SS.s`,
/// 9 - `HH:MM:SS.ss`. Anything else prints the plain number.
/// `zero` pads the leading field to two digits. NaN and infinities also
/// print as plain numbers.
pub fn value_to_sexagesimal(value: f64, zero: bool, frac: u8) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let units_per_hour = match frac {
        3 => 60,
        5 => 600,
        6 => 3600,
        8 => 36_000,
        9 => 360_000,
        _ => return value.to_string(),
    };

    let sign = if value < 0.0 { "-" } else { "" };
    let units = (value.abs() * units_per_hour as f64).round() as u64;
    let hours = units / units_per_hour;
    let rest = units % units_per_hour;
    let hours = if zero { format!("{:02}", hours) } else { hours.to_string() };

    match frac {
        3 => format!("{}{}:{:02}", sign, hours, rest),
        5 => format!("{}{}:{:02}.{}", sign, hours, rest / 10, rest % 10),
        6 => format!("{}{}:{:02}:{:02}", sign, hours, rest / 60, rest % 60),
        8 => format!("{}{}:{:02}:{:02}.{}", sign, hours, rest / 600, rest / 10 % 60, rest % 10),
        _ => format!("{}{}:{:02}:{:02}.{:02}", sign, hours, rest / 6000, rest / 100 % 60, rest % 100),
    }
}

#[test]
fn test_value_to_sexagesimal() {
    assert_eq!(value_to_sexagesimal(10.5, true, 3), "10:30");
    assert_eq!(value_to_sexagesimal(-1.5, true, 3), "-01:30");
    assert_eq!(value_to_sexagesimal(1.5, false, 3), "1:30");
    assert_eq!(value_to_sexagesimal(10.505, true, 5), "10:30.3");
    assert_eq!(value_to_sexagesimal(10.508333333333333, true, 6), "10:30:30");
    assert_eq!(value_to_sexagesimal(-5.25, false, 8), "-5:15:00.0");
    assert_eq!(value_to_sexagesimal(12.0 + 1.0 / 3600.0 + 0.25 / 3600.0, true, 9), "12:00:01.25");
    // rounding carries into the hours
    assert_eq!(value_to_sexagesimal(23.99999999, true, 6), "24:00:00");
    assert_eq!(value_to_sexagesimal(1.25, true, 0), "1.25");
    assert_eq!(value_to_sexagesimal(f64::NAN, true, 3), "NaN");
    assert_eq!(value_to_sexagesimal(f64::INFINITY, false, 8), "inf");
    assert_eq!(value_to_sexagesimal(f64::NEG_INFINITY, true, 9), "-inf");
}

/// Parses `[+-]H:M`, `[+-]H:M.m`, `[+-]H:M:S` and `[+-]H:M:S.s` (any number
/// of fraction digits). Whitespace may be used instead of colons.
pub fn sexagesimal_to_value(text: &str) -> Option<f64> {
    static RE: OnceCell<regex::Regex> = OnceCell::new();
    let re = RE.get_or_init(|| {
        regex::Regex::new(
            r"^([+-]?)\s*(\d+)[:\s](\d+(?:\.\d+)?)(?:[:\s](\d+(?:\.\d+)?))?$"
        ).unwrap()
    });

    let caps = re.captures(text.trim())?;
    let is_neg = &caps[1] == "-";
    let hours = caps[2].parse::<f64>().ok()?;
    let minutes = caps[3].parse::<f64>().ok()?;
    let seconds = match caps.get(4) {
        Some(s) => {
            // fractional minutes and seconds together make no sense
            if caps[3].contains('.') { return None; }
            s.as_str().parse::<f64>().ok()?
        }
        None => 0.0,
    };
    if minutes >= 60.0 || seconds >= 60.0 {
        return None;
    }
    let value = hours + minutes / 60.0 + seconds / 3600.0;
    Some(if is_neg { -value } else { value })
}

#[test]
fn test_sexagesimal_to_value() {
    assert!(sexagesimal_to_value("").is_none());
    assert!(sexagesimal_to_value("abc").is_none());
    assert!(sexagesimal_to_value("10:61").is_none());
    assert!(sexagesimal_to_value("10:30.5:10").is_none());
    assert_eq!(sexagesimal_to_value("1:00"), Some(1.0));
    assert_eq!(sexagesimal_to_value("-1:00"), Some(-1.0));
    assert_eq!(sexagesimal_to_value("+10:30"), Some(10.5));
    assert_eq!(sexagesimal_to_value(" -10:30 "), Some(-10.5));
    assert!(f64::abs(sexagesimal_to_value("10:30.3").unwrap() - 10.505) < 1e-12);
    assert_eq!(sexagesimal_to_value("10:30:00"), Some(10.5));
    assert!(f64::abs(sexagesimal_to_value("10 30 30").unwrap() - 10.508333333333333) < 1e-12);
    assert!(f64::abs(sexagesimal_to_value("-00:30:36.25").unwrap() + 0.5100694444444445) < 1e-12);
}
