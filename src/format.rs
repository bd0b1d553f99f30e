//! Display formatting for dates, amounts and quantities

use chrono::NaiveDate;

/// Long month-name date, e.g. `April 5, 2024`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Currency amount with exactly two decimals, e.g. `$10.00`.
///
/// An absent amount renders as an empty string.
pub fn money(amount: Option<f64>, symbol: &str) -> String {
    match amount {
        Some(value) => format!("{}{}", symbol, fixed_2(value)),
        None => String::new(),
    }
}

/// Quantity in its shortest form (`3`, `2.5`).
///
/// Magnitudes of `1e21` and above, or below `1e-6`, switch to exponent
/// notation with an explicit sign (`1e+21`, `1.5e-7`).
pub fn quantity(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_finite() => non_finite(v).to_string(),
        // avoid printing `-0`
        Some(v) if v == 0.0 => "0".to_string(),
        Some(v) if v.abs() >= 1e21 || v.abs() < 1e-6 => exponent_form(v),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

fn exponent_form(value: f64) -> String {
    let repr = format!("{:e}", value);
    match repr.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => repr,
    }
}

/// Two-decimal rendering of a float.
///
/// Exact halfway cases (only possible for binary-exact values such as
/// `0.125`) round away from zero; everything else follows the nearest
/// representable decimal.
pub fn fixed_2(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value).to_string();
    }

    let magnitude = value.abs();
    let exact = format!("{:.40}", magnitude);
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let tie = frac.len() > 3
        && frac.as_bytes()[2] == b'5'
        && frac[3..].bytes().all(|b| b == b'0');

    let digits = if tie {
        round_up_cents(int_part, &frac[..2])
    } else {
        format!("{:.2}", magnitude)
    };

    if value < 0.0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

fn round_up_cents(int_part: &str, cents: &str) -> String {
    let mut digits: Vec<u8> = int_part.bytes().chain(cents.bytes()).collect();
    let mut i = digits.len();
    loop {
        if i == 0 {
            digits.insert(0, b'1');
            break;
        }
        i -= 1;
        if digits[i] == b'9' {
            digits[i] = b'0';
        } else {
            digits[i] += 1;
            break;
        }
    }
    let split = digits.len() - 2;
    let (whole, frac) = digits.split_at(split);
    format!(
        "{}.{}",
        String::from_utf8_lossy(whole),
        String::from_utf8_lossy(frac)
    )
}

fn non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    }
}
