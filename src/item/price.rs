//! Price coercion from loosely-typed client input.

use serde_json::Value;

/// Coerce a client-supplied price into an `f64`.
///
/// Numbers pass through. Strings are read up to the longest leading decimal
/// float, so `"19.99"` and `"19.99 USD"` both give `19.99`. An array reads
/// as its elements joined with commas, and the comma ends any float, so only
/// the first element counts: `[19.99]` and `["5", 6]` give `19.99` and `5`.
/// Anything else, including strings with no numeric prefix, gives `NaN`,
/// which is stored unchanged.
pub fn coerce_price(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => parse_leading_float(text),
        Value::Array(values) => values.first().map_or(f64::NAN, coerce_price),
        _ => f64::NAN,
    }
}

fn parse_leading_float(text: &str) -> f64 {
    let text = text.trim_start();

    let unsigned = text.trim_start_matches(&['+', '-'][..]);
    let sign_len = text.len() - unsigned.len();
    if sign_len <= 1 && unsigned.starts_with("Infinity") {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let end = float_prefix_len(text.as_bytes());
    if end == 0 {
        return f64::NAN;
    }
    text[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Length of the longest prefix of `bytes` that reads as a decimal float.
fn float_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = digits_from(pos);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = digits_from(pos + 1);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    pos
}
