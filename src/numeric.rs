//! Number parsing and money formatting for user-typed planner input.
//!
//! Form fields and prompt answers are free text. They are read the way the
//! browser's `parseInt` / `parseFloat` read them: leading whitespace is
//! skipped and the longest numeric prefix wins, so `"4 people"` is 4 and
//! `"5000 approx"` is 5000.

/// Currency symbol used for every rendered amount.
pub const RUPEE: char = '₹';

/// Parse the leading integer of `s` (`parseInt` semantics, radix inferred).
///
/// Returns `None` when no digit could be consumed.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = split_sign(s);

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value: i64 = 0;
    let mut consumed = 0usize;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            break;
        };
        value = value.saturating_mul(radix as i64).saturating_add(d as i64);
        consumed += 1;
    }

    if consumed == 0 {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Parse the leading decimal number of `s` (`parseFloat` semantics).
///
/// Accepts an optional sign, `Infinity`, digits with an optional fraction and
/// an optional exponent. Trailing garbage is ignored.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (negative, rest) = split_sign(s);

    if rest.starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let bytes = rest.as_bytes();
    let mut end = 0;
    let mut int_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        int_digits += 1;
    }

    let mut frac_digits = 0;
    if end < bytes.len() && bytes[end] == b'.' {
        let mut j = end + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
            frac_digits += 1;
        }
        // A lone "." only counts when digits precede it ("5." is 5).
        if frac_digits > 0 || int_digits > 0 {
            end = j;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent is optional and only taken when it is complete ("1e" is 1).
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut j = end + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    let value: f64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

/// Render with exactly two decimals the way `Number.prototype.toFixed(2)`
/// does: the exact binary value is rounded to the nearest cent, ties up.
///
/// `{:.2}` is not enough here; it rounds exact ties (`1000.125`) to even.
pub fn to_fixed_2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let x = value.abs();
    let bits = x.to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    // x == mantissa * 2^exp, exactly.
    let (mantissa, exp) = if exp_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exp_bits - 1075)
    };

    if exp >= 0 {
        // Whole number; integer formatting is exact.
        return format!("{sign}{x:.0}.00");
    }

    let shift = exp.unsigned_abs();
    let scaled = mantissa as u128 * 100;
    // scaled < 2^60, so past this shift the value is under half a cent.
    let cents = if shift >= 127 {
        0
    } else {
        let whole = scaled >> shift;
        let rem = scaled & ((1u128 << shift) - 1);
        let half = 1u128 << (shift - 1);
        if rem >= half {
            whole + 1
        } else {
            whole
        }
    };
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

/// Format an amount as rupees with exactly two decimals, e.g. `₹8000.00`.
pub fn format_rupees(amount: f64) -> String {
    format!("{}{}", RUPEE, to_fixed_2(amount))
}
