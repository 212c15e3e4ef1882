/// Parses a decimal integer: an optional leading `+` or `-` sign followed by at least one digit.
///
/// # Examples
/// ```
/// # use text_lib::text::numeric::parse_int;
/// assert_eq!(parse_int("123"), Some(123));
/// assert_eq!(parse_int("-40"), Some(-40));
/// assert_eq!(parse_int("12x"), None);
/// assert_eq!(parse_int("--3"), None);
/// assert_eq!(parse_int(""), None);
/// ```
pub fn parse_int<T: AsRef<[u8]>>(text: T) -> Option<i64> {
    let (negative, digits) = split_sign(text.as_ref());
    if digits.is_empty() {
        return None;
    }

    // Accumulates negated so that i64::MIN parses; the magnitude overflows on the positive side.
    let mut value = 0_i64;
    for &digit in digits {
        if !digit.is_ascii_digit() {
            return None;
        }
        value = value
            .checked_mul(10)?
            .checked_sub(i64::from(digit - b'0'))?;
    }

    if negative { Some(value) } else { value.checked_neg() }
}

/// Parses a binary bit pattern: between 1 and 64 `0`/`1` digits, returned as the integer with
/// those bits.
///
/// # Examples
/// ```
/// # use text_lib::text::numeric::parse_bits;
/// assert_eq!(parse_bits("101"), Some(5));
/// assert_eq!(parse_bits("102"), None);
/// ```
pub fn parse_bits<T: AsRef<[u8]>>(text: T) -> Option<i64> {
    let digits = text.as_ref();
    if digits.is_empty() || digits.len() > 64 {
        return None;
    }

    let mut bits = 0_u64;
    for &digit in digits {
        bits = (bits << 1)
            | match digit {
                b'0' => 0,
                b'1' => 1,
                _ => return None,
            };
    }
    Some(bits as i64)
}

/// Parses a hexadecimal bit pattern: between 1 and 16 hex digits (either letter case), returned as
/// the integer with those bits. No `0x` prefix and no sign.
///
/// # Examples
/// ```
/// # use text_lib::text::numeric::parse_hex;
/// assert_eq!(parse_hex("ff"), Some(255));
/// assert_eq!(parse_hex("FF"), Some(255));
/// assert_eq!(parse_hex("0x1"), None);
/// ```
pub fn parse_hex<T: AsRef<[u8]>>(text: T) -> Option<i64> {
    let digits = text.as_ref();
    if digits.is_empty() || digits.len() > 16 {
        return None;
    }

    let mut bits = 0_u64;
    for &digit in digits {
        bits = (bits << 4) | hex_digit(digit)?;
    }
    Some(bits as i64)
}

/// Parses a plain decimal float: an optional leading sign, at least one whole digit, and
/// optionally a decimal point followed by at least one fractional digit. Exponent and `inf`/`NaN`
/// forms are out of grammar.
///
/// # Examples
/// ```
/// # use text_lib::text::numeric::parse_float;
/// assert_eq!(parse_float("3.25"), Some(3.25));
/// assert_eq!(parse_float("-2"), Some(-2.0));
/// assert_eq!(parse_float("3."), None);
/// assert_eq!(parse_float(".5"), None);
/// ```
pub fn parse_float<T: AsRef<[u8]>>(text: T) -> Option<f32> {
    let (negative, rest) = split_sign(text.as_ref());
    let (whole, fraction) = match rest.iter().position(|&b| b == b'.') {
        Some(point) => (&rest[..point], Some(&rest[point + 1..])),
        None => (rest, None),
    };
    if whole.is_empty() {
        return None;
    }

    let mut value = 0.0_f64;
    for &digit in whole {
        if !digit.is_ascii_digit() {
            return None;
        }
        value = value * 10.0 + f64::from(digit - b'0');
    }

    if let Some(fraction) = fraction {
        if fraction.is_empty() {
            return None;
        }
        let mut scale = 0.1_f64;
        for &digit in fraction {
            if !digit.is_ascii_digit() {
                return None;
            }
            value += f64::from(digit - b'0') * scale;
            scale /= 10.0;
        }
    }

    Some((if negative { -value } else { value }) as f32)
}

/// Parses exactly the token `true` or the token `false`.
///
/// # Examples
/// ```
/// # use text_lib::text::numeric::parse_bool;
/// assert_eq!(parse_bool("true"), Some(true));
/// assert_eq!(parse_bool("False"), None);
/// ```
pub fn parse_bool<T: AsRef<[u8]>>(text: T) -> Option<bool> {
    match text.as_ref() {
        b"true" => Some(true),
        b"false" => Some(false),
        _ => None,
    }
}

/// Splits an optional single leading sign off the input, reporting whether it was negative.
fn split_sign(bytes: &[u8]) -> (bool, &[u8]) {
    match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, bytes),
    }
}

pub(crate) fn hex_digit(digit: u8) -> Option<u64> {
    match digit {
        b'0'..=b'9' => Some(u64::from(digit - b'0')),
        b'a'..=b'f' => Some(u64::from(digit - b'a') + 10),
        b'A'..=b'F' => Some(u64::from(digit - b'A') + 10),
        _ => None,
    }
}
