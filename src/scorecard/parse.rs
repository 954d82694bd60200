/// Lenient base-10 integer parse used for every field on a scorecard.
///
/// Accepts surrounding whitespace, an optional `+`/`-` sign and a run of
/// decimal digits; anything after the digits is ignored, so `"4x"` and
/// `"4.5"` both read as `4`. Returns `None` when there are no digits at all
/// or when the digits do not fit in an `i64`.
#[must_use]
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::parse_int;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_int("4"), Some(4));
        assert_eq!(parse_int("  12 "), Some(12));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("+5"), Some(5));
        assert_eq!(parse_int("007"), Some(7));
    }

    #[test]
    fn partial_typing_keeps_leading_digits() {
        assert_eq!(parse_int("4x"), Some(4));
        assert_eq!(parse_int("4.5"), Some(4));
        assert_eq!(parse_int("10 strokes"), Some(10));
    }

    #[test]
    fn not_a_number() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("   "), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("x4"), None);
        assert_eq!(parse_int("- 4"), None);
    }

    #[test]
    fn overflow_is_not_a_number() {
        assert_eq!(parse_int("99999999999999999999999"), None);
    }
}
