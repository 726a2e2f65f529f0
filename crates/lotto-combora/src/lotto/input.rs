use super::weights::MAX_WEIGHT;

/// Parse the integer prefix of free-text input, the way number fields are
/// read: leading whitespace and an optional sign are accepted, trailing
/// garbage is ignored, and no digits at all means `None`.
///
/// Values too large for `i64` saturate.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: Vec<i64> = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }

    let value = digits
        .iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(*d));
    Some(if negative { -value } else { value })
}

/// Largest batch one generation may request
pub const MAX_TICKET_COUNT: usize = 100_000;

/// Ticket count from user input. Non-numeric, non-positive or counts above
/// [`MAX_TICKET_COUNT`] yield `None`.
pub fn parse_ticket_count(input: &str) -> Option<usize> {
    parse_leading_int(input)
        .filter(|&count| count > 0)
        .and_then(|count| usize::try_from(count).ok())
        .filter(|&count| count <= MAX_TICKET_COUNT)
}

/// Weight from user input, clamped to 0-100; unparsable input counts as 0
pub fn parse_weight(input: &str) -> u8 {
    let value = parse_leading_int(input).unwrap_or(0);
    // clamp keeps the value inside u8
    value.clamp(0, i64::from(MAX_WEIGHT)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  7 tickets"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+5"), Some(5));
        assert_eq!(parse_leading_int("12.9"), Some(12));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_parse_ticket_count() {
        assert_eq!(parse_ticket_count("10"), Some(10));
        assert_eq!(parse_ticket_count("0"), None);
        assert_eq!(parse_ticket_count("-4"), None);
        assert_eq!(parse_ticket_count("ten"), None);
        assert_eq!(parse_ticket_count("100000"), Some(MAX_TICKET_COUNT));
        assert_eq!(parse_ticket_count("100001"), None);
        assert_eq!(parse_ticket_count("99999999999"), None);
    }

    #[test]
    fn test_parse_weight_clamps() {
        assert_eq!(parse_weight("50"), 50);
        assert_eq!(parse_weight("150"), 100);
        assert_eq!(parse_weight("-20"), 0);
        assert_eq!(parse_weight(""), 0);
        assert_eq!(parse_weight("x"), 0);
    }
}
