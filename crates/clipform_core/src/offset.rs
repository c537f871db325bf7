/// Parses a clip offset typed by the user into whole seconds.
///
/// Blank text means "no offset". Otherwise the leading integer is taken and
/// anything after it is ignored, so `"12s"` is 12 and `"7.9"` is 7. Text
/// without a leading integer yields `None`; a digit run too large for `i64`
/// saturates.
pub fn parse_offset(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = rest.bytes().take(digits).fold(0i64, |acc, digit| {
        let digit = i64::from(digit - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    });
    Some(value)
}
