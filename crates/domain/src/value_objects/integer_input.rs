//! Integer parsing for free-text numeric form fields
//!
//! The admin forms keep numbers as text and only parse on submit. Parsing is
//! deliberately permissive and matches the browser's base-10 `parseInt`:
//! leading whitespace is skipped, an optional sign is accepted, and the
//! longest run of ASCII digits is used. Anything after it is ignored.
//! No digits at all yields `None` (the browser's `NaN`, serialized as `null`).
//! A digit run too large for `i64` saturates at `i64::MAX` / `i64::MIN`
//! instead of becoming `None`, so an oversized number is still sent as a number.

/// Parse the leading base-10 integer of `input`, `parseInt` style.
///
/// Returns `None` only when there are no digits; out-of-range values saturate.
pub fn parse_int_lenient(input: &str) -> Option<i64> {
    let rest = input.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let saturated = if negative { i64::MIN } else { i64::MAX };
    let mut value: i64 = 0;
    for digit in rest[..digits_len].bytes() {
        let d = i64::from(digit - b'0');
        let next = value.checked_mul(10).and_then(|v| {
            if negative {
                v.checked_sub(d)
            } else {
                v.checked_add(d)
            }
        });
        match next {
            Some(v) => value = v,
            None => return Some(saturated),
        }
    }
    Some(value)
}
