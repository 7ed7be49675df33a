//! Kernel-style integer parsing
//!
//! Identity strings such as the unit serial number are written by
//! provisioning tools that follow `kstrtoll(s, 0, ..)` conventions: an
//! optional sign, `0x` for hex, a leading `0` for octal, and at most one
//! trailing newline.

/// Parse a signed integer with automatic radix detection.
///
/// Returns `None` on any malformed input or on overflow.
pub(crate) fn parse_auto_i64(text: &str) -> Option<i64> {
    match text.strip_prefix('-') {
        Some(rest) => {
            let magnitude = parse_auto_u64(rest)?;
            if magnitude > i64::MAX as u64 + 1 {
                return None;
            }
            Some((magnitude as i64).wrapping_neg())
        }
        None => {
            let rest = text.strip_prefix('+').unwrap_or(text);
            i64::try_from(parse_auto_u64(rest)?).ok()
        }
    }
}

fn parse_auto_u64(text: &str) -> Option<u64> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let bytes = text.as_bytes();

    let (radix, digits) = if bytes.first() == Some(&b'0') {
        let hex_prefix = matches!(bytes.get(1), Some(b'x' | b'X'))
            && bytes.get(2).is_some_and(u8::is_ascii_hexdigit);
        if hex_prefix {
            (16, &text[2..])
        } else {
            (8, text)
        }
    } else {
        (10, text)
    };

    if digits.is_empty() {
        return None;
    }

    let mut value: u64 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(radix)?;
        value = value
            .checked_mul(u64::from(radix))?
            .checked_add(u64::from(digit))?;
    }
    Some(value)
}
