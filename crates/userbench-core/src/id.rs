//! Path id parsing.
//!
//! Ids are read leniently: leading whitespace is skipped, an optional sign is
//! accepted and the leading run of ASCII digits is the value. Whatever follows
//! the digits is ignored, so `"12abc"` reads as 12.

use crate::error::{Result, UserBenchError};

pub fn parse_user_id(raw: &str) -> Result<i64> {
    let invalid = || UserBenchError::InvalidUserId(raw.to_string());

    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return Err(invalid());
    }

    let digits = &rest[..digits_end];
    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    signed.parse::<i64>().map_err(|_| invalid())
}
