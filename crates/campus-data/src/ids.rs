//! National identification numbers.
//!
//! A national ID is twelve random digits followed by a checksum digit. The
//! checksum weights digit `i` (zero-based) by `13 - i`, reduces the sum
//! modulo 11, subtracts from 11 and keeps the last decimal digit, so the ID
//! is always thirteen characters long.

use rand::Rng;

/// Number of random digits preceding the checksum.
pub const NATIONAL_ID_BODY_LENGTH: usize = 12;

/// Checksum digit for the first twelve digits of a national ID.
///
/// Returns `None` when `body` is not exactly twelve ASCII digits.
///
/// # Example
///
/// ```
/// use campus_data::nid_checksum;
///
/// assert_eq!(nid_checksum("110170020315"), Some(8));
/// assert_eq!(nid_checksum("12345"), None);
/// ```
#[must_use]
pub fn nid_checksum(body: &str) -> Option<u32> {
    if body.len() != NATIONAL_ID_BODY_LENGTH {
        return None;
    }
    let mut sum = 0_u32;
    for (index, ch) in body.chars().enumerate() {
        let digit = ch.to_digit(10)?;
        let weight = u32::try_from(13 - index).ok()?;
        sum += digit * weight;
    }
    Some((11 - sum.rem_euclid(11)).rem_euclid(10))
}

/// Whether `value` is a thirteen-digit national ID with a valid checksum.
#[must_use]
pub fn is_valid_national_id(value: &str) -> bool {
    if !value.is_ascii() || value.len() != NATIONAL_ID_BODY_LENGTH + 1 {
        return false;
    }
    let (body, check) = value.split_at(NATIONAL_ID_BODY_LENGTH);
    let Some(expected) = nid_checksum(body) else {
        return false;
    };
    check.chars().next().and_then(|c| c.to_digit(10)) == Some(expected)
}

/// Generate a random national ID with a valid checksum digit.
pub fn national_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut body = String::with_capacity(NATIONAL_ID_BODY_LENGTH + 1);
    for _ in 0..NATIONAL_ID_BODY_LENGTH {
        let digit: u32 = rng.random_range(0..10);
        body.push(char::from_digit(digit, 10).unwrap_or('0'));
    }
    let check = nid_checksum(&body).unwrap_or(0);
    body.push(char::from_digit(check, 10).unwrap_or('0'));
    body
}
