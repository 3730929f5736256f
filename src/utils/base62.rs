//! Base62 short code encoding.
//!
//! Short codes are the record id written as a base62 numeral, most
//! significant digit first, left-padded to [`MIN_CODE_LENGTH`]. Distinct ids
//! always produce distinct codes, so the store's primary key uniqueness is
//! the only collision check needed.

/// Digit alphabet: value 0-9 → `0`-`9`, 10-35 → `A`-`Z`, 36-61 → `a`-`z`.
///
/// The order fixes the literal output strings; changing it changes every
/// issued code.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Codes shorter than this are left-padded with `ALPHABET[0]`.
pub const MIN_CODE_LENGTH: usize = 5;

const BASE: u64 = ALPHABET.len() as u64;

/// Errors returned by [`decode`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("short code is empty")]
    Empty,

    #[error("invalid base62 character {0:?}")]
    InvalidChar(char),

    #[error("short code is out of range")]
    Overflow,
}

/// Encodes an id as a short code.
///
/// # Examples
///
/// ```
/// use base62_shortener::utils::base62::encode;
///
/// assert_eq!(encode(0), "00000");
/// assert_eq!(encode(1), "00001");
/// assert_eq!(encode(61), "0000z");
/// assert_eq!(encode(62), "00010");
/// ```
pub fn encode(mut id: u64) -> String {
    // u64::MAX needs 11 base62 digits.
    let mut buf = [ALPHABET[0]; 11];
    let mut start = buf.len();

    while id > 0 {
        start -= 1;
        buf[start] = ALPHABET[(id % BASE) as usize];
        id /= BASE;
    }

    let digits = buf.len() - start;
    let mut code = String::with_capacity(digits.max(MIN_CODE_LENGTH));
    for _ in digits..MIN_CODE_LENGTH {
        code.push(ALPHABET[0] as char);
    }
    code.extend(buf[start..].iter().map(|&b| b as char));
    code
}

/// Decodes a short code back to the id it was derived from.
///
/// Leading `ALPHABET[0]` symbols are ordinary zero digits, so padded and
/// unpadded forms of the same numeral decode to the same id.
///
/// # Errors
///
/// Returns [`DecodeError`] for an empty code, a character outside the
/// alphabet, or a value that does not fit in `u64`.
pub fn decode(code: &str) -> Result<u64, DecodeError> {
    if code.is_empty() {
        return Err(DecodeError::Empty);
    }

    code.chars().try_fold(0u64, |acc, c| {
        let digit = digit_value(c).ok_or(DecodeError::InvalidChar(c))?;
        acc.checked_mul(BASE)
            .and_then(|v| v.checked_add(digit))
            .ok_or(DecodeError::Overflow)
    })
}

fn digit_value(c: char) -> Option<u64> {
    let value = match c {
        '0'..='9' => c as u64 - '0' as u64,
        'A'..='Z' => c as u64 - 'A' as u64 + 10,
        'a'..='z' => c as u64 - 'a' as u64 + 36,
        _ => return None,
    };
    Some(value)
}
