//! Short code generation and format checks.
//!
//! Codes are 6 characters drawn uniformly from `A-Z`, `a-z`, `0-9`
//! (62 symbols, 62^6 ≈ 5.7 · 10^10 possible codes).

use rand::Rng;

/// Alphabet short codes are drawn from.
pub const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 6;

/// Generates a random short code.
///
/// Uniqueness is not checked here; the store rejects a colliding insert and
/// the caller draws again.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Returns `true` if `code` has the shape of a generated code.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| CHARSET.contains(&b))
}
