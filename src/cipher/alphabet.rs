//! Letter/index mapping and modular arithmetic over the 26-letter alphabet.

use crate::config::ALPHABET_LEN;

/// Index of an ASCII letter in the alphabet, ignoring case.
///
/// Returns `None` for anything that is not an ASCII letter.
#[inline]
pub fn index_of(c: char) -> Option<i64> {
    c.is_ascii_alphabetic().then(|| i64::from(c.to_ascii_lowercase() as u8 - b'a'))
}

/// Letter at `index` reduced modulo 26, in the requested case.
#[inline]
pub fn letter_at(index: i64, uppercase: bool) -> char {
    let base = if uppercase { b'A' } else { b'a' };
    // rem_euclid keeps the value in 0..26, so the cast cannot truncate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let offset = index.rem_euclid(ALPHABET_LEN) as u8;
    char::from(base + offset)
}

/// Applies `f` to the index of `c` and maps the result back to a letter of
/// the same case. Non-letters are returned unchanged.
#[inline]
pub fn map_letter(c: char, f: impl FnOnce(i64) -> i64) -> char {
    match index_of(c) {
        Some(x) => letter_at(f(x), c.is_ascii_uppercase()),
        None => c,
    }
}

/// Lower-cases `message` and keeps only its ASCII letters.
pub fn normalize(message: &str) -> String {
    message.chars().filter(char::is_ascii_alphabetic).map(|c| c.to_ascii_lowercase()).collect()
}

/// Greatest common divisor, always non-negative.
pub fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a.abs() } else { gcd(b, a % b) }
}

/// Multiplicative inverse of `a` modulo `m`, via the extended Euclidean
/// algorithm. `None` when `gcd(a, m) != 1`.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let (mut r0, mut r1) = (m, a.rem_euclid(m));
    let (mut t0, mut t1) = (0_i64, 1_i64);

    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (t0, t1) = (t1, t0 - q * t1);
    }

    (r0 == 1).then(|| t0.rem_euclid(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of() {
        assert_eq!(index_of('a'), Some(0));
        assert_eq!(index_of('Z'), Some(25));
        assert_eq!(index_of('m'), Some(12));
        assert_eq!(index_of(' '), None);
        assert_eq!(index_of('é'), None);
    }

    #[test]
    fn test_letter_at_wraps() {
        assert_eq!(letter_at(0, false), 'a');
        assert_eq!(letter_at(26, true), 'A');
        assert_eq!(letter_at(-1, false), 'z');
        assert_eq!(letter_at(53, true), 'B');
    }

    #[test]
    fn test_map_letter_preserves_case() {
        assert_eq!(map_letter('a', |x| x + 1), 'b');
        assert_eq!(map_letter('Z', |x| x + 1), 'A');
        assert_eq!(map_letter('!', |x| x + 1), '!');
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Hide the Gold!"), "hidethegold");
        assert_eq!(normalize("123 ?"), "");
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(26, 13), 13);
        assert_eq!(gcd(5, 26), 1);
        assert_eq!(gcd(-4, 26), 2);
        assert_eq!(gcd(0, 26), 26);
    }

    #[test]
    fn test_mod_inverse() {
        assert_eq!(mod_inverse(5, 26), Some(21));
        assert_eq!(mod_inverse(25, 26), Some(25));
        assert_eq!(mod_inverse(1, 26), Some(1));
        assert_eq!(mod_inverse(-1, 26), Some(25));
        assert_eq!(mod_inverse(2, 26), None);
        assert_eq!(mod_inverse(13, 26), None);
        assert_eq!(mod_inverse(0, 26), None);
    }

    #[test]
    fn test_mod_inverse_all_units() {
        for a in 1..26 {
            match mod_inverse(a, 26) {
                Some(inv) => assert_eq!((a * inv) % 26, 1),
                None => assert_ne!(gcd(a, 26), 1),
            }
        }
    }
}
