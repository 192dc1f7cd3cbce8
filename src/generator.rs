//! Random password generation.
//!
//! A password is built by drawing characters independently and uniformly
//! from the alphabet of enabled character classes. Every draw comes from the
//! operating system's CSPRNG and cannot be seeded.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use zeroize::Zeroizing;

use crate::error::GenerateError;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Which character classes to draw from and how many characters to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Number of characters in the generated password
    pub length: usize,

    /// Include `A-Z`
    pub use_uppercase: bool,

    /// Include `a-z`
    pub use_lowercase: bool,

    /// Include `0-9`
    pub use_digits: bool,

    /// Include ASCII punctuation
    pub use_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            use_uppercase: true,
            use_lowercase: true,
            use_digits: true,
            use_symbols: true,
        }
    }
}

impl GenerationConfig {
    /// Validate raw user input and build a configuration.
    ///
    /// The class selection is checked before the length, so a request with
    /// no classes reports [`GenerateError::InvalidConfiguration`] whatever
    /// its length.
    pub fn try_new(
        length: i64,
        use_uppercase: bool,
        use_lowercase: bool,
        use_digits: bool,
        use_symbols: bool,
    ) -> Result<Self, GenerateError> {
        let mut config = Self {
            length: 0,
            use_uppercase,
            use_lowercase,
            use_digits,
            use_symbols,
        };
        config.alphabet()?;
        config.length = checked_length(length)?;
        Ok(config)
    }

    /// Build the alphabet for this configuration.
    ///
    /// Classes are always concatenated in the same order (uppercase,
    /// lowercase, digits, symbols) regardless of which are enabled.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidConfiguration`] if no class is enabled.
    pub fn alphabet(&self) -> Result<Vec<u8>, GenerateError> {
        let classes = [
            (self.use_uppercase, UPPERCASE),
            (self.use_lowercase, LOWERCASE),
            (self.use_digits, DIGITS),
            (self.use_symbols, SYMBOLS),
        ];

        let alphabet: Vec<u8> = classes
            .iter()
            .filter(|(enabled, _)| *enabled)
            .flat_map(|(_, set)| set.bytes())
            .collect();

        if alphabet.is_empty() {
            return Err(GenerateError::InvalidConfiguration);
        }
        Ok(alphabet)
    }
}

/// Convert a user-supplied signed length into a password length.
///
/// Zero and negative values are rejected with [`GenerateError::InvalidLength`].
pub fn checked_length(value: i64) -> Result<usize, GenerateError> {
    usize::try_from(value)
        .ok()
        .filter(|&n| n > 0)
        .ok_or(GenerateError::InvalidLength)
}

/// Generate one password for `config`.
///
/// The returned buffer is wiped when dropped.
///
/// # Errors
///
/// - [`GenerateError::InvalidConfiguration`] if every class is disabled
/// - [`GenerateError::InvalidLength`] if `config.length` is zero
pub fn generate(config: &GenerationConfig) -> Result<Zeroizing<String>, GenerateError> {
    generate_with(&mut OsRng, config)
}

fn generate_with<R>(rng: &mut R, config: &GenerationConfig) -> Result<Zeroizing<String>, GenerateError>
where
    R: Rng + CryptoRng,
{
    let alphabet = config.alphabet()?;
    if config.length == 0 {
        return Err(GenerateError::InvalidLength);
    }

    tracing::debug!(
        length = config.length,
        alphabet_size = alphabet.len(),
        "generating password"
    );

    // gen_range rejects out-of-range samples, so every index is equally likely.
    let mut out = Zeroizing::new(String::with_capacity(config.length));
    for _ in 0..config.length {
        let idx = rng.gen_range(0..alphabet.len());
        out.push(char::from(alphabet[idx]));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(upper: bool, lower: bool, digits: bool, symbols: bool, length: usize) -> GenerationConfig {
        GenerationConfig {
            length,
            use_uppercase: upper,
            use_lowercase: lower,
            use_digits: digits,
            use_symbols: symbols,
        }
    }

    #[test]
    fn test_output_has_requested_length() {
        for length in [1, 2, 8, 16, 64, 257] {
            let pwd = generate(&GenerationConfig { length, ..Default::default() }).unwrap();
            assert_eq!(pwd.chars().count(), length);
        }
    }

    #[test]
    fn test_digits_only() {
        let pwd = generate(&only(false, false, true, false, 8)).unwrap();
        assert_eq!(pwd.len(), 8);
        assert!(pwd.chars().all(|c| c.is_ascii_digit()), "got {}", pwd.as_str());
    }

    #[test]
    fn test_disabled_classes_never_appear() {
        let config = only(false, true, false, true, 200);
        for _ in 0..20 {
            let pwd = generate(&config).unwrap();
            assert!(pwd.chars().all(|c| LOWERCASE.contains(c) || SYMBOLS.contains(c)));
            assert!(!pwd.chars().any(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_uppercase_and_symbols_both_show_up() {
        let config = only(true, false, false, true, 12);
        let mut saw_upper = false;
        let mut saw_symbol = false;

        for _ in 0..100 {
            let pwd = generate(&config).unwrap();
            assert_eq!(pwd.len(), 12);
            for c in pwd.chars() {
                assert!(UPPERCASE.contains(c) || SYMBOLS.contains(c), "unexpected {c:?}");
                saw_upper |= UPPERCASE.contains(c);
                saw_symbol |= SYMBOLS.contains(c);
            }
        }

        assert!(saw_upper && saw_symbol);
    }

    #[test]
    fn test_no_classes_is_invalid_configuration() {
        for length in [0, 1, 16] {
            let err = generate(&only(false, false, false, false, length)).unwrap_err();
            assert_eq!(err, GenerateError::InvalidConfiguration);
        }
    }

    #[test]
    fn test_zero_length_is_invalid() {
        let flags = [
            (true, false, false, false),
            (false, true, false, false),
            (false, false, true, true),
            (true, true, true, true),
        ];
        for (u, l, d, s) in flags {
            let err = generate(&only(u, l, d, s, 0)).unwrap_err();
            assert_eq!(err, GenerateError::InvalidLength);
        }
    }

    #[test]
    fn test_checked_length() {
        assert_eq!(checked_length(12), Ok(12));
        assert_eq!(checked_length(1), Ok(1));
        assert_eq!(checked_length(0), Err(GenerateError::InvalidLength));
        assert_eq!(checked_length(-5), Err(GenerateError::InvalidLength));
    }

    #[test]
    fn test_try_new_checks_classes_before_length() {
        assert_eq!(
            GenerationConfig::try_new(-1, false, false, false, false),
            Err(GenerateError::InvalidConfiguration)
        );
        assert_eq!(
            GenerationConfig::try_new(-1, true, false, false, false),
            Err(GenerateError::InvalidLength)
        );

        let config = GenerationConfig::try_new(10, false, true, true, false).unwrap();
        assert_eq!(config, only(false, true, true, false, 10));
    }

    #[test]
    fn test_alphabet_order_is_stable() {
        let alphabet = GenerationConfig::default().alphabet().unwrap();
        let expected = format!("{UPPERCASE}{LOWERCASE}{DIGITS}{SYMBOLS}");
        assert_eq!(alphabet, expected.as_bytes());
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 32);

        let partial = only(true, false, true, false, 1).alphabet().unwrap();
        assert_eq!(partial, format!("{UPPERCASE}{DIGITS}").as_bytes());
    }

    #[test]
    fn test_consecutive_calls_differ() {
        let config = GenerationConfig { length: 32, ..Default::default() };
        let a = generate(&config).unwrap();
        let b = generate(&config).unwrap();
        assert_ne!(a.as_str(), b.as_str());
    }

    #[test]
    fn test_single_draws_are_uniform() {
        const DRAWS: usize = 20_000;
        let config = only(false, false, true, false, 1);

        let mut counts = [0usize; 10];
        for _ in 0..DRAWS {
            let pwd = generate(&config).unwrap();
            let digit = pwd.as_bytes()[0] - b'0';
            counts[digit as usize] += 1;
        }

        let expected = DRAWS as f64 / 10.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();

        // 9 degrees of freedom; 45.0 sits beyond the 1e-6 tail.
        assert!(chi_square < 45.0, "chi-square {chi_square}, counts {counts:?}");
    }
}
