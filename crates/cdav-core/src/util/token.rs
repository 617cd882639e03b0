//! Random identifiers for DAV object resources.
//!
//! ## Summary
//! Identifiers have the shape `[PREFIX-]<RANDOM>[.SUFFIX]`, where RANDOM is
//! `TOKEN_LENGTH` characters drawn uniformly from `[A-Z0-9]`. The whole result
//! is upper-cased, decorations included. Uniqueness is statistical only; callers
//! that need a hard guarantee check against their store.

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::constants::{
    TOKEN_ALPHABET, TOKEN_LENGTH, TOKEN_PREFIX_SEPARATOR, TOKEN_SUFFIX_SEPARATOR,
};
use crate::types::CollectionType;

/// Generates identifiers from an owned random source.
///
/// The source is swappable so tests can seed it:
///
/// ```
/// use cdav_core::util::token::TokenGenerator;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut a = TokenGenerator::with_rng(StdRng::seed_from_u64(7));
/// let mut b = TokenGenerator::with_rng(StdRng::seed_from_u64(7));
/// assert_eq!(a.generate(None, None), b.generate(None, None));
/// ```
#[derive(Debug, Clone)]
pub struct TokenGenerator<R = ThreadRng> {
    rng: R,
}

impl TokenGenerator<ThreadRng> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for TokenGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TokenGenerator<R> {
    #[must_use]
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// ## Summary
    /// Generate an identifier, optionally decorated with a prefix and a suffix.
    ///
    /// Empty decorations are treated like absent ones.
    ///
    /// Examples:
    /// - `(None, None)` -> "Q3ZK0X8M1TB7W2LA"
    /// - `(Some("nc"), Some("ics"))` -> "NC-Q3ZK0X8M1TB7W2LA.ICS"
    pub fn generate(&mut self, prefix: Option<&str>, suffix: Option<&str>) -> String {
        let prefix = prefix.filter(|p| !p.is_empty());
        let suffix = suffix.filter(|s| !s.is_empty());

        let capacity = TOKEN_LENGTH
            + prefix.map_or(0, |p| p.len() + 1)
            + suffix.map_or(0, |s| s.len() + 1);
        let mut uid = String::with_capacity(capacity);

        if let Some(prefix) = prefix {
            uid.push_str(prefix);
            uid.push(TOKEN_PREFIX_SEPARATOR);
        }

        let alphabet = TOKEN_ALPHABET.as_bytes();
        uid.extend((0..TOKEN_LENGTH).map(|_| {
            let index = self.rng.gen_range(0..alphabet.len());
            char::from(alphabet[index])
        }));

        if let Some(suffix) = suffix {
            uid.push(TOKEN_SUFFIX_SEPARATOR);
            uid.push_str(suffix);
        }

        uid.to_uppercase()
    }

    /// ## Summary
    /// Generate a name for a new object resource in a collection of the given
    /// kind, e.g. "Q3ZK0X8M1TB7W2LA.ICS" for a calendar.
    pub fn object_name(&mut self, kind: CollectionType) -> String {
        self.generate(None, Some(kind.object_extension()))
    }
}

/// Generate an identifier using the thread-local random source.
#[must_use]
pub fn generate_uid(prefix: Option<&str>, suffix: Option<&str>) -> String {
    TokenGenerator::new().generate(prefix, suffix)
}

/// ## Summary
/// Whether `candidate` has the shape of a generated identifier.
///
/// Decorations may themselves contain `-` and `.`, so the random core is
/// located as any `TOKEN_LENGTH` run of `[A-Z0-9]` that starts the string or
/// follows a `-`, and ends the string or is followed by a `.`. Since generated
/// identifiers are fully upper-cased, any lowercase character disqualifies.
#[must_use]
pub fn is_uid(candidate: &str) -> bool {
    if candidate.chars().any(char::is_lowercase) {
        return false;
    }

    let bytes = candidate.as_bytes();
    if bytes.len() < TOKEN_LENGTH {
        return false;
    }

    (0..=bytes.len() - TOKEN_LENGTH).any(|start| {
        let end = start + TOKEN_LENGTH;
        let opens = start == 0 || char::from(bytes[start - 1]) == TOKEN_PREFIX_SEPARATOR;
        let closes = end == bytes.len() || char::from(bytes[end]) == TOKEN_SUFFIX_SEPARATOR;

        opens
            && closes
            && bytes[start..end]
                .iter()
                .all(|b| TOKEN_ALPHABET.as_bytes().contains(b))
    })
}
