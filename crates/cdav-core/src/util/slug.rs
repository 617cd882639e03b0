//! Slug generation utilities for human-readable resource identifiers.
//!
//! ## Summary
//! Turns display names into URL-safe path segments. Slugs are lowercase ASCII
//! alphanumeric groups joined by single hyphens. Collisions are resolved by
//! probing a caller-supplied availability check with `-1`, `-2`, ... appended.

use crate::config::NamingConfig;
use crate::constants::{EMPTY_SLUG, SLUG_COUNTER_SEPARATOR};
use crate::error::{CoreError, CoreResult};

/// Normalize free text into a slug.
///
/// Deletes everything outside printable ASCII, lowercases, replaces runs of
/// other characters with a single hyphen, and trims edge hyphens. Input that
/// leaves nothing behind becomes "-".
///
/// Examples:
/// - "My Calendar" -> "my-calendar"
/// - "John Doe's Contacts" -> "john-doe-s-contacts"
/// - "💁🏼-123" -> "123"
/// - "" -> "-"
#[must_use]
pub fn normalize(raw: &str) -> String {
    let slug = raw
        .chars()
        .filter(|c| matches!(c, ' '..='~'))
        .map(|c| c.to_ascii_lowercase())
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug
    }
}

/// Whether `candidate` is already a fixed point of [`normalize`].
#[must_use]
pub fn is_normalized(candidate: &str) -> bool {
    candidate == EMPTY_SLUG
        || candidate.split('-').all(|group| {
            !group.is_empty()
                && group
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

fn with_counter(base: &str, counter: u64) -> String {
    format!("{base}{SLUG_COUNTER_SEPARATOR}{counter}")
}

/// ## Summary
/// Normalize `raw` and return the first candidate `is_available` accepts.
///
/// The bare slug is probed first, then `slug-1`, `slug-2`, ... in order, each
/// exactly once. There is no ceiling: a predicate that never accepts keeps
/// this looping. Use [`SlugResolver`] where the namespace can fill up.
#[tracing::instrument(skip(is_available))]
pub fn resolve<F>(raw: &str, mut is_available: F) -> String
where
    F: FnMut(&str) -> bool,
{
    let base = normalize(raw);
    tracing::trace!(candidate = %base, "Probing slug");
    if is_available(&base) {
        tracing::debug!(slug = %base, "Resolved slug");
        return base;
    }

    let mut counter: u64 = 1;
    loop {
        let candidate = with_counter(&base, counter);
        tracing::trace!(%candidate, "Probing slug");
        if is_available(&candidate) {
            tracing::debug!(slug = %candidate, "Resolved slug");
            return candidate;
        }
        counter += 1;
    }
}

/// Resolves slugs with a ceiling on the collision counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugResolver {
    max_suffix: u32,
}

impl SlugResolver {
    #[must_use]
    pub const fn new(max_suffix: u32) -> Self {
        Self { max_suffix }
    }

    /// A resolver that only gives up once the counter reaches `u32::MAX`.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(u32::MAX)
    }

    #[must_use]
    pub const fn from_settings(naming: &NamingConfig) -> Self {
        Self::new(naming.max_slug_suffix)
    }

    #[must_use]
    pub const fn max_suffix(&self) -> u32 {
        self.max_suffix
    }

    /// ## Summary
    /// Same probe order as [`resolve`], stopping after `base-{max_suffix}`.
    ///
    /// ## Errors
    /// Returns `CoreError::NamespaceExhausted` if every candidate up to the
    /// ceiling was rejected.
    #[tracing::instrument(skip(is_available))]
    pub fn resolve<F>(&self, raw: &str, mut is_available: F) -> CoreResult<String>
    where
        F: FnMut(&str) -> bool,
    {
        let base = normalize(raw);
        tracing::trace!(candidate = %base, "Probing slug");
        if is_available(&base) {
            tracing::debug!(slug = %base, "Resolved slug");
            return Ok(base);
        }

        for counter in 1..=self.max_suffix {
            let candidate = with_counter(&base, u64::from(counter));
            tracing::trace!(%candidate, "Probing slug");
            if is_available(&candidate) {
                tracing::debug!(slug = %candidate, "Resolved slug");
                return Ok(candidate);
            }
        }

        tracing::warn!(%base, max_suffix = self.max_suffix, "Slug namespace exhausted");
        Err(CoreError::NamespaceExhausted {
            base,
            max_suffix: self.max_suffix,
        })
    }
}

impl Default for SlugResolver {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_MAX_SLUG_SUFFIX)
    }
}
