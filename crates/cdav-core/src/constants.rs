/// Character classes the random token core is drawn from
pub const TOKEN_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const TOKEN_DIGITS: &str = "0123456789";
pub const TOKEN_ALPHABET: &str = const_str::concat!(TOKEN_UPPERCASE, TOKEN_DIGITS);

/// Length of the random core of every generated identifier
pub const TOKEN_LENGTH: usize = 16;

/// Joins a prefix to the random core
pub const TOKEN_PREFIX_SEPARATOR: char = '-';
/// Joins the random core to a suffix
pub const TOKEN_SUFFIX_SEPARATOR: char = '.';

/// Slug substituted when normalization leaves nothing behind
pub const EMPTY_SLUG: &str = "-";
/// Joins a slug to its collision counter
pub const SLUG_COUNTER_SEPARATOR: char = '-';

/// Default ceiling for the collision counter of the bounded resolver
pub const DEFAULT_MAX_SLUG_SUFFIX: u32 = 10_000;

/// File extensions of DAV object resources
pub const CALENDAR_OBJECT_EXTENSION: &str = "ics";
pub const ADDRESS_OBJECT_EXTENSION: &str = "vcf";
