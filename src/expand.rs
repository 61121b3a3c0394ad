//! Numeric suffix expansion
//!
//! Every variant is expanded into `variant1` .. `variant999`.

use std::iter::FusedIterator;

/// First numeric suffix appended to a variant
pub const SUFFIX_START: u32 = 1;

/// Last numeric suffix appended to a variant (inclusive)
pub const SUFFIX_END: u32 = 999;

/// Lazy iterator over `base + n` for n in `SUFFIX_START..=SUFFIX_END`, ascending
#[derive(Debug, Clone)]
pub struct NumericSuffixes<'a> {
    base: &'a str,
    next: u32,
}

/// Expand a base string with numeric suffixes 1..=999
pub fn numeric_suffixes(base: &str) -> NumericSuffixes<'_> {
    NumericSuffixes {
        base,
        next: SUFFIX_START,
    }
}

impl Iterator for NumericSuffixes<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.next > SUFFIX_END {
            return None;
        }
        let item = format!("{}{}", self.base, self.next);
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (SUFFIX_END + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NumericSuffixes<'_> {}

impl FusedIterator for NumericSuffixes<'_> {}

/// Number of candidate lines a variant produces: itself plus its expansions
pub const fn candidates_per_variant() -> u64 {
    1 + (SUFFIX_END - SUFFIX_START + 1) as u64
}
