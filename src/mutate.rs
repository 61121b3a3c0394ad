//! Word mutation module
//!
//! Produces case and character-duplication variants of a base word.
//! All randomness comes from a caller-supplied [`Rng`], so a seeded
//! generator gives reproducible variants.

use crate::error::{MorphError, Result};
use ahash::RandomState;
use hashbrown::HashSet;
use rand::Rng;

/// Default number of random-case draws
pub const DEFAULT_CASE_VARIANTS: usize = 30;

/// Default number of random-duplication draws
pub const DEFAULT_DUPLICATE_VARIANTS: usize = 30;

/// Upper bound for either random draw count
pub const MAX_RANDOM_VARIANTS: usize = 10_000;

/// How many random variants to draw for a base word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantConfig {
    pub case_variants: usize,
    pub duplicate_variants: usize,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            case_variants: DEFAULT_CASE_VARIANTS,
            duplicate_variants: DEFAULT_DUPLICATE_VARIANTS,
        }
    }
}

impl VariantConfig {
    /// Reject draw counts above [`MAX_RANDOM_VARIANTS`]
    pub fn validate(&self) -> Result<()> {
        for count in [self.case_variants, self.duplicate_variants] {
            if count > MAX_RANDOM_VARIANTS {
                return Err(MorphError::TooManyVariants(count));
            }
        }
        Ok(())
    }

    /// Upper bound on the size of the variant set
    pub fn max_variants(&self) -> usize {
        self.case_variants.saturating_add(self.duplicate_variants).saturating_add(3)
    }
}

/// Check that a base word can be mutated and written as a single line
pub fn validate_base_word(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(MorphError::EmptyBaseWord);
    }
    if word.contains(['\n', '\r']) {
        return Err(MorphError::InvalidBaseWord(word.to_string()));
    }
    Ok(())
}

// Case mappings that expand to several chars (e.g. 'ß' -> "SS") keep the
// original char so the character count never changes.
#[inline]
fn upper_char(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

#[inline]
fn lower_char(c: char) -> char {
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Flip a fair coin per character to pick upper or lower case
pub fn random_case<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    word.chars()
        .map(|c| if rng.gen_bool(0.5) { upper_char(c) } else { lower_char(c) })
        .collect()
}

/// First character upper case, the rest lower case
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Replace the character at `index` (counted in chars) with `repeat` copies of it.
///
/// Returns `None` if `index` is past the end of the word.
pub fn duplicate_char_at(word: &str, index: usize, repeat: usize) -> Option<String> {
    let (byte_idx, ch) = word.char_indices().nth(index)?;
    let tail = &word[byte_idx + ch.len_utf8()..];

    let mut out = String::with_capacity(word.len() + ch.len_utf8() * repeat.saturating_sub(1));
    out.push_str(&word[..byte_idx]);
    out.extend(std::iter::repeat(ch).take(repeat));
    out.push_str(tail);
    Some(out)
}

/// Repeat one randomly chosen character two or three times
pub fn duplicate_random_char<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Result<String> {
    let len = word.chars().count();
    if len == 0 {
        return Err(MorphError::EmptyBaseWord);
    }

    let index = rng.gen_range(0..len);
    let repeat = rng.gen_range(2..=3);

    duplicate_char_at(word, index, repeat).ok_or(MorphError::EmptyBaseWord)
}

/// Build the variant set for a base word.
///
/// Order: lowercase, uppercase, capitalized, random-case draws, then
/// random-duplication draws. Repeats are dropped, first occurrence wins.
pub fn build_variants<R: Rng + ?Sized>(
    word: &str,
    config: &VariantConfig,
    rng: &mut R,
) -> Result<Vec<String>> {
    validate_base_word(word)?;
    config.validate()?;

    let capacity = config.max_variants();
    let mut seen: HashSet<String, RandomState> =
        HashSet::with_capacity_and_hasher(capacity, RandomState::new());
    let mut variants = Vec::with_capacity(capacity);

    let mut push = |variant: String| {
        if seen.insert(variant.clone()) {
            variants.push(variant);
        }
    };

    push(word.to_lowercase());
    push(word.to_uppercase());
    push(capitalize(word));

    for _ in 0..config.case_variants {
        push(random_case(word, rng));
    }

    for _ in 0..config.duplicate_variants {
        push(duplicate_random_char(word, rng)?);
    }

    log::debug!("Built {} unique variants of {:?} from {} draws", variants.len(), word, capacity);

    Ok(variants)
}
