//! Trigram extraction module.
//!
//! Provides extraction of code-point windows from decoded lines.
//! Trigrams are the unit every profile is built from.

use glossa_types::{Trigram, WindowMode};

/// Extracts trigrams from a decoded line using a sliding window.
///
/// For lines shorter than 3 code points, no trigrams are emitted.
/// For a line of N code points, [`WindowMode::Trailing`] emits N windows
/// (the last two clamped to 2 and 1 code points) and [`WindowMode::Strict`]
/// emits N-2 full trigrams.
///
/// # Example
///
/// ```
/// use glossa_core::analyzer::trigram::extract_trigrams;
/// use glossa_types::WindowMode;
///
/// let chars: Vec<char> = "hello".chars().collect();
/// let mut trigrams = Vec::new();
/// extract_trigrams(&chars, WindowMode::Strict, |t| trigrams.push(t));
///
/// assert_eq!(trigrams.len(), 3); // "hel", "ell", "llo"
/// ```
#[inline(always)]
pub fn extract_trigrams<F>(chars: &[char], mode: WindowMode, mut callback: F)
where
    F: FnMut(Trigram),
{
    if chars.len() < 3 {
        return;
    }

    for window in chars.windows(3) {
        callback(Trigram::from_chars(window[0], window[1], window[2]));
    }

    if mode == WindowMode::Trailing {
        let n = chars.len();
        for start in n - 2..n {
            if let Some(tail) = Trigram::from_window(&chars[start..]) {
                callback(tail);
            }
        }
    }
}

/// Counts the windows a line yields without extracting them.
///
/// Returns 0 for lines shorter than 3 code points.
#[inline(always)]
pub fn count_trigrams(char_len: usize, mode: WindowMode) -> usize {
    if char_len < 3 {
        return 0;
    }
    match mode {
        WindowMode::Trailing => char_len,
        WindowMode::Strict => char_len - 2,
    }
}

/// Trait for types that can extract trigrams.
///
/// This allows the windowing policy to be chosen per profile while
/// reusing the same building code.
pub trait TrigramExtractor {
    /// Extracts all trigrams from a decoded line.
    fn extract<F>(&self, chars: &[char], callback: F)
    where
        F: FnMut(Trigram);
}

/// Extractor that also emits the clamped windows at the end of a line.
pub struct TrailingWindowExtractor;

impl TrigramExtractor for TrailingWindowExtractor {
    #[inline(always)]
    fn extract<F>(&self, chars: &[char], callback: F)
    where
        F: FnMut(Trigram),
    {
        extract_trigrams(chars, WindowMode::Trailing, callback);
    }
}

/// Extractor that only emits full trigrams.
pub struct StrictWindowExtractor;

impl TrigramExtractor for StrictWindowExtractor {
    #[inline(always)]
    fn extract<F>(&self, chars: &[char], callback: F)
    where
        F: FnMut(Trigram),
    {
        extract_trigrams(chars, WindowMode::Strict, callback);
    }
}
