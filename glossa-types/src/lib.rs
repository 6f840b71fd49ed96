//! Core types and errors for the Glossa language identifier.
//!
//! This crate holds the value types shared between the identification
//! pipeline and its callers. Keeping them separate ensures:
//!
//! - **Small, copyable keys**: trigrams live inline, no heap per key
//! - **Stable results**: scores order deterministically, ties included
//! - **Clean boundaries**: profile loaders depend on types, not on the engine

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// A window of up to three Unicode scalar values taken from one line of text.
///
/// Full trigrams hold exactly three code points. Windows clamped at the end
/// of a line (see [`WindowMode::Trailing`]) hold one or two; they are
/// distinct keys from any full trigram.
///
/// Unused slots are always `'\0'` so that derived equality and hashing only
/// depend on the stored code points and the length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Trigram {
    chars: [char; 3],
    len: u8,
}

impl Trigram {
    /// Maximum number of code points in a trigram.
    pub const MAX_LEN: usize = 3;

    /// Creates a full trigram from three code points.
    #[inline(always)]
    pub const fn from_chars(c0: char, c1: char, c2: char) -> Self {
        Self {
            chars: [c0, c1, c2],
            len: 3,
        }
    }

    /// Creates a trigram from a window of one to three code points.
    ///
    /// Returns `None` for an empty slice or one longer than [`Self::MAX_LEN`].
    #[inline(always)]
    pub fn from_window(window: &[char]) -> Option<Self> {
        if window.is_empty() || window.len() > Self::MAX_LEN {
            return None;
        }

        let mut chars = ['\0'; 3];
        chars[..window.len()].copy_from_slice(window);
        Some(Self {
            chars,
            len: window.len() as u8,
        })
    }

    /// Returns the number of code points (1 to 3).
    #[inline(always)]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns `true` if this is a full three-code-point trigram.
    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.len == 3
    }

    /// Returns the stored code points.
    #[inline(always)]
    pub fn as_chars(&self) -> &[char] {
        &self.chars[..self.len as usize]
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.as_chars() {
            fmt::Write::write_char(f, *c)?;
        }
        Ok(())
    }
}

impl FromStr for Trigram {
    type Err = TrigramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = ['\0'; 3];
        let mut len = 0usize;

        for c in s.chars() {
            if len == Self::MAX_LEN {
                return Err(TrigramError::TooLong {
                    length: s.chars().count(),
                    max: Self::MAX_LEN,
                });
            }
            chars[len] = c;
            len += 1;
        }

        if len == 0 {
            return Err(TrigramError::Empty);
        }

        Ok(Self {
            chars,
            len: len as u8,
        })
    }
}

/// Errors produced when parsing a [`Trigram`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrigramError {
    /// The string held no code points.
    #[error("trigram is empty")]
    Empty,
    /// The string held more code points than a trigram can store.
    #[error("trigram has {length} code points (max: {max})")]
    TooLong {
        /// Number of code points in the rejected string.
        length: usize,
        /// Maximum allowed number of code points.
        max: usize,
    },
}

/// Errors that can occur while building or normalizing a profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// A line of input text is not valid UTF-8.
    #[error("line {line} is not valid UTF-8 (valid up to byte {valid_up_to})")]
    Decode {
        /// Zero-based index of the offending line.
        line: usize,
        /// Number of leading bytes of the line that decoded cleanly.
        valid_up_to: usize,
    },
    /// Normalization was attempted on a profile with no positive weight.
    #[error("cannot normalize a profile with zero total weight")]
    EmptyProfile,
    /// An externally supplied trigram key could not be parsed.
    #[error("invalid trigram {trigram:?}: {source}")]
    InvalidTrigram {
        /// The rejected key.
        trigram: String,
        /// Why it was rejected.
        source: TrigramError,
    },
}

/// Similarity score of one candidate language.
///
/// `index` is the position of the language in the collection that was
/// scored. Scores order by value, and for equal values the earlier language
/// is the greater one, so sorting descending keeps collection order on ties.
#[derive(Debug, Clone, Copy)]
pub struct LanguageScore {
    /// Position of the language in the scored collection.
    pub index: usize,
    /// Similarity score (higher is better)
    pub score: f32,
}

impl PartialEq for LanguageScore {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.score == other.score
    }
}

impl Eq for LanguageScore {}

impl PartialOrd for LanguageScore {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LanguageScore {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        match self.score.total_cmp(&other.score) {
            core::cmp::Ordering::Equal => other.index.cmp(&self.index),
            ord => ord,
        }
    }
}

impl LanguageScore {
    /// Creates a new language score.
    #[inline(always)]
    pub const fn new(index: usize, score: f32) -> Self {
        Self { index, score }
    }
}

impl fmt::Display for LanguageScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "language={} score={:.3}", self.index, self.score)
    }
}

/// Outcome of identifying the language of a text.
#[derive(Debug, Clone, PartialEq)]
pub enum Identification {
    /// A language scored strictly above zero; it is the best one.
    Match {
        /// Code of the winning language.
        code: String,
        /// Its similarity score.
        score: f32,
    },
    /// No language scored above zero.
    NoMatch,
}

impl Identification {
    /// Returns the matched language code, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Identification::Match { code, .. } => Some(code),
            Identification::NoMatch => None,
        }
    }

    /// Returns the score of the match, if any.
    pub fn score(&self) -> Option<f32> {
        match self {
            Identification::Match { score, .. } => Some(*score),
            Identification::NoMatch => None,
        }
    }

    /// Returns `true` if a language was found.
    pub fn is_match(&self) -> bool {
        matches!(self, Identification::Match { .. })
    }
}

impl fmt::Display for Identification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identification::Match { code, score } => write!(f, "{} ({:.3})", code, score),
            Identification::NoMatch => write!(f, "no matching language"),
        }
    }
}

/// How windows are taken near the end of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    /// A window starts at every code point, clamped to the line end, so the
    /// last two windows of a line hold two and one code points. Matches how
    /// existing language profile data was built.
    #[default]
    Trailing,
    /// Only full three-code-point windows are emitted.
    Strict,
}

/// Whether the text profile is normalized before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextScaling {
    /// Raw counts are compared against the normalized language profiles.
    #[default]
    Raw,
    /// The text profile is normalized the same way language profiles are.
    Normalized,
}

/// Identification configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentifyConfig {
    /// Windowing used when building the text profile.
    pub window: WindowMode,
    /// Scaling applied to the text profile before scoring.
    pub text_scaling: TextScaling,
}

impl IdentifyConfig {
    /// Creates a configuration that scores like existing profile data
    /// expects: trailing windows, raw text counts.
    pub const fn compatible() -> Self {
        Self {
            window: WindowMode::Trailing,
            text_scaling: TextScaling::Raw,
        }
    }

    /// Creates a configuration with full trigrams only and both sides
    /// normalized. Language profiles must be built with [`WindowMode::Strict`].
    pub const fn symmetric() -> Self {
        Self {
            window: WindowMode::Strict,
            text_scaling: TextScaling::Normalized,
        }
    }
}
