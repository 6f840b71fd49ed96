//! Trigram profiles.
//!
//! A profile maps each trigram of a text (or of a whole language corpus) to
//! a weight: raw occurrence counts straight out of the builder, scaled
//! weights after normalization.
//!
//! Language profiles are normally built offline with the same two steps
//! ([`build_trigram_profile_with`] then [`normalize_trigram_profile`]) and
//! loaded by the caller; [`LanguageProfile::from_text`] does both.

mod builder;
mod normalize;

pub use builder::{build_trigram_profile, build_trigram_profile_with};
pub use normalize::normalize_trigram_profile;

use glossa_types::{ProfileError, Trigram, WindowMode};
use rustc_hash::FxHashMap;

/// Mapping from trigram to weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrigramProfile {
    weights: FxHashMap<Trigram, f32>,
}

impl TrigramProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty profile with room for `capacity` trigrams.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            weights: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Builds a profile from externally supplied `(trigram, weight)` pairs,
    /// such as a deserialized language profile. Later duplicates replace
    /// earlier ones.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::InvalidTrigram` for a key that is empty or
    /// longer than three code points.
    pub fn from_weighted<I, K>(pairs: I) -> Result<Self, ProfileError>
    where
        I: IntoIterator<Item = (K, f32)>,
        K: AsRef<str>,
    {
        let pairs = pairs.into_iter();
        let mut profile = Self::with_capacity(pairs.size_hint().0);

        for (key, weight) in pairs {
            let key = key.as_ref();
            let trigram = key
                .parse::<Trigram>()
                .map_err(|source| ProfileError::InvalidTrigram {
                    trigram: key.to_string(),
                    source,
                })?;
            profile.insert(trigram, weight);
        }

        Ok(profile)
    }

    /// Returns the weight of a trigram, if present.
    #[inline(always)]
    pub fn get(&self, trigram: &Trigram) -> Option<f32> {
        self.weights.get(trigram).copied()
    }

    /// Sets the weight of a trigram, returning the previous one.
    pub fn insert(&mut self, trigram: Trigram, weight: f32) -> Option<f32> {
        self.weights.insert(trigram, weight)
    }

    /// Adds one occurrence of a trigram.
    #[inline(always)]
    pub fn increment(&mut self, trigram: Trigram) {
        *self.weights.entry(trigram).or_insert(0.0) += 1.0;
    }

    /// Returns the number of distinct trigrams.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if the profile holds no trigrams.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates over `(trigram, weight)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Trigram, f32)> {
        self.weights.iter().map(|(t, w)| (t, *w))
    }

    /// Sum of all weights, accumulated in f64.
    pub fn total_weight(&self) -> f64 {
        self.weights.values().map(|w| f64::from(*w)).sum()
    }

    pub(crate) fn weights_mut(&mut self) -> impl Iterator<Item = &mut f32> {
        self.weights.values_mut()
    }
}

impl FromIterator<(Trigram, f32)> for TrigramProfile {
    fn from_iter<I: IntoIterator<Item = (Trigram, f32)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

/// A named reference profile for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageProfile {
    code: String,
    profile: TrigramProfile,
}

impl LanguageProfile {
    /// Wraps an already normalized profile.
    pub fn new(code: impl Into<String>, profile: TrigramProfile) -> Self {
        Self {
            code: code.into(),
            profile,
        }
    }

    /// Builds and normalizes a language profile from sample text.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Decode` for a line that is not UTF-8 and
    /// `ProfileError::EmptyProfile` if the text yields no trigrams.
    pub fn from_text<I, L>(
        code: impl Into<String>,
        text: I,
        mode: WindowMode,
    ) -> Result<Self, ProfileError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut profile = build_trigram_profile_with(text, mode)?;
        normalize_trigram_profile(&mut profile)?;
        Ok(Self::new(code, profile))
    }

    /// Returns the language code.
    #[inline(always)]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the normalized trigram profile.
    #[inline(always)]
    pub fn profile(&self) -> &TrigramProfile {
        &self.profile
    }
}
