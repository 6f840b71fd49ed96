//! Identifier holding a set of language profiles.

use crate::identify::ranker::{identify_language_with, rank_languages};
use crate::profile::LanguageProfile;
use glossa_types::{Identification, IdentifyConfig, LanguageScore, ProfileError};

/// Language identifier over a fixed, ordered set of language profiles.
///
/// Profile order is tie-break order: on equal scores the language added
/// first wins.
pub struct LanguageIdentifier {
    pub(crate) languages: Vec<LanguageProfile>,
    pub(crate) config: IdentifyConfig,
    /// Total number of texts identified
    pub(crate) texts_identified: u64,
    /// Identifications that found a language
    pub(crate) matches: u64,
}

impl Default for LanguageIdentifier {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl LanguageIdentifier {
    /// Creates an identifier over `languages` with the default configuration.
    pub fn new(languages: Vec<LanguageProfile>) -> Self {
        Self {
            languages,
            config: IdentifyConfig::default(),
            texts_identified: 0,
            matches: 0,
        }
    }

    /// Creates an identifier with custom configuration.
    pub fn with_config(languages: Vec<LanguageProfile>, config: IdentifyConfig) -> Self {
        Self {
            config,
            ..Self::new(languages)
        }
    }

    /// Appends a language; it loses ties against every earlier one.
    pub fn add_language(&mut self, language: LanguageProfile) {
        self.languages.push(language);
    }

    /// Returns the languages in tie-break order.
    #[inline(always)]
    pub fn languages(&self) -> &[LanguageProfile] {
        &self.languages
    }

    /// Returns the language at `index`, as reported by [`Self::rank`].
    #[inline(always)]
    pub fn language(&self, index: usize) -> Option<&LanguageProfile> {
        self.languages.get(index)
    }

    /// Returns the configuration.
    #[inline(always)]
    pub fn config(&self) -> &IdentifyConfig {
        &self.config
    }

    /// Returns the number of languages.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Returns `true` if no languages are loaded.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Identifies the language of a text.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Decode` if a line of `text` is not valid UTF-8.
    pub fn identify<I, L>(&mut self, text: I) -> Result<Identification, ProfileError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let outcome = identify_language_with(text, &self.languages, &self.config)?;
        self.record(&outcome);
        Ok(outcome)
    }

    /// Identifies the language of a text, scoring languages in parallel.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Decode` if a line of `text` is not valid UTF-8.
    #[cfg(feature = "parallel")]
    pub fn identify_par<I, L>(&mut self, text: I) -> Result<Identification, ProfileError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let outcome =
            crate::identify::ranker::identify_language_par(text, &self.languages, &self.config)?;
        self.record(&outcome);
        Ok(outcome)
    }

    /// Returns up to `limit` positive-scoring languages, best first.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Decode` if a line of `text` is not valid UTF-8.
    pub fn rank<I, L>(&self, text: I, limit: usize) -> Result<Vec<LanguageScore>, ProfileError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        rank_languages(text, &self.languages, &self.config, limit)
    }

    /// Returns basic metrics about the identifier's operation.
    #[inline(always)]
    #[must_use]
    pub fn metrics(&self) -> IdentifierMetrics {
        IdentifierMetrics {
            texts_identified: self.texts_identified,
            matches: self.matches,
            no_matches: self.texts_identified - self.matches,
        }
    }

    fn record(&mut self, outcome: &Identification) {
        self.texts_identified += 1;
        if outcome.is_match() {
            self.matches += 1;
        }
    }
}

/// Basic operational metrics for the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierMetrics {
    /// Total number of texts identified successfully.
    pub texts_identified: u64,
    /// Identifications that found a language.
    pub matches: u64,
    /// Identifications that ended in `NoMatch`.
    pub no_matches: u64,
}
