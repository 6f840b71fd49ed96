//! Language ranking.

use crate::identify::similarity::cosine_similarity;
use crate::profile::{
    build_trigram_profile_with, normalize_trigram_profile, LanguageProfile, TrigramProfile,
};
use glossa_types::{Identification, IdentifyConfig, LanguageScore, ProfileError, TextScaling};
use smallvec::SmallVec;
use tracing::{debug, trace};

/// Identifies the language of a text with the default [`IdentifyConfig`].
///
/// See [`identify_language_with`].
pub fn identify_language<I, L>(
    text: I,
    languages: &[LanguageProfile],
) -> Result<Identification, ProfileError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    identify_language_with(text, languages, &IdentifyConfig::default())
}

/// Identifies the language of a text.
///
/// Languages are scored in slice order. A language becomes the answer only
/// if it scores strictly higher than the best so far (starting at 0), so on
/// equal scores the earlier language wins. Nothing above 0, including an
/// empty `languages`, gives `Identification::NoMatch`.
///
/// # Errors
///
/// Returns `ProfileError::Decode` if a line of `text` is not valid UTF-8.
pub fn identify_language_with<I, L>(
    text: I,
    languages: &[LanguageProfile],
    config: &IdentifyConfig,
) -> Result<Identification, ProfileError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    let text_profile = prepare_text_profile(text, config)?;
    let scores = languages
        .iter()
        .map(|language| score_language(&text_profile, language));

    let best = select_best(scores);
    Ok(to_identification(best, languages, &text_profile))
}

/// Identifies the language of a text, scoring languages on the rayon pool.
///
/// Scores are gathered in slice order before the best one is picked, so the
/// answer is always the same as [`identify_language_with`].
///
/// # Errors
///
/// Returns `ProfileError::Decode` if a line of `text` is not valid UTF-8.
#[cfg(feature = "parallel")]
pub fn identify_language_par<I, L>(
    text: I,
    languages: &[LanguageProfile],
    config: &IdentifyConfig,
) -> Result<Identification, ProfileError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    use rayon::prelude::*;

    let text_profile = prepare_text_profile(text, config)?;
    let scores: Vec<f32> = languages
        .par_iter()
        .map(|language| score_language(&text_profile, language))
        .collect();

    let best = select_best(scores);
    Ok(to_identification(best, languages, &text_profile))
}

/// Scores every language and returns those above zero, best first.
///
/// Equal scores keep slice order. At most `limit` entries are returned; the
/// first one is the language [`identify_language_with`] picks.
///
/// # Errors
///
/// Returns `ProfileError::Decode` if a line of `text` is not valid UTF-8.
pub fn rank_languages<I, L>(
    text: I,
    languages: &[LanguageProfile],
    config: &IdentifyConfig,
    limit: usize,
) -> Result<Vec<LanguageScore>, ProfileError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    if limit == 0 {
        return Ok(Vec::new());
    }

    let text_profile = prepare_text_profile(text, config)?;

    let mut results: SmallVec<[LanguageScore; 64]> = languages
        .iter()
        .enumerate()
        .map(|(index, language)| LanguageScore::new(index, score_language(&text_profile, language)))
        .filter(|s| s.score > 0.0)
        .collect();

    if results.len() > limit {
        results.select_nth_unstable_by(limit, |a, b| b.cmp(a));
        results.truncate(limit);
    }
    results.sort_unstable_by(|a, b| b.cmp(a));

    Ok(results.into_vec())
}

pub(crate) fn prepare_text_profile<I, L>(
    text: I,
    config: &IdentifyConfig,
) -> Result<TrigramProfile, ProfileError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    let mut profile = build_trigram_profile_with(text, config.window)?;
    if config.text_scaling == TextScaling::Normalized && !profile.is_empty() {
        normalize_trigram_profile(&mut profile)?;
    }
    Ok(profile)
}

#[inline]
fn score_language(text_profile: &TrigramProfile, language: &LanguageProfile) -> f32 {
    let score = cosine_similarity(text_profile, language.profile());
    trace!(language = language.code(), score, "scored language");
    score
}

/// Picks the first strictly highest score above zero.
pub(crate) fn select_best<S>(scores: S) -> Option<LanguageScore>
where
    S: IntoIterator<Item = f32>,
{
    let mut best: Option<LanguageScore> = None;
    let mut max = 0f32;

    for (index, score) in scores.into_iter().enumerate() {
        if score > max {
            max = score;
            best = Some(LanguageScore::new(index, score));
        }
    }

    best
}

fn to_identification(
    best: Option<LanguageScore>,
    languages: &[LanguageProfile],
    text_profile: &TrigramProfile,
) -> Identification {
    let outcome = match best.and_then(|b| languages.get(b.index).map(|l| (l, b.score))) {
        Some((language, score)) => Identification::Match {
            code: language.code().to_string(),
            score,
        },
        None => Identification::NoMatch,
    };

    debug!(
        trigrams = text_profile.len(),
        languages = languages.len(),
        outcome = %outcome,
        "identified text"
    );

    outcome
}
