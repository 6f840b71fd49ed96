//! Profile building from raw text lines.

use crate::analyzer::trigram::{StrictWindowExtractor, TrailingWindowExtractor, TrigramExtractor};
use crate::profile::TrigramProfile;
use glossa_types::{ProfileError, WindowMode};
use smallvec::SmallVec;
use tracing::warn;

/// Code points decoded per line before spilling to the heap.
const LINE_INLINE_CHARS: usize = 256;

/// Builds a trigram profile with the default [`WindowMode`].
///
/// See [`build_trigram_profile_with`].
pub fn build_trigram_profile<I, L>(text: I) -> Result<TrigramProfile, ProfileError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    build_trigram_profile_with(text, WindowMode::default())
}

/// Builds a trigram profile of raw occurrence counts from lines of text.
///
/// Each line loses one trailing `\r`, is decoded as UTF-8 and windowed by
/// code point. Lines with fewer than 3 code points are skipped. Trigrams
/// never span lines; counts accumulate over the whole text.
///
/// # Errors
///
/// Returns `ProfileError::Decode` for the first line that is not valid UTF-8.
pub fn build_trigram_profile_with<I, L>(
    text: I,
    mode: WindowMode,
) -> Result<TrigramProfile, ProfileError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    match mode {
        WindowMode::Trailing => build_with_extractor(text, &TrailingWindowExtractor),
        WindowMode::Strict => build_with_extractor(text, &StrictWindowExtractor),
    }
}

fn build_with_extractor<I, L, E>(text: I, extractor: &E) -> Result<TrigramProfile, ProfileError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
    E: TrigramExtractor,
{
    let mut profile = TrigramProfile::new();
    let mut chars: SmallVec<[char; LINE_INLINE_CHARS]> = SmallVec::new();

    for (index, line) in text.into_iter().enumerate() {
        let bytes = line.as_ref();
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);

        let decoded = core::str::from_utf8(bytes).map_err(|err| {
            warn!(
                line = index,
                valid_up_to = err.valid_up_to(),
                "rejecting text with invalid UTF-8"
            );
            ProfileError::Decode {
                line: index,
                valid_up_to: err.valid_up_to(),
            }
        })?;

        chars.clear();
        chars.extend(decoded.chars());

        if chars.len() < 3 {
            continue;
        }

        extractor.extract(&chars, |trigram| profile.increment(trigram));
    }

    Ok(profile)
}
