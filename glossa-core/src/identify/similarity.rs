//! Similarity scoring.

use crate::profile::TrigramProfile;

/// Dot product of two profiles over their shared trigrams.
///
/// Trigrams missing from either side contribute nothing. With both sides
/// scaled by [`normalize_trigram_profile`](crate::profile::normalize_trigram_profile)
/// this is the cosine score used for ranking; no magnitude division is done.
///
/// The smaller profile is walked and probed against the larger one.
#[inline]
pub fn cosine_similarity(a: &TrigramProfile, b: &TrigramProfile) -> f32 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut sum = 0f64;
    for (trigram, weight) in small.iter() {
        if let Some(other) = large.get(trigram) {
            sum += f64::from(weight) * f64::from(other);
        }
    }

    sum as f32
}
