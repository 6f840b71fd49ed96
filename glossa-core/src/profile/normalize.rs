//! Profile normalization.

use crate::profile::TrigramProfile;
use glossa_types::ProfileError;

/// Rescales a profile in place by the square root of its total weight.
///
/// Every weight `w` becomes `w / sqrt(Σw)`. This is not an L2 unit vector;
/// existing language profile data was built with this exact scale and the
/// similarity scores rely on both sides using it.
///
/// # Errors
///
/// Returns `ProfileError::EmptyProfile` when the total weight is zero (or
/// otherwise not a positive finite number). The profile is left untouched.
pub fn normalize_trigram_profile(profile: &mut TrigramProfile) -> Result<(), ProfileError> {
    let total = profile.total_weight();
    if !(total > 0.0 && total.is_finite()) {
        return Err(ProfileError::EmptyProfile);
    }

    let scale = total.sqrt();
    for weight in profile.weights_mut() {
        *weight = (f64::from(*weight) / scale) as f32;
    }

    Ok(())
}
