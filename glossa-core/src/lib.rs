//! Trigram-profile language identification.
//!
//! A text is reduced to a profile of character trigrams (windows of three
//! Unicode code points) and compared with precomputed per-language profiles.
//! The pipeline runs in three steps:
//!
//! - **analyzer**: input lines and code-point windowing
//! - **profile**: trigram counting and normalization
//! - **identify**: similarity scoring and ranking
//!
//! # Example
//!
//! ```
//! use glossa_core::identify::identify_language;
//! use glossa_core::profile::LanguageProfile;
//! use glossa_types::WindowMode;
//!
//! let languages = vec![
//!     LanguageProfile::from_text("en", ["the cat sat on the mat"], WindowMode::Trailing).unwrap(),
//!     LanguageProfile::from_text("es", ["el gato en la alfombra"], WindowMode::Trailing).unwrap(),
//! ];
//!
//! let outcome = identify_language(["the mat"], &languages).unwrap();
//! assert_eq!(outcome.code(), Some("en"));
//! ```

pub mod analyzer;
pub mod identify;
pub mod profile;

pub use glossa_types::{
    Identification, IdentifyConfig, LanguageScore, ProfileError, TextScaling, Trigram,
    TrigramError, WindowMode,
};
