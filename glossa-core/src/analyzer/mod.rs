//! Text analysis pipeline.
//!
//! This module provides the input side of identification:
//! - **Text**: Raw input lines, in document order
//! - **Trigram**: Extracts code-point windows from decoded lines

pub mod text;
pub mod trigram;

pub use text::Text;
pub use trigram::TrigramExtractor;
