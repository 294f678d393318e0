//! Domain models for the flashcard service.

pub mod flashcard;

pub use flashcard::Flashcard;
