pub mod generator;
pub mod providers;
pub mod resolver;

pub use generator::{FlashcardGenerator, GenerationInput};
