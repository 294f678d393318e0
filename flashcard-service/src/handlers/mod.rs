//! HTTP handlers for the flashcard service.

pub mod flashcards;
pub mod health;
pub mod pages;

pub use flashcards::{process_image, process_text};
pub use health::health_check;
pub use pages::index;
