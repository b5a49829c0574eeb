// Types representing the reckon formula language

mod types;

// Re-export all public symbols
pub use types::*;
