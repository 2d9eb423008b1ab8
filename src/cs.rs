pub mod lists;

// Re-export all modules
pub use lists::*;
