pub mod cs;
pub mod error;

pub use cs::lists;
pub use error::{Error, Result};
