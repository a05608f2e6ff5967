pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{Defaults, EolStyle, IndentStyle, Verdict, MIXED_TAB_WIDTH};
