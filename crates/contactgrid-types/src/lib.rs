pub mod contact;
pub mod date;
pub mod error;

pub use contact::*;
pub use date::{parse_date, to_iso};
pub use error::{Error, Result};
