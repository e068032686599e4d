//! Google Sheets v4 operations

pub mod models;
pub use models::*;
pub mod spreadsheet;
pub use spreadsheet::*;
pub mod values;
pub use values::*;
