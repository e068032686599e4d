#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

pub mod error;
pub use error::*;
pub mod client;
pub use client::*;
pub mod query;
pub use query::*;
pub mod request;
pub use request::*;
pub mod sheets;
pub use sheets::*;
pub(crate) mod utils;
