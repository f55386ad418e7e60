//! Core definitions (error and result types), relied upon by all tessera-* crates.

pub mod error;
pub mod result;

pub use result::Result;
