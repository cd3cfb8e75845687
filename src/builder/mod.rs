//! Builder API for ergonomic page construction.
//!
//! Pages usually come from configuration files (see [`crate::page`]); this
//! module covers building them in code, plus the `state_enum!` macro for
//! declaring controller states.

pub mod error;
pub mod macros;
pub mod page;

pub use error::BuildError;
pub use page::PageBuilder;
