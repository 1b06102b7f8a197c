//! Transport-agnostic layer.

pub mod endpoint;
pub mod error;
pub mod routes;
pub(crate) mod url;

pub use endpoint::*;
pub use error::*;
