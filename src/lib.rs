/// Portal-SDK – async client for the licensing portal read API.
pub mod core;
pub mod transport;

pub mod client_async;

pub use client_async::{PortalAsync, PortalAsyncBuilder};
pub use core::*;
