//! Token credential types produced by the handshake operations.

pub mod secret;
pub mod token;

pub use secret::*;
pub use token::*;
