//! Credential helpers: redacted secrets and caller-side CSRF state tokens.

pub mod secret;
pub mod state;

pub use secret::*;
pub use state::*;
