//! User-facing text and the macros that route it to the console or to `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
