//! Convenient macros for application messaging and logging.
//!
//! Each macro prints a [`Message`](super::Message) (or any `Display` value)
//! with a status prefix. In debug mode the same text is emitted as a
//! `tracing` event instead, so it lands in the structured log.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when either variable is set:
//! - **`STUDMAN_DEBUG`**: application-specific switch
//! - **`RUST_LOG`**: standard Rust logging configuration
//!
//! The check runs once per process and is cached.
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: plain output
//! - **`msg_success!`**, **`msg_info!`**, **`msg_error!`**: prefixed output
//! - **`msg_debug!`**: debug-mode only
//! - **`msg_bail_anyhow!`**: return early with an `anyhow::Error`
//!
//! ## Usage Examples
//!
//! ```rust
//! use studman::{msg_error, msg_success};
//! use studman::libs::messages::Message;
//!
//! msg_success!(Message::StudentAdded(123456));
//! msg_error!(Message::StudentNotFound(999999));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether output should go through `tracing` rather than plain console writes.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("STUDMAN_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Only emitted in debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($($arg:tt)*) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
