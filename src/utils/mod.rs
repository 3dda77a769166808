//! Utility functions and data structures.
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration file in the app data directory
//! - [`encoding`] - Hex encoding and byte escaping
//! - [`progress`] - Spinners (no-op without the `progress` feature)
//!
//! ## Key Functions
//!
//! ```
//! use strand::utils::{escape_bytes, hex_encode};
//!
//! assert_eq!(hex_encode(b"\x01\xab"), b"01ab");
//! assert_eq!(escape_bytes(b"ok\x00"), "ok\\x00");
//! ```

pub mod app_data;
pub mod encoding;
pub mod progress;

pub use app_data::*;
pub use encoding::*;
