//! pwsmith — secure random password generation.
//!
//! - [`generator`]: builds an alphabet from character classes and draws
//!   passwords from the OS CSPRNG
//! - [`session`]: prompts for settings, generates, offers clipboard copies
//! - [`clipboard`]: the [`ClipboardWriter`](clipboard::ClipboardWriter)
//!   capability and its system implementation
//! - [`cli`] and [`commands`]: the binary's argument parsing and dispatch

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod error;
pub mod generator;
pub mod session;
pub mod ui;

pub use error::{ClipboardError, GenerateError, Result, SessionError};
pub use generator::{generate, GenerationConfig};
