//! Command-line interface definitions for pwsmith.
//!
//! This module defines the public CLI surface using `clap`. It contains no
//! application logic.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pwsmith",
    version,
    about = "Generate secure random passwords",
    long_about = r#"
pwsmith generates random passwords from any mix of uppercase letters,
lowercase letters, digits and symbols, and can copy them to the clipboard.

Every character is drawn independently and uniformly from the operating
system's cryptographically secure random source.

Typical usage:
  pwsmith                  (interactive prompts)
  pwsmith gen -n 5 -l 20
  pwsmith gen --no-symbols --copy
"#,
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute; defaults to the interactive session
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask for the settings interactively
    ///
    /// Prompts for the number of passwords, their length and the
    /// character classes to use, then offers to copy each password.
    Interactive,

    /// Generate passwords from command-line flags
    ///
    /// Passwords are printed one per line with nothing else on stdout,
    /// so the output can be piped.
    Gen(GenArgs),
}

#[derive(Args, Clone, Debug)]
pub struct GenArgs {
    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1, allow_negative_numbers = true)]
    pub count: i64,

    /// Length of each password
    #[arg(short, long, default_value_t = 16, allow_negative_numbers = true)]
    pub length: i64,

    /// Exclude uppercase characters (A–Z)
    #[arg(long)]
    pub no_uppercase: bool,

    /// Exclude lowercase characters (a–z)
    #[arg(long)]
    pub no_lowercase: bool,

    /// Exclude digits (0–9)
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude symbols (e.g. !@#$%)
    #[arg(long)]
    pub no_symbols: bool,

    /// Copy the last generated password to the clipboard
    #[arg(short, long)]
    pub copy: bool,
}
