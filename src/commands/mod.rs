//! Command dispatch layer for pwsmith.
//!
//! This module maps parsed CLI commands to their concrete implementations.
//! Each command lives in its own file and exposes a single `run()` function.

use std::io;

use crate::cli::{Cli, Commands};
use crate::clipboard::SystemClipboard;
use crate::error::Result;

pub mod gen_pw;
pub mod interactive;

pub fn dispatch(cli: Cli) -> Result<()> {
    let mut clipboard = SystemClipboard::new();

    match cli.command {
        None | Some(Commands::Interactive) => {
            let stdin = io::stdin();
            interactive::run(&mut stdin.lock(), &mut io::stdout(), &mut clipboard)
        }
        Some(Commands::Gen(args)) => gen_pw::run(&args, &mut io::stdout(), &mut clipboard),
    }
}
