//! Generate passwords from command-line flags.

use std::io::Write;

use crate::cli::GenArgs;
use crate::clipboard::ClipboardWriter;
use crate::error::Result;
use crate::generator;
use crate::session::SessionRequest;

pub fn run<W, C>(args: &GenArgs, output: &mut W, clipboard: &mut C) -> Result<()>
where
    W: Write,
    C: ClipboardWriter + ?Sized,
{
    let request = SessionRequest::try_new(
        args.count,
        args.length,
        !args.no_uppercase,
        !args.no_lowercase,
        !args.no_digits,
        !args.no_symbols,
    )?;

    let mut last = None;
    for _ in 0..request.count {
        let pwd = generator::generate(&request.config)?;
        writeln!(output, "{}", pwd.as_str())?;
        last = Some(pwd);
    }

    if let (true, Some(pwd)) = (args.copy, last) {
        match clipboard.set(&pwd) {
            Ok(()) => eprintln!("Password copied to clipboard!"),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                eprintln!("Failed to copy to clipboard: {}", e);
            }
        }
    }

    Ok(())
}
