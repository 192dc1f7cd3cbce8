//! Run the interactive password session.

use std::io::{BufRead, Write};

use crate::clipboard::ClipboardWriter;
use crate::error::Result;
use crate::session;

pub fn run<R, W, C>(input: &mut R, output: &mut W, clipboard: &mut C) -> Result<()>
where
    R: BufRead,
    W: Write,
    C: ClipboardWriter + ?Sized,
{
    session::interactive(input, output, clipboard)?;
    Ok(())
}
