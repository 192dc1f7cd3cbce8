//! The password session: collect settings, generate, offer to copy.
//!
//! A session reads all of its settings up front and validates them before
//! the first password is produced. Any malformed number or invalid setting
//! ends the session with nothing generated; there is no re-prompting.

use std::io::{BufRead, Write};

use crate::clipboard::ClipboardWriter;
use crate::error::{Result, SessionError};
use crate::generator::{self, GenerationConfig};
use crate::ui;

/// A validated request: how many passwords, and how to build each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRequest {
    pub count: usize,
    pub config: GenerationConfig,
}

impl SessionRequest {
    /// Validate raw settings.
    ///
    /// Checks run in order: count, character classes, length.
    pub fn try_new(
        count: i64,
        length: i64,
        use_uppercase: bool,
        use_lowercase: bool,
        use_digits: bool,
        use_symbols: bool,
    ) -> Result<Self> {
        let count = usize::try_from(count)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(SessionError::InvalidCount)?;

        let config = GenerationConfig::try_new(
            length,
            use_uppercase,
            use_lowercase,
            use_digits,
            use_symbols,
        )?;

        Ok(Self { count, config })
    }
}

/// What happened during [`run`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub generated: usize,
    pub copied: usize,
    pub copy_failures: usize,
}

fn read_integer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    field: &'static str,
) -> Result<i64> {
    let raw = ui::prompt_line(input, output, prompt)?.unwrap_or_default();
    raw.trim()
        .parse::<i64>()
        .map_err(|_| SessionError::parse(field, raw))
}

/// Prompt for every session setting and validate the answers.
///
/// # Errors
///
/// - [`SessionError::Parse`] as soon as a number fails to parse
/// - [`SessionError::InvalidCount`] or a generation error once all
///   answers are in
pub fn collect_request<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<SessionRequest> {
    let count = read_integer(input, output, "Enter number of passwords: ", "password count")?;
    let length = read_integer(input, output, "Enter password length: ", "password length")?;

    let use_uppercase = ui::prompt_yes(input, output, "Include uppercase letters?")?;
    let use_lowercase = ui::prompt_yes(input, output, "Include lowercase letters?")?;
    let use_digits = ui::prompt_yes(input, output, "Include digits?")?;
    let use_symbols = ui::prompt_yes(input, output, "Include symbols?")?;

    let request = SessionRequest::try_new(
        count,
        length,
        use_uppercase,
        use_lowercase,
        use_digits,
        use_symbols,
    )?;
    tracing::debug!(?request, "session settings accepted");
    Ok(request)
}

/// Generate `request.count` passwords, printing each and offering to copy it.
///
/// Clipboard failures are reported on `output` and the session carries on
/// with the next password.
pub fn run<R, W, C>(
    input: &mut R,
    output: &mut W,
    clipboard: &mut C,
    request: &SessionRequest,
) -> Result<SessionSummary>
where
    R: BufRead,
    W: Write,
    C: ClipboardWriter + ?Sized,
{
    let mut summary = SessionSummary::default();

    for _ in 0..request.count {
        let password = generator::generate(&request.config)?;
        summary.generated += 1;
        writeln!(output, "Generated Password: {}", password.as_str())?;

        if !ui::prompt_yes(input, output, "Copy to clipboard?")? {
            continue;
        }

        match clipboard.set(&password) {
            Ok(()) => {
                summary.copied += 1;
                writeln!(output, "Password copied to clipboard!")?;
            }
            Err(e) => {
                summary.copy_failures += 1;
                tracing::warn!(error = %e, "clipboard copy failed");
                writeln!(output, "Failed to copy to clipboard: {}", e)?;
            }
        }
    }

    tracing::info!(
        generated = summary.generated,
        copied = summary.copied,
        copy_failures = summary.copy_failures,
        "session finished"
    );
    Ok(summary)
}

/// Full interactive session: [`collect_request`] followed by [`run`].
pub fn interactive<R, W, C>(input: &mut R, output: &mut W, clipboard: &mut C) -> Result<SessionSummary>
where
    R: BufRead,
    W: Write,
    C: ClipboardWriter + ?Sized,
{
    let request = collect_request(input, output)?;
    run(input, output, clipboard, &request)
}
