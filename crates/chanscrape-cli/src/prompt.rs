use std::io::{BufRead, Write};

pub(crate) const URL_PROMPT: &str = "Enter YouTube channel URL: ";

/// Shows `prompt` and reads one line. Only surrounding whitespace is removed;
/// the URL itself is not validated.
pub(crate) fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> std::io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
