use std::io::{self, BufRead, Write};

/// Print `text` without a trailing newline, flush, and read one line,
/// trimmed. EOF surfaces as `UnexpectedEof` rather than an empty line.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<String> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line.trim().to_string())
}
