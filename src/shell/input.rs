use std::io::{self, BufRead, Write};

/// Prompts for a line of text and returns it trimmed
///
/// Blank input is returned as an empty string; deciding what blank means is
/// the screen's concern.
pub fn prompt_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompts for a number, re-prompting until the input parses
///
/// A closed input stream surfaces as `ErrorKind::UnexpectedEof` so the
/// caller can wind the session down instead of looping forever.
pub fn prompt_number<R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<u32>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => {
                write!(output, "Please enter a valid number: ")?;
                output.flush()?;
            }
        }
    }
}
