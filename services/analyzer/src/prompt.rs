//! Console prompt helpers for the interactive session.

use std::io::{self, ErrorKind, Write};

/// Print a question and read one trimmed line of input.
pub fn line(question: &str) -> io::Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::new(ErrorKind::UnexpectedEof, "end of input"));
    }
    Ok(buf.trim().to_string())
}

/// Ask a yes/no question until the answer is recognizable.
///
/// Accepts the same leading letters the original shell did: Y/y/T/t for
/// yes, N/n/F/f for no.
pub fn yes_no(question: &str) -> io::Result<bool> {
    loop {
        let answer = line(question)?;
        match answer.chars().next() {
            Some('Y' | 'y' | 'T' | 't') => return Ok(true),
            Some('N' | 'n' | 'F' | 'f') => return Ok(false),
            _ => println!("Please check the input."),
        }
    }
}
