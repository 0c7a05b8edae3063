//! Terminal helpers shared by the binaries

use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr.
///
/// `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

/// Print `message` and read one trimmed line from stdin
pub fn prompt(message: &str) -> io::Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_answer(message, &mut stdin.lock(), &mut stdout.lock())
}

fn read_answer<R: BufRead, W: Write>(
    message: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_answer_trims() {
        let mut input = io::Cursor::new(b"  https://imgur.com/fZA6P5X \r\n".to_vec());
        let mut output = Vec::new();

        let answer = read_answer("URL: ", &mut input, &mut output).unwrap();

        assert_eq!(answer, "https://imgur.com/fZA6P5X");
        assert_eq!(output, b"URL: ");
    }

    #[test]
    fn test_read_answer_at_eof_is_empty() {
        let mut input = io::Cursor::new(Vec::new());
        let mut output = Vec::new();

        assert_eq!(read_answer("? ", &mut input, &mut output).unwrap(), "");
    }
}
