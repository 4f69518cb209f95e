use std::io::{self, BufRead, Read, Write};
use thiserror::Error;

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

#[derive(Debug, Error)]
pub enum InputError {
    #[error("No input received (stdin was closed)")]
    EndOfInput,

    #[error(
        "Input line exceeds maximum allowed size (1 MB).\n\n\
         Consider splitting the text into smaller parts."
    )]
    TooLarge,

    #[error("Input is empty")]
    Empty,

    #[error("Input is not valid UTF-8")]
    InvalidUtf8,

    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Prompts on `output` and reads a single line from `input`.
pub struct InputReader;

impl InputReader {
    /// Writes `message` (no newline), then reads one line.
    ///
    /// The trailing line ending is removed; everything else is returned as typed.
    pub fn prompt_line<R, W>(input: &mut R, output: &mut W, message: &str) -> Result<String, InputError>
    where
        R: BufRead,
        W: Write,
    {
        write!(output, "{message}")?;
        output.flush()?;

        Self::read_line(input)
    }

    pub fn read_line<R: BufRead>(input: &mut R) -> Result<String, InputError> {
        let mut buffer = Vec::new();
        // Room for a full-size line plus "\r\n".
        let limit = (MAX_INPUT_SIZE + 2) as u64;

        let bytes_read = input.by_ref().take(limit).read_until(b'\n', &mut buffer)?;

        if bytes_read == 0 {
            return Err(InputError::EndOfInput);
        }

        if buffer.ends_with(b"\n") {
            buffer.pop();
            if buffer.ends_with(b"\r") {
                buffer.pop();
            }
        }

        if buffer.len() > MAX_INPUT_SIZE {
            return Err(InputError::TooLarge);
        }

        String::from_utf8(buffer).map_err(|_| InputError::InvalidUtf8)
    }
}
