//! Line-based prompting for strings and integers

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::error::InputError;

/// Source of user answers. The menu only talks to this trait, so a
/// scripted source can stand in for the terminal.
pub trait InputSource {
    /// Show `prompt`, return the next line as typed (line ending removed).
    fn read_string(&mut self, prompt: &str) -> Result<String, InputError>;

    /// Show `prompt`, then keep reading lines until one parses as an integer.
    fn read_int(&mut self, prompt: &str) -> Result<i64, InputError>;
}

/// Prompts on `W`, reads answers from `R`.
pub struct ConsoleInput<R, W> {
    reader: R,
    prompts: W,
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    /// Attached to the process terminal
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, prompts: W) -> Self {
        Self { reader, prompts }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.prompts)
    }

    fn next_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn show(&mut self, text: &str) -> Result<(), InputError> {
        writeln!(self.prompts, "{}", text)?;
        self.prompts.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn read_string(&mut self, prompt: &str) -> Result<String, InputError> {
        self.show(prompt)?;
        self.next_line()
    }

    fn read_int(&mut self, prompt: &str) -> Result<i64, InputError> {
        self.show(prompt)?;
        loop {
            let line = self.next_line()?;
            match line.parse::<i64>() {
                Ok(v) => return Ok(v),
                Err(e) => {
                    debug!(input = %line, "not an integer: {}", e);
                    self.show("Invalid input. Please enter a valid number.")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(text: &str) -> ConsoleInput<Cursor<&str>, Vec<u8>> {
        ConsoleInput::new(Cursor::new(text), Vec::new())
    }

    fn prompts(input: ConsoleInput<Cursor<&str>, Vec<u8>>) -> String {
        String::from_utf8(input.into_parts().1).unwrap()
    }

    #[test]
    fn test_read_int_reprompts_until_valid() {
        let mut input = scripted("abc\n42\n");
        assert_eq!(input.read_int("Enter:").unwrap(), 42);
        assert_eq!(
            prompts(input),
            "Enter:\nInvalid input. Please enter a valid number.\n"
        );
    }

    #[test]
    fn test_read_int_no_trimming() {
        let mut input = scripted(" 7\n\n-3\n");
        assert_eq!(input.read_int("n").unwrap(), -3);
        assert_eq!(prompts(input).matches("Invalid input").count(), 2);
    }

    #[test]
    fn test_read_string_verbatim() {
        let mut input = scripted("  spaced out  \n\nlast\r\n");
        assert_eq!(input.read_string("a").unwrap(), "  spaced out  ");
        assert_eq!(input.read_string("b").unwrap(), "");
        assert_eq!(input.read_string("c").unwrap(), "last");
        assert_eq!(prompts(input), "a\nb\nc\n");
    }

    #[test]
    fn test_final_line_without_newline() {
        let mut input = scripted("5");
        assert_eq!(input.read_int("n").unwrap(), 5);
    }

    #[test]
    fn test_exhausted_input_is_closed() {
        let mut input = scripted("nope\n");
        assert!(matches!(input.read_int("n"), Err(InputError::Closed)));
        assert!(matches!(input.read_string("s"), Err(InputError::Closed)));
    }
}
