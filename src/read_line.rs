use crate::ShellError;
use crate::bin_path::BinPath;
use crate::config::Config;
use crate::editor::Editor;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

/// Source of input lines. `None` means end of input.
pub trait ReadLine {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError>;
}

/// Writes the prompt, flushes it, then reads one line.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
pub struct StdinReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdinReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ReadLine for StdinReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}

pub fn new_read_line(config: &Config) -> Result<Box<dyn ReadLine>, ShellError> {
    if config.interactive {
        let bin_path = Rc::new(RefCell::new(BinPath::new()));
        return Ok(Box::new(Editor::new(bin_path)?));
    }

    Ok(Box::new(StdinReader::new(io::stdin().lock(), io::stdout())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn reads_lines_until_eof() {
        let mut output = Vec::new();
        let mut reader = StdinReader::new(Cursor::new("ls # pwd\n\nexit"), &mut output);

        assert_eq!(reader.read_line("$ ").unwrap(), Some(String::from("ls # pwd\n")));
        assert_eq!(reader.read_line("$ ").unwrap(), Some(String::from("\n")));
        assert_eq!(reader.read_line("$ ").unwrap(), Some(String::from("exit")));
        assert_eq!(reader.read_line("$ ").unwrap(), None);

        assert_eq!(String::from_utf8(output).unwrap(), "$ $ $ $ ");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut reader = StdinReader::new(Cursor::new(&b"echo caf\xe9\nls\n"[..]), io::sink());

        assert_eq!(
            reader.read_line("$ ").unwrap(),
            Some(String::from("echo caf\u{FFFD}\n"))
        );
        assert_eq!(reader.read_line("$ ").unwrap(), Some(String::from("ls\n")));
    }
}
