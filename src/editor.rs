use crate::ShellError;
use crate::bin_path::BinPath;
use crate::read_line::ReadLine;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

pub struct Helper {
    pub(crate) bin_path: Rc<RefCell<BinPath>>,
}

impl rustyline::hint::Hinter for Helper {
    type Hint = String;
}

impl rustyline::highlight::Highlighter for Helper {}
impl rustyline::validate::Validator for Helper {}

impl rustyline::Helper for Helper {}

/// Terminal line editor with history and completion of commands.
pub struct Editor {
    editor: rustyline::Editor<Helper, DefaultHistory>,
}

impl Editor {
    pub fn new(bin_path: Rc<RefCell<BinPath>>) -> Result<Self, ShellError> {
        let mut editor = rustyline::Editor::<Helper, DefaultHistory>::new()?;
        editor.set_helper(Some(Helper { bin_path }));

        Ok(Self { editor })
    }
}

impl ReadLine for Editor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::InvalidData => {
                tracing::warn!(%err, "discarding undecodable line");
                Ok(Some(String::new()))
            }
            Err(err) => Err(err.into()),
        }
    }
}
