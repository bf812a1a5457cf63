use crate::builtin;
use crate::command::{self, Command};
use crate::config::Config;
use crate::executor::Executor;
use crate::parser::Parser;
use crate::print_to;
use crate::read_line::ReadLine;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

pub struct Shell {
    config: Config,
    reader: Box<dyn ReadLine>,
    errors: Box<dyn Write>,
    executor: Executor,
}

impl Shell {
    pub fn new(config: Config, reader: Box<dyn ReadLine>, errors: Box<dyn Write>) -> Self {
        Self {
            executor: Executor::new(config.name.clone()),
            config,
            reader,
            errors,
        }
    }

    /// Runs until `exit`/`quit` or end of input.
    pub fn repl(&mut self) -> anyhow::Result<()> {
        while let Some(line) = self.reader.read_line(&self.config.prompt)? {
            if self.eval(&line)? == Control::Exit {
                break;
            }
        }

        Ok(())
    }

    pub fn eval(&mut self, line: &str) -> io::Result<Control> {
        let commands = Parser::new(Some(line)).parse();
        let command = command::classify(commands.first());
        tracing::debug!(commands = commands.len(), ?command, "parsed line");

        match command {
            Command::Empty => {}
            Command::Exit => return Ok(Control::Exit),
            Command::ChangeDirectory(target) => {
                if let Err(err) = builtin::change_directory(target, self.config.home.as_deref()) {
                    print_to!(self.errors, "{}: {err}\n", self.config.name);
                }
            }
            Command::External => {
                self.executor.run(&commands, &mut *self.errors)?;
            }
        }

        Ok(Control::Continue)
    }
}
