pub mod bin_path;
pub mod builtin;
pub mod command;
pub mod completion;
pub mod config;
pub mod editor;
pub mod executor;
pub mod logging;
pub mod macros;
pub mod parser;
pub mod read_line;
pub mod shell;
pub mod tokenizer;

use std::io;
use std::path::PathBuf;

pub static BUILTIN_COMMANDS: &[&str] = &["exit", "quit", "cd", "chdir"];

#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    #[error("{program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("cd: {}: {source}", path.display())]
    ChangeDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cd: HOME not set")]
    HomeNotSet,
    #[error("read line: {0}")]
    Io(#[from] io::Error),
    #[error("read line: {0}")]
    Editor(#[from] rustyline::error::ReadlineError),
}
