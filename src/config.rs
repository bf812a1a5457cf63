use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

pub const SHELL_NAME: &str = "purvis";
pub const LOG_ENV: &str = "PURVIS_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub name: String,
    pub prompt: String,
    pub home: Option<PathBuf>,
    pub interactive: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            home: env::var_os("HOME")
                .filter(|home| !home.is_empty())
                .map(PathBuf::from),
            interactive: io::stdin().is_terminal(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: SHELL_NAME.to_string(),
            prompt: format!("{SHELL_NAME}: "),
            home: None,
            interactive: false,
        }
    }
}
