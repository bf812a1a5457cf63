use purvis::config::Config;
use purvis::read_line::new_read_line;
use purvis::shell::Shell;
use std::io;

fn main() -> anyhow::Result<()> {
    purvis::logging::init()?;

    let config = Config::from_env();
    let reader = new_read_line(&config)?;
    let mut shell = Shell::new(config, reader, Box::new(io::stderr()));

    shell.repl()
}
