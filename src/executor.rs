use crate::ShellError;
use crate::parser::{ArgumentList, CommandList};
use crate::print_to;
use std::io::{self, Write};
use std::process::{self, Child, ExitStatus};

pub type ExitCode = i32;

/// What happened to the most recently spawned child of a line.
enum SpawnOutcome {
    Running(Child),
    /// The program could not be loaded; behaves like a child that already exited.
    Failed(ExitCode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Execution {
    pub spawned: usize,
    /// Exit code of the last spawned child, the only one waited for.
    pub status: Option<ExitCode>,
    /// Children still owned by the executor without having been reaped.
    pub detached: usize,
}

/// Runs every argument list of a line as its own child process.
///
/// Children are started left to right and only the last one is waited for.
/// The others are kept as detached handles and collected without blocking
/// at the start of a later run.
pub struct Executor {
    name: String,
    detached: Vec<Child>,
}

impl Executor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detached: Vec::new(),
        }
    }

    pub fn run(&mut self, commands: &CommandList, errors: &mut dyn Write) -> io::Result<Execution> {
        self.run_with(commands, errors, spawn)
    }

    fn run_with(
        &mut self,
        commands: &CommandList,
        errors: &mut dyn Write,
        mut spawn: impl FnMut(&ArgumentList) -> io::Result<Child>,
    ) -> io::Result<Execution> {
        self.reap_detached();

        let mut spawned = 0;
        let mut last: Option<SpawnOutcome> = None;

        for args in commands {
            let Some(program) = args.program() else {
                continue;
            };

            let Some(outcome) = self.settle(program, spawn(args), errors)? else {
                continue;
            };

            spawned += 1;
            if let Some(SpawnOutcome::Running(previous)) = last.replace(outcome) {
                self.detached.push(previous);
            }
        }

        let status = match last {
            Some(SpawnOutcome::Running(mut child)) => match child.wait() {
                Ok(status) => Some(exit_code(status)),
                Err(err) => {
                    tracing::warn!(pid = child.id(), %err, "wait failed");
                    None
                }
            },
            Some(SpawnOutcome::Failed(code)) => Some(code),
            None => None,
        };
        tracing::debug!(spawned, ?status, detached = self.detached.len(), "line finished");

        Ok(Execution {
            spawned,
            status,
            detached: self.detached.len(),
        })
    }

    /// Reports a failed spawn. `None` means the entry was abandoned and is not a wait candidate.
    fn settle(
        &self,
        program: &str,
        spawned: io::Result<Child>,
        errors: &mut dyn Write,
    ) -> io::Result<Option<SpawnOutcome>> {
        match spawned {
            Ok(child) => {
                tracing::debug!(pid = child.id(), program, "spawned");
                Ok(Some(SpawnOutcome::Running(child)))
            }
            Err(source) if is_resource_exhaustion(&source) => {
                let err = ShellError::Spawn {
                    program: program.to_string(),
                    source,
                };
                tracing::debug!(%err, "spawn abandoned");
                print_to!(errors, "{}: {err}\n", self.name);
                Ok(None)
            }
            Err(source) => {
                tracing::debug!(program, %source, "exec failed");
                print_to!(errors, "{}: {program}: command not found\n", self.name);
                Ok(Some(SpawnOutcome::Failed(1)))
            }
        }
    }

    pub fn detached(&self) -> usize {
        self.detached.len()
    }

    /// Collects detached children that already exited. Never blocks.
    pub fn reap_detached(&mut self) {
        self.detached.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                tracing::debug!(pid = child.id(), code = exit_code(status), "collected detached child");
                false
            }
            Ok(None) => true,
            Err(err) => {
                tracing::warn!(pid = child.id(), %err, "polling detached child");
                false
            }
        });
    }
}

fn spawn(args: &ArgumentList) -> io::Result<Child> {
    process::Command::new(&args[0])
        .args(args.args())
        .stdin(process::Stdio::inherit())
        .stdout(process::Stdio::inherit())
        .stderr(process::Stdio::inherit())
        .spawn()
}

/// The OS could not create a process at all, as opposed to failing to load the program.
fn is_resource_exhaustion(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::OutOfMemory
    )
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> ExitCode {
    use std::os::unix::process::ExitStatusExt;
    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => -1,
    }
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> ExitCode {
    status.code().unwrap_or(-1)
}
