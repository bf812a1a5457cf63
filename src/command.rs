use crate::parser::ArgumentList;

/// What the shell should do with the first argument list of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Empty,
    Exit,
    ChangeDirectory(Option<&'a str>),
    External,
}

pub fn classify(args: &ArgumentList) -> Command<'_> {
    match args.program() {
        None => Command::Empty,
        Some("exit" | "quit") if args.len() == 1 => Command::Exit,
        Some("cd" | "chdir") => Command::ChangeDirectory(args.get(1)),
        Some(_) => Command::External,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], Command::Empty)]
    #[case(vec!["exit"], Command::Exit)]
    #[case(vec!["quit"], Command::Exit)]
    #[case(vec!["exit", "now"], Command::External)]
    #[case(vec!["quit", "0"], Command::External)]
    #[case(vec!["EXIT"], Command::External)]
    #[case(vec!["cd"], Command::ChangeDirectory(None))]
    #[case(vec!["cd", "/tmp"], Command::ChangeDirectory(Some("/tmp")))]
    #[case(vec!["chdir", "/tmp", "ignored"], Command::ChangeDirectory(Some("/tmp")))]
    #[case(vec!["ls", "-la"], Command::External)]
    #[case(vec!["cdx"], Command::External)]
    fn classification(#[case] tokens: Vec<&str>, #[case] expected: Command<'static>) {
        let args = ArgumentList::from(tokens);
        assert_eq!(classify(&args), expected);
    }
}
