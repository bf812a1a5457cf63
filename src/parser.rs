use crate::tokenizer::{self, WHITESPACE};
use std::ops::Index;
use std::slice::Iter;

pub const SEPARATOR: char = '#';

/// One command and its arguments; the first token is the program name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArgumentList {
    tokens: Vec<String>,
}

impl ArgumentList {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn program(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or_default()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String> {
        self.tokens.iter()
    }
}

impl From<Vec<&str>> for ArgumentList {
    fn from(tokens: Vec<&str>) -> Self {
        Self::new(tokens.into_iter().map(String::from).collect())
    }
}

impl Index<usize> for ArgumentList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.tokens[index]
    }
}

/// Argument lists parsed from one input line, in left-to-right order.
///
/// Never empty: a line with nothing to run holds a single empty [`ArgumentList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandList {
    commands: Vec<ArgumentList>,
}

impl CommandList {
    pub fn first(&self) -> &ArgumentList {
        &self.commands[0]
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn iter(&self) -> Iter<'_, ArgumentList> {
        self.commands.iter()
    }
}

impl<'a> IntoIterator for &'a CommandList {
    type Item = &'a ArgumentList;
    type IntoIter = Iter<'a, ArgumentList>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

pub struct Parser<'a> {
    input: Option<&'a str>,
}

impl<'a> Parser<'a> {
    pub fn new(input: Option<&'a str>) -> Self {
        Self { input }
    }

    pub fn parse(&self) -> CommandList {
        let mut commands: Vec<ArgumentList> = tokenizer::tokenize(self.input, &[SEPARATOR])
            .iter()
            .map(|raw| ArgumentList::new(tokenizer::tokenize(Some(raw), WHITESPACE)))
            .collect();

        if commands.iter().all(ArgumentList::is_empty) {
            commands = vec![ArgumentList::default()];
        }

        CommandList { commands }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(input: &str) -> Vec<Vec<String>> {
        Parser::new(Some(input))
            .parse()
            .iter()
            .map(|args| args.iter().cloned().collect())
            .collect()
    }

    #[rstest]
    #[case("ls # pwd", vec![vec!["ls"], vec!["pwd"]])]
    #[case("ls -la /tmp\n", vec![vec!["ls", "-la", "/tmp"]])]
    #[case("sleep 1 # sleep 2 # echo done", vec![vec!["sleep", "1"], vec!["sleep", "2"], vec!["echo", "done"]])]
    #[case("echo a#echo b", vec![vec!["echo", "a"], vec!["echo", "b"]])]
    #[case("##ls###pwd##", vec![vec!["ls"], vec!["pwd"]])]
    #[case("ls #   # pwd", vec![vec!["ls"], vec![], vec!["pwd"]])]
    fn command_lists(#[case] input: &str, #[case] expected: Vec<Vec<&str>>) {
        assert_eq!(parse(input), expected);
    }

    #[rstest]
    #[case("")]
    #[case("\n")]
    #[case("   \t  ")]
    #[case("#")]
    #[case("# # #")]
    #[case(" \t#\n#  ")]
    fn nothing_to_run(#[case] input: &str) {
        let commands = Parser::new(Some(input)).parse();
        assert_eq!(commands.len(), 1);
        assert!(commands.first().is_empty());
    }

    #[test]
    fn absent_line() {
        let commands = Parser::new(None).parse();
        assert_eq!(commands.len(), 1);
        assert!(commands.first().is_empty());
    }

    #[test]
    fn argument_list_accessors() {
        let args = ArgumentList::from(vec!["cd", "/tmp", "extra"]);
        assert_eq!(args.program(), Some("cd"));
        assert_eq!(args.args(), ["/tmp", "extra"]);
        assert_eq!(args.get(1), Some("/tmp"));
        assert_eq!(&args[2], "extra");

        let empty = ArgumentList::default();
        assert_eq!(empty.program(), None);
        assert!(empty.args().is_empty());
    }
}
