use crate::BUILTIN_COMMANDS;
use crate::editor::Helper;
use indexmap::IndexSet;
use rustyline::completion;
use std::path::PathBuf;

impl completion::Completer for Helper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, word) = completion::extract_word(line, pos, None, |c| {
            c == crate::parser::SEPARATOR || crate::tokenizer::WHITESPACE.contains(&c)
        });

        let mut bin_path = self.bin_path.borrow_mut();
        let bins = bin_path.bins().filter_map(|bin| match bin {
            Ok(bin) => Some(bin),
            Err(err) => {
                tracing::debug!(%err, "skipping completion source");
                None
            }
        });

        Ok((start, candidates(word, bins)))
    }
}

/// Built-ins and executables whose name starts with `word`, deduplicated and sorted.
pub fn candidates(word: &str, bins: impl Iterator<Item = PathBuf>) -> Vec<Pair> {
    let mut candidates = IndexSet::new();

    for comp in BUILTIN_COMMANDS {
        if comp.starts_with(word) {
            candidates.insert(Pair::new(comp.to_string()));
        }
    }

    for bin in bins {
        if let Some(basename) = bin.file_name().and_then(|name| name.to_str()) {
            if basename.starts_with(word) {
                candidates.insert(Pair::new(basename.to_string()));
            }
        }
    }

    candidates.sort();

    candidates.into_iter().collect()
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Pair {
    pub display: String,
    pub replacement: String,
}

impl Pair {
    fn new(display: String) -> Pair {
        Self {
            replacement: append_trailing_space(&display),
            display,
        }
    }
}

impl completion::Candidate for Pair {
    fn display(&self) -> &str {
        self.display.as_str()
    }

    fn replacement(&self) -> &str {
        self.replacement.as_str()
    }
}

fn append_trailing_space(word: &str) -> String {
    let mut result = String::with_capacity(word.len() + 1);
    result.push_str(word);
    result.push(' ');

    result
}
