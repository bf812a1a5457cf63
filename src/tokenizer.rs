pub const WHITESPACE: &[char] = &[' ', '\t', '\n'];

/// Splits a string into non-empty tokens on any run of delimiter characters.
pub struct Tokenizer<'a> {
    input: &'a str,
    delimiters: &'a [char],
    position: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str, delimiters: &'a [char]) -> Self {
        Self {
            input,
            delimiters,
            position: 0,
        }
    }

    pub fn tokenize(&mut self) -> Vec<String> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    fn next_token(&mut self) -> Option<String> {
        self.skip_delimiters();
        if self.is_eof() {
            return None;
        }

        let input = self.input;
        let rest = &input[self.position..];
        let end = rest
            .find(|c: char| self.is_delimiter(c))
            .unwrap_or(rest.len());
        self.position += end;

        Some(rest[..end].to_string())
    }

    fn skip_delimiters(&mut self) {
        let input = self.input;
        let rest = &input[self.position..];
        let skipped = rest
            .find(|c: char| !self.is_delimiter(c))
            .unwrap_or(rest.len());
        self.position += skipped;
    }

    fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }

    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }
}

/// Tokenizes `input`, treating an absent line the same as an empty one.
pub fn tokenize(input: Option<&str>, delimiters: &[char]) -> Vec<String> {
    match input {
        None | Some("") => Vec::new(),
        Some(input) => Tokenizer::new(input, delimiters).tokenize(),
    }
}
