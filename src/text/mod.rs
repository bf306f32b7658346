pub mod stopwords;

pub use stopwords::StopwordFilter;

/// Lower-cases the text and collapses every whitespace run to a single space.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A word in the source text, with byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl Token<'_> {
    pub fn is_numeric(&self) -> bool {
        self.text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
    }
}

// Characters that may appear inside a skill token ("c++", "c#", "node.js", "ci/cd").
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '+' | '#' | '.' | '-' | '/' | '_')
}

const EDGE_PUNCT: &[char] = &['.', '-', '/', '_'];

/// Splits text into clauses of tokens. Clauses break on any punctuation that is
/// not part of a word, including a trailing full stop.
pub fn clauses(text: &str) -> Vec<Vec<Token<'_>>> {
    let mut clauses = Vec::new();
    let mut current = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if is_word_char(c) {
            word_start.get_or_insert(i);
            continue;
        }

        if let Some(start) = word_start.take() {
            if push_word(text, start, i, &mut current) {
                clauses.push(std::mem::take(&mut current));
            }
        }

        if !c.is_whitespace() && !current.is_empty() {
            clauses.push(std::mem::take(&mut current));
        }
    }

    if let Some(start) = word_start {
        push_word(text, start, text.len(), &mut current);
    }
    if !current.is_empty() {
        clauses.push(current);
    }

    clauses
}

/// Pushes the trimmed word, returning true when trimming removed a clause-ending stop.
fn push_word<'a>(text: &'a str, start: usize, end: usize, out: &mut Vec<Token<'a>>) -> bool {
    let raw = &text[start..end];
    let trimmed_end = raw.trim_end_matches(EDGE_PUNCT);
    let ends_clause = trimmed_end.len() < raw.len() && raw[trimmed_end.len()..].contains('.');

    // Leading '.' is kept for names like ".net".
    let word = trimmed_end.trim_start_matches(&['-', '/', '_'][..]);
    if !word.is_empty() && word.chars().any(char::is_alphanumeric) {
        let offset = start + (trimmed_end.len() - word.len());
        out.push(Token {
            text: word,
            start: offset,
            end: offset + word.len(),
        });
    }

    ends_clause && !out.is_empty()
}
