use std::sync::LazyLock;

use regex::Regex;

static SENTENCE_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

const PREVIEW_WORDS: usize = 30;

/// A passage with its whitespace tokens and sentences computed once, shared by every scorer.
#[derive(Debug, Clone)]
pub struct Passage<'a> {
    text: &'a str,
    heading: Option<&'a str>,
    words: Vec<&'a str>,
    sentences: Vec<&'a str>,
}

impl<'a> Passage<'a> {
    pub fn new(text: &'a str, heading: Option<&'a str>) -> Self {
        let words = text.split_whitespace().collect();
        let sentences = SENTENCE_END_RE
            .split(text)
            .filter(|s| !s.trim().is_empty())
            .collect();
        Passage {
            text,
            heading,
            words,
            sentences,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn heading(&self) -> Option<&'a str> {
        self.heading
    }

    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Non-blank spans between runs of `.`, `!` and `?`.
    pub fn sentences(&self) -> &[&'a str] {
        &self.sentences
    }

    /// The first `n` words re-joined with single spaces.
    pub fn leading_words(&self, n: usize) -> String {
        self.words.iter().take(n).copied().collect::<Vec<_>>().join(" ")
    }

    pub fn preview(&self) -> String {
        let mut preview = self.leading_words(PREVIEW_WORDS);
        if self.word_count() > PREVIEW_WORDS {
            preview.push_str("...");
        }
        preview
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_words_or_sentences() {
        let p = Passage::new("", None);
        assert!(p.is_empty());
        assert!(p.sentences().is_empty());
        assert_eq!(p.preview(), "");
    }

    #[test]
    fn sentences_split_on_terminal_runs() {
        let p = Passage::new("One two. Three?! Four four four...", None);
        assert_eq!(p.sentences().len(), 3);
        assert_eq!(p.sentences()[1].trim(), "Three");
    }

    #[test]
    fn punctuation_only_has_no_sentences() {
        let p = Passage::new("...", None);
        assert_eq!(p.word_count(), 1);
        assert!(p.sentences().is_empty());
    }

    #[test]
    fn preview_truncates_after_thirty_words() {
        let text = (1..=40).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");
        let p = Passage::new(&text, None);
        let preview = p.preview();
        assert!(preview.ends_with("30..."));
        assert_eq!(word_count(&preview), 30);

        let short = Passage::new("just a few words", None);
        assert_eq!(short.preview(), "just a few words");
    }

    #[test]
    fn words_split_on_any_whitespace() {
        let p = Passage::new("  alpha\tbeta\n\ngamma  ", Some("Heading"));
        assert_eq!(p.words(), ["alpha", "beta", "gamma"]);
        assert_eq!(p.heading(), Some("Heading"));
    }
}
