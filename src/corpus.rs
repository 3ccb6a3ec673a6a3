use std::io::BufRead;

use crate::{Error, Result};

/// Separator between the word and the tag in a training token.
pub const SEPARATOR: char = '_';

/// One training sentence: parallel word and tag sequences.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaggedSentence {
    pub words: Vec<String>,
    pub tags: Vec<String>,
}

impl TaggedSentence {
    /// Parses a whitespace-separated line of `word_TAG` tokens.
    ///
    /// Each token is split on the last separator, so a word may contain the
    /// separator but a tag may not. A token with no separator, or with an
    /// empty word or tag, fails with [`Error::MalformedToken`]; nothing is
    /// skipped silently.
    pub fn parse(line: &str) -> Result<Self> {
        let mut sentence = Self::default();
        for token in line.split_whitespace() {
            let (word, tag) = token
                .rsplit_once(SEPARATOR)
                .ok_or_else(|| Error::MalformedToken(token.to_string()))?;
            if word.is_empty() || tag.is_empty() {
                return Err(Error::MalformedToken(token.to_string()));
            }
            sentence.push(word, tag);
        }
        Ok(sentence)
    }

    pub fn push(&mut self, word: &str, tag: &str) {
        self.words.push(word.to_string());
        self.tags.push(tag.to_string());
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// (word, tag) pairs in sentence order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.words
            .iter()
            .map(|w| w.as_str())
            .zip(self.tags.iter().map(|t| t.as_str()))
    }
}

/// Reads a corpus with one `word_TAG` sentence per non-blank line.
///
/// The first malformed token aborts the read so that no model is ever
/// trained from a truncated corpus.
pub fn read_corpus<R: BufRead>(reader: R) -> Result<Vec<TaggedSentence>> {
    let mut sentences = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        sentences.push(TaggedSentence::parse(&line)?);
    }
    log::debug!("read {} sentences", sentences.len());
    Ok(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line() {
        let s = TaggedSentence::parse("The_DET cat_NOUN sleeps_VERB").unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.words, ["The", "cat", "sleeps"]);
        assert_eq!(s.tags, ["DET", "NOUN", "VERB"]);
    }

    #[test]
    fn word_may_contain_separator() {
        let s = TaggedSentence::parse("vis_a_vis_ADV").unwrap();
        assert_eq!(s.words, ["vis_a_vis"]);
        assert_eq!(s.tags, ["ADV"]);
    }

    #[test]
    fn token_without_separator_is_rejected() {
        match TaggedSentence::parse("The_DET cat") {
            Err(Error::MalformedToken(tok)) => assert_eq!(tok, "cat"),
            other => panic!("expected MalformedToken, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn empty_word_or_tag_is_rejected() {
        assert!(matches!(
            TaggedSentence::parse("_DET"),
            Err(Error::MalformedToken(_))
        ));
        assert!(matches!(
            TaggedSentence::parse("cat_"),
            Err(Error::MalformedToken(_))
        ));
    }

    #[test]
    fn read_skips_blank_lines() {
        let input = "The_DET cat_NOUN\n\nA_DET dog_NOUN\n";
        let sentences = read_corpus(input.as_bytes()).unwrap();
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn read_fails_fast_on_bad_line() {
        let input = "The_DET\nbroken\nA_DET\n";
        assert!(read_corpus(input.as_bytes()).is_err());
    }
}
