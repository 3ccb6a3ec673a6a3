//! First-order hidden Markov model part-of-speech tagger.
//!
//! The model is estimated from sentences of `word_TAG` tokens and decodes new
//! word sequences with the Viterbi algorithm. Counts are collected in a single
//! training pass, probabilities use additive smoothing, and decoding runs in
//! log-space.
//!
//! # Examples
//!
//! ```
//! use hmmtag::{HmmModel, TaggedSentence, Tagger};
//!
//! let corpus = vec![
//!     TaggedSentence::parse("The_DET cat_NOUN sleeps_VERB")?,
//!     TaggedSentence::parse("A_DET dog_NOUN barks_VERB")?,
//! ];
//! let model = HmmModel::train(&corpus)?;
//!
//! let tagger = Tagger::new(&model);
//! let tagging = tagger.tag(&["The", "dog", "sleeps"])?;
//! assert_eq!(tagging.tags, ["DET", "NOUN", "VERB"]);
//! assert!(tagging.log_prob < 0.0);
//! # Ok::<(), hmmtag::Error>(())
//! ```

use thiserror::Error;

mod alphabet;
mod corpus;
mod evaluation;
mod hmm;

pub use self::alphabet::Alphabet;
pub use self::corpus::{read_corpus, TaggedSentence};
pub use self::evaluation::Evaluation;
pub use self::hmm::model::HmmModel;
pub use self::hmm::tagger::{Tagger, Tagging};

/// Errors surfaced by training, probability queries and decoding.
#[derive(Debug, Error)]
pub enum Error {
    /// A training token could not be split into word and tag.
    #[error("malformed token: {0:?}")]
    MalformedToken(String),
    /// A zero-length word sequence was passed to the decoder.
    #[error("empty input sequence")]
    EmptyInput,
    /// Decoding was requested against a model with no trained tags.
    #[error("model has no trained tags")]
    EmptyModel,
    /// A probability was requested for a tag never seen in training.
    #[error("unknown tag: {0:?}")]
    UnknownTag(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// A persisted model could not be decoded.
    #[error("invalid model: {0}")]
    InvalidModel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
