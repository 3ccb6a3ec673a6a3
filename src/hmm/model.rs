use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::corpus::TaggedSentence;
use crate::{Error, Result};

/// Sentinel tag id bounding every sentence on the left.
pub(crate) const START: usize = 0;
/// Sentinel tag id bounding every sentence on the right.
pub(crate) const END: usize = 1;

/// Counts estimated from a tagged corpus, frozen after training.
///
/// Tag ids `0` and `1` are the `START`/`END` sentinels; real tags are
/// interned from `2` upward in first-seen order. The sentinels never emit:
/// their emission rows stay empty.
///
/// For every tag that appears as a left context, the counts in its
/// transition row sum to its total, and for every real tag the total equals
/// its occurrence count (each occurrence emits one word and transitions out
/// once, the last one into `END`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HmmModel {
    /// Transition counts: from-tag id -> (to-tag id -> count).
    transitions: Vec<HashMap<usize, u64>>,
    /// Emission counts: tag id -> (word id -> count).
    emissions: Vec<HashMap<usize, u64>>,
    /// Transitions out of each tag; also the emission denominator.
    totals: Vec<u64>,
    tags: Alphabet,
    words: Alphabet,
    num_sentences: u64,
}

impl Default for HmmModel {
    fn default() -> Self {
        let mut tags = Alphabet::new();
        let start = tags.intern("START");
        let end = tags.intern("END");
        debug_assert_eq!((start, end), (START, END));
        Self {
            transitions: vec![HashMap::new(); 2],
            emissions: vec![HashMap::new(); 2],
            totals: vec![0; 2],
            tags,
            words: Alphabet::new(),
            num_sentences: 0,
        }
    }
}

impl HmmModel {
    /// Estimates a model from a batch of tagged sentences in one pass.
    ///
    /// An empty sentence still records its `START -> END` transition.
    pub fn train(sentences: &[TaggedSentence]) -> Result<Self> {
        let mut model = Self::default();
        for sentence in sentences {
            model.observe(sentence);
        }
        log::info!(
            "trained on {} sentences: {} tags, {} words",
            model.num_sentences,
            model.num_tags(),
            model.num_words()
        );
        Ok(model)
    }

    fn observe(&mut self, sentence: &TaggedSentence) {
        self.num_sentences += 1;
        let mut prev = START;
        for (word, tag) in sentence.pairs() {
            let tid = self.intern_tag(tag);
            let wid = self.words.intern(word);
            *self.transitions[prev].entry(tid).or_insert(0) += 1;
            self.totals[prev] += 1;
            *self.emissions[tid].entry(wid).or_insert(0) += 1;
            prev = tid;
        }
        *self.transitions[prev].entry(END).or_insert(0) += 1;
        self.totals[prev] += 1;
    }

    fn intern_tag(&mut self, tag: &str) -> usize {
        let tid = self.tags.intern(tag);
        if tid == self.transitions.len() {
            self.transitions.push(HashMap::new());
            self.emissions.push(HashMap::new());
            self.totals.push(0);
        }
        tid
    }

    /// Log joint probability of a tagged sentence,
    /// `sum of log P(tag|prev) + log P(word|tag)` plus the final
    /// `log P(END|last)`.
    ///
    /// Fails with [`Error::UnknownTag`] for a tag absent from the training
    /// inventory.
    pub fn sequence_log_prob(&self, sentence: &TaggedSentence) -> Result<f64> {
        let mut log_prob = 0.0;
        let mut prev = START;
        for (word, tag) in sentence.pairs() {
            let tid = self
                .tag_id(tag)
                .ok_or_else(|| Error::UnknownTag(tag.to_string()))?;
            log_prob += self.transition_logprob(prev, tid);
            log_prob += self.emission_logprob(tid, self.word_id(word));
            prev = tid;
        }
        log_prob += self.transition_logprob(prev, END);
        Ok(log_prob)
    }

    /// Number of real (emitting) tags.
    pub fn num_tags(&self) -> usize {
        self.tags.len() - 2
    }

    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    pub fn num_sentences(&self) -> u64 {
        self.num_sentences
    }

    /// Ids of the real tags in first-seen order, the fixed iteration order
    /// used for argmax tie-breaking.
    pub fn tag_ids(&self) -> std::ops::Range<usize> {
        2..self.tags.len()
    }

    pub fn tag_str(&self, id: usize) -> Option<&str> {
        self.tags.resolve(id)
    }

    pub fn tag_id(&self, tag: &str) -> Option<usize> {
        self.tags.id_of(tag)
    }

    pub fn word_id(&self, word: &str) -> Option<usize> {
        self.words.id_of(word)
    }

    pub(crate) fn transition_count(&self, from: usize, to: usize) -> u64 {
        self.transitions
            .get(from)
            .and_then(|row| row.get(&to))
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn emission_count(&self, tag: usize, word: usize) -> u64 {
        self.emissions
            .get(tag)
            .and_then(|row| row.get(&word))
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn total(&self, tag: usize) -> u64 {
        self.totals.get(tag).copied().unwrap_or(0)
    }

    /// Distinct observed successors of `from`.
    pub(crate) fn num_successors(&self, from: usize) -> usize {
        self.transitions.get(from).map_or(0, |row| row.len())
    }

    /// Distinct observed words under `tag`.
    pub(crate) fn num_emitted(&self, tag: usize) -> usize {
        self.emissions.get(tag).map_or(0, |row| row.len())
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let f = File::create(path)?;
        serde_json::to_writer(BufWriter::new(f), self)
            .map_err(|e| Error::InvalidModel(e.to_string()))
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = File::open(path)?;
        let mut model: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| Error::InvalidModel(e.to_string()))?;
        model.tags.reindex();
        model.words.reindex();
        Ok(model)
    }
}
