use crate::hmm::model::{END, START};
use crate::{Error, HmmModel, Result};

/// A decoded tag sequence and its joint log-probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagging {
    pub tags: Vec<String>,
    pub log_prob: f64,
}

/// Viterbi decoder borrowing a trained model.
///
/// Decoding is read-only against the model, so one model can back any number
/// of taggers running on different sentences at once.
pub struct Tagger<'a> {
    model: &'a HmmModel,
    /// Real tag ids in first-seen order; trellis columns follow this order.
    states: Vec<usize>,
}

impl<'a> Tagger<'a> {
    pub fn new(model: &'a HmmModel) -> Self {
        Self {
            model,
            states: model.tag_ids().collect(),
        }
    }

    /// Decodes the most probable tag sequence for `words`.
    ///
    /// The trellis is a flat `[T][L]` score matrix with a parallel
    /// backpointer matrix. Maxima are taken with a strict comparison while
    /// scanning states in first-seen order, so ties deterministically go to
    /// the earliest-interned tag.
    pub fn tag<S: AsRef<str>>(&self, words: &[S]) -> Result<Tagging> {
        let t_len = words.len();
        let l = self.states.len();
        if t_len == 0 {
            return Err(Error::EmptyInput);
        }
        if l == 0 {
            return Err(Error::EmptyModel);
        }

        let mut score = vec![f64::NEG_INFINITY; t_len * l];
        let mut backward_edge = vec![0usize; t_len * l];

        // Scores at (0, *).
        let w0 = self.model.word_id(words[0].as_ref());
        for (j, &tag) in self.states.iter().enumerate() {
            score[j] = self.model.transition_logprob(START, tag)
                + self.model.emission_logprob(tag, w0);
        }

        // Scores at (t, *).
        for t in 1..t_len {
            let w = self.model.word_id(words[t].as_ref());
            for (j, &tag) in self.states.iter().enumerate() {
                let emit = self.model.emission_logprob(tag, w);
                let mut max_score = f64::NEG_INFINITY;
                let mut argmax = 0;
                for (i, &prev) in self.states.iter().enumerate() {
                    let s = score[l * (t - 1) + i] + self.model.transition_logprob(prev, tag);
                    if max_score < s {
                        max_score = s;
                        argmax = i;
                    }
                }
                backward_edge[l * t + j] = argmax;
                score[l * t + j] = max_score + emit;
            }
        }

        // Find the state that reaches END with the maximum score.
        let mut max_score = f64::NEG_INFINITY;
        let mut best = 0;
        for (j, &tag) in self.states.iter().enumerate() {
            let s = score[l * (t_len - 1) + j] + self.model.transition_logprob(tag, END);
            if max_score < s {
                max_score = s;
                best = j;
            }
        }

        // Trace the backward edges.
        let mut path = vec![0usize; t_len];
        path[t_len - 1] = best;
        for t in (0..t_len - 1).rev() {
            path[t] = backward_edge[l * (t + 1) + path[t + 1]];
        }

        let tags = path
            .into_iter()
            .map(|j| {
                self.model
                    .tag_str(self.states[j])
                    .unwrap_or_default()
                    .to_string()
            })
            .collect();
        log::debug!("decoded {} words, log_prob {}", t_len, max_score);
        Ok(Tagging {
            tags,
            log_prob: max_score,
        })
    }
}
