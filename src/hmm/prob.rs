//! Additive smoothing over the raw counts.
//!
//! Both normalizers count the distinct events observed for the specific
//! context: successors of the from-tag for transitions, words under the tag
//! for emissions. Probabilities out of a context therefore sum close to 1
//! over its observed events but not exactly to 1 over the full alphabet.

use super::model::HmmModel;

/// Probability assigned when a denominator would otherwise be zero.
pub const PROB_FLOOR: f64 = 1e-6;

impl HmmModel {
    /// `log P(to | from)` with add-one smoothing over the distinct observed
    /// successors of `from`.
    ///
    /// A tag that never occurred as a left context gets the fixed floor
    /// instead of a division by zero. Never returns `-inf`; reading never
    /// mutates the counts.
    pub fn transition_logprob(&self, from: usize, to: usize) -> f64 {
        let total = self.total(from);
        if total == 0 {
            return PROB_FLOOR.ln();
        }
        let k = self.num_successors(from) as f64;
        let count = self.transition_count(from, to) as f64;
        ((count + 1.0) / (total as f64 + k)).ln()
    }

    /// `log P(word | tag)`; `None` is an out-of-vocabulary word, which gets
    /// the unseen-event mass `1 / (total + M)`.
    pub fn emission_logprob(&self, tag: usize, word: Option<usize>) -> f64 {
        let total = self.total(tag);
        if total == 0 {
            return PROB_FLOOR.ln();
        }
        let m = self.num_emitted(tag) as f64;
        let count = match word {
            Some(w) => self.emission_count(tag, w) as f64,
            None => return (1.0 / (total as f64 + m)).ln(),
        };
        ((count + 1.0) / (total as f64 + m)).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::TaggedSentence;
    use crate::hmm::model::{END, START};

    fn model(lines: &[&str]) -> HmmModel {
        let corpus: Vec<_> = lines
            .iter()
            .map(|l| TaggedSentence::parse(l).unwrap())
            .collect();
        HmmModel::train(&corpus).unwrap()
    }

    #[test]
    fn transition_uses_observed_successor_normalizer() {
        // DET is always followed by NOUN: 2 transitions, 1 distinct successor.
        let m = model(&["The_DET cat_NOUN", "A_DET dog_NOUN"]);
        let det = m.tag_id("DET").unwrap();
        let noun = m.tag_id("NOUN").unwrap();
        let p = m.transition_logprob(det, noun).exp();
        assert!((p - 3.0 / 3.0).abs() < 1e-12);
        // Unseen successor from the same context.
        let p_end = m.transition_logprob(det, END).exp();
        assert!((p_end - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn emission_uses_observed_word_normalizer() {
        // NOUN emitted cat once and dog once: total 2, 2 distinct words.
        let m = model(&["The_DET cat_NOUN", "A_DET dog_NOUN"]);
        let noun = m.tag_id("NOUN").unwrap();
        let cat = m.word_id("cat");
        let p = m.emission_logprob(noun, cat).exp();
        assert!((p - 2.0 / 4.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_word_gets_unseen_mass() {
        let m = model(&["The_DET cat_NOUN", "A_DET dog_NOUN"]);
        let noun = m.tag_id("NOUN").unwrap();
        let p = m.emission_logprob(noun, None).exp();
        assert!((p - 1.0 / 4.0).abs() < 1e-12);
        assert!(p > 0.0);
    }

    #[test]
    fn emission_prob_strictly_between_zero_and_one() {
        let m = model(&["The_DET cat_NOUN sleeps_VERB", "A_DET dog_NOUN barks_VERB"]);
        for tag in m.tag_ids() {
            for word in [m.word_id("cat"), m.word_id("The"), None] {
                let p = m.emission_logprob(tag, word).exp();
                assert!(p > 0.0 && p < 1.0, "p = {}", p);
            }
        }
    }

    #[test]
    fn smoothing_is_monotonic_in_count() {
        // "cat" under NOUN once vs. three times, same vocabulary both times.
        let once = model(&["cat_NOUN dog_NOUN dog_NOUN dog_NOUN"]);
        let thrice = model(&["cat_NOUN cat_NOUN cat_NOUN dog_NOUN"]);
        let p1 = once
            .emission_logprob(once.tag_id("NOUN").unwrap(), once.word_id("cat"))
            .exp();
        let p3 = thrice
            .emission_logprob(thrice.tag_id("NOUN").unwrap(), thrice.word_id("cat"))
            .exp();
        assert!(p3 > p1);
    }

    #[test]
    fn zero_total_floors_instead_of_dividing() {
        let m = model(&["The_DET cat_NOUN"]);
        // END never transitions out and never emits.
        assert_eq!(m.transition_logprob(END, START), PROB_FLOOR.ln());
        assert_eq!(m.emission_logprob(END, None), PROB_FLOOR.ln());
        assert!(m.transition_logprob(END, START).is_finite());
    }

    #[test]
    fn logprobs_are_always_finite() {
        let m = model(&["The_DET cat_NOUN sleeps_VERB"]);
        for from in 0..5 {
            for to in 0..5 {
                assert!(m.transition_logprob(from, to).is_finite());
            }
        }
    }
}
