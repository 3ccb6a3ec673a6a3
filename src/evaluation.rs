use std::collections::BTreeMap;
use std::fmt::Display;
use std::iter::zip;

/// Label-wise performance values.
#[derive(Debug, Default)]
struct LabelMeasure {
    /// Number of correct predictions.
    num_correct: usize,
    /// Number of occurrences of the label in the gold-standard data.
    num_observation: usize,
    /// Number of predictions.
    num_prediction: usize,
    precision: f64,
    recall: f64,
    fmeasure: f64,
}

impl LabelMeasure {
    fn evaluate(&mut self) {
        self.precision = 0.0;
        self.recall = 0.0;
        self.fmeasure = 0.0;
        if self.num_prediction > 0 {
            self.precision = self.num_correct as f64 / self.num_prediction as f64;
        }
        if self.num_observation > 0 {
            self.recall = self.num_correct as f64 / self.num_observation as f64;
        }
        if self.precision + self.recall > 0.0 {
            self.fmeasure = self.precision * self.recall * 2.0 / (self.precision + self.recall);
        }
    }
}

/// Overall tagging performance, accumulated sentence by sentence.
#[derive(Debug, Default)]
pub struct Evaluation {
    /// Label-wise measures, keyed by tag.
    tbl: BTreeMap<String, LabelMeasure>,

    /// Number of correctly tagged words.
    word_total_correct: usize,
    /// Total number of words.
    word_total_num: usize,
    /// Word-level accuracy.
    word_accuracy: f64,

    /// Number of sentences tagged fully correctly.
    sent_total_correct: usize,
    /// Total number of sentences.
    sent_total_num: usize,
    /// Sentence-level accuracy.
    sent_accuracy: f64,

    macro_precision: f64,
    macro_recall: f64,
    macro_fmeasure: f64,
}

impl Evaluation {
    /// Accumulates one sentence of gold tags against predicted tags.
    pub fn accumulate<R: AsRef<str>, P: AsRef<str>>(&mut self, reference: &[R], prediction: &[P]) {
        let mut matched = 0;
        for (r, p) in zip(reference, prediction) {
            let (r, p) = (r.as_ref(), p.as_ref());
            self.tbl.entry(r.to_string()).or_default().num_observation += 1;
            self.tbl.entry(p.to_string()).or_default().num_prediction += 1;
            if r == p {
                self.tbl.entry(r.to_string()).or_default().num_correct += 1;
                matched += 1;
            }
            self.word_total_num += 1;
        }
        if matched == prediction.len() {
            self.sent_total_correct += 1;
        }
        self.sent_total_num += 1;
    }

    /// Computes the per-label and aggregate figures from the counts.
    pub fn evaluate(&mut self) {
        self.macro_precision = 0.0;
        self.macro_recall = 0.0;
        self.macro_fmeasure = 0.0;
        self.word_total_correct = 0;
        let mut num_labels = 0;
        for lm in self.tbl.values_mut() {
            self.word_total_correct += lm.num_correct;
            if lm.num_observation == 0 {
                continue;
            }
            lm.evaluate();
            self.macro_precision += lm.precision;
            self.macro_recall += lm.recall;
            self.macro_fmeasure += lm.fmeasure;
            num_labels += 1;
        }
        if num_labels > 0 {
            self.macro_precision /= num_labels as f64;
            self.macro_recall /= num_labels as f64;
            self.macro_fmeasure /= num_labels as f64;
        }
        if self.word_total_num > 0 {
            self.word_accuracy = self.word_total_correct as f64 / self.word_total_num as f64;
        }
        if self.sent_total_num > 0 {
            self.sent_accuracy = self.sent_total_correct as f64 / self.sent_total_num as f64;
        }
    }

    pub fn word_accuracy(&self) -> f64 {
        self.word_accuracy
    }

    pub fn sentence_accuracy(&self) -> f64 {
        self.sent_accuracy
    }
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Performance by label (#match, #model, #ref) (precision, recall, F1):"
        )?;
        for (label, lm) in &self.tbl {
            if lm.num_observation == 0 {
                writeln!(
                    f,
                    "\t{}: ({}, {}, {}) (******, ******, ******)",
                    label, lm.num_correct, lm.num_prediction, lm.num_observation
                )?;
            } else {
                writeln!(
                    f,
                    "\t{}: ({}, {}, {}) ({:.4}, {:.4}, {:.4})",
                    label,
                    lm.num_correct,
                    lm.num_prediction,
                    lm.num_observation,
                    lm.precision,
                    lm.recall,
                    lm.fmeasure
                )?;
            }
        }
        writeln!(
            f,
            "Macro-average precision, recall, F1: ({:.4}, {:.4}, {:.4})",
            self.macro_precision, self.macro_recall, self.macro_fmeasure
        )?;
        writeln!(
            f,
            "Word accuracy: {}/{} => {:.4}",
            self.word_total_correct, self.word_total_num, self.word_accuracy
        )?;
        writeln!(
            f,
            "Sentence accuracy: {}/{} => {:.4}",
            self.sent_total_correct, self.sent_total_num, self.sent_accuracy
        )
    }
}
