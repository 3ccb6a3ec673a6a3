use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;
use hmmtag::{read_corpus, Evaluation, HmmModel, TaggedSentence, Tagger};

/// Train a hidden Markov model on word_TAG sentences and tag new text.
/// If no input file is given, sentences to tag are read from STDIN,
/// one whitespace-separated sentence per line.
#[derive(Debug, Parser)]
struct Argv {
    /// train on a word_TAG corpus file
    #[arg(short = 'r', long, value_name = "CORPUS")]
    train: Option<PathBuf>,
    /// save the trained model to, or load it from, a JSON file
    #[arg(short, long, value_name = "MODEL")]
    model: Option<PathBuf>,
    /// treat input as word_TAG lines and report tagging performance
    #[arg(short = 't', long = "test")]
    evaluate: bool,
    /// output the log-probability of each tagged sentence
    #[arg(short, long)]
    probability: bool,
    /// suppress tagging results (useful for test mode)
    #[arg(short, long)]
    quiet: bool,
    /// files with sentences to tag
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,
}

fn main() {
    env_logger::init();
    let argv = Argv::parse();
    log::debug!("{:?}", argv);

    let model = match (&argv.train, &argv.model) {
        (Some(corpus_path), model_path) => {
            let f = File::open(corpus_path).expect("failed to open the training corpus");
            let corpus = read_corpus(BufReader::new(f)).expect("failed to read the corpus");
            let model = HmmModel::train(&corpus).expect("training failed");
            if let Some(path) = model_path {
                model.save_json(path).expect("failed to save the model");
            }
            model
        }
        (None, Some(path)) => HmmModel::load_json(path).expect("failed to load the model"),
        (None, None) => {
            eprintln!("either --train or --model is required");
            std::process::exit(2);
        }
    };
    let tagger = Tagger::new(&model);

    let mut evaluation = Evaluation::default();
    let mut tag_line = |line: &str| {
        if line.trim().is_empty() {
            return;
        }
        let (words, gold): (Vec<String>, Vec<String>) = if argv.evaluate {
            let sentence = TaggedSentence::parse(line).expect("bad gold line");
            (sentence.words, sentence.tags)
        } else {
            (line.split_whitespace().map(String::from).collect(), Vec::new())
        };
        let tagging = tagger.tag(&words).expect("failed to tag");
        if argv.evaluate {
            evaluation.accumulate(&gold, &tagging.tags);
        }
        if !argv.quiet {
            let tagged: Vec<String> = words
                .iter()
                .zip(&tagging.tags)
                .map(|(w, t)| format!("{}_{}", w, t))
                .collect();
            if argv.probability {
                println!("{}\t{}", tagged.join(" "), tagging.log_prob);
            } else {
                println!("{}", tagged.join(" "));
            }
        }
    };

    if argv.inputs.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            tag_line(&line.expect("failed to read line"));
        }
    } else {
        for path in &argv.inputs {
            let f = File::open(path).expect("failed to open the input file");
            for line in BufReader::new(f).lines() {
                tag_line(&line.expect("failed to read line"));
            }
        }
    }

    if argv.evaluate {
        evaluation.evaluate();
        println!("{}", evaluation);
    }
}
