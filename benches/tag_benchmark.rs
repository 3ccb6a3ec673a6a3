use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hmmtag::{read_corpus, HmmModel, Tagger};

const CORPUS: &str = "\
The_DET cat_NOUN sleeps_VERB
A_DET dog_NOUN barks_VERB
The_DET dog_NOUN sleeps_VERB
My_DET dog_NOUN runs_VERB fast_ADV
A_DET cat_NOUN meows_VERB loudly_ADV
Your_DET cat_NOUN runs_VERB
The_DET bird_NOUN sings_VERB sweetly_ADV
A_DET bird_NOUN chirps_VERB
";

fn tag_benchmark(c: &mut Criterion) {
    let corpus = read_corpus(CORPUS.as_bytes()).expect("corpus parses");
    let model = HmmModel::train(&corpus).expect("training succeeds");
    let tagger = Tagger::new(&model);

    let short = ["The", "dog", "sleeps"];
    c.bench_function("tag_short", |b| {
        b.iter(|| tagger.tag(black_box(&short)).unwrap())
    });

    let long: Vec<&str> = ["My", "bird", "meows", "loudly"]
        .iter()
        .cycle()
        .take(64)
        .copied()
        .collect();
    c.bench_function("tag_long_64", |b| {
        b.iter(|| tagger.tag(black_box(&long)).unwrap())
    });
}

criterion_group!(benchmarks, tag_benchmark);
criterion_main!(benchmarks);
