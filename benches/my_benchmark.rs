use criterion::{black_box, criterion_group, criterion_main, Criterion};
use galactic_numerals::{interpret_text, NumeralEngine};

fn benchmark_numeral_engine(c: &mut Criterion) {
    c.bench_function("to_integer", |b| {
        b.iter(|| NumeralEngine::to_integer(black_box("MMMCMXCIX")))
    });

    c.bench_function("to_roman", |b| {
        b.iter(|| NumeralEngine::to_roman(black_box(3888)))
    });
}

fn benchmark_session(c: &mut Criterion) {
    let text = "glob is I
prok is V
pish is X
tegj is L
glob glob Silver is 34 Credits
glob prok Gold is 57800 Credits
pish pish Iron is 3910 Credits
how much is pish tegj glob glob ?
how many Credits is glob prok Silver ?
how many Credits is glob prok Gold ?
how many Credits is glob prok Iron ?
how much wood could a woodchuck chuck if a woodchuck could chuck wood ?";

    c.bench_function("interpret_text", |b| {
        b.iter(|| interpret_text(black_box(text)))
    });
}

criterion_group!(benches, benchmark_numeral_engine, benchmark_session);
criterion_main!(benches);
