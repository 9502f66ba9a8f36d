use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_morse_player::audio::ToneSynth;
use rust_morse_player::codec::SymbolCodec;
use rust_morse_player::config::AudioConfig;

const PANGRAM: &str = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG 0123456789";

fn bench_encode(c: &mut Criterion) {
    let codec = SymbolCodec::international();
    let mut group = c.benchmark_group("encode");

    for repeat in [1usize, 10, 100] {
        let text = vec![PANGRAM; repeat].join(" ");
        group.bench_with_input(BenchmarkId::from_parameter(text.len()), &text, |b, text| {
            b.iter(|| codec.encode(black_box(text)).unwrap())
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let codec = SymbolCodec::international();
    let mut group = c.benchmark_group("decode");

    for repeat in [1usize, 10, 100] {
        let morse = codec.encode(&vec![PANGRAM; repeat].join(" ")).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(morse.len()), &morse, |b, morse| {
            b.iter(|| codec.decode(black_box(morse)).unwrap())
        });
    }
    group.finish();
}

fn bench_synthesize(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesize_tone");

    for sample_rate in [8_000u32, 44_100, 96_000] {
        let synth = ToneSynth::new(&AudioConfig {
            sample_rate,
            ..AudioConfig::default()
        })
        .unwrap();
        // One dash at the default 100 ms unit
        group.bench_with_input(BenchmarkId::from_parameter(sample_rate), &synth, |b, synth| {
            b.iter(|| synth.synthesize_tone(black_box(0.3)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_synthesize);
criterion_main!(benches);
