//! Head-to-head benchmarks: full-matrix vs linear-space alignment.
//!
//! Compares the O(m·n)-space Needleman-Wunsch traceback against the
//! Hirschberg divide-and-conquer variant at multiple sequence lengths,
//! plus the self-insertion expander on deep index lists.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use sepia_align::{hirschberg, needleman_wunsch, PenaltyModel};
use sepia_seq::{expand, DnaSeq};

// =========================================================================
// Sequence generation — deterministic LCG, ~10% divergence
// =========================================================================

fn random_dna(len: usize, seed: u64) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut state = seed;
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.push(bases[((state >> 33) % 4) as usize]);
    }
    seq
}

fn mutate_dna(seq: &[u8], rate: f64, seed: u64) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut out = seq.to_vec();
    let mut state = seed;
    for b in out.iter_mut() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let r = (state >> 33) as f64 / (u32::MAX as f64);
        if r < rate {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            *b = bases[((state >> 33) % 4) as usize];
        }
    }
    out
}

// =========================================================================
// Aligner benchmarks
// =========================================================================

fn bench_aligners(c: &mut Criterion) {
    let model = PenaltyModel::reference();
    let mut group = c.benchmark_group("global_alignment");

    for &len in &[100usize, 400, 1000] {
        let a = random_dna(len, 42);
        let b = mutate_dna(&a, 0.1, 1337);
        group.throughput(Throughput::Elements((len * len) as u64));

        group.bench_with_input(BenchmarkId::new("full_matrix", len), &len, |bench, _| {
            bench.iter(|| needleman_wunsch(black_box(&a), black_box(&b), &model).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("linear_space", len), &len, |bench, _| {
            bench.iter(|| hirschberg(black_box(&a), black_box(&b), &model).unwrap())
        });
    }
    group.finish();
}

fn bench_expander(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");

    // Ten valid doublings of a 4 bp seed: 4 -> 4096 bp.
    let seed = DnaSeq::new("ACGT").unwrap();
    let indices: Vec<usize> = (0..10).map(|i| i * 3).collect();
    group.bench_function("ten_doublings", |bench| {
        bench.iter(|| expand(black_box(&seed), black_box(&indices)))
    });
    group.finish();
}

criterion_group!(benches, bench_aligners, bench_expander);
criterion_main!(benches);
