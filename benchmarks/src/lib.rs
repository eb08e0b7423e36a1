//! Benchmark-only member; the interesting code lives in `benches/`.
