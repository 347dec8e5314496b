use rand::{Rng, SeedableRng, rngs::StdRng};

const PARALLELISM: [usize; 3] = [1, 4, 8];

const NOISE_LINES: [&str; 4] = [
    "goos: linux",
    "goarch: amd64",
    "pkg: example.com/internal/storage",
    "cpu: AMD EPYC 7R32",
];

/// Generates synthetic raw benchmark output for benches and tests.
///
/// Produces `cases` measurement lines named `BenchmarkCase<idx>-<P>`, each
/// with `ns/op`, `B/op` and `allocs/op`, interleaving a tool-chatter noise
/// line every `noise_every` cases (0 disables noise). Deterministic per seed,
/// so two calls with different seeds yield the same case names with different
/// values.
pub fn generate_bench_text(cases: usize, noise_every: usize, seed: u64) -> String {
    assert!(cases > 0, "cases must be positive");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = String::new();
    for idx in 0..cases {
        if noise_every > 0 && idx % noise_every == 0 {
            out.push_str(NOISE_LINES[(idx / noise_every) % NOISE_LINES.len()]);
            out.push('\n');
        }
        // Suffix depends on the index, not the rng, so runs generated from
        // different seeds keep identical case names.
        let parallelism = PARALLELISM[idx % PARALLELISM.len()];
        let iterations: u64 = rng.gen_range(1_000..=2_000_000);
        let ns_per_op: f64 = rng.gen_range(10.0..50_000.0);
        let bytes_per_op: u64 = rng.gen_range(0..16_384);
        let allocs_per_op: u64 = rng.gen_range(0..128);
        out.push_str(&format!(
            "BenchmarkCase{idx}-{parallelism} {iterations} {ns_per_op:.1} ns/op {bytes_per_op} B/op {allocs_per_op} allocs/op\n"
        ));
    }
    out.push_str("PASS\n");
    out
}
