use benchvault::compare::compare_runs;
use benchvault::dataset::generate_bench_text;
use benchvault::parse::parse_run;

#[test]
fn test_generated_text_parses_to_requested_cases() {
    let raw = generate_bench_text(40, 7, 0xB25F);
    let run = parse_run(&raw).expect("run");
    assert_eq!(run.len(), 40);
    let measurement = run.get("BenchmarkCase0-1").expect("measurement");
    assert!(measurement.metric("ns/op").is_some());
    assert!(measurement.metric("B/op").is_some());
    assert!(measurement.metric("allocs/op").is_some());
}

#[test]
fn test_generation_is_deterministic_per_seed() {
    let first = generate_bench_text(10, 3, 42);
    let second = generate_bench_text(10, 3, 42);
    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_keep_names_aligned() {
    let before = parse_run(&generate_bench_text(25, 5, 1)).expect("run");
    let after = parse_run(&generate_bench_text(25, 5, 2)).expect("run");
    let report = compare_runs(&before, &after).expect("report");
    // Same names on both sides: every row is a two-sided delta.
    assert_eq!(report.rows.len(), 25 * 3);
    assert!(report.rows.iter().all(|row| row.before.is_some() && row.after.is_some()));
}
