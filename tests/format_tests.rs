use benchvault::compare::{ComparisonReport, compare_runs};
use benchvault::format::render_report;
use benchvault::parse::parse_run;

fn report(before: &str, after: &str) -> ComparisonReport {
    let a = parse_run(before).expect("before run");
    let b = parse_run(after).expect("after run");
    compare_runs(&a, &b).expect("report")
}

#[test]
fn test_render_is_deterministic() {
    let report = report(
        "BenchmarkFoo 100 10 ns/op 512 B/op\nBenchmarkBar 100 5 ns/op\n",
        "BenchmarkFoo 100 12 ns/op 512 B/op\nBenchmarkQux 100 9 ns/op\n",
    );
    let copy = report.clone();
    let first = render_report(&report);
    let second = render_report(&copy);
    assert_eq!(first, second);
}

#[test]
fn test_render_layout() {
    let report = report(
        "BenchmarkFoo 100 10 ns/op\n",
        "BenchmarkFoo 100 12 ns/op\n",
    );
    let text = String::from_utf8(render_report(&report)).expect("utf-8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "benchmark\tmetric\tbefore\tafter\tdelta");
    assert_eq!(lines[1], "BenchmarkFoo\tns/op\t10\t12\t+20.00%");
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_render_placeholders_and_tags() {
    let report = report(
        "BenchmarkFoo 100 10 ns/op\nBenchmarkGone 100 3 ns/op\n",
        "BenchmarkFoo 100 8 ns/op\nBenchmarkNew 100 4 ns/op\n",
    );
    let text = String::from_utf8(render_report(&report)).expect("utf-8");
    assert!(text.contains("BenchmarkGone\tns/op\t3\t-\tremoved"));
    assert!(text.contains("BenchmarkNew\tns/op\t-\t4\tadded"));
    assert!(text.contains("BenchmarkFoo\tns/op\t10\t8\t-20.00%"));
}

#[test]
fn test_render_before_zero_tag() {
    let report = report(
        "BenchmarkFoo 100 0 B/op\n",
        "BenchmarkFoo 100 5 B/op\n",
    );
    let text = String::from_utf8(render_report(&report)).expect("utf-8");
    assert!(text.contains("BenchmarkFoo\tB/op\t0\t5\tbefore-zero"));
}

#[test]
fn test_render_empty_report() {
    let rendered = render_report(&ComparisonReport::default());
    assert_eq!(rendered, b"no common benchmarks\n");
}

#[test]
fn test_render_fractional_values() {
    let report = report(
        "BenchmarkFoo 100 1520.5 ns/op\n",
        "BenchmarkFoo 100 1520.5 ns/op\n",
    );
    let text = String::from_utf8(render_report(&report)).expect("utf-8");
    assert!(text.contains("BenchmarkFoo\tns/op\t1520.5\t1520.5\t+0.00%"));
}
