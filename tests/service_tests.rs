use benchvault::service::BenchService;
use benchvault::store::{RunStore, SqliteRunStore};
use benchvault::verify::{AcceptAllVerifier, SignatureVerifier};
use benchvault::BenchVaultError;

const BEFORE: &str = "BenchmarkFoo-1 100 10 ns/op 512 B/op\nBenchmarkBar-1 100 7 ns/op\n";
const AFTER: &str = "BenchmarkFoo-1 100 12 ns/op 512 B/op\nBenchmarkBar-1 100 7 ns/op\n";

struct RejectAllVerifier;

impl SignatureVerifier for RejectAllVerifier {
    fn verify(&self, _signature: &str, _content: &[u8], _secret: &str) -> bool {
        false
    }
}

fn service() -> BenchService<SqliteRunStore, AcceptAllVerifier> {
    let store = SqliteRunStore::open_in_memory().expect("store");
    BenchService::new(store, AcceptAllVerifier, "secret")
}

#[test]
fn test_upload_and_show_round_trip() {
    let service = service();
    let id = service.upload(BEFORE, "", "abc123").expect("upload");
    assert_eq!(service.show(id).expect("show"), BEFORE.trim());
}

#[test]
fn test_upload_requires_content_and_commit() {
    let service = service();
    assert!(matches!(
        service.upload("  \n", "", "abc123").unwrap_err(),
        BenchVaultError::InvalidInput(_)
    ));
    assert!(matches!(
        service.upload(BEFORE, "", "   ").unwrap_err(),
        BenchVaultError::InvalidInput(_)
    ));
}

#[test]
fn test_upload_rejects_dummy_content() {
    let service = service();
    let err = service.upload("short", "", "abc123").unwrap_err();
    assert!(matches!(err, BenchVaultError::InvalidInput(_)));
}

#[test]
fn test_upload_rejects_bad_signature_before_storing() {
    let store = SqliteRunStore::open_in_memory().expect("store");
    let service = BenchService::new(store, RejectAllVerifier, "secret");
    let err = service.upload(BEFORE, "bogus", "abc123").unwrap_err();
    assert!(matches!(err, BenchVaultError::Unauthorized(_)));
    assert!(service.recent(10).expect("recent").is_empty());
}

#[test]
fn test_recent_lists_uploads_newest_first() {
    let service = service();
    service.upload(BEFORE, "", "commit-1").expect("upload");
    service.upload(AFTER, "", "commit-2").expect("upload");
    let summaries = service.recent(10).expect("recent");
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].commit, "commit-2");
    assert_eq!(summaries[1].commit, "commit-1");
}

#[test]
fn test_compare_end_to_end() {
    let service = service();
    let a = service.upload(BEFORE, "", "commit-1").expect("upload");
    let b = service.upload(AFTER, "", "commit-2").expect("upload");
    let rendered = service.compare(a, b).expect("compare");
    let text = String::from_utf8(rendered).expect("utf-8");
    assert!(text.starts_with("benchmark\tmetric\tbefore\tafter\tdelta\n"));
    assert!(text.contains("BenchmarkFoo-1\tns/op\t10\t12\t+20.00%"));
    assert!(text.contains("BenchmarkBar-1\tns/op\t7\t7\t+0.00%"));
}

#[test]
fn test_compare_missing_run_propagates_not_found() {
    let service = service();
    let a = service.upload(BEFORE, "", "commit-1").expect("upload");
    let err = service.compare(a, a + 1).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_compare_unparseable_run_is_a_parse_error() {
    let service = service();
    let a = service.upload(BEFORE, "", "commit-1").expect("upload");
    let b = service
        .store()
        .create_run("no measurements here\n", "commit-2")
        .expect("create");
    let err = service.compare(a, b).unwrap_err();
    assert!(matches!(err, BenchVaultError::Parse(_)));
}
