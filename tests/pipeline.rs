//! End-to-end pipeline tests with a stub documentation service.
//!
//! The stub counts calls, which makes the cache-gate and cancellation
//! guarantees directly observable: a cache hit must mean zero service calls
//! for that file, and a cancelled run must stop calling and must not write a
//! summary.

use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};
use tempfile::TempDir;

use autodocs::types::{Error, Result};
use autodocs::{
    CancelFlag, Config, DocService, Pipeline, PipelineOutcome, ResponseCache,
};

#[derive(Default)]
struct StubService {
    calls: AtomicUsize,
    /// Fail any file whose content contains this marker.
    fail_marker: Option<&'static str>,
    /// Cancel this flag as a side effect of the first call.
    cancel_on_call: Option<CancelFlag>,
}

impl StubService {
    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocService for StubService {
    async fn document(&self, code: &str) -> Result<Value> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(flag) = &self.cancel_on_call {
            flag.cancel();
        }
        if let Some(marker) = self.fail_marker
            && code.contains(marker)
        {
            return Err(Error::external("stub failure"));
        }
        Ok(json!({
            "Document": [{ "function": format!("fn_{call}"), "DocString": "generated" }],
            "techstack": ["TypeScript"],
            "FlowChart": format!("graph TD; N{call}"),
        }))
    }

    async fn merge_charts(&self, _flowcharts: &[String]) -> Result<String> {
        unreachable!("generation never merges charts")
    }

    async fn readme(&self, _summary: &Value) -> Result<String> {
        unreachable!("generation never requests a README")
    }
}

fn test_config() -> Config {
    let mut config = Config::default();
    config.api.delay_ms = 0;
    config
}

fn project_with_files(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (relative, content) in files {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}

fn summary_path(dir: &TempDir) -> std::path::PathBuf {
    let name = dir.path().file_name().unwrap().to_string_lossy();
    dir.path().join("auto-docs-output").join(format!("{name}.json"))
}

async fn run_pipeline(dir: &TempDir, service: Arc<StubService>) -> PipelineOutcome {
    let pipeline = Pipeline::new(dir.path(), test_config(), service);
    pipeline.run(&CancelFlag::new()).await.unwrap()
}

#[tokio::test]
async fn full_run_writes_summary() {
    let dir = project_with_files(&[
        ("a.ts", "export const a = 1;"),
        ("src/b.py", "def b():\n    pass"),
        ("notes.txt", "structural only"),
    ]);
    let service = Arc::new(StubService::default());

    let outcome = run_pipeline(&dir, service.clone()).await;

    let PipelineOutcome::Completed(report) = outcome else {
        panic!("expected completion, got {outcome:?}");
    };
    assert_eq!(report.documented, 2);
    assert_eq!(report.cache_hits, 0);
    assert_eq!(report.failed, 0);
    assert_eq!(service.call_count(), 2);

    let summary: Value =
        serde_json::from_str(&fs::read_to_string(summary_path(&dir)).unwrap()).unwrap();
    assert_eq!(summary["Document"].as_array().unwrap().len(), 2);
    assert_eq!(summary["techstack"], json!(["TypeScript"]));
    assert_eq!(summary["FlowChart"].as_array().unwrap().len(), 2);

    // the structural view keeps files the allow-list rejected
    let children = summary["directoryStructure"]["children"].as_array().unwrap();
    assert!(children.iter().any(|c| c["name"] == "notes.txt"));
}

#[tokio::test]
async fn warm_cache_suppresses_service_calls_and_is_idempotent() {
    let dir = project_with_files(&[
        ("a.ts", "export const a = 1;"),
        ("src/b.py", "def b():\n    pass"),
    ]);

    let first = Arc::new(StubService::default());
    run_pipeline(&dir, first.clone()).await;
    assert_eq!(first.call_count(), 2);
    let first_summary = fs::read(summary_path(&dir)).unwrap();

    let second = Arc::new(StubService::default());
    let outcome = run_pipeline(&dir, second.clone()).await;

    let PipelineOutcome::Completed(report) = outcome else {
        panic!("expected completion, got {outcome:?}");
    };
    assert_eq!(second.call_count(), 0, "cache hits must not reach the service");
    assert_eq!(report.cache_hits, 2);
    assert_eq!(report.documented, 0);

    let second_summary = fs::read(summary_path(&dir)).unwrap();
    assert_eq!(first_summary, second_summary, "warm rerun must be byte-identical");
}

#[tokio::test]
async fn pre_seeded_entry_is_reused_verbatim() {
    let dir = project_with_files(&[("a.ts", "export const a = 1;")]);
    let cache = ResponseCache::new(dir.path().join("auto-docs-output"));
    cache.ensure_dir().unwrap();
    cache
        .store("a.ts", &json!({ "techstack": ["Handwritten"] }))
        .unwrap();

    let service = Arc::new(StubService::default());
    run_pipeline(&dir, service.clone()).await;

    assert_eq!(service.call_count(), 0);
    let summary: Value =
        serde_json::from_str(&fs::read_to_string(summary_path(&dir)).unwrap()).unwrap();
    assert_eq!(summary["techstack"], json!(["Handwritten"]));
}

#[tokio::test]
async fn failed_file_is_skipped_and_run_continues() {
    let dir = project_with_files(&[
        ("bad.ts", "BOOM export const x = 1;"),
        ("good.py", "def ok():\n    pass"),
    ]);
    let service = Arc::new(StubService {
        fail_marker: Some("BOOM"),
        ..Default::default()
    });

    let outcome = run_pipeline(&dir, service.clone()).await;

    let PipelineOutcome::Completed(report) = outcome else {
        panic!("expected completion, got {outcome:?}");
    };
    assert_eq!(report.failed, 1);
    assert_eq!(report.documented, 1);
    assert_eq!(service.call_count(), 2);

    // the failed file left no cache entry, so a rerun retries it
    let cache = ResponseCache::new(dir.path().join("auto-docs-output"));
    assert!(cache.try_load("bad.ts").is_none());
    assert!(cache.try_load("good.py").is_some());
}

#[tokio::test]
async fn cancellation_mid_loop_stops_calls_and_summary() {
    let dir = project_with_files(&[
        ("a.ts", "export const a = 1;"),
        ("b.ts", "export const b = 2;"),
        ("c.ts", "export const c = 3;"),
    ]);

    let cancel = CancelFlag::new();
    let service = Arc::new(StubService {
        cancel_on_call: Some(cancel.clone()),
        ..Default::default()
    });

    let pipeline = Pipeline::new(dir.path(), test_config(), service.clone());
    let outcome = pipeline.run(&cancel).await.unwrap();

    assert!(matches!(outcome, PipelineOutcome::Cancelled));
    assert_eq!(service.call_count(), 1, "no calls after the cancellation point");
    assert!(!summary_path(&dir).exists(), "cancelled runs write no summary");

    // the entry written before cancellation stays valid for the next run
    let resumed = Arc::new(StubService::default());
    let outcome = run_pipeline(&dir, resumed.clone()).await;
    let PipelineOutcome::Completed(report) = outcome else {
        panic!("expected completion, got {outcome:?}");
    };
    assert_eq!(report.cache_hits, 1);
    assert_eq!(resumed.call_count(), 2);
}

#[tokio::test]
async fn cancellation_before_first_file_makes_no_calls() {
    let dir = project_with_files(&[("a.ts", "export const a = 1;")]);
    let cancel = CancelFlag::new();
    cancel.cancel();

    let service = Arc::new(StubService::default());
    let pipeline = Pipeline::new(dir.path(), test_config(), service.clone());
    let outcome = pipeline.run(&cancel).await.unwrap();

    assert!(matches!(outcome, PipelineOutcome::Cancelled));
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn empty_project_writes_nothing() {
    let dir = project_with_files(&[
        ("notes.txt", "no allowed extension"),
        ("empty.ts", "   \n"),
        ("package-lock.json", "{}"),
    ]);

    let service = Arc::new(StubService::default());
    let outcome = run_pipeline(&dir, service.clone()).await;

    assert!(matches!(outcome, PipelineOutcome::Empty));
    assert_eq!(service.call_count(), 0);
    assert!(
        !dir.path().join("auto-docs-output").exists(),
        "empty runs create no output directory"
    );
}
