use async_trait::async_trait;
use seashell_add_file::models::FormState;
use seashell_add_file::{
    AddFileDialog, FileContent, FileStore, FormHost, StoreError, SubmitCtx, SubmitOutcome,
};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{watch, Semaphore};
use tokio_test::assert_ok;

/// 记录所有 create_file 调用的存储
#[derive(Default)]
struct RecordingStore {
    calls: Mutex<Vec<(String, String, FileContent)>>,
    fail_paths: Vec<String>,
    /// 调用发生时表单是否处于锁定状态
    disabled_during_call: Mutex<Vec<bool>>,
    observer: Mutex<Option<watch::Receiver<FormState>>>,
    /// 设置后每次调用都要等到放行
    gate: Option<Semaphore>,
}

impl RecordingStore {
    fn failing(paths: &[&str]) -> Self {
        Self {
            fail_paths: paths.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Default::default()
        }
    }

    fn observe(&self, rx: watch::Receiver<FormState>) {
        *self.observer.lock().unwrap() = Some(rx);
    }

    fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(64);
        }
    }

    fn paths(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|c| c.1.clone()).collect()
    }
}

#[async_trait]
impl FileStore for RecordingStore {
    async fn create_file(
        &self,
        project_id: &str,
        path: &str,
        content: FileContent,
    ) -> Result<(), StoreError> {
        let disabled = self
            .observer
            .lock()
            .unwrap()
            .as_ref()
            .map(|rx| rx.borrow().fields_disabled);
        if let Some(disabled) = disabled {
            self.disabled_during_call.lock().unwrap().push(disabled);
        }

        self.calls
            .lock()
            .unwrap()
            .push((project_id.to_string(), path.to_string(), content));

        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }

        if self.fail_paths.iter().any(|p| p == path) {
            return Err(StoreError::AlreadyExists {
                path: path.to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
struct RecordingHost {
    closes: Mutex<usize>,
    errors: Mutex<Vec<String>>,
}

impl RecordingHost {
    fn closes(&self) -> usize {
        *self.closes.lock().unwrap()
    }

    fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl FormHost for RecordingHost {
    fn close_form(&self) {
        *self.closes.lock().unwrap() += 1;
    }

    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

fn dialog_with(store: &Arc<RecordingStore>, host: &Arc<RecordingHost>) -> AddFileDialog {
    let dialog = AddFileDialog::new(SubmitCtx::new("p1", "q1"), store.clone(), host.clone());
    store.observe(dialog.subscribe());
    dialog
}

/// 写入两个真实存在的上传文件
fn two_uploads(dir: &tempfile::TempDir) -> Vec<PathBuf> {
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.rkt");
    std::fs::write(&a, "alpha").unwrap();
    std::fs::write(&b, "#lang racket\n").unwrap();
    vec![a, b]
}

#[tokio::test]
async fn test_named_file_only_success() {
    let store = Arc::new(RecordingStore::default());
    let host = Arc::new(RecordingHost::default());
    let dialog = dialog_with(&store, &host);

    dialog.on_name_change("main.c");
    let outcome = dialog.submit().await;

    let calls = store.calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "p1");
    assert_eq!(calls[0].1, "q1/main.c");
    assert_eq!(
        calls[0].2,
        FileContent::Text("\nint main() {\n\treturn 0;\n}\n".to_string())
    );
    assert_eq!(host.closes(), 1);
    assert!(host.errors().is_empty());
    assert!(matches!(outcome, SubmitOutcome::Completed(report) if report.is_success()));
}

#[tokio::test]
async fn test_uploads_only_success() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(RecordingStore::default());
    let host = Arc::new(RecordingHost::default());
    let dialog = dialog_with(&store, &host);

    dialog.on_files_selected(Some(two_uploads(&dir)));
    dialog.submit().await;

    let mut paths = store.paths();
    paths.sort();
    assert_eq!(paths, vec!["q1/a.txt", "q1/b.rkt"]);

    let calls = store.calls.lock().unwrap().clone();
    assert!(calls
        .iter()
        .all(|c| matches!(&c.2, FileContent::DataUrl(url) if url.starts_with("data:"))));
    assert_eq!(host.closes(), 1);
    assert!(host.errors().is_empty());
}

#[tokio::test]
async fn test_read_failure_reports_and_keeps_form_open() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(RecordingStore::default());
    let host = Arc::new(RecordingHost::default());
    let dialog = dialog_with(&store, &host);

    dialog.on_name_change("list.h");
    dialog.on_files_selected(Some(vec![dir.path().join("vanished.c")]));
    let outcome = dialog.submit().await;

    assert_eq!(store.paths(), vec!["q1/list.h"]);
    assert_eq!(host.closes(), 0);

    let errors = host.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("vanished.c"));
    assert!(!errors[0].contains("list.h"));

    match outcome {
        SubmitOutcome::Completed(report) => {
            assert_eq!(report.created, vec!["list.h"]);
            assert_eq!(report.failed_names(), vec!["vanished.c"]);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn test_every_failure_in_one_message() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(RecordingStore::failing(&["q1/main.c", "q1/b.rkt"]));
    let host = Arc::new(RecordingHost::default());
    let dialog = dialog_with(&store, &host);

    dialog.on_name_change("main.c");
    dialog.on_files_selected(Some(two_uploads(&dir)));
    dialog.submit().await;

    // 所有任务都执行到了结束
    assert_eq!(store.paths().len(), 3);

    let errors = host.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("main.c"));
    assert!(errors[0].contains("b.rkt"));
    assert!(!errors[0].contains("a.txt"));
    assert_eq!(host.closes(), 0);
    assert!(!dialog.fields_disabled());
}

#[tokio::test]
async fn test_separator_name_is_skipped_not_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(RecordingStore::default());
    let host = Arc::new(RecordingHost::default());
    let dialog = dialog_with(&store, &host);

    dialog.on_name_change("sub/main.c");
    dialog.on_files_selected(Some(two_uploads(&dir)));
    dialog.submit().await;

    let paths = store.paths();
    assert_eq!(paths.len(), 2);
    assert!(!paths.iter().any(|p| p.contains("main.c")));
    assert_eq!(host.closes(), 1);
}

#[tokio::test]
async fn test_fields_disabled_only_while_in_flight() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(RecordingStore::default());
    let host = Arc::new(RecordingHost::default());
    let dialog = dialog_with(&store, &host);

    dialog.on_name_change("main.c");
    dialog.on_files_selected(Some(two_uploads(&dir)));
    assert!(!dialog.fields_disabled());

    dialog.submit().await;

    assert_eq!(*store.disabled_during_call.lock().unwrap(), vec![true, true, true]);
    assert!(!dialog.fields_disabled());
}

#[tokio::test]
async fn test_empty_form_is_noop() {
    let store = Arc::new(RecordingStore::default());
    let host = Arc::new(RecordingHost::default());
    let dialog = dialog_with(&store, &host);
    let rx = dialog.subscribe();

    assert!(!dialog.can_submit());
    assert_eq!(dialog.submit().await, SubmitOutcome::Nothing);

    assert!(!assert_ok!(rx.has_changed()));
    assert!(!dialog.fields_disabled());
    assert!(store.paths().is_empty());
    assert_eq!(host.closes(), 0);
    assert!(host.errors().is_empty());
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_ignored() {
    let store = Arc::new(RecordingStore::gated());
    let host = Arc::new(RecordingHost::default());
    let dialog = dialog_with(&store, &host);

    dialog.on_name_change("main.c");

    let first = dialog.submit();
    let second = async {
        // 让第一个提交先运行到存储调用
        tokio::task::yield_now().await;
        assert!(dialog.fields_disabled());
        assert!(!dialog.can_submit());
        let outcome = dialog.on_key_press("Enter").await;
        store.release();
        outcome
    };

    let (first, second) = tokio::join!(first, second);

    assert!(matches!(first, SubmitOutcome::Completed(_)));
    assert_eq!(second, SubmitOutcome::Busy);
    assert_eq!(store.paths(), vec!["q1/main.c"]);
    assert_eq!(host.closes(), 1);
    assert!(!dialog.fields_disabled());
}

#[tokio::test]
async fn test_fields_unlock_when_submit_is_dropped() {
    let store = Arc::new(RecordingStore::gated());
    let host = Arc::new(RecordingHost::default());
    let dialog = dialog_with(&store, &host);

    dialog.on_name_change("main.c");
    let result = tokio::time::timeout(Duration::from_millis(20), dialog.submit()).await;

    assert!(result.is_err());
    assert!(!dialog.fields_disabled());
    assert_eq!(host.closes(), 0);
}

#[tokio::test]
async fn test_retry_after_failure() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(RecordingStore::default());
    let host = Arc::new(RecordingHost::default());
    let dialog = dialog_with(&store, &host);

    let missing = dir.path().join("later.txt");
    dialog.on_files_selected(Some(vec![missing.clone()]));
    dialog.submit().await;
    assert_eq!(host.errors().len(), 1);

    std::fs::write(&missing, "now here").unwrap();
    dialog.submit().await;

    assert_eq!(store.paths(), vec!["q1/later.txt"]);
    assert_eq!(host.closes(), 1);
    assert_eq!(host.errors().len(), 1);
}

#[tokio::test]
async fn test_name_blur_restores_previous_valid_name() {
    let store = Arc::new(RecordingStore::default());
    let host = Arc::new(RecordingHost::default());
    let dialog = dialog_with(&store, &host);

    dialog.on_name_change("queue.rkt");
    dialog.on_name_blur();
    assert_eq!(dialog.state().prev_file, "queue.rkt");

    dialog.on_name_change("bad/name");
    dialog.on_name_blur();
    assert_eq!(dialog.state().file, "queue.rkt");

    dialog.on_name_change("");
    dialog.on_name_blur();
    assert_eq!(dialog.state().file, "queue.rkt");
}

#[tokio::test]
async fn test_only_enter_key_submits() {
    let store = Arc::new(RecordingStore::default());
    let host = Arc::new(RecordingHost::default());
    let dialog = dialog_with(&store, &host);

    dialog.on_name_change("main.c");
    assert!(dialog.can_submit());
    assert_eq!(dialog.on_key_press("a").await, SubmitOutcome::Nothing);
    assert!(store.paths().is_empty());

    assert!(matches!(
        dialog.on_key_press("Enter").await,
        SubmitOutcome::Completed(_)
    ));
    assert_eq!(store.paths(), vec!["q1/main.c"]);
}

#[tokio::test]
async fn test_uploads_enable_add_button_without_name() {
    let store = Arc::new(RecordingStore::default());
    let host = Arc::new(RecordingHost::default());
    let dialog = dialog_with(&store, &host);

    assert!(!dialog.can_submit());
    dialog.on_files_selected(Some(vec![PathBuf::from("x.c")]));
    assert!(dialog.can_submit());

    dialog.on_files_selected::<Vec<PathBuf>>(None);
    assert!(!dialog.can_submit());
}

#[tokio::test]
async fn test_cancel_closes_without_store_calls() {
    let store = Arc::new(RecordingStore::default());
    let host = Arc::new(RecordingHost::default());
    let dialog = dialog_with(&store, &host);

    dialog.on_name_change("main.c");
    dialog.cancel();

    assert_eq!(host.closes(), 1);
    assert!(store.paths().is_empty());
}
