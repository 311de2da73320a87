//! Form submission controller
//!
//! Mediates between user actions and the generation endpoint. The four
//! actions are independent; they share only the cached output of the last
//! successful generation.

use std::sync::Arc;
use tracing::{debug, info, warn};

use formcase_common::{Download, Notice, Result, Summary, LOADING_PLACEHOLDER};

use crate::cache::CachedOutput;
use crate::highlight::highlight;
use crate::surface::{Clipboard, FileSaver, Notifier, OutputView};
use crate::transport::GenerationTransport;

/// Host collaborators the controller drives
#[derive(Clone)]
pub struct Surface {
    pub view: Arc<dyn OutputView>,
    pub notifier: Arc<dyn Notifier>,
    pub clipboard: Arc<dyn Clipboard>,
    pub saver: Arc<dyn FileSaver>,
}

/// Result of a copy or download action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// Nothing generated yet; the user was notified
    NothingCached,
}

/// What a successful generation produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub summary: Summary,
    /// Pretty-printed JSON as shown and cached
    pub rendered: String,
}

/// Controller for one page view. Clones share the cached output.
#[derive(Clone)]
pub struct FormController {
    transport: Arc<dyn GenerationTransport>,
    surface: Surface,
    cache: CachedOutput,
}

impl FormController {
    pub fn new(transport: Arc<dyn GenerationTransport>, surface: Surface) -> Self {
        Self {
            transport,
            surface,
            cache: CachedOutput::new(),
        }
    }

    /// Use an existing cache slot
    pub fn with_cache(mut self, cache: CachedOutput) -> Self {
        self.cache = cache;
        self
    }

    pub fn cache(&self) -> &CachedOutput {
        &self.cache
    }

    /// Tell the user the server-side sample form will be used
    pub fn request_sample_notice(&self) {
        self.surface.notifier.notify(Notice::SampleInfo);
    }

    /// Submit HTML to the generation endpoint and render the result.
    ///
    /// On failure the output region shows an error state, the user is
    /// notified and the cached output is left untouched.
    pub async fn generate(&self, html: &str) -> Result<GenerationReport> {
        let view = &self.surface.view;
        view.show_loading(LOADING_PLACEHOLDER);

        let report = match self.request(html).await {
            Ok(report) => report,
            Err(e) => {
                let message = e.display_message();
                warn!("Generation failed: {}", e);
                view.show_error(&message);
                self.surface
                    .notifier
                    .notify(Notice::GenerationFailed { message });
                return Err(e);
            }
        };

        view.show_output(&report.rendered);
        view.highlight(&highlight(&report.rendered));
        view.show_summary(&report.summary);
        self.cache.store(report.rendered.clone());

        info!("{}", report.summary);
        Ok(report)
    }

    async fn request(&self, html: &str) -> Result<GenerationReport> {
        let result = self.transport.generate(html).await?;
        Ok(GenerationReport {
            summary: result.summary(),
            rendered: result.render()?,
        })
    }

    /// Copy the cached output to the clipboard
    pub fn copy_output(&self) -> Result<ActionOutcome> {
        let Some(text) = self.cache.get() else {
            debug!("Copy requested before any generation");
            self.surface.notifier.notify(Notice::NothingToCopy);
            return Ok(ActionOutcome::NothingCached);
        };

        self.surface.clipboard.write_text(&text)?;
        self.surface.notifier.notify(Notice::Copied);
        Ok(ActionOutcome::Completed)
    }

    /// Hand the cached output to the save action as `testcases_output.json`
    pub fn download_output(&self) -> Result<ActionOutcome> {
        let Some(text) = self.cache.get() else {
            debug!("Download requested before any generation");
            self.surface.notifier.notify(Notice::NothingToDownload);
            return Ok(ActionOutcome::NothingCached);
        };

        let download = Download::json_output(&text);
        let location = self.surface.saver.save(&download)?;
        info!("Saved {} ({} bytes)", location.display(), download.bytes.len());
        self.surface.notifier.notify(Notice::Downloaded { location });
        Ok(ActionOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{Span, TokenKind};
    use async_trait::async_trait;
    use formcase_common::{Error, GenerationResult};
    use parking_lot::Mutex;
    use serde_json::{json, Value};
    use std::path::PathBuf;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Loading(String),
        Output(String),
        Highlighted(usize),
        Summary(String),
        Error(String),
        Notice(Notice),
        Clipboard(String),
        Saved(String, String, Vec<u8>),
    }

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<Event>>,
    }

    impl Recorder {
        fn events(&self) -> Vec<Event> {
            self.events.lock().clone()
        }

        fn push(&self, event: Event) {
            self.events.lock().push(event);
        }
    }

    impl OutputView for Recorder {
        fn show_loading(&self, placeholder: &str) {
            self.push(Event::Loading(placeholder.to_string()));
        }
        fn show_output(&self, text: &str) {
            self.push(Event::Output(text.to_string()));
        }
        fn highlight(&self, spans: &[Span<'_>]) {
            let keys = spans.iter().filter(|s| s.kind == TokenKind::Key).count();
            self.push(Event::Highlighted(keys));
        }
        fn show_summary(&self, summary: &Summary) {
            self.push(Event::Summary(summary.to_string()));
        }
        fn show_error(&self, message: &str) {
            self.push(Event::Error(message.to_string()));
        }
    }

    impl Notifier for Recorder {
        fn notify(&self, notice: Notice) {
            self.push(Event::Notice(notice));
        }
    }

    impl Clipboard for Recorder {
        fn write_text(&self, text: &str) -> Result<()> {
            self.push(Event::Clipboard(text.to_string()));
            Ok(())
        }
    }

    impl FileSaver for Recorder {
        fn save(&self, download: &Download) -> Result<PathBuf> {
            self.push(Event::Saved(
                download.file_name.clone(),
                download.content_type.clone(),
                download.bytes.clone(),
            ));
            Ok(PathBuf::from("/downloads").join(&download.file_name))
        }
    }

    /// Answers every request with a fixed document, recording inputs
    struct FixedTransport {
        response: std::result::Result<Value, u16>,
        requests: Mutex<Vec<String>>,
    }

    impl FixedTransport {
        fn ok(response: Value) -> Self {
            Self {
                response: Ok(response),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn status(code: u16) -> Self {
            Self {
                response: Err(code),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GenerationTransport for FixedTransport {
        async fn generate(&self, html: &str) -> Result<GenerationResult> {
            self.requests.lock().push(html.to_string());
            match &self.response {
                Ok(doc) => GenerationResult::from_value(doc.clone()),
                Err(code) => Err(Error::Status {
                    status: *code,
                    message: "No HTML form provided. Please paste a valid form.".to_string(),
                }),
            }
        }
    }

    /// Sleeps for the number of milliseconds given as input, then answers
    /// with one field named after the input
    struct DelayTransport;

    #[async_trait]
    impl GenerationTransport for DelayTransport {
        async fn generate(&self, html: &str) -> Result<GenerationResult> {
            let millis: u64 = html.parse().unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(millis)).await;
            GenerationResult::from_value(json!({ "fields": [html], "test_cases": [] }))
        }
    }

    fn controller(transport: Arc<dyn GenerationTransport>) -> (FormController, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        let surface = Surface {
            view: recorder.clone(),
            notifier: recorder.clone(),
            clipboard: recorder.clone(),
            saver: recorder.clone(),
        };
        (FormController::new(transport, surface), recorder)
    }

    fn sample_response() -> Value {
        json!({
            "fields": [
                { "name": "email", "type": "email", "attrs": { "required": true }, "required": true },
                { "name": "age", "type": "number", "attrs": { "min": "18" }, "required": false }
            ],
            "test_cases": [
                { "id": "TC-BASE-001", "type": "baseline_valid", "inputs": { "email": "user@example.com", "age": "68" } }
            ]
        })
    }

    #[test]
    fn test_sample_notice_only_notifies() {
        let transport = Arc::new(FixedTransport::ok(sample_response()));
        let (ctl, rec) = controller(transport.clone());

        ctl.request_sample_notice();

        assert_eq!(rec.events(), vec![Event::Notice(Notice::SampleInfo)]);
        assert!(transport.requests.lock().is_empty());
        assert!(!ctl.cache().is_present());
    }

    #[tokio::test]
    async fn test_generate_renders_and_caches() {
        let transport = Arc::new(FixedTransport::ok(sample_response()));
        let (ctl, rec) = controller(transport.clone());

        let html = "<form><input type=\"email\" name=\"email\" required></form>";
        let report = ctl.generate(html).await.unwrap();

        assert_eq!(*transport.requests.lock(), vec![html.to_string()]);
        assert_eq!(report.summary, Summary { fields: 2, test_cases: 1 });

        let rendered = serde_json::to_string_pretty(&sample_response()).unwrap();
        assert_eq!(report.rendered, rendered);

        let events = rec.events();
        assert_eq!(events[0], Event::Loading("Generating test cases... ".to_string()));
        assert_eq!(events[1], Event::Output(rendered.clone()));
        assert!(matches!(events[2], Event::Highlighted(n) if n > 0));
        assert_eq!(
            events[3],
            Event::Summary("Fields Detected: 2 | Test Cases Generated: 1".to_string())
        );

        let shown: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(shown, sample_response());
        assert_eq!(ctl.cache().get(), Some(rendered));
    }

    #[tokio::test]
    async fn test_generate_sends_empty_input_verbatim() {
        let transport = Arc::new(FixedTransport::ok(json!({ "fields": [], "test_cases": [] })));
        let (ctl, _rec) = controller(transport.clone());

        ctl.generate("").await.unwrap();

        assert_eq!(*transport.requests.lock(), vec![String::new()]);
    }

    #[tokio::test]
    async fn test_generate_failure_shows_error_state() {
        let (ctl, rec) = controller(Arc::new(FixedTransport::status(400)));

        let err = ctl.generate("").await.unwrap_err();
        assert!(matches!(err, Error::Status { status: 400, .. }));

        let message = "No HTML form provided. Please paste a valid form.".to_string();
        assert_eq!(
            rec.events(),
            vec![
                Event::Loading("Generating test cases... ".to_string()),
                Event::Error(message.clone()),
                Event::Notice(Notice::GenerationFailed { message }),
            ]
        );
        assert!(!ctl.cache().is_present());
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_cache() {
        let (ok_ctl, _rec) = controller(Arc::new(FixedTransport::ok(sample_response())));
        ok_ctl.generate("<form></form>").await.unwrap();
        let before = ok_ctl.cache().get();

        let (failing, _rec) = controller(Arc::new(FixedTransport::ok(json!({ "fields": [] }))));
        let failing = failing.with_cache(ok_ctl.cache().clone());

        let err = failing.generate("<form></form>").await.unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
        assert_eq!(failing.cache().get(), before);
    }

    #[test]
    fn test_copy_and_download_before_generate() {
        let (ctl, rec) = controller(Arc::new(FixedTransport::ok(sample_response())));

        assert_eq!(ctl.copy_output().unwrap(), ActionOutcome::NothingCached);
        assert_eq!(ctl.download_output().unwrap(), ActionOutcome::NothingCached);

        assert_eq!(
            rec.events(),
            vec![
                Event::Notice(Notice::NothingToCopy),
                Event::Notice(Notice::NothingToDownload),
            ]
        );
    }

    #[tokio::test]
    async fn test_copy_after_generate_is_exact() {
        let (ctl, rec) = controller(Arc::new(FixedTransport::ok(sample_response())));
        let report = ctl.generate("<form></form>").await.unwrap();

        assert_eq!(ctl.copy_output().unwrap(), ActionOutcome::Completed);

        let events = rec.events();
        let n = events.len();
        assert_eq!(events[n - 2], Event::Clipboard(report.rendered));
        assert_eq!(events[n - 1], Event::Notice(Notice::Copied));
    }

    #[tokio::test]
    async fn test_download_after_generate_is_exact() {
        let (ctl, rec) = controller(Arc::new(FixedTransport::ok(sample_response())));
        let report = ctl.generate("<form></form>").await.unwrap();

        assert_eq!(ctl.download_output().unwrap(), ActionOutcome::Completed);

        let events = rec.events();
        let n = events.len();
        assert_eq!(
            events[n - 2],
            Event::Saved(
                "testcases_output.json".to_string(),
                "application/json".to_string(),
                report.rendered.into_bytes(),
            )
        );
        assert_eq!(
            events[n - 1],
            Event::Notice(Notice::Downloaded {
                location: PathBuf::from("/downloads/testcases_output.json")
            })
        );
    }

    #[tokio::test]
    async fn test_last_resolved_response_wins() {
        let (ctl, _rec) = controller(Arc::new(DelayTransport));

        // Issued first, resolves last
        let slow = ctl.clone();
        let fast = ctl.clone();
        let (a, b) = tokio::join!(slow.generate("120"), fast.generate("5"));
        a.unwrap();
        b.unwrap();

        let cached: Value = serde_json::from_str(&ctl.cache().get().unwrap()).unwrap();
        assert_eq!(cached["fields"], json!(["120"]));
    }
}
