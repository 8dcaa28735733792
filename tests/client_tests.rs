use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use item_catalog::client::{
    render, CatalogView, Delivery, FetchError, FetchState, FetchStatus, MountOptions, RawResponse,
    Transport, ITEMS_PATH,
};
use item_catalog::Item;
use tokio::sync::Notify;

/// 桩传输：按预设返回结果，可选地等待放行信号
struct StubTransport {
    outcome: Result<RawResponse, FetchError>,
    gate: Option<Arc<Notify>>,
    calls: AtomicUsize,
}

impl StubTransport {
    fn respond(status: u16, body: &str) -> Self {
        Self {
            outcome: Ok(RawResponse::new(status, body)),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn fail(message: &str) -> Self {
        Self {
            outcome: Err(FetchError::Transport(message.to_string())),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for StubTransport {
    fn get<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<RawResponse, FetchError>> {
        Box::pin(async move {
            assert_eq!(path, ITEMS_PATH);
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.outcome.clone()
        })
    }
}

const SEED_BODY: &str = r#"[
    {"id": 1, "name": "Item 1", "description": "Description for Item 1"},
    {"id": 2, "name": "Item 2", "description": "Description for Item 2"},
    {"id": 3, "name": "Item 3", "description": "Description for Item 3"}
]"#;

#[tokio::test]
async fn success_renders_items_in_response_order() {
    let body = r#"[
        {"id": 2, "name": "Second", "description": "Shown first"},
        {"id": 1, "name": "First", "description": "Shown second"}
    ]"#;
    let transport = Arc::new(StubTransport::respond(200, body));
    let mut view = CatalogView::mount(transport.clone(), MountOptions::default());

    let state = view.settled().await;
    assert_eq!(state.status(), FetchStatus::Success);
    assert_eq!(state.items().len(), 2);
    assert_eq!(state.items()[0].name, "Second");

    let html = view.render();
    let second = html.find("<h3>Second</h3><p>Shown first</p>").unwrap();
    let first = html.find("<h3>First</h3><p>Shown second</p>").unwrap();
    assert!(second < first);
    assert!(!html.contains("Loading..."));
    assert!(!html.contains("Error:"));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn server_error_status_ends_in_error_with_code() {
    let transport = Arc::new(StubTransport::respond(500, "Internal Server Error"));
    let mut view = CatalogView::mount(transport, MountOptions::default());

    let state = view.settled().await;
    assert_eq!(state.status(), FetchStatus::Error);
    assert!(state.error_message().unwrap().contains("500"));
    assert!(state.items().is_empty());

    let html = view.render();
    assert_eq!(html, r#"<div class="App">Error: HTTP error! status: 500</div>"#);
}

#[tokio::test]
async fn non_success_statuses_all_route_to_error() {
    for status in [301_u16, 404, 503] {
        let transport = Arc::new(StubTransport::respond(status, SEED_BODY));
        let mut view = CatalogView::mount(transport, MountOptions::default());

        let state = view.settled().await;
        assert_eq!(
            state,
            FetchState::Error(format!("HTTP error! status: {}", status))
        );
    }
}

#[tokio::test]
async fn transport_failure_shows_its_description() {
    let transport = Arc::new(StubTransport::fail("Failed to fetch"));
    let mut view = CatalogView::mount(transport, MountOptions::default());

    let state = view.settled().await;
    assert_eq!(state.status(), FetchStatus::Error);
    assert!(state.error_message().unwrap().contains("Failed to fetch"));
    assert!(view.render().contains("Error: Failed to fetch"));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let transport = Arc::new(StubTransport::respond(200, r#"{"items": []}"#));
    let mut view = CatalogView::mount(transport, MountOptions::default());

    let state = view.settled().await;
    assert_eq!(state.status(), FetchStatus::Error);
    assert!(!state.error_message().unwrap().is_empty());
    assert!(!view.render().contains("item-card"));
}

#[tokio::test]
async fn loading_is_shown_until_the_response_arrives() {
    let gate = Arc::new(Notify::new());
    let transport = Arc::new(StubTransport::respond(200, SEED_BODY).gated(gate.clone()));
    let mut view = CatalogView::mount(transport, MountOptions::default());

    assert_eq!(view.state(), FetchState::Loading);
    assert_eq!(view.render(), r#"<div class="App">Loading...</div>"#);

    gate.notify_one();
    let state = view.settled().await;
    assert_eq!(state.items(), &[Item::synthesize(1), Item::synthesize(2), Item::synthesize(3)]);
}

#[tokio::test]
async fn terminal_state_does_not_change() {
    let transport = Arc::new(StubTransport::respond(200, SEED_BODY));
    let mut view = CatalogView::mount(transport.clone(), MountOptions::default());

    let first = view.settled().await;
    tokio::time::sleep(Duration::from_millis(20)).await;
    let second = view.settled().await;

    assert_eq!(first, second);
    assert_eq!(view.state(), first);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn late_response_after_unmount_is_discarded() {
    let gate = Arc::new(Notify::new());
    let transport = Arc::new(StubTransport::respond(200, SEED_BODY).gated(gate.clone()));
    let view = CatalogView::mount(transport.clone(), MountOptions::default());

    let pending = view.unmount();
    gate.notify_one();

    assert_eq!(pending.await.unwrap(), Delivery::Discarded);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn applied_delivery_when_still_mounted() {
    let transport = Arc::new(StubTransport::respond(200, SEED_BODY));
    let mut view = CatalogView::mount(transport, MountOptions::default());

    view.settled().await;
    assert_eq!(view.unmount().await.unwrap(), Delivery::Applied);
}

#[tokio::test]
async fn hung_request_times_out_when_configured() {
    let gate = Arc::new(Notify::new());
    let transport = Arc::new(StubTransport::respond(200, SEED_BODY).gated(gate));
    let options = MountOptions::with_timeout(Some(Duration::from_millis(50)));
    let mut view = CatalogView::mount(transport, options);

    let state = view.settled().await;
    assert_eq!(
        state,
        FetchState::Error("request timed out after 50ms".to_string())
    );
}

#[tokio::test]
async fn hung_request_stays_loading_without_timeout() {
    let gate = Arc::new(Notify::new());
    let transport = Arc::new(StubTransport::respond(200, SEED_BODY).gated(gate));
    let mut view = CatalogView::mount(transport, MountOptions::default());

    let waited = tokio::time::timeout(Duration::from_millis(50), view.settled()).await;
    assert!(waited.is_err());
    assert_eq!(view.status(), FetchStatus::Loading);
}

#[test]
fn render_is_a_pure_projection() {
    let state = FetchState::Success(vec![Item::synthesize(7)]);
    assert_eq!(render(&state), render(&state.clone()));
}
