#![allow(dead_code)]
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub struct ReceivedQuery {
    pub name: Option<String>,
    pub accept: Option<String>,
    pub raw_query: Option<String>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    delay: Duration,
    received: Arc<Mutex<Vec<ReceivedQuery>>>,
}

/// Plain-HTTP resolver answering every `/dns-query` with a canned status and body.
pub struct MockDohServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<ReceivedQuery>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDohServer {
    pub async fn start(status: StatusCode, body: &str) -> Result<Self, std::io::Error> {
        Self::start_with_delay(status, body, Duration::ZERO).await
    }

    pub async fn start_with_delay(
        status: StatusCode,
        body: &str,
        delay: Duration,
    ) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let received = Arc::new(Mutex::new(Vec::new()));

        let state = MockState {
            status,
            body: body.to_string(),
            delay,
            received: received.clone(),
        };
        let app = Router::new()
            .route("/dns-query", get(answer))
            .with_state(state);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}/dns-query", self.addr)
    }

    pub fn received(&self) -> Vec<ReceivedQuery> {
        self.received.lock().unwrap().clone()
    }
}

impl Drop for MockDohServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn answer(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    uri: axum::http::Uri,
) -> (StatusCode, String) {
    state.received.lock().unwrap().push(ReceivedQuery {
        name: params.get("name").cloned(),
        accept: headers
            .get("accept")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        raw_query: uri.query().map(str::to_string),
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    (state.status, state.body.clone())
}
