//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::convert::Infallible;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request, Response};
use jsonp_layer::BodyRelease;
use tower::util::BoxCloneService;
use tower::ServiceExt;

pub type MockService = BoxCloneService<Request<Body>, Response<Body>, Infallible>;

/// Fixed response returned by a mock inner service.
#[derive(Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub chunks: Vec<&'static str>,
}

impl MockResponse {
    pub fn json(body: &'static str) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            chunks: vec![body],
        }
    }

    pub fn with_content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn with_chunks(mut self, chunks: Vec<&'static str>) -> Self {
        self.chunks = chunks;
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    fn build(&self) -> Response<Body> {
        let chunks: Vec<Result<String, Infallible>> =
            self.chunks.iter().map(|c| Ok(c.to_string())).collect();
        Response::builder()
            .status(self.status)
            .header(header::CONTENT_TYPE, self.content_type)
            .body(Body::from_stream(futures_util::stream::iter(chunks)))
            .unwrap()
    }
}

/// Everything the mock inner service observed.
#[derive(Default)]
pub struct Observed {
    pub uris: Mutex<Vec<String>>,
    pub releases: AtomicU32,
}

impl Observed {
    pub fn last_query(&self) -> Option<String> {
        let uris = self.uris.lock().unwrap();
        let uri: axum::http::Uri = uris.last()?.parse().unwrap();
        uri.query().map(str::to_string)
    }

    pub fn release_count(&self) -> u32 {
        self.releases.load(Ordering::SeqCst)
    }
}

/// Build an inner service that records the URI it was called with and
/// returns `response`. With `closeable` set, the response carries a
/// [`BodyRelease`] that counts invocations.
pub fn mock_service(response: MockResponse, closeable: bool) -> (MockService, Arc<Observed>) {
    let observed = Arc::new(Observed::default());
    let obs = observed.clone();
    let svc = tower::service_fn(move |req: Request<Body>| {
        let obs = obs.clone();
        let response = response.clone();
        async move {
            obs.uris.lock().unwrap().push(req.uri().to_string());
            let mut built = response.build();
            if closeable {
                let hook_obs = obs.clone();
                built.extensions_mut().insert(BodyRelease::new(move || {
                    hook_obs.releases.fetch_add(1, Ordering::SeqCst);
                }));
            }
            Ok::<_, Infallible>(built)
        }
    });
    (BoxCloneService::new(svc), observed)
}

/// Install a test-writer subscriber honouring `RUST_LOG`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Send a GET for `uri` through `svc` and return the response.
pub async fn get<S>(svc: S, uri: &str) -> Response<Body>
where
    S: tower::Service<Request<Body>, Response = Response<Body>, Error = Infallible>,
{
    init_tracing();
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    svc.oneshot(req).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
