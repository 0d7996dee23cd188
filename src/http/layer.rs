//! Tower layer and service wrapping an inner handler with JSONP support.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::{Body, Bytes, HttpBody};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, Response};
use axum::BoxError;
use tower::{Layer, Service};

use crate::config::{load_config, ConfigError, JsonpConfig};
use crate::http::padding::{self, Framing};
use crate::http::query;

/// Layer that applies [`Jsonp`] to an inner service.
#[derive(Debug, Clone, Default)]
pub struct JsonpLayer {
    config: Arc<JsonpConfig>,
}

impl JsonpLayer {
    /// Create a layer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a layer with the given configuration.
    pub fn with_config(config: JsonpConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Create a layer from a validated TOML configuration file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::with_config(load_config(path)?))
    }

    /// Configuration shared by every service this layer produces.
    pub fn config(&self) -> &JsonpConfig {
        &self.config
    }
}

impl<S> Layer<S> for JsonpLayer {
    type Service = Jsonp<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Jsonp {
            inner,
            config: self.config.clone(),
        }
    }
}

/// Service that strips JSONP parameters from requests and pads JSON
/// responses with the requested callback.
#[derive(Debug, Clone)]
pub struct Jsonp<S> {
    inner: S,
    config: Arc<JsonpConfig>,
}

impl<S> Jsonp<S> {
    /// Wrap `inner` with the given configuration.
    pub fn new(inner: S, config: JsonpConfig) -> Self {
        JsonpLayer::with_config(config).layer(inner)
    }

    /// Borrow the inner service.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Consume the wrapper, returning the inner service.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for Jsonp<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ResBody: HttpBody<Data = Bytes> + Send + 'static,
    ResBody::Error: Into<BoxError>,
{
    type Response = Response<Body>;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        let param = self.config.callback_param.as_str();
        let callback = query::extract_callback(req.uri().query(), param);
        query::strip_request_query(&mut req, param);

        let carriage_return = self.config.carriage_return;
        let fut = self.inner.call(req);

        Box::pin(async move {
            let response = fut.await?.map(Body::new);
            let framing = Framing::select(callback, carriage_return, response.headers());

            tracing::debug!(
                status = %response.status(),
                content_type = ?response.headers().get(CONTENT_TYPE),
                framing = ?framing,
                "JSONP response"
            );

            Ok(padding::apply(response, framing).await)
        })
    }
}
