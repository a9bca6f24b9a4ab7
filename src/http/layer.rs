//! Chain integration.
//!
//! Installs a [`Forwarder`] in front of the next handler of a `tower`
//! stack. The forwarder is a terminal element: the next handler is kept
//! (so the chain stays intact and can be recovered) but never called.

use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{Request, Response};
use futures_util::future::BoxFuture;
use tower::{Layer, Service};

use crate::http::forwarder::Forwarder;

/// [`Layer`] wrapping any service in a [`ForwarderService`].
#[derive(Debug, Clone)]
pub struct ForwarderLayer {
    forwarder: Arc<Forwarder>,
}

impl ForwarderLayer {
    pub fn new(forwarder: Arc<Forwarder>) -> Self {
        Self { forwarder }
    }
}

impl<S> Layer<S> for ForwarderLayer {
    type Service = ForwarderService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ForwarderService::new(inner, self.forwarder.clone())
    }
}

/// Service answering every request through the forwarder.
#[derive(Debug, Clone)]
pub struct ForwarderService<S> {
    inner: S,
    forwarder: Arc<Forwarder>,
}

impl<S> ForwarderService<S> {
    pub fn new(inner: S, forwarder: Arc<Forwarder>) -> Self {
        Self { inner, forwarder }
    }

    /// The next handler in the chain.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    pub fn forwarder(&self) -> &Arc<Forwarder> {
        &self.forwarder
    }
}

impl<S> Service<Request<Body>> for ForwarderService<S> {
    type Response = Response<Body>;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let forwarder = self.forwarder.clone();
        Box::pin(async move { Ok(forwarder.serve(request).await) })
    }
}
