// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Edge gate middleware.
//!
//! A pre-routing interceptor for the tickets API family. For requests under
//! the protected prefix it verifies the bearer token once and annotates the
//! request with the derived [`Identity`]; requests outside the prefix bypass
//! it entirely. The gate is defense in depth: handlers re-verify the token
//! themselves and never assume the gate ran.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{
    body::Body,
    http::{header, Request},
    response::{IntoResponse, Response},
};
use tower::{Layer, Service};
use uuid::Uuid;

use crate::auth::TokenService;
use crate::error::ApiError;

// =============================================================================
// RequestId
// =============================================================================

/// Request id annotated by the gate for tracing.
#[derive(Debug, Clone, Copy)]
pub struct RequestId(pub Uuid);

// =============================================================================
// GateLayer
// =============================================================================

/// Layer for the edge gate.
#[derive(Clone)]
pub struct GateLayer {
    token_service: Arc<TokenService>,
    protected_prefix: Arc<String>,
}

impl GateLayer {
    /// Creates a gate protecting the default tickets prefix.
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self {
            token_service,
            protected_prefix: Arc::new("/api/tickets".to_string()),
        }
    }

    /// Overrides the protected path prefix.
    pub fn with_protected_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.protected_prefix = Arc::new(prefix.into());
        self
    }
}

impl<S> Layer<S> for GateLayer {
    type Service = GateMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        GateMiddleware {
            inner,
            token_service: self.token_service.clone(),
            protected_prefix: self.protected_prefix.clone(),
        }
    }
}

// =============================================================================
// GateMiddleware
// =============================================================================

/// Middleware for the edge gate.
#[derive(Clone)]
pub struct GateMiddleware<S> {
    inner: S,
    token_service: Arc<TokenService>,
    protected_prefix: Arc<String>,
}

impl<S> GateMiddleware<S> {
    fn is_protected(&self, path: &str) -> bool {
        path.starts_with(self.protected_prefix.as_str())
    }
}

impl<S> Service<Request<Body>> for GateMiddleware<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let token_service = self.token_service.clone();
        let is_protected = self.is_protected(req.uri().path());
        let mut inner = self.inner.clone();

        Box::pin(async move {
            if !is_protected {
                return inner.call(req).await;
            }

            let request_id = Uuid::now_v7();

            let header_value = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .map(|value| value.to_string());

            let Some(header_value) = header_value else {
                tracing::debug!(request_id = %request_id, "gate: no credential provided");
                return Ok(
                    ApiError::unauthorized("authentication required").into_response()
                );
            };

            match token_service.verify_header(&header_value) {
                Ok(identity) => {
                    tracing::debug!(
                        request_id = %request_id,
                        user_id = identity.user_id,
                        role = %identity.role,
                        "gate: credential verified"
                    );
                    req.extensions_mut().insert(identity);
                    req.extensions_mut().insert(RequestId(request_id));
                    inner.call(req).await
                }
                Err(e) => {
                    tracing::debug!(request_id = %request_id, error = %e, "gate: verification failed");
                    Ok(ApiError::unauthorized("invalid or expired token").into_response())
                }
            }
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Identity, JwtConfig};
    use axum::http::{HeaderValue, StatusCode};
    use deskd_core::Role;
    use std::convert::Infallible;
    use tower::ServiceExt;

    fn test_token_service() -> Arc<TokenService> {
        Arc::new(
            TokenService::new(JwtConfig::new(
                "test-secret-key-that-is-long-enough-for-testing",
            ))
            .unwrap(),
        )
    }

    fn echo_service(
    ) -> impl Service<
        Request<Body>,
        Response = Response,
        Error = Infallible,
        Future = impl Future<Output = Result<Response, Infallible>> + Send + 'static,
    > + Clone
           + Send
           + 'static {
        tower::service_fn(|req: Request<Body>| async move {
            // Report whether the gate annotated the request.
            let annotated = req.extensions().get::<Identity>().is_some();
            let status = if annotated {
                StatusCode::OK
            } else {
                StatusCode::NO_CONTENT
            };
            let mut response = Response::new(Body::empty());
            *response.status_mut() = status;
            Ok::<_, Infallible>(response)
        })
    }

    fn request(path: &str, auth: Option<&str>) -> Request<Body> {
        let mut req = Request::builder().uri(path).body(Body::empty()).unwrap();
        if let Some(value) = auth {
            req.headers_mut().insert(
                header::AUTHORIZATION,
                HeaderValue::from_str(value).unwrap(),
            );
        }
        req
    }

    #[tokio::test]
    async fn test_unprotected_path_bypasses_gate() {
        let layer = GateLayer::new(test_token_service());
        let mut service = layer.layer(echo_service());

        let response = service
            .ready()
            .await
            .unwrap()
            .call(request("/api/users", None))
            .await
            .unwrap();

        // Forwarded without annotation, no short-circuit.
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_protected_path_requires_credential() {
        let layer = GateLayer::new(test_token_service());
        let mut service = layer.layer(echo_service());

        let response = service
            .ready()
            .await
            .unwrap()
            .call(request("/api/tickets", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_protected_path_rejects_bad_token() {
        let layer = GateLayer::new(test_token_service());
        let mut service = layer.layer(echo_service());

        let response = service
            .ready()
            .await
            .unwrap()
            .call(request("/api/tickets", Some("Bearer garbage")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_protected_path_annotates_identity() {
        let token_service = test_token_service();
        let token = token_service
            .issue(&Identity::new(9, Role::Manager))
            .unwrap();

        let layer = GateLayer::new(token_service);
        let mut service = layer.layer(echo_service());

        let response = service
            .ready()
            .await
            .unwrap()
            .call(request(
                "/api/tickets/3/comments",
                Some(&format!("Bearer {}", token)),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
