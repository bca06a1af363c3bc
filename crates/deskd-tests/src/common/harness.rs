// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Test Harness
//!
//! In-process HTTP harness driving the full router, middleware stack
//! included, without binding a socket.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use deskd_api::{AppState, Identity};
use deskd_core::Role;

use super::fixtures::{seeded_state, Seed};

/// A router plus its state, with request helpers.
pub struct TestApp {
    router: Router,
    /// Application state behind the router.
    pub state: AppState,
    /// IDs of the seeded records.
    pub seed: Seed,
}

impl TestApp {
    /// Builds the app over a freshly seeded store.
    pub async fn seeded() -> Self {
        let (state, seed) = seeded_state().await;
        let router = deskd_api::router(state.clone());
        Self {
            router,
            state,
            seed,
        }
    }

    /// Issues a valid token for the seeded account with the given role.
    pub fn token_for(&self, role: Role) -> String {
        self.state
            .token_service
            .issue(&self.seed.identity(role))
            .expect("token issuance")
    }

    /// Issues a valid `Authorization` header value for the given role.
    pub fn bearer_for(&self, role: Role) -> String {
        format!("Bearer {}", self.token_for(role))
    }

    /// Issues a bearer header for an arbitrary identity.
    pub fn bearer_for_identity(&self, identity: &Identity) -> String {
        let token = self
            .state
            .token_service
            .issue(identity)
            .expect("token issuance");
        format!("Bearer {}", token)
    }

    /// Sends a request and returns the status plus parsed JSON body.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        auth: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("request build"),
            None => builder.body(Body::empty()).expect("request build"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router call");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collect")
            .to_bytes();

        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };

        (status, json)
    }

    /// Convenience GET.
    pub async fn get(&self, path: &str, auth: Option<&str>) -> (StatusCode, serde_json::Value) {
        self.request(Method::GET, path, auth, None).await
    }

    /// Convenience POST with a JSON body.
    pub async fn post(
        &self,
        path: &str,
        auth: Option<&str>,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request(Method::POST, path, auth, Some(body)).await
    }

    /// Convenience PATCH with a JSON body.
    pub async fn patch(
        &self,
        path: &str,
        auth: Option<&str>,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request(Method::PATCH, path, auth, Some(body)).await
    }

    /// Convenience DELETE.
    pub async fn delete(&self, path: &str, auth: Option<&str>) -> (StatusCode, serde_json::Value) {
        self.request(Method::DELETE, path, auth, None).await
    }
}
