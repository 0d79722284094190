//! Common test utilities and fixtures for integration tests.
//!
//! The service is stateless, so every test builds its own router in-process.

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use dictation_core::JudgeSettings;
use dictation_quiz_backend::{build_router, AppState};

/// Test context holding the router under test.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a context with default judge settings.
    pub fn new() -> Self {
        Self::with_settings(JudgeSettings::default())
    }

    /// Create a context with custom service-wide judge settings.
    pub fn with_settings(settings: JudgeSettings) -> Self {
        Self {
            app: build_router(AppState { settings }),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}
