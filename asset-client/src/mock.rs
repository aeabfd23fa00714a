//! Mock AssetSource implementation for testing

use crate::error::{AssetError, AssetResult};
use crate::traits::AssetSource;
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Responder = Box<dyn Fn() -> AssetResult<Bytes> + Send>;

/// Mock source for testing - only compiled in test mode or with mock feature
///
/// Unconfigured paths answer `NotFound` unless the mock is `strict()`.
pub struct MockAssetSource {
    responses: Arc<Mutex<HashMap<String, Responder>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
    strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Fetch { path: String },
    Probe { path: String },
}

impl Default for MockAssetSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAssetSource {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            delays: Arc::new(Mutex::new(HashMap::new())),
            call_log: Arc::new(Mutex::new(Vec::new())),
            strict: false,
        }
    }

    /// Unconfigured paths return `NotConfigured` instead of `NotFound`
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Serve fixed bytes for `path`
    pub fn with_asset(self, path: &str, data: impl Into<Bytes>) -> Self {
        let data = data.into();
        self.with_response(path, move || Ok(data.clone()))
    }

    /// Configure an arbitrary response for `path`
    pub fn with_response<F>(self, path: &str, f: F) -> Self
    where
        F: Fn() -> AssetResult<Bytes> + Send + 'static,
    {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), Box::new(f));
        self
    }

    /// Delay the answer for `path`, to simulate slow or out-of-order completions
    pub fn with_delay(self, path: &str, delay: Duration) -> Self {
        self.delays
            .lock()
            .unwrap()
            .insert(path.to_string(), delay);
        self
    }

    /// Get recorded calls for verification
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Clear call history
    pub fn clear_calls(&self) {
        self.call_log.lock().unwrap().clear()
    }

    async fn respond(&self, path: &str) -> AssetResult<Bytes> {
        let delay = self.delays.lock().unwrap().get(path).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let responses = self.responses.lock().unwrap();
        match responses.get(path) {
            Some(f) => f(),
            None if self.strict => Err(AssetError::NotConfigured(path.to_string())),
            None => Err(AssetError::NotFound(path.to_string())),
        }
    }
}

#[async_trait]
impl AssetSource for MockAssetSource {
    async fn fetch(&self, path: &str) -> AssetResult<Bytes> {
        self.call_log.lock().unwrap().push(MockCall::Fetch {
            path: path.to_string(),
        });
        self.respond(path).await
    }

    async fn probe(&self, path: &str) -> AssetResult<bool> {
        self.call_log.lock().unwrap().push(MockCall::Probe {
            path: path.to_string(),
        });
        match self.respond(path).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
