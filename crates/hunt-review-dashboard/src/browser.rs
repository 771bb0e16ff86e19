//! Browser-only glue

use hunt_review_core::session::{SessionStorage, StorageError, StorageResult};
use wasm_bindgen::JsValue;

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| StorageError("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError("localStorage is disabled".to_string()))
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::local()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::local()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        Self::local()?.remove_item(key).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> StorageError {
    StorageError(format!("{:?}", value))
}

/// Blocking alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            tracing::warn!("Could not show alert: {}", message);
        }
    }
}
