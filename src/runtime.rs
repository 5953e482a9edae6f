//! Process-wide runtime container: JSON configuration store, event
//! dispatcher, and CSRF token.
//!
//! A [`Runtime`] is installed once per process; every accessor errors with
//! `runtime.not_installed` until that happens. Embedders that want an
//! isolated container (tests, mostly) can hold a [`Runtime`] directly
//! instead of going through the global.

use crate::dot;
use crate::error::{Error, Result};
use crate::ids;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

type Listener = Box<dyn Fn(&Value) + Send + Sync>;

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

pub struct Runtime {
    config: RwLock<Value>,
    listeners: RwLock<HashMap<String, Vec<Listener>>>,
    csrf: OnceLock<String>,
}

// Listener boxes are opaque, so report only how many are registered.
impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listener_count: usize = match self.listeners.read() {
            Ok(guard) => guard.values().map(|v| v.len()).sum(),
            Err(poisoned) => poisoned.into_inner().values().map(|v| v.len()).sum(),
        };

        f.debug_struct("Runtime")
            .field("config", &*self.config_read())
            .field("listeners", &listener_count)
            .field("csrf", &self.csrf.get().is_some())
            .finish()
    }
}

/// Install the global runtime with the given configuration tree.
/// Errors if a runtime was already installed.
pub fn install(config: Value) -> Result<&'static Runtime> {
    if RUNTIME.set(Runtime::new(config)).is_err() {
        return Err(Error::runtime_already_installed());
    }
    app()
}

/// Install the global runtime from a JSON configuration file.
pub fn install_from_file(path: impl AsRef<Path>) -> Result<&'static Runtime> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("read config file '{}'", path.display())),
        )
    })?;
    let config: Value = serde_json::from_str(&content).map_err(|e| {
        Error::validation_invalid_json(e, Some(format!("parse config file '{}'", path.display())))
    })?;

    let runtime = install(config)?;
    crate::log_status!("runtime", "Loaded config from {}", path.display());
    Ok(runtime)
}

/// The installed global runtime.
pub fn app() -> Result<&'static Runtime> {
    RUNTIME.get().ok_or_else(Error::runtime_not_installed)
}

/// CSRF token of the installed runtime.
pub fn csrf_token() -> Result<String> {
    Ok(app()?.csrf_token().to_string())
}

impl Runtime {
    pub fn new(config: Value) -> Self {
        Self {
            config: RwLock::new(config),
            listeners: RwLock::new(HashMap::new()),
            csrf: OnceLock::new(),
        }
    }

    fn config_read(&self) -> RwLockReadGuard<'_, Value> {
        match self.config.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn config_write(&self) -> RwLockWriteGuard<'_, Value> {
        match self.config.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Dot-path read from the configuration tree.
    pub fn config_get(&self, path: &str) -> Option<Value> {
        dot::get(&self.config_read(), path).cloned()
    }

    /// Dot-path read with a fallback.
    pub fn config_get_or(&self, path: &str, default: Value) -> Value {
        self.config_get(path).unwrap_or(default)
    }

    /// Dot-path write into the configuration tree, creating intermediate
    /// levels as needed.
    pub fn config_set(&self, path: &str, value: Value) -> Result<()> {
        dot::set(&mut self.config_write(), path, value)
    }

    /// Snapshot of the whole configuration tree.
    pub fn config_snapshot(&self) -> Value {
        self.config_read().clone()
    }

    /// Register a listener for an event name.
    pub fn on(&self, event: &str, listener: impl Fn(&Value) + Send + Sync + 'static) {
        let mut listeners = match self.listeners.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        listeners
            .entry(event.to_string())
            .or_default()
            .push(Box::new(listener));
    }

    /// Invoke every listener registered for `event` with `payload`.
    /// Returns how many listeners ran.
    pub fn trigger(&self, event: &str, payload: &Value) -> usize {
        let listeners = match self.listeners.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        match listeners.get(event) {
            Some(registered) => {
                for listener in registered {
                    listener(payload);
                }
                registered.len()
            }
            None => 0,
        }
    }

    /// Stable per-runtime CSRF token, generated on first access.
    pub fn csrf_token(&self) -> &str {
        self.csrf.get_or_init(ids::uuid4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn config_get_and_set_round_trip() {
        let runtime = Runtime::new(json!({"site": {"name": "toolbelt"}}));
        assert_eq!(runtime.config_get("site.name"), Some(json!("toolbelt")));

        runtime.config_set("site.debug", json!(true)).unwrap();
        assert_eq!(runtime.config_get("site.debug"), Some(json!(true)));
    }

    #[test]
    fn config_get_or_uses_default_on_miss() {
        let runtime = Runtime::new(json!({}));
        assert_eq!(
            runtime.config_get_or("missing.key", json!(10)),
            json!(10)
        );
    }

    #[test]
    fn trigger_runs_all_listeners_and_counts_them() {
        let runtime = Runtime::new(json!({}));
        let seen = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let seen = Arc::clone(&seen);
            runtime.on("deploy.done", move |payload| {
                assert_eq!(payload["ok"], json!(true));
                seen.fetch_add(1, Ordering::SeqCst);
            });
        }

        let ran = runtime.trigger("deploy.done", &json!({"ok": true}));
        assert_eq!(ran, 3);
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn trigger_unknown_event_runs_nothing() {
        let runtime = Runtime::new(json!({}));
        assert_eq!(runtime.trigger("nobody.listens", &Value::Null), 0);
    }

    #[test]
    fn debug_format_reports_listener_count_not_closures() {
        let runtime = Runtime::new(json!({"a": 1}));
        runtime.on("deploy.done", |_| {});
        runtime.on("deploy.done", |_| {});

        let dump = format!("{:?}", runtime);
        assert!(dump.contains("listeners: 2"), "unexpected dump: {}", dump);
        assert!(dump.contains("csrf: false"));
    }

    #[test]
    fn result_of_runtime_ref_supports_unwrap_err() {
        // Accessor results are routinely unwrapped in tests, which needs
        // Debug on the Ok side too.
        let result: crate::Result<&Runtime> = Err(Error::runtime_not_installed());
        assert_eq!(result.unwrap_err().code, crate::ErrorCode::RuntimeNotInstalled);
    }

    #[test]
    fn csrf_token_is_stable_and_v4() {
        let runtime = Runtime::new(json!({}));
        let token = runtime.csrf_token().to_string();
        assert_eq!(runtime.csrf_token(), token);
        assert!(crate::ids::is_uuid4(&token));
    }
}
