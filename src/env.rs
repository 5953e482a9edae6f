//! Environment helpers: coerced variable reads, runtime classification,
//! and debug-mode detection against an address/cookie allowlist.
//!
//! The detection functions keep a pure core (`classify`, `detect_debug_mode`)
//! that takes its inputs as arguments; only the thin `detect` wrappers touch
//! the process environment.

use crate::strings::wildcard_match;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Variable naming the runtime environment, read by [`Environment::detect`].
pub const ENV_VAR_APP_ENV: &str = "APP_ENV";
/// Truthy values here force [`Environment::Maintenance`].
pub const ENV_VAR_MAINTENANCE: &str = "APP_MAINTENANCE";

/// Read a variable without coercion.
pub fn raw(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Read a variable with the conventional string coercions applied:
/// `"true"`/`"(true)"` and `"false"`/`"(false)"` become booleans,
/// `"null"`/`"(null)"` becomes null, `"empty"`/`"(empty)"` becomes the
/// empty string, and surrounding double quotes are stripped.
pub fn var(key: &str) -> Option<Value> {
    raw(key).map(|v| coerce(&v))
}

/// Coerced read with a fallback for unset variables.
pub fn var_or(key: &str, default: Value) -> Value {
    var(key).unwrap_or(default)
}

fn coerce(value: &str) -> Value {
    match value.to_ascii_lowercase().as_str() {
        "true" | "(true)" => return Value::Bool(true),
        "false" | "(false)" => return Value::Bool(false),
        "null" | "(null)" => return Value::Null,
        "empty" | "(empty)" => return Value::String(String::new()),
        _ => {}
    }

    let unquoted = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);

    Value::String(unquoted.to_string())
}

/// Runtime classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
    Maintenance,
}

impl Environment {
    /// Classify from an explicit environment name and maintenance flag.
    /// Unknown or unset names classify as production; maintenance wins.
    pub fn classify(app_env: Option<&str>, maintenance: bool) -> Environment {
        if maintenance {
            return Environment::Maintenance;
        }

        match app_env.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("dev") | Some("development") | Some("local") => Environment::Development,
            Some("maintenance") => Environment::Maintenance,
            _ => Environment::Production,
        }
    }

    /// Classify from `APP_ENV` and `APP_MAINTENANCE`.
    pub fn detect() -> Environment {
        let maintenance = matches!(var(ENV_VAR_MAINTENANCE), Some(Value::Bool(true)));
        Environment::classify(raw(ENV_VAR_APP_ENV).as_deref(), maintenance)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Maintenance => "maintenance",
        }
    }
}

/// Request state relevant to debug detection, captured by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMeta {
    pub remote_addr: Option<String>,
    #[serde(default)]
    pub cookies: HashMap<String, String>,
}

/// Allowlist governing when debug mode turns on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugRule {
    /// Client address patterns; globs allowed (`10.0.*`).
    #[serde(default)]
    pub allowed_addrs: Vec<String>,
    /// Optional cookie gate: the named cookie must carry this value.
    #[serde(default)]
    pub cookie_name: Option<String>,
    #[serde(default)]
    pub cookie_value: Option<String>,
}

/// Debug mode is on when the client address matches the allowlist and,
/// if a cookie gate is configured, the cookie matches too. An empty
/// allowlist never enables debug mode.
pub fn detect_debug_mode(request: &RequestMeta, rule: &DebugRule) -> bool {
    let Some(addr) = request.remote_addr.as_deref() else {
        return false;
    };

    let addr_allowed = rule
        .allowed_addrs
        .iter()
        .any(|pattern| pattern == addr || wildcard_match(pattern, addr));

    if !addr_allowed {
        return false;
    }

    match (&rule.cookie_name, &rule.cookie_value) {
        (Some(name), Some(value)) => request.cookies.get(name) == Some(value),
        _ => true,
    }
}
