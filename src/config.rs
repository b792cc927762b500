//! Build-time configuration for the API endpoint with optional runtime
//! overrides. In the browser the runtime config is read from
//! `window.ELECTROVERSE_CONFIG` (if present) so static deployments can change
//! endpoints without rebuilding; natively the CLI passes its flags in.
//! `timeout_ms` only takes effect in native builds: reqwest's fetch backend
//! has no request timeout, so the browser accepts the key but ignores it.
//! Configuration values are public; do not store secrets here.

/// Default request timeout (milliseconds) applied when nothing else is set.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Client configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base address relative paths are resolved against; empty means same origin.
    pub api_base_url: String,
    /// Per-request timeout for native clients.
    pub timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env();

        if let Some(runtime) = runtime_config() {
            config.apply(runtime);
        }

        config
    }

    /// Config baked in at compile time, without runtime overrides.
    pub fn from_build_env() -> Self {
        let api_base_url = option_env!("ELECTROVERSE_API_BASE_URL").unwrap_or("");
        let timeout_ms = option_env!("ELECTROVERSE_TIMEOUT_MS")
            .and_then(parse_timeout)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            api_base_url: api_base_url.trim().to_string(),
            timeout_ms,
        }
    }

    /// Applies non-empty overrides on top of the current values.
    pub fn apply(&mut self, runtime: RuntimeConfig) {
        if let Some(value) = runtime.api_base_url {
            self.api_base_url = value;
        }
        if let Some(value) = runtime.timeout_ms {
            self.timeout_ms = value;
        }
    }
}

/// Overrides supplied at runtime. `None` keeps the build-time value.
#[derive(Debug, Default)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl RuntimeConfig {
    /// Builds overrides from raw strings, dropping blank or unparsable values.
    pub fn from_raw(api_base_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        Self {
            api_base_url: api_base_url.and_then(normalize_runtime_value),
            timeout_ms: timeout_ms.and_then(parse_timeout),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("ELECTROVERSE_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    let api_base_url = read_runtime_value(&object, "api_base_url");
    let timeout_ms = read_runtime_value(&object, "timeout_ms");

    Some(RuntimeConfig::from_raw(
        api_base_url.as_deref(),
        timeout_ms.as_deref(),
    ))
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    // timeout_ms is usually a JS number rather than a string
    value
        .as_string()
        .or_else(|| value.as_f64().map(|number| format!("{number:.0}")))
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_timeout(value: &str) -> Option<u64> {
    normalize_runtime_value(value)?
        .parse::<u64>()
        .ok()
        .filter(|ms| *ms > 0)
}
