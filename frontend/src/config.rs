use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use wasm_bindgen::JsValue;

const ENV_GLOBAL: &str = "__TRANSLATOR_ENV";
const CONFIG_GLOBAL: &str = "__TRANSLATOR_CONFIG";
const FALLBACK_API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global_key(global: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    // env.js: window.__TRANSLATOR_ENV = { API_BASE_URL: "..." }
    if let Some(env_url) = read_global_key(ENV_GLOBAL, ["API_BASE_URL", "api_base_url"]) {
        debug!("api base url taken from {}", ENV_GLOBAL);
        return Some(env_url);
    }
    let url = read_global_key(CONFIG_GLOBAL, ["api_base_url", "API_BASE_URL"])?;
    debug!("api base url taken from {}", CONFIG_GLOBAL);
    Some(url)
}

fn location_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

fn default_base_url(origin: Option<&str>) -> String {
    match origin {
        Some(origin) if origin.starts_with("http") => {
            format!("{}/api", origin.trim_end_matches('/'))
        }
        _ => FALLBACK_API_BASE_URL.to_string(),
    }
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

fn write_window_config(cfg: &RuntimeConfig) {
    let (Some(url), Some(w)) = (&cfg.api_base_url, web_sys::window()) else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&obj, &"api_base_url".into(), &JsValue::from_str(url));
    let _ = js_sys::Reflect::set(&w, &CONFIG_GLOBAL.into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = location_origin()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            debug!("api base url taken from config.json");
            return cache_base_url(&url);
        }
    }
    let fallback = default_base_url(location_origin().as_deref());
    debug!("api base url defaulted to {}", fallback);
    cache_base_url(&fallback)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
