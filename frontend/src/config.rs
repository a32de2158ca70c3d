//! Runtime configuration injected by the hosting page as `window.__APP_CONFIG`.

use js_sys::{Reflect, JSON};
use shared::GateConfig;
use wasm_bindgen::JsValue;

const APP_CONFIG_KEY: &str = "__APP_CONFIG";
const GATE_KEY: &str = "gate";

/// Gate settings from `window.__APP_CONFIG.gate`, or defaults when absent or invalid.
pub fn gate_config() -> GateConfig {
    match read_gate_config() {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::debug!("no gate config provided, using defaults");
            GateConfig::default()
        }
        Err(e) => {
            log::warn!("Config error: {e}; using defaults");
            GateConfig::default()
        }
    }
}

fn read_gate_config() -> Result<Option<GateConfig>, String> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let app_config = Reflect::get(&window, &JsValue::from_str(APP_CONFIG_KEY))
        .map_err(|e| format!("{e:?}"))?;
    if app_config.is_undefined() || app_config.is_null() {
        return Ok(None);
    }
    let gate = Reflect::get(&app_config, &JsValue::from_str(GATE_KEY))
        .map_err(|e| format!("{e:?}"))?;
    if gate.is_undefined() || gate.is_null() {
        return Ok(None);
    }
    let json = JSON::stringify(&gate)
        .map_err(|e| format!("{e:?}"))?
        .as_string()
        .ok_or_else(|| "gate config is not serializable".to_string())?;
    GateConfig::from_json(&json)
        .map(Some)
        .map_err(|e| e.to_string())
}
