//! `window.__APP_CONFIG.gate` handling.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

use frontend::config::gate_config;
use shared::GateConfig;
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn set_app_config(expression: &str) {
    js_sys::eval(&format!("window.__APP_CONFIG = {expression};")).unwrap();
}

fn clear_app_config() {
    js_sys::eval("delete window.__APP_CONFIG;").unwrap();
}

#[wasm_bindgen_test]
fn missing_app_config_uses_defaults() {
    clear_app_config();
    assert_eq!(gate_config(), GateConfig::default());
}

#[wasm_bindgen_test]
fn app_config_without_gate_uses_defaults() {
    set_app_config("{ firebase: {} }");
    assert_eq!(gate_config(), GateConfig::default());
    clear_app_config();
}

#[wasm_bindgen_test]
fn valid_gate_override_is_read() {
    set_app_config(
        r#"{ gate: { redirectRoute: "/app", benignErrorCodes: ["auth/popup-blocked"] } }"#,
    );

    let config = gate_config();
    assert_eq!(config.redirect_route, "/app");
    assert!(config.is_benign("auth/popup-blocked"));
    assert!(!config.is_benign("auth/cancelled-popup-request"));

    clear_app_config();
}

#[wasm_bindgen_test]
fn relative_redirect_route_falls_back_to_defaults() {
    set_app_config(r#"{ gate: { redirectRoute: "chat" } }"#);
    assert_eq!(gate_config(), GateConfig::default());
    clear_app_config();
}

#[wasm_bindgen_test]
fn malformed_gate_falls_back_to_defaults() {
    set_app_config(r#"{ gate: { redirectRoute: 42 } }"#);
    assert_eq!(gate_config(), GateConfig::default());
    clear_app_config();
}
