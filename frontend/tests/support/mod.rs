// Shared helpers for the login page browser tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use wasm_bindgen::JsCast;
use yew::platform::time::sleep;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().remove_child(mount).ok();
}

pub fn click(mount: &web_sys::Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

pub fn text_of(mount: &web_sys::Element, selector: &str) -> Option<String> {
    mount
        .query_selector(selector)
        .unwrap()
        .map(|element| element.text_content().unwrap_or_default())
}

/// Let Yew render and pending promises settle.
pub async fn settle() {
    for _ in 0..5 {
        sleep(Duration::from_millis(10)).await;
    }
}

// ---------------------------------------------------------------------------
// Fake auth bridge
// ---------------------------------------------------------------------------

pub const SIGNED_OUT: Option<&str> = None;
pub const SIGNED_IN: Option<&str> = Some(r#"{ uid: "u1", isAnonymous: false }"#);
pub const ANONYMOUS: Option<&str> = Some(r#"{ uid: "anon", isAnonymous: true }"#);

pub const MALFORMED_USER: Option<&str> = Some(r#"{ isAnonymous: false }"#);

pub const SIGN_IN_OK: &str = r#"Promise.resolve({ uid: "u2", isAnonymous: false })"#;
pub const SIGN_IN_MALFORMED: &str = r#"Promise.resolve({ displayName: "No Uid" })"#;
pub const SIGN_IN_PENDING: &str = "new Promise(() => {})";
pub const SIGN_IN_CANCELLED: &str =
    r#"Promise.reject({ code: "auth/cancelled-popup-request", message: "cancelled" })"#;
pub const SIGN_IN_FAILED: &str =
    r#"Promise.reject({ code: "auth/internal-error", message: "boom" })"#;

/// Install a `window.blueboxAuth` that reports `user` immediately and answers
/// every popup request with the promise expression `sign_in`.
pub fn install_fake_auth(user: Option<&str>, sign_in: &str) {
    let user = user.unwrap_or("null");
    let script = format!(
        r#"
        window.__signInCalls = 0;
        window.__unsubscribeCalls = 0;
        window.blueboxAuth = {{
            onAuthStateChanged(callback) {{
                callback({user});
                return () => {{ window.__unsubscribeCalls += 1; }};
            }},
            signInWithPopup() {{
                window.__signInCalls += 1;
                return {sign_in};
            }},
        }};
        "#
    );
    js_sys::eval(&script).unwrap();
}

pub fn remove_fake_auth() {
    js_sys::eval("delete window.blueboxAuth;").unwrap();
}

pub fn counter(name: &str) -> u32 {
    let window = web_sys::window().unwrap();
    js_sys::Reflect::get(&window, &name.into())
        .unwrap()
        .as_f64()
        .unwrap_or_default() as u32
}
