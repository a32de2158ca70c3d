//! Bindings to the `window.blueboxAuth` bridge defined in `index.html`.
//!
//! The bridge wraps the hosted Firebase Auth SDK and hands users over as
//! plain `{ uid, isAnonymous, displayName, email }` objects (or `null`).

use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use js_sys::{Reflect, JSON};
use shared::gate::{SessionSource, SignInProvider, Subscription};
use shared::{Identity, ProviderError, SessionSnapshot};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

const BRIDGE_KEY: &str = "blueboxAuth";

pub const BRIDGE_UNAVAILABLE: &str = "bridge/unavailable";
pub const BRIDGE_INVALID_USER: &str = "bridge/invalid-user";
pub const BRIDGE_UNKNOWN: &str = "bridge/unknown";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = blueboxAuth, js_name = onAuthStateChanged)]
    fn on_auth_state_changed(
        callback: &Closure<dyn FnMut(JsValue)>,
    ) -> Result<js_sys::Function, JsValue>;

    #[wasm_bindgen(catch, js_namespace = blueboxAuth, js_name = signInWithPopup)]
    fn sign_in_with_popup() -> Result<js_sys::Promise, JsValue>;
}

/// Google popup sign-in through Firebase Auth.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirebaseAuth;

fn bridge_available() -> bool {
    web_sys::window()
        .and_then(|window| Reflect::get(&window, &JsValue::from_str(BRIDGE_KEY)).ok())
        .is_some_and(|bridge| bridge.is_object())
}

fn snapshot_from_js(user: &JsValue) -> Result<SessionSnapshot, ProviderError> {
    if user.is_null() || user.is_undefined() {
        return Ok(SessionSnapshot::Absent);
    }
    let json = JSON::stringify(user)
        .ok()
        .and_then(|json| json.as_string())
        .ok_or_else(|| ProviderError::new(BRIDGE_INVALID_USER, "User is not serializable"))?;
    SessionSnapshot::from_json(&json)
        .map_err(|e| ProviderError::new(BRIDGE_INVALID_USER, e.to_string()))
}

fn string_field(value: &JsValue, field: &str) -> Option<String> {
    Reflect::get(value, &JsValue::from_str(field))
        .ok()
        .and_then(|field| field.as_string())
}

fn provider_error_from_js(err: &JsValue) -> ProviderError {
    let code = string_field(err, "code").unwrap_or_else(|| BRIDGE_UNKNOWN.to_string());
    let message = string_field(err, "message")
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    ProviderError::new(code, message)
}

impl SessionSource for FirebaseAuth {
    fn subscribe(&self, on_change: Box<dyn Fn(SessionSnapshot)>) -> Subscription {
        let on_change: Rc<dyn Fn(SessionSnapshot)> = Rc::from(on_change);
        if !bridge_available() {
            log::error!("window.{BRIDGE_KEY} is missing, treating session as signed out");
            on_change(SessionSnapshot::Absent);
            return Subscription::detached();
        }

        let callback = {
            let on_change = Rc::clone(&on_change);
            Closure::<dyn FnMut(JsValue)>::new(move |user: JsValue| match snapshot_from_js(&user) {
                Ok(snapshot) => on_change(snapshot),
                Err(err) => {
                    log::error!("Ignoring malformed auth user: {err}");
                    on_change(SessionSnapshot::Absent);
                }
            })
        };

        match on_auth_state_changed(&callback) {
            Ok(unsubscribe) => Subscription::new(move || {
                if let Err(e) = unsubscribe.call0(&JsValue::NULL) {
                    log::warn!("Failed to unsubscribe from auth changes: {e:?}");
                }
                drop(callback);
            }),
            Err(e) => {
                log::error!("onAuthStateChanged failed: {e:?}");
                on_change(SessionSnapshot::Absent);
                Subscription::detached()
            }
        }
    }
}

impl SignInProvider for FirebaseAuth {
    fn sign_in(&self) -> LocalBoxFuture<'static, Result<Identity, ProviderError>> {
        async move {
            if !bridge_available() {
                return Err(ProviderError::new(
                    BRIDGE_UNAVAILABLE,
                    "Sign-in is unavailable right now. Please reload the page.",
                ));
            }
            let promise = sign_in_with_popup().map_err(|e| provider_error_from_js(&e))?;
            let user = JsFuture::from(promise)
                .await
                .map_err(|e| provider_error_from_js(&e))?;
            snapshot_from_js(&user)?.into_identity().ok_or_else(|| {
                ProviderError::new(BRIDGE_INVALID_USER, "Sign-in finished without a user")
            })
        }
        .boxed_local()
    }
}
