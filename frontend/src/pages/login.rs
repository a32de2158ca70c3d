use shared::{AuthGate, UiState};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{GoogleSignInButton, Spinner};
use crate::config::gate_config;
use crate::firebase::FirebaseAuth;
use crate::navigation::RouteNavigator;

type LoginGate = AuthGate<FirebaseAuth, RouteNavigator>;

#[function_component(Login)]
pub fn login() -> Html {
    let router = use_navigator();
    let ui = use_state(UiState::default);
    let gate = use_mut_ref(|| None::<LoginGate>);

    {
        let ui = ui.clone();
        let gate = gate.clone();
        use_effect_with((), move |_| {
            let instance = AuthGate::new(FirebaseAuth, RouteNavigator::new(router), gate_config());
            instance.on_change(move |state: &UiState| ui.set(state.clone()));
            instance.activate();
            *gate.borrow_mut() = Some(instance);

            move || {
                let instance = gate.borrow_mut().take();
                if let Some(instance) = instance {
                    instance.deactivate();
                }
            }
        });
    }

    let on_sign_in = {
        let gate = gate.clone();
        Callback::from(move |_: MouseEvent| {
            let attempt = gate.borrow().as_ref().map(LoginGate::request_sign_in);
            if let Some(attempt) = attempt {
                wasm_bindgen_futures::spawn_local(attempt);
            }
        })
    };

    if ui.initializing() || ui.redirecting() {
        return html! {
            <div class="login-loading">
                <Spinner />
            </div>
        };
    }

    html! {
        <div class="login-container">
            <div class="login-card">
                <div class="login-logo">
                    <img src="/logo.svg" alt="Bluebox Logo" />
                </div>

                <h1 class="login-title">{ "Welcome to Bluebox" }</h1>
                <p class="login-subtitle">
                    { "The next generation of AI reasoning and searching." }
                </p>

                <GoogleSignInButton onclick={on_sign_in} signing_in={ui.signing_in()} />

                if let Some(error) = ui.error() {
                    <p class="login-error">{ error }</p>
                }

                <div class="login-footer">
                    <p class="login-secured">{ "Secured by Firebase" }</p>
                    <div class="login-links">
                        <span>{ "Privacy" }</span>
                        <span>{ "Terms" }</span>
                        <span>{ "Help" }</span>
                    </div>
                </div>
            </div>

            <p class="login-disclaimer">
                { "Bluebox can make mistakes. Please check important information." }
            </p>
        </div>
    }
}
