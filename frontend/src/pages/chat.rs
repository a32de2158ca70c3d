use yew::prelude::*;

/// Landing page for signed-in users.
#[function_component(Chat)]
pub fn chat() -> Html {
    html! {
        <div class="chat-container">
            <h1 class="chat-title">{ "Bluebox" }</h1>
        </div>
    }
}
