use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or(false)]
    pub small: bool,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    let class = if props.small {
        "spinner spinner-small"
    } else {
        "spinner"
    };
    html! { <div {class} role="status" aria-label="Loading"></div> }
}
