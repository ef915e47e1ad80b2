use yew::prelude::*;

#[function_component]
pub fn ContextError(props: &Props) -> Html {
    gloo::console::error!(format!(
        "{} rendered without a {} in scope",
        props.source, props.cause
    ));
    html! {
        <div class="context-error">
            <p>{"Context Error for "}<b>{props.cause.clone()}</b>{" in "}<b>{props.source.clone()}</b></p>
        </div>
    }
}

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub cause: AttrValue,
    pub source: AttrValue,
}
