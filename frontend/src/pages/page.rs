use yew::prelude::*;

#[function_component]
pub fn Page(props: &Props) -> Html {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            document.set_title(&format!("{}{}", crate::PREFIX, props.title));
        }
    }

    html! {
        <main class="page">
            <h1 class="page-title">{props.title.clone()}</h1>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p class="page-subtitle">{subtitle.clone()}</p> }
                } else {
                    html! {}
                }
            }
        </main>
    }
}

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}
