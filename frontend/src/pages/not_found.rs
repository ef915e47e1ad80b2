use yew::prelude::*;

#[function_component]
pub fn NotFound() -> Html {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            document.set_title(&format!("{}Not Found", crate::PREFIX));
        }
    }

    html! {
        <main class="page">
            <h2 class="error">{"Not Found"}</h2>
            <p>{"The page you requested could not be found."}</p>
        </main>
    }
}
