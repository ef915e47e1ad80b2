use std::rc::Rc;

use common::structs::User;
use common::NavConfig;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
mod router;

use components::MobileNav;
use router::BaseRoute;

pub const PREFIX: &str = "Horizon | ";

const NAV_CONFIG: &str = include_str!("../nav.json");

fn main() {
    yew::Renderer::<Root>::new().render();
}

#[function_component]
fn Root() -> Html {
    // the link list is fixed for the lifetime of the app, parse it once
    let config = use_memo(
        |_| {
            NavConfig::load(NAV_CONFIG).map(|(config, warnings)| {
                for warning in warnings {
                    gloo::console::warn!(format!("nav.json: {warning}"));
                }
                Rc::new(config)
            })
        },
        (),
    );
    let user = yew_hooks::use_local_storage::<User>("user".to_owned());

    match &*config {
        Ok(config) => html! {
            <BrowserRouter>
                <header class="root-layout">
                    <MobileNav config={config.clone()} user={(*user).clone().unwrap_or_default()} />
                </header>
                <Switch<BaseRoute> render={switch} /> // <- must be child of <BrowserRouter>
            </BrowserRouter>
        },
        Err(e) => {
            gloo::console::error!(format!("{e:?}"));
            html! {
                <div class="config-error">
                    <h1>{"Error"}</h1>
                    <p style="color:red;">{format!("{e:#}")}</p>
                </div>
            }
        }
    }
}

fn switch(routes: BaseRoute) -> Html {
    match routes {
        BaseRoute::Home => html! { <pages::Page title="Home" /> },
        BaseRoute::MyBanks => html! { <pages::Page title="My Banks" /> },
        BaseRoute::Bank { id } => html! {
            <pages::Page title="My Banks" subtitle={format!("Account {id}")} />
        },
        BaseRoute::TransactionHistory => html! { <pages::Page title="Transaction History" /> },
        BaseRoute::PaymentTransfer => html! { <pages::Page title="Transfer Funds" /> },
        BaseRoute::NotFound => html! { <pages::NotFound /> },
    }
}
