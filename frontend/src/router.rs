use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum BaseRoute {
    #[at("/")]
    Home,
    #[at("/my-banks")]
    MyBanks,
    #[at("/my-banks/:id")]
    Bank { id: String },
    #[at("/transaction-history")]
    TransactionHistory,
    #[at("/payment-transfer")]
    PaymentTransfer,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Navigates in-app when the path is one of ours, otherwise hands the path to
/// the browser.
pub struct AppRouter {
    navigator: Option<Navigator>,
}

impl AppRouter {
    pub fn new(navigator: Option<Navigator>) -> Self {
        Self { navigator }
    }
}

impl common::Router for AppRouter {
    fn navigate(&self, route: &str) {
        match (BaseRoute::recognize(route), &self.navigator) {
            (Some(target), Some(nav)) if target != BaseRoute::NotFound => {
                nav.push(&target);
            }
            _ => {
                gloo::console::warn!(format!("`{route}` is not an app route, leaving the app"));
                if let Some(w) = web_sys::window() {
                    if let Err(e) = w.location().set_href(route) {
                        gloo::console::error!(format!("Error redirecting: {e:?}"));
                    }
                }
            }
        }
    }
}
