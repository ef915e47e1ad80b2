use common::structs::NavLink;
use common::PanelController;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::components::SheetHandle;
use crate::router::AppRouter;

#[function_component]
pub fn NavLinkItem(props: &Props) -> Html {
    let sheet = use_context::<SheetHandle>();
    let navigator = use_navigator();

    let onclick = {
        let link = props.link.clone();
        Callback::from(move |e: MouseEvent| {
            let in_place = common::follows_in_place(
                e.button(),
                e.ctrl_key(),
                e.meta_key(),
                e.shift_key(),
                e.alt_key(),
            );
            if in_place {
                e.prevent_default();
                common::activate(&link, &sheet, &AppRouter::new(navigator.clone()));
            } else {
                // the browser opens it elsewhere, only dismiss the menu
                sheet.close();
            }
        })
    };

    let variant = props.link.variant;

    html! {
        <a href={props.link.route.clone()} class={variant.container_class()} aria-current={variant.is_active().then_some("page")} onclick={onclick}>
            <img src={props.link.icon.clone()} alt={props.link.label.clone()} width="20" height="20" class={variant.icon_class()} />
            <p class={variant.label_class()}>
                {props.link.label.clone()}
            </p>
        </a>
    }
}

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub link: NavLink,
}
