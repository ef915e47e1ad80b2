use common::structs::PanelSide;
use common::PanelController;
use yew::html::ChildrenProps;
use yew::prelude::*;

use crate::components::ContextError;

/// Shared open/close state of the nearest enclosing `<Sheet>`.
#[derive(Clone, PartialEq, Debug)]
pub struct SheetHandle {
    pub is_open: bool,
    set_open: Callback<bool>,
}

impl PanelController for SheetHandle {
    fn open(&self) {
        self.set_open.emit(true);
    }

    fn close(&self) {
        self.set_open.emit(false);
    }
}

#[function_component]
pub fn Sheet(props: &ChildrenProps) -> Html {
    let open = use_state(|| false);

    let handle = {
        let open = open.clone();
        SheetHandle {
            is_open: *open,
            set_open: Callback::from(move |v: bool| open.set(v)),
        }
    };

    html! {
        <ContextProvider<SheetHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<SheetHandle>>
    }
}

#[function_component]
pub fn SheetTrigger(props: &ChildrenProps) -> Html {
    let sheet = use_context::<SheetHandle>();
    let Some(sheet) = sheet else {
        return html! {
            <ContextError cause={"SheetHandle"} source={"SheetTrigger"} />
        };
    };

    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        sheet.open();
    });

    html! {
        <button type="button" class="sheet-trigger" aria-label="open menu" onclick={onclick}>
            { for props.children.iter() }
        </button>
    }
}

fn side_class(side: PanelSide) -> &'static str {
    match side {
        PanelSide::Left => "sheet-left",
        PanelSide::Right => "sheet-right",
        PanelSide::Top => "sheet-top",
        PanelSide::Bottom => "sheet-bottom",
    }
}

#[derive(Clone, Properties, PartialEq)]
pub struct SheetContentProps {
    #[prop_or_default]
    pub side: PanelSide,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component]
pub fn SheetContent(props: &SheetContentProps) -> Html {
    let sheet = use_context::<SheetHandle>();
    let Some(sheet) = sheet else {
        return html! {
            <ContextError cause={"SheetHandle"} source={"SheetContent"} />
        };
    };

    if !sheet.is_open {
        return html! {};
    }

    let on_dismiss = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        sheet.close();
    });

    html! {
        <>
            <div class="sheet-overlay" onclick={on_dismiss.clone()} />
            <div class={classes!("sheet-content", side_class(props.side), props.class.clone())} role="dialog" aria-modal="true">
                <button type="button" class="sheet-close-button" aria-label="close menu" onclick={on_dismiss}>{"✕"}</button>
                { for props.children.iter() }
            </div>
        </>
    }
}

/// Closes the enclosing sheet when anything inside it is clicked. The click
/// still reaches the children, so links keep navigating.
#[function_component]
pub fn SheetClose(props: &ChildrenProps) -> Html {
    let sheet = use_context::<SheetHandle>();

    let onclick = Callback::from(move |_: MouseEvent| {
        sheet.close();
    });

    html! {
        <span class="sheet-close" onclick={onclick}>
            { for props.children.iter() }
        </span>
    }
}

#[function_component]
pub fn SheetHeader(props: &ChildrenProps) -> Html {
    html! {
        <div class="sheet-header">
            { for props.children.iter() }
        </div>
    }
}

#[function_component]
pub fn SheetTitle(props: &ChildrenProps) -> Html {
    html! {
        <h2 class="sheet-title">
            { for props.children.iter() }
        </h2>
    }
}

#[function_component]
pub fn SheetDescription(props: &ChildrenProps) -> Html {
    html! {
        <p class="sheet-description">
            { for props.children.iter() }
        </p>
    }
}
