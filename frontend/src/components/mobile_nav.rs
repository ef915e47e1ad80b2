use std::rc::Rc;

use common::structs::User;
use common::{active_entry, project_links, NavConfig, Router};
use yew::prelude::*;
use yew_router::prelude::{use_location, use_navigator};

use crate::components::{
    NavLinkItem, Sheet, SheetClose, SheetContent, SheetDescription, SheetHeader, SheetTitle,
    SheetTrigger,
};
use crate::router::AppRouter;

#[function_component]
pub fn MobileNav(props: &Props) -> Html {
    let path = use_location()
        .map(|l| l.path().to_owned())
        .unwrap_or_default();

    if *yew_hooks::use_local_storage::<bool>("verbose".to_owned()) == Some(true) {
        gloo::console::log!(format!("Refreshing MobileNav at `{path}`"))
    }

    let navigator = use_navigator();

    let links = project_links(&path, &props.config.links);
    let description = match active_entry(&path, &props.config.links) {
        Some(entry) => format!("Site navigation, currently on {}", entry.label),
        None => "Site navigation".to_owned(),
    };
    let brand = &props.config.brand;

    let on_home = {
        let home = brand.home.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            AppRouter::new(navigator.clone()).navigate(&home);
        })
    };

    html! {
        <section class="w-full max-w-[264px]">
            <Sheet>
                <SheetTrigger>
                    <img src={props.config.trigger_icon.clone()} width="30" height="30" alt="menu" class="cursor-pointer" />
                </SheetTrigger>
                <SheetContent side={props.config.side} class="border-none bg-white">
                    <SheetHeader>
                        <SheetTitle>
                            <SheetClose>
                                <a href={brand.home.clone()} class="cursor-pointer flex items-center gap-1 px-4" onclick={on_home}>
                                    <img src={brand.logo.clone()} width="34" height="34" alt={format!("{} logo", brand.name)} />
                                    <span class="text-26 font-ibm-plex-serif font-bold text-black-1">{brand.name.clone()}</span>
                                </a>
                            </SheetClose>
                        </SheetTitle>
                        <SheetDescription>{description}</SheetDescription>
                    </SheetHeader>
                    <div class="mobilenav-sheet">
                        <nav class="flex h-full flex-col gap-6 pt-16 text-white">
                            {
                                // routes may repeat in bad config, so the position is part of the key
                                for links.into_iter().enumerate().map(|(i, link)| html! {
                                    <NavLinkItem key={format!("{i}:{}", link.route)} link={link.clone()} />
                                })
                            }
                            <UserArea user={props.user.clone()} />
                        </nav>
                        <div class="mobilenav-footer" />
                    </div>
                </SheetContent>
            </Sheet>
        </section>
    }
}

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub config: Rc<NavConfig>,
    #[prop_or_default]
    pub user: User,
}

// placeholder until the menu shows account details
#[function_component]
fn UserArea(props: &UserAreaProps) -> Html {
    html! {
        <div class="mobilenav-user" data-guest={props.user.is_guest().to_string()} />
    }
}

#[derive(Clone, Properties, PartialEq)]
struct UserAreaProps {
    user: User,
}
