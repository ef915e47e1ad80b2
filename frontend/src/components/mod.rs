mod context_error;
mod mobile_nav;
mod nav_link;
mod sheet;

pub use context_error::ContextError;
pub use mobile_nav::MobileNav;
pub use nav_link::NavLinkItem;
pub use sheet::{
    Sheet, SheetClose, SheetContent, SheetDescription, SheetHandle, SheetHeader, SheetTitle,
    SheetTrigger,
};
