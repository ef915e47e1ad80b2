mod not_found;
mod page;

pub use not_found::NotFound;
pub use page::Page;
