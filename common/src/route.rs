use crate::structs::{LinkVariant, NavLink, NavigationEntry};

/// Whether `current_path` is at or below `entry_route`.
///
/// A match is either the exact route or the route followed by a `/`. The root
/// route `/` therefore only matches `/` itself, and an empty route matches
/// nothing.
pub fn is_active(current_path: &str, entry_route: &str) -> bool {
    if entry_route.is_empty() {
        return false;
    }
    match current_path.strip_prefix(entry_route) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn variant_for(current_path: &str, entry: &NavigationEntry) -> LinkVariant {
    LinkVariant::from_flag(is_active(current_path, &entry.route))
}

/// Projects the configured entries onto the current location, one link per
/// entry in the order given.
pub fn project_links(current_path: &str, entries: &[NavigationEntry]) -> Vec<NavLink> {
    entries
        .iter()
        .map(|entry| {
            let variant = variant_for(current_path, entry);
            log::trace!("{} -> {} is {:?}", current_path, entry.route, variant);
            NavLink {
                route: entry.route.clone(),
                label: entry.label.clone(),
                icon: entry.icon.clone(),
                variant,
            }
        })
        .collect()
}

/// The first entry active at `current_path`, if any.
pub fn active_entry<'a>(
    current_path: &str,
    entries: &'a [NavigationEntry],
) -> Option<&'a NavigationEntry> {
    entries.iter().find(|e| is_active(current_path, &e.route))
}
