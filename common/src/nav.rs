use crate::structs::NavLink;

/// Something that can show and dismiss the menu surface.
pub trait PanelController {
    fn open(&self);
    fn close(&self);
}

impl<P: PanelController> PanelController for Option<P> {
    fn open(&self) {
        if let Some(panel) = self {
            panel.open();
        }
    }

    fn close(&self) {
        if let Some(panel) = self {
            panel.close();
        }
    }
}

/// Performs navigation to an application path.
pub trait Router {
    fn navigate(&self, route: &str);
}

/// Follows a link from inside the panel: dismisses the panel once, then
/// navigates to the link's route.
pub fn activate<P, R>(link: &NavLink, panel: &P, router: &R)
where
    P: PanelController + ?Sized,
    R: Router + ?Sized,
{
    log::debug!("activating {} ({:?})", link.route, link.variant);
    panel.close();
    router.navigate(&link.route);
}

/// Whether a click should be handled in place. Clicks with a modifier held or
/// from a button other than the primary one belong to the browser (new tab,
/// new window, download).
pub fn follows_in_place(button: i16, ctrl: bool, meta: bool, shift: bool, alt: bool) -> bool {
    button == 0 && !(ctrl || meta || shift || alt)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::route::project_links;
    use crate::structs::NavigationEntry;

    #[derive(Default)]
    struct CountingPanel {
        opened: Cell<usize>,
        closed: Cell<usize>,
    }

    impl PanelController for CountingPanel {
        fn open(&self) {
            self.opened.set(self.opened.get() + 1);
        }
        fn close(&self) {
            self.closed.set(self.closed.get() + 1);
        }
    }

    #[derive(Default)]
    struct RecordingRouter {
        visited: RefCell<Vec<String>>,
    }

    impl Router for RecordingRouter {
        fn navigate(&self, route: &str) {
            self.visited.borrow_mut().push(route.to_owned());
        }
    }

    fn links() -> Vec<NavLink> {
        let entries = ["/", "/my-banks", "/transaction-history"]
            .iter()
            .map(|r| NavigationEntry {
                route: r.to_string(),
                label: r.trim_start_matches('/').to_string(),
                icon: String::new(),
            })
            .collect::<Vec<_>>();
        project_links("/my-banks", &entries)
    }

    #[test]
    fn activation_closes_panel_once() {
        for link in links() {
            let panel = CountingPanel::default();
            let router = RecordingRouter::default();
            activate(&link, &panel, &router);
            assert_eq!(panel.closed.get(), 1);
            assert_eq!(panel.opened.get(), 0);
            assert_eq!(*router.visited.borrow(), vec![link.route.clone()]);
        }
    }

    #[test]
    fn activating_the_active_link_still_closes() {
        let links = links();
        let active = links.iter().find(|l| l.variant.is_active()).unwrap();
        let panel = CountingPanel::default();
        let router = RecordingRouter::default();
        activate(active, &panel, &router);
        assert_eq!(panel.closed.get(), 1);
        assert_eq!(*router.visited.borrow(), vec!["/my-banks".to_owned()]);
    }

    #[test]
    fn activation_without_panel_still_navigates() {
        let router = RecordingRouter::default();
        let link = links().remove(0);
        activate(&link, &None::<CountingPanel>, &router);
        assert_eq!(*router.visited.borrow(), vec!["/".to_owned()]);
    }

    #[test]
    fn only_plain_primary_clicks_follow_in_place() {
        assert!(follows_in_place(0, false, false, false, false));
        assert!(!follows_in_place(0, true, false, false, false));
        assert!(!follows_in_place(0, false, true, false, false));
        assert!(!follows_in_place(0, false, false, true, false));
        assert!(!follows_in_place(0, false, false, false, true));
        assert!(!follows_in_place(1, false, false, false, false));
    }

    #[test]
    fn each_activation_is_independent() {
        let panel = CountingPanel::default();
        let router = RecordingRouter::default();
        let links = links();
        for link in &links {
            activate(link, &panel, &router);
        }
        assert_eq!(panel.closed.get(), links.len());
        assert_eq!(router.visited.borrow().len(), links.len());
    }
}
