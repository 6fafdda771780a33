//! Mobile navigation toggle.

/// Open/closed flag shared by the toggle control and the menu panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Invert the state. Returns the new value of `open`.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Force closed, whatever the current state.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Wire the toggle and the in-menu links. A page without the toggle or the
/// panel gets nothing.
#[cfg(target_arch = "wasm32")]
pub fn install(
    document: &web_sys::Document,
    config: &crate::config::SiteConfig,
) -> Result<(), crate::error::SiteError> {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::dom;

    let sel = &config.selectors;
    let (Some(toggle), Some(panel)) = (
        dom::query(document, &sel.menu_toggle),
        dom::query(document, &sel.menu_panel),
    ) else {
        dom::debug(config, "menu: toggle or panel absent, skipping");
        return Ok(());
    };

    let state = Rc::new(Cell::new(MenuState::default()));
    let active = config.classes.active.clone();

    // Class list mirrors `state`; both elements always carry the same flag.
    let apply = {
        let toggle = toggle.clone();
        let panel = panel.clone();
        move |open: bool| {
            for el in [&toggle, &panel] {
                let _ = el.class_list().toggle_with_force(&active, open);
            }
        }
    };

    dom::listen(&toggle, "click", {
        let state = state.clone();
        let apply = apply.clone();
        move |_| {
            let mut s = state.get();
            let open = s.toggle();
            state.set(s);
            apply(open);
        }
    })?;

    for link in dom::query_all(document, &sel.nav_link) {
        dom::listen(&link, "click", {
            let state = state.clone();
            let apply = apply.clone();
            move |_| {
                let mut s = state.get();
                s.close();
                state.set(s);
                apply(false);
            }
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().open);
    }

    #[test]
    fn toggle_twice_returns_to_closed() {
        let mut m = MenuState::default();
        assert!(m.toggle());
        assert!(!m.toggle());
        assert!(!m.open);
    }

    #[test]
    fn link_click_forces_closed_when_open() {
        let mut m = MenuState::default();
        m.toggle();
        m.close();
        assert!(!m.open);
    }

    #[test]
    fn link_click_keeps_closed_menu_closed() {
        let mut m = MenuState::default();
        m.close();
        assert!(!m.open);
        assert!(m.toggle());
    }
}
