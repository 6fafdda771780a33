//! Active navigation link highlighting.

/// Final `/`-separated segment of a path or href (`"a/b.html"` → `"b.html"`).
pub fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Name of the page being shown; the root path maps to `default_document`.
pub fn current_page<'a>(pathname: &'a str, default_document: &'a str) -> &'a str {
    match last_segment(pathname) {
        "" => default_document,
        page => page,
    }
}

/// Whether a link pointing at `href` belongs to `current_page`.
pub fn link_is_active(href: &str, current_page: &str) -> bool {
    last_segment(href) == current_page
}

/// Mark the link for the current page and clear every other one.
#[cfg(target_arch = "wasm32")]
pub fn install(
    document: &web_sys::Document,
    config: &crate::config::SiteConfig,
) -> Result<(), crate::error::SiteError> {
    use crate::dom;

    let pathname = document.location().map(|l| l.pathname()).transpose()?;
    let pathname = pathname.unwrap_or_default();
    let current = current_page(&pathname, &config.default_document);
    let active = &config.classes.active;

    for link in dom::query_all(document, &config.selectors.nav_link) {
        let Some(href) = link.get_attribute("href") else {
            dom::warn("nav: link without href skipped");
            continue;
        };
        link.class_list()
            .toggle_with_force(active, link_is_active(&href, current))?;
    }
    dom::debug(config, &format!("nav: current page `{current}`"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_flags(pathname: &str, hrefs: &[&str]) -> Vec<bool> {
        let current = current_page(pathname, "index.html");
        hrefs.iter().map(|h| link_is_active(h, current)).collect()
    }

    #[test]
    fn root_path_is_default_document() {
        assert_eq!(current_page("/", "index.html"), "index.html");
        assert_eq!(current_page("", "index.html"), "index.html");
        assert_eq!(current_page("/site/", "index.html"), "index.html");
    }

    #[test]
    fn nested_path_uses_last_segment() {
        assert_eq!(current_page("/walk/about.html", "index.html"), "about.html");
    }

    #[test]
    fn exactly_one_link_active() {
        assert_eq!(
            active_flags("/about.html", &["index.html", "about.html"]),
            vec![false, true]
        );
    }

    #[test]
    fn href_directories_are_ignored() {
        assert_eq!(
            active_flags("/planner.html", &["./planner.html", "pages/planner.html", "planner"]),
            vec![true, true, false]
        );
    }

    #[test]
    fn root_highlights_index_link() {
        assert_eq!(
            active_flags("/", &["index.html", "about.html"]),
            vec![true, false]
        );
    }

    #[test]
    fn matching_is_exact() {
        assert!(!link_is_active("About.html", "about.html"));
        assert!(!link_is_active("about.html#team", "about.html"));
    }

    #[test]
    fn rerun_is_idempotent() {
        let hrefs = ["index.html", "about.html", "planner.html"];
        assert_eq!(
            active_flags("/planner.html", &hrefs),
            active_flags("/planner.html", &hrefs)
        );
    }
}
