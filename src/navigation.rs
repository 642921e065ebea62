/// Scroll offset past which the navbar gets a solid background.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// Horizontal line, in viewport pixels, used to decide which section is current.
pub const ACTIVE_LINE: f64 = 150.0;
/// Near the top of the page the hero always counts as current.
pub const HOME_ZONE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const HOME: &str = "home";

pub static NAV_ITEMS: [NavItem; 7] = [
    NavItem {
        id: HOME,
        label: "Home",
        href: "#",
    },
    NavItem {
        id: "about",
        label: "About",
        href: "#about",
    },
    NavItem {
        id: "skills",
        label: "Skills",
        href: "#skills",
    },
    NavItem {
        id: "projects",
        label: "Projects",
        href: "#projects",
    },
    NavItem {
        id: "experience",
        label: "Experience",
        href: "#experience",
    },
    NavItem {
        id: "education",
        label: "Education",
        href: "#education",
    },
    NavItem {
        id: "contact",
        label: "Contact",
        href: "#contact",
    },
];

/// Vertical extent of a section relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBox {
    pub top: f64,
    pub bottom: f64,
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Picks the section to highlight.
///
/// `boxes` yields the measured box for each section id, `None` when the
/// section is not in the document. Returns `None` when nothing crosses the
/// active line, in which case the previous highlight should stay.
pub fn active_section<F>(scroll_y: f64, boxes: F) -> Option<&'static str>
where
    F: Fn(&str) -> Option<SectionBox>,
{
    if scroll_y < HOME_ZONE {
        return Some(HOME);
    }
    NAV_ITEMS
        .iter()
        .filter(|item| item.id != HOME)
        .find(|item| {
            boxes(item.id).is_some_and(|b| b.top <= ACTIVE_LINE && b.bottom >= ACTIVE_LINE)
        })
        .map(|item| item.id)
}
