//! Section geometry and the probes built on it.
//!
//! [`SectionLayout`] is the one capability the page effects need from a
//! rendering surface. [`SnapshotLayout`] answers from plain data (server
//! rendering, tests); `DomLayout` reads the live document after hydration.

use crate::config::{PageConfig, RevealMargin};
use crate::state::Section;

/// Document-relative vertical extent of a section's element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBox {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    /// Half-open: `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

pub trait SectionLayout {
    fn scroll_y(&self) -> f64;
    fn viewport_height(&self) -> f64;
    /// `None` when the section's element is not in the document.
    fn section_box(&self, section: Section) -> Option<SectionBox>;
    fn scroll_to(&mut self, top: f64);
}

/// First box, in iteration order, whose extent contains `probe`.
pub fn active_section_at<I>(probe: f64, boxes: I) -> Option<Section>
where
    I: IntoIterator<Item = SectionBox>,
{
    boxes
        .into_iter()
        .find(|b| b.contains(probe))
        .map(|b| b.section)
}

/// Scroll-sync: which section holds `scrollY + probe offset`, in page order.
pub fn probe_active<L: SectionLayout + ?Sized>(layout: &L, config: &PageConfig) -> Option<Section> {
    let probe = layout.scroll_y() + config.scroll_probe_offset;
    active_section_at(
        probe,
        Section::ALL.into_iter().filter_map(|s| layout.section_box(s)),
    )
}

/// Scroll offset that puts `section` just below the fixed navbar.
pub fn nav_target<L: SectionLayout + ?Sized>(
    layout: &L,
    section: Section,
    config: &PageConfig,
) -> Option<f64> {
    layout
        .section_box(section)
        .map(|b| b.top - config.navbar_height)
}

/// Whether a box overlaps the viewport once `margin` is cut from both ends,
/// matching an IntersectionObserver with threshold 0.
pub fn intersects(b: &SectionBox, scroll_y: f64, viewport_height: f64, margin: RevealMargin) -> bool {
    let zone_top = viewport_height * margin.top;
    let zone_bottom = viewport_height * (1.0 - margin.bottom);
    if zone_bottom <= zone_top {
        return false;
    }
    let top = b.top - scroll_y;
    let bottom = top + b.height;
    top < zone_bottom && bottom > zone_top
}

/// Poll-based counterpart of the native observer. The first poll reports
/// every rendered section; later polls report only sections that entered or
/// left the reveal zone since the previous one.
#[derive(Debug, Clone, Default)]
pub struct IntersectionWatch {
    last: [Option<bool>; Section::ALL.len()],
}

impl IntersectionWatch {
    pub fn poll<L: SectionLayout + ?Sized>(
        &mut self,
        layout: &L,
        margin: RevealMargin,
    ) -> Vec<(Section, bool)> {
        let scroll_y = layout.scroll_y();
        let viewport_height = layout.viewport_height();
        Section::ALL
            .into_iter()
            .filter_map(|s| layout.section_box(s))
            .filter_map(|b| {
                let now = intersects(&b, scroll_y, viewport_height, margin);
                let seen = &mut self.last[b.section.index()];
                if *seen == Some(now) {
                    return None;
                }
                *seen = Some(now);
                Some((b.section, now))
            })
            .collect()
    }
}

/// Fixed geometry with an adjustable scroll position. The default is an empty
/// page, which is what the server sees.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SnapshotLayout {
    boxes: Vec<SectionBox>,
    viewport_height: f64,
    scroll_y: f64,
}

impl SnapshotLayout {
    pub fn new(boxes: Vec<SectionBox>, viewport_height: f64) -> Self {
        Self {
            boxes,
            viewport_height,
            scroll_y: 0.0,
        }
    }

    pub fn set_scroll_y(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }
}

impl SectionLayout for SnapshotLayout {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn section_box(&self, section: Section) -> Option<SectionBox> {
        self.boxes.iter().find(|b| b.section == section).copied()
    }

    fn scroll_to(&mut self, top: f64) {
        self.scroll_y = top.max(0.0);
    }
}

#[cfg(feature = "hydrate")]
pub use dom::DomLayout;

#[cfg(feature = "hydrate")]
mod dom {
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

    use super::{SectionBox, SectionLayout};
    use crate::state::Section;

    /// Reads section geometry from the live document.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct DomLayout;

    impl SectionLayout for DomLayout {
        fn scroll_y(&self) -> f64 {
            web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or_default()
        }

        fn viewport_height(&self) -> f64 {
            web_sys::window()
                .and_then(|w| w.inner_height().ok())
                .and_then(|h| h.as_f64())
                .unwrap_or_default()
        }

        fn section_box(&self, section: Section) -> Option<SectionBox> {
            let el = web_sys::window()?
                .document()?
                .get_element_by_id(section.id())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionBox {
                section,
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
        }

        fn scroll_to(&mut self, top: f64) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let opts = ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
}
