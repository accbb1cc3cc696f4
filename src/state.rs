//! Page UI state and the transitions that drive it.
//!
//! Every browser event source (scroll, pointer, intersection, timer, nav click)
//! is folded into a [`UiEvent`] and applied with [`UiState::reduce`], which
//! returns a fresh snapshot. Components hold the snapshot in a signal and never
//! mutate fields directly.

use std::fmt;
use std::time::Duration;

use crate::config::PageConfig;
use crate::layout::{self, IntersectionWatch, SectionLayout};

/// A navigable block of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Services,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id of the section in the rendered markup.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Services => "services",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Navbar label: the id with its first letter upper-cased.
    pub fn label(self) -> String {
        let id = self.id();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One-way reveal flags, one per section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Revealed([bool; Section::ALL.len()]);

impl Revealed {
    pub fn is_revealed(&self, section: Section) -> bool {
        self.0[section.index()]
    }

    #[must_use]
    pub fn with(mut self, section: Section) -> Self {
        self.0[section.index()] = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    /// CSS transform that centres a `size`-px square on the pointer.
    pub fn follower_transform(&self, size: f64) -> String {
        let half = size / 2.0;
        format!("translate({}px, {}px)", self.x - half, self.y - half)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// Scroll-sync probe result; `None` when no section contains the probe.
    Scrolled(Option<Section>),
    PointerMoved(Pointer),
    Intersected {
        section: Section,
        is_intersecting: bool,
    },
    SplashElapsed,
    NavClicked(Section),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiState {
    pub active: Section,
    pub pointer: Pointer,
    pub revealed: Revealed,
    pub loading: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self::initial()
    }
}

impl UiState {
    /// State on first paint. The hero is never animated, and about, projects
    /// and contact start revealed so no content is hidden before the observer
    /// is armed.
    pub fn initial() -> Self {
        Self {
            active: Section::Home,
            pointer: Pointer::default(),
            revealed: Revealed::default()
                .with(Section::Home)
                .with(Section::About)
                .with(Section::Projects)
                .with(Section::Contact),
            loading: true,
        }
    }

    #[must_use]
    pub fn reduce(&self, event: UiEvent) -> Self {
        let mut next = *self;
        match event {
            UiEvent::Scrolled(Some(section)) | UiEvent::NavClicked(section) => {
                next.active = section;
            }
            UiEvent::Scrolled(None) => {}
            UiEvent::PointerMoved(pointer) => next.pointer = pointer,
            UiEvent::Intersected {
                section,
                is_intersecting,
            } => {
                if is_intersecting {
                    next.revealed = next.revealed.with(section);
                    next.active = section;
                }
            }
            UiEvent::SplashElapsed => next.loading = false,
        }
        next
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.is_revealed(section)
    }
}

/// Drives [`UiState`] against a layout and a manual clock, the same way the
/// mounted component does with real timers and listeners.
pub struct Session<L> {
    config: PageConfig,
    layout: L,
    state: UiState,
    elapsed: Duration,
    /// `None` until the observer start delay has passed.
    watch: Option<IntersectionWatch>,
}

impl<L: SectionLayout> Session<L> {
    /// Mounts the page: scroll-sync runs once immediately.
    pub fn mount(config: PageConfig, layout: L) -> Self {
        let mut session = Self {
            config,
            layout,
            state: UiState::initial(),
            elapsed: Duration::ZERO,
            watch: None,
        };
        session.sync_scroll();
        session
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    pub fn dispatch(&mut self, event: UiEvent) {
        self.state = self.state.reduce(event);
    }

    /// Moves the clock forward, firing the observer and splash timers once due.
    pub fn advance(&mut self, by: Duration) {
        self.elapsed += by;
        if self.watch.is_none() && self.elapsed >= self.config.observer_start_delay() {
            self.watch = Some(IntersectionWatch::default());
            self.observe();
        }
        if self.state.loading && self.elapsed >= self.config.splash_delay() {
            self.dispatch(UiEvent::SplashElapsed);
        }
    }

    /// Call after the layout's scroll position changed.
    pub fn scrolled(&mut self) {
        self.sync_scroll();
        self.observe();
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.dispatch(UiEvent::PointerMoved(Pointer { x, y }));
    }

    /// Scrolls to `section` and marks it active. Missing sections are ignored.
    pub fn click_nav(&mut self, section: Section) {
        let Some(top) = layout::nav_target(&self.layout, section, &self.config) else {
            return;
        };
        self.layout.scroll_to(top);
        self.dispatch(UiEvent::NavClicked(section));
    }

    fn sync_scroll(&mut self) {
        let hit = layout::probe_active(&self.layout, &self.config);
        self.dispatch(UiEvent::Scrolled(hit));
    }

    fn observe(&mut self) {
        let Some(watch) = self.watch.as_mut() else {
            return;
        };
        for (section, is_intersecting) in watch.poll(&self.layout, self.config.reveal_margin) {
            self.dispatch(UiEvent::Intersected {
                section,
                is_intersecting,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{SectionBox, SnapshotLayout};

    // 1000px tall viewport, each section 1000px tall, stacked from 0
    fn stacked_layout() -> SnapshotLayout {
        let boxes = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| SectionBox {
                section: *s,
                top: i as f64 * 1000.0,
                height: 1000.0,
            })
            .collect::<Vec<_>>();
        SnapshotLayout::new(boxes, 1000.0)
    }

    #[test]
    fn test_section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("skills-section"), None);
        assert_eq!(Section::from_id(""), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Section::Home.label(), "Home");
        assert_eq!(Section::Services.label(), "Services");
    }

    #[test]
    fn test_initial_state() {
        let state = UiState::initial();
        assert_eq!(state.active, Section::Home);
        assert!(state.loading);
        assert!(state.is_revealed(Section::Home));
        assert!(state.is_revealed(Section::About));
        assert!(!state.is_revealed(Section::Services));
        assert!(state.is_revealed(Section::Projects));
        assert!(state.is_revealed(Section::Contact));
    }

    #[test]
    fn test_scroll_miss_keeps_active() {
        let state = UiState::initial().reduce(UiEvent::NavClicked(Section::Projects));
        let state = state.reduce(UiEvent::Scrolled(None));
        assert_eq!(state.active, Section::Projects);
    }

    #[test]
    fn test_reveal_is_one_way() {
        let events = [
            UiEvent::Intersected {
                section: Section::Services,
                is_intersecting: true,
            },
            UiEvent::Intersected {
                section: Section::Services,
                is_intersecting: false,
            },
            UiEvent::Scrolled(Some(Section::Home)),
            UiEvent::NavClicked(Section::Contact),
            UiEvent::SplashElapsed,
            UiEvent::PointerMoved(Pointer { x: 3.0, y: 4.0 }),
        ];
        let mut state = UiState::initial();
        let mut seen = Revealed::default();
        for event in events {
            state = state.reduce(event);
            for section in Section::ALL {
                if seen.is_revealed(section) {
                    assert!(state.is_revealed(section), "{section} was hidden again");
                }
                if state.is_revealed(section) {
                    seen = seen.with(section);
                }
            }
        }
        assert!(state.is_revealed(Section::Services));
    }

    #[test]
    fn test_non_intersecting_does_not_activate() {
        let state = UiState::initial().reduce(UiEvent::Intersected {
            section: Section::Contact,
            is_intersecting: false,
        });
        assert_eq!(state.active, Section::Home);
    }

    #[test]
    fn test_intersecting_activates() {
        let state = UiState::initial().reduce(UiEvent::Intersected {
            section: Section::Services,
            is_intersecting: true,
        });
        assert_eq!(state.active, Section::Services);
        assert!(state.is_revealed(Section::Services));
    }

    #[test]
    fn test_splash_never_returns() {
        let mut state = UiState::initial().reduce(UiEvent::SplashElapsed);
        assert!(!state.loading);
        for section in Section::ALL {
            state = state
                .reduce(UiEvent::NavClicked(section))
                .reduce(UiEvent::Scrolled(Some(section)))
                .reduce(UiEvent::SplashElapsed);
            assert!(!state.loading);
        }
    }

    #[test]
    fn test_first_paint_with_fixed_clock() {
        let config = PageConfig::default();
        let mut session = Session::mount(config.clone(), stacked_layout());

        assert!(session.state().loading);
        assert_eq!(session.state().active, Section::Home);

        // just before the splash deadline
        session.advance(config.splash_delay() - Duration::from_millis(1));
        assert!(session.state().loading);

        session.advance(Duration::from_millis(1));
        let state = session.state();
        assert!(!state.loading);
        assert_eq!(state.active, Section::Home);
        assert!(state.is_revealed(Section::Home));
    }

    #[test]
    fn test_nav_click_is_immediate() {
        let mut session = Session::mount(PageConfig::default(), stacked_layout());
        session.click_nav(Section::Projects);
        assert_eq!(session.state().active, Section::Projects);
        assert_eq!(session.layout().scroll_y(), 3000.0 - 80.0);

        // scroll-sync catches up to the same answer
        session.scrolled();
        assert_eq!(session.state().active, Section::Projects);
    }

    #[test]
    fn test_nav_click_missing_section_ignored() {
        let layout = SnapshotLayout::new(
            vec![SectionBox {
                section: Section::Home,
                top: 0.0,
                height: 1000.0,
            }],
            1000.0,
        );
        let mut session = Session::mount(PageConfig::default(), layout);
        session.click_nav(Section::Contact);
        assert_eq!(session.state().active, Section::Home);
        assert_eq!(session.layout().scroll_y(), 0.0);
    }

    #[test]
    fn test_observer_waits_for_start_delay() {
        let config = PageConfig::default();
        let mut session = Session::mount(config.clone(), stacked_layout());
        session.layout_mut().set_scroll_y(1000.0);
        session.scrolled();
        // scroll-sync moved on, but services is not observed yet
        assert_eq!(session.state().active, Section::About);
        assert!(!session.state().is_revealed(Section::Services));

        session.layout_mut().set_scroll_y(2000.0);
        session.scrolled();
        assert!(!session.state().is_revealed(Section::Services));

        session.advance(config.observer_start_delay());
        assert!(session.state().is_revealed(Section::Services));

        session.layout_mut().set_scroll_y(0.0);
        session.scrolled();
        assert_eq!(session.state().active, Section::Home);
        assert!(session.state().is_revealed(Section::Services));
    }

    #[test]
    fn test_scroll_sync_wins_while_section_stays_in_zone() {
        let config = PageConfig::default();
        let mut session = Session::mount(config.clone(), stacked_layout());
        session.advance(config.observer_start_delay());
        assert_eq!(session.state().active, Section::Home);

        // about enters the reveal zone and takes over
        session.layout_mut().set_scroll_y(850.0);
        session.scrolled();
        assert_eq!(session.state().active, Section::About);
        assert!(session.state().is_revealed(Section::About));

        // about is still in the zone, but only scroll-sync reports now
        session.layout_mut().set_scroll_y(860.0);
        session.scrolled();
        let expected = layout::probe_active(session.layout(), &config);
        assert_eq!(expected, Some(Section::Home));
        assert_eq!(Some(session.state().active), expected);

        for y in [870.0, 880.0, 899.0] {
            session.layout_mut().set_scroll_y(y);
            session.scrolled();
            assert_eq!(session.state().active, Section::Home, "scroll_y = {y}");
        }
    }

    #[test]
    fn test_follower_centred_on_pointer() {
        let pointer = Pointer { x: 110.0, y: 45.5 };
        assert_eq!(pointer.follower_transform(20.0), "translate(100px, 35.5px)");
        assert_eq!(Pointer::default().follower_transform(20.0), "translate(-10px, -10px)");
    }

    #[test]
    fn test_pointer_recorded() {
        let mut session = Session::mount(PageConfig::default(), stacked_layout());
        session.pointer_moved(120.0, 45.5);
        assert_eq!(session.state().pointer, Pointer { x: 120.0, y: 45.5 });
    }
}
