use leptos::{ev, html, prelude::*};
use leptos_meta::{Meta, Title};
use leptos_use::{
    use_intersection_observer_with_options, use_timeout_fn, use_window_scroll,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn, UseTimeoutFnReturn,
};

use crate::config::PageConfig;
use crate::content::PROFILE;
use crate::layout::{self, SectionLayout};
use crate::state::{Pointer, Section, UiEvent, UiState};

use super::cursor::CursorFollower;
use super::header::Header;
use super::resume::{Journey, Skills};
use super::sections::{About, Contact, Footer, Hero, Projects};
use super::splash::Splash;

#[cfg(feature = "hydrate")]
fn live_layout() -> impl SectionLayout {
    layout::DomLayout
}

// nothing is laid out on the server
#[cfg(not(feature = "hydrate"))]
fn live_layout() -> impl SectionLayout {
    layout::SnapshotLayout::default()
}

#[derive(Clone, Copy)]
pub struct SectionRefs([NodeRef<html::Section>; Section::ALL.len()]);

impl SectionRefs {
    fn new() -> Self {
        Self(std::array::from_fn(|_| NodeRef::new()))
    }

    pub fn get(&self, section: Section) -> NodeRef<html::Section> {
        self.0[section.index()]
    }
}

/// Page state shared with every section component through context.
#[derive(Clone, Copy)]
pub struct PageHandle {
    pub state: ReadSignal<UiState>,
    set_state: WriteSignal<UiState>,
    pub config: StoredValue<PageConfig>,
    pub refs: SectionRefs,
}

impl PageHandle {
    pub fn dispatch(self, event: UiEvent) {
        self.set_state.maybe_update(|state| {
            let next = state.reduce(event);
            if next.active != state.active {
                log::debug!("active section {} -> {}", state.active, next.active);
            }
            if state.loading && !next.loading {
                log::debug!("splash finished");
            }
            let changed = next != *state;
            *state = next;
            changed
        });
    }

    /// Smooth-scrolls to `section` and marks it active right away. Does
    /// nothing if the section isn't rendered.
    pub fn navigate(self, section: Section) {
        let mut surface = live_layout();
        let Some(top) = self
            .config
            .with_value(|config| layout::nav_target(&surface, section, config))
        else {
            return;
        };
        surface.scroll_to(top);
        self.dispatch(UiEvent::NavClicked(section));
    }

    pub fn is_active(self, section: Section) -> bool {
        self.state.with(|s| s.active == section)
    }

    pub fn is_revealed(self, section: Section) -> bool {
        self.state.with(|s| s.is_revealed(section))
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = PageConfig::default();
    let (state, set_state) = signal(UiState::initial());
    let page = PageHandle {
        state,
        set_state,
        config: StoredValue::new(config.clone()),
        refs: SectionRefs::new(),
    };
    provide_context(page);

    // scroll-sync; the first run doubles as the on-mount check
    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        scroll_y.track();
        let hit = page
            .config
            .with_value(|config| layout::probe_active(&live_layout(), config));
        page.dispatch(UiEvent::Scrolled(hit));
    });

    let pointer_listener = window_event_listener(ev::mousemove, move |ev| {
        page.dispatch(UiEvent::PointerMoved(Pointer {
            x: f64::from(ev.client_x()),
            y: f64::from(ev.client_y()),
        }));
    });
    on_cleanup(move || pointer_listener.remove());

    let UseTimeoutFnReturn {
        start: start_splash,
        ..
    } = use_timeout_fn(
        move |_: ()| page.dispatch(UiEvent::SplashElapsed),
        config.splash_delay_ms as f64,
    );
    start_splash(());

    // one observer per section, held paused until layout settles
    let root_margin = config.reveal_margin.root_margin();
    let resume_observers = Section::ALL
        .into_iter()
        .map(|section| {
            let UseIntersectionObserverReturn { resume, .. } =
                use_intersection_observer_with_options(
                    page.refs.get(section),
                    move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
                        for entry in entries {
                            page.dispatch(UiEvent::Intersected {
                                section,
                                is_intersecting: entry.is_intersecting(),
                            });
                        }
                    },
                    UseIntersectionObserverOptions::default()
                        .immediate(false)
                        .root_margin(root_margin.clone()),
                );
            resume
        })
        .collect::<Vec<_>>();
    let UseTimeoutFnReturn {
        start: arm_observers,
        ..
    } = use_timeout_fn(
        move |_: ()| {
            log::debug!("arming section observers");
            for resume in &resume_observers {
                resume();
            }
        },
        config.observer_start_delay_ms as f64,
    );
    arm_observers(());

    view! {
        <Title text=format!("{} - Portfolio", PROFILE.name) />
        <Meta name="description" content=PROFILE.tagline />
        <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <Splash /> }>
            <div class="portfolio">
                <div class="bg-animated" aria-hidden="true"></div>
                <div class="bg-grid" aria-hidden="true"></div>
                <CursorFollower />
                <Header />
                <Hero />
                <About />
                <Journey />
                <Skills />
                <Projects />
                <Contact />
                <Footer />
            </div>
        </Show>
    }
}
