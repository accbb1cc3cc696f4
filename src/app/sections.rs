use leptos::{either::Either, prelude::*};

use crate::content::{build_year, contact_links, PROFILE, PROJECTS, STATS};
use crate::state::Section;

use super::avatar::ProfileImage;
use super::homepage::PageHandle;

/// Class for a section that fades in once revealed.
pub fn reveal_class(
    page: PageHandle,
    section: Section,
) -> impl Fn() -> &'static str + Send + Sync + 'static {
    move || {
        if page.is_revealed(section) {
            "section visible"
        } else {
            "section"
        }
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let page = expect_context::<PageHandle>();
    view! {
        <section
            id=Section::Home.id()
            node_ref=page.refs.get(Section::Home)
            class="hero-section center-text"
        >
            <div class="container">
                <h1 class="hero-title">
                    "Hey, I am " <span class="highlight">{PROFILE.name}</span> <br />
                    {PROFILE.tagline}
                </h1>
                <button class="cta-button" on:click=move |_| page.navigate(Section::About)>
                    <span>"Read More"</span>
                </button>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    let page = expect_context::<PageHandle>();
    view! {
        <section
            id=Section::About.id()
            node_ref=page.refs.get(Section::About)
            class=reveal_class(page, Section::About)
        >
            <div class="container">
                <h2 class="section-title">"Why hire me for your next project?"</h2>
                <div class="hire-me-grid">
                    <ProfileImage />
                    <div class="hire-me-content">
                        <p class="summary-text">
                            "I am a passionate " <strong>{PROFILE.role}</strong> " "
                            {PROFILE.summary}
                        </p>
                        <div class="stats-row">
                            {STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="stat-box">
                                            <span class="stat-num">{stat.value}</span>
                                            <span class="stat-label">{stat.label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="action-buttons">
                            <button
                                class="btn-secondary"
                                on:click=move |_| page.navigate(Section::Contact)
                            >
                                "Contact Me"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let page = expect_context::<PageHandle>();
    view! {
        <section
            id=Section::Projects.id()
            node_ref=page.refs.get(Section::Projects)
            class=reveal_class(page, Section::Projects)
        >
            <div class="container">
                <h2 class="section-title">"Featured Projects"</h2>
                <div class="projects-grid">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            let delay = format!("{}ms", project.delay_ms);
                            let body = view! {
                                <h3>{project.title}</h3>
                                <p>{project.description}</p>
                                <div class="project-tags">
                                    {project
                                        .tags
                                        .iter()
                                        .map(|tag| view! { <span class="tag">{*tag}</span> })
                                        .collect_view()}
                                </div>
                            };
                            match project.link {
                                Some(href) => {
                                    Either::Left(
                                        view! {
                                            <a
                                                href=href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="project-card"
                                                style:transition-delay=delay
                                            >
                                                {body}
                                            </a>
                                        },
                                    )
                                }
                                None => {
                                    Either::Right(
                                        view! {
                                            <div class="project-card" style:transition-delay=delay>
                                                {body}
                                            </div>
                                        },
                                    )
                                }
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let page = expect_context::<PageHandle>();
    view! {
        <section
            id=Section::Contact.id()
            node_ref=page.refs.get(Section::Contact)
            class=reveal_class(page, Section::Contact)
        >
            <div class="container">
                <h2 class="section-title">"Get in Touch"</h2>
                <div class="contact-links center-row">
                    {contact_links()
                        .into_iter()
                        .map(|link| {
                            let external = link.is_external();
                            view! {
                                <a
                                    href=link.href
                                    class="contact-pill"
                                    target=external.then_some("_blank")
                                    rel=external.then_some("noopener noreferrer")
                                >
                                    <span>{link.icon}</span>
                                    " "
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© " {build_year().map(|year| format!("{year} "))} {PROFILE.name}
                ". All Rights Reserved."</p>
        </footer>
    }
}
