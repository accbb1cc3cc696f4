use leptos::prelude::*;

use crate::content::{skill_level, EDUCATION, EXPERIENCE, SKILLS};
use crate::state::Section;

use super::homepage::PageHandle;
use super::sections::reveal_class;

#[component]
pub fn Journey() -> impl IntoView {
    let page = expect_context::<PageHandle>();
    view! {
        <section
            id=Section::Services.id()
            node_ref=page.refs.get(Section::Services)
            class=reveal_class(page, Section::Services)
        >
            <div class="container">
                <h2 class="section-title">"My Academic and Professional Journey"</h2>
                <div class="journey-grid">
                    <div class="journey-column">
                        <h3 class="column-title">"Education"</h3>
                        <div class="timeline-cards">
                            {EDUCATION
                                .iter()
                                .map(|edu| {
                                    view! {
                                        <TimelineCard
                                            date=edu.date
                                            heading=edu.program
                                            subheading=edu.school
                                            desc=edu.desc
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="journey-column">
                        <h3 class="column-title">"Professional Experience"</h3>
                        <div class="timeline-cards">
                            {EXPERIENCE
                                .iter()
                                .map(|exp| {
                                    view! {
                                        <TimelineCard
                                            date=exp.date
                                            heading=exp.role
                                            subheading=exp.company
                                            desc=exp.desc
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineCard(
    date: &'static str,
    heading: &'static str,
    subheading: &'static str,
    desc: &'static str,
) -> impl IntoView {
    view! {
        <div class="timeline-card">
            <div class="card-badge">{date}</div>
            <h4>{heading}</h4>
            <h5>{subheading}</h5>
            <p>{desc}</p>
        </div>
    }
}

/// Skill groups with bar fills. Not a navigable section, so never observed.
#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills-section" class="section">
            <div class="container">
                <h2 class="section-title">"Tools and Skills"</h2>
                <div class="skills-category-tabs">
                    {SKILLS
                        .iter()
                        .map(|group| view! { <span class="category-pill">{group.category}</span> })
                        .collect_view()}
                </div>
                <div class="skills-grid-visual">
                    <div class="skills-list">
                        {SKILLS
                            .iter()
                            .map(|group| {
                                view! {
                                    <div class="skill-group">
                                        <h4>{group.category}</h4>
                                        {group
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                let skill = *skill;
                                                view! {
                                                    <div class="skill-bar-container">
                                                        <div class="skill-info">
                                                            <span>{skill}</span>
                                                        </div>
                                                        <div class="progress-bar">
                                                            <div
                                                                class="progress-fill"
                                                                style:width=format!("{}%", skill_level(skill))
                                                            ></div>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
