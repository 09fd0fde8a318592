use leptos::prelude::*;
use leptos_meta::Title;

use crate::{profile::profile, reveal::Percent};

use super::{
    contact::ContactSection,
    header::{AnchorLink, PageSection},
    resume::DownloadResume,
    reveal::{ProgressBar, Reveal},
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Education />
        <Certifications />
        <Projects />
        <Skills />
        <ContactSection />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let p = profile();
    view! {
        <PageSection id="home" class="hero">
            <div class="hero-content">
                <p class="hero-greeting">"Hello, I'm"</p>
                <h1 class="hero-name">{p.name.clone()}</h1>
                <p class="hero-headline">{p.headline.clone()}</p>
                <div class="hero-actions">
                    <AnchorLink href="#contact" class="btn btn-primary">
                        "Get In Touch"
                    </AnchorLink>
                    <DownloadResume />
                </div>
            </div>
        </PageSection>
    }
}

#[component]
fn About() -> impl IntoView {
    let p = profile();
    view! {
        <PageSection id="about">
            <h2 class="section-title">"About Me"</h2>
            <div class="about-grid">
                <div class="about-text">
                    <p class="summary">{p.summary.clone()}</p>
                    {p.about.iter().map(|para| view! { <p>{para.clone()}</p> }).collect_view()}
                </div>
                <div class="facts-grid">
                    {p
                        .facts
                        .iter()
                        .enumerate()
                        .map(|(i, fact)| {
                            view! {
                                <Reveal class="fact-card" index=i>
                                    <span class="fact-value">{fact.value.clone()}</span>
                                    <span class="fact-label">{fact.label.clone()}</span>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </PageSection>
    }
}

fn skill_tags(skills: &[String]) -> impl IntoView {
    view! {
        <div class="tags">
            {skills
                .iter()
                .map(|s| view! { <span class="tag">{s.clone()}</span> })
                .collect_view()}
        </div>
    }
}

#[component]
fn Education() -> impl IntoView {
    view! {
        <PageSection id="education">
            <h2 class="section-title">"Education"</h2>
            <div class="card-grid">
                {profile()
                    .education
                    .iter()
                    .enumerate()
                    .map(|(i, e)| {
                        view! {
                            <Reveal class="education-card card" index=i>
                                <h3>{e.degree.clone()}</h3>
                                <p class="card-subtitle">{e.institution.clone()}</p>
                                <p class="card-meta">
                                    {format!("{} | {}", e.period, e.standing)}
                                </p>
                                {skill_tags(&e.skills)}
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
fn Certifications() -> impl IntoView {
    view! {
        <PageSection id="certifications">
            <h2 class="section-title">"Certifications"</h2>
            <div class="card-grid">
                {profile()
                    .certifications
                    .iter()
                    .enumerate()
                    .map(|(i, c)| {
                        view! {
                            <Reveal class="cert-card card" index=i>
                                <h3>{c.title.clone()}</h3>
                                <p class="card-subtitle">{c.issuer.clone()}</p>
                                <p class="card-meta">{c.date.clone()}</p>
                                {skill_tags(&c.skills)}
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <PageSection id="projects">
            <h2 class="section-title">"Projects"</h2>
            <div class="card-grid">
                {profile()
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        view! {
                            <Reveal class="project-card card" index=i>
                                <h3>{project.title.clone()}</h3>
                                <p class="card-subtitle">{project.organization.clone()}</p>
                                <p class="card-meta">{project.role.clone()}</p>
                                <ul class="highlights">
                                    {project
                                        .highlights
                                        .iter()
                                        .map(|h| view! { <li>{h.clone()}</li> })
                                        .collect_view()}
                                </ul>
                                {skill_tags(&project.skills)}
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <PageSection id="skills">
            <h2 class="section-title">"Skills"</h2>
            <div class="card-grid">
                {profile()
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(i, group)| {
                        view! {
                            <Reveal class="skill-category card" index=i>
                                <h3>{group.category.clone()}</h3>
                                {group
                                    .skills
                                    .iter()
                                    .map(|s| {
                                        view! {
                                            <div class="skill">
                                                <div class="skill-header">
                                                    <span>{s.name.clone()}</span>
                                                    <span class="skill-level">
                                                        {format!("{}%", s.level)}
                                                    </span>
                                                </div>
                                                <ProgressBar percent=Percent::new(s.level) />
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}
