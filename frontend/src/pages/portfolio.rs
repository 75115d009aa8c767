use crate::components::animated_section::AnimatedSection;
use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::nav_bar::{NavBar, NavLink};
use crate::config;
use crate::content::{animated_sections, SectionId, HIGHLIGHTS, PROJECTS, SERVICES, TECH_STACK};
use crate::navigation::{NavController, WindowScroller};
use crate::utils::viewport::IntersectionViewport;
use crate::visibility::{OnCrossed, SectionWatch, VisibilityAction, VisibilityState};
use std::rc::Rc;
use web_sys::MouseEvent;
use yew::prelude::*;

fn render_hero(on_jump: &Callback<SectionId>) -> Html {
    html! {
        <div class="container">
            <div class="hero-copy">
                <h1 class="hero-title">
                    {"Building Digital Solutions That"}
                    <span class="accent">{" Scale"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Full-stack development and AI automation for businesses ready to transform their digital presence. From concept to deployment, delivering scalable solutions that drive growth."}
                </p>
                <div class="hero-cta-group">
                    <NavLink target={SectionId::Contact} on_activate={on_jump.clone()} classes="primary-button">
                        {"Get in Touch"}
                        <i class="fas fa-arrow-right"></i>
                    </NavLink>
                    <NavLink target={SectionId::Projects} on_activate={on_jump.clone()} classes="outline-button">
                        {"View Work"}
                    </NavLink>
                </div>
            </div>
        </div>
    }
}

fn render_services(on_jump: &Callback<SectionId>) -> Html {
    html! {
        <div class="container">
            <div class="section-intro">
                <h2>{"Services"}</h2>
                <p class="muted">{"Comprehensive digital solutions tailored to your business needs"}</p>
            </div>
            <div class="card-grid two">
                { for SERVICES.iter().map(|service| html! {
                    <div class="card">
                        <div class="card-icon"><i class={service.icon}></i></div>
                        <h3>{service.title}</h3>
                        <p class="muted">{service.description}</p>
                    </div>
                }) }
            </div>
            <div class="centered">
                <NavLink target={SectionId::Contact} on_activate={on_jump.clone()} classes="text-link">
                    {"Discuss Your Project"}
                    <i class="fas fa-arrow-right"></i>
                </NavLink>
            </div>
        </div>
    }
}

fn render_projects() -> Html {
    html! {
        <div class="container">
            <div class="section-intro">
                <h2>{"Featured Projects"}</h2>
                <p class="muted">{"Real results for real businesses"}</p>
            </div>
            <div class="card-grid three">
                { for PROJECTS.iter().map(|project| html! {
                    <div class="card">
                        <div class="project-category">{project.category}</div>
                        <h3>{project.title}</h3>
                        <p class="muted">{project.description}</p>
                        <div class="tag-row">
                            { for project.tech.iter().map(|tech| html! {
                                <span class="tag">{*tech}</span>
                            }) }
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}

fn render_about() -> Html {
    html! {
        <div class="container about-grid">
            <div>
                <h2>{"About"}</h2>
                <p class="muted lead">
                    {"I'm a full-stack developer and AI automation specialist focused on building scalable digital solutions for modern businesses."}
                </p>
                <p class="muted lead">
                    {"With expertise in Next.js, React, and intelligent automation tools, I help startups and established companies transform their operations through technology."}
                </p>
                <div class="highlights">
                    { for HIGHLIGHTS.iter().map(|highlight| html! {
                        <div class="highlight">
                            <i class="fas fa-circle-check accent"></i>
                            <div>
                                <h4>{highlight.title}</h4>
                                <p class="muted">{highlight.blurb}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <div>
                <h3>{"Tech Stack"}</h3>
                <div class="tag-row">
                    { for TECH_STACK.iter().map(|tech| html! {
                        <span class="stack-tag">{*tech}</span>
                    }) }
                </div>
            </div>
        </div>
    }
}

fn render_contact() -> Html {
    html! {
        <div class="container narrow">
            <h2>{"Let's Work Together"}</h2>
            <p class="muted lead">
                {"Ready to transform your digital presence? Let's discuss how we can build something exceptional together."}
            </p>
            <ContactForm />
        </div>
    }
}

/// Sections in render order. The page emits exactly one `<section>` per
/// entry, so nav links resolve as long as each target appears once here.
fn page_sections() -> [SectionId; 5] {
    SectionId::ALL
}

fn section_classes(section: SectionId) -> &'static str {
    match section {
        SectionId::Home => "hero",
        SectionId::Services | SectionId::About => "alt-bg",
        SectionId::Projects | SectionId::Contact => "",
    }
}

fn render_section_body(section: SectionId, on_jump: &Callback<SectionId>) -> Html {
    match section {
        SectionId::Home => render_hero(on_jump),
        SectionId::Services => render_services(on_jump),
        SectionId::Projects => render_projects(),
        SectionId::About => render_about(),
        SectionId::Contact => render_contact(),
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let nav = use_state(NavController::default);
    let visibility = use_reducer(VisibilityState::default);

    // Watch sections for the fade-in; the watch is released on unmount.
    {
        let dispatcher = visibility.dispatcher();
        use_effect_with_deps(
            move |_| {
                let on_visible: OnCrossed = {
                    let dispatcher = dispatcher.clone();
                    Rc::new(move |section: SectionId| {
                        dispatcher.dispatch(VisibilityAction::Seen(section));
                    })
                };
                let watch = match IntersectionViewport::new(config::VISIBILITY_THRESHOLD) {
                    Ok(viewport) => {
                        let watch = SectionWatch::start(viewport, &animated_sections(), on_visible);
                        log::debug!("Watching {} sections for scroll animations", watch.watched().len());
                        Some(watch)
                    }
                    Err(e) => {
                        // Without an observer nothing would ever fade in.
                        log::warn!("Scroll animations disabled: {}", e);
                        for section in animated_sections() {
                            dispatcher.dispatch(VisibilityAction::Seen(section));
                        }
                        None
                    }
                };
                move || {
                    if let Some(watch) = watch {
                        watch.stop();
                    }
                }
            },
            (),
        );
    }

    let on_toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*nav).clone();
            next.toggle_menu();
            nav.set(next);
        })
    };

    let on_navigate = {
        let nav = nav.clone();
        Callback::from(move |section: SectionId| {
            let mut next = (*nav).clone();
            next.activate_section(section, &WindowScroller);
            nav.set(next);
        })
    };

    let on_jump = {
        let nav = nav.clone();
        Callback::from(move |section: SectionId| {
            nav.jump(section.as_str(), &WindowScroller);
        })
    };

    html! {
        <div class="portfolio-page">
            <style>{PAGE_CSS}</style>
            <NavBar
                menu_open={nav.is_menu_open()}
                on_toggle_menu={on_toggle_menu}
                on_navigate={on_navigate.clone()}
            />

            { for page_sections().into_iter().map(|section| html! {
                <AnimatedSection
                    id={section}
                    visible={visibility.is_visible(section)}
                    classes={section_classes(section)}
                >
                    { render_section_body(section, &on_jump) }
                </AnimatedSection>
            }) }

            <Footer on_navigate={on_navigate} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::nav_items;

    #[test]
    fn every_nav_item_targets_exactly_one_rendered_section() {
        let rendered = page_sections();
        for item in nav_items() {
            let matches = rendered.iter().filter(|s| s.as_str() == item.target.as_str()).count();
            assert_eq!(matches, 1, "nav item {} is ambiguous or dangling", item.label);
        }
    }

    #[test]
    fn every_rendered_section_is_watched_for_fade_in() {
        let watched = animated_sections();
        for section in page_sections() {
            assert!(watched.contains(&section), "#{} never fades in", section.as_str());
        }
    }

    #[test]
    fn only_the_hero_gets_hero_spacing() {
        let heroes: Vec<_> = page_sections()
            .into_iter()
            .filter(|s| section_classes(*s) == "hero")
            .collect();
        assert_eq!(heroes, vec![SectionId::Home]);
    }
}

const PAGE_CSS: &str = r#"
    .portfolio-page {
        background: #0a0a0a;
        color: #f3f4f6;
        min-height: 100vh;
        font-family: system-ui, -apple-system, sans-serif;
    }
    .accent { color: #f97316; }
    .muted { color: #9ca3af; }
    .small { font-size: 0.875rem; }
    .lead { font-size: 1.125rem; line-height: 1.7; margin-bottom: 1.5rem; }
    .centered { text-align: center; margin-top: 3rem; }
    .container { max-width: 80rem; margin: 0 auto; }
    .container.narrow { max-width: 48rem; text-align: center; }

    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        background: rgba(10, 10, 10, 0.95);
        backdrop-filter: blur(4px);
        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
        z-index: 50;
    }
    .nav-inner { max-width: 80rem; margin: 0 auto; padding: 1rem 1.5rem; }
    .nav-row { display: flex; align-items: center; justify-content: space-between; }
    .brand { font-size: 1.25rem; font-weight: 700; letter-spacing: -0.025em; }
    .desktop-nav { display: flex; gap: 2rem; }
    .nav-link {
        color: #d1d5db;
        font-size: 0.875rem;
        font-weight: 500;
        text-decoration: none;
        transition: color 0.3s;
    }
    .nav-link:hover { color: #fff; }
    .menu-toggle { display: none; background: none; border: none; color: #fff; font-size: 1.25rem; cursor: pointer; }
    .mobile-nav { display: flex; flex-direction: column; gap: 1rem; margin-top: 1rem; padding-bottom: 1rem; }

    .page-section { padding: 5rem 1.5rem; }
    .page-section.hero { padding-top: 8rem; }
    .alt-bg { background: #0f0f0f; }
    .fade-in { opacity: 0; transform: translateY(24px); transition: opacity 0.8s ease, transform 0.8s ease; }
    .fade-in.visible { opacity: 1; transform: none; }

    .hero-copy { max-width: 56rem; }
    .hero-title { font-size: 4.5rem; font-weight: 700; line-height: 1.1; margin-bottom: 1.5rem; }
    .hero-subtitle { font-size: 1.25rem; color: #9ca3af; line-height: 1.7; margin-bottom: 2rem; }
    .hero-cta-group { display: flex; flex-wrap: wrap; gap: 1rem; }
    .primary-button, .outline-button {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 1rem 2rem;
        border-radius: 0.5rem;
        font-weight: 600;
        color: #fff;
        text-decoration: none;
        cursor: pointer;
        transition: all 0.3s;
    }
    .primary-button { background: #f97316; border: none; }
    .primary-button:hover { background: #ea580c; }
    .primary-button.wide { width: 100%; font-size: 1rem; }
    .outline-button { border: 1px solid rgba(255, 255, 255, 0.2); }
    .outline-button:hover { border-color: rgba(255, 255, 255, 0.4); }
    .text-link { color: #f97316; font-weight: 600; text-decoration: none; display: inline-flex; gap: 0.5rem; }

    .section-intro { text-align: center; margin-bottom: 4rem; }
    .section-intro h2, .about-grid h2, .narrow h2 { font-size: 3rem; font-weight: 700; margin-bottom: 1rem; }
    .card-grid { display: grid; gap: 2rem; }
    .card-grid.two { grid-template-columns: repeat(2, 1fr); }
    .card-grid.three { grid-template-columns: repeat(3, 1fr); }
    .card {
        background: #1a1a1a;
        padding: 2rem;
        border-radius: 0.75rem;
        border: 1px solid rgba(255, 255, 255, 0.05);
        transition: border-color 0.3s;
    }
    .card:hover { border-color: rgba(249, 115, 22, 0.3); }
    .card h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.75rem; }
    .card-icon { color: #f97316; font-size: 2rem; margin-bottom: 1rem; }
    .project-category { color: #f97316; font-size: 0.875rem; font-weight: 600; margin-bottom: 0.75rem; }
    .tag-row { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .tag { font-size: 0.75rem; background: rgba(255, 255, 255, 0.05); padding: 0.25rem 0.75rem; border-radius: 9999px; color: #d1d5db; }
    .stack-tag { background: #1a1a1a; border: 1px solid rgba(255, 255, 255, 0.1); padding: 0.5rem 1rem; border-radius: 0.5rem; font-size: 0.875rem; }

    .about-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 4rem; align-items: center; }
    .highlights { display: flex; flex-direction: column; gap: 1rem; }
    .highlight { display: flex; align-items: flex-start; gap: 0.75rem; }
    .highlight h4 { font-weight: 600; margin: 0 0 0.25rem; }

    .contact-form { display: flex; flex-direction: column; gap: 1.5rem; text-align: left; }
    .field-label { display: block; font-size: 0.875rem; font-weight: 600; margin-bottom: 0.5rem; color: #d1d5db; }
    .field {
        width: 100%;
        box-sizing: border-box;
        background: #1a1a1a;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 0.5rem;
        padding: 0.75rem 1rem;
        color: inherit;
    }
    .field:focus { outline: none; border-color: #f97316; }
    .no-resize { resize: none; }

    .site-footer { background: #0f0f0f; border-top: 1px solid rgba(255, 255, 255, 0.05); padding: 3rem 1.5rem; }
    .footer-grid { max-width: 80rem; margin: 0 auto 2rem; display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
    .footer-nav { display: flex; flex-direction: column; gap: 0.5rem; }
    .social-links { display: flex; gap: 1rem; }
    .social-links a { color: #9ca3af; }
    .social-links a:hover { color: #f97316; }
    .footer-bottom { border-top: 1px solid rgba(255, 255, 255, 0.05); padding-top: 2rem; text-align: center; font-size: 0.875rem; color: #9ca3af; }

    @media (max-width: 768px) {
        .desktop-nav { display: none; }
        .menu-toggle { display: block; }
        .hero-title { font-size: 3rem; }
        .card-grid.two, .card-grid.three, .about-grid, .footer-grid { grid-template-columns: 1fr; }
    }
    @media (min-width: 769px) {
        .mobile-nav { display: none; }
    }
"#;
