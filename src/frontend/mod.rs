mod contact;
mod controller;
mod dom;
mod hero;
mod navbar;
mod showcase;
mod tasks;

use crate::{
    config::ViewConfig,
    content::{SEMINARS, SKILLS, TIMELINE},
    logging::Logger,
};
use contact::ContactForm;
use controller::ViewController;
use hero::Hero;
use navbar::Navbar;
use serde_json::json;
use showcase::Projects;
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

/// Settings shared with every section.
#[derive(Clone, Default, PartialEq)]
pub struct PageContext {
    pub config: Rc<ViewConfig>,
    pub logger: Logger,
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub page: PageContext,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    {
        let logger = props.page.logger;
        use_effect_with((), move |_| {
            let controller = dom::document()
                .map(|document| ViewController::attach(&document, dom::prefers_reduced_motion(), logger));
            move || drop(controller)
        });
    }

    html! {
        <ContextProvider<PageContext> context={props.page.clone()}>
            <Navbar />
            <main id="content">
                <Hero />
                <About />
                <Skills />
                <Experience />
                <Projects />
                <ContactForm />
            </main>
            <footer class="site-footer">
                <p class="muted">{"Built with Rust and Yew."}</p>
            </footer>
        </ContextProvider<PageContext>>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="section-block">
            <h2 class="animate-on-scroll">{"About"}</h2>
            <p class="animate-on-scroll">
                {"Computer engineering student who likes the point where firmware meets the browser: \
                  sensors, small servers, and the pages that make their data readable."}
            </p>
        </section>
    }
}

#[function_component(Skills)]
fn skills() -> Html {
    html! {
        <section id="skills" class="section-block">
            <h2 class="animate-on-scroll">{"Skills"}</h2>
            <ul class="skill-list">
                { for SKILLS.iter().map(|skill| html! {
                    <li key={skill.label} class="skill">
                        <span class="skill-label">{skill.label}</span>
                        <div class="skill-progress">
                            <div class="skill-progress-bar" data-progress={skill.progress} />
                        </div>
                    </li>
                }) }
            </ul>
        </section>
    }
}

#[function_component(Experience)]
fn experience() -> Html {
    html! {
        <section id="experience" class="section-block">
            <h2 class="animate-on-scroll">{"Experience"}</h2>
            <ol class="timeline">
                { for TIMELINE.iter().map(|entry| html! {
                    <li key={entry.title} class="timeline-item">
                        <span class="muted">{entry.period}</span>
                        <h3>{entry.title}</h3>
                        <p>{entry.detail}</p>
                    </li>
                }) }
            </ol>
            <h3 class="animate-on-scroll">{"Seminars"}</h3>
            <ul class="seminar-list">
                { for SEMINARS.iter().map(|seminar| html! {
                    <li key={*seminar} class="seminar-item">{*seminar}</li>
                }) }
            </ul>
        </section>
    }
}

fn read_config(root: &Element) -> ViewConfig {
    ViewConfig::from_source(&|key: &str| root.get_attribute(key))
}

pub fn run() {
    let root = dom::document()
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");
    let config = read_config(&root);
    let logger = Logger::new(config.log_level);

    logger.info(
        "view_controller_started",
        json!({
            "clock_zone": config.clock_zone.name(),
            "roles": config.roles.len(),
            "contact_endpoint": !matches!(config.contact, crate::contact::ContactTransport::Simulated { .. }),
        }),
    );

    let page = PageContext {
        config: Rc::new(config),
        logger,
    };
    yew::Renderer::<App>::with_root_and_props(root, AppProps { page }).render();
}
