use super::{dom, PageContext};
use crate::{
    content::project_catalog,
    showcase::{marquee_track, ProjectCatalog, Showcase, MODAL_IMAGE_SLOTS},
};
use gloo_timers::callback::Timeout;
use serde_json::json;
use std::rc::Rc;
use yew::prelude::*;

const SHOW_TRANSITION_MS: u32 = 300;

#[derive(Clone, PartialEq)]
struct ShowcaseStore {
    catalog: Rc<ProjectCatalog>,
    showcase: Showcase,
}

enum ShowcaseAction {
    Activate(String),
    Shown,
    Close,
    Next,
    Prev,
    Jump(usize),
    ImageFailed(usize),
}

impl Reducible for ShowcaseStore {
    type Action = ShowcaseAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            ShowcaseAction::Activate(id) => {
                if next.showcase.activate(&next.catalog, &id).is_err() {
                    return self;
                }
            }
            ShowcaseAction::Shown => next.showcase.shown(),
            ShowcaseAction::Close => next.showcase.close(),
            ShowcaseAction::Next => next.showcase.next_slide(),
            ShowcaseAction::Prev => next.showcase.prev_slide(),
            ShowcaseAction::Jump(slide) => next.showcase.jump_to(slide),
            ShowcaseAction::ImageFailed(slot) => next.showcase.image_failed(slot),
        }

        next.into()
    }
}

fn set_paused<E: 'static>(paused: &UseStateHandle<bool>, value: bool) -> Callback<E> {
    let paused = paused.clone();
    Callback::from(move |_: E| paused.set(value))
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let page = use_context::<PageContext>().unwrap_or_default();
    let store = use_reducer(|| ShowcaseStore {
        catalog: Rc::new(project_catalog()),
        showcase: Showcase::default(),
    });
    let paused = use_state_eq(|| false);

    let on_activate = {
        let store = store.clone();
        let logger = page.logger;
        let policy = page.config.missing_project;
        Callback::from(move |id: String| {
            if let Err(error) = store.catalog.get(&id) {
                logger.warn(
                    "showcase_unknown_project",
                    json!({ "project": id, "error": error.to_string() }),
                );
                if let Some(notice) = policy.notice(&error) {
                    dom::alert(&notice);
                }
                return;
            }
            store.dispatch(ShowcaseAction::Activate(id));
        })
    };

    let cards = marquee_track(store.catalog.records())
        .into_iter()
        .map(|item| {
            let onclick = {
                let on_activate = on_activate.clone();
                let id = item.record.id.clone();
                Callback::from(move |_: MouseEvent| on_activate.emit(id.clone()))
            };
            let cover = item.record.images.first();

            html! {
                <article
                    key={item.key.clone()}
                    class={classes!("project-card", "hover-effect", (!item.duplicate).then_some("animate-on-scroll"))}
                    data-project={item.record.id.clone()}
                    aria-hidden={item.duplicate.then_some("true")}
                    onclick={onclick}
                >
                    if let Some(cover) = cover {
                        <img src={cover.src.clone()} alt={cover.alt.clone()} loading="lazy" />
                    }
                    <h3>{item.record.name.clone()}</h3>
                </article>
            }
        })
        .collect::<Html>();

    let on_close = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(ShowcaseAction::Close))
    };
    let on_shown = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(ShowcaseAction::Shown))
    };
    let on_slide = {
        let store = store.clone();
        Callback::from(move |action: SlideAction| {
            store.dispatch(match action {
                SlideAction::Next => ShowcaseAction::Next,
                SlideAction::Prev => ShowcaseAction::Prev,
                SlideAction::Jump(slide) => ShowcaseAction::Jump(slide),
                SlideAction::ImageFailed(slot) => ShowcaseAction::ImageFailed(slot),
            })
        })
    };

    html! {
        <section id="projects" class="section-block projects">
            <h2 class="animate-on-scroll">{"Projects"}</h2>
            <div
                class={classes!("marquee", (*paused).then_some("is-paused"))}
                onmouseenter={set_paused(&paused, true)}
                onmouseleave={set_paused(&paused, false)}
                ontouchstart={set_paused(&paused, true)}
                ontouchend={set_paused(&paused, false)}
            >
                <div class="marquee-track">{cards}</div>
            </div>
            <ProjectModal
                showcase={store.showcase.clone()}
                on_close={on_close}
                on_shown={on_shown}
                on_slide={on_slide}
            />
        </section>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum SlideAction {
    Next,
    Prev,
    Jump(usize),
    ImageFailed(usize),
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    showcase: Showcase,
    on_close: Callback<()>,
    on_shown: Callback<()>,
    on_slide: Callback<SlideAction>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let showcase = &props.showcase;
    let open_for = showcase
        .is_open()
        .then(|| showcase.content().map(|content| content.project_id.clone()))
        .flatten();

    {
        let on_shown = props.on_shown.clone();
        use_effect_with(open_for.clone(), move |open_for| {
            let timeout = open_for
                .is_some()
                .then(|| Timeout::new(SHOW_TRANSITION_MS, move || on_shown.emit(())));
            move || drop(timeout)
        });
    }

    let Some(content) = showcase.content().filter(|_| open_for.is_some()) else {
        return html! {};
    };

    let emit = |action: SlideAction| {
        let on_slide = props.on_slide.clone();
        Callback::from(move |_: MouseEvent| on_slide.emit(action))
    };
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let carousel = showcase.carousel();

    let slides = (0..MODAL_IMAGE_SLOTS)
        .filter_map(|slot| {
            let image = content.slots[slot].as_ref()?;
            let active = carousel.map_or(slot == 0, |c| c.is_active(slot));
            let onerror = {
                let on_slide = props.on_slide.clone();
                Callback::from(move |_: Event| on_slide.emit(SlideAction::ImageFailed(slot)))
            };

            Some(html! {
                <div key={slot} class={classes!("carousel-item", active.then_some("active"))}>
                    <img
                        id={format!("projectModalImage{}", slot + 1)}
                        src={image.src.clone()}
                        alt={image.alt.clone()}
                        style={(!showcase.image_visible(slot)).then_some("display: none;")}
                        onerror={onerror}
                    />
                </div>
            })
        })
        .collect::<Html>();

    let indicators = carousel
        .map(|c| {
            (0..c.count())
                .map(|slide| {
                    html! {
                        <button
                            key={slide}
                            type="button"
                            class={classes!(c.is_active(slide).then_some("active"))}
                            aria-label={format!("Show image {}", slide + 1)}
                            aria-current={c.is_active(slide).then_some("true")}
                            onclick={emit(SlideAction::Jump(slide))}
                        />
                    }
                })
                .collect::<Html>()
        })
        .unwrap_or_default();

    html! {
        <div class="modal show" id="projectModal" role="dialog" aria-modal="true" aria-labelledby="projectModalTitle">
            <div class="modal-backdrop" onclick={on_backdrop} />
            <div class="modal-dialog">
                <header class="modal-header">
                    <h5 id="projectModalTitle" class="modal-title">{content.name.clone()}</h5>
                    <button type="button" class="btn-close" aria-label="Close" onclick={on_close_button} />
                </header>
                <div class="modal-body">
                    <div id="projectCarousel" class="carousel">
                        <div class="carousel-inner">{slides}</div>
                        if carousel.is_some_and(|c| c.count() > 1) {
                            <button type="button" class="carousel-control-prev" aria-label="Previous" onclick={emit(SlideAction::Prev)} />
                            <button type="button" class="carousel-control-next" aria-label="Next" onclick={emit(SlideAction::Next)} />
                            <div class="carousel-indicators">{indicators}</div>
                        }
                    </div>
                    <h4 id="projectModalName">{content.name.clone()}</h4>
                    <p id="projectModalDescription">{content.description.clone()}</p>
                    if !content.badges.is_empty() {
                        <div id="projectModalTech" class="tech-badges">
                            { for content.badges.iter().map(|badge| html! {
                                <span key={badge.clone()} class="badge">{badge.clone()}</span>
                            }) }
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}
