use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCanvasElement};
use yew::prelude::*;

use folio_core::reactor::parallax_transform;
use folio_core::reveal::ObservedSection;
use folio_core::{GalleryFilter, PageAction, PageState, SKILLS};

use crate::app_core::AppCore;
use crate::confetti::ConfettiHost;
use crate::page_runtime::{self, PageRuntime};
use crate::persisted_store;
use crate::viewport;

const GALLERY_BASE: &str = "gallery/";
const BG_SHAPES: usize = 4;
const HERO_BUTTONS: [(&str, &str, &str); 2] = [
    ("#projects", "btn btn-primary", "View Work"),
    ("#contact", "btn btn-secondary", "Contact Me"),
];
const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#gallery", "Gallery"),
    ("#contact", "Contact"),
];
const CARD_STYLE_REST: &str = "transform: translateY(0); box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);";
const CARD_STYLE_LIFTED: &str =
    "transform: translateY(-10px); box-shadow: 0 15px 40px rgba(0, 0, 0, 0.2);";

#[derive(Properties)]
pub(crate) struct AppProps {
    pub(crate) core: Rc<AppCore>,
    pub(crate) confetti: Rc<ConfettiHost>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core) && Rc::ptr_eq(&self.confetti, &other.confetti)
    }
}

fn dispatch_cb<E: 'static>(core: &Rc<AppCore>, action: PageAction) -> Callback<E> {
    let core = core.clone();
    Callback::from(move |_: E| core.dispatch(action.clone()))
}

/// Intercepts an in-page `#id` link and turns it into a smooth scroll.
fn anchor_cb(core: &Rc<AppCore>, href: &'static str, nav_link: bool) -> Callback<MouseEvent> {
    let core = core.clone();
    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        let target_offset_top = viewport::anchor_offset_top(href);
        if nav_link {
            let (viewport_width, _) = viewport::viewport_size();
            core.dispatch(PageAction::NavLinkClicked {
                viewport_width,
                target_offset_top,
            });
        } else {
            core.dispatch(PageAction::AnchorClicked { target_offset_top });
        }
    })
}

fn section_title(core: &Rc<AppCore>, state: &PageState, index: usize, text: &str) -> Html {
    let underline = if state.title_expanded(index) {
        "width: 100%;"
    } else {
        "width: 50px;"
    };
    html! {
        <h2 class="section-title" onmouseenter={dispatch_cb(core, PageAction::TitleHovered { index })}>
            { text.to_string() }
            <span class="title-underline" style={underline}></span>
        </h2>
    }
}

fn render_header(core: &Rc<AppCore>, state: &PageState) -> Html {
    let logo_style = state.logo_revealed.then_some("--before-width: 100%;");
    let nav_items = NAV_LINKS
        .iter()
        .map(|&(href, label)| {
            html! {
                <li>
                    <a class="nav-link" href={href} onclick={anchor_cb(core, href, true)}>
                        { label }
                    </a>
                </li>
            }
        })
        .collect::<Html>();
    html! {
        <header class={classes!("header", state.scroll.header_scrolled.then_some("scrolled"))}>
            <a class="logo" href="#home" style={logo_style} onclick={anchor_cb(core, "#home", false)}>
                { "Portfolio" }
            </a>
            <nav class="nav">
                <ul class={classes!(state.nav_open.then_some("active"))}>
                    { nav_items }
                </ul>
            </nav>
            <label class="theme-switch" for="toggle-theme">
                <input
                    type="checkbox"
                    id="toggle-theme"
                    checked={state.theme.is_dark()}
                    onchange={dispatch_cb::<Event>(core, PageAction::ToggleTheme)}
                />
                <span class="slider"></span>
            </label>
            <div
                class={classes!("hamburger", state.nav_open.then_some("active"))}
                onclick={dispatch_cb(core, PageAction::ToggleNav)}
            >
                <span></span>
                <span></span>
                <span></span>
            </div>
        </header>
    }
}

fn render_background(state: &PageState) -> Html {
    let shapes = (0..BG_SHAPES)
        .map(|index| {
            let style = state
                .pointer
                .map(|pointer| format!("transform: {};", parallax_transform(index, pointer, &state.config)));
            html! { <div class={format!("shape shape-{}", index + 1)} style={style}></div> }
        })
        .collect::<Html>();
    html! { <div class="bg-elements">{ shapes }</div> }
}

fn render_hero(core: &Rc<AppCore>, state: &PageState) -> Html {
    let buttons = HERO_BUTTONS
        .iter()
        .enumerate()
        .map(|(index, &(href, class, label))| {
            let animation = if state.hovered_hero == Some(index) {
                "animation: pulse 1s infinite;"
            } else {
                "animation: none;"
            };
            html! {
                <a
                    class={class}
                    href={href}
                    style={animation}
                    onclick={anchor_cb(core, href, false)}
                    onmouseenter={dispatch_cb(core, PageAction::HeroHover { index, hovered: true })}
                    onmouseleave={dispatch_cb(core, PageAction::HeroHover { index, hovered: false })}
                >
                    { label }
                </a>
            }
        })
        .collect::<Html>();
    html! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1>{ "Hi, I build things for the web" }</h1>
                <p>{ "Designer and developer crafting small, careful interfaces." }</p>
                <div class="hero-buttons">{ buttons }</div>
            </div>
        </section>
    }
}

fn render_about(core: &Rc<AppCore>, state: &PageState) -> Html {
    let phase = state.reveal.skill_bars();
    let skills = SKILLS
        .iter()
        .map(|skill| {
            let width = format!("width: {};", phase.width_css(&skill.width_css()));
            html! {
                <div class="skill">
                    <span class="skill-name">{ skill.label }</span>
                    <div class="skill-bar">
                        <div class="skill-level" style={width}></div>
                    </div>
                </div>
            }
        })
        .collect::<Html>();
    html! {
        <section id="about" class="about">
            { section_title(core, state, 0, "About Me") }
            <div class="about-content" data-observe={ObservedSection::About.attr()}>
                <p>{ "I enjoy turning rough ideas into interfaces that feel quick and friendly." }</p>
                <div class="skills">{ skills }</div>
            </div>
        </section>
    }
}

fn render_projects(core: &Rc<AppCore>, state: &PageState) -> Html {
    let cards = state
        .projects()
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let style = if state.hovered_project == Some(index) {
                CARD_STYLE_LIFTED
            } else {
                CARD_STYLE_REST
            };
            let onclick = {
                let core = core.clone();
                Callback::from(move |event: MouseEvent| {
                    let on_link = event
                        .target()
                        .and_then(|target| target.dyn_into::<Element>().ok())
                        .and_then(|element| element.closest(".project-link").ok().flatten())
                        .is_some();
                    core.dispatch(PageAction::ProjectClicked { index, on_link });
                })
            };
            html! {
                <div
                    class="project-card"
                    data-project={project.slug}
                    data-observe={ObservedSection::ProjectCard(index).attr()}
                    style={style}
                    onclick={onclick}
                    onmouseenter={dispatch_cb(core, PageAction::ProjectHover { index, hovered: true })}
                    onmouseleave={dispatch_cb(core, PageAction::ProjectHover { index, hovered: false })}
                >
                    <h3>{ project.title }</h3>
                    <p>{ project.summary }</p>
                    <a class="project-link" href={project.link} target="_blank" rel="noopener">
                        { "View Project" }
                    </a>
                </div>
            }
        })
        .collect::<Html>();
    html! {
        <section id="projects" class="projects">
            { section_title(core, state, 1, "Projects") }
            <div class="projects-grid">{ cards }</div>
        </section>
    }
}

fn render_gallery(core: &Rc<AppCore>, state: &PageState) -> Html {
    let gallery = &state.gallery;
    let filters = GalleryFilter::OPTIONS
        .iter()
        .map(|filter| {
            html! {
                <button
                    class={classes!("filter-btn", gallery.is_active(*filter).then_some("active"))}
                    data-filter={filter.as_str()}
                    onclick={dispatch_cb(core, PageAction::SelectFilter(*filter))}
                >
                    { filter.label() }
                </button>
            }
        })
        .collect::<Html>();
    let tiles = gallery
        .tiles()
        .iter()
        .enumerate()
        .map(|(position, tile)| {
            let image = tile.image;
            let style = gallery.tile_style(position).css(gallery.is_revealed(position));
            html! {
                <div
                    key={format!("{}-{}", gallery.generation(), tile.catalog_index)}
                    class="gallery-item"
                    data-category={image.category.as_str()}
                    style={style}
                    onclick={dispatch_cb(core, PageAction::OpenTile { catalog_index: tile.catalog_index })}
                >
                    <img src={format!("{GALLERY_BASE}{}", image.path)} alt={image.caption} />
                    <div class="item-overlay">
                        <h3>{ image.caption }</h3>
                        <p>{ "Click to enlarge" }</p>
                    </div>
                </div>
            }
        })
        .collect::<Html>();
    let modal = match gallery.modal_image() {
        Some(image) => {
            let on_backdrop = {
                let core = core.clone();
                Callback::from(move |event: MouseEvent| {
                    if event.target() == event.current_target() {
                        core.dispatch(PageAction::CloseModal);
                    }
                })
            };
            html! {
                <div class="gallery-modal" style="display: block;" onclick={on_backdrop}>
                    <span class="close-modal" onclick={dispatch_cb(core, PageAction::CloseModal)}>
                        { "\u{00d7}" }
                    </span>
                    <img class="modal-content" id="modal-image" src={format!("{GALLERY_BASE}{}", image.path)} />
                    <div class="modal-caption">{ image.caption }</div>
                </div>
            }
        }
        None => html! {},
    };
    html! {
        <section id="gallery" class="gallery">
            { section_title(core, state, 2, "Gallery") }
            <div class="gallery-filters">{ filters }</div>
            <div class="gallery-grid">{ tiles }</div>
            { modal }
        </section>
    }
}

fn render_contact(core: &Rc<AppCore>, state: &PageState) -> Html {
    html! {
        <section id="contact" class="contact">
            { section_title(core, state, 3, "Contact") }
            <p>{ "Say hello at " }<a href="mailto:hello@example.com">{ "hello@example.com" }</a></p>
        </section>
    }
}

#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let app_core = props.core.clone();
    let app_snapshot = use_state(|| app_core.snapshot());
    let canvas_ref = use_node_ref();

    {
        let app_core = app_core.clone();
        let app_snapshot = app_snapshot.clone();
        use_effect_with((), move |_| {
            let app_core_for_cb = app_core.clone();
            let subscription = app_core.subscribe(Rc::new(move || {
                app_snapshot.set(app_core_for_cb.snapshot());
            }));
            move || drop(subscription)
        });
    }

    {
        let app_core = app_core.clone();
        let confetti = props.confetti.clone();
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            confetti.attach(canvas_ref.cast::<HtmlCanvasElement>());
            PageRuntime::install(app_core, confetti.clone(), persisted_store::theme_store());
            move || {
                page_runtime::uninstall();
                confetti.attach(None);
            }
        });
    }

    let state = &*app_snapshot;
    html! {
        <>
            { render_background(state) }
            { render_header(&app_core, state) }
            <main>
                { render_hero(&app_core, state) }
                { render_about(&app_core, state) }
                { render_projects(&app_core, state) }
                { render_gallery(&app_core, state) }
                { render_contact(&app_core, state) }
            </main>
            <button
                class={classes!("fab", state.scroll.back_to_top_visible.then_some("active"))}
                aria-label="Back to top"
                onclick={dispatch_cb(&app_core, PageAction::BackToTop)}
            >
                { "\u{2191}" }
            </button>
            <canvas
                id="confetti-canvas"
                ref={canvas_ref}
                style="position: fixed; top: 0; left: 0; pointer-events: none; z-index: 1000;"
            />
        </>
    }
}
