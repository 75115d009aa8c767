use crate::content::{nav_items, SectionId, OWNER_FIRST_NAME, OWNER_LAST_NAME};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub target: SectionId,
    pub on_activate: Callback<SectionId>,
    #[prop_or_default]
    pub classes: Classes,
    pub children: Children,
}

/// In-page anchor. The browser's jump is suppressed; `on_activate` decides
/// how to get there.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let target = props.target;
        let on_activate = props.on_activate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_activate.emit(target);
        })
    };
    html! {
        <a href={props.target.anchor()} class={props.classes.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

pub fn render_nav_links(on_navigate: &Callback<SectionId>) -> Html {
    nav_items()
        .into_iter()
        .map(|item| {
            html! {
                <NavLink target={item.target} on_activate={on_navigate.clone()} classes="nav-link">
                    {item.label}
                </NavLink>
            }
        })
        .collect::<Html>()
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub menu_open: bool,
    pub on_toggle_menu: Callback<MouseEvent>,
    pub on_navigate: Callback<SectionId>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class="top-nav">
            <div class="nav-inner">
                <div class="nav-row">
                    <div class="brand">
                        {OWNER_FIRST_NAME}{" "}<span class="accent">{OWNER_LAST_NAME}</span>
                    </div>

                    <div class="desktop-nav">
                        { render_nav_links(&props.on_navigate) }
                    </div>

                    <button
                        class="menu-toggle"
                        aria-label={if props.menu_open { "Close menu" } else { "Open menu" }}
                        onclick={props.on_toggle_menu.clone()}
                    >
                        <i class={if props.menu_open { "fas fa-xmark" } else { "fas fa-bars" }}></i>
                    </button>
                </div>

                if props.menu_open {
                    <div class="mobile-nav">
                        { render_nav_links(&props.on_navigate) }
                    </div>
                }
            </div>
        </nav>
    }
}
