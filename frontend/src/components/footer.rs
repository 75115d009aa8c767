use crate::components::nav_bar::render_nav_links;
use crate::content::{SectionId, OWNER_DISPLAY_NAME, OWNER_FIRST_NAME, OWNER_LAST_NAME, SOCIAL_LINKS, TAGLINE};
use web_sys::js_sys;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<SectionId>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="brand">
                        {OWNER_FIRST_NAME}{" "}<span class="accent">{OWNER_LAST_NAME}</span>
                    </div>
                    <p class="muted small">{TAGLINE}</p>
                </div>
                <div>
                    <h4>{"Navigation"}</h4>
                    <div class="footer-nav">
                        { render_nav_links(&props.on_navigate) }
                    </div>
                </div>
                <div>
                    <h4>{"Connect"}</h4>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a href={link.href} aria-label={link.label}>
                                <i class={link.icon}></i>
                            </a>
                        }) }
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© {} {}. All rights reserved.", year, OWNER_DISPLAY_NAME)}
            </div>
        </footer>
    }
}
