use crate::content::SectionId;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    pub id: SectionId,
    pub visible: bool,
    #[prop_or_default]
    pub classes: Classes,
    pub children: Children,
}

/// A page section that starts transparent and fades in once `visible` flips.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let class = classes!(
        "page-section",
        "fade-in",
        props.visible.then_some("visible"),
        props.classes.clone()
    );
    html! {
        <section id={props.id.as_str()} class={class} data-animate="true">
            { for props.children.iter() }
        </section>
    }
}
