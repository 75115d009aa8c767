pub mod animated_section;
pub mod contact_form;
pub mod footer;
pub mod nav_bar;
