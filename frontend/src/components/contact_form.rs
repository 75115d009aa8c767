use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// What the visitor has typed so far. Nothing is ever sent anywhere.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.email.trim().is_empty() && self.message.trim().is_empty()
    }

    /// Loggable shape of the draft; carries no visitor text.
    pub fn summary(&self) -> DraftSummary {
        DraftSummary {
            name_chars: self.name.trim().chars().count(),
            email_chars: self.email.trim().chars().count(),
            message_chars: self.message.trim().chars().count(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DraftSummary {
    pub name_chars: usize,
    pub email_chars: usize,
    pub message_chars: usize,
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactDraft::default);

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ContactDraft { name: input.value(), ..(*draft).clone() });
        })
    };
    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ContactDraft { email: input.value(), ..(*draft).clone() });
        })
    };
    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(ContactDraft { message: input.value(), ..(*draft).clone() });
        })
    };

    // No endpoint exists; keep the browser from reloading the page.
    let onsubmit = {
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if draft.is_blank() {
                log::debug!("Ignoring empty contact form");
                return;
            }
            match serde_json::to_string(&draft.summary()) {
                Ok(json) => log::debug!("Contact form captured locally: {}", json),
                Err(e) => log::warn!("Could not serialize contact draft summary: {}", e),
            }
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <div>
                <label class="field-label">{"Name"}</label>
                <input
                    type="text"
                    class="field"
                    placeholder="Your name"
                    value={draft.name.clone()}
                    oninput={on_name}
                />
            </div>
            <div>
                <label class="field-label">{"Email"}</label>
                <input
                    type="email"
                    class="field"
                    placeholder="your@email.com"
                    value={draft.email.clone()}
                    oninput={on_email}
                />
            </div>
            <div>
                <label class="field-label">{"Message"}</label>
                <textarea
                    rows="5"
                    class="field no-resize"
                    placeholder="Tell me about your project..."
                    value={draft.message.clone()}
                    oninput={on_message}
                />
            </div>
            <button type="submit" class="primary-button wide">
                {"Get in Touch"}
                <i class="fas fa-arrow-right"></i>
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_draft_is_blank() {
        let draft = ContactDraft {
            name: "  ".to_string(),
            ..Default::default()
        };
        assert!(draft.is_blank());

        let draft = ContactDraft {
            message: "Need a dashboard".to_string(),
            ..Default::default()
        };
        assert!(!draft.is_blank());
    }

    #[test]
    fn summary_keeps_lengths_but_no_visitor_text() {
        let draft = ContactDraft {
            name: " Ada ".to_string(),
            email: "ada@example.com".to_string(),
            message: "Need a dashboard".to_string(),
        };
        let summary = draft.summary();
        assert_eq!(summary, DraftSummary { name_chars: 3, email_chars: 15, message_chars: 16 });

        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("Ada"));
        assert!(!json.contains("ada@example.com"));
        assert!(!json.contains("dashboard"));
        assert!(json.contains("\"email_chars\":15"));
    }
}
