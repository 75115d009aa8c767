use thiserror::Error;

/// Failures at the browser boundary. None of these reach the visitor; callers
/// log them and carry on.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("IntersectionObserver unavailable: {0}")]
    ObserverUnavailable(String),
}

impl DomError {
    pub(crate) fn from_js(err: wasm_bindgen::JsValue) -> Self {
        DomError::ObserverUnavailable(
            err.as_string().unwrap_or_else(|| format!("{:?}", err)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_element() {
        let err = DomError::MissingElement("projects".to_string());
        assert_eq!(err.to_string(), "no element with id `projects`");
    }
}
