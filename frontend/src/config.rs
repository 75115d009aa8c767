use log::Level;

/// Fraction of a section's area that must be inside the viewport before it
/// fades in.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Log level baked in at compile time, e.g. `SITE_LOG_LEVEL=debug trunk build`.
pub fn get_log_level() -> Level {
    parse_log_level(option_env!("SITE_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> Level {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("error") => Level::Error,
        Some("warn") => Level::Warn,
        Some("debug") => Level::Debug,
        Some("trace") => Level::Trace,
        _ => {
            if cfg!(debug_assertions) {
                Level::Debug
            } else {
                Level::Info
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels_case_insensitively() {
        assert_eq!(parse_log_level(Some("WARN")), Level::Warn);
        assert_eq!(parse_log_level(Some(" trace ")), Level::Trace);
        assert_eq!(parse_log_level(Some("error")), Level::Error);
    }

    #[test]
    fn unknown_level_falls_back_to_build_default() {
        let fallback = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
        assert_eq!(parse_log_level(Some("loud")), fallback);
        assert_eq!(parse_log_level(None), fallback);
    }

    #[test]
    fn threshold_is_a_fraction() {
        assert!(VISIBILITY_THRESHOLD > 0.0 && VISIBILITY_THRESHOLD < 1.0);
    }
}
