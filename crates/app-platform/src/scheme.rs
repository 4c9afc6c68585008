//! Color scheme detection

use app_ui::theme::ColorScheme;

/// Environment variable consulted for the preferred color scheme
pub const COLOR_SCHEME_ENV: &str = "DUITKU_COLOR_SCHEME";

/// Resolve the color scheme from the environment
///
/// Only a recognized `dark` value selects the dark scheme; any other
/// value, or an unset variable, resolves to light.
pub fn detect_color_scheme() -> ColorScheme {
    std::env::var(COLOR_SCHEME_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test so the env mutations cannot interleave across threads.
    #[test]
    fn test_detection_follows_env() {
        std::env::remove_var(COLOR_SCHEME_ENV);
        assert_eq!(detect_color_scheme(), ColorScheme::Light);

        std::env::set_var(COLOR_SCHEME_ENV, "dark");
        assert_eq!(detect_color_scheme(), ColorScheme::Dark);

        std::env::set_var(COLOR_SCHEME_ENV, "light");
        assert_eq!(detect_color_scheme(), ColorScheme::Light);

        std::env::set_var(COLOR_SCHEME_ENV, "solarized");
        assert_eq!(detect_color_scheme(), ColorScheme::Light);

        std::env::remove_var(COLOR_SCHEME_ENV);
    }
}
