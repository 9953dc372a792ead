use crate::models::Theme;

const DARK_CLASS: &str = "dark";

pub fn is_dark(theme: Theme, prefers_dark: bool) -> bool {
    match theme {
        Theme::Dark => true,
        Theme::Light => false,
        Theme::System => prefers_dark,
    }
}

fn prefers_dark(window: &web_sys::Window) -> bool {
    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Toggles the `dark` class on `<html>`.
pub fn apply(theme: Theme) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return;
    };

    let classes = root.class_list();
    let result = if is_dark(theme, prefers_dark(&window)) {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if let Err(e) = result {
        log::warn!("could not switch theme: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_themes_ignore_the_system() {
        assert!(is_dark(Theme::Dark, false));
        assert!(!is_dark(Theme::Light, true));
    }

    #[test]
    fn system_theme_follows_preference() {
        assert!(is_dark(Theme::System, true));
        assert!(!is_dark(Theme::System, false));
    }
}
