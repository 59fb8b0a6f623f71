//! The base CSS reset.

use crate::{style, StyleObject};

/// Global reset styles, resolved against the active theme when injected.
pub fn reset_styles() -> StyleObject {
    style! {
        "*, ::before, ::after" => style! {
            "boxSizing" => "border-box",
            "borderWidth" => 0,
            "borderStyle" => "solid",
        },
        "*" => style! { "margin" => 0 },
        "html, body" => style! { "height" => "100%" },
        "html" => style! {
            "fontFamily" => "$sans",
            "lineHeight" => "$base",
            "fontSize" => "16px",
        },
        "body" => style! {
            "backgroundColor" => "$background",
            "color" => "$neutral12",
            "fontFamily" => "inherit",
            "lineHeight" => "inherit",
            "-webkit-font-smoothing" => "antialiased",
            "-moz-osx-font-smoothing" => "grayscale",
        },
        "h1, h2, h3, h4, h5, h6" => style! {
            "fontSize" => "inherit",
            "fontWeight" => "inherit",
        },
        "p, h1, h2, h3, h4, h5, h6" => style! { "overflowWrap" => "break-word" },
        "img, picture, video, canvas, svg" => style! {
            "display" => "block",
            "maxWidth" => "100%",
        },
        "button, input, textarea, select, optgroup" => style! {
            "fontFamily" => "inherit",
            "fontSize" => "100%",
        },
        "button:focus" => style! { "outline" => "5px auto -webkit-focus-ring-color" },
        "fieldset" => style! { "margin" => 0, "padding" => 0 },
        "ol, ul" => style! { "margin" => 0, "padding" => 0 },
        "a" => style! {
            "backgroundColor" => "transparent",
            "color" => "inherit",
            "textDecoration" => "inherit",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Engine, Theme};

    #[test]
    fn test_reset_resolves_theme_tokens() {
        let engine = Engine::new();
        let text = engine.global_css_with_theme(&Theme::base_dark(), &reset_styles());
        assert!(text.contains("body{background-color:#151718;color:#ecedee;"));
        assert!(text.contains("html{font-family:Inter, "));
        assert!(text.contains("line-height:1.5"));
    }

    #[test]
    fn test_reset_is_emitted_once() {
        let engine = Engine::new();
        engine.global_css(&reset_styles());
        let once = engine.css_text();
        engine.global_css(&reset_styles());
        assert_eq!(engine.css_text(), once);
    }
}
