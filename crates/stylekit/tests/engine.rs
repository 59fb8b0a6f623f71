//! End-to-end tests for the style engine: resolution, caching and emission.

use stylekit::{merge_styles, style, Engine, Theme, ThemeMap, UtilityRegistry};

// ============================================================================
// Caching
// ============================================================================

#[test]
fn identical_styles_share_one_class() {
    let engine = Engine::new();
    let a = engine.css([&style! { "color" => "red", "p" => "$4" }]);
    let text = engine.css_text();

    let b = engine.css([&style! { "color" => "red", "p" => "$4" }]);
    assert_eq!(a, b);
    assert_eq!(engine.cache_len(), 1);
    assert_eq!(engine.css_text(), text);
}

#[test]
fn cache_hits_return_the_same_rules_text() {
    let engine = Engine::new();
    let style = style! { "p" => "$4", "@md" => style! { "p" => "$8" } };
    let miss = engine.css([&style]);
    let hit = engine.css([&style]);

    assert_eq!(hit.rules_text(), miss.rules_text());
    assert!(miss.rules_text().starts_with(&format!("{}{{padding:1rem}}", miss.selector())));
    assert!(engine.css_text().contains(miss.rules_text()));
}

#[test]
fn class_names_are_stable_across_engines() {
    let style = style! { "bg" => "$primary9", "_hover" => style! { "opacity" => 0.8 } };
    let first = Engine::new().css([&style]);
    let second = Engine::new().css([&style]);
    assert_eq!(first.class_name(), second.class_name());
}

#[test]
fn equivalent_spellings_share_one_class() {
    let engine = Engine::new();
    let shorthand = engine.css([&style! { "bg" => "$primary9" }]);
    let longhand = engine.css([&style! { "background" => "#3e63dd" }]);
    assert_eq!(shorthand, longhand);
}

#[test]
fn generated_class_is_known_to_engine() {
    let engine = Engine::new();
    let class = engine.css([&style! { "display" => "flex" }]);
    assert!(engine.contains(class.class_name()));
    assert!(!engine.contains("sk-c-unknown"));
    assert_eq!(class.selector(), format!(".{}", class.class_name()));
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn later_fragments_win() {
    let engine = Engine::new();
    let base = style! { "color" => "red", "m" => "$2" };
    let over = style! { "color" => "blue" };
    let class = engine.css([&base, &over]);

    let text = engine.css_text();
    assert!(text.contains("color:blue"));
    assert!(!text.contains("color:red"));
    assert!(text.contains("margin:0.5rem"));
    assert_eq!(class, engine.css([&merge_styles([&base, &over])]));
}

#[test]
fn numbers_gain_px_unless_unitless() {
    let engine = Engine::new();
    engine.css([&style! { "w" => 100, "opacity" => 0.5, "zIndex" => 10, "m" => 0 }]);
    let text = engine.css_text();
    assert!(text.contains("width:100px"));
    assert!(text.contains("opacity:0.5"));
    assert!(text.contains("z-index:10"));
    assert!(text.contains("margin:0"));
}

#[test]
fn negative_tokens_use_calc() {
    let engine = Engine::new();
    engine.css([&style! { "mt" => "-$4" }]);
    assert!(engine.css_text().contains("margin-top:calc(1rem * -1)"));
}

#[test]
fn unknown_tokens_pass_through() {
    let engine = Engine::new();
    engine.css([&style! { "color" => "$doesNotExist", "p" => "$space$nope" }]);
    let text = engine.css_text();
    assert!(text.contains("color:$doesNotExist"));
    assert!(text.contains("padding:$space$nope"));
}

#[test]
fn explicit_scale_reference() {
    let engine = Engine::new();
    engine.css([&style! { "boxShadow" => "0 0 0 2px $colors$primary9" }]);
    assert!(engine.css_text().contains("box-shadow:0 0 0 2px #3e63dd"));
}

#[test]
fn no_of_lines_truncates() {
    let engine = Engine::new();
    engine.css([&style! { "noOfLines" => 2 }]);
    let text = engine.css_text();
    assert!(text.contains("overflow:hidden"));
    assert!(text.contains("display:-webkit-box"));
    assert!(text.contains("-webkit-box-orient:vertical"));
    assert!(text.contains("-webkit-line-clamp:2"));
}

#[test]
fn responsive_values_become_media_rules() {
    let engine = Engine::new();
    let class = engine.css([&style! {
        "p" => style! { "@initial" => "$2", "@md" => "$4" },
    }]);
    let text = engine.css_text();
    assert!(text.contains(&format!("{}{{padding:0.5rem}}", class.selector())));
    assert!(text.contains(&format!(
        "@media (min-width: 768px){{{}{{padding:1rem}}}}",
        class.selector()
    )));
}

#[test]
fn custom_theme_and_registries() {
    let engine = Engine::builder()
        .prefix("app")
        .theme(Theme::new().add_token("colors", "brand", "#123456"))
        .theme_map(ThemeMap::empty().with("color", "colors"))
        .utils(UtilityRegistry::empty().with("ink", |value| {
            stylekit::StyleObject::new().set("color", value.clone())
        }))
        .build();

    let class = engine.css([&style! { "ink" => "$brand" }]);
    assert!(class.class_name().starts_with("app-c-"));
    assert!(engine.css_text().contains("color:#123456"));
}

// ============================================================================
// Emission
// ============================================================================

#[test]
fn groups_are_ordered_theme_global_styled() {
    let engine = Engine::new();
    engine.css([&style! { "color" => "red" }]);
    engine.global_css(&style! { "body" => style! { "margin" => 0 } });
    engine.create_theme("light", &Theme::base_light());

    let text = engine.css_text();
    let theme_at = text.find(".sk-t-light{").unwrap();
    let global_at = text.find("body{margin:0}").unwrap();
    let styled_at = text.find("color:red").unwrap();
    assert!(theme_at < global_at);
    assert!(global_at < styled_at);
}

#[test]
fn theme_class_exposes_custom_properties() {
    let engine = Engine::new();
    let class = engine.create_theme("dark", &Theme::base_dark());
    assert_eq!(class.class_name(), "sk-t-dark");
    assert_eq!(engine.token_var("colors", "neutral1"), "var(--sk-colors-neutral1)");
    assert!(engine.css_text().contains("--sk-colors-neutral1:#151718"));
}

#[test]
fn keyframes_are_named_and_deduplicated() {
    let engine = Engine::new();
    let frames = style! {
        "from" => style! { "opacity" => 0 },
        "to" => style! { "opacity" => 1 },
    };
    let name = engine.keyframes(&frames);
    assert!(name.starts_with("sk-k-"));
    let text = engine.css_text();
    assert!(text.contains(&format!("@keyframes {}{{from{{opacity:0}}to{{opacity:1}}}}", name)));

    assert_eq!(engine.keyframes(&frames), name);
    assert_eq!(engine.css_text(), text);
}
