//! Button.

use super::{color_schemes, ComponentDefinition};
use crate::{style, Recipe, StyleObject, VariantProps};

pub const NAME: &str = "Button";

const SIZES: &[(&str, &str, &str, &str)] = &[
    // size, height, horizontal padding, font size
    ("xs", "$6", "$2", "$xs"),
    ("sm", "$8", "$3", "$sm"),
    ("md", "$10", "$4", "$base"),
    ("lg", "$12", "$6", "$lg"),
    ("xl", "$14", "$8", "$xl"),
];

fn variant_style(variant: &str, scheme: &str) -> StyleObject {
    match variant {
        "subtle" => style! {
            "bg" => format!("${}4", scheme),
            "color" => format!("${}11", scheme),
            "_hover" => style! { "bg" => format!("${}5", scheme) },
            "_active" => style! { "bg" => format!("${}6", scheme) },
        },
        "outline" => style! {
            "bg" => "transparent",
            "color" => format!("${}11", scheme),
            "borderColor" => format!("${}7", scheme),
            "_hover" => style! { "bg" => format!("${}3", scheme), "borderColor" => format!("${}8", scheme) },
            "_active" => style! { "bg" => format!("${}4", scheme) },
        },
        "ghost" => style! {
            "bg" => "transparent",
            "color" => format!("${}11", scheme),
            "_hover" => style! { "bg" => format!("${}4", scheme) },
            "_active" => style! { "bg" => format!("${}5", scheme) },
        },
        _ => style! {
            "bg" => format!("${}9", scheme),
            "color" => "$white",
            "_hover" => style! { "bg" => format!("${}10", scheme) },
            "_active" => style! { "bg" => format!("${}10", scheme) },
        },
    }
}

fn root() -> Recipe {
    let mut recipe = Recipe::new(style! {
        "appearance" => "none",
        "position" => "relative",
        "display" => "inline-flex",
        "alignItems" => "center",
        "justifyContent" => "center",
        "gap" => "$2",
        "outline" => "none",
        "border" => "1px solid transparent",
        "rounded" => "$sm",
        "fontWeight" => "$medium",
        "lineHeight" => "$none",
        "whiteSpace" => "nowrap",
        "userSelect" => "none",
        "cursor" => "pointer",
        "transition" => "color 250ms, background-color 250ms, border-color 250ms, box-shadow 250ms",
        "_focusVisible" => style! { "boxShadow" => "0 0 0 3px $colors$focusRing" },
        "_disabled" => style! { "opacity" => 0.5, "cursor" => "not-allowed", "pointerEvents" => "none" },
    });

    for (size, height, px, font_size) in SIZES {
        recipe = recipe.variant(
            "size",
            *size,
            style! { "h" => *height, "px" => *px, "fontSize" => *font_size },
        );
    }

    for variant in ["solid", "subtle", "outline", "ghost"] {
        recipe = recipe.variant("variant", variant, StyleObject::new());
        for scheme in color_schemes() {
            recipe = recipe.compound(
                VariantProps::new()
                    .set("variant", variant)
                    .set("colorScheme", *scheme),
                variant_style(variant, scheme),
            );
        }
    }
    for scheme in color_schemes() {
        recipe = recipe.variant("colorScheme", *scheme, StyleObject::new());
    }

    recipe
        .variant("fullWidth", "true", style! { "w" => "$full" })
        .default_variant("variant", "solid")
        .default_variant("colorScheme", "primary")
        .default_variant("size", "md")
}

/// The Button definition.
pub fn definition() -> ComponentDefinition {
    ComponentDefinition::new(NAME)
        .part("root", root())
        .part(
            "icon",
            Recipe::new(style! {
                "display" => "inline-flex",
                "alignSelf" => "center",
                "flexShrink" => 0,
            }),
        )
        .axis("variant", "solid")
        .axis("colorScheme", "primary")
        .axis("size", "md")
        .axis("fullWidth", "false")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_size_has_style() {
        let recipe = root();
        for (size, ..) in SIZES {
            let sel = recipe.selection(&VariantProps::new().set("size", *size));
            assert!(recipe.fragments(&sel).iter().any(|f| f.contains_key("h")));
        }
    }

    #[test]
    fn test_full_width() {
        let recipe = root();
        let sel = recipe.selection(&VariantProps::new().flag("fullWidth", true));
        assert!(recipe.fragments(&sel).iter().any(|f| f.contains_key("w")));
    }
}
