//! Tag: a compact label with optional icon and close button.

use super::{color_schemes, ComponentDefinition};
use crate::{style, Recipe, StyleObject, VariantProps};

pub const NAME: &str = "Tag";

const SIZES: &[(&str, &str, &str, &str)] = &[
    // size, min height, horizontal padding, font size
    ("sm", "$5", "$2", "$xs"),
    ("md", "$6", "$2", "$sm"),
    ("lg", "$8", "$3", "$base"),
];

fn variant_style(variant: &str, scheme: &str) -> StyleObject {
    match variant {
        "solid" => style! {
            "bg" => format!("${}9", scheme),
            "color" => "$white",
        },
        "outline" => style! {
            "bg" => "transparent",
            "color" => format!("${}11", scheme),
            "boxShadow" => format!("inset 0 0 0 1px $colors${}7", scheme),
        },
        "dot" => style! {
            "bg" => "transparent",
            "color" => "$neutral12",
            "border" => "1px solid $neutral7",
            "&::before" => style! {
                "content" => "''",
                "boxSize" => "$1_5",
                "rounded" => "$full",
                "mr" => "$1_5",
                "bg" => format!("${}9", scheme),
            },
        },
        _ => style! {
            "bg" => format!("${}4", scheme),
            "color" => format!("${}11", scheme),
        },
    }
}

fn root() -> Recipe {
    let mut recipe = Recipe::new(style! {
        "display" => "inline-flex",
        "alignItems" => "center",
        "maxWidth" => "$full",
        "rounded" => "$sm",
        "fontWeight" => "$medium",
        "lineHeight" => "$none",
        "outline" => "none",
    });

    for (size, min_height, px, font_size) in SIZES {
        recipe = recipe.variant(
            "size",
            *size,
            style! { "minHeight" => *min_height, "px" => *px, "fontSize" => *font_size },
        );
    }

    for variant in ["subtle", "solid", "outline", "dot"] {
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
        .default_variant("variant", "subtle")
        .default_variant("colorScheme", "neutral")
        .default_variant("size", "md")
}

/// The Tag definition.
pub fn definition() -> ComponentDefinition {
    ComponentDefinition::new(NAME)
        .part("root", root())
        .part(
            "label",
            Recipe::new(style! {
                "overflow" => "hidden",
                "textOverflow" => "ellipsis",
                "whiteSpace" => "nowrap",
            }),
        )
        .part(
            "icon",
            Recipe::new(style! { "flexShrink" => 0, "boxSize" => "1em" })
                .variant("placement", "left", style! { "mr" => "$1_5" })
                .variant("placement", "right", style! { "ml" => "$1_5" })
                .default_variant("placement", "left"),
        )
        .part(
            "closeButton",
            Recipe::new(style! {
                "display" => "inline-flex",
                "alignItems" => "center",
                "justifyContent" => "center",
                "ml" => "$1",
                "rounded" => "$full",
                "bg" => "transparent",
                "border" => "none",
                "color" => "currentColor",
                "opacity" => 0.6,
                "cursor" => "pointer",
                "_hover" => style! { "opacity" => 1 },
                "_disabled" => style! { "opacity" => 0.4, "cursor" => "not-allowed" },
            }),
        )
        .axis("variant", "subtle")
        .axis("colorScheme", "neutral")
        .axis("size", "md")
        .axis("placement", "left")
}
