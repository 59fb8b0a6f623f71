//! Switch: a label wrapping a track with a sliding thumb.
//!
//! Parts: `root` (the label), `control` (track and thumb), `label` (text).
//! Checked state is expressed on the element with `data-checked`.

use super::{color_schemes, ComponentDefinition};
use crate::{style, Recipe, StyleObject, VariantProps};

pub const NAME: &str = "Switch";

const SIZES: &[(&str, &str, &str, &str, &str)] = &[
    // size, track width, track height, thumb, font size
    ("sm", "26px", "16px", "12px", "$sm"),
    ("md", "34px", "20px", "16px", "$base"),
    ("lg", "50px", "28px", "24px", "$lg"),
];

fn root() -> Recipe {
    Recipe::new(style! {
        "position" => "relative",
        "display" => "inline-flex",
        "alignItems" => "center",
        "gap" => "$2",
        "cursor" => "pointer",
        "userSelect" => "none",
        "_disabled" => style! { "opacity" => 0.5, "cursor" => "not-allowed" },
    })
}

fn control() -> Recipe {
    let mut recipe = Recipe::new(style! {
        "position" => "relative",
        "display" => "inline-flex",
        "flexShrink" => 0,
        "alignItems" => "center",
        "rounded" => "$full",
        "border" => "1px solid transparent",
        "transition" => "background-color 250ms, border-color 250ms",
        "&::before" => style! {
            "content" => "''",
            "position" => "absolute",
            "left" => "2px",
            "rounded" => "$full",
            "transition" => "transform 250ms",
        },
        "_focusVisible" => style! { "boxShadow" => "0 0 0 3px $colors$focusRing" },
    })
    .variant(
        "variant",
        "filled",
        style! {
            "bg" => "$neutral7",
            "&::before" => style! { "bg" => "$white", "boxShadow" => "$sm" },
        },
    )
    .variant(
        "variant",
        "outline",
        style! {
            "bg" => "transparent",
            "borderColor" => "$neutral7",
            "&::before" => style! { "bg" => "$neutral7" },
        },
    );

    for (size, width, height, thumb, _) in SIZES {
        recipe = recipe.variant(
            "size",
            *size,
            style! {
                "width" => *width,
                "height" => *height,
                "&::before" => style! { "boxSize" => *thumb },
                "&[data-checked]::before" => style! {
                    "transform" => format!("translateX(calc({} - {} - 4px))", width, thumb),
                },
            },
        );
    }

    for scheme in color_schemes() {
        recipe = recipe
            .compound(
                VariantProps::new()
                    .set("variant", "filled")
                    .set("colorScheme", *scheme),
                style! {
                    "&[data-checked]" => style! { "bg" => format!("${}9", scheme) },
                },
            )
            .compound(
                VariantProps::new()
                    .set("variant", "outline")
                    .set("colorScheme", *scheme),
                style! {
                    "&[data-checked]" => style! { "borderColor" => format!("${}9", scheme) },
                    "&[data-checked]::before" => style! { "bg" => format!("${}9", scheme) },
                },
            );
    }

    // colorScheme has no standalone style; declaring it keeps it in the selection
    for scheme in color_schemes() {
        recipe = recipe.variant("colorScheme", *scheme, StyleObject::new());
    }

    recipe
        .default_variant("variant", "filled")
        .default_variant("colorScheme", "primary")
        .default_variant("size", "md")
}

fn label() -> Recipe {
    let mut recipe = Recipe::new(style! { "color" => "$neutral12" });
    for (size, _, _, _, font_size) in SIZES {
        recipe = recipe.variant("size", *size, style! { "fontSize" => *font_size });
    }
    recipe
}

/// The Switch definition.
pub fn definition() -> ComponentDefinition {
    ComponentDefinition::new(NAME)
        .part("root", root())
        .part("control", control())
        .part("label", label())
        .axis("variant", "filled")
        .axis("colorScheme", "primary")
        .axis("size", "md")
}
