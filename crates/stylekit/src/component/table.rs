//! Table and its sections.
//!
//! The table root resolves the boolean axes `striped`, `dense` and
//! `highlightOnHover` once and provides them through a [`TableContext`];
//! sections (`tbody`, `th`, `td`, ...) read that context instead of resolving
//! their own.
//!
//! ```rust
//! use stylekit::component::table::{self, provide_table, use_table_context};
//! use stylekit::{ThemeConfig, ThemeProvider, ComponentProps};
//!
//! let provider = ThemeProvider::new(ThemeConfig::default());
//! provider.provide(|| {
//!     let def = table::definition();
//!     let root = def
//!         .resolve_part_in_scope("table", &ComponentProps::new().flag("striped", true))
//!         .unwrap();
//!     provide_table(root.variants.clone(), || {
//!         assert!(use_table_context().unwrap().variants.is_on("striped"));
//!         let body = table::resolve_section("tbody", &ComponentProps::new()).unwrap();
//!         assert!(body.class_name.contains("sk-table__tbody"));
//!     });
//! });
//! ```

use std::rc::Rc;

use super::{ComponentDefinition, ComponentProps, ResolvedPart};
use crate::context::{provide, require_context};
use crate::error::Result;
use crate::provider::use_theme;
use crate::{style, Recipe, StyleObject, VariantProps};

pub const NAME: &str = "Table";

/// Variants resolved by the table root, shared with its sections.
#[derive(Debug, Clone, PartialEq)]
pub struct TableContext {
    pub variants: VariantProps,
}

/// Runs `f` with a table context in scope.
pub fn provide_table<R>(variants: VariantProps, f: impl FnOnce() -> R) -> R {
    provide(Rc::new(TableContext { variants }), f)
}

/// The enclosing table's context.
pub fn use_table_context() -> Result<Rc<TableContext>> {
    require_context("use_table_context", NAME)
}

/// Resolves a table section with the enclosing table's variants.
pub fn resolve_section(part: &str, instance: &ComponentProps) -> Result<ResolvedPart> {
    let ctx = use_theme()?;
    let table = use_table_context()?;
    Ok(definition().resolve_part_with(&ctx, part, table.variants.clone(), instance))
}

fn flag(recipe: Recipe, axis: &str, on: StyleObject) -> Recipe {
    recipe
        .variant(axis, "true", on)
        .variant(axis, "false", StyleObject::new())
        .default_variant(axis, "false")
}

fn cell(base: StyleObject) -> Recipe {
    flag(
        Recipe::new(base),
        "dense",
        style! { "px" => "$4", "py" => "$2" },
    )
}

/// The Table definition.
pub fn definition() -> ComponentDefinition {
    ComponentDefinition::new(NAME)
        .part(
            "table",
            Recipe::new(style! {
                "borderCollapse" => "collapse",
                "width" => "$full",
                "fontVariantNumeric" => "lining-nums tabular-nums",
            }),
        )
        .part("thead", Recipe::default())
        .part(
            "tbody",
            flag(
                flag(
                    Recipe::default(),
                    "striped",
                    style! {
                        "& tr:nth-of-type(odd)" => style! { "bg" => "$neutral2" },
                    },
                ),
                "highlightOnHover",
                style! {
                    "& tr:hover" => style! { "bg" => "$neutral3" },
                },
            ),
        )
        .part(
            "tfoot",
            Recipe::new(style! {
                "& tr:last-of-type th, & tr:last-of-type td" => style! { "borderBottomWidth" => 0 },
            }),
        )
        .part("tr", Recipe::default())
        .part(
            "th",
            cell(style! {
                "px" => "$6",
                "py" => "$3",
                "borderBottom" => "1px solid $neutral6",
                "color" => "$neutral11",
                "fontSize" => "$xs",
                "fontWeight" => "$semibold",
                "letterSpacing" => "$wider",
                "textAlign" => "start",
                "textTransform" => "uppercase",
            }),
        )
        .part(
            "td",
            cell(style! {
                "px" => "$6",
                "py" => "$4",
                "borderBottom" => "1px solid $neutral6",
                "textAlign" => "start",
            }),
        )
        .part(
            "caption",
            Recipe::new(style! {
                "px" => "$6",
                "py" => "$2",
                "captionSide" => "bottom",
                "color" => "$neutral11",
                "fontSize" => "$sm",
                "fontWeight" => "$medium",
                "textAlign" => "center",
            }),
        )
        .axis("striped", "false")
        .axis("dense", "false")
        .axis("highlightOnHover", "false")
}
