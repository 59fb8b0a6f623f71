//! Shorthand style props.
//!
//! A utility is a pure function from a prop value to a partial style object,
//! registered under one prop name: `px: "$4"` becomes
//! `{ paddingLeft: "$4", paddingRight: "$4" }`. Expansion runs before token
//! and media resolution, so the output is resolved like any other style.
//!
//! ```rust
//! use stylekit::{UtilityRegistry, StyleEntry};
//!
//! let utils = UtilityRegistry::default();
//! let out = utils.expand("noOfLines", &StyleEntry::from(2)).unwrap();
//! let keys: Vec<_> = out.keys().cloned().collect();
//! assert_eq!(
//!     keys,
//!     ["overflow", "display", "-webkit-box-orient", "-webkit-line-clamp"]
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::value::{StyleEntry, StyleObject};

/// A utility function.
pub type UtilityFn = Arc<dyn Fn(&StyleEntry) -> StyleObject + Send + Sync>;

/// Registry of utility props.
#[derive(Clone)]
pub struct UtilityRegistry {
    utils: FxHashMap<String, UtilityFn>,
}

impl fmt::Debug for UtilityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.utils.keys().collect();
        names.sort();
        f.debug_struct("UtilityRegistry")
            .field("utils", &names)
            .finish()
    }
}

impl UtilityRegistry {
    /// Creates an empty registry. Use [`UtilityRegistry::default`] for the built-ins.
    pub fn empty() -> Self {
        Self {
            utils: FxHashMap::default(),
        }
    }

    /// Registers a utility, returning `self` for chaining.
    pub fn with<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&StyleEntry) -> StyleObject + Send + Sync + 'static,
    {
        self.insert(name, f);
        self
    }

    pub fn insert<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&StyleEntry) -> StyleObject + Send + Sync + 'static,
    {
        self.utils.insert(name.into(), Arc::new(f));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.utils.contains_key(name)
    }

    /// Expands `name: value`, or returns `None` if `name` is not a utility.
    pub fn expand(&self, name: &str, value: &StyleEntry) -> Option<StyleObject> {
        self.utils.get(name).map(|f| f(value))
    }

    pub fn len(&self) -> usize {
        self.utils.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utils.is_empty()
    }

    fn alias(&mut self, name: &str, targets: &'static [&'static str]) {
        self.insert(name, move |value: &StyleEntry| {
            targets
                .iter()
                .map(|target| (*target, value.clone()))
                .collect()
        });
    }
}

/// Pseudo-selector props and the nested selector each one expands to.
pub const PSEUDO_SELECTORS: &[(&str, &str)] = &[
    ("_hover", "&:hover, &[data-hover]"),
    ("_active", "&:active, &[data-active]"),
    ("_focus", "&:focus, &[data-focus]"),
    ("_focusWithin", "&:focus-within"),
    ("_focusVisible", "&:focus-visible"),
    (
        "_disabled",
        "&[disabled], &[aria-disabled=true], &[data-disabled]",
    ),
    ("_checked", "&[aria-checked=true], &[data-checked]"),
    ("_invalid", "&[aria-invalid=true], &[data-invalid]"),
    (
        "_readOnly",
        "&[aria-readonly=true], &[readonly], &[data-readonly]",
    ),
    ("_placeholder", "&::placeholder"),
    ("_before", "&::before"),
    ("_after", "&::after"),
    ("_first", "&:first-of-type"),
    ("_last", "&:last-of-type"),
    ("_odd", "&:nth-of-type(odd)"),
    ("_even", "&:nth-of-type(even)"),
    ("_visited", "&:visited"),
    ("_selection", "&::selection"),
    (
        "_groupHover",
        "[role=group]:hover &, [role=group][data-hover] &, [data-group]:hover &, [data-group][data-hover] &",
    ),
    (
        "_groupFocus",
        "[role=group]:focus &, [role=group][data-focus] &, [data-group]:focus &, [data-group][data-focus] &",
    ),
    (
        "_groupChecked",
        "[role=group][data-checked] &, [data-group][data-checked] &",
    ),
    (
        "_groupDisabled",
        "[role=group][data-disabled] &, [data-group][data-disabled] &",
    ),
];

const ALIASES: &[(&str, &[&str])] = &[
    // background
    ("bg", &["background"]),
    ("bgColor", &["backgroundColor"]),
    // border
    ("borderX", &["borderLeft", "borderRight"]),
    ("borderY", &["borderTop", "borderBottom"]),
    ("borderStart", &["borderInlineStart"]),
    ("borderEnd", &["borderInlineEnd"]),
    // display
    ("d", &["display"]),
    // margin
    ("m", &["margin"]),
    ("mt", &["marginTop"]),
    ("mr", &["marginRight"]),
    ("mb", &["marginBottom"]),
    ("ml", &["marginLeft"]),
    ("mx", &["marginLeft", "marginRight"]),
    ("my", &["marginTop", "marginBottom"]),
    ("marginX", &["marginLeft", "marginRight"]),
    ("marginY", &["marginTop", "marginBottom"]),
    // padding
    ("p", &["padding"]),
    ("pt", &["paddingTop"]),
    ("pr", &["paddingRight"]),
    ("pb", &["paddingBottom"]),
    ("pl", &["paddingLeft"]),
    ("px", &["paddingLeft", "paddingRight"]),
    ("py", &["paddingTop", "paddingBottom"]),
    ("paddingX", &["paddingLeft", "paddingRight"]),
    ("paddingY", &["paddingTop", "paddingBottom"]),
    // position
    ("pos", &["position"]),
    // radii
    ("rounded", &["borderRadius"]),
    ("roundedTop", &["borderTopLeftRadius", "borderTopRightRadius"]),
    (
        "roundedRight",
        &["borderTopRightRadius", "borderBottomRightRadius"],
    ),
    (
        "roundedBottom",
        &["borderBottomLeftRadius", "borderBottomRightRadius"],
    ),
    ("roundedLeft", &["borderTopLeftRadius", "borderBottomLeftRadius"]),
    (
        "borderTopRadius",
        &["borderTopLeftRadius", "borderTopRightRadius"],
    ),
    (
        "borderRightRadius",
        &["borderTopRightRadius", "borderBottomRightRadius"],
    ),
    (
        "borderBottomRadius",
        &["borderBottomLeftRadius", "borderBottomRightRadius"],
    ),
    (
        "borderLeftRadius",
        &["borderTopLeftRadius", "borderBottomLeftRadius"],
    ),
    // shadow
    ("shadow", &["boxShadow"]),
    // size
    ("w", &["width"]),
    ("h", &["height"]),
    ("minW", &["minWidth"]),
    ("maxW", &["maxWidth"]),
    ("minH", &["minHeight"]),
    ("maxH", &["maxHeight"]),
    ("boxSize", &["width", "height"]),
];

/// Truncates text after a fixed number of lines.
pub fn no_of_lines(value: &StyleEntry) -> StyleObject {
    StyleObject::new()
        .set("overflow", "hidden")
        .set("display", "-webkit-box")
        .set("-webkit-box-orient", "vertical")
        .set("-webkit-line-clamp", value.clone())
}

impl Default for UtilityRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for (name, targets) in ALIASES {
            registry.alias(name, *targets);
        }
        registry.insert("noOfLines", no_of_lines);
        for (name, selector) in PSEUDO_SELECTORS {
            let selector: &'static str = *selector;
            registry.insert(*name, move |value: &StyleEntry| {
                StyleObject::new().set(selector, value.clone())
            });
        }
        registry
    }
}
