//! Style prop taxonomy.
//!
//! Components accept style props directly (`color`, `px`, `_hover`, ...) next
//! to their DOM and behavioral props. This module knows which names are style
//! props so components can split the two before handing the rest to the
//! element.
//!
//! The registry is flat and closed: each name belongs to exactly one
//! [`StyleDomain`]. When two domains declare the same name, the domain merged
//! later in [`StyleDomain::ALL`] wins.
//!
//! ```rust
//! use stylekit::props::{filter_style_props, is_style_prop};
//!
//! assert!(is_style_prop("color"));
//! assert!(!is_style_prop("onClick"));
//! assert_eq!(filter_style_props(["color", "onClick", "id"]), vec!["color"]);
//! ```

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// The escape-hatch prop carrying an arbitrary style object.
pub const CSS_PROP: &str = "css";

/// Style domains, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleDomain {
    Border,
    Color,
    Flexbox,
    Grid,
    Interactivity,
    Layout,
    Margin,
    Padding,
    Position,
    Radii,
    Shadow,
    Size,
    Transform,
    Transition,
    Typography,
    PseudoSelector,
    Css,
}

impl StyleDomain {
    /// Every domain in precedence order (later wins on shared names).
    pub const ALL: [StyleDomain; 17] = [
        StyleDomain::Border,
        StyleDomain::Color,
        StyleDomain::Flexbox,
        StyleDomain::Grid,
        StyleDomain::Interactivity,
        StyleDomain::Layout,
        StyleDomain::Margin,
        StyleDomain::Padding,
        StyleDomain::Position,
        StyleDomain::Radii,
        StyleDomain::Shadow,
        StyleDomain::Size,
        StyleDomain::Transform,
        StyleDomain::Transition,
        StyleDomain::Typography,
        StyleDomain::PseudoSelector,
        StyleDomain::Css,
    ];

    /// Prop names declared by this domain.
    pub fn prop_names(self) -> &'static [&'static str] {
        match self {
            StyleDomain::Border => BORDER,
            StyleDomain::Color => COLOR,
            StyleDomain::Flexbox => FLEXBOX,
            StyleDomain::Grid => GRID,
            StyleDomain::Interactivity => INTERACTIVITY,
            StyleDomain::Layout => LAYOUT,
            StyleDomain::Margin => MARGIN,
            StyleDomain::Padding => PADDING,
            StyleDomain::Position => POSITION,
            StyleDomain::Radii => RADII,
            StyleDomain::Shadow => SHADOW,
            StyleDomain::Size => SIZE,
            StyleDomain::Transform => TRANSFORM,
            StyleDomain::Transition => TRANSITION,
            StyleDomain::Typography => TYPOGRAPHY,
            StyleDomain::PseudoSelector => PSEUDO_SELECTOR,
            StyleDomain::Css => &[CSS_PROP],
        }
    }
}

const BORDER: &[&str] = &[
    "border",
    "borderWidth",
    "borderStyle",
    "borderColor",
    "borderTop",
    "borderTopWidth",
    "borderTopStyle",
    "borderTopColor",
    "borderRight",
    "borderRightWidth",
    "borderRightStyle",
    "borderRightColor",
    "borderBottom",
    "borderBottomWidth",
    "borderBottomStyle",
    "borderBottomColor",
    "borderLeft",
    "borderLeftWidth",
    "borderLeftStyle",
    "borderLeftColor",
    "borderX",
    "borderY",
    "borderStart",
    "borderEnd",
    "borderRadius",
];

const COLOR: &[&str] = &[
    "color",
    "background",
    "bg",
    "backgroundColor",
    "bgColor",
    "backgroundImage",
    "backgroundSize",
    "backgroundPosition",
    "backgroundRepeat",
    "backgroundAttachment",
    "opacity",
];

const FLEXBOX: &[&str] = &[
    "alignItems",
    "alignContent",
    "alignSelf",
    "justifyItems",
    "justifyContent",
    "justifySelf",
    "flexDirection",
    "flexWrap",
    "flex",
    "flexFlow",
    "flexGrow",
    "flexShrink",
    "flexBasis",
    "order",
    "gap",
];

const GRID: &[&str] = &[
    "gridGap",
    "gridRowGap",
    "gridColumnGap",
    "gap",
    "rowGap",
    "columnGap",
    "gridColumn",
    "gridColumnStart",
    "gridColumnEnd",
    "gridRow",
    "gridRowStart",
    "gridRowEnd",
    "gridArea",
    "gridAutoFlow",
    "gridAutoRows",
    "gridAutoColumns",
    "gridTemplate",
    "gridTemplateRows",
    "gridTemplateColumns",
    "gridTemplateAreas",
    "placeItems",
    "placeContent",
    "placeSelf",
];

const INTERACTIVITY: &[&str] = &[
    "appearance",
    "userSelect",
    "pointerEvents",
    "resize",
    "cursor",
    "outline",
    "outlineOffset",
    "outlineColor",
];

const LAYOUT: &[&str] = &[
    "d",
    "display",
    "verticalAlign",
    "overflow",
    "overflowX",
    "overflowY",
    "visibility",
    "boxSizing",
    "float",
    "clear",
    "objectFit",
    "objectPosition",
    "isolation",
];

const MARGIN: &[&str] = &[
    "margin",
    "m",
    "marginTop",
    "mt",
    "marginRight",
    "mr",
    "marginBottom",
    "mb",
    "marginLeft",
    "ml",
    "marginX",
    "mx",
    "marginY",
    "my",
    "marginInlineStart",
    "marginInlineEnd",
];

const PADDING: &[&str] = &[
    "padding",
    "p",
    "paddingTop",
    "pt",
    "paddingRight",
    "pr",
    "paddingBottom",
    "pb",
    "paddingLeft",
    "pl",
    "paddingX",
    "px",
    "paddingY",
    "py",
    "paddingInlineStart",
    "paddingInlineEnd",
];

const POSITION: &[&str] = &[
    "position",
    "pos",
    "zIndex",
    "top",
    "right",
    "bottom",
    "left",
    "inset",
];

const RADII: &[&str] = &[
    "borderRadius",
    "rounded",
    "borderTopRightRadius",
    "borderTopLeftRadius",
    "borderBottomRightRadius",
    "borderBottomLeftRadius",
    "borderTopRadius",
    "borderRightRadius",
    "borderBottomRadius",
    "borderLeftRadius",
    "roundedTop",
    "roundedRight",
    "roundedBottom",
    "roundedLeft",
];

const SHADOW: &[&str] = &["shadow", "boxShadow", "textShadow"];

const SIZE: &[&str] = &[
    "width",
    "w",
    "minWidth",
    "minW",
    "maxWidth",
    "maxW",
    "height",
    "h",
    "minHeight",
    "minH",
    "maxHeight",
    "maxH",
    "boxSize",
];

const TRANSFORM: &[&str] = &["transform", "transformOrigin", "clipPath"];

const TRANSITION: &[&str] = &[
    "transition",
    "transitionProperty",
    "transitionTimingFunction",
    "transitionDuration",
    "transitionDelay",
    "animation",
    "willChange",
];

const TYPOGRAPHY: &[&str] = &[
    "fontFamily",
    "fontSize",
    "fontWeight",
    "lineHeight",
    "letterSpacing",
    "textAlign",
    "fontStyle",
    "textTransform",
    "textDecoration",
    "textOverflow",
    "whiteSpace",
    "wordBreak",
    "overflowWrap",
    "noOfLines",
];

const PSEUDO_SELECTOR: &[&str] = &[
    "_hover",
    "_active",
    "_focus",
    "_focusWithin",
    "_focusVisible",
    "_disabled",
    "_checked",
    "_invalid",
    "_readOnly",
    "_placeholder",
    "_before",
    "_after",
    "_first",
    "_last",
    "_odd",
    "_even",
    "_visited",
    "_selection",
    "_groupHover",
    "_groupFocus",
    "_groupChecked",
    "_groupDisabled",
];

static REGISTRY: Lazy<FxHashMap<&'static str, StyleDomain>> = Lazy::new(|| {
    let mut registry = FxHashMap::default();
    for domain in StyleDomain::ALL {
        for name in domain.prop_names() {
            registry.insert(*name, domain);
        }
    }
    registry
});

/// Returns true if `name` is a style prop.
pub fn is_style_prop(name: &str) -> bool {
    REGISTRY.contains_key(name)
}

/// Returns the domain that owns `name`.
pub fn domain_of(name: &str) -> Option<StyleDomain> {
    REGISTRY.get(name).copied()
}

/// Returns the number of distinct style prop names.
pub fn style_prop_count() -> usize {
    REGISTRY.len()
}

/// Returns the keys that are style props, in input order.
pub fn filter_style_props<I, K>(keys: I) -> Vec<K>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    keys.into_iter()
        .filter(|k| is_style_prop(k.as_ref()))
        .collect()
}

/// Splits a props map into `(style props, everything else)`, preserving order.
pub fn split_style_props<V>(props: IndexMap<String, V>) -> (IndexMap<String, V>, IndexMap<String, V>) {
    props
        .into_iter()
        .partition(|(key, _)| is_style_prop(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_returns_only_style_keys() {
        let keys = filter_style_props(["color", "onClick", "id"]);
        assert_eq!(keys, vec!["color"]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let keys = filter_style_props(vec!["id", "px", "color", "aria-label", "_hover", "css"]);
        assert_eq!(keys, vec!["px", "color", "_hover", "css"]);
    }

    #[test]
    fn test_css_prop_is_style_prop() {
        assert!(is_style_prop(CSS_PROP));
        assert_eq!(domain_of(CSS_PROP), Some(StyleDomain::Css));
    }

    #[test]
    fn test_later_domain_wins_shared_names() {
        // declared by both Border and Radii
        assert_eq!(domain_of("borderRadius"), Some(StyleDomain::Radii));
        // declared by both Flexbox and Grid
        assert_eq!(domain_of("gap"), Some(StyleDomain::Grid));
    }

    #[test]
    fn test_every_domain_contributes() {
        for domain in StyleDomain::ALL {
            assert!(
                domain
                    .prop_names()
                    .iter()
                    .any(|name| domain_of(name) == Some(domain)),
                "{:?} owns no names",
                domain
            );
        }
    }

    #[test]
    fn test_interactivity_names() {
        for name in [
            "appearance",
            "userSelect",
            "pointerEvents",
            "resize",
            "cursor",
            "outline",
            "outlineOffset",
            "outlineColor",
        ] {
            assert_eq!(domain_of(name), Some(StyleDomain::Interactivity));
        }
    }

    #[test]
    fn test_split_style_props() {
        let mut props = IndexMap::new();
        props.insert("id".to_string(), "x");
        props.insert("color".to_string(), "red");
        props.insert("role".to_string(), "row");
        props.insert("mx".to_string(), "$2");

        let (style, rest) = split_style_props(props);
        assert_eq!(style.keys().collect::<Vec<_>>(), vec!["color", "mx"]);
        assert_eq!(rest.keys().collect::<Vec<_>>(), vec!["id", "role"]);
    }

    #[test]
    fn test_registry_is_flat_union() {
        let declared: usize = StyleDomain::ALL
            .iter()
            .map(|d| d.prop_names().len())
            .sum();
        assert!(style_prop_count() <= declared);
        assert!(style_prop_count() > 150);
    }
}
