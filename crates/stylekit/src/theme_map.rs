//! Property-to-scale mapping.
//!
//! The [`ThemeMap`] decides which token scale a property's `$token` references
//! resolve against: `padding: "$4"` looks in `space`, `color: "$primary9"` in
//! `colors`. A property without an entry never resolves bare `$token`
//! references; the explicit `$scale$token` form works everywhere.

use rustc_hash::FxHashMap;

const SPACE: &[&str] = &[
    "gap",
    "gridGap",
    "columnGap",
    "gridColumnGap",
    "rowGap",
    "gridRowGap",
    "inset",
    "insetBlock",
    "insetBlockEnd",
    "insetBlockStart",
    "insetInline",
    "insetInlineEnd",
    "insetInlineStart",
    "margin",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
    "marginBlock",
    "marginBlockEnd",
    "marginBlockStart",
    "marginInline",
    "marginInlineEnd",
    "marginInlineStart",
    "padding",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
    "paddingBlock",
    "paddingBlockEnd",
    "paddingBlockStart",
    "paddingInline",
    "paddingInlineEnd",
    "paddingInlineStart",
    "scrollMargin",
    "scrollMarginTop",
    "scrollMarginRight",
    "scrollMarginBottom",
    "scrollMarginLeft",
    "scrollPadding",
    "scrollPaddingTop",
    "scrollPaddingRight",
    "scrollPaddingBottom",
    "scrollPaddingLeft",
    "top",
    "right",
    "bottom",
    "left",
];

const COLORS: &[&str] = &[
    "background",
    "backgroundColor",
    "backgroundImage",
    "borderImage",
    "border",
    "borderBlock",
    "borderBlockEnd",
    "borderBlockStart",
    "borderBottom",
    "borderBottomColor",
    "borderColor",
    "borderInline",
    "borderInlineEnd",
    "borderInlineStart",
    "borderLeft",
    "borderLeftColor",
    "borderRight",
    "borderRightColor",
    "borderTop",
    "borderTopColor",
    "caretColor",
    "color",
    "columnRuleColor",
    "fill",
    "outline",
    "outlineColor",
    "stroke",
    "textDecorationColor",
];

const SIZES: &[&str] = &[
    "blockSize",
    "minBlockSize",
    "maxBlockSize",
    "inlineSize",
    "minInlineSize",
    "maxInlineSize",
    "width",
    "minWidth",
    "maxWidth",
    "height",
    "minHeight",
    "maxHeight",
    "flexBasis",
    "gridTemplateColumns",
    "gridTemplateRows",
    // Border and stroke widths resolve against sizes rather than a
    // dedicated borderWidths scale.
    "borderWidth",
    "borderTopWidth",
    "borderRightWidth",
    "borderBottomWidth",
    "borderLeftWidth",
    "strokeWidth",
];

const RADII: &[&str] = &[
    "borderRadius",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderBottomRightRadius",
    "borderBottomLeftRadius",
];

const SINGLES: &[(&str, &str)] = &[
    ("fontFamily", "fonts"),
    ("fontSize", "fontSizes"),
    ("fontWeight", "fontWeights"),
    ("letterSpacing", "letterSpacings"),
    ("lineHeight", "lineHeights"),
    ("boxShadow", "shadows"),
    ("textShadow", "shadows"),
    ("zIndex", "zIndices"),
    ("transition", "transitions"),
    ("borderStyle", "borderStyles"),
];

/// Maps CSS property names to token scale names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeMap {
    entries: FxHashMap<String, String>,
}

impl ThemeMap {
    /// Creates an empty map. Use [`ThemeMap::default`] for the built-in table.
    pub fn empty() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Adds or replaces an entry, returning `self` for chaining.
    pub fn with(mut self, property: impl Into<String>, scale: impl Into<String>) -> Self {
        self.insert(property, scale);
        self
    }

    pub fn insert(&mut self, property: impl Into<String>, scale: impl Into<String>) {
        self.entries.insert(property.into(), scale.into());
    }

    /// Returns the scale for a property. Accepts camelCase or kebab-case names.
    pub fn scale_for(&self, property: &str) -> Option<&str> {
        if let Some(scale) = self.entries.get(property) {
            return Some(scale);
        }
        if property.contains('-') && !property.starts_with('-') {
            return self
                .entries
                .get(&kebab_to_camel(property))
                .map(String::as_str);
        }
        None
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ThemeMap {
    fn default() -> Self {
        let mut map = Self::empty();
        for (props, scale) in [
            (SPACE, "space"),
            (COLORS, "colors"),
            (SIZES, "sizes"),
            (RADII, "radii"),
        ] {
            for prop in props {
                map.insert(*prop, scale);
            }
        }
        for (prop, scale) in SINGLES {
            map.insert(*prop, *scale);
        }
        map
    }
}

fn kebab_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '-' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_entries() {
        let map = ThemeMap::default();
        assert_eq!(map.scale_for("padding"), Some("space"));
        assert_eq!(map.scale_for("color"), Some("colors"));
        assert_eq!(map.scale_for("zIndex"), Some("zIndices"));
        assert_eq!(map.scale_for("cursor"), None);
    }

    #[test]
    fn test_border_widths_resolve_against_sizes() {
        let map = ThemeMap::default();
        for prop in [
            "borderWidth",
            "borderTopWidth",
            "borderRightWidth",
            "borderBottomWidth",
            "borderLeftWidth",
            "strokeWidth",
        ] {
            assert_eq!(map.scale_for(prop), Some("sizes"), "{}", prop);
        }
    }

    #[test]
    fn test_kebab_case_lookup() {
        let map = ThemeMap::default();
        assert_eq!(map.scale_for("background-color"), Some("colors"));
        assert_eq!(map.scale_for("-webkit-line-clamp"), None);
    }

    #[test]
    fn test_with_overrides_entry() {
        let map = ThemeMap::default().with("color", "brand");
        assert_eq!(map.scale_for("color"), Some("brand"));
    }

    #[test]
    fn test_empty() {
        let map = ThemeMap::empty().with("gap", "space");
        assert_eq!(map.len(), 1);
        assert_eq!(map.scale_for("padding"), None);
    }
}
