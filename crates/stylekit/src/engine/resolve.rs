//! Normalization: responsive values, utility expansion and token resolution.
//!
//! `Resolver::normalize` turns an arbitrary style object into a canonical one in which
//! every declaration value is final CSS text:
//!
//! 1. `prop: { "@sm": a, "@md": b }` becomes `"@sm": { prop: a }`, ...
//! 2. utility props are replaced by their expansion
//! 3. `$token` references are resolved through the theme map
//! 4. numbers get `px` unless the property is unitless
//!
//! Nested selector and condition blocks are normalized recursively.

use crate::media::{is_condition_key, INITIAL_KEY};
use crate::theme_map::ThemeMap;
use crate::tokens::Theme;
use crate::utils::UtilityRegistry;
use crate::value::{CssValue, StyleEntry, StyleObject};

/// Everything normalization reads.
pub(crate) struct Resolver<'a> {
    pub theme: &'a Theme,
    pub theme_map: &'a ThemeMap,
    pub utils: &'a UtilityRegistry,
}

impl Resolver<'_> {
    /// Normalizes a style object.
    pub fn normalize(&self, style: &StyleObject) -> StyleObject {
        let mut out = StyleObject::new();
        for (key, entry) in style {
            self.process(&mut out, key, entry, true);
        }
        out
    }

    fn process(&self, out: &mut StyleObject, key: &str, entry: &StyleEntry, expand_utils: bool) {
        if is_condition_key(key) {
            if key == INITIAL_KEY {
                if let StyleEntry::Nested(block) = entry {
                    for (k, e) in block {
                        self.process(out, k, e, true);
                    }
                }
                return;
            }
            self.push_block(out, key, entry);
            return;
        }

        if let StyleEntry::Nested(block) = entry {
            if is_responsive(block) {
                for (condition, value) in block {
                    if condition == INITIAL_KEY {
                        self.process(out, key, value, expand_utils);
                    } else {
                        let wrapped = StyleObject::new().set(key, value.clone());
                        self.push_block(out, condition, &StyleEntry::Nested(wrapped));
                    }
                }
                return;
            }
        }

        if expand_utils {
            if let Some(expanded) = self.utils.expand(key, entry) {
                for (k, e) in &expanded {
                    self.process(out, k, e, false);
                }
                return;
            }
        }

        match entry {
            StyleEntry::Nested(_) => self.push_block(out, key, entry),
            StyleEntry::Value(value) => {
                let text = self.resolve_value(key, value);
                out.insert(key, text);
            }
        }
    }

    /// Normalizes a block and merges it one level deep into `out`.
    fn push_block(&self, out: &mut StyleObject, key: &str, entry: &StyleEntry) {
        let normalized = match entry {
            StyleEntry::Nested(block) => StyleEntry::Nested(self.normalize(block)),
            StyleEntry::Value(value) => StyleEntry::Value(value.clone()),
        };
        out.merge(&StyleObject::new().set(key, normalized));
    }

    /// Resolves a declaration value to CSS text.
    pub fn resolve_value(&self, property: &str, value: &CssValue) -> String {
        match value {
            CssValue::Number(n) => {
                if *n == 0.0 || is_unitless(property) {
                    n.to_string()
                } else {
                    format!("{}px", n)
                }
            }
            CssValue::Text(text) => {
                if text.contains('$') {
                    resolve_tokens(text, self.theme_map.scale_for(property), self.theme)
                } else {
                    text.clone()
                }
            }
        }
    }
}

/// A nested block whose keys are all conditions is a responsive value.
fn is_responsive(block: &StyleObject) -> bool {
    !block.is_empty() && block.keys().all(|k| is_condition_key(k))
}

const UNITLESS: &[&str] = &[
    "animationIterationCount",
    "aspectRatio",
    "columnCount",
    "columns",
    "fillOpacity",
    "flex",
    "flexGrow",
    "flexShrink",
    "floodOpacity",
    "fontWeight",
    "gridArea",
    "gridColumn",
    "gridColumnEnd",
    "gridColumnStart",
    "gridRow",
    "gridRowEnd",
    "gridRowStart",
    "lineClamp",
    "lineHeight",
    "opacity",
    "order",
    "orphans",
    "scale",
    "stopOpacity",
    "strokeMiterlimit",
    "strokeOpacity",
    "tabSize",
    "widows",
    "zIndex",
    "zoom",
];

/// Returns true if numeric values of `property` carry no unit.
pub(crate) fn is_unitless(property: &str) -> bool {
    if property.starts_with("--") {
        return true;
    }
    if property.starts_with('-') {
        // vendor-prefixed kebab names
        return property.ends_with("line-clamp")
            || property.ends_with("box-flex")
            || property.ends_with("box-ordinal-group");
    }
    UNITLESS.contains(&property)
}

/// Replaces `$token` and `$scale$token` references in `text`.
///
/// Unresolvable references are left exactly as written.
pub(crate) fn resolve_tokens(text: &str, default_scale: Option<&str>, theme: &Theme) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'$' {
            let next = text[i..].find('$').map_or(text.len(), |p| i + p);
            out.push_str(&text[i..next]);
            i = next;
            continue;
        }

        let start = i;
        let mut segments: Vec<&str> = Vec::new();
        while i < bytes.len() && bytes[i] == b'$' {
            let seg_start = i + 1;
            let mut end = seg_start;
            while end < bytes.len() && is_token_char(bytes[end]) {
                end += 1;
            }
            if end == seg_start {
                break;
            }
            segments.push(&text[seg_start..end]);
            i = end;
        }

        if segments.is_empty() {
            out.push('$');
            i = start + 1;
            continue;
        }

        let reference = &text[start..i];
        let (scale, token) = match segments.as_slice() {
            [token] => (default_scale, *token),
            [scale, token] => (Some(*scale), *token),
            _ => (None, ""),
        };

        let negative = out.ends_with('-') && {
            let before = &out[..out.len() - 1];
            before.is_empty() || before.ends_with(|c: char| c.is_whitespace() || c == '(' || c == ',')
        };

        match scale.and_then(|s| theme.resolve(s, token)) {
            Some(value) if negative => {
                out.pop();
                out.push_str(&format!("calc({} * -1)", value));
            }
            Some(value) => out.push_str(value),
            None => {
                tracing::trace!(reference, ?scale, "unresolved token passed through");
                out.push_str(reference);
            }
        }
    }

    out
}

fn is_token_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;

    fn resolver_parts() -> (Theme, ThemeMap, UtilityRegistry) {
        (
            Theme::base_light(),
            ThemeMap::default(),
            UtilityRegistry::default(),
        )
    }

    #[test]
    fn test_resolves_mapped_token() {
        let theme = Theme::base_light();
        assert_eq!(resolve_tokens("$4", Some("space"), &theme), "1rem");
        assert_eq!(
            resolve_tokens("$primary9", Some("colors"), &theme),
            "#3e63dd"
        );
    }

    #[test]
    fn test_unknown_token_passes_through() {
        let theme = Theme::base_light();
        assert_eq!(
            resolve_tokens("$doesNotExist", Some("colors"), &theme),
            "$doesNotExist"
        );
    }

    #[test]
    fn test_unmapped_property_passes_through() {
        let theme = Theme::base_light();
        assert_eq!(resolve_tokens("$4", None, &theme), "$4");
    }

    #[test]
    fn test_explicit_scale() {
        let theme = Theme::base_light();
        assert_eq!(resolve_tokens("$space$4", None, &theme), "1rem");
        assert_eq!(resolve_tokens("$colors$white", Some("space"), &theme), "#ffffff");
    }

    #[test]
    fn test_composite_value() {
        let theme = Theme::base_light();
        assert_eq!(
            resolve_tokens("1px solid $neutral7", Some("colors"), &theme),
            "1px solid #d7dbdf"
        );
        assert_eq!(
            resolve_tokens("$2 $4", Some("space"), &theme),
            "0.5rem 1rem"
        );
    }

    #[test]
    fn test_negative_token() {
        let theme = Theme::base_light();
        assert_eq!(
            resolve_tokens("-$4", Some("space"), &theme),
            "calc(1rem * -1)"
        );
        assert_eq!(
            resolve_tokens("0 -$2", Some("space"), &theme),
            "0 calc(0.5rem * -1)"
        );
    }

    #[test]
    fn test_lone_dollar_is_kept() {
        let theme = Theme::base_light();
        assert_eq!(resolve_tokens("a $ b", Some("colors"), &theme), "a $ b");
    }

    #[test]
    fn test_numbers_get_px_unless_unitless() {
        let (theme, theme_map, utils) = resolver_parts();
        let r = Resolver {
            theme: &theme,
            theme_map: &theme_map,
            utils: &utils,
        };
        assert_eq!(r.resolve_value("width", &CssValue::Number(10.0)), "10px");
        assert_eq!(r.resolve_value("margin", &CssValue::Number(0.0)), "0");
        assert_eq!(r.resolve_value("lineHeight", &CssValue::Number(1.5)), "1.5");
        assert_eq!(
            r.resolve_value("-webkit-line-clamp", &CssValue::Number(2.0)),
            "2"
        );
        assert_eq!(r.resolve_value("--my-var", &CssValue::Number(3.0)), "3");
    }

    #[test]
    fn test_normalize_expands_utilities_before_resolution() {
        let (theme, theme_map, utils) = resolver_parts();
        let r = Resolver {
            theme: &theme,
            theme_map: &theme_map,
            utils: &utils,
        };
        let out = r.normalize(&style! { "px" => "$4" });
        assert_eq!(
            out.get("paddingLeft").and_then(|e| e.as_text()),
            Some("1rem")
        );
        assert_eq!(
            out.get("paddingRight").and_then(|e| e.as_text()),
            Some("1rem")
        );
        assert!(!out.contains_key("px"));
    }

    #[test]
    fn test_normalize_responsive_value() {
        let (theme, theme_map, utils) = resolver_parts();
        let r = Resolver {
            theme: &theme,
            theme_map: &theme_map,
            utils: &utils,
        };
        let out = r.normalize(&style! {
            "color" => style! { "@initial" => "red", "@md" => "$primary9" }
        });
        assert_eq!(out.get("color").and_then(|e| e.as_text()), Some("red"));
        let md = out.get("@md").and_then(|e| e.as_nested()).unwrap();
        assert_eq!(md.get("color").and_then(|e| e.as_text()), Some("#3e63dd"));
    }

    #[test]
    fn test_normalize_responsive_utility() {
        let (theme, theme_map, utils) = resolver_parts();
        let r = Resolver {
            theme: &theme,
            theme_map: &theme_map,
            utils: &utils,
        };
        let out = r.normalize(&style! {
            "mx" => style! { "@sm" => "$2" }
        });
        let sm = out.get("@sm").and_then(|e| e.as_nested()).unwrap();
        assert_eq!(sm.get("marginLeft").and_then(|e| e.as_text()), Some("0.5rem"));
        assert_eq!(sm.get("marginRight").and_then(|e| e.as_text()), Some("0.5rem"));
    }

    #[test]
    fn test_normalize_pseudo_utility_contents() {
        let (theme, theme_map, utils) = resolver_parts();
        let r = Resolver {
            theme: &theme,
            theme_map: &theme_map,
            utils: &utils,
        };
        let out = r.normalize(&style! {
            "_hover" => style! { "bg" => "$primary3" }
        });
        let hover = out
            .get("&:hover, &[data-hover]")
            .and_then(|e| e.as_nested())
            .unwrap();
        assert_eq!(
            hover.get("background").and_then(|e| e.as_text()),
            Some("#f0f4ff")
        );
    }
}
