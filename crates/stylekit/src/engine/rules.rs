//! Flattening normalized style objects into CSS rules, and rule text output.

use sha2::{Digest, Sha256};

use crate::media::{is_condition_key, Condition, MediaRegistry};
use crate::value::{StyleEntry, StyleObject};

/// Selector placeholder for the class being generated.
pub(crate) const ROOT: &str = "&";

/// One flat CSS rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rule {
    /// At-rule preludes, outermost first.
    pub conditions: Vec<String>,
    pub selector: String,
    pub declarations: Vec<(String, String)>,
}

impl Rule {
    fn render(&self, out: &mut String) {
        for condition in &self.conditions {
            out.push_str(condition);
            out.push('{');
        }
        out.push_str(&self.selector);
        out.push('{');
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            out.push_str(property);
            out.push(':');
            out.push_str(value);
        }
        out.push('}');
        for _ in &self.conditions {
            out.push('}');
        }
    }
}

/// Flattens a normalized style object rooted at `root`.
///
/// Declarations of a block come before the rules of its nested blocks;
/// nested blocks keep their input order.
pub(crate) fn flatten(style: &StyleObject, root: &str, media: &MediaRegistry) -> Vec<Rule> {
    let mut rules = Vec::new();
    walk(style, root, &[], media, &mut rules);
    rules
}

fn walk(
    style: &StyleObject,
    selector: &str,
    conditions: &[String],
    media: &MediaRegistry,
    rules: &mut Vec<Rule>,
) {
    let slot = rules.len();
    rules.push(Rule {
        conditions: conditions.to_vec(),
        selector: selector.to_string(),
        declarations: Vec::new(),
    });

    for (key, entry) in style {
        match entry {
            StyleEntry::Value(value) => {
                rules[slot]
                    .declarations
                    .push((to_kebab_case(key), value.to_string()));
            }
            StyleEntry::Nested(block) if is_condition_key(key) => match media.expand(key) {
                Condition::Initial => walk(block, selector, conditions, media, rules),
                Condition::AtRule(prelude) => {
                    let mut nested = conditions.to_vec();
                    nested.push(prelude);
                    walk(block, selector, &nested, media, rules);
                }
            },
            StyleEntry::Nested(block) => {
                let nested = nest_selector(selector, key);
                walk(block, &nested, conditions, media, rules);
            }
        }
    }

    if rules[slot].declarations.is_empty() {
        rules.remove(slot);
    }
}

/// Combines a parent selector list with a nested key.
///
/// `&` in the key stands for the parent. A key starting with `:` attaches to
/// the parent; any other key selects descendants.
pub(crate) fn nest_selector(parent: &str, child: &str) -> String {
    let parents = split_selector_list(parent);
    let children = split_selector_list(child);
    let mut combined = Vec::with_capacity(parents.len() * children.len());
    for p in &parents {
        for c in &children {
            if c.contains('&') {
                combined.push(c.replace('&', p));
            } else if c.starts_with(':') {
                combined.push(format!("{}{}", p, c));
            } else {
                combined.push(format!("{} {}", p, c));
            }
        }
    }
    combined.join(", ")
}

/// Splits a selector list on top-level commas.
fn split_selector_list(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth -= 1,
            (None, ',') if depth == 0 => {
                parts.push(list[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(list[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}

/// Converts a camelCase property name to kebab-case.
///
/// Custom properties and names that already contain `-` are kept as-is.
/// Vendor prefixes (`WebkitX`, `msX`) gain their leading dash.
pub(crate) fn to_kebab_case(property: &str) -> String {
    if property.contains('-') {
        return property.to_string();
    }
    let mut out = String::with_capacity(property.len() + 4);
    if property.starts_with("ms") && property[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
        out.push('-');
    }
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Renders rules to CSS text, one rule per line.
pub(crate) fn render(rules: &[Rule]) -> String {
    let mut out = String::new();
    for (i, rule) in rules.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        rule.render(&mut out);
    }
    out
}

/// Replaces the root placeholder in every selector with `selector`.
pub(crate) fn bind_root(rules: &[Rule], selector: &str) -> Vec<Rule> {
    rules
        .iter()
        .map(|rule| Rule {
            conditions: rule.conditions.clone(),
            selector: rule.selector.replace(ROOT, selector),
            declarations: rule.declarations.clone(),
        })
        .collect()
}

/// Short hash of canonical rule text: the first 8 bytes of its SHA-256,
/// in base 36. Identical on every target, so class names extracted on a
/// server match those generated anywhere else.
pub(crate) fn hash_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    let digest = hasher.finalize();
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    to_base36(u64::from_be_bytes(prefix))
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::with_capacity(13);
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    buf.into_iter().map(char::from).collect()
}

/// Serializes `name` as a CSS identifier, escaping where needed.
pub(crate) fn ident(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    // Writing into a String cannot fail.
    let _ = cssparser::serialize_identifier(name, &mut out);
    out
}

/// `.class` selector for a class name.
pub(crate) fn class_selector(class_name: &str) -> String {
    format!(".{}", ident(class_name))
}
