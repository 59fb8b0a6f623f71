//! Built-in non-color scales.

use super::Scale;

fn scale(entries: &[(&str, &str)]) -> Scale {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

pub fn space() -> Scale {
    scale(&[
        ("px", "1px"),
        ("0_5", "0.125rem"),
        ("1", "0.25rem"),
        ("1_5", "0.375rem"),
        ("2", "0.5rem"),
        ("2_5", "0.625rem"),
        ("3", "0.75rem"),
        ("3_5", "0.875rem"),
        ("4", "1rem"),
        ("5", "1.25rem"),
        ("6", "1.5rem"),
        ("7", "1.75rem"),
        ("8", "2rem"),
        ("9", "2.25rem"),
        ("10", "2.5rem"),
        ("12", "3rem"),
        ("14", "3.5rem"),
        ("16", "4rem"),
        ("20", "5rem"),
        ("24", "6rem"),
        ("28", "7rem"),
        ("32", "8rem"),
        ("36", "9rem"),
        ("40", "10rem"),
        ("44", "11rem"),
        ("48", "12rem"),
        ("52", "13rem"),
        ("56", "14rem"),
        ("60", "15rem"),
        ("64", "16rem"),
        ("72", "18rem"),
        ("80", "20rem"),
        ("96", "24rem"),
    ])
}

/// Sizes include every space token plus named widths.
pub fn sizes() -> Scale {
    let mut sizes = space();
    sizes.extend(scale(&[
        ("prose", "65ch"),
        ("max", "max-content"),
        ("min", "min-content"),
        ("full", "100%"),
        ("screenW", "100vw"),
        ("screenH", "100vh"),
        ("xs", "20rem"),
        ("sm", "24rem"),
        ("md", "28rem"),
        ("lg", "32rem"),
        ("xl", "36rem"),
        ("2xl", "42rem"),
        ("3xl", "48rem"),
        ("4xl", "56rem"),
        ("5xl", "64rem"),
        ("6xl", "72rem"),
        ("7xl", "80rem"),
        ("8xl", "90rem"),
        ("containerSm", "640px"),
        ("containerMd", "768px"),
        ("containerLg", "1024px"),
        ("containerXl", "1280px"),
        ("container2xl", "1536px"),
    ]));
    sizes
}

pub fn fonts() -> Scale {
    scale(&[
        (
            "sans",
            "Inter, -apple-system, system-ui, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, sans-serif",
        ),
        ("serif", "Georgia, Cambria, \"Times New Roman\", Times, serif"),
        (
            "mono",
            "SFMono-Regular, Menlo, Monaco, Consolas, \"Liberation Mono\", \"Courier New\", monospace",
        ),
    ])
}

pub fn font_sizes() -> Scale {
    scale(&[
        ("2xs", "0.625rem"),
        ("xs", "0.75rem"),
        ("sm", "0.875rem"),
        ("base", "1rem"),
        ("lg", "1.125rem"),
        ("xl", "1.25rem"),
        ("2xl", "1.5rem"),
        ("3xl", "1.875rem"),
        ("4xl", "2.25rem"),
        ("5xl", "3rem"),
        ("6xl", "3.75rem"),
        ("7xl", "4.5rem"),
        ("8xl", "6rem"),
        ("9xl", "8rem"),
    ])
}

pub fn font_weights() -> Scale {
    scale(&[
        ("hairline", "100"),
        ("thin", "200"),
        ("light", "300"),
        ("normal", "400"),
        ("medium", "500"),
        ("semibold", "600"),
        ("bold", "700"),
        ("extrabold", "800"),
        ("black", "900"),
    ])
}

pub fn letter_spacings() -> Scale {
    scale(&[
        ("tighter", "-0.05em"),
        ("tight", "-0.025em"),
        ("normal", "0"),
        ("wide", "0.025em"),
        ("wider", "0.05em"),
        ("widest", "0.1em"),
    ])
}

pub fn line_heights() -> Scale {
    scale(&[
        ("normal", "normal"),
        ("none", "1"),
        ("shorter", "1.25"),
        ("short", "1.375"),
        ("base", "1.5"),
        ("tall", "1.625"),
        ("taller", "2"),
        ("3", ".75rem"),
        ("4", "1rem"),
        ("5", "1.25rem"),
        ("6", "1.5rem"),
        ("7", "1.75rem"),
        ("8", "2rem"),
        ("9", "2.25rem"),
        ("10", "2.5rem"),
    ])
}

pub fn radii() -> Scale {
    scale(&[
        ("none", "0"),
        ("xs", "0.125rem"),
        ("sm", "0.25rem"),
        ("md", "0.375rem"),
        ("lg", "0.5rem"),
        ("xl", "0.75rem"),
        ("2xl", "1rem"),
        ("3xl", "1.5rem"),
        ("full", "9999px"),
    ])
}

pub fn shadows() -> Scale {
    scale(&[
        ("xs", "0 0 0 1px rgba(0, 0, 0, 0.05)"),
        ("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
        (
            "md",
            "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
        ),
        (
            "lg",
            "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
        ),
        (
            "xl",
            "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
        ),
        ("2xl", "0 25px 50px -12px rgba(0, 0, 0, 0.25)"),
        ("inner", "inset 0 2px 4px 0 rgba(0,0,0,0.06)"),
        ("outline", "0 0 0 3px rgba(66, 153, 225, 0.6)"),
        ("none", "none"),
    ])
}

/// Shadows tuned for dark backgrounds. Keys without a dark value fall back
/// to [`shadows`].
pub fn dark_shadows() -> Scale {
    scale(&[
        ("xs", "0 0 0 1px rgba(0, 0, 0, 0.2)"),
        ("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.2)"),
        (
            "md",
            "0 4px 6px -1px rgba(0, 0, 0, 0.4), 0 2px 4px -1px rgba(0, 0, 0, 0.3)",
        ),
        (
            "lg",
            "0 10px 15px -3px rgba(0, 0, 0, 0.4), 0 4px 6px -2px rgba(0, 0, 0, 0.3)",
        ),
        (
            "xl",
            "0 20px 25px -5px rgba(0, 0, 0, 0.4), 0 10px 10px -5px rgba(0, 0, 0, 0.3)",
        ),
        ("2xl", "0 25px 50px -12px rgba(0, 0, 0, 0.5)"),
    ])
}

pub fn z_indices() -> Scale {
    scale(&[
        ("hide", "-1"),
        ("auto", "auto"),
        ("base", "0"),
        ("docked", "10"),
        ("sticky", "1000"),
        ("banner", "1100"),
        ("overlay", "1200"),
        ("modal", "1300"),
        ("dropdown", "1400"),
        ("popover", "1500"),
        ("skipLink", "1600"),
        ("toast", "1700"),
        ("tooltip", "1800"),
    ])
}
