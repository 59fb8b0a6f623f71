//! Built-in color palettes.
//!
//! Each palette is a 12-step scale: steps 1-2 are app backgrounds, 3-5
//! component backgrounds, 6-8 borders, 9-10 solid fills and 11-12 text.
//! Token names are `<palette><step>`, e.g. `primary9`.

use super::Scale;

type Steps = [&'static str; 12];

const PRIMARY_LIGHT: Steps = [
    "#fdfdfe", "#f8faff", "#f0f4ff", "#e6edfe", "#d9e2fc", "#c6d4f9", "#aec0f5", "#8da4ef",
    "#3e63dd", "#3a5ccc", "#3451b2", "#101d46",
];
const PRIMARY_DARK: Steps = [
    "#131620", "#15192d", "#192140", "#1c274f", "#1f2c5c", "#22346e", "#273e89", "#2f4eb2",
    "#3e63dd", "#5373e7", "#849dff", "#eef1fd",
];

const NEUTRAL_LIGHT: Steps = [
    "#fbfcfd", "#f8f9fa", "#f1f3f5", "#eceef0", "#e6e8eb", "#dfe3e6", "#d7dbdf", "#c1c8cd",
    "#889096", "#7e868c", "#687076", "#11181c",
];
const NEUTRAL_DARK: Steps = [
    "#151718", "#1a1d1e", "#202425", "#26292b", "#2b2f31", "#313538", "#3a3f42", "#4c5155",
    "#697177", "#787f85", "#9ba1a6", "#ecedee",
];

const SUCCESS_LIGHT: Steps = [
    "#fbfefc", "#f2fcf5", "#e9f9ee", "#ddf3e4", "#ccebd7", "#b4dfc4", "#92ceac", "#5bb98c",
    "#30a46c", "#299764", "#18794e", "#153226",
];
const SUCCESS_DARK: Steps = [
    "#0d1912", "#0c1f17", "#0f291e", "#123024", "#143a29", "#174933", "#1b543a", "#236e4a",
    "#30a46c", "#3cb179", "#4cc38a", "#e5fbeb",
];

const INFO_LIGHT: Steps = [
    "#fafdfe", "#f2fcfd", "#e7f9fb", "#d8f3f6", "#c4eaef", "#aadee6", "#84cdda", "#3db9cf",
    "#05a2c2", "#0894b3", "#0c7792", "#04313c",
];
const INFO_DARK: Steps = [
    "#07191d", "#061e24", "#072830", "#07303b", "#073844", "#064150", "#045063", "#007086",
    "#05a2c2", "#00b1cc", "#00c2d7", "#e1f8fa",
];

const WARNING_LIGHT: Steps = [
    "#fefdfb", "#fff9ed", "#fff4d5", "#ffecbc", "#ffe3a2", "#ffd386", "#f3ba63", "#ee9d2b",
    "#ffb224", "#ffa01c", "#ad5700", "#4e2009",
];
const WARNING_DARK: Steps = [
    "#1f1300", "#271700", "#341c00", "#3f2200", "#4a2900", "#573300", "#693f05", "#824e00",
    "#ffb224", "#ffcb47", "#f1a10d", "#fef3dd",
];

const DANGER_LIGHT: Steps = [
    "#fffcfc", "#fff8f8", "#ffefef", "#ffe5e5", "#fdd8d8", "#f9c6c6", "#f3aeaf", "#eb9091",
    "#e5484d", "#dc3d43", "#cd2b31", "#381316",
];
const DANGER_DARK: Steps = [
    "#1f1315", "#291415", "#3c181a", "#481a1d", "#541b1f", "#671e22", "#822025", "#aa2429",
    "#e5484d", "#f2555a", "#ff6369", "#feecee",
];

/// Palette names in the order they are registered.
pub const PALETTES: &[&str] = &["primary", "neutral", "success", "info", "warning", "danger"];

fn light_steps(palette: &str) -> Option<&'static Steps> {
    match palette {
        "primary" => Some(&PRIMARY_LIGHT),
        "neutral" => Some(&NEUTRAL_LIGHT),
        "success" => Some(&SUCCESS_LIGHT),
        "info" => Some(&INFO_LIGHT),
        "warning" => Some(&WARNING_LIGHT),
        "danger" => Some(&DANGER_LIGHT),
        _ => None,
    }
}

fn dark_steps(palette: &str) -> Option<&'static Steps> {
    match palette {
        "primary" => Some(&PRIMARY_DARK),
        "neutral" => Some(&NEUTRAL_DARK),
        "success" => Some(&SUCCESS_DARK),
        "info" => Some(&INFO_DARK),
        "warning" => Some(&WARNING_DARK),
        "danger" => Some(&DANGER_DARK),
        _ => None,
    }
}

fn add_palettes(scale: &mut Scale, steps_for: fn(&str) -> Option<&'static Steps>) {
    for palette in PALETTES {
        if let Some(steps) = steps_for(palette) {
            for (i, value) in steps.iter().enumerate() {
                scale.insert(format!("{}{}", palette, i + 1), (*value).to_string());
            }
        }
    }
}

/// Colors shared by both modes.
pub fn common_colors() -> Scale {
    [
        ("white", "#ffffff"),
        ("black", "#000000"),
        ("transparent", "transparent"),
        ("current", "currentColor"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Light mode colors: common colors, semantic aliases and light palettes.
pub fn light_colors() -> Scale {
    let mut scale = common_colors();
    scale.insert("background".into(), "#ffffff".into());
    scale.insert("loContrast".into(), "#ffffff".into());
    scale.insert("hiContrast".into(), NEUTRAL_LIGHT[11].into());
    scale.insert("focusRing".into(), PRIMARY_LIGHT[6].into());
    add_palettes(&mut scale, light_steps);
    scale
}

/// Dark mode colors, keyed like [`light_colors`].
pub fn dark_colors() -> Scale {
    let mut scale = Scale::new();
    scale.insert("background".into(), NEUTRAL_DARK[0].into());
    scale.insert("loContrast".into(), NEUTRAL_DARK[0].into());
    scale.insert("hiContrast".into(), NEUTRAL_DARK[11].into());
    scale.insert("focusRing".into(), PRIMARY_DARK[6].into());
    add_palettes(&mut scale, dark_steps);
    scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_colors_has_every_step() {
        let colors = light_colors();
        for palette in PALETTES {
            for step in 1..=12 {
                assert!(colors.contains_key(&format!("{}{}", palette, step)));
            }
        }
    }

    #[test]
    fn test_dark_colors_cover_light_palette_keys() {
        let light = light_colors();
        let dark = dark_colors();
        for key in dark.keys() {
            assert!(light.contains_key(key), "dark-only key {}", key);
        }
    }

    #[test]
    fn test_solid_step_differs_between_modes_for_text() {
        assert_ne!(light_colors()["neutral12"], dark_colors()["neutral12"]);
    }
}
