//! CSS color parsing and legible-foreground selection.
//!
//! The foreground choice saturates: lightness is `(L - 0.5) * -10_000_000` percent, clamped to
//! `[0%, 100%]`, so every background lighter than mid-grey gets black text and every darker one
//! gets white text. It is not a WCAG contrast ramp.
// TODO: revisit the saturating multiplier once the mockups are checked against a proportional
// contrast curve.

use std::{cell::RefCell, collections::HashMap, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PreviewError, PreviewResult};

/// Foreground used when no usable background color is available.
pub const DEFAULT_FOREGROUND: &str = "#000000";
/// Foreground produced for dark backgrounds.
pub const LIGHT_FOREGROUND: &str = "hsl(0, 0%, 100%)";
/// Foreground produced for light backgrounds.
pub const DARK_FOREGROUND: &str = "hsl(0, 0%, 0%)";

const LIGHTNESS_MULTIPLIER: f64 = 10_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// 8-bit sRGB color with the alpha channel discarded.
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    const fn from_hex(value: u32) -> Self {
        Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Perceived lightness in `[0, 1]` using the sRGB luma coefficients.
    pub fn perceived_lightness(self) -> f64 {
        (f64::from(self.r) * 0.2126 + f64::from(self.g) * 0.7152 + f64::from(self.b) * 0.0722)
            / 255.0
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parses a CSS color (hex, `rgb()`/`rgba()`, `hsl()`/`hsla()`, or a named color).
///
/// # Errors
///
/// Returns [`PreviewError::InvalidColor`] for unrecognized syntax and for colors without a
/// paintable value (`transparent`, `none`, `currentcolor`).
pub fn parse_css_color(raw: &str) -> PreviewResult<Rgb> {
    let value = raw.trim();
    let invalid = || PreviewError::InvalidColor(raw.to_string());

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }

    static FUNCTION_REGEX: OnceLock<Regex> = OnceLock::new();
    let function_regex = FUNCTION_REGEX.get_or_init(|| {
        Regex::new(r"(?i)^(rgba?|hsla?)\(\s*([^()]*?)\s*\)$").expect("color function regex")
    });
    if let Some(captures) = function_regex.captures(value) {
        let args = split_arguments(&captures[2]);
        let parsed = if captures[1].to_ascii_lowercase().starts_with("rgb") {
            parse_rgb_arguments(&args)
        } else {
            parse_hsl_arguments(&args)
        };
        return parsed.ok_or_else(invalid);
    }

    named_color(value).ok_or_else(invalid)
}

/// Returns a foreground color that stays legible on `background`.
///
/// Absent, blank, or unparseable backgrounds yield [`DEFAULT_FOREGROUND`].
pub fn legible_foreground(background: Option<&str>) -> String {
    let Some(background) = background.filter(|value| !value.trim().is_empty()) else {
        return DEFAULT_FOREGROUND.to_string();
    };
    match parse_css_color(background) {
        Ok(rgb) => saturated_foreground(rgb.perceived_lightness()),
        Err(_) => DEFAULT_FOREGROUND.to_string(),
    }
}

fn saturated_foreground(perceived_lightness: f64) -> String {
    // `+ 0.0` folds a negative zero so the output never reads `-0%`.
    let lightness = ((perceived_lightness - 0.5) * -LIGHTNESS_MULTIPLIER).clamp(0.0, 100.0) + 0.0;
    format!("hsl(0, 0%, {lightness}%)")
}

#[derive(Debug, Default)]
/// Memoizes [`legible_foreground`] per distinct background value.
pub struct ContrastCache {
    entries: RefCell<HashMap<Option<String>, String>>,
}

impl ContrastCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn legible_foreground(&self, background: Option<&str>) -> String {
        let key = background.map(str::to_string);
        if let Some(hit) = self.entries.borrow().get(&key) {
            return hit.clone();
        }
        let color = legible_foreground(background);
        self.entries.borrow_mut().insert(key, color.clone());
        color
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 | 4 => {
            let mut channels = hex
                .chars()
                .take(3)
                .map(|c| c.to_digit(16).map(|digit| (digit * 17) as u8));
            Some(Rgb::new(channels.next()??, channels.next()??, channels.next()??))
        }
        6 | 8 => {
            let channel = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();
            Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

fn split_arguments(raw: &str) -> Vec<&str> {
    raw.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect()
}

fn parse_rgb_arguments(args: &[&str]) -> Option<Rgb> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    let channel = |token: &str| -> Option<u8> {
        let value = match token.strip_suffix('%') {
            Some(percent) => percent.parse::<f64>().ok()? * 255.0 / 100.0,
            None => token.parse::<f64>().ok()?,
        };
        Some(value.round().clamp(0.0, 255.0) as u8)
    };
    Some(Rgb::new(
        channel(args[0])?,
        channel(args[1])?,
        channel(args[2])?,
    ))
}

fn parse_hsl_arguments(args: &[&str]) -> Option<Rgb> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    let hue = args[0]
        .strip_suffix("deg")
        .unwrap_or(args[0])
        .parse::<f64>()
        .ok()?
        .rem_euclid(360.0);
    let percent = |token: &str| -> Option<f64> {
        Some((token.strip_suffix('%')?.parse::<f64>().ok()? / 100.0).clamp(0.0, 1.0))
    };
    Some(hsl_to_rgb(hue, percent(args[1])?, percent(args[2])?))
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let to_byte = |value: f64| ((value + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(to_byte(r), to_byte(g), to_byte(b))
}

fn named_color(name: &str) -> Option<Rgb> {
    let name = name.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, value)| Rgb::from_hex(*value))
}

const NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];
