//! Pull color-utility classes out of arbitrary source text.
//!
//! Text is split into class-like tokens; each token is then matched against
//! `[variant:]*[!][-]utility-family[-shade][/opacity]`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use shade_core::ShadeKey;

static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_:/!#\-\[\]]+").expect("token regex"));

static COLOR_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:[a-z0-9-]+:)*!?",
        r"(?P<utility>bg|text|border(?:-[trblxyse])?|ring-offset|ring|fill|stroke|from|via|to",
        r"|divide|outline|decoration|accent|caret|shadow|placeholder)",
        r"-(?P<family>[a-z][a-z0-9]*(?:-[a-z][a-z0-9]*)*)",
        r"(?:-(?P<shade>[0-9]{2,3}))?",
        r"(?:/[0-9]{1,3})?$",
    ))
    .expect("color class regex")
});

/// A class that looks like a color utility. `shade` is `None` for the bare
/// form (`text-brand`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCandidate {
    pub class: String,
    pub utility: String,
    pub family: String,
    pub shade: Option<ShadeKey>,
    /// 1-based.
    pub line: usize,
}

pub fn extract_candidates(source: &str) -> Vec<ColorCandidate> {
    let mut out = Vec::new();
    for (line_idx, line) in source.lines().enumerate() {
        for token in TOKEN.find_iter(line) {
            let class = token.as_str();
            let Some(caps) = COLOR_CLASS.captures(class) else {
                continue;
            };
            let shade = caps
                .name("shade")
                .and_then(|m| m.as_str().parse::<ShadeKey>().ok());
            out.push(ColorCandidate {
                class: class.to_string(),
                utility: caps["utility"].to_string(),
                family: caps["family"].to_string(),
                shade,
                line: line_idx + 1,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(source: &str) -> Vec<(String, String, Option<ShadeKey>)> {
        extract_candidates(source)
            .into_iter()
            .map(|c| (c.utility, c.family, c.shade))
            .collect()
    }

    #[test]
    fn test_plain_utilities() {
        let found = classes(r#"<div class="bg-blue-600 text-gray-300">"#);
        assert_eq!(
            found,
            vec![
                ("bg".into(), "blue".into(), Some(ShadeKey::Step(600))),
                ("text".into(), "gray".into(), Some(ShadeKey::Step(300))),
            ]
        );
    }

    #[test]
    fn test_variants_important_and_opacity() {
        let found = classes("hover:bg-blue-700 md:focus:!ring-gray-400 border-blue-700/50");
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].1, "blue");
        assert_eq!(found[1].0, "ring");
        assert_eq!(found[2].2, Some(ShadeKey::Step(700)));
    }

    #[test]
    fn test_side_borders_and_multi_word_families() {
        let found = classes("border-t-gray-800 border-teal-500 bg-sky-blue-200");
        assert_eq!(found[0].0, "border-t");
        assert_eq!(found[0].1, "gray");
        assert_eq!(found[1].0, "border");
        assert_eq!(found[1].1, "teal");
        assert_eq!(found[2].1, "sky-blue");
    }

    #[test]
    fn test_family_grammar_matches_config_rule() {
        let found = classes("bg-brand-dark-500 text-sky-blue2-300");
        assert_eq!(found[0].1, "brand-dark");
        assert_eq!(found[0].2, Some(ShadeKey::Step(500)));
        assert_eq!(found[1].1, "sky-blue2");
        // a digit segment is never part of a family name
        assert!(classes("bg-brand-2-500").is_empty());
    }

    #[test]
    fn test_bare_form_has_no_shade() {
        let found = classes("text-brand");
        assert_eq!(found, vec![("text".into(), "brand".into(), None)]);
    }

    #[test]
    fn test_non_color_utilities_ignored() {
        assert!(classes("text-2xl border-2 ring-offset-2 p-4 flex").is_empty());
        assert!(classes("let bg = background_600;").is_empty());
    }

    #[test]
    fn test_line_numbers() {
        let source = "fn view() {\n    html! { <p class=\"text-gray-900\"/> }\n}\n";
        let found = extract_candidates(source);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line, 2);
        assert_eq!(found[0].class, "text-gray-900");
    }
}
