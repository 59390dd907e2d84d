use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// A keyword category recognized in plan text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Elevator,
    Stair,
    WomensRr,
    MensRr,
    Restroom,
    Electrical,
    Data,
    Exit,
    /// Recognized but inert: no rows are generated for it yet.
    Lobby,
    BohMisc,
    Yoga,
    PrFit,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Elevator,
        Category::Stair,
        Category::WomensRr,
        Category::MensRr,
        Category::Restroom,
        Category::Electrical,
        Category::Data,
        Category::Exit,
        Category::Lobby,
        Category::BohMisc,
        Category::Yoga,
        Category::PrFit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Elevator => "ELEVATOR",
            Category::Stair => "STAIR",
            Category::WomensRr => "WOMENS_RR",
            Category::MensRr => "MENS_RR",
            Category::Restroom => "RESTROOM",
            Category::Electrical => "ELECTRICAL",
            Category::Data => "DATA",
            Category::Exit => "EXIT",
            Category::Lobby => "LOBBY",
            Category::BohMisc => "BOH_MISC",
            Category::Yoga => "YOGA",
            Category::PrFit => "PR_FIT",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// Order is the order categories are reported and rows are appended in.
const KEYWORD_PATTERNS: &[(&str, Category)] = &[
    (r"ELEV(?:ATOR|\.|\b)", Category::Elevator),
    (r"STAIR", Category::Stair),
    (r"WOMEN|LADIES|WOMEN'S|WOMAN|GIRLS|W\.?C\.?", Category::WomensRr),
    (r"MEN|MEN'S|BOYS|MENS|M\.?C\.?", Category::MensRr),
    (r"TOILET|RESTROOM|BATH", Category::Restroom),
    (r"ELECTRICAL", Category::Electrical),
    (r"DATA|IT CLOSET|IDF|MDF", Category::Data),
    (r"EXIT", Category::Exit),
    (r"LOBBY", Category::Lobby),
    (r"MECHANICAL|JANITOR|CUSTOD(?:IAL|IAN)", Category::BohMisc),
    (r"YOGA", Category::Yoga),
    (r"PR\s*FIT|PRFIT", Category::PrFit),
];

/// A case-insensitive, ASCII-only pattern mapped to the category it triggers.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub pattern: Regex,
    pub category: Category,
}

/// The fixed, ordered keyword table. Built once and shared read-only.
#[derive(Debug)]
pub struct KeywordTable {
    rules: Vec<KeywordRule>,
}

static BUILTIN: LazyLock<KeywordTable> = LazyLock::new(|| KeywordTable {
    rules: KEYWORD_PATTERNS
        .iter()
        .map(|(pattern, category)| KeywordRule {
            pattern: Regex::new(&format!("(?i-u){pattern}")).unwrap(),
            category: *category,
        })
        .collect(),
});

impl KeywordTable {
    pub fn builtin() -> &'static KeywordTable {
        &BUILTIN
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Every category whose pattern occurs anywhere in `text`, in table
    /// order. A category is reported once no matter how often it occurs.
    pub fn matches(&self, text: &str) -> Vec<Category> {
        self.rules
            .iter()
            .filter(|rule| rule.pattern.is_match(text))
            .map(|rule| rule.category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(text: &str) -> Vec<Category> {
        KeywordTable::builtin().matches(text)
    }

    #[test]
    fn test_table_covers_every_category_once() {
        let table = KeywordTable::builtin();
        assert_eq!(table.rules().len(), Category::ALL.len());
        for cat in Category::ALL {
            assert_eq!(
                table.rules().iter().filter(|r| r.category == cat).count(),
                1,
                "{cat}"
            );
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(matches("yoga studio"), vec![Category::Yoga]);
        assert_eq!(matches("Electrical Room"), vec![Category::Electrical]);
    }

    #[test]
    fn test_empty_text_matches_nothing() {
        assert!(matches("").is_empty());
        assert!(matches("   \n\t").is_empty());
    }

    #[test]
    fn test_stair_and_elevator_lobby() {
        assert_eq!(
            matches("STAIR A ELEVATOR LOBBY"),
            vec![Category::Elevator, Category::Stair, Category::Lobby]
        );
    }

    #[test]
    fn test_elev_abbreviation() {
        assert_eq!(matches("ELEV. 2"), vec![Category::Elevator]);
        assert_eq!(matches("ELEV"), vec![Category::Elevator]);
        // "ELEVEN" has no word boundary after ELEV and is not ELEVATOR
        assert!(!matches("ELEVEN").contains(&Category::Elevator));
        // non-ASCII letters are not word characters
        assert_eq!(matches("ELEV\u{e9}"), vec![Category::Elevator]);
    }

    #[test]
    fn test_womens_text_also_contains_men() {
        let cats = matches("WOMEN");
        assert!(cats.contains(&Category::WomensRr));
        assert!(cats.contains(&Category::MensRr));
    }

    #[test]
    fn test_repeated_keyword_reported_once() {
        assert_eq!(matches("EXIT EXIT exit"), vec![Category::Exit]);
    }

    #[test]
    fn test_boh_misc_variants() {
        for text in ["MECHANICAL", "janitor closet", "CUSTODIAL", "custodian"] {
            assert_eq!(matches(text), vec![Category::BohMisc], "{text}");
        }
    }

    #[test]
    fn test_pr_fit_spacing() {
        assert_eq!(matches("PR FIT"), vec![Category::PrFit]);
        assert_eq!(matches("prfit"), vec![Category::PrFit]);
    }

    #[test]
    fn test_data_aliases() {
        for text in ["IDF", "mdf", "IT CLOSET"] {
            assert!(matches(text).contains(&Category::Data), "{text}");
        }
    }
}
