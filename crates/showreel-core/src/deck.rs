use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A slideshow deck: the slides shown by the carousel plus the numeric
/// stats animated underneath it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "slide")]
    pub slides: Vec<Slide>,
    #[serde(default, rename = "stat")]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Optional image file rendered inside the slide panel
    #[serde(default)]
    pub image: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    /// Count-up target. Accepts an integer or a numeric string; anything
    /// unparsable coerces to 0, which completes instantly.
    #[serde(default, deserialize_with = "lenient_target")]
    pub target: u64,
}

// Accept either an integer or a string for the target value
fn lenient_target<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct TargetVisitor;

    impl<'de> Visitor<'de> for TargetVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative integer or a numeric string")
        }

        fn visit_u64<E>(self, value: u64) -> Result<u64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<u64, E>
        where
            E: de::Error,
        {
            Ok(value.max(0) as u64)
        }

        fn visit_f64<E>(self, value: f64) -> Result<u64, E>
        where
            E: de::Error,
        {
            Ok(if value.is_finite() && value > 0.0 {
                value.floor() as u64
            } else {
                0
            })
        }

        fn visit_str<E>(self, value: &str) -> Result<u64, E>
        where
            E: de::Error,
        {
            Ok(value.trim().parse().unwrap_or(0))
        }
    }

    deserializer.deserialize_any(TargetVisitor)
}

impl Deck {
    /// Parse a deck from TOML text
    pub fn parse(content: &str) -> crate::Result<Self> {
        let deck: Deck =
            toml::from_str(content).map_err(|e| crate::Error::Deck(e.to_string()))?;
        deck.validate()?;
        Ok(deck)
    }

    /// Load a deck file
    pub async fn load(path: &Path) -> crate::Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let mut deck = Self::parse(&content)?;
        deck.resolve_image_paths(path.parent().unwrap_or_else(|| Path::new(".")));
        Ok(deck)
    }

    /// A deck must have at least one slide to show
    fn validate(&self) -> crate::Result<()> {
        if self.slides.is_empty() {
            return Err(crate::Error::Deck("deck has no slides".to_string()));
        }
        Ok(())
    }

    // Image paths are relative to the deck file, not the working directory
    fn resolve_image_paths(&mut self, base: &Path) {
        for slide in &mut self.slides {
            if let Some(image) = slide.image.take() {
                slide.image = Some(if image.is_relative() {
                    base.join(image)
                } else {
                    image
                });
            }
        }
    }

    /// Built-in demo deck used when no deck file is given
    pub fn builtin() -> Self {
        Self {
            title: "Showreel".to_string(),
            slides: vec![
                Slide {
                    title: "Welcome to Showreel".to_string(),
                    body: "A slideshow that lives in your terminal.\n\n\
                           Left/Right to navigate, or just wait:\n\
                           the deck advances on its own."
                        .to_string(),
                    image: None,
                },
                Slide {
                    title: "Swipe, too".to_string(),
                    body: "Drag the mouse across this panel and let go.\n\
                           A long enough horizontal drag flips the slide."
                        .to_string(),
                    image: None,
                },
                Slide {
                    title: "Scroll down".to_string(),
                    body: "There is more below the fold.\n\
                           Press j until the numbers come into view."
                        .to_string(),
                    image: None,
                },
            ],
            stats: vec![
                Stat {
                    label: "slides shown".to_string(),
                    target: 1200,
                },
                Stat {
                    label: "decks built".to_string(),
                    target: 87,
                },
                Stat {
                    label: "terminals harmed".to_string(),
                    target: 0,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_deck() {
        let deck = Deck::parse(
            r#"
            title = "Demo"

            [[slide]]
            title = "One"
            body = "first"

            [[slide]]
            title = "Two"
            "#,
        )
        .unwrap();
        assert_eq!(deck.title, "Demo");
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(deck.slides[1].body, "");
        assert!(deck.stats.is_empty());
    }

    #[test]
    fn test_empty_deck_rejected() {
        let err = Deck::parse("title = \"Empty\"").unwrap_err();
        assert!(matches!(err, crate::Error::Deck(_)));
    }

    #[test]
    fn test_stat_target_integer() {
        let deck = Deck::parse(
            r#"
            [[slide]]
            title = "s"

            [[stat]]
            label = "users"
            target = 250
            "#,
        )
        .unwrap();
        assert_eq!(deck.stats[0].target, 250);
    }

    #[test]
    fn test_stat_target_numeric_string() {
        let deck = Deck::parse(
            r#"
            [[slide]]
            title = "s"

            [[stat]]
            label = "users"
            target = " 42 "
            "#,
        )
        .unwrap();
        assert_eq!(deck.stats[0].target, 42);
    }

    #[test]
    fn test_stat_target_garbage_coerces_to_zero() {
        let deck = Deck::parse(
            r#"
            [[slide]]
            title = "s"

            [[stat]]
            label = "users"
            target = "plenty"
            "#,
        )
        .unwrap();
        assert_eq!(deck.stats[0].target, 0);
    }

    #[test]
    fn test_stat_target_missing_coerces_to_zero() {
        let deck = Deck::parse(
            r#"
            [[slide]]
            title = "s"

            [[stat]]
            label = "users"
            "#,
        )
        .unwrap();
        assert_eq!(deck.stats[0].target, 0);
    }

    #[test]
    fn test_stat_target_negative_clamps() {
        let deck = Deck::parse(
            r#"
            [[slide]]
            title = "s"

            [[stat]]
            label = "delta"
            target = -5
            "#,
        )
        .unwrap();
        assert_eq!(deck.stats[0].target, 0);
    }

    #[test]
    fn test_builtin_deck_valid() {
        let deck = Deck::builtin();
        assert!(deck.validate().is_ok());
        assert!(!deck.stats.is_empty());
    }
}
