use std::path::Path;

use anyhow::Result;

use showreel_core::Deck;

pub async fn run(path: &Path) -> Result<()> {
    let deck = Deck::load(path).await?;

    let name = if deck.title.is_empty() {
        path.display().to_string()
    } else {
        deck.title.clone()
    };
    println!(
        "{}: {} slides, {} stats",
        name,
        deck.slides.len(),
        deck.stats.len()
    );

    for (i, slide) in deck.slides.iter().enumerate() {
        if let Some(image) = &slide.image {
            if !image.exists() {
                println!(
                    "  warning: slide {} image not found: {}",
                    i + 1,
                    image.display()
                );
            }
        }
    }

    for stat in &deck.stats {
        if stat.target == 0 {
            println!(
                "  note: stat '{}' has target 0 and completes instantly",
                stat.label
            );
        }
    }

    Ok(())
}
