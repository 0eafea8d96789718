use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll timeout in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while a transition or counter is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// Reduced-motion preference: never autoplay, shorten transitions
    #[serde(default)]
    pub reduced_motion: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            reduced_motion: false,
        }
    }
}

/// Easing curve applied to the slide transition offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    None,
    Linear,
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Autoplay advancement period in milliseconds
    #[serde(default = "default_autoplay_interval")]
    pub autoplay_interval_ms: u64,
    /// Slide transition duration in milliseconds; navigation is locked
    /// for exactly this window
    #[serde(default = "default_transition")]
    pub transition_ms: u64,
    /// Cooldown before autoplay restarts after a manual navigation
    #[serde(default = "default_resume_delay")]
    pub resume_delay_ms: u64,
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Minimum visible fraction for the carousel to count as in view
    #[serde(default = "default_carousel_threshold")]
    pub visibility_threshold: f64,
    /// Rows of slack added around the viewport for the in-view test
    #[serde(default = "default_visibility_margin")]
    pub visibility_margin_rows: u16,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: default_autoplay_interval(),
            transition_ms: default_transition(),
            resume_delay_ms: default_resume_delay(),
            easing: default_easing(),
            visibility_threshold: default_carousel_threshold(),
            visibility_margin_rows: default_visibility_margin(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Count-up animation duration in milliseconds
    #[serde(default = "default_counter_duration")]
    pub duration_ms: u64,
    /// Visible fraction of the stats section that arms the animation
    #[serde(default = "default_counter_threshold")]
    pub visibility_threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_counter_duration(),
            visibility_threshold: default_counter_threshold(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Minimum horizontal drag distance (cells) that counts as a swipe
    #[serde(default = "default_swipe_distance")]
    pub min_swipe_distance: u16,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_swipe_distance: default_swipe_distance(),
        }
    }
}

/// Key bindings in Vim-style notation
/// Format: "j", "G", "<C-d>" (Ctrl+d), "<S-Tab>", "<CR>", "<Left>", "<Home>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Advance to the next slide
    #[serde(default = "default_key_next_slide")]
    pub next_slide: String,
    /// Go back to the previous slide
    #[serde(default = "default_key_prev_slide")]
    pub prev_slide: String,
    /// Jump to the first slide
    #[serde(default = "default_key_first_slide")]
    pub first_slide: String,
    /// Jump to the last slide
    #[serde(default = "default_key_last_slide")]
    pub last_slide: String,
    /// Move the indicator cursor forward
    #[serde(default = "default_key_next_indicator")]
    pub next_indicator: String,
    /// Move the indicator cursor back
    #[serde(default = "default_key_prev_indicator")]
    pub prev_indicator: String,
    /// Activate the slide under the indicator cursor
    #[serde(default = "default_key_activate")]
    pub activate: String,
    /// Scroll the page down one row
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    /// Scroll the page up one row
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    /// Scroll the page down half a viewport
    #[serde(default = "default_key_page_down")]
    pub page_down: String,
    /// Scroll the page up half a viewport
    #[serde(default = "default_key_page_up")]
    pub page_up: String,
    /// Pause or resume autoplay
    #[serde(default = "default_key_toggle_autoplay")]
    pub toggle_autoplay: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next_slide: default_key_next_slide(),
            prev_slide: default_key_prev_slide(),
            first_slide: default_key_first_slide(),
            last_slide: default_key_last_slide(),
            next_indicator: default_key_next_indicator(),
            prev_indicator: default_key_prev_indicator(),
            activate: default_key_activate(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            page_down: default_key_page_down(),
            page_up: default_key_page_up(),
            toggle_autoplay: default_key_toggle_autoplay(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next_slide() -> String { "<Right>".to_string() }
fn default_key_prev_slide() -> String { "<Left>".to_string() }
fn default_key_first_slide() -> String { "<Home>".to_string() }
fn default_key_last_slide() -> String { "<End>".to_string() }
fn default_key_next_indicator() -> String { "<Tab>".to_string() }
fn default_key_prev_indicator() -> String { "<S-Tab>".to_string() }
fn default_key_activate() -> String { "<CR>".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_page_down() -> String { "<C-d>".to_string() }
fn default_key_page_up() -> String { "<C-u>".to_string() }
fn default_key_toggle_autoplay() -> String { "p".to_string() }

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u16 {
    60
}

fn default_autoplay_interval() -> u64 {
    5000
}

fn default_transition() -> u64 {
    600
}

fn default_resume_delay() -> u64 {
    1000
}

fn default_easing() -> EasingType {
    EasingType::Cubic
}

fn default_carousel_threshold() -> f64 {
    0.1
}

fn default_visibility_margin() -> u16 {
    2
}

fn default_counter_duration() -> u64 {
    2000
}

fn default_counter_threshold() -> f64 {
    0.5
}

fn default_swipe_distance() -> u16 {
    50
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Configuration file path: ~/.config/showreel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("showreel")
            .join("config.toml")
    }

    /// Log file path, kept out of the terminal the TUI owns
    pub fn log_path() -> PathBuf {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("showreel")
            .join("showreel.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.carousel.autoplay_interval_ms, 5000);
        assert_eq!(config.carousel.transition_ms, 600);
        assert_eq!(config.carousel.resume_delay_ms, 1000);
        assert_eq!(config.carousel.easing, EasingType::Cubic);
        assert_eq!(config.counter.duration_ms, 2000);
        assert!((config.counter.visibility_threshold - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.gesture.min_swipe_distance, 50);
        assert!(!config.ui.reduced_motion);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [carousel]
            autoplay_interval_ms = 3000

            [ui]
            reduced_motion = true
            "#,
        )
        .unwrap();
        assert_eq!(config.carousel.autoplay_interval_ms, 3000);
        assert_eq!(config.carousel.transition_ms, 600);
        assert!(config.ui.reduced_motion);
        assert_eq!(config.keymap.quit, "q");
    }

    #[test]
    fn test_easing_round_trip() {
        let toml_str = toml::to_string(&CarouselConfig::default()).unwrap();
        assert!(toml_str.contains("easing = \"cubic\""));
        let parsed: CarouselConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.easing, EasingType::Cubic);
    }
}
