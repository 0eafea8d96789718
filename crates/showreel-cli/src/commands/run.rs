use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::info;

use showreel_core::{AppConfig, Deck};
use showreel_tui::{
    app::{App, BANNER_HEIGHT, CAROUSEL_HEIGHT, CAROUSEL_TOP, FOOTER_HEIGHT, STATS_HEIGHT, STATS_TOP},
    event::{AppEvent, EventHandler, ImageLoadResult},
    input::{handle_key_event, Action},
    keymap::Keymap,
    visibility::section_screen_rect,
    widgets::{BannerWidget, CarouselWidget, FooterWidget, StatsWidget, StatusBarWidget},
};

pub async fn run(config: Arc<AppConfig>, deck_path: Option<PathBuf>) -> Result<()> {
    let deck = match deck_path {
        Some(path) => Deck::load(&path).await?,
        None => Deck::builtin(),
    };
    info!(
        "presenting '{}': {} slides, {} stats",
        deck.title,
        deck.slides.len(),
        deck.stats.len()
    );

    let keymap = Keymap::from_config(&config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle("Showreel")
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone(), deck);

    // Decode slide images off the event loop
    let (img_tx, mut img_rx) = mpsc::unbounded_channel::<ImageLoadResult>();
    spawn_image_loads(&app, &img_tx);

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    // Checked at the END of each iteration to pick the NEXT iteration's
    // poll rate, so a fresh transition gets animation frames immediately
    let mut needs_fast_update = false;

    // Main loop
    loop {
        // Process completed image decodes (non-blocking)
        while let Ok(result) = img_rx.try_recv() {
            app.handle_image_result(result);
        }

        // Fire due transition/autoplay/resume deadlines
        app.carousel.tick();

        terminal.draw(|frame| draw(frame, &mut app))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app, &keymap);
                    handle_action(&mut app, action);
                }
                AppEvent::Mouse(mouse) => app.on_mouse(mouse),
                AppEvent::FocusGained => app.on_focus_gained(),
                AppEvent::FocusLost => app.on_focus_lost(),
                AppEvent::Resize(_, _) => {
                    // Layout and scroll clamp are recomputed on draw
                }
                AppEvent::Tick => {}
            }
        }

        // Visibility reacts to whatever scrolling the event did
        app.update_visibility();

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    // Main layout: scrolling page + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);
    let page = main_layout[0];

    app.viewport_height = page.height;
    app.scroll = app.scroll.min(app.max_scroll());

    if let Some(rect) = section_screen_rect(page, 0, BANNER_HEIGHT, app.scroll) {
        BannerWidget::render(frame, rect, app);
    }

    match section_screen_rect(page, CAROUSEL_TOP, CAROUSEL_HEIGHT, app.scroll) {
        Some(rect) => CarouselWidget::render(frame, rect, app),
        None => {
            app.carousel_area = None;
            app.indicator_area = None;
            app.prev_button_area = None;
            app.next_button_area = None;
        }
    }

    if !app.deck.stats.is_empty() {
        if let Some(rect) = section_screen_rect(page, STATS_TOP, STATS_HEIGHT, app.scroll) {
            StatsWidget::render(frame, rect, app);
        }
    }

    if let Some(rect) = section_screen_rect(page, app.footer_top(), FOOTER_HEIGHT, app.scroll) {
        FooterWidget::render(frame, rect, app);
    }

    StatusBarWidget::render(frame, main_layout[1], app);
}

fn handle_action(app: &mut App, action: Action) {
    // Carousel keys only act while the carousel is in the focus region
    if action.needs_carousel_focus() && !app.carousel_has_focus() {
        return;
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::NextSlide => app.carousel.next(),
        Action::PrevSlide => app.carousel.prev(),
        Action::FirstSlide => app.carousel.go_to(0),
        Action::LastSlide => {
            let last = app.carousel.slide_count().saturating_sub(1);
            app.carousel.go_to(last);
        }
        Action::GoToSlide(index) => app.carousel.go_to(index),
        Action::NextIndicator => app.next_indicator(),
        Action::PrevIndicator => app.prev_indicator(),
        Action::Activate => app.activate_indicator(),
        Action::ScrollDown => app.scroll_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::PageDown => app.page_down(),
        Action::PageUp => app.page_up(),
        Action::ToggleAutoplay => app.toggle_autoplay(),
        Action::None => {}
    }
}

/// Spawn one decode task per slide image; results come back over the
/// channel and are drained by the main loop
fn spawn_image_loads(app: &App, tx: &mpsc::UnboundedSender<ImageLoadResult>) {
    for (index, slide) in app.deck.slides.iter().enumerate() {
        let Some(path) = slide.image.clone() else {
            continue;
        };
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = match tokio::fs::read(&path).await {
                Ok(bytes) => match image::load_from_memory(&bytes) {
                    Ok(img) => ImageLoadResult::Success {
                        slide: index,
                        image: img,
                    },
                    Err(e) => ImageLoadResult::Failure {
                        slide: index,
                        error: e.to_string(),
                    },
                },
                Err(e) => ImageLoadResult::Failure {
                    slide: index,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(result);
        });
    }
}
