//! A single-page smooth-scrolling demo for the terminal.
//!
//! Input moves the *real* scroll offset instantly; a fixed-rate frame clock
//! drives an exponential damper whose smoothed offset is what actually
//! translates the page.  Run the binary and scroll with the wheel or j/k.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Terminal,
};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    frame::FrameClock,
    handler,
    state::AppState,
};
use crate::config::{config_path, AppConfig};
use crate::core::page::{alternating_sections, Page};
use crate::ui::{page_widget::PageWidget, theme::Theme};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Single-page smooth-scrolling demo")]
struct Cli {
    /// Damping factor per frame, in (0, 1].  Smaller = smoother.
    #[arg(long)]
    easing: Option<f64>,

    /// Frame clock rate in frames per second.
    #[arg(long = "fps")]
    frame_rate: Option<u32>,

    /// Number of alternating content sections on the page.
    #[arg(long)]
    sections: Option<usize>,

    /// Ignore the config file and use built-in defaults.
    #[arg(long)]
    no_config: bool,

    /// Write the merged configuration to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

impl Cli {
    /// Layer CLI overrides on top of the loaded config.
    fn apply(&self, config: &mut AppConfig) {
        if let Some(easing) = self.easing {
            config.easing = easing.clamp(0.01, 1.0);
        }
        if let Some(fps) = self.frame_rate {
            config.frame_rate = fps.clamp(1, 240);
        }
        if let Some(sections) = self.sections {
            config.sections = sections.clamp(1, 100);
        }
    }
}

// ───────────────────────────────────────── main ──────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute the TUI on stdout
        .init();

    let cli = Cli::parse();

    let mut config = if cli.no_config {
        AppConfig::default()
    } else {
        AppConfig::load()
    };
    cli.apply(&mut config);

    // ── config-file mode ──────────────────────────────────────
    if cli.write_config {
        config.save()?;
        println!("wrote {}", config_path().display());
        return Ok(());
    }

    let page = Page::new(alternating_sections(config.sections));
    let mut state = AppState::new(page, config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // Measure before the first frame so the scroll range is valid from the
    // start — the layout always exists here, never a missing reference.
    let size = terminal.size()?;
    let (page_area, _) = split_area(Rect::new(0, 0, size.width, size.height));
    state.handle_resize(size.width, page_area.height);

    // ── async channels ────────────────────────────────────────
    let mut events = spawn_event_reader(Duration::from_millis(50));
    let (clock, mut frames) = FrameClock::spawn(state.config.frame_rate);

    // ── event loop ────────────────────────────────────────────
    // Input mutates the real offset; only a frame tick advances the damper
    // and redraws.  The clock is the sole driver of rendering.
    loop {
        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(&mut state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
                    AppEvent::Resize(w, h) => {
                        let (page_area, _) = split_area(Rect::new(0, 0, w, h));
                        state.handle_resize(w, page_area.height);
                    }
                }
            }

            Some(_frame) = frames.recv() => {
                // Collapse any backlog: one damper step + at most one draw
                // per loop pass, regardless of how late the terminal ran.
                while frames.try_recv().is_ok() {}

                if state.advance_frame() {
                    draw(&mut terminal, &mut state)?;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    // Stop the clock first: once cancelled, no frame message can reach a
    // restored terminal.
    clock.cancel();
    tracing::debug!("frame clock cancelled");

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

// ───────────────────────────────────────── drawing ───────────

/// Split the terminal into the scrolling page and the one-row status bar.
fn split_area(area: Rect) -> (Rect, Rect) {
    let [page, status] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
    (page, status)
}

fn draw(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    terminal.draw(|frame| {
        let (page_area, status_area) = split_area(frame.area());

        frame.render_widget(
            PageWidget::new(&state.page, state.scroll.row_offset()),
            page_area,
        );

        // The scrollbar mirrors the measured content height, so the thumb
        // reflects the true page extent even though rendering is detached
        // from the real offset.
        let mut bar = ScrollbarState::new(state.page.content_height() as usize)
            .viewport_content_length(page_area.height as usize)
            .position(state.scroll.current().round() as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Theme::scrollbar_style()),
            page_area,
            &mut bar,
        );

        // Status bar: the two-decimal readout is display-only — the damper
        // keeps running on the raw value.
        let status = Line::from(vec![
            Span::styled(
                format!(" {:8.2}", state.scroll.rounded()),
                Theme::status_value_style(),
            ),
            Span::styled(
                format!(" / {} rows   ", state.page.content_height()),
                Theme::status_bar_style(),
            ),
            Span::styled(
                "wheel/j/k scroll · PgUp/PgDn page · g/G ends · q quit",
                Theme::status_bar_style(),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(status).style(Theme::status_bar_style()),
            status_area,
        );
    })?;
    Ok(())
}
