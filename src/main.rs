// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};

mod app;
mod data;
mod events;
mod source;
mod ui;

use app::App;
use data::{StationConfig, StationState, ThresholdConfig, TrendConfig};
use source::{DataSource, FileSource, HttpSource};

#[derive(Parser, Debug)]
#[command(name = "pwsmon")]
#[command(about = "htop-style terminal monitor for Weather Underground personal weather stations")]
struct Args {
    /// The PWS station ID to query (e.g., KCOHOTSU8)
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    station_id: Option<String>,

    /// Weather Underground API key
    #[arg(short, long, env = "PWS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Replay observations from a JSON file instead of polling the API
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Update interval in seconds
    #[arg(short, long, default_value = "60")]
    interval: u64,

    /// Samples of history retained per metric
    #[arg(long, default_value = "60")]
    capacity: usize,

    /// Sparkline width in glyphs
    #[arg(long, default_value = "25")]
    width: usize,

    /// Samples averaged on each side of the trend comparison
    #[arg(long, default_value = "3")]
    trend_window: usize,

    /// Minimum absolute difference before a trend counts as movement
    #[arg(long, default_value = "0.05")]
    trend_epsilon: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let station_config = StationConfig {
        capacity: args.capacity,
        sparkline_width: args.width,
        trend: TrendConfig {
            window: args.trend_window,
            min_epsilon: args.trend_epsilon,
            ..TrendConfig::default()
        },
    };
    // Fail fast on bad configuration, before touching the terminal.
    let station = StationState::new(station_config, ThresholdConfig::default())
        .context("invalid station configuration")?;

    let interval = Duration::from_secs(args.interval.max(1));

    // Replay mode: poll a file by modification time
    if let Some(ref path) = args.file {
        let source = Box::new(FileSource::new(path));
        let label = path.display().to_string();
        return run_tui(source, station, label, interval);
    }

    // Live mode: background HTTP polling against the PWS API
    let Some(station_id) = args.station_id else {
        bail!("a station id is required unless --file is given");
    };
    let Some(api_key) = args.api_key else {
        bail!("an API key is required for live polling (--api-key or PWS_API_KEY)");
    };

    let rt = tokio::runtime::Runtime::new()?;
    let source = Box::new(HttpSource::spawn(rt.handle(), &station_id, &api_key, interval));

    // The runtime must outlive the TUI so the fetch task keeps running.
    run_tui(source, station, station_id, interval)
}

/// Run the TUI with the given data source
fn run_tui(
    source: Box<dyn DataSource>,
    station: StationState,
    station_id: String,
    refresh_interval: Duration,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Create app and load initial data
    let mut app = App::new(source, station, station_id, refresh_interval);
    app.reload_data();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut last_poll = Instant::now();

    // The sources are cheap to poll (mtime check / channel drain), so the
    // loop polls every second regardless of the fetch cadence.
    const POLL_INTERVAL: Duration = Duration::from_secs(1);

    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 14;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered =
                    ratatui::layout::Rect::new(0, area.height.saturating_sub(4) / 2, area.width, 5);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Min(10),   // Dashboard
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::dashboard::render(frame, app, chunks[1]);
            ui::common::render_status_bar(frame, app, chunks[2]);

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Check the source for new data periodically
        if last_poll.elapsed() >= POLL_INTERVAL {
            app.reload_data();
            last_poll = Instant::now();
        }
    }

    Ok(())
}
