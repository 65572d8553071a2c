//! Fireside - a fireside storyteller for the terminal.
//!
//! Pick the ingredients of a bedtime story (who it is about, where it
//! happens, what goes wrong, how it ends, and what it teaches), choose a
//! language and a length, and let the model tell it. Every story is saved
//! to a local archive, and narration and illustrations can be requested
//! alongside the text.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a text-based interface suitable for scripting:
//!
//! ```bash
//! cargo run -p fireside -- --headless --character "Mei" --language malay --minutes 3
//! ```

mod app;
mod events;
mod form;
mod headless;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use fireside_core::{SessionConfig, StorySession};

use crate::app::App;
use crate::events::{handle_event, EventResult};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    // Help works without an API key.
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if std::env::var("OPENAI_API_KEY").is_err() {
        eprintln!("Error: OPENAI_API_KEY environment variable not set.");
        eprintln!("Please set it in a .env file or with: export OPENAI_API_KEY=your_key_here");
        std::process::exit(1);
    }

    if args.iter().any(|a| a == "--headless") {
        let (params, config) = headless::parse_from_args(&args[1..]);
        return headless::run_headless(params, config).await.map_err(|e| e.into());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let session = match StorySession::new(SessionConfig::new()) {
        Ok(session) => session,
        Err(e) => {
            disable_raw_mode()?;
            execute!(
                terminal.backend_mut(),
                LeaveAlternateScreen,
                DisableMouseCapture
            )?;
            eprintln!("Failed to start Fireside: {e}");
            std::process::exit(1);
        }
    };

    let app = App::new(session);
    let result = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

/// Main application loop. Generation and archive reloads run between
/// frames, with the status line updated before each blocking step.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render::render(frame, &app))?;

        if app.pending_archive_refresh {
            app.pending_archive_refresh = false;
            match app.session.archived_stories().await {
                Ok(records) => app.set_archive(records),
                Err(e) => {
                    app.set_archive(Vec::new());
                    app.set_status(format!("Failed to load stories: {e}"));
                }
            }
        }

        if let Some(params) = app.pending_generate.take() {
            app.generating = true;
            app.set_status("Generating your story...");
            terminal.draw(|frame| ui::render::render(frame, &app))?;

            match app.session.generate(&params).await {
                Ok(record) => {
                    app.show_story(record.clone());
                    app.set_status("Story generated successfully!");
                    terminal.draw(|frame| ui::render::render(frame, &app))?;

                    // The record is already on disk at this point.
                    app.set_status("Story saved successfully!");
                    app.pending_archive_refresh = true;
                    terminal.draw(|frame| ui::render::render(frame, &app))?;

                    if params.include_audio {
                        app.set_status("Generating audio...");
                        terminal.draw(|frame| ui::render::render(frame, &app))?;
                        match app.session.narrate(&record).await {
                            Ok(path) => {
                                app.audio_path = Some(path);
                                app.set_status("Audio generated successfully!");
                            }
                            Err(e) => app.set_status(format!("Failed to generate audio: {e}")),
                        }
                    }

                    if params.include_illustrations {
                        app.set_status("Illustrating...");
                        terminal.draw(|frame| ui::render::render(frame, &app))?;
                        match app.session.illustrate(&record).await {
                            Ok(urls) => {
                                app.image_urls = urls;
                                app.set_status("Illustration ready!");
                            }
                            Err(e) => {
                                app.set_status(format!("Failed to generate illustration: {e}"))
                            }
                        }
                    }
                }
                Err(e) => app.set_status(format!("{e}")),
            }

            app.generating = false;
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            match handle_event(&mut app, ev) {
                EventResult::Quit => app.should_quit = true,
                EventResult::StartGeneration => app.request_generate(),
                EventResult::Continue | EventResult::NeedsRedraw => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn print_help() {
    println!("Fireside - a fireside storyteller for the terminal");
    println!();
    println!("USAGE:");
    println!("  fireside [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help       Show this help message");
    println!("  --headless       Generate one story without the TUI and exit");
    println!();
    println!("HEADLESS OPTIONS (only with --headless):");
    println!("  --character <NAME>    Main character (default: Kai)");
    println!("  --setting <TEXT>      Where the story is set");
    println!("  --conflict <TEXT>     The challenge the character faces");
    println!("  --resolution <TEXT>   How the challenge resolves");
    println!("  --moral <TEXT>        The lesson of the story");
    println!("  --language <LANG>     english, chinese, or malay (default: english)");
    println!("  --minutes <1-10>      Length in minutes of listening time (default: 5)");
    println!("  --audio               Narrate the story to an mp3 file");
    println!("  --illustrate          Request an illustration for the story");
    println!("  --stories-dir <DIR>   Archive directory (default: saved_stories)");
    println!("  --audio-dir <DIR>     Narration directory (default: audio)");
    println!("  --model <NAME>        Override the chat model");
    println!();
    println!("ENVIRONMENT:");
    println!("  OPENAI_API_KEY    Required for story generation");
    println!("  OPENAI_BASE_URL   Optional alternate API endpoint");
    println!();
    println!("EXAMPLES:");
    println!("  fireside                               # Interactive TUI mode");
    println!("  fireside --headless                    # One story with defaults");
    println!("  fireside --headless --character Mei --language malay --minutes 3");
}
