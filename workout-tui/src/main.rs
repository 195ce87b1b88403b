mod app;
mod cli;
mod config;
mod logging;
mod report;
mod runtime;
mod ui;

use anyhow::{Context, Result};
use app::{App, AppStore};
use clap::Parser;
use cli::{Cli, Commands};
use config::WorkoutConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;
use workout_core::{EntryStore, FileStorage, MemoryStorage, Storage, STORAGE_KEY};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = WorkoutConfig::load()?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let data_dir = cfg.data_dir()?;
            logging::init(&data_dir, &cfg.log_level)?;
            let store = load_store(Box::new(FileStorage::new(&data_dir)))?;
            info!(data_dir = %data_dir.display(), entries = store.len(), "starting");
            run_tui(App::new(store, cfg.page_length()))
        }
        Commands::Dev => {
            logging::init(&cfg.data_dir()?, &cfg.log_level)?;
            let store = load_store(Box::new(MemoryStorage::new()))?;
            info!("starting in dev mode with in-memory storage");
            let mut app = App::new(store, cfg.page_length());
            app.set_status("Dev mode: changes are not saved");
            run_tui(app)
        }
        Commands::List {
            search,
            workout_type,
            page,
            page_size,
        } => {
            let store = load_store(Box::new(FileStorage::new(cfg.data_dir()?)))?;
            let page_length = page_size.unwrap_or_else(|| cfg.page_length());
            let view = report::list_view(search, workout_type, page, page_length);
            report::write_page(&mut io::stdout().lock(), store.entries(), &view)?;
            Ok(())
        }
        Commands::Reset => {
            let mut storage = FileStorage::new(cfg.data_dir()?);
            storage.remove(STORAGE_KEY)?;
            println!("Removed {}", storage.path_for(STORAGE_KEY).display());
            Ok(())
        }
        Commands::ConfigPath => {
            let path = WorkoutConfig::config_path()?;
            if !path.exists() {
                WorkoutConfig::default().save()?;
                println!("Created default config at: {}", path.display());
            } else {
                println!("{}", path.display());
            }
            Ok(())
        }
    }
}

fn load_store(storage: Box<dyn Storage>) -> Result<AppStore> {
    EntryStore::load(storage).context("Failed to load workout entries")
}

fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
        return Err(err);
    }

    Ok(())
}
