use clap::Parser;
use std::io;
use taskmgr_cli::cli::Cli;
use taskmgr_cli::menu;
use taskmgr_core::config;
use taskmgr_core::error::AppError;
use taskmgr_core::manager::TaskManager;
use taskmgr_core::storage::{self, NoopStore, TaskStore};

fn run(cli: Cli) -> Result<(), AppError> {
    let config_load = config::load_config_with_fallback();
    if let Some(err) = config_load.error {
        eprintln!("WARNING: {err}");
    }

    let theme = cli.theme.or(config_load.config.theme);
    let palette = config::palette_for_theme(theme.as_deref());

    let store = NoopStore;
    let store_path = match cli.store {
        Some(path) => path,
        None => storage::store_path()?,
    };

    let mut manager = TaskManager::new();
    for task in store.load(&store_path)? {
        manager.add(task);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    {
        let mut input = stdin.lock();
        let mut output = stdout.lock();
        menu::run_menu(&mut manager, &mut input, &mut output, &palette)?;
    }

    store.save(&store_path, manager.tasks())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
