use clap::Parser;
use directories::ProjectDirs;
use env_logger::Env;
use log::warn;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use wastewatch::api::{ConfigAction, ReportApi};
use wastewatch::config::WastewatchConfig;
use wastewatch::error::{ReportError, Result};
use wastewatch::store::fs_backend::FsBackend;
use wastewatch::tracking::Tracker;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_cards, print_config, print_history, print_messages};

const HOME_ENV: &str = "WASTEWATCH_HOME";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}

struct AppContext {
    api: ReportApi<FsBackend>,
    config: WastewatchConfig,
}

fn run(cli: Cli) -> Result<()> {
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Submit {
            name,
            address,
            issue,
        }) => handle_submit(&ctx, &name, &address, &issue),
        Some(Commands::Status { id }) => handle_status(&ctx, id.as_deref().unwrap_or("")),
        Some(Commands::Confirm) => handle_confirm(&ctx),
        Some(Commands::History) => handle_history(&ctx),
        Some(Commands::Delete { id, yes }) => handle_delete(&ctx, &id, yes),
        Some(Commands::Clear { yes }) => handle_clear(&ctx, yes),
        Some(Commands::Track { interval_ms }) => handle_track(&ctx, interval_ms),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_history(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    let config = WastewatchConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!("Ignoring unreadable config in {}: {}", data_dir.display(), e);
        WastewatchConfig::default()
    });

    let backend = FsBackend::new(&data_dir);
    let api = ReportApi::new(backend, data_dir);
    Ok(AppContext { api, config })
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("org", "wastewatch", "wastewatch")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            ReportError::Store(format!(
                "Could not determine a data directory; set {} or pass --data-dir",
                HOME_ENV
            ))
        })
}

fn handle_submit(ctx: &AppContext, name: &str, address: &str, issue: &str) -> Result<()> {
    let result = ctx.api.submit_report(name, address, issue)?;
    print_messages(&result.messages);
    println!();
    print_cards(&result.affected_reports, &ctx.config);
    Ok(())
}

fn handle_status(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.report_status(id)?;
    print_cards(&result.listed_reports, &ctx.config);
    print_messages(&result.messages);
    Ok(())
}

fn handle_confirm(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.last_submitted()?;
    print_cards(&result.listed_reports, &ctx.config);
    print_messages(&result.messages);
    Ok(())
}

fn handle_history(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.history()?;
    print_history(&result.listed_reports);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, id: &str, yes: bool) -> Result<()> {
    if !yes && !confirm(&format!("Delete report {}?", id.trim()))? {
        println!("Nothing deleted.");
        return Ok(());
    }
    let result = ctx.api.delete_report(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &AppContext, yes: bool) -> Result<()> {
    if !yes && !confirm("Are you sure you want to delete all saved reports?")? {
        println!("Nothing deleted.");
        return Ok(());
    }
    let result = ctx.api.clear_reports()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_track(ctx: &AppContext, interval_ms: Option<u64>) -> Result<()> {
    let interval = Duration::from_millis(interval_ms.unwrap_or(ctx.config.track_interval_ms));
    for (i, event) in Tracker::new().enumerate() {
        if i > 0 {
            thread::sleep(interval);
        }
        println!("{}", event.message());
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
