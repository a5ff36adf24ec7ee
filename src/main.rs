//! BioLingua console demo.
//!
//! Usage: `biolingua [CONFIG_PATH] [KEY=VALUE ...]`
//!
//! Loads the config (the platform default when no path is given), applies and
//! saves any `KEY=VALUE` edits, opens the configured store, and walks through
//! a short study session with canned results standing in for the AI
//! collaborator.

use biolingua::app::App;
use biolingua::managers::history_manager::HistoryManagerTrait;
use biolingua::managers::preferences_manager::PreferencesManagerTrait;
use biolingua::services::config_engine::{ConfigEngine, ConfigEngineTrait};
use biolingua::types::history::{ExplanationMode, ResultPayload};
use biolingua::types::settings::AppConfig;
use tracing::warn;

fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// Logging is not up yet here; the filter itself comes from this config.
fn load_config(path: Option<String>, assignments: &[String]) -> AppConfig {
    let mut engine = ConfigEngine::new(path);
    if let Err(e) = engine.load() {
        eprintln!("Using default config, {}: {}", engine.get_config_path(), e);
        return AppConfig::default();
    }
    for assignment in assignments {
        match engine.apply_assignment(assignment) {
            Ok(()) => eprintln!("Saved {} to {}", assignment, engine.get_config_path()),
            Err(e) => eprintln!("Ignoring '{}': {}", assignment, e),
        }
    }
    engine.get_config().clone()
}

fn canned_result(input: &str, mode: &ExplanationMode) -> ResultPayload {
    let english_term = match input.to_lowercase().as_str() {
        "fotosentez" => "photosynthesis",
        "mitoz" => "mitosis",
        _ => "unknown term",
    };
    ResultPayload {
        english_sentence: Some(english_term.to_string()),
        english_term: Some(english_term.to_string()),
        definition: Some(format!("{} definition", english_term)),
        explanation: Some(format!("{} explanation of {}", mode.as_str(), english_term)),
    }
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match args.split_first() {
        Some((path, edits)) if !path.contains('=') => load_config(Some(path.clone()), edits),
        _ => load_config(None, &args),
    };
    init_logging(&config.logging.filter);

    println!();
    println!("BioLingua v{}: study history demo", env!("CARGO_PKG_VERSION"));
    println!();

    let mut app = App::new(config);
    println!(
        "  Restored {} history entries, last mode {:?}",
        app.history.len(),
        app.preferences.last_mode()
    );

    section("Submissions");
    let queries = [
        ("fotosentez", ExplanationMode::Beginner),
        (" Fotosentez ", ExplanationMode::Beginner),
        ("fotosentez", ExplanationMode::Advanced),
        ("Mitoz", ExplanationMode::Beginner),
    ];
    for (input, mode) in queries {
        let submission = app.submit(input, mode.clone(), canned_result);
        let entry = submission.entry();
        println!(
            "  {:<14} {:<9} -> {} {} ({})",
            format!("{:?}", input),
            mode.as_str(),
            if submission.is_reused() { "reused" } else { "recorded" },
            entry.id,
            entry.results.english_term.as_deref().unwrap_or("-"),
        );
    }

    section("Favorites");
    match app.history.find_existing("mitoz", &ExplanationMode::Beginner) {
        Some(entry) => {
            if !app.history.is_favorite(&entry.id) {
                app.history.toggle_favorite(&entry.id);
            }
        }
        None => warn!("expected entry for 'mitoz' missing"),
    }
    for entry in app.history.list_favorites() {
        println!("  ★ {} [{}]", entry.query_input, entry.mode.as_str());
    }

    section("History");
    for entry in app.history.list_history() {
        let star = if app.history.is_favorite(&entry.id) { "★" } else { " " };
        println!("  {} {} [{}] @ {}", star, entry.query_input, entry.mode.as_str(), entry.timestamp);
    }
    println!(
        "  {} of {} slots used",
        app.history.len(),
        app.history.max_entries()
    );
    println!();
}
