//! buddybot CLI: Command-line interface for the BuddyBot chat client

use buddybot_engine::{
    resolve_theme, system_preference, ChatService, Config, HttpChatClient, JsonFileStore,
    MemoryStore, PreferenceStore, ThemePreference, WidgetSettings, THEME_KEY,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Terminal chat client for the BuddyBot shopping assistant
#[derive(Parser, Debug)]
#[command(name = "buddybot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Chat endpoint URL (overrides the config file)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Keep preferences in memory only
    #[arg(long, global = true)]
    no_persist: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Send one message and print the reply
    Ask {
        /// Message to send
        message: String,

        /// Print the reply as HTML instead of Markdown
        #[arg(long)]
        html: bool,
    },

    /// Print or change the theme preference
    Theme {
        #[arg(value_enum)]
        value: Option<ThemeArg>,
    },

    /// Write a default config file
    Init,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let tui_mode = matches!(cli.command, None | Some(Commands::Tui));
    init_logging(tui_mode);

    let config_path = match cli.config.clone().or_else(Config::default_path) {
        Some(path) => path,
        None => {
            eprintln!("Error: could not determine a config directory; pass --config");
            return ExitCode::FAILURE;
        }
    };

    if matches!(cli.command, Some(Commands::Init)) {
        return cmd_init(&config_path);
    }

    let mut config = match Config::load_or_default(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {e}", config_path.display());
            return ExitCode::FAILURE;
        }
    };
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    let store = open_store(cli.no_persist);

    match cli.command {
        None | Some(Commands::Tui) => cmd_tui(&config, store),
        Some(Commands::Ask { message, html }) => cmd_ask(&config, &message, html),
        Some(Commands::Theme { value }) => cmd_theme(store, value),
        Some(Commands::Init) => ExitCode::SUCCESS,
    }
}

/// Install the subscriber. The TUI owns the terminal, so it logs to a file.
fn init_logging(tui_mode: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if tui_mode {
        if let Some(file) = log_file() {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        return;
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn log_file() -> Option<File> {
    let dir = dirs::data_dir()?.join("buddybot");
    std::fs::create_dir_all(&dir).ok()?;
    File::options()
        .create(true)
        .append(true)
        .open(dir.join("buddybot.log"))
        .ok()
}

fn open_store(no_persist: bool) -> Box<dyn PreferenceStore> {
    if no_persist {
        return Box::new(MemoryStore::new());
    }
    match JsonFileStore::default_path() {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => {
            warn!("No config directory; preferences will not be saved");
            Box::new(MemoryStore::new())
        }
    }
}

fn runtime() -> Option<tokio::runtime::Runtime> {
    match tokio::runtime::Runtime::new() {
        Ok(rt) => Some(rt),
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {e}");
            None
        }
    }
}

fn cmd_tui(config: &Config, store: Box<dyn PreferenceStore>) -> ExitCode {
    let Some(rt) = runtime() else {
        return ExitCode::FAILURE;
    };
    if let Err(e) = rt.block_on(buddybot_tui::run_tui(config, store)) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn cmd_ask(config: &Config, message: &str, html: bool) -> ExitCode {
    let message = message.trim();
    if message.is_empty() {
        eprintln!("Nothing to send");
        return ExitCode::FAILURE;
    }

    let client = match HttpChatClient::from_config(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let Some(rt) = runtime() else {
        return ExitCode::FAILURE;
    };

    debug!(endpoint = %client.endpoint(), "Sending one-shot message");
    match rt.block_on(client.send(message)) {
        Ok(reply) => {
            if html {
                print!("{}", markdown_to_html(&reply));
            } else {
                println!("{reply}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!(error = %e, "Chat request failed");
            eprintln!("{}", WidgetSettings::from(config).apology());
            ExitCode::FAILURE
        }
    }
}

/// Render a markdown reply to an HTML fragment.
///
/// Raw HTML in the reply is escaped and shown as text.
fn markdown_to_html(markdown: &str) -> String {
    use pulldown_cmark::{html, Event, Options, Parser};

    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let events = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}

fn cmd_theme(mut store: Box<dyn PreferenceStore>, value: Option<ThemeArg>) -> ExitCode {
    let current = resolve_theme(store.as_ref(), system_preference());
    let Some(value) = value else {
        println!("{}", current.as_str());
        return ExitCode::SUCCESS;
    };

    let next = apply_theme_arg(current, value);
    match store.set(THEME_KEY, next.as_str()) {
        Ok(()) => {
            println!("{}", next.as_str());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to save theme: {e}");
            ExitCode::FAILURE
        }
    }
}

fn apply_theme_arg(current: ThemePreference, value: ThemeArg) -> ThemePreference {
    match value {
        ThemeArg::Light => ThemePreference::Light,
        ThemeArg::Dark => ThemePreference::Dark,
        ThemeArg::Toggle => current.toggled(),
    }
}

fn cmd_init(config_path: &Path) -> ExitCode {
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return ExitCode::SUCCESS;
    }

    match Config::default().save(config_path) {
        Ok(()) => {
            println!("Created {}", config_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to write config: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_no_command_means_tui() {
        let cli = Cli::try_parse_from(["buddybot"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_persist);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "buddybot",
            "ask",
            "hi there",
            "--html",
            "--endpoint",
            "http://localhost:9000/chat",
        ])
        .unwrap();
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:9000/chat"));
        match cli.command {
            Some(Commands::Ask { message, html }) => {
                assert_eq!(message, "hi there");
                assert!(html);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_theme_values() {
        let cli = Cli::try_parse_from(["buddybot", "theme", "toggle"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Theme {
                value: Some(ThemeArg::Toggle)
            })
        ));
        assert!(Cli::try_parse_from(["buddybot", "theme", "blue"]).is_err());
    }

    #[test]
    fn test_apply_theme_arg() {
        assert_eq!(
            apply_theme_arg(ThemePreference::Dark, ThemeArg::Toggle),
            ThemePreference::Light
        );
        assert_eq!(
            apply_theme_arg(ThemePreference::Light, ThemeArg::Dark),
            ThemePreference::Dark
        );
        assert_eq!(
            apply_theme_arg(ThemePreference::Light, ThemeArg::Light),
            ThemePreference::Light
        );
    }

    #[test]
    fn test_theme_command_persists() {
        let store = MemoryStore::new();
        let code = cmd_theme(Box::new(store.clone()), Some(ThemeArg::Light));
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_markdown_to_html() {
        let html = markdown_to_html("**Milk** and ~~eggs~~\n\n- rice");
        assert!(html.contains("<strong>Milk</strong>"));
        assert!(html.contains("<del>eggs</del>"));
        assert!(html.contains("<li>rice</li>"));
    }

    #[test]
    fn test_markdown_to_html_escapes_raw_html() {
        let reply = "<script>alert(1)</script>\n\nHi <b onclick=\"x()\">there</b>";
        let html = markdown_to_html(reply);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b onclick"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("there"));
    }

    #[test]
    fn test_init_writes_default_config_once() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("buddybot").join("config.json");

        assert_eq!(cmd_init(&path), ExitCode::SUCCESS);
        assert_eq!(Config::load(&path).unwrap(), Config::default());

        std::fs::write(&path, r#"{"bot_name":"Sous"}"#).unwrap();
        assert_eq!(cmd_init(&path), ExitCode::SUCCESS);
        assert_eq!(Config::load(&path).unwrap().bot_name, "Sous");
    }
}
