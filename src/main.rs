use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use urlbar_suggestions::app::App;
use urlbar_suggestions::config::{self, ConfigResult};
use urlbar_suggestions::suggestion::load_suggestions;

/// Browser-style address bar suggestions in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON file holding the suggestion candidates
    suggestions: PathBuf,

    /// Show a menu bar above the URL bar
    #[arg(long)]
    menubar: bool,

    /// Print the chosen suggestion as JSON
    #[arg(long)]
    json: bool,

    /// Print the grouped suggestions for QUERY and exit
    #[arg(long, value_name = "QUERY")]
    dump: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logger();

    let cli = Cli::parse();
    let candidates = load_suggestions(&cli.suggestions)?;
    let ConfigResult { config, warning } = config::load_config();

    let mut app = App::new(candidates, config)
        .with_menubar(cli.menubar)
        .with_config_warning(warning);

    if let Some(query) = cli.dump {
        app.set_input(&query);
        println!("{}", app.panel.render_plain(&app.config.labels));
        return Ok(());
    }

    execute!(io::stdout(), EnableMouseCapture)?;
    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, &mut app);

    // Restore terminal before printing anything
    ratatui::restore();
    execute!(io::stdout(), DisableMouseCapture)?;
    result?;

    if let Some(outcome) = app.outcome() {
        if cli.json {
            println!("{}", serde_json::to_string(outcome)?);
        } else {
            println!("{}", outcome.location);
        }
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Log to a file in the temp directory, the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_logger() {
    use std::io::Write;

    let path = std::env::temp_dir().join("urlbar-suggestions.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
