use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use railops::app::App;
use railops::config::AppConfig;
use railops::core::constants::INPUT_POLL_MS;
use railops::logging;
use railops::ui::draw_dashboard;
use railops::utils::build_info::version_line;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{error, info};

#[cfg(feature = "web")]
use railops::web::{start_web_server, WebServer};
#[cfg(feature = "web")]
use std::sync::Arc;

struct CliOptions {
    /// `Some(None)` means --serve without an explicit port
    serve: Option<Option<u16>>,
}

fn print_help() {
    println!("RailOps - rail operations dashboard\n");
    println!("Usage: railops [options]\n");
    println!("Options:");
    println!("  --serve[=PORT]  Expose the simulation over WebSocket (web feature)");
    println!("  --version       Show version information");
    println!("  --help          Show this help message");
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions { serve: None };
    for arg in args {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", version_line("railops"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--serve" => options.serve = Some(None),
            other => {
                if let Some(port) = other.strip_prefix("--serve=") {
                    let port = port
                        .parse()
                        .map_err(|_| format!("Invalid port: {}", port))?;
                    options.serve = Some(Some(port));
                } else {
                    return Err(format!("Unknown option: {}", other));
                }
            }
        }
    }
    Ok(options)
}

fn main() -> railops::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'railops --help' for usage.");
            std::process::exit(1);
        }
    };

    let config = AppConfig::load();
    if let Err(e) = logging::init_tracing(&config) {
        eprintln!("Warning: logging disabled ({})", e);
    }
    info!(version = %version_line("railops"), "starting dashboard");

    let mut app = App::new(&config);

    #[cfg(feature = "web")]
    let web = match options.serve {
        Some(port) => Some(spawn_web(port.unwrap_or(config.web_port), &mut app)?),
        None => None,
    };
    if !cfg!(feature = "web") && options.serve.is_some() {
        eprintln!("--serve requires a build with the `web` feature");
        std::process::exit(1);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = loop {
        #[cfg(feature = "web")]
        if let Some(web) = &web {
            web.pump(&mut app);
        }

        app.sync(Instant::now());

        if let Err(e) = terminal.draw(|frame| draw_dashboard(frame, &app)) {
            break Err(e);
        }

        match event::poll(Duration::from_millis(INPUT_POLL_MS)) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if !app.handle_key(key, Instant::now()) {
                        break Ok(());
                    }
                }
                Ok(_) => {}
                Err(e) => break Err(e),
            },
            Ok(false) => {}
            Err(e) => break Err(e),
        }
    };

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    if let Err(e) = &result {
        error!(error = %e, "terminal loop failed");
    }
    info!(runs = app.controller.history_len(), "dashboard closed");
    Ok(result?)
}

/// Web server running on its own tokio runtime, plus the dashboard's
/// subscription that feeds it.
#[cfg(feature = "web")]
struct WebBridge {
    _runtime: tokio::runtime::Runtime,
    server: Arc<WebServer>,
    changes: std::sync::mpsc::Receiver<railops::core::controller::StateChange>,
}

#[cfg(feature = "web")]
impl WebBridge {
    /// Applies queued browser commands and forwards state changes.
    fn pump(&self, app: &mut App) {
        while let Some(action) = self.server.try_recv_command() {
            app.dispatch(action, Instant::now());
        }
        while let Ok(change) = self.changes.try_recv() {
            if let Err(e) = self.server.publish(&change) {
                tracing::warn!(error = %e, "could not publish state change");
            }
        }
    }
}

#[cfg(feature = "web")]
fn spawn_web(port: u16, app: &mut App) -> railops::Result<WebBridge> {
    let runtime = tokio::runtime::Runtime::new()?;
    let server = Arc::new(WebServer::new());

    let task_server = Arc::clone(&server);
    runtime.spawn(async move {
        if let Err(e) = start_web_server(port, task_server).await {
            error!(port, error = %e, "web server stopped");
        }
    });

    Ok(WebBridge {
        _runtime: runtime,
        server,
        changes: app.controller.subscribe(),
    })
}
