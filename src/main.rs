use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use filedeck::app::Workbench;
use filedeck::core::view::View;
use filedeck::kernel::services::adapters::{
    default_download_dir, ensure_settings_file, load_settings, AsyncRuntime, HttpFileClient,
};
use filedeck::kernel::services::ports::{ApiBase, Settings};
use filedeck::tui::crossterm::translate;
use filedeck::tui::terminal_guard::{TerminalGuard, TerminationSignal};

mod logging;

const IDLE_POLL: Duration = Duration::from_millis(100);

const USAGE: &str = "\
Usage: filedeck [--api-base URL] [--download-dir DIR]

Options:
  --api-base URL       Root URL of the file server (default http://localhost:8080)
  --download-dir DIR   Where downloaded files are saved
  -h, --help           Print this help
  -V, --version        Print version";

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    api_base: Option<String>,
    download_dir: Option<PathBuf>,
    help: bool,
    version: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> io::Result<CliArgs> {
    let mut out = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg, None),
        };
        match flag.as_str() {
            "-h" | "--help" => out.help = true,
            "-V" | "--version" => out.version = true,
            "--api-base" => out.api_base = Some(flag_value(&flag, inline, &mut args)?),
            "--download-dir" => {
                out.download_dir = Some(PathBuf::from(flag_value(&flag, inline, &mut args)?))
            }
            other => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("unexpected argument '{other}'\n\n{USAGE}"),
                ))
            }
        }
    }

    Ok(out)
}

fn flag_value(
    flag: &str,
    inline: Option<String>,
    rest: &mut impl Iterator<Item = String>,
) -> io::Result<String> {
    inline.or_else(|| rest.next()).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{flag} requires a value"),
        )
    })
}

/// Command line beats the settings file, which beats defaults.
fn load_startup_settings(cli: &CliArgs) -> Settings {
    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "failed to create settings file");
    }
    let mut settings = load_settings().unwrap_or_default();
    apply_cli(&mut settings, cli);
    settings
}

fn apply_cli(settings: &mut Settings, cli: &CliArgs) {
    if let Some(api_base) = &cli.api_base {
        settings.api_base = api_base.clone();
    }
    if let Some(dir) = &cli.download_dir {
        settings.download_dir = Some(dir.clone());
    }
}

fn main() -> io::Result<()> {
    let cli = parse_args(std::env::args().skip(1))?;
    if cli.help {
        println!("{USAGE}");
        return Ok(());
    }
    if cli.version {
        println!("filedeck {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let _logging = logging::init();
    let settings = load_startup_settings(&cli);

    let base = ApiBase::parse(&settings.api_base)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let download_dir = settings
        .download_dir
        .clone()
        .unwrap_or_else(default_download_dir);
    tracing::info!(api_base = %base, download_dir = %download_dir.display(), "starting");

    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx, HttpFileClient::new(base), download_dir)?;
    let mut workbench = Workbench::new(runtime, &settings);

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    filedeck::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    workbench.mount();
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                workbench.render(frame, area);
            })?;
            dirty = false;
        }

        while let Ok(msg) = rx.try_recv() {
            dirty |= workbench.handle_message(msg);
        }
        dirty |= workbench.tick(Instant::now());

        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(?signal, "shutting down");
            break;
        }
        if workbench.should_quit() {
            break;
        }
        if dirty {
            continue;
        }

        let timeout = workbench
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .map_or(IDLE_POLL, |left| left.min(IDLE_POLL));

        if event::poll(timeout)? {
            let Some(input) = translate(event::read()?) else {
                continue;
            };
            let result = workbench.handle_input(&input);
            if result.is_quit() {
                break;
            }
            dirty |= result.is_consumed();
        }
    }

    drop(terminal);
    drop(guard);
    tracing::info!("exited");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/cli_args.rs"]
mod tests;
