use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use ideshell::kernel::services::adapters::{load_settings, load_settings_from, replay};
use ideshell::kernel::services::ports::Settings;
use ideshell::kernel::WorkspaceController;

mod logging;

const USAGE: &str = "usage: ideshell [--settings <file>] [<events.jsonl>]";

struct CliArgs {
    settings: Option<PathBuf>,
    events: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs, String> {
    let mut settings = None;
    let mut events = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" => {
                let path = args.next().ok_or("--settings needs a path")?;
                settings = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            _ if arg.starts_with('-') && arg != "-" => {
                return Err(format!("unknown option {arg}\n{USAGE}"));
            }
            _ if events.is_none() => events = Some(PathBuf::from(&arg)),
            _ => return Err(USAGE.to_string()),
        }
    }
    Ok(CliArgs { settings, events })
}

fn main() -> ExitCode {
    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };

    let settings: Settings = match cli.settings.as_deref() {
        Some(path) => load_settings_from(path),
        None => load_settings(),
    }
    .unwrap_or_else(|err| {
        eprintln!("{err}; using defaults");
        Settings::default()
    });

    let logging = logging::init(&settings.log);

    let reader: Box<dyn BufRead> = match cli.events.as_deref() {
        Some(path) if path.as_os_str() != "-" => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(err) => {
                eprintln!("cannot open {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        _ => Box::new(io::stdin().lock()),
    };

    let mut controller = WorkspaceController::with_config(&settings.workspace);
    controller.subscribe(|notification| {
        tracing::info!(
            changed = notification.state_changed,
            artifacts = notification.state.artifacts.len(),
            section = notification.state.sections.active().key(),
            effects = notification.effects.len(),
            "workspace updated"
        );
    });

    if let Err(err) = replay(reader, &mut controller) {
        eprintln!("replay failed: {err}");
        if let Some(guard) = &logging {
            eprintln!("logs: {}", guard.log_dir().display());
        }
        return ExitCode::FAILURE;
    }

    match serde_json::to_string_pretty(controller.state()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("cannot serialize workspace: {err}");
            ExitCode::FAILURE
        }
    }
}
