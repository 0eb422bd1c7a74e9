use anyhow::Result;
use clap::{Parser, ValueEnum};
use ip_rewire::commands::{precise_command, scan_command, LinePrompt, PreciseOptions};
use tracing_subscriber::EnvFilter;

/// Find and rewrite hardcoded local-network IP addresses in a React Native project.
///
/// This CLI is a thin wrapper around `rewire-core` (exposed in code as `rewire_core`).
/// All substantive logic lives in the library so it can be tested thoroughly.
#[derive(Parser, Debug)]
#[command(
    name = "ip-rewire",
    version,
    about = "Replace hardcoded IP addresses in a React Native project",
    long_about = None
)]
struct Cli {
    /// Project root directory. Defaults to the current working directory.
    #[arg(long, default_value = ".")]
    project_path: String,

    /// `scan` discovers addresses heuristically; `precise` uses the location list.
    #[arg(long, value_enum, default_value_t = Mode::Precise)]
    mode: Mode,

    /// Address currently in use (precise mode). Auto-detected when omitted.
    #[arg(long)]
    old_ip: Option<String>,

    /// Address to write. Prompted for when omitted.
    #[arg(long)]
    new_ip: Option<String>,

    /// Location list file (YAML or JSON). Defaults to `.iprewire/locations.yaml`
    /// under the project root, or `locations_file` from `.iprewire/config.json`.
    #[arg(long)]
    locations: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Scan,
    Precise,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    let mut prompt = LinePrompt::stdio();
    let result = match cli.mode {
        Mode::Scan => {
            if cli.old_ip.is_some() {
                tracing::warn!("--old-ip is ignored in scan mode");
            }
            scan_command(&cli.project_path, cli.new_ip, &mut prompt)
        }
        Mode::Precise => precise_command(
            &cli.project_path,
            PreciseOptions { old_ip: cli.old_ip, new_ip: cli.new_ip, locations: cli.locations },
            &mut prompt,
        ),
    };

    // Failures are reported on the console; the process still exits normally.
    match result {
        Ok(outcome) => tracing::debug!(?outcome, "run finished"),
        Err(err) => eprintln!("Error: {err:#}"),
    }

    Ok(())
}
