//! `azl` - inspect the Azure Linux distro configuration and drive its
//! package manager.
//!
//! # Usage
//!
//! ```bash
//! # Which package manager would be used on this host
//! azl pkg which
//!
//! # Install packages, pinning one version
//! azl pkg install vim git=2.45.2
//!
//! # Arbitrary action with extra arguments, printed instead of run
//! azl --dry-run pkg run remove nano --arg --noautoremove
//!
//! # Network renderer settings
//! azl renderer netplan
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use log::{LevelFilter, info, warn};
use std::path::PathBuf;

use azl_distro::azurelinux::AzureLinux;
use azl_distro::azurelinux::network::{RendererConfig, RendererKind};
use azl_distro::common::config::Settings;
use azl_distro::common::distro::{HostFamily, OsRelease};
use azl_distro::common::host::SearchPath;
use azl_distro::common::package::{
    CommandRunner, DryRunRunner, PackageError, PackageSpec, StreamingRunner,
};
use azl_distro::common::shell::shell_join;

const DISTRO_NAME: &str = "azurelinux";

#[derive(Parser, Debug)]
#[command(name = "azl")]
#[command(author, version, about = "Azure Linux distro configuration", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Print package commands instead of running them
    #[arg(long, global = true)]
    dry_run: bool,

    /// Settings file to use instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Package manager operations
    Pkg {
        #[command(subcommand)]
        command: PkgCommands,
    },

    /// Show network renderer settings
    Renderer {
        /// Renderer to show (defaults to the configured one)
        kind: Option<RendererKind>,
    },

    /// Show the distro configuration and the detected host
    Info,
}

#[derive(Subcommand, Debug)]
enum PkgCommands {
    /// Run any package manager action
    Run {
        /// Action passed to the package manager, e.g. install or remove
        action: String,

        /// Packages as NAME or NAME=VERSION
        packages: Vec<PackageSpec>,

        /// Extra argument placed before the action (repeatable)
        #[arg(short = 'a', long = "arg", value_name = "ARG", allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Install packages (defaults to `default_packages` from settings)
    Install {
        /// Packages as NAME or NAME=VERSION
        packages: Vec<PackageSpec>,
    },

    /// Refresh the package metadata cache
    UpdateSources,

    /// Upgrade all installed packages
    Upgrade,

    /// Print the package manager that would be used
    Which,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        let code = e
            .downcast_ref::<PackageError>()
            .and_then(PackageError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let dry_run = cli.dry_run || settings.dry_run;

    let runner: Box<dyn CommandRunner> = if dry_run {
        Box::new(DryRunRunner)
    } else {
        Box::new(StreamingRunner)
    };
    let mut distro = AzureLinux::new(DISTRO_NAME, SearchPath::system(), runner);
    if let Some(format) = settings.version_format.clone() {
        distro = distro.with_version_format(format);
    }

    match cli.command {
        Commands::Pkg { command } => cmd_pkg(&distro, &settings, command),
        Commands::Renderer { kind } => cmd_renderer(&distro, kind.unwrap_or(settings.renderer)),
        Commands::Info => cmd_info(&distro),
    }
}

fn cmd_pkg<R: CommandRunner>(
    distro: &AzureLinux<SearchPath, R>,
    settings: &Settings,
    command: PkgCommands,
) -> Result<()> {
    match command {
        PkgCommands::Run {
            action,
            packages,
            args,
        } => distro
            .package_command(&action, settings.merged_extra_args(&args), &packages)
            .with_context(|| format!("package action '{}' failed", action))?,
        PkgCommands::Install { packages } => {
            let packages = if packages.is_empty() {
                settings.default_packages.clone()
            } else {
                packages
            };
            if packages.is_empty() {
                anyhow::bail!("No packages given and no default_packages configured");
            }
            distro
                .install_packages(&packages)
                .context("Failed to install packages")?
        }
        PkgCommands::UpdateSources => distro
            .update_package_sources()
            .context("Failed to update package sources")?,
        PkgCommands::Upgrade => distro
            .upgrade_packages()
            .context("Failed to upgrade packages")?,
        PkgCommands::Which => {
            let manager = distro.package_manager();
            let location = SearchPath::system()
                .resolve(manager.binary())
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "not found on PATH".to_string());
            println!("{} ({})", manager.binary().bold(), location);
        }
    }

    Ok(())
}

fn cmd_renderer<R: CommandRunner>(
    distro: &AzureLinux<SearchPath, R>,
    kind: RendererKind,
) -> Result<()> {
    let config: RendererConfig = distro.renderer_config(kind);
    let body = toml::to_string_pretty(&config)
        .with_context(|| format!("serializing {} renderer settings", kind))?;

    println!("[{}]", kind.to_string().bold());
    print!("{}", body);
    Ok(())
}

fn cmd_info<R: CommandRunner>(distro: &AzureLinux<SearchPath, R>) -> Result<()> {
    let host = OsRelease::detect();
    match host.family() {
        HostFamily::AzureLinux => {}
        HostFamily::RhelLike => info!("Host is {}, a RHEL-family distro", host),
        HostFamily::Other => warn!("Host is {}, not Azure Linux", host),
    }

    let manager = distro.package_manager();
    let base = std::iter::once(manager.binary())
        .chain(manager.base_args().iter().copied())
        .collect::<Vec<_>>();

    let rows = [
        ("Distro", format!("{} (family {})", distro.name(), distro.osfamily())),
        ("Host", format!("{} ({})", host, host.family())),
        ("Package manager", shell_join(&base)),
        ("Version format", distro.version_format().to_string()),
        ("Init command", shell_join(distro.init_cmd())),
        ("Network conf dir", distro.network_conf_dir().to_string()),
        ("Locale conf", distro.systemd_locale_conf_fn().to_string()),
        ("Resolved conf", distro.resolve_conf_fn().to_string()),
        (
            "Netplan file",
            distro
                .network_conf_fn(RendererKind::Netplan)
                .unwrap_or("-")
                .to_string(),
        ),
    ];

    for (label, value) in rows {
        let label = format!("{:<18}", format!("{}:", label));
        println!("{} {}", label.cyan(), value);
    }

    Ok(())
}
