//! solovina: terminal showcase for the Solovina localization team.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use solovina::{
    AppConfig, ConfigPreset, Validatable,
    catalog::load_or_builtin,
    cli::{self, OutputFormat},
    config::{
        CONFIG_FILE_NAMES, config_search_dirs, discover_config_file, generate_example_config,
        load_or_default,
    },
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "solovina")]
#[command(version)]
#[command(about = "Terminal showcase for the Solovina localization team", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Open the showcase (default command)
    solovina

    # Kiosk mode: slower autoplay, no mouse, no intro animation
    solovina show --preset kiosk

    # Use a custom project catalog
    solovina --catalog projects.yaml show

    # Progress of one project as JSON
    solovina stats --project persona5 -o json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "SOLOVINA_CONFIG")]
    config: Option<PathBuf>,

    /// Project catalog (YAML or JSON) replacing the built-in one
    #[arg(long, global = true, env = "SOLOVINA_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Arguments for the `show` subcommand
#[derive(Parser, Default)]
struct ShowArgs {
    /// Configuration preset (default, kiosk, manual)
    #[arg(long)]
    preset: Option<String>,

    /// Seconds each project stays on screen during autoplay
    #[arg(long)]
    dwell: Option<f64>,

    /// Start with autoplay paused
    #[arg(long)]
    no_autoplay: bool,

    /// Color theme (dark, light, high-contrast)
    #[arg(long)]
    theme: Option<String>,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,

    /// Skip the intro and count-up animations
    #[arg(long)]
    no_animations: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive showcase
    Show(ShowArgs),

    /// List the projects in the catalog
    Projects {
        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Print monthly progress and featured line counts
    Stats {
        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        output: OutputFormat,

        /// Only show this project (by id)
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .solovina.yaml in the current directory
    Init,
}

/// Layer the config file, a preset and explicit CLI flags, then validate.
fn effective_config(cli: &Cli, args: &ShowArgs) -> Result<AppConfig> {
    let (mut config, loaded_from) = load_or_default(cli.config.as_deref());
    if let Some(path) = &loaded_from {
        tracing::info!("Using config file {}", path.display());
    }

    if let Some(name) = &args.preset {
        let Some(preset) = ConfigPreset::from_name(name) else {
            let known: Vec<_> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
            bail!("unknown preset '{name}' (expected one of: {})", known.join(", "));
        };
        config.merge(&AppConfig::from_preset(preset));
    }

    if let Some(secs) = args.dwell {
        config.carousel.dwell_secs = secs;
    }
    if args.no_autoplay {
        config.carousel.autoplay = false;
    }
    if let Some(theme) = &args.theme {
        config.tui.theme.clone_from(theme);
    }
    if args.no_mouse {
        config.tui.mouse_enabled = false;
    }
    if args.no_animations {
        config.tui.animations = false;
    }
    if let Some(path) = &cli.catalog {
        config.data.catalog = Some(path.clone());
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for error in &errors {
            tracing::error!("{error}");
        }
        bail!("invalid configuration ({} problem(s))", errors.len());
    }
    Ok(config)
}

/// Catalog from `--catalog`, falling back to the one named in the config file.
fn catalog_path(cli: &Cli) -> Option<PathBuf> {
    cli.catalog
        .clone()
        .or_else(|| load_or_default(cli.config.as_deref()).0.data.catalog)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("solovina={log_level}")),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let use_color = cli::should_use_color(cli.no_color);
    let command = cli
        .command
        .take()
        .unwrap_or_else(|| Commands::Show(ShowArgs::default()));

    match command {
        Commands::Show(args) => {
            let config = effective_config(&cli, &args)?;
            let catalog = load_or_builtin(config.data.catalog.as_deref())
                .context("failed to load project catalog")?;
            cli::run_show(catalog, &config, args.theme.is_some())
        }

        Commands::Projects { output } => {
            let catalog =
                load_or_builtin(catalog_path(&cli).as_deref()).context("failed to load project catalog")?;
            cli::run_projects(&catalog, output, use_color, &mut io::stdout().lock())
        }

        Commands::Stats { output, project } => {
            let catalog =
                load_or_builtin(catalog_path(&cli).as_deref()).context("failed to load project catalog")?;
            cli::run_stats(&catalog, output, project.as_deref(), &mut io::stdout().lock())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "solovina", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = solovina::config::generate_json_schema()
                .context("failed to generate config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in config_search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".solovina.yaml");
                if target.exists() {
                    bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
