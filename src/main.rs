use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use typograph::config::{Config, discover_config, parse_config_file, user_config_path};
use typograph::host::TextBuffer;
use typograph::rules::{Catalog, PatternSpec, ResolvedEntry, compile_rules, resolve};
use typograph::watch::TransformWatcher;

#[derive(Parser)]
#[command(name = "typograph")]
#[command(
	author,
	version,
	about = "Apply typographic text transformations the way an editor applies them while typing"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Use a specific config file instead of discovery
	#[arg(long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Create a template .typograph.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .typograph.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Read lines from stdin instead of arguments
	#[arg(long)]
	stdin: bool,

	/// Text to transform
	#[arg(trailing_var_arg = true, allow_hyphen_values = true)]
	text: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the effective rule list and where it came from
	Show,
	/// Check the config file for errors without transforming anything
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(cli.config.as_deref()),
				ConfigAction::Validate => handle_config_validate(cli.config.as_deref()),
			},
		};
	}

	// Handle text transformation
	if cli.stdin || !cli.text.is_empty() {
		return handle_transform(cli.config.as_deref(), cli.stdin, &cli.text);
	}

	// No input specified - this shouldn't happen due to arg_required_else_help
	Ok(ExitCode::SUCCESS)
}

/// Load the explicit config, or discover one, or fall back to defaults.
fn load_effective_config(explicit: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
	if let Some(path) = explicit {
		let config = parse_config_file(path)
			.with_context(|| format!("Failed to load config: {}", path.display()))?;
		return Ok((config, Some(path.to_path_buf())));
	}

	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	match discover_config(&cwd).context("Failed to discover config file")? {
		Some(loaded) => Ok((loaded.config, Some(loaded.path))),
		None => Ok((Config::default(), None)),
	}
}

fn handle_transform(config_path: Option<&Path>, use_stdin: bool, text: &[String]) -> Result<ExitCode> {
	let (config, _) = load_effective_config(config_path)?;
	let watcher = TransformWatcher::from_config(&config).context("Failed to compile rules")?;

	if use_stdin {
		let mut input = String::new();
		std::io::stdin()
			.read_to_string(&mut input)
			.context("Failed to read stdin")?;
		for line in input.lines() {
			println!("{}", transform_line(&watcher, line)?);
		}
	} else {
		let line = text.join(" ");
		println!("{}", transform_line(&watcher, &line)?);
	}

	Ok(ExitCode::SUCCESS)
}

/// Run one line through a fresh buffer as a simulated typing stream.
fn transform_line(watcher: &TransformWatcher, line: &str) -> Result<String> {
	let mut buffer = TextBuffer::new();
	buffer
		.type_text(watcher, line)
		.context("Failed to apply transformations")?;
	Ok(buffer.text().to_string())
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(".typograph.toml");

	if config_path.exists() && !force {
		anyhow::bail!(".typograph.toml already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, INIT_TEMPLATE)
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created .typograph.toml");
	Ok(ExitCode::SUCCESS)
}

fn handle_config_show(config_path: Option<&Path>) -> Result<ExitCode> {
	let (config, source) = load_effective_config(config_path)?;

	match source {
		Some(path) => println!("# Source: {}", path.display()),
		None => println!("# Source: built-in defaults"),
	}

	let catalog = Catalog::builtin();
	let resolved = resolve(&config, &catalog);
	println!("# rules: {}\n", resolved.len());

	for entry in &resolved {
		match entry {
			ResolvedEntry::Rule(rule) => {
				let name = rule.name.as_deref().unwrap_or("(custom)");
				match &rule.from {
					PatternSpec::Literal(from) => {
						println!("  {}: {:?} -> {:?}", name, from, rule.to);
					}
					PatternSpec::Regex(pattern) => {
						println!("  {}: /{}/ -> {:?}", name, pattern, rule.to);
					}
				}
			}
			ResolvedEntry::Unknown(name) => {
				println!("  {}: (unknown, ignored)", name);
			}
		}
	}

	// Show user config path
	if let Ok(user_path) = user_config_path() {
		println!("\nUser config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(config_path: Option<&Path>) -> Result<ExitCode> {
	let loaded = match load_effective_config(config_path) {
		Ok(loaded) => loaded,
		Err(e) => {
			eprintln!("Configuration error: {e:#}");
			return Ok(ExitCode::FAILURE);
		}
	};

	let (config, source) = loaded;
	let catalog = Catalog::builtin();
	let resolved = resolve(&config, &catalog);

	match compile_rules(&resolved) {
		Ok(rules) => {
			match source {
				Some(path) => println!("{} is valid ({} rules)", path.display(), rules.len()),
				None => println!("No config file found; defaults are valid ({} rules)", rules.len()),
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {e}");
			Ok(ExitCode::FAILURE)
		}
	}
}

const INIT_TEMPLATE: &str = r#"# Typographic transformation rules.
#
# `include` defaults to every built-in group when omitted:
# symbols, mathematical, typography, quotes.
#include = ["symbols", "typography"]

# Extra rules and groups are appended after `include`.
extra = [
    # Built-in rules outside the default groups can be named here.
    # "quotes_primary_pl",
    # Inline rules: `from` is a literal suffix, `pattern` an end-anchored
    # regex with $1.. back-references available in `to`.
    { from = "(deg)", to = "°" },
]

# Names listed here are dropped from the final set, whether they arrived
# directly or through a group.
remove = []
"#;
