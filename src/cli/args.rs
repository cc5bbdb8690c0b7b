use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use pagestyle::app_dirs;

use super::help::dim_help_annotations;

/// Version banner listing where the config file is read from and where the
/// log goes by default.
fn long_version() -> &'static str {
	let describe = |path: anyhow::Result<PathBuf>| match path {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("pagestyle {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(
		details,
		"config file: {}",
		describe(app_dirs::user_config_file())
	);
	let _ = writeln!(details, "log file: {}", describe(app_dirs::default_log_file()));

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`], exiting on error.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = tinted_cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn tinted_cli_command() -> Command {
	CliArgs::command().mut_args(dim_help_annotations)
}

#[derive(Parser, Debug)]
#[command(
	name = "pagestyle",
	version,
	long_version = long_version(),
	about = "Read an article in the terminal and restyle it from a settings panel",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `pagestyle` binary.
pub(crate) struct CliArgs {
	#[arg(
		value_name = "ARTICLE",
		help = "Plain-text article to display (default: built-in sample)"
	)]
	pub(crate) article: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PAGESTYLE_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Override the article title (default: first line of the article)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write the session log to this file (default: pagestyle.log in the cache directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Minimum level written to the log file (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-options",
		help = "List every selectable style option and exit (default: disabled)"
	)]
	pub(crate) list_options: bool,
	#[arg(
		short = 's',
		long = "print-styles",
		help = "Print the default style variables and exit (default: disabled)"
	)]
	pub(crate) print_styles: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how --print-styles writes the variables")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats for `--print-styles`.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
