mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_options, print_plain};
use log::info;
use pagestyle::{Article, Host, Page, ROOT_ID, logging};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_options {
		print_options();
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if cli.print_styles {
		let map = resolved.defaults.style_map();
		match cli.output {
			OutputFormat::Plain => print_plain(&map),
			OutputFormat::Json => print_json(&map)?,
		}
		return Ok(());
	}

	run_viewer(resolved)
}

/// Mount the panel and viewer into a fresh page and hand the terminal to them.
fn run_viewer(settings: ResolvedConfig) -> Result<()> {
	logging::initialize(&settings.log_file, settings.log_level)?;

	let article = load_article(&settings)?;
	info!("displaying '{}'", article.title);

	let mut host = Host::mount(Page::with_root(), ROOT_ID, article, settings.defaults)
		.context("failed to mount the settings panel")?;
	pagestyle::run(&mut host)
}

fn load_article(settings: &ResolvedConfig) -> Result<Article> {
	let article = match &settings.article_path {
		Some(path) => Article::load(path)?,
		None => Article::sample(),
	};
	Ok(match &settings.article_title {
		Some(title) => article.with_title(title.clone()),
		None => article,
	})
}
