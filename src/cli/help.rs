use clap::Arg;
use clap::builder::StyledStr;
use clap::builder::styling::{AnsiColor, Color, Style};

/// Dim the `(default: ...)` note in an argument's help and fold clap's
/// possible-value and env annotations into the same muted style.
pub(crate) fn dim_help_annotations(mut arg: Arg) -> Arg {
	let help = arg
		.get_help()
		.map(ToString::to_string)
		.unwrap_or_default();
	let mut notes = Vec::new();

	if let Some(values) = possible_values_note(&arg) {
		arg = arg.hide_possible_values(true);
		notes.push(values);
	}
	if !help.contains("(default:")
		&& let Some(default) = default_value_note(&arg)
	{
		arg = arg.hide_default_value(true);
		notes.push(default);
	}
	if let Some(env) = env_note(&arg) {
		arg = arg.hide_env(true);
		notes.push(env);
	}

	if help.is_empty() && notes.is_empty() {
		return arg;
	}

	let mut styled = dim_default_note(&help);
	let mut has_text = !help.is_empty();
	for note in notes {
		if has_text {
			styled.push_str(" ");
		}
		push_muted(&mut styled, &note);
		has_text = true;
	}
	arg.help(styled)
}

fn muted() -> Style {
	Style::new()
		.fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)))
		.dimmed()
}

fn push_muted(target: &mut StyledStr, text: &str) {
	let style = muted();
	let _ = std::fmt::write(target, format_args!("{style}{text}{style:#}"));
}

/// Style the first `(default: ...)` span of `text`.
pub(crate) fn dim_default_note(text: &str) -> StyledStr {
	let mut styled = StyledStr::new();
	let span = text.find("(default: ").and_then(|start| {
		text[start..]
			.find(')')
			.map(|offset| (start, start + offset + 1))
	});
	match span {
		Some((start, end)) => {
			styled.push_str(&text[..start]);
			push_muted(&mut styled, &text[start..end]);
			styled.push_str(&text[end..]);
		}
		None => styled.push_str(text),
	}
	styled
}

fn quote_if_spaced(text: &str) -> String {
	if text.chars().any(char::is_whitespace) {
		format!("{text:?}")
	} else {
		text.to_string()
	}
}

pub(crate) fn possible_values_note(arg: &Arg) -> Option<String> {
	if !arg.get_action().takes_values() {
		return None;
	}
	let visible: Vec<String> = arg
		.get_possible_values()
		.iter()
		.filter(|value| !value.is_hide_set())
		.map(|value| quote_if_spaced(value.get_name()))
		.collect();
	if visible.is_empty() {
		return None;
	}
	Some(format!("[possible values: {}]", visible.join(", ")))
}

pub(crate) fn default_value_note(arg: &Arg) -> Option<String> {
	let rendered: Vec<String> = arg
		.get_default_values()
		.iter()
		.map(|value| value.to_string_lossy())
		.filter(|value| !value.trim().is_empty())
		.map(|value| quote_if_spaced(&value))
		.collect();
	if rendered.is_empty() {
		return None;
	}
	Some(format!("(default: {})", rendered.join(", ")))
}

pub(crate) fn env_note(arg: &Arg) -> Option<String> {
	let name = arg.get_env()?.to_string_lossy();
	if name.trim().is_empty() {
		return None;
	}
	Some(format!("[env: {name}=]"))
}
