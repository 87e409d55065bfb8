use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use prose_tells::report::{self, Format};
use prose_tells::{analyze, input, CALIBRATION};

#[derive(Parser, Debug)]
#[command(
    name = "prose-tells",
    about = "Score prose for phrasing patterns common in AI-generated text",
    version,
    after_help = "Commands:\n  analyze   Detailed report (default)\n  score     One tab-separated line: score, label, words, matches\n  json      Full breakdown as JSON\n  help      Show this message\n\nText may be given inline, as a path to a file, or on stdin."
)]
pub struct Cli {
    /// Optional command followed by text or a file path
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Render { format: Format, text: String },
    Help,
}

impl Command {
    /// The first word selects the command. Anything unrecognized is treated as
    /// the start of the text and gets the detailed report.
    pub fn from_args(args: &[String]) -> Self {
        fn render(format: Format, rest: &[String]) -> Command {
            Command::Render {
                format,
                text: rest.join(" "),
            }
        }

        match args.split_first() {
            None => render(Format::Detailed, args),
            Some((verb, rest)) => match verb.as_str() {
                "analyze" => render(Format::Detailed, rest),
                "score" => render(Format::Summary, rest),
                "json" => render(Format::Json, rest),
                "help" => Command::Help,
                _ => render(Format::Detailed, args),
            },
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let (format, literal) = match Command::from_args(&cli.args) {
        Command::Help => {
            println!("{}", Cli::command().render_long_help());
            return Ok(());
        }
        Command::Render { format, text } => (format, text),
    };

    let (source, text) = input::resolve(&literal, CALIBRATION.stdin_wait)?;
    tracing::info!(?source, ?format, "analyzing");

    let analysis = analyze(&text);
    let rendered = report::render(&analysis, format).context("failed to render report")?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn verbs_select_formats() {
        assert_eq!(
            Command::from_args(&args(&["score", "some", "text"])),
            Command::Render {
                format: Format::Summary,
                text: "some text".into()
            }
        );
        assert_eq!(
            Command::from_args(&args(&["json", "x"])),
            Command::Render {
                format: Format::Json,
                text: "x".into()
            }
        );
        assert_eq!(
            Command::from_args(&args(&["analyze", "x"])),
            Command::Render {
                format: Format::Detailed,
                text: "x".into()
            }
        );
        assert_eq!(Command::from_args(&args(&["help"])), Command::Help);
    }

    #[test]
    fn unknown_verb_is_part_of_the_text() {
        assert_eq!(
            Command::from_args(&args(&["The", "cat", "sat."])),
            Command::Render {
                format: Format::Detailed,
                text: "The cat sat.".into()
            }
        );
    }

    #[test]
    fn no_args_means_detailed_report_from_stdin() {
        assert_eq!(
            Command::from_args(&[]),
            Command::Render {
                format: Format::Detailed,
                text: String::new()
            }
        );
    }

    #[test]
    fn parses_hyphenated_text() {
        let cli =
            Cli::try_parse_from(["prose-tells", "score", "-", "state-of-the-art"]).unwrap();
        assert_eq!(cli.args, args(&["score", "-", "state-of-the-art"]));
    }

    #[test]
    fn clap_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
