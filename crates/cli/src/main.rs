#![deny(unsafe_code)]
//! CLI binary for qrstyle.
//!
//! Subcommands:
//! - `render <text>`: encode text, render a styled QR code, write PNG
//! - `shapes`: print available module shapes

mod error;
mod logging;

use clap::{Parser, Subcommand};
use error::CliError;
use qrstyle_core::{RenderConfig, ShapeKind};
use qrstyle_imaging::snapshot;
use serde_json::Value;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "qrstyle", about = "Styled QR code renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log render details to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode TEXT and write a styled QR code PNG.
    ///
    /// Malformed colors, shapes and padding fall back to their defaults.
    Render {
        /// Text or URL to encode.
        text: String,

        /// Color of data modules, #RRGGBB (default #000000).
        #[arg(long)]
        dot_color: Option<String>,

        /// Background color, #RRGGBB (default #ffffff).
        #[arg(long)]
        bg_color: Option<String>,

        /// Color of finder patterns, #RRGGBB (default: the dot color).
        #[arg(long)]
        eye_color: Option<String>,

        /// Shape of finder-pattern modules (square, circle, rounded, diamond).
        #[arg(long)]
        eye_shape: Option<String>,

        /// Shape of data modules (square, circle, rounded, diamond).
        #[arg(long)]
        dot_shape: Option<String>,

        /// Blank margin around the symbol, in modules (default 1).
        #[arg(long, allow_hyphen_values = true)]
        padding: Option<String>,

        /// Render options as a JSON object; individual flags take precedence.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Logo image to place at the center.
        #[arg(long)]
        logo: Option<PathBuf>,

        /// Output file path.
        #[arg(short, long, default_value = "qr.png")]
        output: PathBuf,
    },
    /// List available module shapes.
    Shapes,
}

/// Merges flag values over the `--params` object under the option keys
/// understood by [`RenderConfig::from_params`].
fn merge_flags(params: &str, flags: [(&str, Option<String>); 6]) -> Result<Value, CliError> {
    let value: Value = serde_json::from_str(params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    let mut map = match value {
        Value::Object(map) => map,
        _ => return Err(CliError::Input("--params must be a JSON object".into())),
    };
    for (key, flag) in flags {
        if let Some(v) = flag {
            map.insert(key.to_owned(), Value::String(v));
        }
    }
    Ok(Value::Object(map))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Shapes => {
            let shapes = ShapeKind::list_names();
            if cli.json {
                let info = serde_json::json!({ "shapes": shapes });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Shapes:");
                for name in shapes {
                    println!("  {name}");
                }
            }
        }
        Command::Render {
            text,
            dot_color,
            bg_color,
            eye_color,
            eye_shape,
            dot_shape,
            padding,
            params,
            logo,
            output,
        } => {
            let params = merge_flags(
                &params,
                [
                    ("dotColor", dot_color),
                    ("bgColor", bg_color),
                    ("eyeColor", eye_color),
                    ("eyeShape", eye_shape),
                    ("dotShape", dot_shape),
                    ("padding", padding),
                ],
            )?;
            let config = RenderConfig::from_params(&params);

            let logo = logo.as_deref().map(snapshot::open_logo).transpose()?;
            let img = qrstyle_imaging::generate(&text, &config, logo.as_ref())?;
            snapshot::write_png(&img, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "output": output.display().to_string(),
                    "width": img.width(),
                    "height": img.height(),
                    "logo": logo.is_some(),
                    "config": config,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {}x{} ({} dots, {} eyes) -> {}",
                    img.width(),
                    img.height(),
                    config.dot_shape.name(),
                    config.eye_shape.name(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use qrstyle_core::Rgb;

    fn no_flags() -> [(&'static str, Option<String>); 6] {
        [
            ("dotColor", None),
            ("bgColor", None),
            ("eyeColor", None),
            ("eyeShape", None),
            ("dotShape", None),
            ("padding", None),
        ]
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn merge_flags_overrides_params() {
        let mut flags = no_flags();
        flags[0].1 = Some("#ff0000".into());
        flags[5].1 = Some("3".into());
        let merged = merge_flags(r##"{"dotColor": "#00ff00", "dotShape": "circle"}"##, flags).unwrap();
        let config = RenderConfig::from_params(&merged);
        assert_eq!(config.dot_color, Rgb::new(255, 0, 0));
        assert_eq!(config.dot_shape, ShapeKind::Circle);
        assert_eq!(config.padding, 3);
    }

    #[test]
    fn merge_flags_rejects_bad_json() {
        let result = merge_flags("{nope", no_flags());
        assert!(matches!(result, Err(CliError::Input(_))));
        let result = merge_flags("[1, 2]", no_flags());
        assert!(matches!(result, Err(CliError::Input(_))));
    }

    #[test]
    fn render_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "qrstyle",
            "render",
            "HELLO",
            "--dot-color",
            "#112233",
            "--eye-shape",
            "rounded",
            "--padding",
            "-1",
            "-o",
            "out.png",
        ])
        .unwrap();
        match cli.command {
            Command::Render {
                text,
                dot_color,
                eye_shape,
                padding,
                output,
                ..
            } => {
                assert_eq!(text, "HELLO");
                assert_eq!(dot_color.as_deref(), Some("#112233"));
                assert_eq!(eye_shape.as_deref(), Some("rounded"));
                assert_eq!(padding.as_deref(), Some("-1"));
                assert_eq!(output, PathBuf::from("out.png"));
            }
            Command::Shapes => panic!("expected render"),
        }
    }

    #[test]
    fn render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("qr.png");
        let cli = Cli::try_parse_from([
            "qrstyle",
            "render",
            "HELLO",
            "--dot-shape",
            "circle",
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();
        run(cli).unwrap();
        let img = image::open(&output).unwrap();
        assert_eq!(img.width(), 230);
    }

    #[test]
    fn render_oversized_padding_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("qr.png");
        let cli = Cli::try_parse_from([
            "qrstyle",
            "render",
            "HELLO",
            "--padding",
            "200000",
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();
        run(cli).unwrap();
        let img = image::open(&output).unwrap();
        assert_eq!(img.width(), 230);
    }
}
