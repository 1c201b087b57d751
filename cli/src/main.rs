//! pagelint CLI - layout conformance audit tool

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use pagelint::{
    apply_annotations, AuditConfig, Auditor, DocumentContent, ImageAlignment, RecordingSink,
    Report,
};

/// Exit code when the document violates the rubric.
const EXIT_VIOLATIONS: i32 = 1;
/// Exit code for fatal errors (unreadable input, bad configuration).
const EXIT_ERROR: i32 = 2;

#[derive(Parser)]
#[command(name = "pagelint")]
#[command(version)]
#[command(about = "Audit document layout against a formatting rubric", long_about = None)]
struct Cli {
    /// Page-content dump (JSON) produced by the document renderer
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Required top margin in cm
    #[arg(long, default_value_t = 3.0, value_name = "CM")]
    top_margin: f32,

    /// Required bottom margin in cm
    #[arg(long, default_value_t = 3.0, value_name = "CM")]
    bottom_margin: f32,

    /// Required left margin in cm
    #[arg(long, default_value_t = 2.5, value_name = "CM")]
    left_margin: f32,

    /// Required right margin in cm
    #[arg(long, default_value_t = 2.5, value_name = "CM")]
    right_margin: f32,

    /// Allowed margin deviation in cm
    #[arg(long, default_value_t = 0.2, value_name = "CM")]
    tolerance: f32,

    /// Bottom margin tolerance in cm (defaults to --tolerance)
    #[arg(long, value_name = "CM")]
    bottom_tolerance: Option<f32>,

    /// Expected paragraph first-line indent in cm
    #[arg(long, default_value_t = 0.5, value_name = "CM")]
    indent: f32,

    /// Allowed indent deviation in cm
    #[arg(long, default_value_t = 0.1, value_name = "CM")]
    indent_tolerance: f32,

    /// Declared image alignment
    #[arg(long, value_enum, default_value = "left")]
    image_alignment: Alignment,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Write annotation drawing instructions (JSON) for the renderer
    #[arg(long, value_name = "FILE")]
    ops: Option<PathBuf>,

    /// Evaluate pages sequentially instead of in parallel
    #[arg(long)]
    sequential: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Alignment {
    /// Images flush with the left margin
    Left,
    /// Images flush with the right margin
    Right,
    /// Images centered on the page
    Center,
}

impl From<Alignment> for ImageAlignment {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Left => ImageAlignment::Left,
            Alignment::Right => ImageAlignment::Right,
            Alignment::Center => ImageAlignment::Center,
        }
    }
}

impl Cli {
    fn config(&self) -> AuditConfig {
        let mut config = AuditConfig::new()
            .with_margins(
                self.top_margin,
                self.bottom_margin,
                self.left_margin,
                self.right_margin,
            )
            .with_tolerance(self.tolerance)
            .with_bottom_tolerance(self.bottom_tolerance.unwrap_or(self.tolerance))
            .with_expected_indent(self.indent)
            .with_indent_tolerance(self.indent_tolerance)
            .with_image_alignment(self.image_alignment.into());
        if self.sequential {
            config = config.sequential();
        }
        config
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(report) => {
            if !report.is_clean() {
                std::process::exit(EXIT_VIOLATIONS);
            }
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(EXIT_ERROR);
        }
    }
}

fn run(cli: &Cli) -> Result<Report, Box<dyn std::error::Error>> {
    let doc = DocumentContent::from_json_file(&cli.input)?;
    log::debug!("loaded {} pages from {}", doc.page_count(), cli.input.display());

    let auditor = Auditor::new(cli.config())?;
    let report = auditor.audit(&doc);

    if let Some(path) = &cli.ops {
        let mut sink = RecordingSink::new();
        apply_annotations(&report, &mut sink);
        fs::write(path, serde_json::to_string_pretty(&sink.into_ops())?)?;
        println!(
            "Wrote annotation instructions to {}",
            path.display().to_string().cyan()
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(report)
}

fn print_report(report: &Report) {
    if let Some(title) = &report.metadata.title {
        println!("{} {}", "Document:".bold(), title);
    }

    if report.is_clean() {
        println!("{}", "All pages conform to the configured layout.".green());
        return;
    }

    println!("{}", "Layout issues on the following pages:".red().bold());
    for page in &report.pages {
        println!(
            "{} {}",
            format!("Page {}:", page.page).yellow(),
            page.messages.join(", ")
        );
    }
    println!(
        "{} violation(s) on {} page(s)",
        report.violation_count(),
        report.pages.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_rubric() {
        let cli = Cli::parse_from(["pagelint", "pages.json"]);
        let config = cli.config();
        assert_eq!(config.top_margin_cm, 3.0);
        assert_eq!(config.left_margin_cm, 2.5);
        assert_eq!(config.bottom_tolerance_cm, 0.2);
        assert_eq!(config.image_alignment, ImageAlignment::Left);
        assert!(config.parallel);
    }

    #[test]
    fn test_bottom_tolerance_follows_uniform() {
        let cli = Cli::parse_from(["pagelint", "pages.json", "--tolerance", "0.4"]);
        assert_eq!(cli.config().bottom_tolerance_cm, 0.4);

        let cli = Cli::parse_from([
            "pagelint",
            "pages.json",
            "--tolerance",
            "0.4",
            "--bottom-tolerance",
            "0.1",
        ]);
        assert_eq!(cli.config().bottom_tolerance_cm, 0.1);
    }

    #[test]
    fn test_alignment_flag() {
        let cli = Cli::parse_from(["pagelint", "pages.json", "--image-alignment", "center"]);
        assert_eq!(cli.config().image_alignment, ImageAlignment::Center);
    }

    #[test]
    fn test_sequential_flag() {
        let cli = Cli::parse_from(["pagelint", "pages.json", "--sequential"]);
        assert!(!cli.config().parallel);
    }
}
