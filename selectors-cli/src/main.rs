//! Selectors CLI
//!
//! Validate CSS selectors and take them apart from the command line.

mod report;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use selectors_common::warning::warn_once;
use selectors_css::{
    Colons, SelectorCategory, get_pseudo_properties, get_selectors, get_sequences, get_type,
    is_valid_selectors_group,
};

use crate::report::SequenceReport;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "selectors")]
#[command(about = "Validate and decompose CSS Selectors Level 3")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check one or more selectors groups
    Validate {
        /// Also require known HTML, SVG, MathML and WAI-ARIA names
        #[arg(long)]
        strict: bool,

        /// Selectors groups, e.g. "ul > li, a:hover"
        #[arg(required = true)]
        selectors: Vec<String>,
    },
    /// Show the tokens, groups and fields of a single selector
    Inspect {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Require known names when judging validity
        #[arg(long)]
        strict: bool,

        /// A selector without commas, e.g. "a[href$='.pdf']::after"
        sequence: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let all_valid = match cli.command {
        Command::Validate { strict, selectors } => {
            let mut all_valid = true;
            for group in &selectors {
                all_valid &= validate_group(group, strict);
            }
            all_valid
        }
        Command::Inspect {
            json,
            strict,
            sequence,
        } => {
            let report = SequenceReport::build(&sequence, strict)
                .with_context(|| format!("cannot inspect `{sequence}`"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
            report.is_valid()
        }
    };

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Validate a selectors group and each simple selector inside it.
fn validate_group(group: &str, strict: bool) -> bool {
    if !is_valid_selectors_group(group) {
        println!("{} {group}: not a valid selectors group", "✗".red());
        return false;
    }

    let mut rejected = Vec::new();
    for sequence in get_sequences(group) {
        let Ok(tokens) = get_selectors(&sequence) else {
            rejected.push(sequence);
            continue;
        };
        for token in tokens {
            lint(&token);
            if !selectors_html::is_valid_selector(&token, strict) {
                rejected.push(token);
            }
        }
    }

    if rejected.is_empty() {
        println!("{} {group}", "✓".green());
        true
    } else {
        println!("{} {group}: unknown {}", "✗".red(), rejected.join(", "));
        false
    }
}

/// Warn about valid but discouraged pseudo syntax.
fn lint(token: &str) {
    let Ok(classification) = get_type(token) else {
        return;
    };
    if !classification.category.is_pseudo() {
        return;
    }
    let Ok(Some(properties)) = get_pseudo_properties(token) else {
        return;
    };

    if classification.category == SelectorCategory::PseudoElement
        && properties.colons == Some(Colons::One)
    {
        warn_once(
            "Selectors",
            &format!("`{token}` uses the legacy single-colon pseudo-element syntax"),
        );
    }
    if let Some(vendor) = properties.vendor {
        warn_once(
            "Selectors",
            &format!("`{token}` is specific to the `{vendor}` vendor"),
        );
    }
}

fn print_report(report: &SequenceReport) {
    println!("{}", report.sequence.bold());
    for (index, element) in report.elements.iter().enumerate() {
        println!("  group {index}: {}", element.join(" ").cyan());
    }
    for token in &report.tokens {
        let mark = if token.valid {
            "✓".green().to_string()
        } else {
            "✗".red().to_string()
        };
        print!("  {mark} {:>4}  {:<16} {:?}", token.offset, token.category.as_ref(), token.text);
        if let Some(namespace) = &token.namespace {
            print!("  namespace={namespace:?}");
        }
        if let Some(attribute) = &token.attribute {
            print!("  name={:?}", attribute.name);
            if let (Some(operator), Some(value)) = (attribute.operator, &attribute.value) {
                print!(" {operator} {value:?}");
            }
        }
        if let Some(pseudo) = &token.pseudo {
            print!("  name={:?}", pseudo.name);
            if let Some(vendor) = &pseudo.vendor {
                print!(" vendor={vendor:?}");
            }
            if let Some(args) = &pseudo.args {
                print!(" args={args:?}");
            }
        }
        if let Some(negation) = &token.negation {
            print!("  not {} {:?}", negation.category, negation.selector);
        }
        println!();
    }
}
