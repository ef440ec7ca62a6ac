//! Implementation of `mushaf check`.

use std::process::ExitCode;

use mushaf_config::OutputFormat;
use mushaf_corpus::structure_report;
use serde::Serialize;

use crate::cli::{
    context::CommandContext,
    output::{plural, print_json, subheader, warning},
};

/// Outcome of a structural check, as printed by `--json`.
#[derive(Serialize)]
struct CheckReport {
    /// True when no invariant is violated.
    valid: bool,
    /// Number of chapters in the document.
    chapters: usize,
    /// Number of verses in the document.
    verses: usize,
    /// Every violated invariant, in the order found.
    issues: Vec<String>,
}

/// Loads the corpus and reports every violated structural invariant.
///
/// Exits with failure when the document cannot be loaded or any invariant is violated.
pub fn run(ctx: &CommandContext) -> ExitCode {
    // Strict loading would reject the document before any issue is printed.
    let store = match ctx.store(false) {
        Ok(store) => store.strict(false),
        Err(code) => return code,
    };
    let corpus = match store.load() {
        Ok(corpus) => corpus,
        Err(e) => {
            eprintln!("error: failed to load corpus: {e}");
            return ExitCode::FAILURE;
        }
    };

    let issues: Vec<String> = structure_report(&corpus)
        .iter()
        .map(ToString::to_string)
        .collect();
    let report = CheckReport {
        valid: issues.is_empty(),
        chapters: corpus.chapter_count(),
        verses: corpus.verse_count(),
        issues,
    };
    let code = if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };

    if ctx.output_format() == OutputFormat::Json {
        let printed = print_json(&report);
        return if report.valid { printed } else { code };
    }

    println!(
        "Loaded {} and {}.",
        plural(report.chapters, "chapter"),
        plural(report.verses, "verse")
    );
    if report.valid {
        println!("No issues found.");
        return code;
    }

    println!();
    println!(
        "{}",
        subheader(&format!("Issues ({}):", report.issues.len()))
    );
    for issue in &report.issues {
        println!("   {}", warning(issue));
    }
    code
}
