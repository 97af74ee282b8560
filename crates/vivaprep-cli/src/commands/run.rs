//! The `vivaprep run` command: an interactive interview session.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use vivaprep_core::session::{InterviewSession, SessionPhase};
use vivaprep_core::summary::{self, SummaryReport};

pub fn execute(
    tech: usize,
    hr: usize,
    catalog: Option<PathBuf>,
    seed: Option<u64>,
    output: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(tech + hr >= 1, "a session needs at least one question");

    let bank = super::load_bank(catalog.as_deref())?;

    let questions = match seed {
        Some(seed) => bank.build_session_list(tech, hr, &mut StdRng::seed_from_u64(seed))?,
        None => bank.build_session_list(tech, hr, &mut rand::rng())?,
    };

    let mut session = InterviewSession::new(questions);
    tracing::info!(session = %session.id(), questions = session.len(), "interview started");

    println!("Mock interview: {} questions.", session.len());
    println!("Type an answer and press Enter. ':back' returns to the previous");
    println!("question, ':quit' abandons the session.");
    println!();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    while let SessionPhase::Question(index) = session.phase() {
        let (category, text) = {
            let current = session.current_question()?;
            (current.category, current.question.text.clone())
        };

        println!(
            "Question {}/{} ({category}) [{:.0}% done]",
            index + 1,
            session.len(),
            session.progress() * 100.0
        );
        println!("{text}");
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line)?;
        if read == 0 {
            // End of input: advance with an empty staged answer so piped
            // sessions still reach the summary.
            session.advance("")?;
            println!();
            continue;
        }

        let staged = line.trim_end_matches(['\n', '\r']).to_string();
        match staged.as_str() {
            ":quit" => {
                println!("Session abandoned.");
                return Ok(());
            }
            ":back" => {
                if let Err(e) = session.go_back() {
                    println!("({e})");
                }
                println!();
            }
            _ => {
                let record = session.submit_answer(&staged)?.clone();
                println!("{}", record.tier.feedback());
                if !record.matched_keywords.is_empty() {
                    println!("Matched keywords: {}", record.matched_keywords.join(", "));
                }
                println!();
                // advance re-evaluates the same staged text; evaluation is
                // idempotent, so the stored record is unchanged.
                session.advance(&staged)?;
            }
        }
    }

    let report = summary::build_report(&session);
    println!("=== Interview Summary ===");
    println!();
    println!("{}", report.to_text());
    print_category_table(&report);

    if let Some(path) = output {
        let json =
            serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn print_category_table(report: &SummaryReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Section", "Score", "Possible"]);
    for tally in &report.per_category {
        table.add_row(vec![
            Cell::new(tally.category),
            Cell::new(tally.score),
            Cell::new(tally.possible),
        ]);
    }

    println!("{table}");
}
