//! The `vivaprep questions` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

pub fn execute(catalog: Option<PathBuf>) -> Result<()> {
    let bank = super::load_bank(catalog.as_deref())?;

    let mut table = Table::new();
    table.set_header(vec!["Category", "Question", "Keywords"]);
    for category in bank.categories() {
        for question in bank.questions(category) {
            table.add_row(vec![
                Cell::new(category),
                Cell::new(&question.text),
                Cell::new(question.keywords.join(", ")),
            ]);
        }
    }

    println!("{table}");
    println!("{} questions total.", bank.len());
    Ok(())
}
