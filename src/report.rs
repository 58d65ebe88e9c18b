//! Numeric report builder: collects a sequence of numbers, summarizes
//! duplicates, sorts, and appends one report block per run to the results
//! file. Parsing and formatting are pure so they stay testable without a
//! terminal.

use std::collections::{HashMap, HashSet};

use crate::cli::prompts::Prompt;
use crate::config::{RESULTS_FILE, Settings};
use crate::error::{Error, Result};
use crate::store::StoreClient;

pub const DUPLICATE_WARNING: &str = "[WARNING]: There are duplicates in the list.";

/// Parse the requested count. Negative counts collapse to zero values.
pub fn parse_count(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let n: i64 = trimmed.parse().map_err(|_| Error::InvalidCount {
        input: trimmed.to_string(),
    })?;
    Ok(n.max(0) as usize)
}

pub fn parse_number(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|_| Error::InvalidNumber {
        input: trimmed.to_string(),
    })
}

/// Value -> occurrence count for values appearing more than once, ordered by
/// first occurrence in the input.
pub fn duplicates(numbers: &[f64]) -> Vec<(f64, usize)> {
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for n in numbers {
        *counts.entry(n.to_bits()).or_insert(0) += 1;
    }

    let mut seen = HashSet::new();
    let mut dups = Vec::new();
    for n in numbers {
        let bits = n.to_bits();
        if counts[&bits] > 1 && seen.insert(bits) {
            dups.push((*n, counts[&bits]));
        }
    }
    dups
}

/// Sum of the surplus occurrences across all duplicated values.
pub fn excess_count(dups: &[(f64, usize)]) -> usize {
    dups.iter().map(|(_, count)| count - 1).sum()
}

/// `[1.0, 2.5, 3.0]` — the stable rendering used in the results file.
pub fn format_numbers(numbers: &[f64]) -> String {
    let inner = numbers
        .iter()
        .map(|n| format!("{n:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]")
}

fn format_duplicate_values(dups: &[(f64, usize)]) -> String {
    dups.iter()
        .map(|(n, _)| format!("{n:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One results block: initial list, duplicate summary when present, sorted
/// list, and a blank separator line.
pub fn render_block(initial: &[f64], dups: &[(f64, usize)], sorted: &[f64]) -> String {
    let mut block = String::new();
    block.push_str(&format!("Initial list: {}\n", format_numbers(initial)));
    if !dups.is_empty() {
        block.push_str(DUPLICATE_WARNING);
        block.push('\n');
        block.push_str(&format!(
            "Duplicate numbers: {}\n",
            format_duplicate_values(dups)
        ));
        block.push_str(&format!("Number of duplicates: {}\n", excess_count(dups)));
    }
    block.push_str(&format!("Sorted numbers: {}\n", format_numbers(sorted)));
    block.push('\n');
    block
}

/// Run one interactive report session and append its block to the results
/// file. A parse failure aborts before anything is written; the results file
/// is only ever extended.
pub async fn run_report(client: &StoreClient, prompt: &Prompt, settings: &Settings) -> Result<()> {
    client.ensure_root().await?;

    let count = parse_count(&prompt.input("How many numbers").await?)?;

    // Capped so an absurd count cannot blow the allocator before prompting.
    let mut numbers = Vec::with_capacity(count.min(1024));
    for i in 0..count {
        let raw = prompt.input(&format!("Give me number #{}", i + 1)).await?;
        numbers.push(parse_number(&raw)?);
    }

    let dups = duplicates(&numbers);
    if settings.debug && !dups.is_empty() {
        prompt.say(DUPLICATE_WARNING);
        prompt.say(&format!(
            "Duplicate numbers: {}",
            format_duplicate_values(&dups)
        ));
        prompt.say(&format!("Number of duplicates: {}", excess_count(&dups)));
    }

    let initial = numbers.clone();
    numbers.sort_by(f64::total_cmp);
    prompt.say(&format_numbers(&numbers));

    let block = render_block(&initial, &dups, &numbers);
    client.append_block(RESULTS_FILE, &block).await?;

    log::debug!(
        "appended report block ({} values) to {RESULTS_FILE}",
        initial.len()
    );
    Ok(())
}
