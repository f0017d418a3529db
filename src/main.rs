use anyhow::{Context, Result};
use clap::Parser;
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

// Import from our modularized library
use citekey_finder_rs::prelude::*;

#[derive(Parser)]
#[command(name = "citekey_finder_rs")]
#[command(about = "Find files on disk that belong to bibliography entries by citation key", long_about = None)]
struct Cli {
    /// Directories to scan recursively for candidate files
    #[arg(required = true)]
    directories: Vec<PathBuf>,

    /// Citation key to search for (repeatable; one entry per distinct key,
    /// repeated keys are ignored)
    #[arg(short = 'k', long = "key", required = true)]
    keys: Vec<String>,

    /// File extension to accept, without the dot (repeatable)
    #[arg(short = 'e', long = "extension", default_values_t = [String::from("pdf")])]
    extensions: Vec<String>,

    /// Only accept files whose base name equals a key exactly
    #[arg(long)]
    exact_only: bool,

    /// Print the result mapping as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // One entry per distinct key; a repeated -k adds nothing
    let mut seen = HashSet::new();
    let entries: Vec<BibEntry> = cli
        .keys
        .iter()
        .filter(|key| seen.insert(key.as_str()))
        .map(|key| BibEntry::with_citation_key(key.clone(), key.clone()))
        .collect();
    let extensions: HashSet<String> = cli.extensions.iter().cloned().collect();

    let reporter = CollectingReporter::new();
    let candidates = scan_directories(&cli.directories, &extensions, &reporter);
    let result = associate_files(&entries, &candidates, cli.exact_only, legal_key_chars());

    for (directory, cause) in reporter.errors() {
        eprintln!("Error scanning {:?}: {}", directory, cause);
    }

    if cli.json {
        // Stable output: entry id -> sorted list of matched paths
        let mapping: BTreeMap<&str, Vec<String>> = result
            .iter()
            .map(|(entry, files)| {
                (
                    entry.id(),
                    files.iter().map(|f| f.display().to_string()).collect(),
                )
            })
            .collect();
        let json =
            serde_json::to_string_pretty(&mapping).context("Failed to serialize result mapping")?;
        println!("{}", json);
        return Ok(());
    }

    println!("Found {} candidate file(s)", candidates.len());
    if !reporter.is_empty() {
        println!(
            "Warning: {} directory scan(s) failed; results may be partial",
            reporter.errors().len()
        );
    }
    println!();

    let mut matched_files = 0;
    for entry in &entries {
        if let Some(files) = result.get(entry) {
            println!("{}:", entry.id());
            for file in files {
                println!("  {}", file.display());
                matched_files += 1;
            }
        }
    }

    println!();
    println!(
        "Matched {} of {} candidate file(s) to {} of {} entries",
        matched_files,
        candidates.len(),
        result.len(),
        entries.len()
    );

    Ok(())
}
