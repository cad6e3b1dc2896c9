//! # chatsift CLI
//!
//! Command-line interface for the chatsift library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatsift::ChatsiftError;
use chatsift::classify::Classifier;
use chatsift::cli::Args;
use chatsift::config::ParserConfig;
use chatsift::format::{OutputFormat, write_to_format};
use chatsift::message::ClassifiedMessage;
use chatsift::parser::ChatParser;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatsiftError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Determine output extension based on format
    let output_path = adjust_output_extension(&args.output, args.format);

    // Print header
    println!("🏘️  chatsift v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", args.format);
    if args.strict_timestamps {
        println!("⏱️  Mode:    Strict timestamps");
    }
    println!();

    // Step 1: Parse
    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let parser = ChatParser::with_config(
        ParserConfig::new().with_strict_timestamps(args.strict_timestamps),
    );
    let messages = parser.parse(Path::new(&args.input))?;
    let parse_time = parse_start.elapsed();
    println!(
        "   Matched {} lines ({:.2}s)",
        messages.len(),
        parse_time.as_secs_f64()
    );

    if messages.is_empty() {
        eprintln!("⚠️  No messages matched supported formats.");
        return Ok(());
    }

    // Step 2: Classify
    println!("🏷️  Classifying messages...");
    let classify_start = Instant::now();
    let classifier = Classifier::default();
    let rows = classifier.classify_all(messages);
    let classify_time = classify_start.elapsed();
    println!(
        "   Tagged {} rows ({:.2}s)",
        rows.len(),
        classify_time.as_secs_f64()
    );

    // Step 3: Preview
    if args.preview > 0 {
        println!();
        println!("👀 Preview (first {} rows):", args.preview.min(rows.len()));
        for row in rows.iter().take(args.preview) {
            print_preview_row(row);
        }
    }

    // Step 4: Write output
    let lib_format: OutputFormat = args.format.into();
    println!();
    println!("💾 Writing {}...", lib_format);
    let write_start = Instant::now();
    write_to_format(&rows, &output_path, lib_format)?;
    let write_time = write_start.elapsed();
    println!("   Written in {:.2}s", write_time.as_secs_f64());

    let total_time = total_start.elapsed();

    println!();
    println!(
        "✅ {} messages classified! Output saved to {}",
        rows.len(),
        output_path
    );

    // Summary
    println!();
    println!("📊 Summary:");
    let tagged = rows.iter().filter(|r| !r.categories.is_empty()).count();
    let with_unit = rows.iter().filter(|r| r.unit_type.is_known()).count();
    let with_date = rows.iter().filter(|r| r.date_mentioned.is_some()).count();
    println!("   Rows:          {}", rows.len());
    println!("   Tagged:        {}", tagged);
    println!("   Unit matched:  {}", with_unit);
    println!("   Date mention:  {}", with_date);

    // Performance stats
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let rows_per_sec = rows.len() as f64 / total_time.as_secs_f64();
    println!("   Throughput:  {:.0} rows/sec", rows_per_sec);

    Ok(())
}

/// Prints one classified row in a compact single-line form.
fn print_preview_row(row: &ClassifiedMessage) {
    let ts = row
        .timestamp()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "----".to_string());
    println!(
        "   {} | {} | {} [{} / {}]",
        ts,
        row.sender(),
        truncate(row.content(), 48),
        row.category_label(),
        row.unit_type
    );
}

/// Truncates to at most `max` characters, appending an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}…")
    }
}

/// Adjusts output file extension based on format if using default output.
fn adjust_output_extension(output: &str, format: chatsift::cli::OutputFormat) -> String {
    if output != "classified_messages.csv" {
        return output.to_string();
    }

    format!("classified_messages.{}", format.extension())
}
