//! Example: Using chatsift as a library
//!
//! This example demonstrates how to use chatsift in your own projects.
//!
//! Run with: cargo run --example library_usage

use chatsift::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== chatsift Library Usage Examples ===\n");

    // Example 1: Parse a transcript from a string
    println!("1. Parsing a transcript:");
    let transcript = "\
1/2/2024, 5:30 pm - Alice: Looking for rent, 2BR villa
1/2/2024, 5:31 pm - Omar: Clinic for sale, handover 12th May 2025
[1/2/2024, 17:32] Bob: good morning everyone
random line that matches nothing
1/2/2024, 5:33 pm - محمد: شقة غرفتين للإيجار";

    let parser = ChatParser::new();
    let messages = parser.parse_str(transcript)?;
    println!("   {} of 5 lines matched a supported format", messages.len());

    // Example 2: Classify the parsed messages
    println!("\n2. Classifying:");
    let classifier = Classifier::default();
    let rows = classifier.classify_all(messages);

    for row in &rows {
        println!(
            "   {}: {} -> [{} / {} / {}]",
            row.sender(),
            row.content(),
            row.category_label(),
            row.unit_type,
            row.date_mentioned_label()
        );
    }

    // Example 3: Custom keyword sets
    println!("\n3. Custom keyword set (German rent keyword):");
    let config = ClassifierConfig::new().with_categories(vec![CategoryKeywords::new(
        Category::Rent,
        &["zu vermieten"],
    )]);
    let german = Classifier::new(&config);
    let row = german.classify(Message::new("Hans", "Wohnung zu vermieten"));
    println!("   {} -> {}", row.content(), row.category_label());

    // Example 4: Export to CSV
    println!("\n4. CSV export:");
    let csv = to_csv(&rows)?;
    for line in csv.lines().take(3) {
        println!("   {}", line);
    }

    Ok(())
}
