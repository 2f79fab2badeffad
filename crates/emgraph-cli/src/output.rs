//! Human-readable summaries.

use emgraph_core::budget::{BudgetReport, TaggingReport, ValueSource};
use emgraph_core::migration::{FileReport, MigrationReport, RelationshipReport};

pub fn print_migration(report: &MigrationReport) {
    println!();
    println!("Migration summary");
    println!("=================");
    println!(
        "Started {}",
        report
            .started_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
    );
    for file in &report.files {
        print_file(file);
    }
    print_relationships(&report.relationships);
    println!();
    println!(
        "{} entities, {} relationships in {:.1}s",
        report.entities_migrated(),
        report.relationships.committed,
        report.duration().num_milliseconds() as f64 / 1000.0
    );
    if report.has_warnings() {
        println!(
            "Completed with warnings: {} skipped, {} invalid, {} dangling",
            report.records_skipped(),
            report.records_invalid(),
            report.relationships.dangling.len()
        );
    }
}

fn print_file(file: &FileReport) {
    println!();
    println!(
        "{} ({} records)",
        file.label.as_deref().unwrap_or(&file.file),
        file.records
    );
    for (class, count) in file.census() {
        println!("  {:<40} {:>8}", class, count);
    }
    for (class, count) in &file.skipped_unknown {
        println!("  skipped {:<32} {:>8}", class, count);
    }
    for failure in file.invalid.iter().chain(&file.rejected) {
        println!(
            "  ! #{} {}: {}",
            failure.index,
            failure.iid.as_deref().unwrap_or("-"),
            failure.message
        );
    }
}

pub fn print_relationships(report: &RelationshipReport) {
    println!();
    println!(
        "Relationships: {} detected, {} committed",
        report.detected, report.committed
    );
    for (relationship, count) in report.census() {
        println!("  {:<40} {:>8}", relationship, count);
    }
    for failure in &report.dangling {
        println!("  dangling {}", failure.descriptor);
    }
    for failure in &report.rejected {
        println!("  rejected {}: {}", failure.descriptor, failure.message);
    }
}

pub fn print_tagging(report: &TaggingReport) {
    println!(
        "Tagged {} value sets over {} options ({} mass parameters, {} already tagged)",
        report.tagged, report.options, report.mass_parameters, report.existing
    );
}

pub fn print_budget(report: &BudgetReport) {
    println!();
    println!("Mass budget: {} ({})", report.display_name(), report.option);
    println!(
        "  {:<30} {:>10} {:<10} {:>6} {:>8} {:>12}",
        "element", "published", "unit", "qty", "margin", "total [kg]"
    );
    for item in &report.line_items {
        println!(
            "  {:<30} {:>10} {:<10} {:>6}{} {:>7}%{} {:>12.5}",
            item.element.as_deref().unwrap_or(&item.value_set),
            item.published,
            item.unit,
            item.quantity.value,
            marker(item.quantity.source),
            item.margin.value,
            marker(item.margin.source),
            item.total
        );
    }
    println!("  total:                    {:>12.5} kg", report.total);
    println!(
        "  with {}% system margin:   {:>12.5} kg",
        report.system_margin, report.total_with_system_margin
    );

    for unit in &report.unconverted_units {
        println!("  ! unit '{unit}' is not a mass unit, summed as-is");
    }
    for unresolved in &report.unresolved {
        println!("  ! {}: {}", unresolved.value_set, unresolved.reason);
    }
}

fn marker(source: ValueSource) -> &'static str {
    match source {
        ValueSource::Parameter => " ",
        ValueSource::Default => "*",
        ValueSource::OptionFallback => "!",
    }
}
