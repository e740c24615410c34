use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use jispen_ingest::Catalogue;
use jispen_validate::{CheckReport, Severity};

use jispen_cli::pipeline::ExportOutcome;

pub fn print_export_summary(outcome: &ExportOutcome) {
    if let Some(path) = &outcome.output {
        println!("Export: {}", path.display());
    }
    println!("Records: {}", outcome.records);
    if let Some(report) = &outcome.report {
        print_check_report(report);
    }
}

pub fn print_check_report(report: &CheckReport) {
    println!(
        "Checked {} records: {} errors, {} warnings",
        report.records,
        report.error_count(),
        report.warning_count()
    );
    if report.issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Record"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut issues: Vec<_> = report.issues.iter().collect();
    issues.sort_by_key(|issue| issue.severity);
    for issue in issues {
        let severity = match issue.severity {
            Severity::Error => Cell::new("error").fg(Color::Red),
            Severity::Warning => Cell::new("warning").fg(Color::Yellow),
        };
        let record = issue
            .record_id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        table.add_row(vec![
            severity,
            Cell::new(issue.code.as_str()),
            Cell::new(record),
            Cell::new(&issue.message),
        ]);
    }
    println!("{table}");
}

pub fn print_catalogue(catalogue: &Catalogue) {
    print_lookup(
        "Waste",
        catalogue
            .wastes
            .iter()
            .map(|w| (w.uid.as_str(), w.name.as_str(), Some(w.category.as_str()))),
    );
    print_lookup(
        "Loading code",
        catalogue.loading_codes.iter().map(|c| {
            let flag = if c.require_waste_company {
                Some("requires waste company")
            } else {
                None
            };
            (c.uid.as_str(), c.name.as_str(), flag)
        }),
    );
    print_lookup(
        "Territorial unit",
        catalogue
            .territorial_units
            .iter()
            .map(|u| (u.uid.as_str(), u.name.as_str(), None)),
    );
    print_lookup(
        "Zip code",
        catalogue
            .zipcodes
            .iter()
            .map(|z| (z.uid.as_str(), z.name.as_str(), None)),
    );
}

fn print_lookup<'a>(title: &str, rows: impl Iterator<Item = (&'a str, &'a str, Option<&'a str>)>) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(title),
        header_cell("Name"),
        header_cell("Note"),
    ]);
    apply_table_style(&mut table);
    let mut count = 0usize;
    for (uid, name, note) in rows {
        count += 1;
        table.add_row(vec![
            Cell::new(uid),
            Cell::new(name),
            note.map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    if count > 0 {
        println!("{table}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
