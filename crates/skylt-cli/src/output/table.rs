use skylt_core::generate::GenerateOutcome;
use skylt_core::model::{Project, RowField};
use skylt_core::validate::Issue;

pub fn print_outcome(outcome: &GenerateOutcome) {
    if !outcome.matched_anything() {
        println!(
            "No keyword matches found. You can still add rows manually or drop bundles from the palette."
        );
        return;
    }

    let matched: Vec<&str> = outcome.matched.iter().map(|c| c.as_str()).collect();
    println!("Matched ({}): {}", outcome.preset, matched.join(", "));
    println!(
        "Generated {} row(s), net change {:+}",
        outcome.generated, outcome.net_delta
    );
    if outcome.removed_duplicates > 0 {
        println!("Removed {} duplicate(s)", outcome.removed_duplicates);
    }
}

pub fn print_issues(issues: &[Issue]) {
    if issues.is_empty() {
        println!("All good!");
        return;
    }
    println!("{} issue(s):", issues.len());
    for issue in issues {
        println!("  - {issue}");
    }
}

pub fn print_schedule(project: &Project) {
    println!(
        "{} [{}]  building: {}  level: {}\n",
        project.name,
        project.id,
        display_or_dash(&project.building),
        display_or_dash(&project.level)
    );

    if project.schedule.is_empty() {
        println!("  (empty schedule)");
        return;
    }

    // Column widths from header and contents.
    let mut widths = RowField::ALL.map(|f| f.header().len());
    for row in &project.schedule {
        for (w, value) in widths.iter_mut().zip(row.values()) {
            *w = (*w).max(value.len());
        }
    }
    let index_width = project.schedule.len().to_string().len().max(1);

    let header: Vec<String> = RowField::ALL
        .iter()
        .zip(widths)
        .map(|(f, w)| format!("{:<w$}", f.header()))
        .collect();
    println!("  {:>index_width$}  {}", "#", header.join("  "));

    for (i, row) in project.schedule.iter().enumerate() {
        let cells: Vec<String> = row
            .values()
            .iter()
            .zip(widths)
            .map(|(v, w)| format!("{v:<w$}"))
            .collect();
        println!("  {:>index_width$}  {}", i + 1, cells.join("  ").trim_end());
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}
