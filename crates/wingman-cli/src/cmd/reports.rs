use crate::ai::report_failure;
use crate::app::App;
use crate::console::{Console, ConsoleError};
use crate::menu::Outcome;
use crate::output::{format_table, Column};
use chrono::NaiveDate;
use wingman_core::config::MAX_BATCH;
use wingman_core::dates::parse_date;
use wingman_core::generate::{self, CompletionError};
use wingman_core::report::{DirectReport, UNKNOWN_NAME};
use wingman_core::WingmanError;

const DATE_HINT: &str = "(YYYYMMDD or YYYY-MM-DD, or Enter to skip)";
const INVALID_DATE: &str =
    "  Invalid date. Use YYYY-MM-DD or YYYYMMDD (e.g. 2022-03-15 or 20220315). Try again.";
const EMPTY_LIST: &str = "\nNo direct reports yet. Add one from the menu.";
const DELETE_PROMPT: &str =
    "\nEnter the ID of the direct report to delete (or press Enter to return to menu): ";
const PURGE_PROMPT: &str = "\nAre you sure you want to delete ALL direct reports? (yes/no): ";
const RAW_PREVIEW_CHARS: usize = 800;

const COLUMNS: [Column; 12] = [
    Column::right("ID", 5),
    Column::left("First Name", 14),
    Column::left("Last Name", 14),
    Column::left("Street 1", 20),
    Column::left("City", 14),
    Column::left("State", 8),
    Column::left("Zipcode", 10),
    Column::left("Birthday", 12),
    Column::left("Hire Date", 12),
    Column::left("Current Role", 18),
    Column::left("Role Start", 12),
    Column::left("Partner", 14),
];

// ---------------------------------------------------------------------------
// Add
// ---------------------------------------------------------------------------

pub fn add(app: &mut App) -> anyhow::Result<Outcome> {
    let console = app.console.as_mut();
    console.print("\n--- Add Direct Report ---\n");

    let first_name = required(console, "First name (required): ")?;
    let last_name = required(console, "Last name (required): ")?;
    let report = DirectReport {
        street_address_1: optional(console, "Street address 1")?,
        street_address_2: optional(console, "Street address 2")?,
        city: optional(console, "City")?,
        state: optional(console, "State")?,
        zipcode: optional(console, "Zipcode")?,
        country: optional(console, "Country")?,
        birthday: date(console, "Birthday")?,
        hire_date: date(console, "Hire date")?,
        current_role: optional(console, "Current role")?,
        role_start_date: date(console, "Role start date")?,
        partner_name: optional(console, "Partner name")?,
        ..DirectReport::new(first_name, last_name)
    };

    let name = format!("{} {}", report.first_name, report.last_name);
    if let Err(e) = app.reports.add(report) {
        save_failed(app.console.as_mut(), &e);
    }
    app.say(&format!("\nAdded: {name}"));
    Ok(Outcome::Handled)
}

fn required(console: &mut dyn Console, prompt: &str) -> Result<String, ConsoleError> {
    let value = console.read_line(prompt)?;
    let value = value.trim();
    Ok(if value.is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        value.to_string()
    })
}

fn optional(console: &mut dyn Console, label: &str) -> Result<Option<String>, ConsoleError> {
    let value = console.read_line(&format!("{label} (or Enter to skip): "))?;
    let value = value.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

/// Re-prompts until the answer is blank or a valid date.
fn date(console: &mut dyn Console, label: &str) -> Result<Option<NaiveDate>, ConsoleError> {
    let prompt = format!("{label} {DATE_HINT}: ");
    loop {
        let value = console.read_line(&prompt)?;
        if value.trim().is_empty() {
            return Ok(None);
        }
        match parse_date(&value) {
            Some(d) => return Ok(Some(d)),
            None => console.print(INVALID_DATE),
        }
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

pub fn list(app: &mut App) -> anyhow::Result<Outcome> {
    print_list(app);
    Ok(Outcome::Handled)
}

/// Print the table, or the empty-store notice. Returns false when empty.
fn print_list(app: &mut App) -> bool {
    if app.reports.is_empty() {
        app.say(EMPTY_LIST);
        return false;
    }
    let rows: Vec<Vec<String>> = app.reports.reports().iter().map(row).collect();
    let total = rows.len();
    let console = app.console.as_mut();
    console.print("\nDirect Reports\n");
    for line in format_table(&COLUMNS, &rows) {
        console.print(&line);
    }
    console.print(&format!("Total: {total}"));
    true
}

fn row(r: &DirectReport) -> Vec<String> {
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    let day = |v: &Option<NaiveDate>| v.map(|d| d.to_string()).unwrap_or_default();
    vec![
        r.id.to_string(),
        r.first_name.clone(),
        r.last_name.clone(),
        text(&r.street_address_1),
        text(&r.city),
        text(&r.state),
        text(&r.zipcode),
        day(&r.birthday),
        day(&r.hire_date),
        text(&r.current_role),
        day(&r.role_start_date),
        text(&r.partner_name),
    ]
}

// ---------------------------------------------------------------------------
// Delete / purge
// ---------------------------------------------------------------------------

pub fn delete(app: &mut App) -> anyhow::Result<Outcome> {
    if !print_list(app) {
        return Ok(Outcome::Handled);
    }
    let raw = app.console.read_line(DELETE_PROMPT)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Outcome::HandledNoPause);
    }
    let Ok(id) = raw.parse::<u64>() else {
        app.say("Invalid input. Enter the ID number (e.g. from the list above).");
        return Ok(Outcome::Handled);
    };

    match app.reports.delete(id) {
        Ok(removed) => {
            tracing::debug!(id, "direct report removed");
            app.say(&format!(
                "Removed: {} {}",
                removed.first_name, removed.last_name
            ));
        }
        Err(WingmanError::ReportNotFound(id)) => app.say(&format!("No record with ID {id}.")),
        Err(e) => save_failed(app.console.as_mut(), &e),
    }
    Ok(Outcome::Handled)
}

pub fn purge(app: &mut App) -> anyhow::Result<Outcome> {
    if app.reports.is_empty() {
        app.say("\nNo direct reports to purge.");
        return Ok(Outcome::Handled);
    }
    print_list(app);
    let answer = app.console.read_line(PURGE_PROMPT)?;
    if answer.trim() != "yes" {
        app.say("\nPurge cancelled.");
        return Ok(Outcome::Handled);
    }
    let count = app.reports.len();
    if let Err(e) = app.reports.purge() {
        save_failed(app.console.as_mut(), &e);
    }
    tracing::debug!(count, "direct reports purged");
    app.say(&format!("\nPurged {count} direct report(s)."));
    Ok(Outcome::Handled)
}

// ---------------------------------------------------------------------------
// Generate
// ---------------------------------------------------------------------------

pub fn generate(app: &mut App) -> anyhow::Result<Outcome> {
    let default_batch = app.config.generation.default_batch;
    let console = app.console.as_mut();
    let Some(generator) = app.generator.as_deref() else {
        report_failure(console, &CompletionError::Unavailable);
        return Ok(Outcome::Handled);
    };

    console.print("\n--- Generate Direct Reports with Mistral AI ---");
    let raw = console.read_line(&format!(
        "How many direct reports to generate? (1-{MAX_BATCH}, default {default_batch}): "
    ))?;
    let count = match raw.trim() {
        "" => default_batch,
        text => match text.parse::<usize>() {
            Err(_) => {
                console.print(&format!(
                    "Invalid input. Using default of {default_batch} reports."
                ));
                default_batch
            }
            Ok(n) if !(1..=MAX_BATCH).contains(&n) => {
                console.print(&format!("Please enter a number between 1 and {MAX_BATCH}."));
                return Ok(Outcome::Handled);
            }
            Ok(n) => n,
        },
    };

    console.print(&format!(
        "\nGenerating {count} direct reports using Mistral AI...\n"
    ));
    let outcome = match generate::bulk_reports(
        &mut app.reports,
        count,
        generator,
        &app.config.generation,
    ) {
        Ok(outcome) => outcome,
        Err(WingmanError::Generation(e)) => {
            report_failure(console, &e);
            return Ok(Outcome::Handled);
        }
        Err(e) => return Err(e.into()),
    };

    for name in &outcome.skipped {
        console.print(&format!("  Skipped duplicate: {name}"));
    }
    for report in &outcome.added {
        console.print(&format!("  ✓ Added: {}", report.full_name()));
    }

    if outcome.parsed == 0 {
        console.print("\nCould not parse any valid direct reports from the response.");
        if app.env.debug {
            let preview: String = outcome.raw_response.chars().take(RAW_PREVIEW_CHARS).collect();
            console.eprint(&format!(
                "Raw response (first {RAW_PREVIEW_CHARS} chars):\n{preview}"
            ));
        }
    } else {
        console.print(&format!(
            "\nSuccessfully added {} direct report(s).",
            outcome.added.len()
        ));
    }
    if let Some(e) = &outcome.save_error {
        save_failed(console, e);
    }
    Ok(Outcome::Handled)
}

fn save_failed(console: &mut dyn Console, e: &WingmanError) {
    tracing::error!("direct reports save failed: {e}");
    console.eprint(&format!("Could not save direct reports: {e}"));
}
