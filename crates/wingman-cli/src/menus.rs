//! The menu tree: main menu, its two areas and the direct-report admin menu.

use crate::app::App;
use crate::cmd::{placeholder, reminders, reports, tips};
use crate::menu::{render, run_menu, Action, MenuOption, Middle, MiddlePosition, Outcome, Panel};

const MAIN_TITLE: &str = "WingmanEM — Main Menu";
const PROJECT_TITLE: &str = "Project Creation & Estimation";
const PEOPLE_TITLE: &str = "People Management & Coaching";
const REPORTS_TITLE: &str = "Administer Direct Reports";

const TIP_LABEL: &str = "DAILY MANAGEMENT TIP:";
const ABOUT: &str = "WingmanEM is your engineering management wingman. Keep track of \
your direct reports and their milestones, and start each day with a fresh coaching tip.";

const SPEC_BREAKDOWN: &str = "Input project spec (get structured breakdown)";
const JIRA_SYNC: &str = "Sync breakdown to Jira";
const PROJECT_STATUS: &str = "Ask about project status (natural language)";
const RECORDING: &str = "Upload 1:1 recording (summarize & action items)";
const TRENDS: &str = "View 1:1 trends analysis";
const FOLLOW_UPS: &str = "Get suggested follow-up topics";

fn numbered(options: &[(&str, bool, bool)]) -> Vec<MenuOption> {
    options
        .iter()
        .enumerate()
        .map(|(i, (label, enabled, emphasized))| {
            let option = MenuOption::new(format!("{}. {label}", i + 1)).enabled(*enabled);
            if *emphasized {
                option.emphasized()
            } else {
                option
            }
        })
        .collect()
}

fn frame(app: &App, title: &str, options: &[MenuOption], middle: &[Middle]) -> String {
    render(&Panel {
        title,
        options,
        width: app.config.menu_width,
        middle,
        position: MiddlePosition::Bottom,
    })
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

/// Rebuilt on every draw so the tip slot always shows the latest tip.
fn main_frame(app: &App) -> String {
    let options = numbered(&[
        (PROJECT_TITLE, true, false),
        (PEOPLE_TITLE, true, true),
        ("Exit", true, false),
    ]);
    let middle = [
        Middle::Labeled {
            label: TIP_LABEL.to_string(),
            body: app.tips.latest().to_string(),
        },
        Middle::Paragraph(ABOUT.to_string()),
    ];
    frame(app, MAIN_TITLE, &options, &middle)
}

pub fn main_menu(app: &mut App) -> anyhow::Result<()> {
    let actions: &[(u32, Action<'_, App>)] = &[(1, &project_menu), (2, &people_menu)];
    run_menu(app, main_frame, 3, actions)
}

// ---------------------------------------------------------------------------
// Project Creation & Estimation
// ---------------------------------------------------------------------------

fn project_frame(app: &App) -> String {
    let options = numbered(&[
        (SPEC_BREAKDOWN, false, false),
        (JIRA_SYNC, false, false),
        (PROJECT_STATUS, false, false),
        ("Back to main menu", true, false),
    ]);
    frame(app, PROJECT_TITLE, &options, &[])
}

fn project_menu(app: &mut App) -> anyhow::Result<Outcome> {
    let actions: &[(u32, Action<'_, App>)] = &[
        (1, &|app: &mut App| placeholder::announce(app, SPEC_BREAKDOWN)),
        (2, &|app: &mut App| placeholder::announce(app, JIRA_SYNC)),
        (3, &|app: &mut App| placeholder::announce(app, PROJECT_STATUS)),
    ];
    run_menu(app, project_frame, 4, actions)?;
    Ok(Outcome::HandledNoPause)
}

// ---------------------------------------------------------------------------
// People Management & Coaching
// ---------------------------------------------------------------------------

fn people_frame(app: &App) -> String {
    let options = numbered(&[
        (RECORDING, false, false),
        (TRENDS, false, false),
        (FOLLOW_UPS, false, false),
        ("View milestone reminders (anniversaries, birthdays)", true, false),
        (REPORTS_TITLE, true, true),
        ("View management tips by date", true, true),
        ("Back to main menu", true, false),
    ]);
    frame(app, PEOPLE_TITLE, &options, &[])
}

fn people_menu(app: &mut App) -> anyhow::Result<Outcome> {
    let actions: &[(u32, Action<'_, App>)] = &[
        (1, &|app: &mut App| placeholder::announce(app, RECORDING)),
        (2, &|app: &mut App| placeholder::announce(app, TRENDS)),
        (3, &|app: &mut App| placeholder::announce(app, FOLLOW_UPS)),
        (4, &reminders::milestones),
        (5, &direct_reports_menu),
        (6, &tips::by_date),
    ];
    run_menu(app, people_frame, 7, actions)?;
    Ok(Outcome::HandledNoPause)
}

// ---------------------------------------------------------------------------
// Administer Direct Reports
// ---------------------------------------------------------------------------

fn reports_frame(app: &App) -> String {
    let options = numbered(&[
        ("Add direct report", true, false),
        ("List direct reports", true, false),
        ("Delete direct report", true, false),
        ("Generate direct reports with Mistral AI", app.ai_enabled(), false),
        ("Purge all direct reports", true, false),
        ("Back to previous menu", true, false),
    ]);
    frame(app, REPORTS_TITLE, &options, &[])
}

fn direct_reports_menu(app: &mut App) -> anyhow::Result<Outcome> {
    let always: &[(u32, Action<'_, App>)] = &[
        (1, &reports::add),
        (2, &reports::list),
        (3, &reports::delete),
        (5, &reports::purge),
    ];
    let mut actions = always.to_vec();
    if app.ai_enabled() {
        let generate: Action<'_, App> = &reports::generate;
        actions.push((4, generate));
    }
    run_menu(app, reports_frame, 6, &actions)?;
    Ok(Outcome::HandledNoPause)
}
