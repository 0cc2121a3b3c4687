use crate::app::App;
use crate::menu::Outcome;

pub fn by_date(app: &mut App) -> anyhow::Result<Outcome> {
    let lines: Vec<String> = app
        .tips
        .tips()
        .iter()
        .map(|tip| format!("  {}:  {}", tip.date, tip.text))
        .collect();

    app.say("\n--- Management Tips by Date ---\n");
    if lines.is_empty() {
        app.say("No tips yet.");
    }
    for line in &lines {
        app.say(line);
    }
    Ok(Outcome::Handled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{fixed_today, scripted_app};
    use chrono::Days;
    use tempfile::TempDir;

    #[test]
    fn lists_oldest_first() {
        let dir = TempDir::new().unwrap();
        let (mut app, t) = scripted_app(&dir, &[], None);
        let yesterday = fixed_today() - Days::new(1);
        app.tips.append(yesterday, "Protect focus time.").unwrap();
        app.tips.append(fixed_today(), "Name the decision owner.").unwrap();

        by_date(&mut app).unwrap();
        assert_eq!(
            t.borrow().out[1..],
            [
                "  2026-02-28:  Protect focus time.".to_string(),
                "  2026-03-01:  Name the decision owner.".to_string(),
            ]
        );
    }

    #[test]
    fn empty_store_says_so() {
        let dir = TempDir::new().unwrap();
        let (mut app, t) = scripted_app(&dir, &[], None);
        by_date(&mut app).unwrap();
        assert_eq!(t.borrow().out.last().map(String::as_str), Some("No tips yet."));
    }
}
