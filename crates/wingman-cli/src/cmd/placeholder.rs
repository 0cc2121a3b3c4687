use crate::app::App;
use crate::menu::Outcome;

/// Leaf for a menu entry that has no behavior yet.
pub fn announce(app: &mut App, what: &str) -> anyhow::Result<Outcome> {
    app.say(&format!("\n[Placeholder] {what} — not yet implemented."));
    Ok(Outcome::Handled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::scripted_app;
    use tempfile::TempDir;

    #[test]
    fn prints_stub_line() {
        let dir = TempDir::new().unwrap();
        let (mut app, t) = scripted_app(&dir, &[], None);
        assert_eq!(announce(&mut app, "Sync breakdown to Jira").unwrap(), Outcome::Handled);
        assert_eq!(
            t.borrow().out,
            vec!["\n[Placeholder] Sync breakdown to Jira — not yet implemented.".to_string()]
        );
    }
}
