use crate::console::{Console, ConsoleError};

/// What an action reports back to the selection loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Output stays on screen until the operator presses Enter.
    Handled,
    /// The action already managed its own screen (nested menu, cancelled
    /// prompt); redraw immediately.
    HandledNoPause,
}

pub type Action<'a, H> = &'a dyn Fn(&mut H) -> anyhow::Result<Outcome>;

/// Anything that owns the console a menu loop talks to.
pub trait MenuHost {
    fn console(&mut self) -> &mut dyn Console;
}

pub const PAUSE_PROMPT: &str = "\nPress Enter to continue...";
pub const INVALID_OPTION: &str = "Invalid option.";

/// Run a selection loop until the operator picks `max_option` (Back/Exit).
///
/// The screen is cleared and `render` is called before every prompt, so
/// data-dependent menus always show current state. Choices outside
/// `1..=max_option` and numbers with no registered action are rejected with
/// [`INVALID_OPTION`] and a pause.
pub fn run_menu<H: MenuHost>(
    host: &mut H,
    render: impl Fn(&H) -> String,
    max_option: u32,
    actions: &[(u32, Action<'_, H>)],
) -> anyhow::Result<()> {
    let prompt = format!("Select an option (1–{max_option}): ");
    loop {
        let frame = render(&*host);
        let console = host.console();
        console.clear();
        console.print(&frame);
        let raw = console.read_line(&prompt)?;

        let action = match parse_choice(&raw, max_option) {
            Some(choice) if choice == max_option => return Ok(()),
            Some(choice) => actions.iter().find(|(n, _)| *n == choice).map(|(_, a)| *a),
            None => None,
        };

        let Some(action) = action else {
            tracing::debug!(input = %raw.trim(), "rejected menu input");
            let console = host.console();
            console.print(INVALID_OPTION);
            pause(console)?;
            continue;
        };

        if action(host)? == Outcome::Handled {
            pause(host.console())?;
        }
    }
}

/// Block until the operator presses Enter.
pub fn pause(console: &mut dyn Console) -> Result<(), ConsoleError> {
    console.read_line(PAUSE_PROMPT).map(|_| ())
}

fn parse_choice(raw: &str, max_option: u32) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|n| (1..=max_option).contains(n))
}
