use std::io::{BufRead, IsTerminal, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input reached end-of-file; the session is over.
    #[error("input closed")]
    Closed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The terminal primitives every menu and action goes through.
pub trait Console {
    /// Show `prompt` without a newline and read one line, newline stripped.
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError>;
    /// Like `read_line`, without echoing what is typed.
    fn read_secret(&mut self, prompt: &str) -> Result<String, ConsoleError>;
    fn clear(&mut self);
    /// Print `text` followed by a newline.
    fn print(&mut self, text: &str);
    /// Print `text` followed by a newline on the error channel.
    fn eprint(&mut self, text: &str);
}

// ---------------------------------------------------------------------------
// Terminal
// ---------------------------------------------------------------------------

/// Stdin/stdout console. Screen clearing and masked input only happen when
/// attached to a terminal; piped sessions get plain line I/O.
pub struct Terminal {
    interactive: bool,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            interactive: std::io::stdin().is_terminal() && std::io::stdout().is_terminal(),
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn read_secret(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        if !self.interactive {
            return self.read_line(prompt);
        }
        // dialoguer appends its own ": " after the prompt.
        let label = prompt.trim_end().trim_end_matches(':');
        dialoguer::Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| {
                let dialoguer::Error::IO(io) = e;
                if io.kind() == std::io::ErrorKind::UnexpectedEof {
                    ConsoleError::Closed
                } else {
                    ConsoleError::Io(io)
                }
            })
    }

    fn clear(&mut self) {
        if !self.interactive {
            return;
        }
        let mut stdout = std::io::stdout();
        if let Err(e) = crossterm::execute!(
            stdout,
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
            crossterm::cursor::MoveTo(0, 0)
        ) {
            tracing::debug!("clear screen failed: {e}");
        }
    }

    fn print(&mut self, text: &str) {
        println!("{text}");
    }

    fn eprint(&mut self, text: &str) {
        eprintln!("{text}");
    }
}

// ---------------------------------------------------------------------------
// Scripted console (tests)
// ---------------------------------------------------------------------------

#[cfg(test)]
pub use scripted::{ScriptedConsole, Transcript};

#[cfg(test)]
mod scripted {
    use super::{Console, ConsoleError};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Everything a scripted session wrote, shared with the test body.
    #[derive(Debug, Default)]
    pub struct Transcript {
        pub out: Vec<String>,
        pub err: Vec<String>,
        pub prompts: Vec<String>,
        pub clears: usize,
    }

    impl Transcript {
        pub fn stdout(&self) -> String {
            self.out.join("\n")
        }

        pub fn stderr(&self) -> String {
            self.err.join("\n")
        }
    }

    /// Feeds canned input lines; reports `Closed` once they run out.
    pub struct ScriptedConsole {
        input: VecDeque<String>,
        transcript: Rc<RefCell<Transcript>>,
    }

    impl ScriptedConsole {
        pub fn new(lines: &[&str]) -> (Self, Rc<RefCell<Transcript>>) {
            let transcript = Rc::new(RefCell::new(Transcript::default()));
            let console = Self {
                input: lines.iter().map(|l| l.to_string()).collect(),
                transcript: Rc::clone(&transcript),
            };
            (console, transcript)
        }
    }

    impl Console for ScriptedConsole {
        fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
            self.transcript.borrow_mut().prompts.push(prompt.to_string());
            self.input.pop_front().ok_or(ConsoleError::Closed)
        }

        fn read_secret(&mut self, prompt: &str) -> Result<String, ConsoleError> {
            self.read_line(prompt)
        }

        fn clear(&mut self) {
            self.transcript.borrow_mut().clears += 1;
        }

        fn print(&mut self, text: &str) {
            self.transcript.borrow_mut().out.push(text.to_string());
        }

        fn eprint(&mut self, text: &str) {
            self.transcript.borrow_mut().err.push(text.to_string());
        }
    }
}
