use crate::console::Console;
use crate::menu::MenuHost;
use chrono::NaiveDate;
use std::path::Path;
use thiserror::Error;
use wingman_core::config::{Config, Env};
use wingman_core::generate::{self, Completion, CompletionError, TipOutcome};
use wingman_core::report::ReportStore;
use wingman_core::tip::TipStore;
use wingman_core::WingmanError;

#[derive(Debug, Error)]
#[error("Authentication failed. Exiting.")]
pub struct AuthFailed;

/// Everything one interactive session works on. Both stores are loaded once
/// at startup and saved after each mutation.
pub struct App {
    pub console: Box<dyn Console>,
    pub config: Config,
    pub env: Env,
    pub reports: ReportStore,
    pub tips: TipStore,
    /// `None` when AI generation is switched off in the config.
    pub generator: Option<Box<dyn Completion>>,
    pub clock: fn() -> NaiveDate,
}

pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl App {
    pub fn open(
        console: Box<dyn Console>,
        root: &Path,
        config: Config,
        env: Env,
        generator: Option<Box<dyn Completion>>,
    ) -> Self {
        let clock: fn() -> NaiveDate = local_today;
        let reports = ReportStore::open(config.reports_path(root));
        let tips = TipStore::open(config.tips_path(root), clock());
        tracing::debug!(
            root = %root.display(),
            reports = reports.len(),
            tips = tips.tips().len(),
            "stores loaded"
        );
        Self {
            console,
            config,
            env,
            reports,
            tips,
            generator,
            clock,
        }
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    pub fn ai_enabled(&self) -> bool {
        self.generator.is_some()
    }

    pub fn say(&mut self, text: &str) {
        self.console.print(text);
    }

    /// Make sure today's tip exists. Never interrupts the operator: every
    /// failure ends up in the log only.
    pub fn refresh_daily_tip(&mut self) {
        let today = self.today();
        let Some(generator) = self.generator.as_deref() else {
            return;
        };
        let result = generate::daily_tip(
            &mut self.tips,
            generator,
            today,
            &mut rand::thread_rng(),
            &self.config.generation,
        );
        match result {
            Ok(TipOutcome::Fresh) => {}
            Ok(TipOutcome::Added(tip)) => tracing::debug!(date = %tip.date, "daily tip refreshed"),
            Ok(TipOutcome::Exhausted {
                attempts,
                empty_replies,
            }) => tracing::warn!(attempts, empty_replies, "no new daily tip after retries"),
            Err(WingmanError::Generation(CompletionError::MissingCredential)) => {
                tracing::debug!("skipping daily tip refresh: no API key")
            }
            Err(e) => tracing::warn!("could not refresh daily tip: {e}"),
        }
    }
}

impl MenuHost for App {
    fn console(&mut self) -> &mut dyn Console {
        self.console.as_mut()
    }
}

/// Ask for the session password once. Closed input counts as a failure.
pub fn authenticate(console: &mut dyn Console, env: &Env) -> bool {
    match console.read_secret("Password: ") {
        Ok(given) => given == env.expected_password(),
        Err(e) => {
            tracing::debug!("password prompt failed: {e}");
            false
        }
    }
}
