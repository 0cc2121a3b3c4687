mod ai;
mod app;
mod cmd;
mod console;
mod menu;
mod menus;
mod output;
mod root;

use anyhow::Context;
use app::{App, AuthFailed};
use console::{Console, ConsoleError, Terminal};
use std::path::PathBuf;
use wingman_core::config::{Config, Env, WarnLevel, ENV_ROOT};
use wingman_core::paths;

fn main() {
    let env = Env::from_env();
    let default_level = if env.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    if let Err(e) = ctrlc::set_handler(|| {
        println!("\nExiting.");
        std::process::exit(0);
    }) {
        tracing::warn!("could not install interrupt handler: {e}");
    }

    let mut console: Box<dyn Console> = Box::new(Terminal::new());
    console.print("Welcome to WingmanEM.\n");

    if let Err(e) = run(console, env) {
        if matches!(e.downcast_ref::<ConsoleError>(), Some(ConsoleError::Closed)) {
            println!("\nExiting.");
            return;
        }
        if e.is::<AuthFailed>() {
            eprintln!("{e}");
        } else {
            eprintln!("Unexpected error: {e:#}");
        }
        std::process::exit(1);
    }
}

fn run(mut console: Box<dyn Console>, env: Env) -> anyhow::Result<()> {
    let explicit = std::env::var_os(ENV_ROOT).map(PathBuf::from);
    let root = root::resolve_root(explicit.as_deref());

    let config = Config::load(&root).with_context(|| {
        format!(
            "failed to load {}",
            paths::config_path(&root).display()
        )
    })?;
    for warning in config.validate() {
        match warning.level {
            WarnLevel::Warning => tracing::warn!("{}", warning.message),
            WarnLevel::Error => tracing::error!("{}", warning.message),
        }
    }
    let config = config.sanitized();

    if config.require_password && !app::authenticate(console.as_mut(), &env) {
        return Err(AuthFailed.into());
    }

    let generator = ai::build(&config.ai, &env);
    let mut app = App::open(console, &root, config, env, generator);
    app.refresh_daily_tip();

    menus::main_menu(&mut app)?;
    app.say("Goodbye.");
    Ok(())
}
