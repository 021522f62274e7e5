//! Language detection and redirect for the guide's landing page.

pub mod controller;
pub mod resolver;
pub mod state;
pub mod timer;

use std::path::Path;

use colored::*;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::info;

pub use controller::RedirectController;
pub use resolver::resolve_language;
pub use state::DetectionState;

use crate::config::{RedirectConfig, CONFIG_FILE};
use crate::error::RedirectError;
use crate::storage::{JsonFileStore, KeyValueStore};
use crate::ui::language::LanguageCode;
use crate::ui::localization::{Localization, LocalizationKey};
use crate::ui::navigator::{LocationNavigator, Navigator};
use crate::ui::terminal::{language_table, TerminalPresenter};
use crate::utils::helpers::{collect_language_tags, parse_command, ConsoleCommand};

/// How a page visit ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitOutcome {
    pub state: DetectionState,
    /// Page the browsing context moved to, if any
    pub location: Option<String>,
}

/// Drive one landing-page visit in the terminal.
///
/// Console lines act as the page controls: `c` is the cancel control and a
/// language code is that language's link. The visit ends on redirect, after
/// a language link is followed, or when input closes once the countdown is
/// over.
pub async fn run_visit<R>(
    config: &RedirectConfig,
    tags: &[String],
    session_store: impl KeyValueStore + 'static,
    input: R,
) -> Result<VisitOutcome, RedirectError>
where
    R: AsyncBufRead + Unpin,
{
    let localization = Localization::new(LanguageCode::En);

    // Title Block
    let separator = "=".repeat(60);
    println!("\n{}", separator);
    println!("{:^60}", localization.get(LocalizationKey::Title).bold().cyan());
    println!("{}\n", separator);
    println!("{}", localization.get(LocalizationKey::AvailableLanguages).bold().yellow());
    println!("{}\n", language_table(&localization, None));

    let navigator = LocationNavigator::new();
    let controller = RedirectController::new(
        config.clone(),
        session_store,
        TerminalPresenter::new(config.countdown_seconds),
        navigator.clone(),
    );
    let mut states = controller.subscribe();
    controller.init(tags);

    // Language links navigate on their own, outside the controller.
    let mut link = navigator.clone();
    let mut lines = input.lines();
    let mut input_open = true;

    loop {
        let state = controller.state();
        if matches!(state, DetectionState::Redirected(_)) || navigator.location().is_some() {
            break;
        }
        if !input_open && state.is_terminal() {
            break;
        }

        tokio::select! {
            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            line = lines.next_line(), if input_open => {
                match line? {
                    Some(line) => match parse_command(&line) {
                        Some(ConsoleCommand::Cancel) => controller.cancel(),
                        Some(ConsoleCommand::Select(code)) => {
                            controller.select_language(code);
                            link.assign(code.entry().target_page);
                        }
                        None if line.trim().is_empty() => {}
                        None => {
                            println!("{}", localization.get_unknown_command(line.trim()).red());
                            println!("{}", localization.get(LocalizationKey::CancelHint).dimmed());
                        }
                    },
                    None => input_open = false,
                }
            }
        }
    }

    controller.teardown();
    let outcome = VisitOutcome {
        state: controller.state(),
        location: navigator.location(),
    };
    info!(state = %outcome.state, location = ?outcome.location, "visit finished");
    Ok(outcome)
}

/// Entry point of the terminal front-end: configuration from `redirect.json`,
/// language preferences from arguments or the environment, commands from stdin.
pub async fn run_guide() -> Result<VisitOutcome, RedirectError> {
    let config = RedirectConfig::load(Path::new(CONFIG_FILE))?;
    let tags = collect_language_tags(std::env::args().skip(1), |key| std::env::var(key).ok());
    info!(?tags, "browser language preferences");

    let session_path = config.session_path();
    info!(path = %session_path.display(), "session store");
    let store = JsonFileStore::new(session_path);

    run_visit(&config, &tags, store, BufReader::new(tokio::io::stdin())).await
}
