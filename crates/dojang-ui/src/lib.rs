use std::sync::Arc;

use dojang_config::Config;
use dojang_types::{AppEvent, UiEvent};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::RwLock;

pub mod events;
pub mod render;
pub mod state;

use events::{Command, UiAction, handle_event, parse_line};
use state::UiState;

/// Line-oriented terminal front-end. Reads commands from stdin, ships
/// events to the backend, and prints the result table the backend
/// sends back.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
    categories: Vec<String>,
) -> anyhow::Result<()> {
    let width = { config.read().await.ui.table_width };
    let mut state = UiState::new(categories);

    println!("{}", events::HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            event = app_to_ui_rx.recv() => {
                match handle_event(event?, &mut state, width) {
                    UiAction::Print(output) => println!("{output}"),
                    UiAction::Quit => break,
                    UiAction::Ignore => {}
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("stdin closed, shutting down ui");
                    ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
                    break;
                };
                if !handle_line(&line, &state, &ui_to_app_tx).await? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Returns false when the loop should exit.
async fn handle_line(
    line: &str,
    state: &UiState,
    tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<bool> {
    match parse_line(line) {
        None => println!("Unknown command, :help for usage."),
        Some(Command::Search(text)) => {
            tx.send(AppEvent::SearchInput(text)).await?;
            // a full line entered is an explicit confirm
            tx.send(AppEvent::SubmitSearch).await?;
        }
        Some(Command::Category(name)) => {
            tx.send(AppEvent::CategorySelected(name)).await?;
        }
        Some(Command::ListCategories) => {
            println!("{}", render::render_categories(&state.categories));
        }
        Some(Command::Play(row)) => {
            let hit = state
                .results
                .as_ref()
                .and_then(|rows| rows.get(row.wrapping_sub(1)));
            match hit {
                Some(term) => {
                    tx.send(AppEvent::PlayAudio {
                        term_id: term.id.clone(),
                    })
                    .await?;
                }
                None => println!("No result row {row}."),
            }
        }
        Some(Command::Help) => println!("{}", events::HELP),
        Some(Command::Quit) => {
            tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
            return Ok(false);
        }
    }

    Ok(true)
}
