use dojang_types::{AppEvent, UiEvent};

use crate::render;
use crate::state::UiState;

/// What the ui loop should do with a backend event.
pub enum UiAction {
    Print(String),
    Quit,
    Ignore,
}

pub fn handle_event(event: AppEvent, state: &mut UiState, width: u16) -> UiAction {
    match event {
        AppEvent::ShowResults(rows) => {
            tracing::debug!("Showing {} results", rows.len());
            let output = render::render_results(&rows, width);
            state.results = Some(rows);
            UiAction::Print(output)
        }
        AppEvent::UiEvent(UiEvent::Close) => UiAction::Quit,
        AppEvent::UiEvent(UiEvent::Show | UiEvent::Hide) => UiAction::Ignore,
        _ => UiAction::Ignore,
    }
}

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Category(String),
    ListCategories,
    Play(usize),
    Help,
    Quit,
}

/// `:`-prefixed lines are commands; anything else is search text.
pub fn parse_line(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Some(Command::Search(String::new()));
    }

    if let Some(rest) = line.strip_prefix(':') {
        let (name, arg) = match rest.split_once(' ') {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        return match name {
            "c" | "category" => Some(Command::Category(if arg.is_empty() {
                "all".to_string()
            } else {
                arg.to_string()
            })),
            "categories" => Some(Command::ListCategories),
            "play" => arg.parse().ok().map(Command::Play),
            "help" | "h" => Some(Command::Help),
            "quit" | "q" => Some(Command::Quit),
            _ => None,
        };
    }

    Some(Command::Search(line.to_string()))
}

pub const HELP: &str = "\
Type to search (matches English, Hangul, romanization, belt, category).
  :category <name>   filter by category (:category alone resets to all)
  :categories        list categories
  :play <row>        pronounce the term on that result row
  :help              this message
  :quit              exit";
