//! Built-in page state listing

use anyhow::Result;
use statelayout::{PageState, StateKind};

use crate::cli::output::{OutputFormat, print_formatted};

pub fn run(format: OutputFormat) -> Result<()> {
    let states: Vec<PageState> = StateKind::all()
        .iter()
        .map(StateKind::default_state)
        .collect();
    print_formatted(states.as_slice(), format, format_states)
}

fn format_states(states: &[PageState]) -> String {
    states
        .iter()
        .map(|state| {
            let text = if state.text().is_empty() {
                "<none>"
            } else {
                state.text()
            };
            let image = state
                .image()
                .map_or("<none>".to_string(), |id| id.to_string());
            format!(
                "{:<8} text: {:<10} image: {}",
                state.kind().name(),
                text,
                image
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_listing() {
        let states: Vec<PageState> = StateKind::all()
            .iter()
            .map(StateKind::default_state)
            .collect();
        let text = format_states(&states);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines.iter().any(|l| l.starts_with("Loading") && l.contains("加载中")));
        assert!(lines.iter().any(|l| l.starts_with("Content") && l.ends_with("<none>")));
    }
}
