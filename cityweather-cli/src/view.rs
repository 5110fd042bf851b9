//! Text rendering of board slots and search outcomes.
//!
//! Everything here is a pure function of the display state it is given.

use cityweather_core::{City, CurrentConditions, SearchState, SlotState};

pub const LOADING: &str = "Loading...";

const RULE: &str = "------------------------------";

/// One weather card: title line followed by its body.
pub fn render_card(title: &str, slot: &SlotState) -> String {
    let body = if slot.is_loading {
        format!("  {LOADING}")
    } else if slot.has_error {
        "  Error".to_string()
    } else if let Some(data) = &slot.data {
        render_conditions(data)
    } else {
        "  No data".to_string()
    };

    format!("{title}\n{body}")
}

fn render_conditions(data: &CurrentConditions) -> String {
    let mut lines = vec![
        format!("  {}°C Temperature", data.temperature_2m),
        match data.precipitation_probability {
            Some(pct) => format!("  {pct}% Rain Prob."),
            None => "  -% Rain Prob.".to_string(),
        },
        format!("  {}", data.category()),
    ];

    if let Some(at) = data.observed_at() {
        lines.push(format!("  as of {}", at.format("%Y-%m-%d %H:%M")));
    }

    lines.join("\n")
}

/// All cards, in city order.
pub fn render_board(cities: &[City], slots: &[SlotState]) -> String {
    cities
        .iter()
        .zip(slots)
        .map(|(city, slot)| render_card(&city.name, slot))
        .collect::<Vec<_>>()
        .join(&format!("\n{RULE}\n"))
}

/// Search section, or `None` before the first search.
pub fn render_search(state: &SearchState) -> Option<String> {
    match state {
        SearchState::Idle => None,
        SearchState::Loading => Some(LOADING.to_string()),
        SearchState::Resolved(result) => {
            let card =
                render_card(&result.display_name, &SlotState::loaded(result.conditions.clone()));
            // Country goes on its own line so the title stays the geocoder's name.
            Some(match &result.country {
                Some(country) => card.replacen('\n', &format!("\n  {country}\n"), 1),
                None => card,
            })
        }
        SearchState::NotFound | SearchState::Errored => state.message().map(str::to_string),
    }
}
