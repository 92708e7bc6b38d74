//! Interactive mode.
//!
//! Emulates the category selector, the time-range selector, the reset
//! button, and the keyboard shortcut with terminal prompts. Every action
//! that changes a selector re-renders and prints the result.

use dialoguer::{Input, Select};
use lagekarte_incident_models::{SHOW_ALL, TimeRange};
use lagekarte_map::RecordingMap;
use lagekarte_render::{ControlEvent, RenderController};

use crate::print_render;

/// Menu entries of the interactive loop.
enum Action {
    Category,
    TimeRange,
    Reset,
    Key,
    Quit,
}

impl Action {
    const ALL: &[Self] = &[
        Self::Category,
        Self::TimeRange,
        Self::Reset,
        Self::Key,
        Self::Quit,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Category => "Delikt wählen",
            Self::TimeRange => "Zeitraum wählen",
            Self::Reset => "Filter zurücksetzen",
            Self::Key => "Taste drücken",
            Self::Quit => "Beenden",
        }
    }
}

/// Runs the prompt loop until the user quits.
///
/// # Errors
///
/// Returns an error if a prompt cannot be shown (e.g. no terminal).
pub fn run(controller: &mut RenderController<RecordingMap>) -> Result<(), dialoguer::Error> {
    println!("Lagekarte");
    println!();

    let summary = controller.render();
    print_render(controller, &summary);

    let time_filter_enabled = controller.time_filter_enabled();
    let actions: Vec<&Action> = Action::ALL
        .iter()
        .filter(|action| time_filter_enabled || !matches!(action, Action::TimeRange))
        .collect();
    let labels: Vec<&str> = actions.iter().map(|action| action.label()).collect();

    loop {
        println!();
        let idx = Select::new()
            .with_prompt("Aktion")
            .items(&labels)
            .default(0)
            .interact()?;

        let event = match actions[idx] {
            Action::Category => Some(ControlEvent::TypeChanged(select_category(controller)?)),
            Action::TimeRange => Some(ControlEvent::TimeChanged(select_time_range(controller)?)),
            Action::Reset => Some(ControlEvent::ResetClicked),
            Action::Key => {
                let key: String = Input::new().with_prompt("Taste").interact_text()?;
                Some(ControlEvent::KeyPressed(key))
            }
            Action::Quit => None,
        };

        let Some(event) = event else {
            return Ok(());
        };

        match controller.handle(event) {
            Some(summary) => print_render(controller, &summary),
            None => println!("Keine Änderung."),
        }
    }
}

fn select_category(
    controller: &RenderController<RecordingMap>,
) -> Result<String, dialoguer::Error> {
    let mut options = vec![SHOW_ALL.to_string()];
    options.extend(controller.store().categories().into_iter().map(str::to_string));

    let current = options
        .iter()
        .position(|option| option == controller.filters().type_filter.control_value())
        .unwrap_or(0);

    let idx = Select::new()
        .with_prompt("Delikt")
        .items(&options)
        .default(current)
        .interact()?;

    Ok(options.swap_remove(idx))
}

fn select_time_range(
    controller: &RenderController<RecordingMap>,
) -> Result<String, dialoguer::Error> {
    let labels: Vec<&str> = TimeRange::all().iter().map(|range| range.label()).collect();
    let current = TimeRange::all()
        .iter()
        .position(|range| *range == controller.filters().time_filter)
        .unwrap_or(0);

    let idx = Select::new()
        .with_prompt("Zeitraum")
        .items(&labels)
        .default(current)
        .interact()?;

    Ok(TimeRange::all()[idx].to_string())
}
