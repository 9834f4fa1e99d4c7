use crate::github::Event;

mod github;
pub use github::describe_event;

pub(crate) mod utils;

/// Printed instead of the summary when there is nothing to show, whatever the reason.
pub const NO_EVENTS: &str = "No events found or request failed.";

/// Turns the result of a fetch into the lines to print.
///
/// At most `limit` events are summarized, in the order the API returned them (most recent first).
pub fn render(events: Option<Vec<Event>>, limit: usize) -> Vec<String> {
    match events {
        Some(events) if !events.is_empty() => {
            events.iter().take(limit).map(describe_event).collect()
        }
        _ => vec![NO_EVENTS.to_owned()],
    }
}
