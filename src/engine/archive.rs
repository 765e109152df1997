//! Popular past events ranking

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::models::Event;
use crate::utils::logging::{log_archive_ranking, log_dateless_event};
use super::window::resolve_window;

/// Rank archived events by popularity
///
/// An event is archived once its effective end is strictly before
/// `now - grace`; a cutoff outside the representable range archives
/// nothing. Ordering is `popularity_score` descending, then effective
/// end descending. The input is left untouched. Events without a usable
/// schedule are skipped.
pub fn rank_archived(
    events: &[Event],
    now: DateTime<Utc>,
    grace: Duration,
    limit: usize,
    tz: Tz,
) -> Vec<Event> {
    let cutoff = match now.checked_sub_signed(grace) {
        Some(cutoff) => cutoff,
        None => {
            warn!(grace_hours = grace.num_hours(), "Archive cutoff out of range, nothing archived");
            return Vec::new();
        }
    };

    let mut archived: Vec<(&Event, DateTime<Tz>)> = events
        .iter()
        .filter_map(|event| match resolve_window(event, tz) {
            Ok(window) => Some((event, window.end)),
            Err(e) => {
                log_dateless_event(&event.id, "archive", &e.to_string());
                None
            }
        })
        .filter(|(_, end)| *end < cutoff)
        .collect();

    archived.sort_by(|(a, a_end), (b, b_end)| {
        b.popularity_score
            .cmp(&a.popularity_score)
            .then_with(|| b_end.cmp(a_end))
    });

    let archived_count = archived.len();
    let ranked: Vec<Event> = archived
        .into_iter()
        .take(limit)
        .map(|(event, _)| event.clone())
        .collect();

    log_archive_ranking(events.len(), archived_count, ranked.len(), limit);
    ranked
}
