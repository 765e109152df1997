//! Countdown and schedule text

use chrono::{DateTime, Datelike, Duration, Utc};
use chrono_tz::Tz;

use crate::i18n::I18n;
use crate::models::EventStatus;
use super::window::EffectiveWindow;

const RANGE_SEPARATOR: &str = "〜";

/// Day distance between `now` and an event window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Live,
    StartsIn { days: i64 },
    EndedAgo { days: i64 },
}

impl Countdown {
    /// Compute the countdown for `now`
    ///
    /// Day counts are rounded up and never below one, so an event that ended
    /// a minute ago reads "ended 1 day ago" rather than "0 days ago".
    pub fn at(window: &EffectiveWindow, now: DateTime<Utc>) -> Self {
        match window.status_at(now) {
            EventStatus::Today => Countdown::Live,
            EventStatus::Upcoming => Countdown::StartsIn {
                days: ceil_days(window.start.with_timezone(&Utc) - now),
            },
            EventStatus::Ended => Countdown::EndedAgo {
                days: ceil_days(now - window.end.with_timezone(&Utc)),
            },
        }
    }

    pub fn status(&self) -> EventStatus {
        match self {
            Countdown::Live => EventStatus::Today,
            Countdown::StartsIn { .. } => EventStatus::Upcoming,
            Countdown::EndedAgo { .. } => EventStatus::Ended,
        }
    }

    /// Render through the `countdown.*` catalog keys
    pub fn render(&self, i18n: &I18n, lang: &str) -> String {
        match *self {
            Countdown::Live => i18n.t("countdown.live", lang, None),
            Countdown::StartsIn { days } => i18n.tp("countdown.upcoming", lang, days, None),
            Countdown::EndedAgo { days } => i18n.tp("countdown.ended", lang, days, None),
        }
    }
}

fn ceil_days(delta: Duration) -> i64 {
    const DAY_MS: i64 = 24 * 60 * 60 * 1000;
    let ms = delta.num_milliseconds();
    let days = ms / DAY_MS + i64::from(ms % DAY_MS > 0);
    days.max(1)
}

/// Format the schedule of a window
///
/// All-day: `M/D <all-day label>` or `M/D 〜 M/D`. Timed: `M/D HH:MM〜HH:MM`
/// or `M/D HH:MM 〜 M/D HH:MM`.
pub fn format_schedule(window: &EffectiveWindow, is_all_day: bool, all_day_label: &str) -> String {
    let start = &window.start;
    let end = &window.end;

    match (is_all_day, window.is_single_day()) {
        (true, true) => format!("{} {}", month_day(start), all_day_label),
        (true, false) => format!("{} {} {}", month_day(start), RANGE_SEPARATOR, month_day(end)),
        (false, true) => format!(
            "{} {}{}{}",
            month_day(start),
            start.format("%H:%M"),
            RANGE_SEPARATOR,
            end.format("%H:%M")
        ),
        (false, false) => format!(
            "{} {} {} {} {}",
            month_day(start),
            start.format("%H:%M"),
            RANGE_SEPARATOR,
            month_day(end),
            end.format("%H:%M")
        ),
    }
}

fn month_day(dt: &DateTime<Tz>) -> String {
    format!("{}/{}", dt.month(), dt.day())
}
