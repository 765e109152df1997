//! Event temporal-status engine
//!
//! Pure functions deriving an event's lifecycle state (`today`, `upcoming`,
//! `ended`) from its schedule and an explicit `now`, rendering countdown and
//! schedule text, and ranking popular past events. Nothing here caches or
//! mutates events; every call re-derives state from its arguments.

pub mod archive;
pub mod feed;
pub mod text;
pub mod window;

pub use archive::rank_archived;
pub use feed::{count_by_status, filter_events, sort_for_feed, EventFilter, StatusCounts};
pub use text::{format_schedule, Countdown};
pub use window::{resolve_window, EffectiveWindow};

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::config::{EngineConfig, Settings};
use crate::i18n::I18n;
use crate::models::{Event, EventStatus, EventSummary};
use crate::utils::errors::Result;
use crate::utils::logging::{log_classification, log_dateless_event};

/// Temporal engine bound to a time zone, archive policy and language
#[derive(Debug, Clone)]
pub struct TemporalEngine {
    tz: Tz,
    archive_grace: Duration,
    archive_limit_max: usize,
    default_archive_limit: usize,
    i18n: I18n,
    language: String,
}

impl TemporalEngine {
    /// Create an engine speaking the catalog's default language
    pub fn new(config: &EngineConfig, i18n: I18n) -> Result<Self> {
        let language = i18n.default_language().to_string();
        Ok(Self {
            tz: config.tz()?,
            archive_grace: Duration::hours(i64::from(config.archive_grace_hours)),
            archive_limit_max: config.archive_limit_max.max(1),
            default_archive_limit: config.default_archive_limit,
            i18n,
            language,
        })
    }

    /// Create an engine from validated settings and the built-in catalogs
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let i18n = I18n::builtin(&settings.i18n)?;
        Self::new(&settings.engine, i18n)
    }

    /// Create an engine from validated settings, overriding the built-in
    /// catalogs with any `<lang>.json` found in `i18n.translations_dir`
    pub async fn load(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let mut i18n = I18n::builtin(&settings.i18n)?;
        i18n.load_translations(&settings.i18n.translations_dir).await?;
        Self::new(&settings.engine, i18n)
    }

    /// Same engine rendering text in `lang` (locale tags like `en-US` accepted)
    pub fn with_language(&self, lang: &str) -> Self {
        let mut engine = self.clone();
        engine.language = self.i18n.detect_language(Some(lang));
        engine
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn archive_grace(&self) -> Duration {
        self.archive_grace
    }

    /// Read the wall clock once per request and pass the result everywhere
    pub fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    /// Effective start/end of `event` in the engine's time zone
    pub fn resolve_window(&self, event: &Event) -> Result<EffectiveWindow> {
        resolve_window(event, self.tz)
    }

    /// Lifecycle state of `event` at `now`
    pub fn classify(&self, event: &Event, now: DateTime<Utc>) -> Result<EventStatus> {
        let status = self.resolve_window(event)?.status_at(now);
        log_classification(&event.id, status);
        Ok(status)
    }

    /// Countdown text, e.g. `開催中`, `あと2日`, `13日前に終了`
    pub fn describe_countdown(&self, event: &Event, now: DateTime<Utc>) -> Result<String> {
        let window = self.resolve_window(event)?;
        Ok(Countdown::at(&window, now).render(&self.i18n, &self.language))
    }

    /// Schedule text, e.g. `2/14 10:00〜17:00` or `2/16 終日`
    pub fn format_schedule(&self, event: &Event) -> Result<String> {
        let window = self.resolve_window(event)?;
        Ok(format_schedule(&window, event.is_all_day, &self.all_day_label()))
    }

    /// Localized label for a status
    pub fn status_label(&self, status: EventStatus) -> String {
        self.i18n.t(&format!("status.{}", status), &self.language, None)
    }

    /// Status, countdown and schedule computed against one `now`
    pub fn summarize(&self, event: &Event, now: DateTime<Utc>) -> Result<EventSummary> {
        let window = self.resolve_window(event)?;
        let countdown = Countdown::at(&window, now);
        let status = countdown.status();
        log_classification(&event.id, status);

        Ok(EventSummary {
            id: event.id.clone(),
            status,
            countdown: countdown.render(&self.i18n, &self.language),
            schedule: format_schedule(&window, event.is_all_day, &self.all_day_label()),
        })
    }

    /// Summaries for every event with a usable schedule
    pub fn summarize_all(&self, events: &[Event], now: DateTime<Utc>) -> Vec<EventSummary> {
        events
            .iter()
            .filter_map(|event| match self.summarize(event, now) {
                Ok(summary) => Some(summary),
                Err(e) => {
                    log_dateless_event(&event.id, "summary", &e.to_string());
                    None
                }
            })
            .collect()
    }

    /// Popular past events; `limit` defaults to the configured default and is
    /// clamped to `1..=archive_limit_max`
    pub fn rank_archived(&self, events: &[Event], now: DateTime<Utc>, limit: Option<usize>) -> Vec<Event> {
        let limit = self.clamp_archive_limit(limit);
        debug!(limit = limit, events = events.len(), "Ranking archived events");
        rank_archived(events, now, self.archive_grace, limit, self.tz)
    }

    /// Events matching `filter` at `now`
    pub fn filter(&self, events: &[Event], now: DateTime<Utc>, filter: &EventFilter) -> Vec<Event> {
        filter_events(events, now, filter, self.tz)
    }

    /// Events in feed order at `now`
    pub fn sort_for_feed(&self, events: &[Event], now: DateTime<Utc>) -> Vec<Event> {
        sort_for_feed(events, now, self.tz)
    }

    /// Per-status totals at `now`
    pub fn count_by_status(&self, events: &[Event], now: DateTime<Utc>) -> StatusCounts {
        count_by_status(events, now, self.tz)
    }

    pub fn clamp_archive_limit(&self, limit: Option<usize>) -> usize {
        limit
            .unwrap_or(self.default_archive_limit)
            .clamp(1, self.archive_limit_max)
    }

    fn all_day_label(&self) -> String {
        self.i18n.t("schedule.all_day", &self.language, None)
    }
}
