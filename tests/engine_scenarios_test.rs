//! Integration tests for the temporal engine
//!
//! Concrete scenarios around 2026-02-14T12:00:00+09:00 covering
//! classification, countdown text, schedule text and archive ranking.

mod helpers;

use assert_matches::assert_matches;
use navios::{EventStatus, NaviosError};

use helpers::*;

#[test]
fn test_live_timed_event() {
    let engine = test_engine();
    let event = EventBuilder::new("s1")
        .starts_at(jst(2026, 2, 14, 10, 0, 0))
        .ends_at(jst(2026, 2, 14, 17, 0, 0))
        .build();

    assert_eq!(engine.classify(&event, reference_now()).unwrap(), EventStatus::Today);
    assert_eq!(engine.describe_countdown(&event, reference_now()).unwrap(), "開催中");
    assert_eq!(engine.format_schedule(&event).unwrap(), "2/14 10:00〜17:00");
}

#[test]
fn test_upcoming_legacy_all_day_event() {
    let engine = test_engine();
    let event = EventBuilder::new("s2")
        .on_dates(date(2026, 2, 16), date(2026, 2, 16))
        .all_day(true)
        .build();

    let window = engine.resolve_window(&event).unwrap();
    assert_eq!(window.start, jst(2026, 2, 16, 0, 0, 0));
    assert_eq!(window.end, jst(2026, 2, 16, 23, 59, 59));

    assert_eq!(engine.classify(&event, reference_now()).unwrap(), EventStatus::Upcoming);
    assert_eq!(engine.describe_countdown(&event, reference_now()).unwrap(), "あと2日");
    assert_eq!(engine.format_schedule(&event).unwrap(), "2/16 終日");
}

#[test]
fn test_ended_event_is_archive_eligible() {
    let engine = test_engine();
    let event = EventBuilder::new("s3")
        .ends_at(jst(2026, 2, 1, 23, 59, 59))
        .build();

    assert_eq!(engine.classify(&event, reference_now()).unwrap(), EventStatus::Ended);
    assert_eq!(engine.describe_countdown(&event, reference_now()).unwrap(), "13日前に終了");

    let ranked = engine.rank_archived(&[event], reference_now(), Some(12));
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].id, "s3");
}

#[test]
fn test_recently_ended_event_stays_out_of_archive() {
    let engine = test_engine();
    let event = EventBuilder::new("s4")
        .ends_at(jst(2026, 2, 14, 0, 0, 0))
        .popularity(1_000)
        .build();

    assert_eq!(engine.classify(&event, reference_now()).unwrap(), EventStatus::Ended);
    assert_eq!(engine.describe_countdown(&event, reference_now()).unwrap(), "1日前に終了");
    assert!(engine.rank_archived(&[event], reference_now(), Some(12)).is_empty());
}

#[test]
fn test_archive_grace_boundary() {
    let engine = test_engine();
    let cutoff = reference_now() - engine.archive_grace();
    let events = vec![
        EventBuilder::new("on-cutoff").ends_at(cutoff).popularity(10).build(),
        EventBuilder::new("past-cutoff").ends_at(cutoff - secs(1)).popularity(5).build(),
    ];

    let ranked = engine.rank_archived(&events, reference_now(), Some(12));
    let ids: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["past-cutoff"]);
}

#[test]
fn test_countdown_at_exactly_one_day() {
    let engine = test_engine();
    let one_day = secs(86_400);

    let starts = EventBuilder::new("starts")
        .starts_at(reference_now() + one_day)
        .ends_at(reference_now() + one_day + secs(3_600))
        .build();
    let starts_later = EventBuilder::new("starts-later")
        .starts_at(reference_now() + one_day + secs(1))
        .ends_at(reference_now() + one_day + secs(3_600))
        .build();
    let ended = EventBuilder::new("ended")
        .starts_at(reference_now() - one_day - secs(3_600))
        .ends_at(reference_now() - one_day)
        .build();

    assert_eq!(engine.describe_countdown(&starts, reference_now()).unwrap(), "あと1日");
    assert_eq!(engine.describe_countdown(&starts_later, reference_now()).unwrap(), "あと2日");
    assert_eq!(engine.describe_countdown(&ended, reference_now()).unwrap(), "1日前に終了");
}

#[test]
fn test_archive_tie_broken_by_later_end() {
    let engine = test_engine();
    let events = vec![
        EventBuilder::new("feb-01").on_dates(date(2026, 2, 1), date(2026, 2, 1)).popularity(50).build(),
        EventBuilder::new("feb-05").on_dates(date(2026, 2, 5), date(2026, 2, 5)).popularity(50).build(),
    ];

    let ranked = engine.rank_archived(&events, reference_now(), Some(12));
    let ids: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["feb-05", "feb-01"]);
}

#[test]
fn test_archive_across_sample_events() {
    let engine = test_engine();
    let ranked = engine.rank_archived(&sample_events(), reference_now(), None);
    let ids: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();

    // late-night ended 12 hours ago and is still inside the grace window
    assert_eq!(ids, vec!["workshop", "lantern"]);
}

#[test]
fn test_archive_limit_is_clamped() {
    let engine = test_engine();
    let events: Vec<_> = (1..=20)
        .map(|d| {
            EventBuilder::new(&format!("jan-{}", d))
                .on_dates(date(2026, 1, d), date(2026, 1, d))
                .popularity(i64::from(d))
                .build()
        })
        .collect();

    assert_eq!(engine.rank_archived(&events, reference_now(), Some(100)).len(), 12);
    assert_eq!(engine.rank_archived(&events, reference_now(), Some(0)).len(), 1);
    assert_eq!(engine.rank_archived(&events, reference_now(), None).len(), 6);
    assert_eq!(engine.clamp_archive_limit(Some(3)), 3);
}

#[test]
fn test_all_day_collapse_overrides_precise_times() {
    let engine = test_engine();
    let event = EventBuilder::new("collapse")
        .starts_at(jst(2026, 2, 14, 13, 0, 0))
        .ends_at(jst(2026, 2, 14, 15, 0, 0))
        .all_day(true)
        .build();

    // 12:00 is before the precise start but inside the collapsed day
    assert_eq!(engine.classify(&event, reference_now()).unwrap(), EventStatus::Today);
    assert_eq!(engine.format_schedule(&event).unwrap(), "2/14 終日");
}

#[test]
fn test_multi_day_schedules() {
    let engine = test_engine();
    let timed = EventBuilder::new("timed")
        .starts_at(jst(2026, 3, 1, 9, 0, 0))
        .ends_at(jst(2026, 3, 3, 18, 30, 0))
        .build();
    let all_day = EventBuilder::new("all-day")
        .on_dates(date(2026, 3, 1), date(2026, 3, 3))
        .all_day(true)
        .build();

    assert_eq!(engine.format_schedule(&timed).unwrap(), "3/1 09:00 〜 3/3 18:30");
    assert_eq!(engine.format_schedule(&all_day).unwrap(), "3/1 〜 3/3");
}

#[test]
fn test_legacy_dates_without_all_day_flag() {
    let engine = test_engine();
    let event = EventBuilder::new("legacy")
        .on_dates(date(2026, 2, 14), date(2026, 2, 14))
        .build();

    assert_eq!(engine.classify(&event, jst(2026, 2, 14, 23, 59, 59)).unwrap(), EventStatus::Today);
    assert_eq!(engine.classify(&event, jst(2026, 2, 15, 0, 0, 0)).unwrap(), EventStatus::Ended);
    assert_eq!(engine.format_schedule(&event).unwrap(), "2/14 00:00〜23:59");
}

#[test]
fn test_status_changes_as_now_advances() {
    let engine = test_engine();
    let event = EventBuilder::new("moving")
        .starts_at(jst(2026, 2, 14, 10, 0, 0))
        .ends_at(jst(2026, 2, 14, 17, 0, 0))
        .build();

    assert_eq!(engine.classify(&event, jst(2026, 2, 14, 9, 0, 0)).unwrap(), EventStatus::Upcoming);
    assert_eq!(engine.classify(&event, jst(2026, 2, 14, 12, 0, 0)).unwrap(), EventStatus::Today);
    assert_eq!(engine.classify(&event, jst(2026, 2, 14, 18, 0, 0)).unwrap(), EventStatus::Ended);
}

#[test]
fn test_english_rendering() {
    let engine = test_engine().with_language("en-US");
    assert_eq!(engine.language(), "en");

    let upcoming = EventBuilder::new("en-1")
        .on_dates(date(2026, 2, 15), date(2026, 2, 15))
        .all_day(true)
        .build();
    let ended = EventBuilder::new("en-2")
        .starts_at(jst(2026, 2, 1, 10, 0, 0))
        .ends_at(jst(2026, 2, 1, 23, 59, 59))
        .build();

    assert_eq!(engine.describe_countdown(&upcoming, reference_now()).unwrap(), "in 1 day");
    assert_eq!(engine.describe_countdown(&ended, reference_now()).unwrap(), "ended 13 days ago");
    assert_eq!(engine.format_schedule(&upcoming).unwrap(), "2/15 all day");
    assert_eq!(engine.status_label(EventStatus::Ended), "Ended");
}

#[test]
fn test_summary_uses_one_instant() {
    let engine = test_engine();
    let event = EventBuilder::new("summary")
        .starts_at(jst(2026, 2, 14, 10, 0, 0))
        .ends_at(jst(2026, 2, 14, 17, 0, 0))
        .build();

    let at_end = jst(2026, 2, 14, 17, 0, 0);
    let summary = engine.summarize(&event, at_end).unwrap();
    assert_eq!(summary.status, EventStatus::Today);
    assert_eq!(summary.countdown, "開催中");
    assert_eq!(summary.schedule, "2/14 10:00〜17:00");

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["status"], "today");
    assert_eq!(json["id"], "summary");
}

#[test]
fn test_summarize_all_skips_dateless() {
    let engine = test_engine();
    let mut events = sample_events();
    events.push(EventBuilder::new("dateless").build());

    let summaries = engine.summarize_all(&events, reference_now());
    assert_eq!(summaries.len(), sample_events().len());
    assert!(summaries.iter().all(|s| s.id != "dateless"));
}

#[test]
fn test_dateless_event_errors() {
    let engine = test_engine();
    let event = EventBuilder::new("nowhen").build();

    assert_matches!(
        engine.classify(&event, reference_now()),
        Err(NaviosError::Dateless { event_id }) if event_id == "nowhen"
    );
    assert!(engine.describe_countdown(&event, reference_now()).is_err());
    assert!(engine.format_schedule(&event).is_err());
}
