use serde_json::json;

use super::events_model::{
    Notice, ScanProgress, ScanResultEvent, ScanResultKind, ScanStateEvent, Severity,
};
use super::events_sink::{AddonEvent, ChannelEventSink};
use super::events_traits::EventSinkTrait;
use crate::scan::ScanSpeed;

#[test]
fn scan_state_wire_shape() {
    let started = serde_json::to_value(ScanStateEvent::Started {
        speed: ScanSpeed::Normal,
    })
    .unwrap();
    assert_eq!(started, json!({"state": "started", "speed": "normal"}));

    let aborted = serde_json::to_value(ScanStateEvent::Aborted { reason: None }).unwrap();
    assert_eq!(aborted, json!({"state": "aborted", "reason": null}));

    let aborted = serde_json::to_value(ScanStateEvent::Aborted {
        reason: Some("user canceled".to_string()),
    })
    .unwrap();
    assert_eq!(aborted, json!({"state": "aborted", "reason": "user canceled"}));

    let complete = serde_json::to_value(ScanStateEvent::Complete {
        time: 12,
        total: 40,
        added: 3,
        updated: 2,
        failed: 1,
    })
    .unwrap();
    assert_eq!(
        complete,
        json!({
            "state": "complete",
            "time": 12,
            "total": 40,
            "added": 3,
            "updated": 2,
            "failed": 1,
        })
    );
}

#[test]
fn scan_result_wire_shape() {
    let event = ScanResultEvent {
        result: ScanResultKind::NoAction,
        filename: "skins.vpk".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        json!({"result": "no_action", "filename": "skins.vpk"})
    );
}

#[test]
fn progress_and_notice_wire_shape() {
    let progress = serde_json::to_value(ScanProgress { value: 2, total: 5 }).unwrap();
    assert_eq!(progress, json!({"value": 2, "total": 5}));

    let notice = serde_json::to_value(Notice {
        severity: Severity::Warn,
        title: "Migrate Addons".to_string(),
        message: "Failed to migrate 1 of 3 addons".to_string(),
    })
    .unwrap();
    assert_eq!(
        notice,
        json!({
            "severity": "warn",
            "title": "Migrate Addons",
            "message": "Failed to migrate 1 of 3 addons",
        })
    );
}

#[test]
fn only_added_and_renamed_results_produce_notices() {
    assert_eq!(
        ScanResultKind::Added.notice_title(),
        Some("New Addon Found")
    );
    assert_eq!(
        ScanResultKind::Renamed.notice_title(),
        Some("Found Renamed Addon")
    );
    assert_eq!(ScanResultKind::Updated.notice_title(), None);
    assert_eq!(ScanResultKind::NoAction.notice_title(), None);

    let added = ScanResultEvent {
        result: ScanResultKind::Added,
        filename: "fresh.vpk".to_string(),
    };
    let notice = added.notice().unwrap();
    assert_eq!(notice.severity, Severity::Success);
    assert_eq!(notice.title, "New Addon Found");
    assert_eq!(notice.message, "fresh.vpk");

    let updated = ScanResultEvent {
        result: ScanResultKind::Updated,
        filename: "old.vpk".to_string(),
    };
    assert_eq!(updated.notice(), None);
}

#[test]
fn event_channel_names() {
    let state = AddonEvent::ScanState(ScanStateEvent::Aborted { reason: None });
    assert_eq!(state.channel(), "scan:state");

    let result = AddonEvent::ScanResult(ScanResultEvent {
        result: ScanResultKind::Added,
        filename: "a.vpk".to_string(),
    });
    assert_eq!(result.channel(), "scan:result");

    let progress = AddonEvent::ScanProgress(ScanProgress { value: 1, total: 1 });
    assert_eq!(progress.channel(), "scan:progress");

    let notice = AddonEvent::Notice(Notice {
        severity: Severity::Success,
        title: "t".to_string(),
        message: "m".to_string(),
    });
    assert_eq!(notice.channel(), "addons:notice");
}

#[tokio::test]
async fn channel_sink_delivers_events_in_order() {
    let (sink, mut rx) = ChannelEventSink::new();
    sink.scan_state(ScanStateEvent::Started {
        speed: ScanSpeed::Maximum,
    });
    sink.scan_progress(ScanProgress { value: 1, total: 2 });
    sink.notice(Notice {
        severity: Severity::Error,
        title: "t".to_string(),
        message: "m".to_string(),
    });

    assert_eq!(
        rx.recv().await,
        Some(AddonEvent::ScanState(ScanStateEvent::Started {
            speed: ScanSpeed::Maximum,
        }))
    );
    assert_eq!(
        rx.recv().await,
        Some(AddonEvent::ScanProgress(ScanProgress { value: 1, total: 2 }))
    );
    assert!(matches!(rx.recv().await, Some(AddonEvent::Notice(_))));
}

#[tokio::test]
async fn channel_sink_survives_dropped_receiver() {
    let (sink, rx) = ChannelEventSink::new();
    drop(rx);
    // Must not panic or block
    sink.scan_progress(ScanProgress { value: 1, total: 1 });
    sink.scan_state(ScanStateEvent::Aborted { reason: None });
}
