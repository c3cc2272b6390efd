use super::*;
use serde_json::json;
use shared::domain::{CourseId, StepId};
use std::{cell::RefCell, rc::Rc};

#[derive(Clone, Default)]
struct RecordingHost {
    delivered: Rc<RefCell<Vec<(String, String, String)>>>,
}

impl RecordingHost {
    fn bodies(&self) -> Vec<String> {
        self.delivered
            .borrow()
            .iter()
            .map(|(_, _, body)| body.clone())
            .collect()
    }
}

impl HostEndpoint for RecordingHost {
    fn send_message(&mut self, channel: &str, method: &str, body: &str) -> Result<(), HostError> {
        self.delivered
            .borrow_mut()
            .push((channel.to_string(), method.to_string(), body.to_string()));
        Ok(())
    }
}

fn step_event(course: i64, step: i64) -> BridgeEvent {
    BridgeEvent::TreeStep {
        course: CourseId(course),
        step: StepId(step),
    }
}

#[test]
fn queues_until_ready_then_delivers_in_order() {
    let mut bridge = EventBridge::default();
    for step in 1..=4 {
        bridge.emit_event(&step_event(3, step));
    }
    assert!(!bridge.is_ready());
    assert_eq!(bridge.pending(), 4);

    let host = RecordingHost::default();
    bridge.attach_host(host.clone());
    assert_eq!(bridge.ready(), 4);
    assert_eq!(bridge.pending(), 0);

    let expected: Vec<String> = (1..=4)
        .map(|step| format!(r#"{{"type":"tree.step","payload":{{"course":3,"step":{step}}}}}"#))
        .collect();
    assert_eq!(host.bodies(), expected);
}

#[test]
fn repeated_ready_delivers_nothing_extra() {
    let mut bridge = EventBridge::default();
    bridge.emit("custom", json!({ "n": 1 }));
    let host = RecordingHost::default();
    bridge.attach_host(host.clone());

    assert_eq!(bridge.ready(), 1);
    assert_eq!(bridge.ready(), 0);
    assert_eq!(bridge.ready(), 0);
    assert_eq!(host.bodies(), vec![r#"{"type":"custom","payload":{"n":1}}"#.to_string()]);
}

#[test]
fn ready_without_host_keeps_queue() {
    let mut bridge = EventBridge::default();
    bridge.emit_event(&step_event(1, 1));
    assert_eq!(bridge.ready(), 0);
    assert_eq!(bridge.pending(), 1);
}

#[test]
fn delivers_immediately_once_host_is_attached() {
    let mut bridge = EventBridge::default();
    let host = RecordingHost::default();
    bridge.attach_host(host.clone());
    bridge.emit_event(&step_event(2, 5));
    assert_eq!(bridge.pending(), 0);
    assert_eq!(host.bodies().len(), 1);

    let delivered = host.delivered.borrow();
    assert_eq!(delivered[0].0, DEFAULT_CHANNEL);
    assert_eq!(delivered[0].1, DEFAULT_METHOD);
}

#[test]
fn emit_after_attach_drains_older_messages_first() {
    let mut bridge = EventBridge::default();
    bridge.emit_event(&step_event(1, 1));
    let host = RecordingHost::default();
    bridge.attach_host(host.clone());
    bridge.emit_event(&step_event(1, 2));

    let bodies = host.bodies();
    assert_eq!(bodies.len(), 2);
    assert!(bodies[0].contains(r#""step":1"#));
    assert!(bodies[1].contains(r#""step":2"#));
    assert_eq!(bridge.ready(), 0);
}

#[test]
fn failed_delivery_is_dropped_and_draining_continues() {
    let mut bridge = EventBridge::default();
    for step in 1..=3 {
        bridge.emit_event(&step_event(4, step));
    }

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    bridge.attach_host(move |_: &str, _: &str, body: &str| {
        if body.contains(r#""step":2"#) {
            return Err(HostError::Rejected("boom".into()));
        }
        sink.borrow_mut().push(body.to_string());
        Ok(())
    });

    assert_eq!(bridge.ready(), 3);
    assert_eq!(seen.borrow().len(), 2);
    assert_eq!(bridge.pending(), 0);
    assert_eq!(bridge.ready(), 0);
}

#[test]
fn detached_host_returns_bridge_to_queueing() {
    let mut bridge = EventBridge::default();
    bridge.attach_host(RecordingHost::default());
    assert!(bridge.detach_host().is_some());
    assert!(!bridge.is_ready());
    bridge.emit_event(&step_event(1, 1));
    assert_eq!(bridge.pending(), 1);
    assert!(bridge.detach_host().is_none());
}

#[test]
fn custom_channel_and_method_are_used() {
    let mut bridge = EventBridge::new(BridgeConfig {
        channel: "Bridge".into(),
        method: "OnEvent".into(),
    });
    let host = RecordingHost::default();
    bridge.attach_host(host.clone());
    bridge.emit("ping", json!({}));
    let delivered = host.delivered.borrow();
    assert_eq!(delivered[0].0, "Bridge");
    assert_eq!(delivered[0].1, "OnEvent");
}
