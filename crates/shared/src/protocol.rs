use serde::{Deserialize, Serialize};

use crate::domain::{CourseId, StepId};

/// Events the page reports to the host runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum BridgeEvent {
    #[serde(rename = "tree.step")]
    TreeStep { course: CourseId, step: StepId },
}

/// Wire shape of every outbound message: `{"type": ..., "payload": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub event_type: String,
    pub payload: serde_json::Value,
}

/// One delivery to the host endpoint, as seen by the host side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostMessage {
    pub channel: String,
    pub method: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_step_serializes_to_wire_shape() {
        let event = BridgeEvent::TreeStep {
            course: CourseId(3),
            step: StepId(1),
        };
        let wire = serde_json::to_string(&event).expect("serialize");
        assert_eq!(wire, r#"{"type":"tree.step","payload":{"course":3,"step":1}}"#);
    }

    #[test]
    fn envelope_matches_event_encoding() {
        let wire = r#"{"type":"tree.step","payload":{"course":7,"step":2}}"#;
        let envelope: Envelope = serde_json::from_str(wire).expect("envelope");
        assert_eq!(envelope.event_type, "tree.step");
        let event: BridgeEvent = serde_json::from_str(wire).expect("event");
        assert_eq!(
            event,
            BridgeEvent::TreeStep {
                course: CourseId(7),
                step: StepId(2)
            }
        );
    }
}
