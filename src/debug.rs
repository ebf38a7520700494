use crate::danger::DangerVector;
#[cfg(feature = "debug")]
use serde_json::json;

#[cfg(feature = "debug")]
thread_local!(
    static DEBUG_FRAME: std::cell::RefCell<Vec<serde_json::Value>> = Default::default();
);

/// Records one cycle's decision for telemetry consumers.
#[allow(unused)]
pub fn debug_decision(
    danger: &DangerVector,
    threshold: u8,
    safe: bool,
    confidence: u32,
    increment: f64,
) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "decision",
            "danger": danger.scores(),
            "obstacles": danger.obstacle_mask(threshold).sectors(),
            "safe": safe,
            "confidence": confidence,
            "increment": increment,
        }))
    })
}

/// Takes the decision frames recorded since the last call, as a JSON array.
#[cfg(feature = "debug")]
pub fn take_debug_frame() -> serde_json::Value {
    json!(DEBUG_FRAME.with(|frame| frame.take()))
}
