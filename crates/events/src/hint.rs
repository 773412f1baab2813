use journey_core::types::{Badge, Step};

/// Maps a step to the backend event names it corresponds to, for
/// documentation and tooltip panels.
///
/// Dispatch is by phase id, with badge- and label-specific arms taking
/// priority over the per-phase default. Total: phases without a mapping get
/// the em-dash placeholder.
pub fn event_hint(step: &Step) -> &'static str {
    match step.phase.as_str() {
        "sl" => "shortlist.dropped",
        "p1" => {
            if step.badge == Some(Badge::Window24h) {
                "timer.started (24h), timer.expiring"
            } else {
                "application.submitted"
            }
        }
        "off" => {
            // Case-sensitive substring match, by contract.
            if step.label.contains("Accept") {
                "offer.accepted → match.committed"
            } else {
                "offer.sent"
            }
        }
        "hov" => "handover.started / handover.completed",
        _ => "—",
    }
}
