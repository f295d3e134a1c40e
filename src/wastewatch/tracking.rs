//! Simulated pickup progress.
//!
//! A fixed script of truck positions, replayed one stage at a time. The tracker is
//! a plain iterator; pacing is left to the caller.

pub const TRACKING_STARTED: &str = "Starting tracking...";

pub const TRACKING_STEPS: [&str; 5] = [
    "Truck left depot 🏭",
    "Truck on main road 🚛",
    "Truck approaching your ward 🏘️",
    "Truck 1 street away 🚏",
    "Truck has reached your street ✅",
];

pub const TRACKING_FINISHED: &str =
    "Tracking finished. If pickup not done, please submit a new report.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackEvent {
    Started,
    Step { index: usize, text: &'static str },
    Finished,
}

impl TrackEvent {
    pub fn message(&self) -> &'static str {
        match self {
            TrackEvent::Started => TRACKING_STARTED,
            TrackEvent::Step { text, .. } => *text,
            TrackEvent::Finished => TRACKING_FINISHED,
        }
    }
}

#[derive(Debug, Default)]
pub struct Tracker {
    started: bool,
    next_step: usize,
    finished: bool,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for Tracker {
    type Item = TrackEvent;

    fn next(&mut self) -> Option<TrackEvent> {
        if self.finished {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(TrackEvent::Started);
        }
        if let Some(text) = TRACKING_STEPS.get(self.next_step) {
            let index = self.next_step;
            self.next_step += 1;
            return Some(TrackEvent::Step { index, text });
        }
        self.finished = true;
        Some(TrackEvent::Finished)
    }
}
