use parking_lot::Mutex;

use solwatch::port::outbound::notifier::{Event, Notifier, TradeAlert};

/// Notifier that keeps every event for inspection.
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Event>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<TradeAlert> {
        self.events
            .lock()
            .iter()
            .map(|event| match event {
                Event::TradeDetected(alert) => alert.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: Event) {
        self.events.lock().push(event);
    }
}
