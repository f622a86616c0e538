use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use riftwatch::error::{Error, Result};
use riftwatch::port::outbound::notifier::{MatchNotification, Notifier};

/// Thread-safe event collector for notification assertions in tests.
///
/// While `rejecting` is set every event is refused (and not recorded).
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<MatchNotification>>>,
    rejecting: Arc<AtomicBool>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.lock().expect("lock notifier events").len()
    }

    pub fn events(&self) -> Vec<MatchNotification> {
        self.events.lock().expect("lock notifier events").clone()
    }

    pub fn set_rejecting(&self, rejecting: bool) {
        self.rejecting.store(rejecting, Ordering::SeqCst);
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: &MatchNotification) -> Result<()> {
        if self.rejecting.load(Ordering::SeqCst) {
            return Err(Error::Notify("recording notifier rejecting".into()));
        }
        self.events
            .lock()
            .expect("lock notifier events")
            .push(event.clone());
        Ok(())
    }
}
