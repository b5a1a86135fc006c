use dioxus::prelude::*;

use crate::session::{SessionRecord, SessionStore};

/// Application-level session context.
///
/// The persisted record is read from storage once, when the provider mounts,
/// and held in a signal from then on. Components subscribe through the
/// signal, so login/logout in this tab propagate; changes made by another
/// tab are not observed until a reload.
#[derive(Clone, Copy)]
pub struct SessionState {
    record: Signal<Option<SessionRecord>>,
}

/// Install the session context at the application root.
pub fn use_session_provider() -> SessionState {
    let record = use_signal(SessionStore::get);
    let state = SessionState { record };
    use_context_provider(|| state);
    state
}

/// Access the session context from any component under the provider.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

impl SessionState {
    pub fn record(&self) -> Signal<Option<SessionRecord>> {
        self.record
    }

    pub fn is_logged_in(&self) -> bool {
        self.record.read().is_some()
    }

    /// Write a fresh record for `username`, replacing any existing one.
    pub fn login(&mut self, username: String) {
        let record = SessionRecord::new(username);
        if let Err(err) = SessionStore::set(&record) {
            tracing::warn!("session record not persisted: {err}");
        }
        self.record.set(Some(record));
    }

    /// Remove the record. Cannot fail; clearing twice is harmless.
    pub fn logout(&mut self) {
        SessionStore::clear();
        self.record.set(None);
    }
}
