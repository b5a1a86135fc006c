//! Browser-persisted login marker.
//!
//! A single record under one well-known localStorage key stands in for "a
//! user is logged in". There is no server-side verification and no expiry:
//! the record stays valid until logout removes it. Reads never fail — a
//! missing or corrupt entry just means no session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SESSION_KEY: &str = "toolframe_session";

/// The persisted session marker. Serialized shape is
/// `{"username": "...", "loggedIn": true, "loginTime": 1700000000000.0}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub username: String,
    pub logged_in: bool,
    pub login_time: f64,
}

impl SessionRecord {
    /// Create a fresh record for `username`, stamped with the current time.
    /// The username is stored as entered — no trimming, no validation.
    pub fn new(username: String) -> Self {
        Self {
            username,
            logged_in: true,
            login_time: now_ms(),
        }
    }

    /// Avatar glyph: first character of the username, uppercased.
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// Account label shown in the navigation frame.
pub fn display_name(record: Option<&SessionRecord>) -> String {
    record
        .map(|r| r.username.clone())
        .unwrap_or_else(|| "Guest".to_string())
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to serialize session record: {0}")]
    Serialize(#[from] serde_json::Error),
    // Only reachable on wasm builds; the host fallback cannot fail.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    #[error("browser storage is unavailable")]
    Unavailable,
}

/// Singleton accessor for the persisted [`SessionRecord`].
///
/// Last write wins across tabs; there is no cross-tab notification, so a
/// logout in one tab does not update another already-rendered tab.
pub struct SessionStore;

impl SessionStore {
    /// Current record, if one is present and parses. Corrupt entries are
    /// logged and treated as absent.
    pub fn get() -> Option<SessionRecord> {
        Self::raw_get().and_then(|raw| Self::decode(&raw))
    }

    /// Unconditionally overwrite any existing record.
    pub fn set(record: &SessionRecord) -> Result<(), SessionError> {
        let json = serde_json::to_string(record)?;
        Self::raw_set(&json)
    }

    /// Remove the record. Idempotent — clearing an absent record is fine.
    pub fn clear() {
        Self::raw_remove();
    }

    fn decode(raw: &str) -> Option<SessionRecord> {
        match serde_json::from_str(raw) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!("discarding unreadable session record: {err}");
                None
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    #[cfg(target_arch = "wasm32")]
    fn raw_get() -> Option<String> {
        Self::storage()?.get_item(SESSION_KEY).ok()?
    }

    #[cfg(target_arch = "wasm32")]
    fn raw_set(json: &str) -> Result<(), SessionError> {
        let storage = Self::storage().ok_or(SessionError::Unavailable)?;
        storage
            .set_item(SESSION_KEY, json)
            .map_err(|_| SessionError::Unavailable)
    }

    #[cfg(target_arch = "wasm32")]
    fn raw_remove() {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }

    // Non-wasm builds have no browser storage; a thread-local slot stands in
    // so the set/get/clear contract is exercisable off-browser. Each test
    // thread gets its own slot.
    #[cfg(not(target_arch = "wasm32"))]
    fn raw_get() -> Option<String> {
        HOST_SLOT.with(|slot| slot.borrow().clone())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn raw_set(json: &str) -> Result<(), SessionError> {
        HOST_SLOT.with(|slot| *slot.borrow_mut() = Some(json.to_string()));
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn raw_remove() {
        HOST_SLOT.with(|slot| *slot.borrow_mut() = None);
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static HOST_SLOT: std::cell::RefCell<Option<String>> =
        const { std::cell::RefCell::new(None) };
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_logged_in() {
        let record = SessionRecord::new("alice".to_string());
        assert!(record.logged_in);
        assert_eq!(record.username, "alice");
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let record = SessionRecord {
            username: "alice".to_string(),
            logged_in: true,
            login_time: 1700000000000.0,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"loggedIn\":true"));
        assert!(json.contains("\"loginTime\""));
        assert!(json.contains("\"username\":\"alice\""));
    }

    #[test]
    fn decode_accepts_well_formed_record() {
        let raw = r#"{"username":"alice","loggedIn":true,"loginTime":1700000000000}"#;
        let record = SessionStore::decode(raw).unwrap();
        assert_eq!(record.username, "alice");
        assert!(record.logged_in);
    }

    #[test]
    fn decode_rejects_corrupt_entry() {
        assert!(SessionStore::decode("not json at all").is_none());
        assert!(SessionStore::decode("{\"username\":").is_none());
    }

    #[test]
    fn decode_rejects_missing_fields() {
        assert!(SessionStore::decode(r#"{"username":"alice"}"#).is_none());
    }

    #[test]
    fn get_without_a_stored_record_is_absent() {
        assert!(SessionStore::get().is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let record = SessionRecord::new("alice".to_string());
        SessionStore::set(&record).unwrap();
        assert_eq!(SessionStore::get(), Some(record));
    }

    #[test]
    fn set_overwrites_the_previous_record() {
        SessionStore::set(&SessionRecord::new("alice".to_string())).unwrap();
        SessionStore::set(&SessionRecord::new("bob".to_string())).unwrap();
        assert_eq!(SessionStore::get().unwrap().username, "bob");
    }

    #[test]
    fn clear_removes_the_record_and_is_idempotent() {
        SessionStore::set(&SessionRecord::new("alice".to_string())).unwrap();
        SessionStore::clear();
        assert!(SessionStore::get().is_none());

        // Clearing an already-absent record must not panic or error.
        SessionStore::clear();
        assert!(SessionStore::get().is_none());
    }

    #[test]
    fn initial_is_uppercased_first_char() {
        assert_eq!(SessionRecord::new("alice".to_string()).initial(), "A");
        assert_eq!(SessionRecord::new("Ümit".to_string()).initial(), "Ü");
    }

    #[test]
    fn initial_of_empty_username_is_placeholder() {
        assert_eq!(SessionRecord::new(String::new()).initial(), "?");
    }

    #[test]
    fn display_name_falls_back_to_guest() {
        assert_eq!(display_name(None), "Guest");
        let record = SessionRecord::new("alice".to_string());
        assert_eq!(display_name(Some(&record)), "alice");
    }
}
