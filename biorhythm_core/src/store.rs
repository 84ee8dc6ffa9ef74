//! Session storage keyed by user identity.
//!
//! The state machine never touches storage directly; the assistant loads a
//! session, runs a transition and writes the outcome back through this trait.
//! Eviction and persistence are left to implementations.

use crate::{UserId, UserSession};
use std::collections::HashMap;

/// Key-value store for per-user sessions
pub trait SessionStore {
    fn get(&self, user: &UserId) -> Option<UserSession>;
    fn put(&mut self, user: &UserId, session: UserSession);
    fn remove(&mut self, user: &UserId);
}

/// Process-lifetime store backed by a `HashMap`
#[derive(Clone, Debug, Default)]
pub struct InMemorySessionStore {
    sessions: HashMap<UserId, UserSession>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, user: &UserId) -> Option<UserSession> {
        self.sessions.get(user).cloned()
    }

    fn put(&mut self, user: &UserId, session: UserSession) {
        self.sessions.insert(user.clone(), session);
    }

    fn remove(&mut self, user: &UserId) {
        self.sessions.remove(user);
    }
}
