//! Assistant: ties the session store, clock and state machine together.

use crate::clock::Clock;
use crate::session::transition;
use crate::store::SessionStore;
use crate::{Event, Result, UserId, UserSession};

/// Outbound delivery of text to a user
pub trait Transport {
    fn send_text(&mut self, user: &UserId, text: &str) -> Result<()>;
}

/// What the host gets back from one handled event
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub session: Option<UserSession>,
    pub replies: Vec<String>,
}

/// Per-process assistant; callers serialize events per user by holding
/// `&mut self`.
#[derive(Debug)]
pub struct Assistant<S, C> {
    store: S,
    clock: C,
    default_name: String,
}

impl<S: SessionStore, C: Clock> Assistant<S, C> {
    pub fn new(store: S, clock: C, default_name: impl Into<String>) -> Self {
        Self {
            store,
            clock,
            default_name: default_name.into(),
        }
    }

    /// Current session for a user, if any
    pub fn session(&self, user: &UserId) -> Option<UserSession> {
        self.store.get(user)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply one event and persist the resulting session
    pub fn handle(&mut self, user: &UserId, event: Event) -> Outcome {
        let before = self.store.get(user);
        let today = self.clock.today();
        let result = transition(before.clone(), &event, today, &self.default_name);

        if result.session != before {
            tracing::debug!(
                user = %user,
                event = event.kind(),
                from = ?before,
                to = ?result.session,
                "Session transition"
            );
        }

        match &result.session {
            Some(session) => self.store.put(user, session.clone()),
            None => self.store.remove(user),
        }

        Outcome {
            session: result.session,
            replies: result.replies,
        }
    }

    /// Handle an event and deliver its replies through `transport`
    ///
    /// Delivery failures are logged; the session update stands regardless.
    pub fn dispatch(
        &mut self,
        user: &UserId,
        event: Event,
        transport: &mut impl Transport,
    ) -> Outcome {
        let outcome = self.handle(user, event);
        for reply in &outcome.replies {
            if let Err(e) = transport.send_text(user, reply) {
                tracing::warn!(user = %user, error = %e, "Failed to deliver reply");
            }
        }
        outcome
    }
}
