//! Session state for the current browser visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the only writer of `Session`. Pages read it through a
//! subscription bridged into a Leptos signal and feed it to the route guard.
//!
//! LIFECYCLE
//! =========
//! `Initializing` -> (`Authenticated` | `Unauthenticated`) exactly once via
//! `initialize()`, then `Authenticated` -> `Unauthenticated` via `logout()`.
//! Nothing ever moves back to `Initializing`. After `teardown()` every late
//! write is dropped.
//!
//! CONCURRENCY
//! ===========
//! All calls happen on the single UI thread. Atomics and `Mutex` are only
//! there so the handle satisfies Leptos' `Send + Sync` context bound; locks
//! are never held across an `.await` or a listener call.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::net::api::SessionTransport;
use crate::net::types::UserProfile;

/// What the client knows about the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// The startup check has not answered yet.
    #[default]
    Initializing,
    Authenticated(UserProfile),
    Unauthenticated,
}

/// Whether the startup check has answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Initializing,
    Resolved,
}

impl Session {
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match self {
            Self::Initializing => SessionStatus::Initializing,
            Self::Authenticated(_) | Self::Unauthenticated => SessionStatus::Resolved,
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Initializing | Self::Unauthenticated => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

struct Inner {
    transport: Arc<dyn SessionTransport>,
    session: Mutex<Session>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_listener_id: AtomicU64,
    init_started: AtomicBool,
    logout_in_flight: AtomicBool,
    logout_requested_early: AtomicBool,
    torn_down: AtomicBool,
}

impl Inner {
    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn listeners(&self) -> MutexGuard<'_, Vec<(u64, Listener)>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Single source of truth for the visitor's session.
///
/// Cloning yields another handle to the same store.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &*self.inner.session())
            .field("torn_down", &self.is_torn_down())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new(transport: Arc<dyn SessionTransport>) -> Self {
        Self {
            inner: Arc::new(Inner {
                transport,
                session: Mutex::new(Session::Initializing),
                listeners: Mutex::new(Vec::new()),
                next_listener_id: AtomicU64::new(0),
                init_started: AtomicBool::new(false),
                logout_in_flight: AtomicBool::new(false),
                logout_requested_early: AtomicBool::new(false),
                torn_down: AtomicBool::new(false),
            }),
        }
    }

    /// Current session.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.inner.session().clone()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.inner.torn_down.load(Ordering::Acquire)
    }

    /// Run the startup check. Only the first call does anything.
    ///
    /// A logout requested while the check was pending wins: a returned
    /// profile is invalidated on the server and the session resolves signed out.
    pub async fn initialize(&self) {
        if self.inner.init_started.swap(true, Ordering::AcqRel) {
            log::debug!("session: initialize already started, ignoring");
            return;
        }
        let fetched = self.inner.transport.fetch_current_user().await;
        let next = match fetched {
            Ok(_) if self.inner.logout_requested_early.load(Ordering::Acquire) => {
                log::debug!("session: logout requested during startup, invalidating");
                self.inner.transport.invalidate_session().await;
                Session::Unauthenticated
            }
            Ok(user) => Session::Authenticated(user),
            Err(_) => Session::Unauthenticated,
        };
        self.inner.logout_requested_early.store(false, Ordering::Release);
        self.resolve(next);
    }

    /// Sign out. No-op when already signed out or another logout is running.
    ///
    /// Called before the startup check answers, the request is remembered and
    /// applied by `initialize()`. The local session always clears, whatever
    /// the server said.
    pub async fn logout(&self) {
        match self.snapshot() {
            Session::Authenticated(_) => {}
            Session::Initializing => {
                log::debug!("session: logout before startup check answered, deferring");
                self.inner.logout_requested_early.store(true, Ordering::Release);
                return;
            }
            Session::Unauthenticated => {
                log::debug!("session: logout while not signed in, ignoring");
                return;
            }
        }
        if self.inner.logout_in_flight.swap(true, Ordering::AcqRel) {
            log::debug!("session: logout already in flight, ignoring");
            return;
        }
        self.inner.transport.invalidate_session().await;
        self.resolve(Session::Unauthenticated);
        self.inner.logout_in_flight.store(false, Ordering::Release);
    }

    /// Register `listener` for every later transition.
    ///
    /// The listener is not called with the current value; read `snapshot()`
    /// first when seeding a view.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        if !self.is_torn_down() {
            self.inner.listeners().push((id, Arc::new(listener)));
        }
        Subscription { store: Arc::downgrade(&self.inner), id }
    }

    /// Detach the store from the app: drop listeners and ignore late results.
    pub fn teardown(&self) {
        if self.inner.torn_down.swap(true, Ordering::AcqRel) {
            return;
        }
        self.inner.listeners().clear();
        log::debug!("session: store torn down");
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.inner.listeners().len()
    }

    fn resolve(&self, next: Session) {
        debug_assert!(next.status() == SessionStatus::Resolved, "sessions never revert to Initializing");
        if self.is_torn_down() {
            log::debug!("session: dropping result that arrived after teardown");
            return;
        }
        log::debug!("session: now {}", if next.is_authenticated() { "authenticated" } else { "unauthenticated" });
        *self.inner.session() = next.clone();

        let listeners: Vec<Listener> = self.inner.listeners().iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in listeners {
            listener(&next);
        }
    }
}

/// Handle returned by `SessionStore::subscribe`.
///
/// Dropping it leaves the listener registered; call `unsubscribe` to remove it.
#[derive(Debug)]
pub struct Subscription {
    store: Weak<Inner>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {
        if let Some(inner) = self.store.upgrade() {
            inner.listeners().retain(|(id, _)| *id != self.id);
        }
    }
}
