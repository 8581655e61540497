use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ConfigError, FETCH_FALLBACK_MESSAGE};
use crate::model::tournament::Tournament;

/// Tracked list/loading/error triple for one resource type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None }
    }
}

/// Events emitted over the life of one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent<T> {
    Start,
    Success(Vec<T>),
    Failure(Option<String>),
}

/// Apply one lifecycle event to the collection state.
pub fn reduce<T>(state: &mut CollectionState<T>, event: LifecycleEvent<T>) {
    match event {
        LifecycleEvent::Start => {
            state.loading = true;
            state.error = None;
        }
        LifecycleEvent::Success(payload) => {
            state.loading = false;
            state.items = payload;
        }
        LifecycleEvent::Failure(reason) => {
            state.loading = false;
            state.error = Some(
                reason
                    .filter(|r| !r.is_empty())
                    .unwrap_or_else(|| FETCH_FALLBACK_MESSAGE.to_string()),
            );
        }
    }
}

/// Decides what happens when requests overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolutionPolicy {
    /// Every resolution writes state, so a slow stale request can overwrite
    /// a newer result.
    #[default]
    LastResolvedWins,
    /// Only the most recently dispatched request may resolve the state.
    LatestDispatchWins,
}

impl FromStr for ResolutionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "lastresolvedwins" => Ok(ResolutionPolicy::LastResolvedWins),
            "latestdispatchwins" => Ok(ResolutionPolicy::LatestDispatchWins),
            _ => Err(ConfigError::ResolutionPolicy(s.to_string())),
        }
    }
}

/// Handed out by [`Store::start`] and returned with the resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Whether a resolution reached the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    Stale,
}

#[derive(Debug)]
struct Inner<T> {
    state: CollectionState<T>,
    dispatched: u64,
}

/// Shared collection state. Construct once at startup and clone the handle;
/// the only mutations are the three lifecycle transitions.
#[derive(Debug)]
pub struct Store<T> {
    inner: Arc<Mutex<Inner<T>>>,
    policy: ResolutionPolicy,
}

pub type TournamentStore = Store<Tournament>;

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner), policy: self.policy }
    }
}

impl<T: Clone> Store<T> {
    pub fn new(policy: ResolutionPolicy) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner { state: CollectionState::default(), dispatched: 0 })),
            policy,
        }
    }

    pub fn policy(&self) -> ResolutionPolicy {
        self.policy
    }

    pub fn snapshot(&self) -> CollectionState<T> {
        self.lock().state.clone()
    }

    pub fn start(&self) -> RequestTicket {
        let mut inner = self.lock();
        inner.dispatched += 1;
        reduce(&mut inner.state, LifecycleEvent::Start);
        debug!(ticket = inner.dispatched, "Fetch started");
        RequestTicket(inner.dispatched)
    }

    pub fn succeed(&self, ticket: RequestTicket, payload: Vec<T>) -> Settled {
        self.settle(ticket, LifecycleEvent::Success(payload))
    }

    pub fn fail(&self, ticket: RequestTicket, reason: Option<String>) -> Settled {
        self.settle(ticket, LifecycleEvent::Failure(reason))
    }

    fn settle(&self, ticket: RequestTicket, event: LifecycleEvent<T>) -> Settled {
        let mut inner = self.lock();
        let latest = inner.dispatched;
        if ticket.0 != latest {
            match self.policy {
                ResolutionPolicy::LatestDispatchWins => {
                    debug!(ticket = ticket.0, latest, "Discarding stale resolution");
                    return Settled::Stale;
                }
                ResolutionPolicy::LastResolvedWins => {
                    warn!(ticket = ticket.0, latest, "Out-of-order resolution overwrites newer request");
                }
            }
        }
        reduce(&mut inner.state, event);
        Settled::Applied
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        // A poisoned lock still holds a fully reduced state.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
