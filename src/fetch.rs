use std::future::Future;
use std::sync::Arc;

use tracing::{Instrument, error, info, info_span};

use crate::api::TournamentSource;
use crate::error::FetchError;
use crate::store::{RequestTicket, Settled, TournamentStore};

/// What became of one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub ticket: RequestTicket,
    pub settled: Settled,
    pub error: Option<FetchError>,
}

/// Fetch the tournament collection into `store`.
///
/// The start transition is dispatched before this returns, and the request
/// with its write-back runs in a spawned task. Dropping the returned future,
/// or timing it out, only stops the caller from observing the outcome: the
/// store still resolves. Must be called from within a Tokio runtime.
///
/// No retry and no deduplication: calling this again while a fetch is
/// pending starts a second request.
pub fn fetch_tournaments<S>(
    store: &TournamentStore,
    source: Arc<S>,
) -> impl Future<Output = FetchOutcome> + Send + use<S>
where
    S: TournamentSource + ?Sized,
{
    let ticket = store.start();
    let span = info_span!("fetch_tournaments", ticket = ticket.sequence());
    let task = tokio::spawn(resolve(store.clone(), ticket, source).instrument(span));
    let store = store.clone();

    async move {
        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                // The task never wrote back, so settle the ticket here.
                let err = FetchError::Join(e.to_string());
                let settled = store.fail(ticket, err.state_message());
                error!(error = %err, ?settled, "Fetch task aborted");
                FetchOutcome { ticket, settled, error: Some(err) }
            }
        }
    }
}

async fn resolve<S>(store: TournamentStore, ticket: RequestTicket, source: Arc<S>) -> FetchOutcome
where
    S: TournamentSource + ?Sized,
{
    let result = tokio::task::spawn_blocking(move || source.fetch_all())
        .await
        .unwrap_or_else(|e| Err(FetchError::Join(e.to_string())));

    match result {
        Ok(tournaments) => {
            let count = tournaments.len();
            let settled = store.succeed(ticket, tournaments);
            info!(count, ?settled, "Fetch resolved");
            FetchOutcome { ticket, settled, error: None }
        }
        Err(err) => {
            let settled = store.fail(ticket, err.state_message());
            error!(error = %err, ?settled, "Fetch rejected");
            FetchOutcome { ticket, settled, error: Some(err) }
        }
    }
}
