use tracing::{error, info, info_span, instrument};

use crate::config::Config;
use crate::error::FetchError;
use crate::model::tournament::{ErrorBody, Tournament};

/// Anything that can produce the tournament collection. The call blocks;
/// the fetch action moves it onto the blocking pool.
pub trait TournamentSource: Send + Sync + 'static {
    fn fetch_all(&self) -> Result<Vec<Tournament>, FetchError>;
}

/// HTTP client for the tournament collection endpoint.
#[derive(Debug, Clone)]
pub struct TournamentApi {
    collection_url: String,
}

impl TournamentApi {
    pub fn new(collection_url: String) -> Self {
        Self { collection_url }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.collection_url())
    }

    pub fn url(&self) -> &str {
        &self.collection_url
    }

    /// GET the collection. Non-2xx responses are read so the server's
    /// `detail` can be reported.
    #[instrument(level = "info", skip(self), fields(url = %self.collection_url))]
    pub fn get_collection(&self) -> Result<Vec<Tournament>, FetchError> {
        let response_result = {
            let _span = info_span!("tournaments_fetch").entered();
            ureq::get(&self.collection_url)
                .header("Accept", "application/json")
                .config()
                .http_status_as_error(false)
                .build()
                .call()
        };
        match response_result {
            Ok(response) => {
                let code = response.status().as_u16();
                let mut body_reader = response.into_body();
                match body_reader.read_to_string() {
                    Ok(body) if (200..300).contains(&code) => {
                        let tournaments = decode_collection(&body)?;
                        info!(status = code, count = tournaments.len(), "Fetched tournaments");
                        Ok(tournaments)
                    }
                    Ok(body) => {
                        let err = error_from_response(code, &body);
                        error!(status = code, detail = ?err.detail(), "Tournament request rejected");
                        Err(err)
                    }
                    Err(e) => {
                        error!(error = %e, "Failed to read response body");
                        Err(FetchError::Transport(format!("failed to read response body: {}", e)))
                    }
                }
            }
            Err(e) => {
                error!(error = %e, "Tournament request failed");
                Err(FetchError::Transport(e.to_string()))
            }
        }
    }
}

impl TournamentSource for TournamentApi {
    fn fetch_all(&self) -> Result<Vec<Tournament>, FetchError> {
        self.get_collection()
    }
}

/// Decode a collection body into tournaments, in server order.
#[instrument(level = "debug", skip(body), fields(bytes = body.len()))]
pub fn decode_collection(body: &str) -> Result<Vec<Tournament>, FetchError> {
    let tournaments = serde_json::from_str::<Vec<Tournament>>(body).map_err(|e| {
        error!(error = %e, "Failed to deserialize tournament list");
        FetchError::Decode(e.to_string())
    })?;
    if let Some(t) = tournaments.iter().find(|t| t.name.trim().is_empty()) {
        error!(id = t.id, "Tournament without a name");
        return Err(FetchError::Decode(format!("tournament {} has an empty name", t.id)));
    }
    Ok(tournaments)
}

/// Build the error for a non-success response, keeping a string `detail`
/// from the body when there is one.
pub fn error_from_response(status: u16, body: &str) -> FetchError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail_text().map(str::to_string))
        .filter(|d| !d.is_empty());
    FetchError::Status { status, detail }
}
