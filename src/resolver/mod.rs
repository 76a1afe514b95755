//! Chemical name resolution.
//!
//! Queries two CIR routes for the same name in parallel: one for the
//! canonical SMILES, one for the known synonym list. Both fetches are joined
//! before any decision is made; a failed SMILES fetch fails the whole lookup
//! and discards the synonym response.

pub mod endpoints;
mod fetch;

pub use fetch::FetchError;

use reqwest::Client;
use url::Url;

use crate::error::{Error, Result};
use self::endpoints::{DEFAULT_ENDPOINT, NOT_FOUND_SENTINEL, NO_NAMES_MESSAGE, SYNONYM_SEPARATOR};

/// Outcome of one name lookup.
///
/// Keeps the identifier-fetch failure as a value so callers can tell an
/// unrecognized name (404 from the service) apart from a transport error,
/// instead of collapsing both into one sentinel string.
#[derive(Debug)]
pub enum Lookup {
    /// The service recognized the name.
    Resolved {
        /// Canonical SMILES as returned by the service, unvalidated.
        /// Syntax checking belongs to whatever parses it downstream.
        smiles: String,
        /// Synonym entries, one per line of the raw response. An empty
        /// response body yields a single empty entry, not an empty list.
        synonyms: Vec<String>,
    },
    /// The SMILES fetch failed; carries that failure.
    Failed(FetchError),
}

impl Lookup {
    /// Flatten into the `(identifier, synonyms)` display pair.
    ///
    /// Failures become `("0", "No other names found")`; successes join the
    /// synonym entries with `" -> "`.
    pub fn into_display_pair(self) -> (String, String) {
        match self {
            Lookup::Resolved { smiles, synonyms } => {
                (smiles, synonyms.join(SYNONYM_SEPARATOR))
            }
            Lookup::Failed(_) => {
                (NOT_FOUND_SENTINEL.to_string(), NO_NAMES_MESSAGE.to_string())
            }
        }
    }

    /// True if the service recognized the name.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Lookup::Resolved { .. })
    }
}

/// Resolves chemical names against a CIR instance.
///
/// Holds a shared HTTP client; each `resolve` call is an independent,
/// stateless transaction. No timeout is configured, so a hung request
/// blocks that lookup indefinitely.
pub struct NameResolver {
    client: Client,
    endpoint: Url,
}

impl NameResolver {
    /// Create a resolver pointed at the public CIR instance.
    pub fn new() -> Self {
        let endpoint = Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL");
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Create a resolver pointed at a custom CIR instance.
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        if endpoint.cannot_be_a_base() {
            return Err(Error::InvalidEndpoint(endpoint.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    /// Resolve `name` to its SMILES and synonym list.
    ///
    /// The two fetches run as independently spawned tasks, each writing its
    /// own result slot once. This is a join, not a race: both results are in
    /// hand before the outcome is decided.
    pub async fn resolve(&self, name: &str) -> Lookup {
        let smiles_url = endpoints::smiles_url(&self.endpoint, name);
        let names_url = endpoints::names_url(&self.endpoint, name);

        let smiles_task = tokio::spawn({
            let client = self.client.clone();
            async move { fetch::fetch_text(&client, smiles_url).await }
        });
        let names_task = tokio::spawn({
            let client = self.client.clone();
            async move { fetch::fetch_text(&client, names_url).await }
        });

        let (smiles, names) = tokio::join!(smiles_task, names_task);
        let smiles = smiles.map_err(FetchError::from).and_then(|r| r);
        let names = names.map_err(FetchError::from).and_then(|r| r);

        let smiles = match smiles {
            Ok(smiles) => smiles,
            Err(err) => {
                log::warn!("SMILES lookup for {:?} failed: {}", name, err);
                return Lookup::Failed(err);
            }
        };

        // A failed synonym fetch degrades to the sentinel as its body, so the
        // caller sees a single "0" entry rather than an error.
        let names = names.unwrap_or_else(|err| {
            log::warn!("synonym lookup for {:?} failed: {}", name, err);
            NOT_FOUND_SENTINEL.to_string()
        });

        let synonyms = names.split('\n').map(str::to_string).collect();
        Lookup::Resolved { smiles, synonyms }
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new()
    }
}
