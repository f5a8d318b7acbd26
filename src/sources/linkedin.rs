use tracing::{info, warn};

use super::fetch::Fetcher;
use super::normalize::SourceRecord;

impl Fetcher {
    /// LinkedIn exposes post comments only to approved partner apps, so there
    /// is no public endpoint to call. Always returns an empty batch.
    pub fn linkedin(&self, urn: &str, access_token: &str, _max_results: u32) -> Vec<SourceRecord> {
        if access_token.is_empty() {
            warn!("[LinkedIn] No access token provided. Try setting LINKEDIN_ACCESS_TOKEN.");
            return Vec::new();
        }
        info!(
            "[LinkedIn] Comment fetching for {} requires partner API permissions. Using demo mode.",
            urn
        );
        Vec::new()
    }
}
