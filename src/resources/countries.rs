//! Country list.

use crate::clients::ApiRequestError;
use crate::PrintfulClient;

impl PrintfulClient {
    /// Returns the list of countries and their states.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn country_list(&mut self) -> Result<serde_json::Value, ApiRequestError> {
        self.get("countries", None)
    }
}
