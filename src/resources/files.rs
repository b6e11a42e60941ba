//! File library endpoints.

use std::collections::HashMap;
use std::fmt::Display;

use crate::clients::ApiRequestError;
use crate::PrintfulClient;

impl PrintfulClient {
    /// Returns the list of files in the library.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn file_list(
        &mut self,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, ApiRequestError> {
        self.get("files", query)
    }

    /// Adds a new file to the library.
    ///
    /// The file is fetched by Printful from the `url` given in `data`; no
    /// upload happens from this client.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn create_file(
        &mut self,
        data: impl Into<serde_json::Value>,
    ) -> Result<serde_json::Value, ApiRequestError> {
        self.post("files", Some(data.into()), None)
    }

    /// Returns file info.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn file_info(&mut self, id: impl Display) -> Result<serde_json::Value, ApiRequestError> {
        self.get(&format!("files/{id}"), None)
    }
}
