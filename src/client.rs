//! Gmail API client behind the provider capability boundary

use async_trait::async_trait;

use crate::auth::{GmailHub, MAIL_SCOPE};
use crate::error::Result;
use crate::models::{MessageDetail, MessageHeader, MessagePage};

/// Page size for list requests
const PAGE_SIZE: u32 = 100;

/// The four provider operations the pipeline depends on, kept behind a
/// trait so the core can be driven by a stand-in without network access.
#[async_trait]
pub trait MailClient: Send + Sync {
    /// List one page of message ids matching a query
    async fn list_messages(&self, query: &str, page_token: Option<String>)
        -> Result<MessagePage>;

    /// Fetch the headers of a single message
    async fn get_message(&self, id: &str) -> Result<MessageDetail>;

    /// Move a message to the trash
    async fn trash_message(&self, id: &str) -> Result<()>;

    /// Permanently delete a message
    async fn delete_message(&self, id: &str) -> Result<()>;
}

/// Production client backed by the Gmail API hub.
///
/// Calls are issued one at a time by the pipeline; errors convert
/// uniformly to [`crate::error::SweepError::ApiError`] with no retry and
/// no transient/permanent distinction.
pub struct GmailApiClient {
    hub: GmailHub,
}

impl GmailApiClient {
    pub fn new(hub: GmailHub) -> Self {
        Self { hub }
    }
}

#[async_trait]
impl MailClient for GmailApiClient {
    async fn list_messages(
        &self,
        query: &str,
        page_token: Option<String>,
    ) -> Result<MessagePage> {
        let mut call = self
            .hub
            .users()
            .messages_list("me")
            .q(query)
            .max_results(PAGE_SIZE);

        if let Some(token) = page_token.as_deref() {
            call = call.page_token(token);
        }

        let (_, response) = call.add_scope(MAIL_SCOPE).doit().await?;

        // Entries without an id cannot be fetched or mutated; skip them so
        // every record downstream carries a non-empty id.
        let ids = response
            .messages
            .unwrap_or_default()
            .into_iter()
            .filter_map(|m| m.id)
            .collect();

        Ok(MessagePage {
            ids,
            next_page_token: response.next_page_token,
        })
    }

    async fn get_message(&self, id: &str) -> Result<MessageDetail> {
        let (_, msg) = self
            .hub
            .users()
            .messages_get("me", id)
            .format("metadata")
            .add_metadata_headers("Subject")
            .add_metadata_headers("Date")
            .add_scope(MAIL_SCOPE)
            .doit()
            .await?;

        let headers = msg
            .payload
            .and_then(|p| p.headers)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|h| match (h.name, h.value) {
                (Some(name), Some(value)) => Some(MessageHeader { name, value }),
                _ => None,
            })
            .collect();

        Ok(MessageDetail {
            id: msg.id.unwrap_or_else(|| id.to_string()),
            headers,
        })
    }

    async fn trash_message(&self, id: &str) -> Result<()> {
        self.hub
            .users()
            .messages_trash("me", id)
            .add_scope(MAIL_SCOPE)
            .doit()
            .await?;

        Ok(())
    }

    async fn delete_message(&self, id: &str) -> Result<()> {
        self.hub
            .users()
            .messages_delete("me", id)
            .add_scope(MAIL_SCOPE)
            .doit()
            .await?;

        Ok(())
    }
}
