//! Bulk trash/delete of confirmed messages

use tracing::info;

use crate::client::MailClient;
use crate::error::{Result, SweepError};
use crate::models::{MessageRecord, MutationMode};

/// Applies one trash or delete call per confirmed record.
pub struct MutationExecutor<'a> {
    client: &'a dyn MailClient,
}

impl<'a> MutationExecutor<'a> {
    pub fn new(client: &'a dyn MailClient) -> Self {
        Self { client }
    }

    /// Apply `mode` to every record, in order, logging each action before
    /// the call is issued. The first failure aborts the remaining records;
    /// already-mutated messages are not rolled back.
    pub async fn apply(&self, records: &[MessageRecord], mode: MutationMode) -> Result<()> {
        for record in records {
            match mode {
                MutationMode::Trash => {
                    info!("Trashing {:?}", record.subject);
                    self.client.trash_message(&record.id).await.map_err(|e| {
                        SweepError::MutationError(format!(
                            "Unable to trash message {}: {}",
                            record.id, e
                        ))
                    })?;
                }
                MutationMode::Delete => {
                    info!("Deleting {:?}", record.subject);
                    self.client.delete_message(&record.id).await.map_err(|e| {
                        SweepError::MutationError(format!(
                            "Unable to delete message {}: {}",
                            record.id, e
                        ))
                    })?;
                }
            }
        }

        Ok(())
    }
}
