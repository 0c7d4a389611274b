//! Paginated search across queries with a detail fetch per message

use tracing::info;

use crate::client::MailClient;
use crate::error::{Result, SweepError};
use crate::models::{MessageHeader, MessageRecord};

/// Drives the list/get workflow and accumulates matched messages.
pub struct SearchEngine<'a> {
    client: &'a dyn MailClient,
}

impl<'a> SearchEngine<'a> {
    pub fn new(client: &'a dyn MailClient) -> Self {
        Self { client }
    }

    /// Collect every message matching any of the queries.
    ///
    /// Records are accumulated in encounter order: query order, then page
    /// order, then provider-returned order. No deduplication is performed;
    /// a message matched by two queries appears twice. One progress line is
    /// printed per match as it is discovered.
    ///
    /// Any list or detail-fetch error aborts the entire run; lines already
    /// printed remain visible but no records reach the mutation step.
    pub async fn search(&self, queries: &[String]) -> Result<Vec<MessageRecord>> {
        let mut records = Vec::new();

        for query in queries {
            info!("Searching messages with {:?}", query);

            // The continuation token is scoped to the query; it must not
            // leak into the next query's first request.
            let mut page_token: Option<String> = None;

            loop {
                let page = self
                    .client
                    .list_messages(query, page_token.take())
                    .await
                    .map_err(|e| {
                        SweepError::SearchError(format!("Unable to retrieve messages: {}", e))
                    })?;

                for id in &page.ids {
                    let detail = self.client.get_message(id).await.map_err(|e| {
                        SweepError::SearchError(format!(
                            "Unable to retrieve message {}: {}",
                            id, e
                        ))
                    })?;

                    let (subject, date) = extract_subject_and_date(&detail.headers);
                    println!("==> \"{}\" - {}", subject, date);

                    records.push(MessageRecord {
                        id: detail.id,
                        subject,
                        date,
                    });
                }

                match page.next_page_token {
                    Some(token) if !token.is_empty() => page_token = Some(token),
                    _ => break,
                }
            }
        }

        info!("{} messages found with these criteria", records.len());
        Ok(records)
    }
}

/// Extract the `Subject` and `Date` header values.
///
/// Names are matched case-sensitively in provider order. `Date` keeps the
/// most recent value seen; scanning stops at the first `Subject`, so a
/// `Date` appearing after it is not picked up. Either value defaults to
/// the empty string when the header is absent.
fn extract_subject_and_date(headers: &[MessageHeader]) -> (String, String) {
    let mut subject = String::new();
    let mut date = String::new();

    for header in headers {
        if header.name == "Date" {
            date = header.value.clone();
        } else if header.name == "Subject" {
            subject = header.value.clone();
            break;
        }
    }

    (subject, date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(name: &str, value: &str) -> MessageHeader {
        MessageHeader {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_extracts_both_headers() {
        let headers = vec![
            header("Date", "Mon, 24 Nov 2025 10:30:00 +0000"),
            header("Subject", "Hello"),
        ];

        let (subject, date) = extract_subject_and_date(&headers);
        assert_eq!(subject, "Hello");
        assert_eq!(date, "Mon, 24 Nov 2025 10:30:00 +0000");
    }

    #[test]
    fn test_missing_headers_default_to_empty() {
        let headers = vec![header("From", "a@example.com")];

        let (subject, date) = extract_subject_and_date(&headers);
        assert_eq!(subject, "");
        assert_eq!(date, "");

        let (subject, date) = extract_subject_and_date(&[]);
        assert_eq!(subject, "");
        assert_eq!(date, "");
    }

    #[test]
    fn test_first_subject_wins() {
        let headers = vec![
            header("Subject", "first"),
            header("Subject", "second"),
        ];

        let (subject, _) = extract_subject_and_date(&headers);
        assert_eq!(subject, "first");
    }

    #[test]
    fn test_scan_stops_at_first_subject() {
        let headers = vec![
            header("Subject", "Hello"),
            header("Date", "too late"),
        ];

        let (subject, date) = extract_subject_and_date(&headers);
        assert_eq!(subject, "Hello");
        assert_eq!(date, "");
    }

    #[test]
    fn test_last_date_before_subject_wins() {
        let headers = vec![
            header("Date", "older"),
            header("Date", "newer"),
            header("Subject", "Hello"),
        ];

        let (_, date) = extract_subject_and_date(&headers);
        assert_eq!(date, "newer");
    }

    #[test]
    fn test_header_names_are_case_sensitive() {
        let headers = vec![
            header("subject", "lowercase"),
            header("DATE", "uppercase"),
        ];

        let (subject, date) = extract_subject_and_date(&headers);
        assert_eq!(subject, "");
        assert_eq!(date, "");
    }
}
