//! Common test utilities and fixtures

use gmail_sweep::client::MailClient;
use gmail_sweep::error::Result;
use gmail_sweep::models::{MessageDetail, MessageHeader, MessagePage, MessageRecord};
use mockall::mock;

/// One page of list results
pub fn page(ids: &[&str], next_page_token: Option<&str>) -> MessagePage {
    MessagePage {
        ids: ids.iter().map(|s| s.to_string()).collect(),
        next_page_token: next_page_token.map(|s| s.to_string()),
    }
}

/// Detail response with the usual Date-before-Subject header order
pub fn detail(id: &str, subject: &str, date: &str) -> MessageDetail {
    MessageDetail {
        id: id.to_string(),
        headers: vec![
            MessageHeader {
                name: "Date".to_string(),
                value: date.to_string(),
            },
            MessageHeader {
                name: "Subject".to_string(),
                value: subject.to_string(),
            },
        ],
    }
}

/// The record the search pipeline builds from [`detail`]
pub fn record(id: &str, subject: &str, date: &str) -> MessageRecord {
    MessageRecord {
        id: id.to_string(),
        subject: subject.to_string(),
        date: date.to_string(),
    }
}

// Mock implementation of MailClient for testing
mock! {
    pub MailClient {}

    #[async_trait::async_trait]
    impl MailClient for MailClient {
        async fn list_messages(&self, query: &str, page_token: Option<String>) -> Result<MessagePage>;
        async fn get_message(&self, id: &str) -> Result<MessageDetail>;
        async fn trash_message(&self, id: &str) -> Result<()>;
        async fn delete_message(&self, id: &str) -> Result<()>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_fixture() {
        let p = page(&["1", "2"], Some("tok"));
        assert_eq!(p.ids, vec!["1", "2"]);
        assert_eq!(p.next_page_token.as_deref(), Some("tok"));

        let last = page(&[], None);
        assert!(last.ids.is_empty());
        assert!(last.next_page_token.is_none());
    }

    #[test]
    fn test_detail_fixture_header_order() {
        let d = detail("1", "Hi", "D1");
        assert_eq!(d.headers[0].name, "Date");
        assert_eq!(d.headers[1].name, "Subject");
    }
}
