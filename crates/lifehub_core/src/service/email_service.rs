//! Mock email digest service.
//!
//! Delegates summarization to an attached `AiEngine`; without one it falls
//! back to a plain subject listing.

use crate::clock::Clock;
use crate::model::email::{EmailItem, EmailSummary};
use crate::service::ai_engine::AiEngine;
use chrono::Duration;
use std::sync::Arc;

const FALLBACK_SUBJECT_LIMIT: usize = 3;
const MOCK_UNREAD_COUNT: u32 = 12;

/// Email digest contract.
pub trait EmailSummaryService {
    /// Short digest of the given snippets.
    fn summarize_emails(&self, snippets: &[String]) -> String;
    /// Inbox digest with unread count and key emails.
    fn email_summary(&self) -> EmailSummary;
}

/// Synthetic inbox backed by static sample mail.
pub struct MockEmailSummaryService {
    ai: Option<Arc<dyn AiEngine>>,
    clock: Arc<dyn Clock>,
}

impl MockEmailSummaryService {
    /// Creates a service that summarizes through `ai` when provided.
    pub fn new(ai: Option<Arc<dyn AiEngine>>, clock: Arc<dyn Clock>) -> Self {
        Self { ai, clock }
    }

    fn key_emails(&self) -> Vec<EmailItem> {
        vec![EmailItem {
            from: "team@company.com".to_string(),
            subject: "Q4 Planning Meeting Scheduled".to_string(),
            snippet: "The Q4 planning meeting has been scheduled for next Tuesday...".to_string(),
            received_at: self.clock.now() - Duration::hours(2),
            is_important: true,
        }]
    }
}

impl EmailSummaryService for MockEmailSummaryService {
    fn summarize_emails(&self, snippets: &[String]) -> String {
        if let Some(ai) = &self.ai {
            return ai.summarize_emails(snippets);
        }

        let top = snippets
            .iter()
            .take(FALLBACK_SUBJECT_LIMIT)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "You have {} new messages. Top subjects: {}",
            snippets.len(),
            top
        )
    }

    fn email_summary(&self) -> EmailSummary {
        let key_emails = self.key_emails();
        let subjects: Vec<String> = key_emails
            .iter()
            .map(|email| email.subject.clone())
            .collect();

        EmailSummary {
            unread_count: MOCK_UNREAD_COUNT,
            summary: self.summarize_emails(&subjects),
            key_emails,
            generated_at: self.clock.now(),
        }
    }
}
