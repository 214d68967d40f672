//! Ingested Documents
//!
//! A document is one piece of historical material about a subject: a vote
//! record, a donation entry, a speech transcript, and so on. Documents are
//! immutable once created - there is no update path.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of public record a document represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Vote,
    Donation,
    Speech,
    Article,
    Leak,
    Tweet,
    Other,
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentType::Vote => write!(f, "vote"),
            DocumentType::Donation => write!(f, "donation"),
            DocumentType::Speech => write!(f, "speech"),
            DocumentType::Article => write!(f, "article"),
            DocumentType::Leak => write!(f, "leak"),
            DocumentType::Tweet => write!(f, "tweet"),
            DocumentType::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vote" => Ok(DocumentType::Vote),
            "donation" => Ok(DocumentType::Donation),
            "speech" => Ok(DocumentType::Speech),
            "article" => Ok(DocumentType::Article),
            "leak" => Ok(DocumentType::Leak),
            "tweet" => Ok(DocumentType::Tweet),
            "other" => Ok(DocumentType::Other),
            other => Err(format!("unknown document type: {other}")),
        }
    }
}

/// Ingestion status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,
    Processing,
    Indexed,
    Error,
}

/// A piece of evidence material associated with exactly one subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestedDocument {
    /// Unique document id
    pub id: String,
    /// Owning subject's name (denormalized for display and citations)
    pub subject_name: String,
    /// Record kind
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// Filename or URL the content came from
    pub source: String,
    /// Calendar date string as reported by the source
    pub date: String,
    /// Raw text content
    pub content: String,
    /// Ingestion status
    pub status: DocumentStatus,
}

impl IngestedDocument {
    /// Create an indexed document with a fresh id.
    pub fn new(
        subject_name: impl Into<String>,
        doc_type: DocumentType,
        source: impl Into<String>,
        date: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            subject_name: subject_name.into(),
            doc_type,
            source: source.into(),
            date: date.into(),
            content: content.into(),
            status: DocumentStatus::Indexed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_round_trip() {
        let json = serde_json::to_string(&DocumentType::Donation).unwrap();
        assert_eq!(json, "\"donation\"");
        let back: DocumentType = serde_json::from_str("\"leak\"").unwrap();
        assert_eq!(back, DocumentType::Leak);
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!("Article".parse::<DocumentType>().unwrap(), DocumentType::Article);
        assert!("bulletin".parse::<DocumentType>().is_err());
    }

    #[test]
    fn test_document_serializes_type_field() {
        let doc = IngestedDocument::new("Jane Smith", DocumentType::Vote, "votes.csv", "2024-03-01", "Voted yes");
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["type"], "vote");
        assert_eq!(value["subjectName"], "Jane Smith");
        assert_eq!(value["status"], "indexed");
    }
}
