//! Content record types

use serde::{Deserialize, Serialize};

/// One question/answer pair, rendered on the page and in FAQPage schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A client shown in the logo strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub name: String,
    pub industry: String,
    pub abbreviation: String,
}

impl ClientRecord {
    pub fn new(
        name: impl Into<String>,
        industry: impl Into<String>,
        abbreviation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            industry: industry.into(),
            abbreviation: abbreviation.into(),
        }
    }
}

/// Unique industry names across `clients`, in first-seen order
pub fn industry_tags(clients: &[ClientRecord]) -> Vec<&str> {
    let mut tags: Vec<&str> = Vec::new();
    for client in clients {
        if !tags.contains(&client.industry.as_str()) {
            tags.push(client.industry.as_str());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industry_tags_deduplicate_in_order() {
        let clients = vec![
            ClientRecord::new("Northwind", "Healthcare", "NW"),
            ClientRecord::new("Contoso", "Finance", "CO"),
            ClientRecord::new("Fabrikam", "Healthcare", "FB"),
            ClientRecord::new("Tailspin", "Retail", "TS"),
        ];

        assert_eq!(industry_tags(&clients), vec!["Healthcare", "Finance", "Retail"]);
    }

    #[test]
    fn test_industry_tags_empty() {
        assert!(industry_tags(&[]).is_empty());
    }
}
