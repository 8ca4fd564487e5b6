//! Quote entities.

use super::record::Record;

/// Membership set listing every stored quote hash key.
pub const QUOTES_SET: &str = "quotes";

/// Counter producing quote ids.
pub const QUOTES_COUNTER: &str = "quotes_counter";

/// Input data for creating a new quote.
///
/// `user_id` is not checked against stored users. Any other payload fields
/// travel in `extra` and are stored alongside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    pub user_id: String,
    pub quote: String,
    pub extra: Record,
}

impl NewQuote {
    /// Produces the stored record once an id has been assigned.
    ///
    /// `user_id`, `quote` and `id` take precedence over same-named extra fields.
    pub fn into_record(self, id: u64) -> Record {
        let mut record = self.extra;
        record.insert("user_id".to_string(), self.user_id);
        record.insert("quote".to_string(), self.quote);
        record.insert("id".to_string(), id.to_string());
        record
    }
}

/// Returns the hash key for a quote id.
pub fn quote_key(id: u64) -> String {
    format!("quotes:{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_record_sets_assigned_id() {
        let mut extra = Record::new();
        extra.insert("source".to_string(), "Tintin".to_string());
        extra.insert("id".to_string(), "999".to_string());

        let record = NewQuote {
            user_id: "1".to_string(),
            quote: "Mille sabords !".to_string(),
            extra,
        }
        .into_record(42);

        assert_eq!(record.get("id").map(String::as_str), Some("42"));
        assert_eq!(record.get("user_id").map(String::as_str), Some("1"));
        assert_eq!(record.get("quote").map(String::as_str), Some("Mille sabords !"));
        assert_eq!(record.get("source").map(String::as_str), Some("Tintin"));
    }

    #[test]
    fn test_quote_key() {
        assert_eq!(quote_key(7), "quotes:7");
    }
}
