//! Audit entry data structures

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Transaction,
    Investment,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Transaction => write!(f, "Transaction"),
            EntityType::Investment => write!(f, "Investment"),
        }
    }
}

/// A single audit log entry
///
/// Creates carry the record as `after`, deletes carry it as `before`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Full UUID of the affected record
    pub entity_id: String,

    /// Description or name of the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create a new audit entry for a create operation
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: serde_json::to_value(entity).ok(),
        }
    }

    /// Create a new audit entry for a delete operation
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: serde_json::to_value(entity).ok(),
            after: None,
        }
    }

    /// The record snapshot this entry carries, whichever side it is on
    pub fn snapshot(&self) -> Option<&serde_json::Value> {
        self.after.as_ref().or(self.before.as_ref())
    }

    /// Amount recorded in the snapshot, when it has one
    pub fn amount(&self) -> Option<Money> {
        let raw = self.snapshot()?.get("amount")?.clone();
        serde_json::from_value(raw).ok()
    }

    /// The id as listings show it (`txn-1a2b3c4d`)
    pub fn short_id(&self) -> String {
        let prefix = match self.entity_type {
            EntityType::Transaction => "txn-",
            EntityType::Investment => "inv-",
        };
        let fragment: String = self.entity_id.chars().take(8).collect();
        format!("{}{}", prefix, fragment)
    }

    /// One line per entry for `fintrack audit`
    pub fn format_human_readable(&self, symbol: &str) -> String {
        let mut line = format!(
            "{}  {:<6}  {:<11}  {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            self.entity_type,
            self.short_id()
        );
        if let Some(name) = &self.entity_name {
            line.push_str(&format!("  {}", name));
        }
        if let Some(amount) = self.amount() {
            line.push_str(&format!("  {}", amount.format_with_symbol(symbol)));
        }
        line
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transaction" | "transactions" | "txn" => Ok(Self::Transaction),
            "investment" | "investments" | "inv" => Ok(Self::Investment),
            other => Err(format!(
                "Unknown entity '{}' (expected transaction or investment)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
        assert_eq!(EntityType::Investment.to_string(), "Investment");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"description": "Rent", "amount": 1500.0});
        let entry = AuditEntry::create(
            EntityType::Transaction,
            "5f0c2e7a-0000-4000-8000-000000000001",
            Some("Rent".to_string()),
            &data,
        );

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(data));
    }

    #[test]
    fn test_delete_entry() {
        let data = json!({"description": "Coffee"});
        let entry = AuditEntry::delete(EntityType::Transaction, "id-1", None, &data);

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_wire_names() {
        let entry = AuditEntry::create(EntityType::Investment, "id-2", None, &json!({}));
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["operation"], "create");
        assert_eq!(value["entity_type"], "investment");
        assert!(value.get("entity_name").is_none());
        assert!(value.get("before").is_none());
    }

    #[test]
    fn test_human_readable_line() {
        let entry = AuditEntry::delete(
            EntityType::Transaction,
            "550e8400-e29b-41d4-a716-446655440000",
            Some("Gym".to_string()),
            &json!({"description": "Gym", "amount": 99.9}),
        );

        let line = entry.format_human_readable("R$");
        assert!(line.contains("DELETE"));
        assert!(line.contains("txn-550e8400  Gym  R$ 99,90"));
    }

    #[test]
    fn test_amount_from_either_side() {
        let created = AuditEntry::create(EntityType::Investment, "abc", None, &json!({"amount": "2500.00"}));
        assert_eq!(created.amount(), Some(Money::from_cents(250_000)));

        let no_amount = AuditEntry::delete(EntityType::Transaction, "abc", None, &json!({}));
        assert_eq!(no_amount.amount(), None);
        assert!(!no_amount.format_human_readable("R$").contains("R$"));
    }

    #[test]
    fn test_entity_type_from_str() {
        assert_eq!("Transactions".parse::<EntityType>().unwrap(), EntityType::Transaction);
        assert_eq!("inv".parse::<EntityType>().unwrap(), EntityType::Investment);
        assert!("payee".parse::<EntityType>().is_err());
    }
}
