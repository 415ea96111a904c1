//! Audit log CLI command

use crate::audit::{AuditLogger, EntityType};
use crate::config::Settings;
use crate::error::{FintrackError, FintrackResult};

/// Render the newest audit entries, one per line
pub fn format_audit_log(
    audit: &AuditLogger,
    settings: &Settings,
    entity: Option<&str>,
    limit: usize,
) -> FintrackResult<String> {
    let entity_type = entity
        .map(|e| e.parse::<EntityType>().map_err(FintrackError::Validation))
        .transpose()?;

    let entries = audit.recent(entity_type, limit)?;
    if entries.is_empty() {
        return Ok("No audit entries found.".to_string());
    }

    Ok(entries
        .iter()
        .map(|entry| entry.format_human_readable(&settings.currency_symbol))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Handle `fintrack audit`
pub fn handle_audit_command(
    audit: &AuditLogger,
    settings: &Settings,
    entity: Option<String>,
    limit: usize,
) -> FintrackResult<()> {
    println!("{}", format_audit_log(audit, settings, entity.as_deref(), limit)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditEntry;
    use serde_json::json;
    use tempfile::TempDir;

    fn logger_with_entries() -> (TempDir, AuditLogger) {
        let temp_dir = TempDir::new().unwrap();
        let audit = AuditLogger::new(temp_dir.path().join("audit.log"));
        audit
            .log(&AuditEntry::create(
                EntityType::Transaction,
                "550e8400-e29b-41d4-a716-446655440000",
                Some("Salary".into()),
                &json!({"amount": 5000.0}),
            ))
            .unwrap();
        audit
            .log(&AuditEntry::create(
                EntityType::Investment,
                "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                Some("CDB".into()),
                &json!({"amount": 2500.0}),
            ))
            .unwrap();
        (temp_dir, audit)
    }

    #[test]
    fn test_lists_newest_first() {
        let (_temp, audit) = logger_with_entries();
        let text = format_audit_log(&audit, &Settings::default(), None, 10).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("inv-6ba7b810  CDB  R$ 2.500,00"));
        assert!(lines[1].contains("txn-550e8400  Salary  R$ 5.000,00"));
    }

    #[test]
    fn test_entity_filter_and_limit() {
        let (_temp, audit) = logger_with_entries();
        let text =
            format_audit_log(&audit, &Settings::default(), Some("transaction"), 10).unwrap();
        assert!(text.contains("Salary"));
        assert!(!text.contains("CDB"));

        let text = format_audit_log(&audit, &Settings::default(), None, 1).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_unknown_entity_is_validation_error() {
        let (_temp, audit) = logger_with_entries();
        let err = format_audit_log(&audit, &Settings::default(), Some("payee"), 10).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_empty_log_message() {
        let temp_dir = TempDir::new().unwrap();
        let audit = AuditLogger::new(temp_dir.path().join("audit.log"));
        assert_eq!(
            format_audit_log(&audit, &Settings::default(), None, 5).unwrap(),
            "No audit entries found."
        );
    }
}
