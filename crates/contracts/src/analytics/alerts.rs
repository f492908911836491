use crate::domain::SystemAlert;
use crate::shared::dates::sort_key_millis;

/// Severity buckets for display; parsed case-insensitively because stored
/// severities mix casing ("High", "CRITICAL", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Critical,
    High,
    Warning,
    Info,
    Other,
}

impl AlertSeverity {
    pub fn parse(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "critical" => AlertSeverity::Critical,
            "high" => AlertSeverity::High,
            "warning" => AlertSeverity::Warning,
            "info" => AlertSeverity::Info,
            _ => AlertSeverity::Other,
        }
    }
}

/// Alerts not yet marked read
pub fn unread_count(alerts: &[SystemAlert]) -> usize {
    alerts.iter().filter(|alert| !alert.is_read).count()
}

/// Copy of the feed ordered newest first by `generated_at`; unparseable
/// timestamps sort to the bottom as epoch.
pub fn sorted_newest_first(alerts: &[SystemAlert]) -> Vec<SystemAlert> {
    let mut sorted = alerts.to_vec();
    sorted.sort_by_key(|alert| std::cmp::Reverse(sort_key_millis(&alert.generated_at)));
    sorted
}

/// Messages for the home-page ticker, first `limit` alerts in feed order
pub fn ticker_messages(alerts: &[SystemAlert], limit: usize) -> Vec<String> {
    alerts
        .iter()
        .take(limit)
        .map(|alert| {
            if alert.message.is_empty() {
                "System Nominal".to_string()
            } else {
                alert.message.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(id: &str, is_read: bool, generated_at: &str) -> SystemAlert {
        SystemAlert {
            id: id.to_string(),
            message: format!("alert {id}"),
            severity: "High".to_string(),
            kind: "Stock".to_string(),
            is_read,
            generated_at: generated_at.to_string(),
        }
    }

    #[test]
    fn counts_unread() {
        let alerts = vec![alert("1", false, ""), alert("2", false, ""), alert("3", true, "")];
        assert_eq!(unread_count(&alerts), 2);
    }

    #[test]
    fn severity_parse_is_case_insensitive() {
        assert_eq!(AlertSeverity::parse("CRITICAL"), AlertSeverity::Critical);
        assert_eq!(AlertSeverity::parse("High"), AlertSeverity::High);
        assert_eq!(AlertSeverity::parse("warning"), AlertSeverity::Warning);
        assert_eq!(AlertSeverity::parse("Info"), AlertSeverity::Info);
        assert_eq!(AlertSeverity::parse("whatever"), AlertSeverity::Other);
    }

    #[test]
    fn newest_first_with_unparseable_at_the_bottom() {
        let alerts = vec![
            alert("old", false, "2024-01-10T08:00:00Z"),
            alert("new", false, "2024-01-20T08:00:00Z"),
            alert("broken", false, "???"),
        ];
        let sorted = sorted_newest_first(&alerts);
        let ids: Vec<&str> = sorted.iter().map(|alert| alert.id.as_str()).collect();
        assert_eq!(ids, ["new", "old", "broken"]);
    }

    #[test]
    fn ticker_takes_first_messages_in_feed_order() {
        let alerts: Vec<SystemAlert> =
            (0..8).map(|i| alert(&i.to_string(), false, "")).collect();
        let messages = ticker_messages(&alerts, 5);
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0], "alert 0");
    }
}
