use crate::models::AttackPath;
use crate::paths::{risk_rank, RiskLevel};

pub fn format_attack_paths_markdown(paths: &[AttackPath]) -> String {
    if paths.is_empty() {
        return "## Attack Paths (Kill-Chain)\n\nNo attack paths were detected.\n".to_string();
    }

    let mut out = String::from(
        "## Attack Paths (Kill-Chain)\n\n| ID | Threat | Risk | Summary |\n|---|---|---|---|\n",
    );
    for path in paths {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            path.id,
            escape_cell(&path.threat),
            escape_cell(&path.risk),
            escape_cell(&path.summary),
        ));
    }
    out
}

pub fn format_severity_summary(paths: &[AttackPath]) -> String {
    let count = |level: RiskLevel| {
        paths
            .iter()
            .filter(|p| risk_rank(&p.risk) == level.rank())
            .count()
    };

    format!(
        "## Severity Summary\n\n| Severity | Paths |\n|---|---|\n| Critical | {} |\n| High | {} |\n| Medium | {} |\n| Low | {} |\n| Informational | {} |\n| **Total** | **{}** |\n",
        count(RiskLevel::Critical),
        count(RiskLevel::High),
        count(RiskLevel::Medium),
        count(RiskLevel::Low),
        count(RiskLevel::Informational),
        paths.len()
    )
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(id: &str, risk: &str) -> AttackPath {
        AttackPath {
            id: id.to_string(),
            risk: risk.to_string(),
            threat: "Clickjacking Risk".to_string(),
            summary: "http://x/a?x=1|2 → Clickjacking Risk".to_string(),
            steps: vec!["http://x/a?x=1|2".to_string(), "Clickjacking Risk".to_string()],
            node_ids: vec![],
        }
    }

    #[test]
    fn test_empty_table() {
        assert!(format_attack_paths_markdown(&[]).contains("No attack paths were detected."));
    }

    #[test]
    fn test_table_escapes_pipes() {
        let table = format_attack_paths_markdown(&[path("path_1", "Medium")]);
        assert!(table.contains("| ID | Threat | Risk | Summary |"));
        assert!(table.contains("| path_1 | Clickjacking Risk | Medium | http://x/a?x=1\\|2 → Clickjacking Risk |"));
    }

    #[test]
    fn test_severity_counts() {
        let paths = [
            path("path_1", "Medium"),
            path("path_2", "medium"),
            path("path_3", "Info"),
            path("path_4", "weird"),
        ];
        let summary = format_severity_summary(&paths);
        assert!(summary.contains("| Medium | 2 |"));
        assert!(summary.contains("| Informational | 2 |"));
        assert!(summary.contains("| **Total** | **4** |"));
    }
}
