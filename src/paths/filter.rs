use super::severity::{risk_rank, RiskLevel};
use crate::models::AttackPath;

/// Post-extraction selection. Ids are left as extracted.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    pub min_risk: Option<RiskLevel>,
    /// Threat node id (`threat:xss`) or display label.
    pub threat: Option<String>,
}

impl PathFilter {
    pub fn is_empty(&self) -> bool {
        self.min_risk.is_none() && self.threat.is_none()
    }

    pub fn matches(&self, path: &AttackPath) -> bool {
        if let Some(min) = self.min_risk {
            if risk_rank(&path.risk) < min.rank() {
                return false;
            }
        }
        if let Some(threat) = &self.threat {
            let by_id = path.threat_id() == Some(threat.as_str());
            if !by_id && !path.threat.eq_ignore_ascii_case(threat) {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, paths: &[AttackPath]) -> Vec<AttackPath> {
        paths.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(id: &str, risk: &str, threat_id: &str, threat: &str) -> AttackPath {
        AttackPath {
            id: id.to_string(),
            risk: risk.to_string(),
            threat: threat.to_string(),
            summary: String::new(),
            steps: vec!["Port 80 (http)".to_string(), threat.to_string()],
            node_ids: vec!["port:80".to_string(), threat_id.to_string()],
        }
    }

    #[test]
    fn test_min_risk() {
        let paths = vec![
            path("path_1", "Low", "threat:xss", "XSS"),
            path("path_2", "high", "threat:xss", "XSS"),
        ];
        let filter = PathFilter { min_risk: Some(RiskLevel::Medium), threat: None };
        let kept = filter.apply(&paths);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "path_2");
    }

    #[test]
    fn test_threat_by_id_or_label() {
        let paths = vec![
            path("path_1", "Low", "threat:xss", "XSS"),
            path("path_2", "Low", "threat:clickjacking", "Clickjacking Risk"),
        ];
        let by_id = PathFilter { threat: Some("threat:clickjacking".into()), ..Default::default() };
        assert_eq!(by_id.apply(&paths)[0].id, "path_2");
        let by_label = PathFilter { threat: Some("xss".into()), ..Default::default() };
        assert_eq!(by_label.apply(&paths)[0].id, "path_1");
        assert!(PathFilter::default().is_empty());
        assert_eq!(PathFilter::default().apply(&paths).len(), 2);
    }
}
