use super::threat::ThreatCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertField {
    Name,
    Description,
}

/// One classification row: fires when any matcher's needle occurs in the
/// lower-cased field it names.
#[derive(Debug)]
pub struct ThreatRule {
    pub threat: ThreatCategory,
    pub matchers: &'static [(AlertField, &'static str)],
}

impl ThreatRule {
    pub fn matches(&self, name: &str, description: &str) -> bool {
        self.matchers.iter().any(|(field, needle)| match field {
            AlertField::Name => name.contains(needle),
            AlertField::Description => description.contains(needle),
        })
    }
}

/// Rows are independent; an alert gets an edge for every row that fires.
/// Extend by adding rows.
pub const THREAT_RULES: &[ThreatRule] = &[
    ThreatRule {
        threat: ThreatCategory::Clickjacking,
        matchers: &[
            (AlertField::Description, "clickjacking"),
            (AlertField::Description, "anti-clickjacking"),
            (AlertField::Name, "clickjacking"),
            (AlertField::Name, "anti-clickjacking"),
        ],
    },
    ThreatRule {
        threat: ThreatCategory::Xss,
        matchers: &[
            (AlertField::Name, "content security policy"),
            (AlertField::Name, "csp"),
        ],
    },
    ThreatRule {
        threat: ThreatCategory::HttpsDowngrade,
        matchers: &[
            (AlertField::Name, "strict-transport-security"),
            (AlertField::Description, "hsts"),
        ],
    },
    ThreatRule {
        threat: ThreatCategory::MimeSniffing,
        matchers: &[
            (AlertField::Name, "x-content-type-options"),
            (AlertField::Description, "mime-sniffing"),
        ],
    },
    ThreatRule {
        threat: ThreatCategory::SecurityMisconfig,
        matchers: &[
            (AlertField::Description, "security misconfiguration"),
            (AlertField::Description, "misconfig"),
        ],
    },
];

/// Threats an alert maps to, in table order. Inputs are lower-cased here.
pub fn classify_alert(name: &str, description: &str) -> Vec<ThreatCategory> {
    let name = name.to_lowercase();
    let description = description.to_lowercase();
    THREAT_RULES
        .iter()
        .filter(|rule| rule.matches(&name, &description))
        .map(|rule| rule.threat)
        .collect()
}
