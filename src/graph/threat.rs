use serde::{Deserialize, Serialize};

/// Closed set of abstract threat outcomes an attack path can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatCategory {
    Clickjacking,
    Xss,
    HttpsDowngrade,
    MimeSniffing,
    FtpWeakness,
    SecurityMisconfig,
}

impl ThreatCategory {
    /// Registration order; also the order extraction walks threats in.
    pub const ALL: [ThreatCategory; 6] = [
        Self::Clickjacking,
        Self::Xss,
        Self::HttpsDowngrade,
        Self::MimeSniffing,
        Self::FtpWeakness,
        Self::SecurityMisconfig,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Clickjacking => "threat:clickjacking",
            Self::Xss => "threat:xss",
            Self::HttpsDowngrade => "threat:https_downgrade",
            Self::MimeSniffing => "threat:mime_sniffing",
            Self::FtpWeakness => "threat:ftp_weakness",
            Self::SecurityMisconfig => "threat:security_misconfig",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clickjacking => "Clickjacking Risk",
            Self::Xss => "XSS / Client-side Injection Risk",
            Self::HttpsDowngrade => "HTTPS Downgrade / Transport Security Risk",
            Self::MimeSniffing => "MIME Sniffing / Content-Type Confusion",
            Self::FtpWeakness => "FTP Service Weakness / Data Exposure",
            Self::SecurityMisconfig => "General Security Misconfiguration",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl std::fmt::Display for ThreatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = ThreatCategory::ALL.iter().map(|t| t.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_from_id_roundtrip() {
        for threat in ThreatCategory::ALL {
            assert_eq!(ThreatCategory::from_id(threat.id()), Some(threat));
        }
        assert_eq!(ThreatCategory::from_id("threat:sqli"), None);
    }
}
