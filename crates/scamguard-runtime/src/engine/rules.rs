//! Scoring rules
//!
//! Four independent rules, each adding a fixed number of points when its
//! condition holds. Weights are chosen so that no single rule reaches the
//! fraud threshold on its own.

use scamguard_core::Report;
use serde::Serialize;
use std::fmt;

/// Report categories considered high risk (case-sensitive substring match)
pub const HIGH_RISK_CATEGORIES: &[&str] = &["Phishing", "Investment"];

/// Urgency/money keywords, matched against lower-cased report keywords
pub const CRITICAL_KEYWORDS: &[&str] = &[
    "password",
    "guaranteed",
    "urgent",
    "profit",
    "expired",
    "deposit",
    "verify",
];

/// Low-trust URL fragments (case-sensitive substring match)
pub const SUSPICIOUS_URL_MARKERS: &[&str] = &[".xyz", ".online", "secure-login-"];

/// Category fragment for tech support scams
pub const TECH_SUPPORT_CATEGORY: &str = "Tech Support";

/// Phrase typical of tech support scams (case-sensitive)
pub const TECH_SUPPORT_PHRASE: &str = "call now";

/// Rule identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    HighRiskCategory,
    CriticalKeyword,
    SuspiciousUrl,
    TechSupportSignal,
}

impl RuleId {
    /// Stable string id, as reported in `triggered_rules`
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::HighRiskCategory => "high_risk_category",
            RuleId::CriticalKeyword => "critical_keyword",
            RuleId::SuspiciousUrl => "suspicious_url",
            RuleId::TechSupportSignal => "tech_support_signal",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single condition-to-points mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub id: RuleId,
    pub name: &'static str,
    pub points: u32,
}

impl Rule {
    /// Evaluate this rule's condition against a report
    pub fn matches(&self, report: &Report) -> bool {
        match self.id {
            RuleId::HighRiskCategory => HIGH_RISK_CATEGORIES
                .iter()
                .any(|category| report.report_type.contains(category)),
            RuleId::CriticalKeyword => {
                let keywords = report.keywords.to_lowercase();
                CRITICAL_KEYWORDS
                    .iter()
                    .any(|keyword| keywords.contains(keyword))
            }
            RuleId::SuspiciousUrl => SUSPICIOUS_URL_MARKERS
                .iter()
                .any(|marker| report.url.contains(marker)),
            RuleId::TechSupportSignal => {
                report.report_type.contains(TECH_SUPPORT_CATEGORY)
                    || report.keywords.contains(TECH_SUPPORT_PHRASE)
            }
        }
    }
}

/// The built-in rule table, in evaluation order
pub const DEFAULT_RULES: [Rule; 4] = [
    Rule {
        id: RuleId::HighRiskCategory,
        name: "High-risk category",
        points: 40,
    },
    Rule {
        id: RuleId::CriticalKeyword,
        name: "Critical urgency/money keyword",
        points: 30,
    },
    Rule {
        id: RuleId::SuspiciousUrl,
        name: "Suspicious URL domain",
        points: 20,
    },
    Rule {
        id: RuleId::TechSupportSignal,
        name: "Tech support language",
        points: 10,
    },
];
