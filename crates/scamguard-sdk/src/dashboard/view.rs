//! Display projections of analyzed reports

use scamguard_core::AnalyzedReport;

/// Placeholder shown while the analysis request is in flight
pub const LOADING_MESSAGE: &str = "Analyzing data with detection engine...";

/// Shown when no report passes the active filter
pub const EMPTY_MESSAGE: &str = "No current alerts found matching the filter.";

/// Shown in place of the whole list when the analysis request failed
pub const ERROR_MESSAGE: &str = "Error: Could not connect to Detection Engine.";

/// Shown for empty location/url fields
pub const NOT_AVAILABLE: &str = "N/A";

/// One display card per analyzed report
#[derive(Debug, Clone, PartialEq)]
pub struct AlertCard {
    pub id: i64,
    /// Type label lower-cased with whitespace replaced by '-'
    pub css_slug: String,
    pub type_tag: String,
    pub title: String,
    pub location: String,
    pub keywords: String,
    pub url: String,
    pub status_text: &'static str,
    pub status_class: &'static str,
    pub confidence_text: String,
}

impl From<&AnalyzedReport> for AlertCard {
    fn from(analyzed: &AnalyzedReport) -> Self {
        let report = &analyzed.report;
        let (status_text, status_class) = if analyzed.is_fraud {
            ("FRAUD DETECTED", "critical")
        } else {
            ("SAFE / UNCERTAIN", "low")
        };

        Self {
            id: report.id,
            css_slug: type_slug(&report.report_type),
            type_tag: report.report_type.clone(),
            title: format!("Incident: {}", report.report_type),
            location: or_not_available(&report.location),
            keywords: report.keywords.clone(),
            url: or_not_available(&report.url),
            status_text,
            status_class,
            confidence_text: format!("Confidence: {:.1}%", analyzed.confidence_score),
        }
    }
}

/// Global accuracy figure, taken from the first analyzed report
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyMeter {
    pub accuracy: f64,
}

impl AccuracyMeter {
    pub const TITLE: &'static str = "System Performance";
    pub const NOTE: &'static str = "(Based on Rule-Engine evaluation against synthetic data)";

    /// "Overall Accuracy: 90.1%"
    pub fn score_text(&self) -> String {
        format!("Overall Accuracy: {:.1}%", self.accuracy)
    }
}

/// What the report list area shows
#[derive(Debug, Clone, PartialEq)]
pub enum BoardView {
    Loading,
    Empty,
    Error,
    Cards(Vec<AlertCard>),
}

impl BoardView {
    /// Placeholder message, if this view shows one instead of cards
    pub fn message(&self) -> Option<&'static str> {
        match self {
            BoardView::Loading => Some(LOADING_MESSAGE),
            BoardView::Empty => Some(EMPTY_MESSAGE),
            BoardView::Error => Some(ERROR_MESSAGE),
            BoardView::Cards(_) => None,
        }
    }
}

fn type_slug(report_type: &str) -> String {
    report_type
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

fn or_not_available(value: &str) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scamguard_core::{Report, SYSTEM_ACCURACY};

    fn analyzed(report: Report, is_fraud: bool, confidence: f64) -> AnalyzedReport {
        AnalyzedReport {
            report,
            is_fraud,
            confidence_score: confidence,
            system_accuracy: SYSTEM_ACCURACY,
            fraud_score: 0,
            triggered_rules: Vec::new(),
        }
    }

    #[test]
    fn test_fraud_card() {
        let card = AlertCard::from(&analyzed(
            Report::new(1, "Phishing", "urgent password reset")
                .with_url("http://bank-login.xyz")
                .with_location("Mumbai"),
            true,
            95.0,
        ));

        assert_eq!(card.css_slug, "phishing");
        assert_eq!(card.title, "Incident: Phishing");
        assert_eq!(card.location, "Mumbai");
        assert_eq!(card.url, "http://bank-login.xyz");
        assert_eq!(card.status_text, "FRAUD DETECTED");
        assert_eq!(card.status_class, "critical");
        assert_eq!(card.confidence_text, "Confidence: 95.0%");
    }

    #[test]
    fn test_safe_card_with_missing_fields() {
        let card = AlertCard::from(&analyzed(
            Report::new(4, "Tech Support  Scam", "windows license expired call now"),
            false,
            45.0,
        ));

        assert_eq!(card.css_slug, "tech-support--scam");
        assert_eq!(card.location, "N/A");
        assert_eq!(card.url, "N/A");
        assert_eq!(card.status_text, "SAFE / UNCERTAIN");
        assert_eq!(card.status_class, "low");
        assert_eq!(card.confidence_text, "Confidence: 45.0%");
    }

    #[test]
    fn test_accuracy_meter_text() {
        let meter = AccuracyMeter { accuracy: 90.1 };
        assert_eq!(meter.score_text(), "Overall Accuracy: 90.1%");
    }

    #[test]
    fn test_board_view_messages() {
        assert_eq!(BoardView::Loading.message(), Some(LOADING_MESSAGE));
        assert_eq!(BoardView::Empty.message(), Some(EMPTY_MESSAGE));
        assert_eq!(BoardView::Error.message(), Some(ERROR_MESSAGE));
        assert_eq!(BoardView::Cards(Vec::new()).message(), None);
    }
}
