//! Rule engine tests

use super::*;
use scamguard_core::{Report, SYSTEM_ACCURACY};

const ALLOWED_SCORES: [u32; 11] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

/// Builds a report that fires exactly the rules selected by `mask`
/// (bit 0 = A, bit 1 = B, bit 2 = C, bit 3 = D).
fn report_for_mask(mask: u8) -> Report {
    let mut report_type = String::from("Report");
    let mut keywords = String::from("hello");
    let mut url = String::new();

    if mask & 0b0001 != 0 {
        report_type.push_str(" Phishing");
    }
    if mask & 0b0010 != 0 {
        keywords.push_str(" deposit");
    }
    if mask & 0b0100 != 0 {
        url.push_str("http://promo.online");
    }
    if mask & 0b1000 != 0 {
        keywords.push_str(" call now");
    }

    Report::new(i64::from(mask), report_type, keywords).with_url(url)
}

#[test]
fn test_scenario_phishing_with_suspicious_url() {
    let report = Report::new(1, "Phishing", "urgent password reset")
        .with_url("http://bank-login.xyz")
        .with_location("Mumbai");

    let analyzed = analyze(&report);

    assert_eq!(analyzed.fraud_score, 90);
    assert!(analyzed.is_fraud);
    assert_eq!(analyzed.confidence_score, 95.0);
    assert_eq!(
        analyzed.triggered_rules,
        vec!["high_risk_category", "critical_keyword", "suspicious_url"]
    );
}

#[test]
fn test_scenario_general_inquiry() {
    let report = Report::new(2, "General Inquiry", "checking my account balance");

    let analyzed = analyze(&report);

    assert_eq!(analyzed.fraud_score, 0);
    assert!(!analyzed.is_fraud);
    assert_eq!(analyzed.confidence_score, 5.0);
    assert!(analyzed.triggered_rules.is_empty());
}

#[test]
fn test_scenario_tech_support_below_threshold() {
    let report = Report::new(4, "Tech Support Scam", "windows license expired call now");

    let analyzed = analyze(&report);

    assert_eq!(analyzed.fraud_score, 40);
    assert!(!analyzed.is_fraud);
    assert_eq!(analyzed.confidence_score, 45.0);
}

#[test]
fn test_investment_fraud_scores_full_marks() {
    let report = Report::new(3, "Investment Fraud", "guaranteed 50% profit daily")
        .with_url("http://cryptogold.online");

    let analyzed = analyze(&report);

    assert_eq!(analyzed.fraud_score, 90);
    assert!(analyzed.is_fraud);
}

#[test]
fn test_confidence_caps_at_one_hundred() {
    let report = Report::new(9, "Tech Support Phishing", "verify now")
        .with_url("http://x.xyz");

    let result = RuleEngine::new().score(&report);

    assert_eq!(result.score, 100);
    assert_eq!(result.confidence(), 100.0);
}

#[test]
fn test_every_rule_combination() {
    let engine = RuleEngine::new();

    for mask in 0u8..16 {
        let report = report_for_mask(mask);
        let result = engine.score(&report);
        let analyzed = engine.analyze(&report);

        let expected: u32 = engine
            .rules()
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, rule)| rule.points)
            .sum();

        assert_eq!(result.score, expected, "mask {:04b}", mask);
        assert!(ALLOWED_SCORES.contains(&result.score));
        assert_eq!(analyzed.is_fraud, result.score >= 50);
        assert_eq!(
            analyzed.confidence_score,
            (result.score + 5).min(100) as f64
        );
        assert!(analyzed.confidence_score >= result.score as f64 || result.score > 95);
    }
}

#[test]
fn test_single_rule_never_flags_fraud() {
    let engine = RuleEngine::new();
    for mask in [0b0001, 0b0010, 0b0100, 0b1000] {
        assert!(!engine.analyze(&report_for_mask(mask)).is_fraud);
    }
}

#[test]
fn test_analyze_is_idempotent() {
    let report = Report::new(5, "Phishing", "your account will be closed soon")
        .with_url("https://support-login-secure.com");

    let first = analyze(&report);
    let second = analyze(&report);

    assert_eq!(first, second);
    assert_eq!(first.fraud_score, 40);
    assert!(!first.is_fraud);
}

#[test]
fn test_keyword_rule_is_case_insensitive() {
    let result = RuleEngine::new().score(&Report::new(1, "Other", "PASSWORD reset"));
    assert_eq!(result.triggered, vec![RuleId::CriticalKeyword]);
    assert_eq!(result.score, 30);
}

#[test]
fn test_empty_report_is_total() {
    let report: Report = serde_json::from_str(r#"{"id": 11}"#).unwrap();

    let analyzed = analyze(&report);

    assert_eq!(analyzed.fraud_score, 0);
    assert!(!analyzed.is_fraud);
    assert_eq!(analyzed.confidence_score, 5.0);
}

#[test]
fn test_analysis_preserves_report_and_constant_accuracy() {
    let report = Report::new(6, "Genuine Report", "looking for banking hours")
        .with_location("Kolkata");

    let analyzed = analyze(&report);

    assert_eq!(analyzed.report, report);
    assert_eq!(analyzed.system_accuracy, SYSTEM_ACCURACY);
}
