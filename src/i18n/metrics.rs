//! Conversion metrics and observability module.
//!
//! Counts conversions per language and rejected inputs. Each server owns
//! one set of counters; the converter never reads them.

use crate::i18n::Language;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Conversion counters.
#[derive(Debug, Default)]
pub struct ConversionMetrics {
    /// Successful conversions into French
    french_conversions: AtomicUsize,

    /// Successful conversions into English
    english_conversions: AtomicUsize,

    /// Inputs rejected by the validator
    validation_rejections: AtomicUsize,

    /// Inputs rejected by the converter's domain check
    domain_errors: AtomicUsize,
}

impl ConversionMetrics {
    /// Create a detached set of counters, all zero.
    pub fn new() -> Self {
        Self::default()
    }

    fn counter(&self, language: Language) -> &AtomicUsize {
        match language {
            Language::French => &self.french_conversions,
            Language::English => &self.english_conversions,
        }
    }

    /// Record a successful conversion.
    pub fn record_conversion(&self, language: Language) {
        self.counter(language).fetch_add(1, Ordering::Relaxed);
    }

    /// Record an input that failed validation.
    pub fn record_rejection(&self) {
        self.validation_rejections.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an input outside the converter's domain.
    pub fn record_domain_error(&self) {
        self.domain_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Conversions performed into `language`.
    pub fn conversions(&self, language: Language) -> usize {
        self.counter(language).load(Ordering::Relaxed)
    }

    /// Get the current rejection count.
    pub fn rejections(&self) -> usize {
        self.validation_rejections.load(Ordering::Relaxed)
    }

    /// Get the current domain error count.
    pub fn domain_errors(&self) -> usize {
        self.domain_errors.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let french = self.conversions(Language::French);
        let english = self.conversions(Language::English);
        let total = french + english;
        let rejected = self.rejections() + self.domain_errors();
        let attempts = total + rejected;
        let rejection_rate = if attempts > 0 {
            (rejected as f64 / attempts as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            total_conversions: total,
            french_conversions: french,
            english_conversions: english,
            validation_rejections: self.rejections(),
            domain_errors: self.domain_errors(),
            rejection_rate,
        }
    }
}

/// Snapshot of the counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub total_conversions: usize,
    pub french_conversions: usize,
    pub english_conversions: usize,
    pub validation_rejections: usize,
    pub domain_errors: usize,
    /// Percentage of attempts that were rejected (0-100)
    pub rejection_rate: f64,
}

impl MetricsReport {
    /// Format the report as a human-readable string.
    pub fn format(&self) -> String {
        format!(
            "Conversion Metrics:\n\
             - Conversions: {} (fr: {}, en: {})\n\
             - Rejected: {} invalid, {} out of domain\n\
             - Rejection Rate: {:.1}%",
            self.total_conversions,
            self.french_conversions,
            self.english_conversions,
            self.validation_rejections,
            self.domain_errors,
            self.rejection_rate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let metrics = ConversionMetrics::new();
        let report = metrics.report();

        assert_eq!(report.total_conversions, 0);
        assert_eq!(report.validation_rejections, 0);
        assert_eq!(report.rejection_rate, 0.0);
    }

    #[test]
    fn test_record_conversion_per_language() {
        let metrics = ConversionMetrics::new();
        metrics.record_conversion(Language::French);
        metrics.record_conversion(Language::French);
        metrics.record_conversion(Language::English);

        assert_eq!(metrics.conversions(Language::French), 2);
        assert_eq!(metrics.conversions(Language::English), 1);
        assert_eq!(metrics.report().total_conversions, 3);
    }

    #[test]
    fn test_rejection_rate() {
        let metrics = ConversionMetrics::new();
        metrics.record_conversion(Language::English);
        metrics.record_conversion(Language::English);
        metrics.record_rejection();
        metrics.record_domain_error();

        let report = metrics.report();
        assert_eq!(report.validation_rejections, 1);
        assert_eq!(report.domain_errors, 1);
        assert_eq!(report.rejection_rate, 50.0);
    }

    #[test]
    fn test_report_format() {
        let metrics = ConversionMetrics::new();
        metrics.record_conversion(Language::French);
        metrics.record_rejection();

        let formatted = metrics.report().format();
        assert!(formatted.contains("Conversions: 1 (fr: 1, en: 0)"));
        assert!(formatted.contains("Rejection Rate: 50.0%"));
    }

    #[test]
    fn test_report_serializes() {
        let report = ConversionMetrics::new().report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_conversions"], 0);
    }
}
