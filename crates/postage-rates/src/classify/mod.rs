//! Mail classification
//!
//! Assigns a [`MailClass`] to a piece from its dimensions by walking an
//! ordered rule table. See [`rules`] for the table itself.

pub mod rules;

use postage_common::{Dimensions, MailClass, Result};
use tracing::debug;

pub use rules::{ClassRule, Interval, Predicate, CLASSIFICATION_RULES, FALLBACK_CLASS};

/// First-match classifier over an ordered rule table
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    rules: &'static [ClassRule],
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            rules: CLASSIFICATION_RULES,
        }
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[ClassRule] {
        self.rules
    }

    /// Class of the first matching rule, or the fallback
    pub fn classify(&self, dims: &Dimensions) -> MailClass {
        let class = self
            .rules
            .iter()
            .find(|rule| rule.predicate.matches(dims))
            .map(|rule| rule.class)
            .unwrap_or(FALLBACK_CLASS);

        debug!(
            length = dims.length(),
            height = dims.height(),
            thickness = dims.thickness(),
            class = %class,
            "Classified mail piece"
        );
        class
    }

    /// Validate raw measurements, then classify
    pub fn classify_raw(&self, length: f64, height: f64, thickness: f64) -> Result<MailClass> {
        let dims = Dimensions::new(length, height, thickness)?;
        Ok(self.classify(&dims))
    }

    /// Every class whose predicate matches, in rule order
    pub fn matching_rules(&self, dims: &Dimensions) -> Vec<MailClass> {
        self.rules
            .iter()
            .filter(|rule| rule.predicate.matches(dims))
            .map(|rule| rule.class)
            .collect()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify raw measurements with the standard rule table
pub fn classify(length: f64, height: f64, thickness: f64) -> Result<MailClass> {
    Classifier::new().classify_raw(length, height, thickness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use postage_common::{DimensionError, PostageError};

    fn class_of(length: f64, height: f64, thickness: f64) -> MailClass {
        classify(length, height, thickness).unwrap()
    }

    #[test]
    fn test_regular_postcard() {
        assert_eq!(class_of(4.0, 5.0, 0.01), MailClass::RegularPostcard);
        assert_eq!(class_of(3.5, 3.5, 0.007), MailClass::RegularPostcard);
        // Upper corner is inclusive on every axis
        assert_eq!(class_of(4.25, 6.0, 0.016), MailClass::RegularPostcard);
    }

    #[test]
    fn test_large_postcard() {
        assert_eq!(class_of(5.0, 8.0, 0.01), MailClass::LargePostcard);
        assert_eq!(class_of(4.26, 6.01, 0.007), MailClass::LargePostcard);
        assert_eq!(class_of(6.0, 11.5, 0.015), MailClass::LargePostcard);
    }

    #[test]
    fn test_large_postcard_lower_bounds_are_exclusive() {
        // length == 4.25 is not a large postcard and is too tall for a regular one
        assert_eq!(class_of(4.25, 6.5, 0.01), MailClass::Package);
        // height == 6 is not a large postcard and too long for a regular one
        assert_eq!(class_of(5.0, 6.0, 0.01), MailClass::Package);
    }

    #[test]
    fn test_envelope() {
        assert_eq!(class_of(5.0, 8.0, 0.1), MailClass::Envelope);
        assert_eq!(class_of(6.125, 11.5, 0.25), MailClass::Envelope);
        assert_eq!(class_of(3.5, 6.5, 0.016), MailClass::Envelope);
    }

    #[test]
    fn test_large_envelope() {
        assert_eq!(class_of(6.2, 11.5, 0.25), MailClass::LargeEnvelope);
        assert_eq!(class_of(24.0, 18.0, 0.5), MailClass::LargeEnvelope);
        // length == 6.125 is excluded from large envelopes
        assert_eq!(class_of(6.125, 12.0, 0.3), MailClass::Package);
    }

    #[test]
    fn test_package_girth_boundary() {
        assert_eq!(class_of(84.0, 0.0, 0.0), MailClass::Package);
        assert_eq!(class_of(20.0, 30.5, 1.5), MailClass::Package);
        assert_eq!(class_of(84.01, 0.0, 0.0), MailClass::LargePackage);
        assert_eq!(class_of(20.0, 30.5, 1.505), MailClass::LargePackage);
    }

    #[test]
    fn test_large_package_girth_boundary() {
        assert_eq!(class_of(130.0, 0.0, 0.0), MailClass::LargePackage);
        assert_eq!(class_of(100.0, 10.0, 5.0), MailClass::LargePackage);
        assert_eq!(class_of(130.01, 0.0, 0.0), MailClass::Unmailable);
        assert_eq!(class_of(100.0, 10.0, 5.5), MailClass::Unmailable);
    }

    #[test]
    fn test_every_shape_bound() {
        use MailClass::*;

        // (bound, on the bound, class, just past it, class)
        let rows: &[(&str, (f64, f64, f64), MailClass, (f64, f64, f64), MailClass)] = &[
            ("regular postcard min length", (3.5, 5.0, 0.01), RegularPostcard, (3.49, 5.0, 0.01), Package),
            ("regular postcard min height", (4.0, 3.5, 0.01), RegularPostcard, (4.0, 3.49, 0.01), Package),
            ("regular postcard min thickness", (4.0, 5.0, 0.007), RegularPostcard, (4.0, 5.0, 0.0069), Package),
            ("large postcard max thickness", (5.0, 8.0, 0.015), LargePostcard, (5.0, 8.0, 0.0155), Package),
            ("large postcard min thickness", (5.0, 8.0, 0.007), LargePostcard, (5.0, 8.0, 0.0069), Package),
            ("large postcard max height", (5.0, 11.5, 0.01), LargePostcard, (5.0, 11.51, 0.01), Package),
            ("envelope min height", (5.0, 5.0, 0.1), Envelope, (5.0, 4.99, 0.1), Package),
            ("envelope min length", (3.5, 8.0, 0.1), Envelope, (3.49, 8.0, 0.1), Package),
            ("envelope max length", (6.125, 8.0, 0.1), Envelope, (6.13, 8.0, 0.1), Package),
            ("envelope max thickness", (5.0, 8.0, 0.25), Envelope, (5.0, 8.0, 0.26), Package),
            ("large envelope min height", (12.0, 11.0, 0.3), LargeEnvelope, (12.0, 10.99, 0.3), Package),
            ("large envelope max height", (12.0, 18.0, 0.3), LargeEnvelope, (12.0, 18.01, 0.3), Package),
            ("large envelope max length", (24.0, 12.0, 0.3), LargeEnvelope, (24.01, 12.0, 0.3), Package),
            ("large envelope min thickness", (12.0, 12.0, 0.25), LargeEnvelope, (12.0, 12.0, 0.24), Package),
            ("large envelope max thickness", (12.0, 12.0, 0.5), LargeEnvelope, (12.0, 12.0, 0.51), Package),
        ];

        for &(bound, (l, h, t), inside, (ol, oh, ot), outside) in rows {
            assert_eq!(class_of(l, h, t), inside, "{bound}: ({l}, {h}, {t})");
            assert_eq!(class_of(ol, oh, ot), outside, "{bound}: ({ol}, {oh}, {ot})");
        }
    }

    #[test]
    fn test_first_match_wins_over_package() {
        let dims = Dimensions::new(10.0, 12.0, 0.3).unwrap();
        let classifier = Classifier::new();

        assert_eq!(
            classifier.matching_rules(&dims),
            vec![MailClass::LargeEnvelope, MailClass::Package]
        );
        assert_eq!(classifier.classify(&dims), MailClass::LargeEnvelope);
    }

    #[test]
    fn test_first_match_wins_over_envelope() {
        let dims = Dimensions::new(4.0, 5.5, 0.016).unwrap();
        let classifier = Classifier::new();

        let matches = classifier.matching_rules(&dims);
        assert_eq!(matches[0], MailClass::RegularPostcard);
        assert!(matches.contains(&MailClass::Envelope));
        assert_eq!(classifier.classify(&dims), MailClass::RegularPostcard);
    }

    #[test]
    fn test_empty_piece_is_a_package() {
        assert_eq!(class_of(0.0, 0.0, 0.0), MailClass::Package);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            classify(-1.0, 1.0, 1.0),
            Err(PostageError::Dimension(DimensionError::Negative { name: "length", .. }))
        ));
        assert!(matches!(
            classify(1.0, f64::NAN, 1.0),
            Err(PostageError::Dimension(DimensionError::NonFinite { name: "height", .. }))
        ));
    }

    #[test]
    fn test_unmatched_falls_back() {
        let dims = Dimensions::new(200.0, 1.0, 1.0).unwrap();
        assert!(Classifier::new().matching_rules(&dims).is_empty());
        assert_eq!(Classifier::new().classify(&dims), FALLBACK_CLASS);
    }
}
