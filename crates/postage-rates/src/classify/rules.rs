//! Ordered dimensional rules
//!
//! Rules are evaluated top to bottom and the first match wins. Adjacent
//! rules overlap (a large envelope also fits the package girth limit), so
//! the order of [`CLASSIFICATION_RULES`] is part of the contract.

use postage_common::{Dimensions, MailClass};

/// A range of inches; the upper bound is always inclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
    pub min_inclusive: bool,
}

impl Interval {
    /// `min <= x <= max`
    pub const fn closed(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_inclusive: true,
        }
    }

    /// `min < x <= max`
    pub const fn left_open(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_inclusive: false,
        }
    }

    /// `x <= max`
    pub const fn at_most(max: f64) -> Self {
        Self::closed(f64::NEG_INFINITY, max)
    }

    pub fn contains(&self, value: f64) -> bool {
        let above_min = if self.min_inclusive {
            value >= self.min
        } else {
            value > self.min
        };
        above_min && value <= self.max
    }
}

/// Condition a piece must satisfy for a rule to apply
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Predicate {
    /// Every dimension falls in its own interval
    Shape {
        length: Interval,
        height: Interval,
        thickness: Interval,
    },
    /// Length plus cross-section perimeter falls in the interval
    Girth(Interval),
}

impl Predicate {
    pub fn matches(&self, dims: &Dimensions) -> bool {
        match self {
            Predicate::Shape {
                length,
                height,
                thickness,
            } => {
                length.contains(dims.length())
                    && height.contains(dims.height())
                    && thickness.contains(dims.thickness())
            }
            Predicate::Girth(girth) => girth.contains(dims.girthed_length()),
        }
    }
}

/// A predicate paired with the class it assigns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassRule {
    pub class: MailClass,
    pub predicate: Predicate,
}

/// Class assigned when no rule matches
pub const FALLBACK_CLASS: MailClass = MailClass::Unmailable;

/// Standard classification table, in evaluation order
pub const CLASSIFICATION_RULES: &[ClassRule] = &[
    ClassRule {
        class: MailClass::RegularPostcard,
        predicate: Predicate::Shape {
            length: Interval::closed(3.5, 4.25),
            height: Interval::closed(3.5, 6.0),
            thickness: Interval::closed(0.007, 0.016),
        },
    },
    ClassRule {
        class: MailClass::LargePostcard,
        predicate: Predicate::Shape {
            length: Interval::left_open(4.25, 6.0),
            height: Interval::left_open(6.0, 11.5),
            thickness: Interval::closed(0.007, 0.015),
        },
    },
    ClassRule {
        class: MailClass::Envelope,
        predicate: Predicate::Shape {
            length: Interval::closed(3.5, 6.125),
            height: Interval::closed(5.0, 11.5),
            thickness: Interval::closed(0.016, 0.25),
        },
    },
    ClassRule {
        class: MailClass::LargeEnvelope,
        predicate: Predicate::Shape {
            length: Interval::left_open(6.125, 24.0),
            height: Interval::closed(11.0, 18.0),
            thickness: Interval::closed(0.25, 0.5),
        },
    },
    ClassRule {
        class: MailClass::Package,
        predicate: Predicate::Girth(Interval::at_most(84.0)),
    },
    ClassRule {
        class: MailClass::LargePackage,
        predicate: Predicate::Girth(Interval::left_open(84.0, 130.0)),
    },
];
