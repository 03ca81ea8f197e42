//! Mail classes assigned from item dimensions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mail category governing which tariff applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MailClass {
    RegularPostcard,
    LargePostcard,
    Envelope,
    LargeEnvelope,
    Package,
    LargePackage,
    /// Terminal classification: no tariff applies
    Unmailable,
}

impl MailClass {
    /// Every class, in classification rule order
    pub const ALL: [MailClass; 7] = [
        MailClass::RegularPostcard,
        MailClass::LargePostcard,
        MailClass::Envelope,
        MailClass::LargeEnvelope,
        MailClass::Package,
        MailClass::LargePackage,
        MailClass::Unmailable,
    ];

    /// Whether a tariff can apply to this class
    pub fn is_mailable(&self) -> bool {
        !matches!(self, MailClass::Unmailable)
    }

    /// Upper-case display name
    pub fn label(&self) -> &'static str {
        match self {
            MailClass::RegularPostcard => "REGULAR POST CARD",
            MailClass::LargePostcard => "LARGE POST CARD",
            MailClass::Envelope => "ENVELOPE",
            MailClass::LargeEnvelope => "LARGE ENVELOPE",
            MailClass::Package => "PACKAGE",
            MailClass::LargePackage => "LARGE PACKAGE",
            MailClass::Unmailable => "UNMAILABLE",
        }
    }
}

impl fmt::Display for MailClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
