//! Lookup strategies for resolving a value when an exact key match is absent.

use serde::{Deserialize, Serialize};

/// Strategy applied by a lookup table when the requested key falls between
/// stored keys.
///
/// The set is closed; the semantics of each strategy live in the lookup-table
/// implementation, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupMethod {
    /// Interpolate between the surrounding values.
    Interpolate,

    /// Use the value at the next key.
    NextValue,

    /// Use the value at the previous key.
    PreviousValue,
}

impl LookupMethod {
    /// Every variant, in enumeration order.
    pub const ALL: [LookupMethod; 3] = [
        LookupMethod::Interpolate,
        LookupMethod::NextValue,
        LookupMethod::PreviousValue,
    ];

    /// Get the human-readable name for the strategy.
    pub fn display_name(&self) -> &'static str {
        match self {
            LookupMethod::Interpolate => "Interpolate",
            LookupMethod::NextValue => "NextValue",
            LookupMethod::PreviousValue => "PreviousValue",
        }
    }

    /// Resolve a strategy from its display name, ignoring case.
    ///
    /// Matches the full display name only; unrecognized input yields `None`
    /// so that parsing config or UI strings never fails. Callers decide
    /// whether absence is an error in their context.
    pub fn from_display_name(name: &str) -> Option<LookupMethod> {
        LookupMethod::ALL
            .into_iter()
            .find(|method| method.display_name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for LookupMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
