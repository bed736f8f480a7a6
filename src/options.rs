//! Formatting options and configuration.

use crate::locale::Locale;

/// How tokens that match the tokenizer but have no renderer are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTokenPolicy {
    /// Fail with `FormatError::UnknownToken`.
    #[default]
    Reject,
    /// Emit the matched text unchanged.
    Preserve,
    /// Emit the text `false` for every unknown token and quoted literal.
    Legacy,
}

/// The clock used to turn `Now` and epoch milliseconds into wall-clock fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeBase {
    /// Host local time
    #[default]
    Local,
    /// Coordinated Universal Time
    Utc,
}

/// Options for formatting dates.
#[derive(Debug, Clone, Default)]
pub struct DateFormatOptions {
    /// Handling of unrecognized tokens.
    pub unknown_tokens: UnknownTokenPolicy,
    /// Clock for resolving instants.
    pub time_base: TimeBase,
    /// Weekday names used by the `w` token.
    pub locale: Locale,
}

impl DateFormatOptions {
    /// Options with the legacy behavior: unknown tokens and quoted runs become `false`.
    pub fn legacy() -> Self {
        Self {
            unknown_tokens: UnknownTokenPolicy::Legacy,
            ..Self::default()
        }
    }

    /// Returns a copy with the given unknown-token policy.
    pub fn with_unknown_tokens(mut self, policy: UnknownTokenPolicy) -> Self {
        self.unknown_tokens = policy;
        self
    }

    /// Returns a copy with the given time base.
    pub fn with_time_base(mut self, time_base: TimeBase) -> Self {
        self.time_base = time_base;
        self
    }

    /// Returns a copy with the given locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
