//! Common error infrastructure for item-effects.
//!
//! Only *unexpected* faults are errors here. A condition that does not hold, a
//! restriction that rejects a use, or an action that has nothing to do are all
//! ordinary outcomes and travel as data ([`crate::ConditionCheck`],
//! [`crate::ActionResult`], [`crate::EffectResult`]).
//!
//! [`EffectError`] is what remains: malformed catalog data that slipped past
//! load-time validation, or a context that violates its own invariants. The
//! pipeline catches these at the effect boundary and reports them in
//! `EffectResult::errors`.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Temporary conditions that may succeed on a later call
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all item-effects errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for categorization and testing. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Faults raised while evaluating conditions or executing actions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectError {
    /// Condition data is outside its valid domain (e.g. probability of 1.5).
    #[error("Malformed condition: {0}")]
    MalformedCondition(String),

    /// Action data is outside its valid domain (e.g. NaN multiplier).
    #[error("Malformed action: {0}")]
    MalformedAction(String),

    /// The supplied context violates its own invariants (e.g. hp > max_hp).
    #[error("Invalid context: {0}")]
    InvalidContext(String),

    /// A panic was caught at the effect boundary.
    #[error("Effect panicked: {0}")]
    Panicked(String),
}

impl GameError for EffectError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MalformedCondition(_) | Self::MalformedAction(_) => ErrorSeverity::Validation,
            Self::InvalidContext(_) => ErrorSeverity::Internal,
            Self::Panicked(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedCondition(_) => "EFFECT_MALFORMED_CONDITION",
            Self::MalformedAction(_) => "EFFECT_MALFORMED_ACTION",
            Self::InvalidContext(_) => "EFFECT_INVALID_CONTEXT",
            Self::Panicked(_) => "EFFECT_PANICKED",
        }
    }
}

/// Validates a probability-like value (`0.0..=1.0`, not NaN).
pub(crate) fn ensure_probability(value: f64, what: &str) -> Result<f64, String> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{what} must be within 0.0..=1.0, got {value}"))
    }
}
