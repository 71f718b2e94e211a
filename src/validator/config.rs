//! Validator configuration

/// How many violations a validation run reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Collect every violation
    #[default]
    Aggregate,
    /// Stop at the first violation
    FirstViolation,
}

/// Configuration for a [`Validator`](super::Validator).
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Reporting mode
    pub mode: ValidationMode,
    /// Emit a POINT_REJECTED log line on failure
    pub log_rejections: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::Aggregate,
            log_rejections: true,
        }
    }
}

impl ValidatorConfig {
    /// Config that stops at the first violation.
    pub fn first_violation() -> Self {
        Self {
            mode: ValidationMode::FirstViolation,
            ..Self::default()
        }
    }

    /// Config that never logs rejections.
    pub fn quiet() -> Self {
        Self {
            log_rejections: false,
            ..Self::default()
        }
    }

    pub fn stops_early(&self) -> bool {
        self.mode == ValidationMode::FirstViolation
    }
}
