//! Qualitative momentum signal derived from the latest RSI value.

use std::fmt;

pub const OVERBOUGHT_THRESHOLD: f64 = 70.0;
pub const OVERSOLD_THRESHOLD: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalClassification {
    Overbought,
    Oversold,
    Neutral,
}

/// Visual weight the presentation layer gives a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Alert,
    Success,
    Info,
}

impl SignalClassification {
    /// Strict comparisons: exactly 70 or exactly 30 is Neutral.
    pub fn classify(rsi: f64) -> Self {
        if rsi > OVERBOUGHT_THRESHOLD {
            SignalClassification::Overbought
        } else if rsi < OVERSOLD_THRESHOLD {
            SignalClassification::Oversold
        } else {
            SignalClassification::Neutral
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            SignalClassification::Overbought => Severity::Alert,
            SignalClassification::Oversold => Severity::Success,
            SignalClassification::Neutral => Severity::Info,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SignalClassification::Overbought => "Overbought (Possible Pullback)",
            SignalClassification::Oversold => "Oversold (Potential Buy Zone)",
            SignalClassification::Neutral => "Neutral Momentum",
        }
    }
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Alert => "alert",
            Severity::Success => "success",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for SignalClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalClassification::Overbought => write!(f, "Overbought"),
            SignalClassification::Oversold => write!(f, "Oversold"),
            SignalClassification::Neutral => write!(f, "Neutral"),
        }
    }
}
