use serde::{Deserialize, Serialize};

/// Converts a tick value into its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "config", rename_all = "snake_case")]
pub enum TickFormatter {
    /// Prints the value as is.
    Identity,
    /// Fixed number of fractional digits.
    Fixed { precision: usize },
    /// Positional lookup into a label table.
    Categorical(Vec<String>),
}

impl TickFormatter {
    /// Returns `None` when a categorical lookup has no entry for `tick`.
    #[must_use]
    pub fn format(&self, tick: f64) -> Option<String> {
        match self {
            Self::Identity => Some(tick.to_string()),
            Self::Fixed { precision } => Some(format!("{tick:.precision$}")),
            Self::Categorical(labels) => {
                table_index(tick).and_then(|index| labels.get(index).cloned())
            }
        }
    }

    #[must_use]
    pub fn format_all(&self, ticks: &[f64]) -> Vec<Option<String>> {
        ticks.iter().map(|tick| self.format(*tick)).collect()
    }
}

fn table_index(tick: f64) -> Option<usize> {
    if tick.is_finite() && tick >= 0.0 && tick.fract() == 0.0 {
        Some(tick as usize)
    } else {
        None
    }
}
