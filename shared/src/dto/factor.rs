use serde::{Deserialize, Serialize};

/// Data Transfer Object for one adaptive prediction factor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactorDto {
    pub factor_id: i64,

    /// Display name, e.g. "Recent Form"
    pub name: String,

    /// Longer description; older backends omit it
    #[serde(default)]
    pub description: Option<String>,

    /// Starting weight before any adaptation
    pub base_weight: f64,

    /// Weight after adaptive learning; min <= current <= max is enforced
    /// server-side, the client only displays
    pub current_weight: f64,

    pub min_weight: f64,
    pub max_weight: f64,
}

impl FactorDto {
    /// Signed percent drift of the current weight from its base
    pub fn weight_change_percent(&self) -> f64 {
        weight_change_percent(self.base_weight, self.current_weight)
    }

    /// Drift formatted for display: "+20.0%", "-8.3%", "0.0%"
    pub fn weight_change_display(&self) -> String {
        let change = self.weight_change_percent();
        let sign = if change > 0.0 { "+" } else { "" };
        format!("{sign}{change:.1}%")
    }

    /// Left edge of the allowed-range band, as a percent of max_weight
    pub fn range_start_percent(&self) -> f64 {
        if self.max_weight <= 0.0 {
            return 0.0;
        }
        (self.min_weight / self.max_weight) * 100.0
    }

    /// Width of the allowed-range band, as a percent of max_weight
    pub fn range_span_percent(&self) -> f64 {
        if self.max_weight <= 0.0 {
            return 0.0;
        }
        ((self.max_weight - self.min_weight) / self.max_weight) * 100.0
    }

    /// Current-weight bar width, as a percent of max_weight
    pub fn current_bar_percent(&self) -> f64 {
        if self.max_weight <= 0.0 {
            return 0.0;
        }
        (self.current_weight / self.max_weight) * 100.0
    }

    /// A weight rendered as a percent label, one decimal
    pub fn weight_label(weight: f64) -> String {
        format!("{:.1}%", weight * 100.0)
    }
}

/// Signed percent change of `current` relative to `base`. A zero base
/// would divide away; reported as no drift.
pub fn weight_change_percent(base: f64, current: f64) -> f64 {
    if base == 0.0 {
        return 0.0;
    }
    ((current - base) / base) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn factor(base: f64, current: f64) -> FactorDto {
        FactorDto {
            factor_id: 1,
            name: "Recent Form".to_string(),
            description: None,
            base_weight: base,
            current_weight: current,
            min_weight: 0.05,
            max_weight: 0.40,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_weight_change_percent_signed() {
        assert_close(weight_change_percent(0.75, 0.9), 20.0);
        assert_close(weight_change_percent(0.5, 0.25), -50.0);
        assert_close(weight_change_percent(0.2, 0.2), 0.0);
        assert_close(weight_change_percent(0.0, 0.3), 0.0);
    }

    #[test]
    fn test_weight_change_display_sign_only_for_positive() {
        assert_eq!(factor(0.75, 0.9).weight_change_display(), "+20.0%");
        assert_eq!(factor(0.5, 0.25).weight_change_display(), "-50.0%");
        assert_eq!(factor(0.2, 0.2).weight_change_display(), "0.0%");
    }

    #[test]
    fn test_range_visualization_percentages() {
        let f = factor(0.20, 0.20);
        assert_close(f.range_start_percent(), 12.5);
        assert_close(f.range_span_percent(), 87.5);
        assert_close(f.current_bar_percent(), 50.0);
    }

    #[test]
    fn test_factor_dto_deserializes_without_description() {
        let json = r#"{
            "factor_id": 1,
            "name": "Recent Form",
            "base_weight": 0.20,
            "current_weight": 0.20,
            "min_weight": 0.05,
            "max_weight": 0.40
        }"#;
        let dto: FactorDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.description, None);
        assert_eq!(FactorDto::weight_label(dto.current_weight), "20.0%");
    }
}
