//! Top-level configuration and its sections.
//!
//! Every field has a serde default equal to the library default, so an empty
//! file and a missing file describe the same configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use primer_analytics::credit::{DefaultCurve, PdBounds, ScoreAnchor, DEFAULT_SCORE_ANCHORS};
use primer_analytics::error::AnalyticsResult;
use primer_analytics::frontier::RiskReturnFrontier;
use primer_analytics::var::{ConfidenceLevel, DistributionMode, GridSpec, TailCurve};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

// =============================================================================
// PRIMER CONFIGURATION
// =============================================================================

/// All tunable constants.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrimerConfig {
    /// Score-to-PD settings.
    pub credit: CreditConfig,
    /// Risk/return frontier settings.
    pub frontier: FrontierConfig,
    /// VaR curve settings.
    pub var: VarConfig,
    /// Interest-rate settings.
    pub rates: RatesConfig,
}

impl PrimerConfig {
    /// Parses a configuration from TOML text and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this structure, or
    /// if any value fails validation.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading configuration");
        Self::from_toml_str(&text)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the configuration to a file as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        std::fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default-probability curve built from the credit section.
    ///
    /// # Errors
    ///
    /// Returns an error if the anchors or bounds are unusable.
    pub fn default_curve(&self) -> AnalyticsResult<DefaultCurve> {
        let bounds = PdBounds::new(self.credit.pd_floor, self.credit.pd_cap)?;
        Ok(DefaultCurve::new(&self.credit.anchors)?.with_bounds(bounds))
    }

    /// Frontier built from the frontier section.
    ///
    /// # Errors
    ///
    /// Returns an error unless the slope is positive.
    pub fn frontier(&self) -> AnalyticsResult<RiskReturnFrontier> {
        RiskReturnFrontier::new(self.frontier.risk_free_rate, self.frontier.slope)
    }

    /// Sampling grid from the VaR section.
    ///
    /// # Errors
    ///
    /// Returns an error for fewer than two points or unordered bounds.
    pub fn grid(&self) -> AnalyticsResult<GridSpec> {
        Ok(GridSpec::new(
            self.var.grid_min,
            self.var.grid_max,
            self.var.grid_points,
        )?)
    }

    /// Tail curve sampled on the configured grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is invalid.
    pub fn tail_curve(
        &self,
        mode: DistributionMode,
        confidence: ConfidenceLevel,
    ) -> AnalyticsResult<TailCurve> {
        Ok(TailCurve::with_grid(mode, confidence, self.grid()?))
    }
}

impl Validate for PrimerConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = self.credit.validate();
        errors.extend(self.frontier.validate());
        errors.extend(self.var.validate());
        errors.extend(self.rates.validate());
        errors
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Score-to-PD settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CreditConfig {
    /// Minimum PD (percent).
    pub pd_floor: f64,
    /// Maximum PD (percent).
    pub pd_cap: f64,
    /// Score/PD anchor table.
    pub anchors: Vec<ScoreAnchor>,
}

impl Default for CreditConfig {
    fn default() -> Self {
        let bounds = PdBounds::default();
        Self {
            pd_floor: bounds.floor(),
            pd_cap: bounds.cap(),
            anchors: DEFAULT_SCORE_ANCHORS.to_vec(),
        }
    }
}

impl Validate for CreditConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(0.0..=100.0).contains(&self.pd_floor) {
            errors.push(ValidationError::with_rule(
                "credit.pd_floor",
                format!("PD floor {} must be between 0 and 100", self.pd_floor),
                "pd_range",
            ));
        }

        if !(0.0..=100.0).contains(&self.pd_cap) {
            errors.push(ValidationError::with_rule(
                "credit.pd_cap",
                format!("PD cap {} must be between 0 and 100", self.pd_cap),
                "pd_range",
            ));
        }

        if self.pd_floor >= self.pd_cap {
            errors.push(ValidationError::with_rule(
                "credit.pd_cap",
                format!(
                    "PD cap {} must be above the floor {}",
                    self.pd_cap, self.pd_floor
                ),
                "floor_below_cap",
            ));
        }

        if self.anchors.len() < 2 {
            errors.push(ValidationError::with_rule(
                "credit.anchors",
                format!("At least 2 anchors required, found {}", self.anchors.len()),
                "min_anchors",
            ));
        }

        if let Some(bad) = self
            .anchors
            .iter()
            .find(|a| !a.score.is_finite() || !a.pd.is_finite())
        {
            errors.push(ValidationError::new(
                "credit.anchors",
                format!("Anchor ({}, {}) is not finite", bad.score, bad.pd),
            ));
        }

        errors
    }
}

/// Risk/return frontier settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrontierConfig {
    /// Return at zero risk (percent).
    pub risk_free_rate: f64,
    /// Scale of the square-root term.
    pub slope: f64,
}

impl Default for FrontierConfig {
    fn default() -> Self {
        let frontier = RiskReturnFrontier::default();
        Self {
            risk_free_rate: frontier.risk_free_rate,
            slope: frontier.slope,
        }
    }
}

impl Validate for FrontierConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.risk_free_rate.is_finite() {
            errors.push(ValidationError::new(
                "frontier.risk_free_rate",
                "Risk-free rate must be finite",
            ));
        }

        if !(self.slope > 0.0 && self.slope.is_finite()) {
            errors.push(ValidationError::with_rule(
                "frontier.slope",
                format!("Slope {} must be positive", self.slope),
                "positive_slope",
            ));
        }

        errors
    }
}

/// VaR curve settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VarConfig {
    /// Left edge of the sampling grid (standard deviations).
    pub grid_min: f64,
    /// Right edge of the sampling grid (standard deviations).
    pub grid_max: f64,
    /// Number of samples.
    pub grid_points: usize,
    /// Distribution used when none is given.
    pub mode: DistributionMode,
    /// Confidence level used when none is given.
    pub confidence: ConfidenceLevel,
    /// Portfolio value used for parametric VaR when none is given.
    pub portfolio_value: f64,
    /// Return volatility over the horizon (percent).
    pub volatility: f64,
}

impl Default for VarConfig {
    fn default() -> Self {
        let grid = GridSpec::default();
        Self {
            grid_min: grid.start(),
            grid_max: grid.end(),
            grid_points: grid.points(),
            mode: DistributionMode::default(),
            confidence: ConfidenceLevel::default(),
            portfolio_value: 1_000_000.0,
            volatility: 1.0,
        }
    }
}

impl Validate for VarConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.grid_points < 2 {
            errors.push(ValidationError::with_rule(
                "var.grid_points",
                format!("At least 2 grid points required, found {}", self.grid_points),
                "min_grid_points",
            ));
        }

        if !(self.grid_min < self.grid_max) {
            errors.push(ValidationError::with_rule(
                "var.grid_max",
                format!(
                    "Grid max {} must be above grid min {}",
                    self.grid_max, self.grid_min
                ),
                "ordered_grid",
            ));
        }

        if !(self.volatility >= 0.0) {
            errors.push(ValidationError::with_rule(
                "var.volatility",
                format!("Volatility {} cannot be negative", self.volatility),
                "non_negative_volatility",
            ));
        }

        errors
    }
}

/// Interest-rate settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RatesConfig {
    /// Rate a balance sheet is priced at when none is given (percent).
    pub current_rate: f64,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self { current_rate: 4.0 }
    }
}

impl Validate for RatesConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(self.current_rate > -100.0 && self.current_rate.is_finite()) {
            errors.push(ValidationError::with_rule(
                "rates.current_rate",
                format!("Current rate {} must be above -100", self.current_rate),
                "discount_positive",
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_are_valid() {
        let config = PrimerConfig::default();
        assert!(config.is_valid());
        assert_eq!(config.credit.pd_floor, 0.5);
        assert_eq!(config.credit.pd_cap, 50.0);
        assert_eq!(config.frontier.risk_free_rate, 4.5);
        assert_eq!(config.var.grid_points, 100);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = PrimerConfig::from_toml_str("").unwrap();
        assert_eq!(config, PrimerConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = PrimerConfig::from_toml_str(
            r#"
            [frontier]
            slope = 1.2

            [var]
            mode = "fat-tailed"
            confidence = "99.9"
            "#,
        )
        .unwrap();

        assert_eq!(config.frontier.slope, 1.2);
        assert_eq!(config.frontier.risk_free_rate, 4.5);
        assert_eq!(config.var.mode, DistributionMode::FatTailed);
        assert_eq!(config.var.confidence, ConfidenceLevel::P999);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = PrimerConfig::default();
        config.credit.pd_cap = 40.0;
        let text = config.to_toml_string().unwrap();
        assert_eq!(PrimerConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = PrimerConfig::from_toml_str("[frontier]\nslop = 1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_collected() {
        let mut config = PrimerConfig::default();
        config.credit.pd_floor = 60.0;
        config.frontier.slope = 0.0;
        config.var.grid_points = 1;
        config.var.volatility = -1.0;

        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
        assert!(fields.contains(&"credit.pd_cap".to_string()));
        assert!(fields.contains(&"frontier.slope".to_string()));
        assert!(fields.contains(&"var.grid_points".to_string()));
        assert!(fields.contains(&"var.volatility".to_string()));
        assert!(matches!(
            config.validate_or_error(),
            Err(ConfigError::MultipleValidationErrors(_))
        ));
    }

    #[test]
    fn test_inverted_grid() {
        let var = VarConfig {
            grid_min: 4.0,
            grid_max: -4.0,
            ..VarConfig::default()
        };
        assert_eq!(var.validate()[0].field, "var.grid_max");
    }

    #[test]
    fn test_builds_analytics() {
        let mut config = PrimerConfig::default();
        config.credit.pd_cap = 20.0;

        let curve = config.default_curve().unwrap();
        assert_eq!(curve.probability_of_default(300.0), 20.0);
        assert_eq!(curve.probability_of_default(700.0), 5.0);

        let frontier = config.frontier().unwrap();
        assert_relative_eq!(frontier.expected_return(45.0), 10.537383539, epsilon = 1e-9);

        config.var.grid_points = 11;
        let curve = config
            .tail_curve(DistributionMode::Normal, ConfidenceLevel::P95)
            .unwrap();
        assert_eq!(curve.points.len(), 11);
    }
}
