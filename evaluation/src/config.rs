use std::fmt::Display;
use std::str::FromStr;

macro_rules! define_config {
    ($(($field:ident: $type:ty, $name:literal, $default:expr)),* $(,)?) => {
        /// Thresholds and limits shared by the analysis features.
        #[derive(Debug, Clone, PartialEq)]
        pub struct AnalysisConfig {
            $(pub $field: $type,)*
        }

        impl Default for AnalysisConfig {
            fn default() -> Self {
                Self {
                    $($field: $default,)*
                }
            }
        }

        impl AnalysisConfig {
            pub fn update_from_option(&mut self, name: &str, value: &str) -> Result<(), String> {
                match name {
                    $($name => parse_param(name, value).map(|parsed| self.$field = parsed),)*
                    _ => Err(format!("Unknown parameter: {}", name)),
                }
            }

            /// Every parameter as `(name, current value)`.
            pub fn to_options(&self) -> Vec<(&'static str, String)> {
                vec![$(($name, self.$field.to_string()),)*]
            }
        }
    };
}

fn parse_param<T>(name: &str, value: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| format!("Parse error for {}: {}", name, e))
}

define_config!(
    // Insights
    (space_gap_percent: f64, "space_gap_percent", 10.0), // Space lead (in percentage points) that counts as significant
    (center_threshold: i32, "center_threshold", 3), // Center attack lead that counts as controlling the center
    (king_threat_threshold: u8, "king_threat_threshold", 2), // Attackers on a king before it is reported as exposed
    (material_threshold: i32, "material_threshold", 2), // Material lead (pawns) worth converting

    // Move based features
    (progression_ply_limit: usize, "progression_ply_limit", 20),
    (comparison_move_limit: usize, "comparison_move_limit", 5),
    (impact_clamp: i32, "impact_clamp", 2), // Bound for normalized impact deltas
);

impl AnalysisConfig {
    /// Applies a `name=value` assignment.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), String> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| format!("Expected name=value, got '{}'", assignment))?;
        self.update_from_option(name.trim(), value)
    }
}
