//! Plain-language observations derived from a [`SpatialMetrics`] value.

use cozy_chess::Color;
use serde::Serialize;

use crate::{AnalysisConfig, SpatialMetrics};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub space_control: Vec<String>,
    pub tactical_threats: Vec<String>,
    pub positional_factors: Vec<String>,
    pub strategic_recommendations: Vec<String>,
}

pub fn generate_insights(metrics: &SpatialMetrics, config: &AnalysisConfig) -> Insights {
    let mut insights = Insights::default();

    let territory = &metrics.space_control.territory;
    let white_space = territory.white_space_percentage();
    let black_space = territory.black_space_percentage();
    let space_line = if white_space > black_space + config.space_gap_percent {
        "White holds a clear space advantage and controls the key squares."
    } else if black_space > white_space + config.space_gap_percent {
        "Black holds a clear space advantage and is cramping White's pieces."
    } else {
        "Space is shared fairly evenly between the two sides."
    };
    insights.space_control.push(space_line.to_string());

    let center_advantage = metrics.center_control.center_advantage;
    if center_advantage > config.center_threshold {
        insights
            .positional_factors
            .push("White controls the center, which helps the pieces work together.".to_string());
    } else if center_advantage < -config.center_threshold {
        insights
            .positional_factors
            .push("Black controls the center and limits White's options.".to_string());
    }

    let hanging = metrics.tactical_threats.hanging_pieces.len();
    if hanging > 0 {
        insights.tactical_threats.push(format!(
            "{} hanging piece{} can be attacked right away.",
            hanging,
            if hanging == 1 { "" } else { "s" }
        ));
    }

    for color in [Color::White, Color::Black] {
        if metrics.king_safety[color].threats > config.king_threat_threshold {
            insights
                .tactical_threats
                .push(format!("The {} king is under heavy fire and needs attention.", side_name(color)));
        }
    }

    let recommendation = if insights.tactical_threats.is_empty() {
        "Work on piece coordination and long-term positional gains."
    } else {
        "Calculate the tactics first, there are immediate threats on the board."
    };
    insights.strategic_recommendations.push(recommendation.to_string());

    insights
}

/// Study suggestions keyed off the material and center balance.
pub fn training_recommendations(metrics: &SpatialMetrics, config: &AnalysisConfig) -> Vec<String> {
    let mut recommendations = Vec::new();

    let material = metrics.material_balance.difference;
    if material.abs() > config.material_threshold {
        recommendations.push(if material > 0 {
            "Practice converting a material advantage into a win.".to_string()
        } else {
            "Study defensive technique for positions where material is down.".to_string()
        });
    }

    if metrics.center_control.center_advantage.abs() > config.center_threshold {
        recommendations.push("Central control decides this kind of position, focus on it.".to_string());
    }

    if recommendations.is_empty() {
        recommendations.push("Keep practicing a variety of position types.".to_string());
    }
    recommendations
}

fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}
