use std::error::Error;
use std::fs;
use std::path::Path;

use evaluation::{
    compare_moves, evaluate_batch, evaluate_fen, generate_insights, training_recommendations,
    AnalysisConfig,
};
use log::info;
use serde_json::json;

pub fn eval(fen: &str, with_insights: bool, config: &AnalysisConfig) -> Result<(), Box<dyn Error>> {
    let metrics = evaluate_fen(fen)?;

    let output = if with_insights {
        json!({
            "metrics": metrics,
            "insights": generate_insights(&metrics, config),
            "training_recommendations": training_recommendations(&metrics, config),
        })
    } else {
        serde_json::to_value(&metrics)?
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn compare(fen: &str, moves: &[String], config: &AnalysisConfig) -> Result<(), Box<dyn Error>> {
    let moves: Vec<&str> = moves.iter().map(String::as_str).collect();
    let comparisons = compare_moves(fen, &moves, config)?;
    info!("Compared {} of {} candidate moves", comparisons.len(), moves.len());

    println!("{}", serde_json::to_string_pretty(&comparisons)?);
    Ok(())
}

pub fn progression(fen: &str, moves: &[String], limit: usize) -> Result<(), Box<dyn Error>> {
    let moves: Vec<&str> = moves.iter().map(String::as_str).collect();
    let points = evaluation::progression(fen, &moves, limit)?;

    println!("{}", serde_json::to_string_pretty(&points)?);
    Ok(())
}

pub fn batch(file: &Path) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(file)?;
    let fens = read_fens(&text);
    info!("Evaluating {} positions from {}", fens.len(), file.display());

    for (fen, result) in fens.iter().zip(evaluate_batch(&fens)) {
        let line = match result {
            Ok(metrics) => json!({ "fen": fen, "metrics": metrics }),
            Err(e) => json!({ "fen": fen, "error": e.to_string() }),
        };
        println!("{}", line);
    }
    Ok(())
}

/// Non-empty lines that are not `#` comments.
fn read_fens(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fens_skips_comments() {
        let text = "# openings\nrnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1\n\n  4k3/8/8/8/8/8/8/4K3 w - - 0 1  \n";
        assert_eq!(
            read_fens(text),
            vec![
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
                "4k3/8/8/8/8/8/8/4K3 w - - 0 1",
            ]
        );
    }
}
