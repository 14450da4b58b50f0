//! CSV export of the win-rate curve
//!
//! Writes one row per finished game with the result and the running
//! win-rate for seat X, ready for plotting.

use std::path::Path;

use serde::Serialize;

use crate::{Result, simulation::stats::SimulationStats};

/// A single row of the win-rate curve CSV
#[derive(Debug, Clone, Serialize)]
struct CurveRecord {
    game: usize,
    result: String,
    win_rate: f64,
}

/// Exporter for win-rate curve CSV files
pub struct StatsCsvExporter;

impl StatsCsvExporter {
    /// Write the per-game results and running win-rate curve to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or a row cannot be
    /// written.
    pub fn export<P: AsRef<Path>>(stats: &SimulationStats, path: P) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;

        let curve = stats.win_rate_curve();
        for (game, (result, win_rate)) in stats.results().iter().zip(curve).enumerate() {
            writer.serialize(CurveRecord {
                game,
                result: format!("{result:?}"),
                win_rate,
            })?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::stats::GameResult;

    #[test]
    fn test_export_writes_one_row_per_game() {
        let mut stats = SimulationStats::new();
        stats.record(GameResult::WinX);
        stats.record(GameResult::Draw);
        stats.record(GameResult::WinO);

        let file = tempfile::NamedTempFile::new().unwrap();
        StatsCsvExporter::export(&stats, file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4, "header plus one row per game");
        assert_eq!(lines[0], "game,result,win_rate");
        assert_eq!(lines[1], "0,WinX,1.0");
        assert_eq!(lines[2], "1,Draw,0.75");
        assert_eq!(lines[3], "2,WinO,0.5");
    }

    #[test]
    fn test_export_empty_stats_writes_header_only() {
        let stats = SimulationStats::new();
        let file = tempfile::NamedTempFile::new().unwrap();
        StatsCsvExporter::export(&stats, file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.is_empty() || contents.trim() == "game,result,win_rate");
    }
}
