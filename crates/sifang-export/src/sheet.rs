use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

use sifang_ledger::Ledger;
use sifang_types::{Timestamp, PLAYER_COUNT};

use crate::error::ExportError;

/// One round as it appears on the sheet. Numbering starts at 1 for the
/// oldest round; the sheet lists rounds newest-first, numbers descending,
/// matching the on-screen history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundLine {
    pub number: usize,
    pub timestamp: Timestamp,
    pub scores: [i64; PLAYER_COUNT],
}

/// A point-in-time settlement sheet.
///
/// Captured once from the ledger; subsequent ledger mutations are not
/// reflected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementSheet {
    pub exported_at: Timestamp,
    pub player_names: [String; PLAYER_COUNT],
    pub totals: [i64; PLAYER_COUNT],
    pub rounds: Vec<RoundLine>,
}

impl SettlementSheet {
    /// Capture the current ledger state for export.
    pub fn capture(ledger: &Ledger) -> Self {
        let players = ledger.players();
        let player_names =
            std::array::from_fn(|seat| players[seat].name.clone());
        let totals = std::array::from_fn(|seat| players[seat].total_score);

        let total_rounds = ledger.round_count();
        let rounds = ledger
            .rounds()
            .iter()
            .enumerate()
            .map(|(i, round)| RoundLine {
                number: total_rounds - i,
                timestamp: round.timestamp,
                scores: *round.scores.as_array(),
            })
            .collect();

        Self {
            exported_at: Timestamp::now(),
            player_names,
            totals,
            rounds,
        }
    }

    /// Render the printable plain-text sheet.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Settlement Sheet");
        let _ = writeln!(
            out,
            "Exported: {}",
            format_datetime(self.exported_at)
        );
        let _ = writeln!(out);

        let _ = writeln!(out, "Totals");
        for (name, total) in self.player_names.iter().zip(self.totals) {
            let _ = writeln!(out, "  {:<8} {:>8}", name, signed(total));
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Rounds ({})", self.rounds.len());
        if self.rounds.is_empty() {
            let _ = writeln!(out, "  (no rounds recorded)");
        }
        for line in &self.rounds {
            let scores = line
                .scores
                .iter()
                .map(|&s| format!("{:>8}", signed(s)))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(
                out,
                "  Round {:<3} {}  {}",
                line.number,
                format_time(line.timestamp),
                scores,
            );
        }
        out
    }

    /// Machine-readable rendering.
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ExportError::Serialization(e.to_string()))
    }

    /// Stream the text sheet into a sink.
    pub fn write_to(&self, sink: &mut impl Write) -> Result<(), ExportError> {
        sink.write_all(self.render_text().as_bytes())?;
        Ok(())
    }

    /// Render the sheet (text, or JSON when `json` is set) into a file.
    ///
    /// The content goes to a sibling temp file first and is renamed over
    /// the target, so a failed export never leaves a partial sheet at
    /// `path`.
    pub fn write_to_file(&self, path: &Path, json: bool) -> Result<(), ExportError> {
        let rendered = if json {
            self.to_json()?
        } else {
            self.render_text()
        };

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, rendered)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

/// Positive scores carry an explicit `+`, matching the on-screen style.
fn signed(value: i64) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

fn format_datetime(ts: Timestamp) -> String {
    match Local.timestamp_millis_opt(ts.as_millis() as i64).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => ts.to_string(),
    }
}

fn format_time(ts: Timestamp) -> String {
    match Local.timestamp_millis_opt(ts.as_millis() as i64).single() {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => ts.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use sifang_ledger::{Round, RoundScores};
    use sifang_types::PlayerId;

    use super::*;

    fn ledger_with_rounds() -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .apply_round(Round::commit_now(RoundScores::new([
                8000, -2000, -2000, -4000,
            ])))
            .unwrap();
        ledger
            .apply_round(Round::commit_now(RoundScores::new([
                -300, 300, 0, 0,
            ])))
            .unwrap();
        ledger
    }

    #[test]
    fn capture_copies_totals_and_names() {
        let ledger = ledger_with_rounds();
        let sheet = SettlementSheet::capture(&ledger);

        assert_eq!(sheet.player_names[0], "東");
        assert_eq!(sheet.totals, [7700, -1700, -2000, -4000]);
        assert_eq!(sheet.rounds.len(), 2);
    }

    #[test]
    fn rounds_are_listed_newest_first_with_descending_numbers() {
        let ledger = ledger_with_rounds();
        let sheet = SettlementSheet::capture(&ledger);

        assert_eq!(sheet.rounds[0].number, 2);
        assert_eq!(sheet.rounds[0].scores, [-300, 300, 0, 0]);
        assert_eq!(sheet.rounds[1].number, 1);
        assert_eq!(sheet.rounds[1].scores, [8000, -2000, -2000, -4000]);
    }

    #[test]
    fn capture_is_point_in_time() {
        let mut ledger = ledger_with_rounds();
        let sheet = SettlementSheet::capture(&ledger);
        ledger
            .apply_round(Round::commit_now(RoundScores::new([
                100, -100, 0, 0,
            ])))
            .unwrap();

        assert_eq!(sheet.rounds.len(), 2);
        assert_eq!(sheet.totals[0], 7700);
    }

    #[test]
    fn text_sheet_shows_signed_totals_and_round_numbers() {
        let sheet = SettlementSheet::capture(&ledger_with_rounds());
        let text = sheet.render_text();

        assert!(text.contains("Settlement Sheet"));
        assert!(text.contains("+7700"));
        assert!(text.contains("-4000"));
        assert!(text.contains("Round 2"));
        assert!(text.contains("Round 1"));
    }

    #[test]
    fn empty_history_renders_placeholder() {
        let sheet = SettlementSheet::capture(&Ledger::new());
        let text = sheet.render_text();
        assert!(text.contains("Rounds (0)"));
        assert!(text.contains("no rounds recorded"));
    }

    #[test]
    fn write_to_streams_the_rendered_sheet() {
        let sheet = SettlementSheet::capture(&ledger_with_rounds());
        let mut sink = Vec::new();
        sheet.write_to(&mut sink).unwrap();
        assert_eq!(sink, sheet.render_text().as_bytes());
    }

    #[test]
    fn write_to_file_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.txt");
        let sheet = SettlementSheet::capture(&ledger_with_rounds());
        sheet.write_to_file(&path, false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), sheet.render_text());
        assert!(!dir.path().join("sheet.txt.tmp").exists());
    }

    #[test]
    fn write_to_file_renders_json_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.json");
        let sheet = SettlementSheet::capture(&ledger_with_rounds());
        sheet.write_to_file(&path, true).unwrap();

        let parsed: SettlementSheet =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, sheet);
    }

    #[test]
    fn failed_write_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("sheet.txt");
        let sheet = SettlementSheet::capture(&ledger_with_rounds());

        assert!(sheet.write_to_file(&path, false).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn json_roundtrip() {
        let sheet = SettlementSheet::capture(&ledger_with_rounds());
        let json = sheet.to_json().unwrap();
        let parsed: SettlementSheet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sheet);
    }

    #[test]
    fn renamed_players_appear_on_the_sheet() {
        let mut ledger = Ledger::new();
        ledger.rename_player(PlayerId::first(), "Alice");
        let sheet = SettlementSheet::capture(&ledger);
        assert!(sheet.render_text().contains("Alice"));
    }
}
