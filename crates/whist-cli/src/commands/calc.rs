use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use reporting::json::render_json;
use reporting::ScoreReport;
use scoring_engine::Scoresheet;
use whist_core::{Config, SheetFile};

pub fn execute(config: &Config, input: &Path, json: bool) -> Result<()> {
    let report = build_report(config, input)?;
    let illegal = report.illegal_cells();
    if illegal > 0 {
        warn!(cells = illegal, "entries outside the playable range scored 0");
    }
    info!(grand_total = report.grand_total, "sheet calculated");

    if json {
        println!("{}", render_json(&report));
    } else {
        println!("{}", report.human_summary());
    }
    Ok(())
}

fn build_report(config: &Config, input: &Path) -> Result<ScoreReport> {
    let sheet_file = SheetFile::load(input)?;
    let names = if sheet_file.players.is_empty() {
        config.player_names()?
    } else {
        sheet_file.names()?
    };
    let inputs = sheet_file
        .grid()
        .with_context(|| format!("read entries from {}", input.display()))?;

    let mut sheet = Scoresheet::from_inputs(names, inputs);
    sheet.calculate();
    Ok(ScoreReport::from_sheet(&sheet))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_build_report_uses_config_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.json");
        fs::write(
            &path,
            r#"{"entries": [[{"bid": 1, "tricks": 1}], [{"bid": "one", "tricks": 1}]]}"#,
        )
        .unwrap();

        let mut config = Config::default_config();
        config.table.players[0] = "Ann".to_string();
        let report = build_report(&config, &path).unwrap();

        assert_eq!(report.players[0].name, "Ann");
        assert_eq!(report.players[0].total, 11);
        assert_eq!(report.players[1].total, 0);
        assert_eq!(report.grand_total, 11);
        assert_eq!(report.illegal_cells(), 1);
    }

    #[test]
    fn test_build_report_rejects_bad_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.json");
        fs::write(&path, r#"{"players": ["a", "b"]}"#).unwrap();
        assert!(build_report(&Config::default_config(), &path).is_err());
    }
}
