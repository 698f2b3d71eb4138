use crate::ScoreReport;

pub fn render_json(report: &ScoreReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}
