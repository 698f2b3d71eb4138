use anyhow::Result;

use whist_core::{RoundInfo, ROUND_TABLE};

pub fn execute() -> Result<()> {
    println!("{}", render_table(&ROUND_TABLE));
    Ok(())
}

fn render_table(table: &[RoundInfo]) -> String {
    let mut lines = vec![format!(
        "{:<6} {:>6} {:<10} {:>7}",
        "Round", "Scored", "Trump", "Leader"
    )];
    for info in table {
        let trump = info
            .trump
            .map(|trump| trump.to_string())
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!(
            "{:<6} {:>6} {:<10} {:>7}",
            info.label,
            info.effective_round,
            trump,
            info.leader()
        ));
    }
    lines.join("\n")
}
