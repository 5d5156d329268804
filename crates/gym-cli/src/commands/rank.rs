use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use gym_core::Stat;
use gym_engine::RankRequest;

use super::{Context, TrainerArgs, format_number, mode, parse_stat_values, print_json};

pub fn run(
    ctx: &Context,
    trainer: &TrainerArgs,
    stats: Option<&str>,
    top: Option<usize>,
    fixed: bool,
) -> Result<(), String> {
    let profile = trainer.profile()?;
    let base_stats = match stats {
        Some(spec) => parse_stat_values(spec)?,
        None => profile.base_stats().map_err(|e| e.to_string())?,
    };

    let request = RankRequest {
        total_energy: profile.energy().map_err(|e| e.to_string())?,
        base_stats,
        happiness: profile.happiness().map_err(|e| e.to_string())?,
        bonuses: profile.bonuses,
        mode: mode(fixed),
    };
    let gyms = ctx.registry.gyms();
    let rankings = match top {
        Some(n) => ctx.engine.top_gyms(gyms, &request, n),
        None => ctx.engine.rank_gyms(gyms, &request),
    }
    .map_err(|e| e.to_string())?;

    if ctx.json {
        return print_json(&rankings);
    }

    println!(
        "  {} {} gyms for {} energy {}",
        "Ranking".bold(),
        rankings.len(),
        request.total_energy,
        format!("({})", request.mode).dimmed()
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Gym", "Actions", "STR", "DEF", "SPD", "DEX", "Best"]);
    for (i, ranking) in rankings.iter().enumerate() {
        let mut row = vec![
            (i + 1).to_string(),
            ranking.gym_name.clone(),
            ranking.actions.to_string(),
        ];
        row.extend(Stat::ALL.into_iter().map(|stat| match ranking.gains[stat] {
            Some(gain) => format_number(gain),
            None => "-".to_string(),
        }));
        row.push(
            ranking
                .best_stat
                .map(|stat| format!("{} {}", stat.short_name(), format_number(ranking.total)))
                .unwrap_or_else(|| "-".to_string()),
        );
        table.add_row(row);
    }
    println!("{table}");

    Ok(())
}
