use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use gym_core::Stat;
use gym_engine::AllocationRequest;

use super::{Context, TrainerArgs, format_number, mode, parse_stat_values, print_json};

pub fn run(
    ctx: &Context,
    trainer: &TrainerArgs,
    split: &str,
    stats: Option<&str>,
    fixed: bool,
) -> Result<(), String> {
    let profile = trainer.profile()?;
    let gym = profile
        .selected_gym(&ctx.registry)
        .map_err(|e| e.to_string())?;
    let base_stats = match stats {
        Some(spec) => parse_stat_values(spec)?,
        None => profile.base_stats().map_err(|e| e.to_string())?,
    };
    let percentages = parse_stat_values(split)?;

    let request = AllocationRequest {
        total_energy: profile.energy().map_err(|e| e.to_string())?,
        percentages,
        gym,
        base_stats,
        happiness: profile.happiness().map_err(|e| e.to_string())?,
        bonuses: profile.bonuses,
        mode: mode(fixed),
    };
    let allocation = ctx
        .engine
        .compute_energy_allocation(&request)
        .map_err(|e| e.to_string())?;

    if ctx.json {
        return print_json(&allocation);
    }

    println!(
        "  {} {} energy at {} {}",
        "Allocating".bold(),
        request.total_energy,
        gym.name,
        format!("({})", request.mode).dimmed()
    );

    let total_percent = percentages.sum();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stat", "Share", "Energy", "Actions", "Gain"]);
    for stat in Stat::ALL {
        let share = if total_percent > 0.0 {
            percentages[stat] / total_percent * 100.0
        } else {
            0.0
        };
        table.add_row(vec![
            stat.to_string(),
            format!("{share:.1}%"),
            allocation.energy[stat].to_string(),
            allocation.actions[stat].to_string(),
            format_number(allocation.gains[stat]),
        ]);
    }
    println!("{table}");

    println!("  Total gain: {}", format_number(allocation.total_gain).green().bold());
    if allocation.unused_energy > 0 {
        println!(
            "  {}",
            format!("{} energy left unused", allocation.unused_energy).dimmed()
        );
    }

    Ok(())
}
