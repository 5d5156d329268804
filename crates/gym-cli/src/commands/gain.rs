use colored::Colorize;
use serde::Serialize;

use super::{Context, StatArgs, TrainerArgs, format_number, print_json, training_input};

#[derive(Serialize)]
struct GainReport<'a> {
    stat: gym_core::Stat,
    gym: &'a str,
    effective_stat: f64,
    gain: f64,
}

pub fn run(ctx: &Context, stat_args: &StatArgs, trainer: &TrainerArgs) -> Result<(), String> {
    let input = training_input(ctx, stat_args, trainer)?;
    let gain = ctx
        .engine
        .compute_single_action_gain(&input)
        .map_err(|e| e.to_string())?;

    if ctx.json {
        return print_json(&GainReport {
            stat: input.stat,
            gym: &input.gym.name,
            effective_stat: ctx.engine.effective_stat(input.base_stat_value),
            gain,
        });
    }

    println!(
        "  {} {} at {} {}",
        "Single action".bold(),
        input.stat,
        input.gym.name,
        format!("(happiness {})", input.happiness).dimmed()
    );
    if !input.gym.can_train(input.stat) {
        println!("  {}", format!("{} cannot train {}", input.gym.name, input.stat).yellow());
    }
    println!("  Gain: {}", format_number(gain).green().bold());

    Ok(())
}
