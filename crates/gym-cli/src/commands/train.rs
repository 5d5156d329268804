use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use gym_engine::{ActionRecord, GainMode, SessionOutcome};

use super::{Context, StatArgs, TrainerArgs, format_number, mode, print_json, training_input};

#[derive(Serialize)]
struct TrainReport<'a> {
    stat: gym_core::Stat,
    gym: &'a str,
    #[serde(flatten)]
    outcome: SessionOutcome,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    trace: Vec<ActionRecord>,
}

pub fn run(
    ctx: &Context,
    stat_args: &StatArgs,
    trainer: &TrainerArgs,
    actions: Option<u32>,
    fixed: bool,
    verbose: bool,
) -> Result<(), String> {
    let input = training_input(ctx, stat_args, trainer)?;
    let actions = actions.unwrap_or_else(|| input.affordable_actions());
    let mode = mode(fixed);

    let (outcome, trace) = if verbose && mode == GainMode::Dynamic {
        ctx.engine
            .trace_session(&input, actions)
            .map_err(|e| e.to_string())?
    } else {
        let outcome = ctx
            .engine
            .compute_multi_action_gain(&input, actions, mode)
            .map_err(|e| e.to_string())?;
        (outcome, Vec::new())
    };

    if ctx.json {
        return print_json(&TrainReport {
            stat: input.stat,
            gym: &input.gym.name,
            outcome,
            trace,
        });
    }

    println!(
        "  {} {} at {} {}",
        "Training".bold(),
        input.stat,
        input.gym.name,
        format!("({actions} actions, {mode})").dimmed()
    );

    if !trace.is_empty() {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["#", "Happy", "Gain", "Happy after"]);
        for record in &trace {
            table.add_row(vec![
                record.index.to_string(),
                record.happiness_before.to_string(),
                format_number(record.gain),
                record.happiness_after.to_string(),
            ]);
        }
        println!("{table}");
    }

    println!("  Total gain: {}", format_number(outcome.total_gain).green().bold());
    println!(
        "  Happiness: {} -> {}",
        outcome.starting_happiness, outcome.final_happiness
    );

    Ok(())
}
