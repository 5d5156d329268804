use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use gym_core::Stat;

use super::{Context, print_json};

pub fn run(ctx: &Context) -> Result<(), String> {
    if ctx.json {
        return print_json(&ctx.registry.gyms());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Gym", "Energy", "STR", "DEF", "SPD", "DEX"]);

    for gym in ctx.registry.iter() {
        let mut row = vec![gym.name.clone(), gym.energy_per_action.to_string()];
        row.extend(Stat::ALL.into_iter().map(|stat| {
            if gym.can_train(stat) {
                format!("{:.1}", gym.dots_for(stat))
            } else {
                "-".to_string()
            }
        }));
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!("  {} gyms", ctx.registry.len().to_string().bold());

    Ok(())
}
