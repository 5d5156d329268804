//! Multi-action training sessions.
//!
//! A dynamic session replays the single-action formula once per action,
//! draining happiness after each one. A static session multiplies one
//! action's gain by the action count and leaves happiness untouched.

use std::str::FromStr;

use gym_core::{GymError, TrainingInput};
use serde::{Deserialize, Serialize};

use crate::config::{EngineConfig, StatProgression};
use crate::gain::GainContext;

/// Upper bound on trace capacity reserved up front.
const TRACE_PREALLOCATION: usize = 4096;

/// How a multi-action gain is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GainMode {
    /// One action's gain times the action count, happiness unchanged.
    Static,
    /// Action-by-action simulation with happiness decay.
    #[default]
    Dynamic,
}

impl std::fmt::Display for GainMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Dynamic => write!(f, "dynamic"),
        }
    }
}

impl FromStr for GainMode {
    type Err = GymError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "dynamic" => Ok(Self::Dynamic),
            other => Err(GymError::invalid_input(
                "mode",
                format!("must be 'static' or 'dynamic', got '{other}'"),
            )),
        }
    }
}

/// Result of a multi-action session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// Sum of all action gains.
    pub total_gain: f64,
    /// Happiness at the start of the session.
    pub starting_happiness: u32,
    /// Happiness left afterwards. Static sessions report the starting value.
    pub final_happiness: u32,
    /// Actions performed.
    pub actions: u32,
    /// How the gain was computed.
    pub mode: GainMode,
}

impl std::fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2} gained over {} actions (happiness {} -> {})",
            self.total_gain, self.actions, self.starting_happiness, self.final_happiness
        )
    }
}

/// One step of a dynamic session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// 1-based action number.
    pub index: u32,
    /// Stat value the action trained from.
    pub stat_value: f64,
    /// Happiness before the action.
    pub happiness_before: u32,
    /// Gain of this action.
    pub gain: f64,
    /// Happiness after the action.
    pub happiness_after: u32,
}

/// Mutable state of one dynamic run. Never outlives the call that owns it.
#[derive(Debug)]
struct SessionState {
    remaining_happiness: u32,
    accumulated_gain: f64,
    actions_taken: u32,
    stat_value: f64,
}

/// Happiness lost per action: `round(0.1 * energy * factor)`, clamped to the `u32` range.
pub fn happiness_loss(energy_per_action: u32, factor: f64) -> u32 {
    (0.1 * f64::from(energy_per_action) * factor)
        .round()
        .clamp(0.0, f64::from(u32::MAX)) as u32
}

/// Run `actions` actions from `base_stat_value` and `happiness`.
///
/// Every requested action executes, even once happiness is exhausted.
pub fn simulate_session(
    ctx: &GainContext<'_>,
    base_stat_value: f64,
    happiness: u32,
    actions: u32,
) -> SessionOutcome {
    run_dynamic(ctx, base_stat_value, happiness, actions, |_| {})
}

/// Like [`simulate_session`], also returning every action taken.
pub fn simulate_with_trace(
    ctx: &GainContext<'_>,
    base_stat_value: f64,
    happiness: u32,
    actions: u32,
) -> (SessionOutcome, Vec<ActionRecord>) {
    let mut trace = Vec::with_capacity((actions as usize).min(TRACE_PREALLOCATION));
    let outcome = run_dynamic(ctx, base_stat_value, happiness, actions, |record| {
        trace.push(record)
    });
    (outcome, trace)
}

/// One action's gain times `actions`, with happiness held constant.
pub fn static_session(
    ctx: &GainContext<'_>,
    base_stat_value: f64,
    happiness: u32,
    actions: u32,
) -> SessionOutcome {
    let total_gain = if actions == 0 {
        0.0
    } else {
        ctx.gain(base_stat_value, happiness) * f64::from(actions)
    };
    SessionOutcome {
        total_gain,
        starting_happiness: happiness,
        final_happiness: happiness,
        actions,
        mode: GainMode::Static,
    }
}

/// Run a session in the requested mode.
pub fn run_session(
    ctx: &GainContext<'_>,
    base_stat_value: f64,
    happiness: u32,
    actions: u32,
    mode: GainMode,
) -> SessionOutcome {
    match mode {
        GainMode::Static => static_session(ctx, base_stat_value, happiness, actions),
        GainMode::Dynamic => simulate_session(ctx, base_stat_value, happiness, actions),
    }
}

/// Gain of `actions` actions for `input`.
pub fn multi_action_gain(
    input: &TrainingInput,
    actions: u32,
    mode: GainMode,
    config: &EngineConfig,
) -> SessionOutcome {
    let ctx = GainContext::from_input(input, config);
    run_session(&ctx, input.base_stat_value, input.happiness, actions, mode)
}

fn run_dynamic(
    ctx: &GainContext<'_>,
    base_stat_value: f64,
    happiness: u32,
    actions: u32,
    mut on_action: impl FnMut(ActionRecord),
) -> SessionOutcome {
    let loss = happiness_loss(ctx.gym.energy_per_action, ctx.config.happy_loss_factor);
    let compounding = ctx.config.stat_progression == StatProgression::Compounding;

    let mut state = SessionState {
        remaining_happiness: happiness,
        accumulated_gain: 0.0,
        actions_taken: 0,
        stat_value: base_stat_value,
    };

    while state.actions_taken < actions {
        let happiness_before = state.remaining_happiness;
        let gain = ctx.gain(state.stat_value, happiness_before);

        state.accumulated_gain += gain;
        state.remaining_happiness = happiness_before.saturating_sub(loss);
        state.actions_taken += 1;

        let record = ActionRecord {
            index: state.actions_taken,
            stat_value: state.stat_value,
            happiness_before,
            gain,
            happiness_after: state.remaining_happiness,
        };
        tracing::trace!(
            action = record.index,
            happiness = happiness_before,
            gain,
            "training action"
        );
        on_action(record);

        if compounding {
            state.stat_value += gain;
        }
    }

    SessionOutcome {
        total_gain: state.accumulated_gain,
        starting_happiness: happiness,
        final_happiness: state.remaining_happiness,
        actions: state.actions_taken,
        mode: GainMode::Dynamic,
    }
}
