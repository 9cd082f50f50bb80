//! Two stateless toy predictors for T20 match situations: a chase
//! win-probability estimate and a first-innings score projection. Both are
//! closed-form heuristics; the coefficients are empirical and preserved
//! verbatim, clamps included.

use crate::{CoreError, CoreResult};

const BALLS_PER_INNINGS: i64 = 120;
const OVERS_PER_INNINGS: f64 = 20.0;

// Chase model: raw = BASE + WICKET_WEIGHT*wickets_left - RRR_WEIGHT*(runs/balls).
const CHASE_BASE: f64 = 50.0;
const CHASE_WICKET_WEIGHT: f64 = 4.0;
const CHASE_RRR_WEIGHT: f64 = 20.0;
const CHASE_PROB_MIN: f64 = 5.0;
const CHASE_PROB_MAX: f64 = 95.0;

// Projection model: expected uptick on the current run rate, minus a small
// drag per wicket already lost.
const PROJECTION_ACCEL: f64 = 1.5;
const PROJECTION_WICKET_DRAG: f64 = 0.1;
const PROJECTION_DEFAULT: i64 = 175;

#[derive(Debug, Clone)]
pub struct ChaseInputs {
    pub batting_team: String,
    pub bowling_team: String,
    pub target: u32,
    pub current_score: u32,
    /// Overs in cricket's `N.b` notation: the fractional digit is legal
    /// balls (0-5) within the current over, not a decimal fraction.
    pub overs_completed: f64,
    pub wickets_down: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChaseOutlook {
    /// Chasing side's win probability, percent.
    pub batting_win: f64,
    /// Defending side's win probability; always `100 - batting_win` exactly.
    pub bowling_win: f64,
    pub runs_left: i64,
    pub balls_left: i64,
    pub wickets_left: u32,
}

/// Win probability for the chasing team. Validates the caller-supplied team
/// pair and numeric ranges before computing.
pub fn chase_win_probability(inputs: &ChaseInputs) -> CoreResult<ChaseOutlook> {
    if inputs.batting_team == inputs.bowling_team {
        return Err(CoreError::InvalidArgument(
            "batting and bowling teams must be different".to_string(),
        ));
    }
    check_wickets(inputs.wickets_down)?;
    let balls_bowled = balls_from_overs(inputs.overs_completed)?;

    let runs_left = i64::from(inputs.target) - i64::from(inputs.current_score);
    let balls_left = BALLS_PER_INNINGS - balls_bowled;
    let wickets_left = 10 - inputs.wickets_down;

    let batting_win = if runs_left <= 0 {
        100.0
    } else if wickets_left == 0 || balls_left <= 0 {
        0.0
    } else {
        let raw = CHASE_BASE + CHASE_WICKET_WEIGHT * f64::from(wickets_left)
            - CHASE_RRR_WEIGHT * (runs_left as f64 / balls_left as f64);
        raw.clamp(CHASE_PROB_MIN, CHASE_PROB_MAX)
    };

    Ok(ChaseOutlook {
        batting_win,
        bowling_win: 100.0 - batting_win,
        runs_left,
        balls_left,
        wickets_left,
    })
}

/// Projected first-innings total, rounded to the nearest run. At 0.0 overs
/// there is no run rate to extrapolate, so the projection falls back to a
/// fixed default of 175. The output is deliberately unclamped; extreme
/// inputs produce extreme projections.
pub fn project_first_innings(
    overs_completed: f64,
    current_runs: u32,
    wickets_down: u32,
) -> CoreResult<i64> {
    check_wickets(wickets_down)?;
    if !(0.0..=OVERS_PER_INNINGS).contains(&overs_completed) {
        return Err(CoreError::InvalidArgument(format!(
            "overs {overs_completed} outside 0.0-20.0"
        )));
    }

    if overs_completed == 0.0 {
        return Ok(PROJECTION_DEFAULT);
    }

    // The original treats overs as a plain decimal here, no balls decoding.
    let current_rr = f64::from(current_runs) / overs_completed;
    let remaining_overs = OVERS_PER_INNINGS - overs_completed;
    let projected = f64::from(current_runs)
        + remaining_overs * (current_rr + PROJECTION_ACCEL - PROJECTION_WICKET_DRAG * f64::from(wickets_down));
    Ok(projected.round() as i64)
}

/// Convert `N.b` overs notation to a legal-ball count. Rejects negative
/// overs, more than 19 complete overs, and a balls digit above 5.
fn balls_from_overs(overs: f64) -> CoreResult<i64> {
    if overs < 0.0 || overs > 19.5 {
        return Err(CoreError::InvalidArgument(format!(
            "overs {overs} outside 0.0-19.5"
        )));
    }
    let whole = overs.floor();
    let balls_digit = ((overs - whole) * 10.0).round() as i64;
    if balls_digit > 5 {
        return Err(CoreError::InvalidArgument(format!(
            "overs {overs} has an illegal balls digit (0-5 allowed)"
        )));
    }
    Ok(whole as i64 * 6 + balls_digit)
}

fn check_wickets(wickets_down: u32) -> CoreResult<()> {
    if wickets_down > 10 {
        return Err(CoreError::InvalidArgument(format!(
            "wickets down {wickets_down} outside 0-10"
        )));
    }
    Ok(())
}
