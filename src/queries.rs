//! Pure aggregation over the active era's in-memory data: leaderboards,
//! team head-to-head tallies, and batsman-vs-bowler matchup metrics.

use serde::Serialize;

use crate::datasets::{MatchRecord, Player};
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardRow {
    pub player: String,
    pub value: u32,
}

/// Top `n` career run scorers, descending. Players without a batting side
/// (pure bowlers) are excluded; ties keep dataset order.
pub fn top_run_scorers(players: &[Player], n: usize) -> Vec<LeaderboardRow> {
    top_by(players, n, |p| p.stats.batting().map(|b| b.runs))
}

/// Top `n` career wicket takers, descending, same ordering rules.
pub fn top_wicket_takers(players: &[Player], n: usize) -> Vec<LeaderboardRow> {
    top_by(players, n, |p| p.stats.bowling().map(|b| b.wickets))
}

fn top_by(
    players: &[Player],
    n: usize,
    metric: impl Fn(&Player) -> Option<u32>,
) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = players
        .iter()
        .filter_map(|p| {
            metric(p).map(|value| LeaderboardRow {
                player: p.name.clone(),
                value,
            })
        })
        .collect();
    // Stable sort keeps dataset order for equal values.
    rows.sort_by(|a, b| b.value.cmp(&a.value));
    rows.truncate(n);
    rows
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadToHead {
    pub total_matches: u32,
    pub wins_a: u32,
    pub wins_b: u32,
}

/// Win tally between two teams over the era's match list. A match counts
/// when its unordered team pair is exactly `{team_a, team_b}`.
pub fn head_to_head(matches: &[MatchRecord], team_a: &str, team_b: &str) -> CoreResult<HeadToHead> {
    if team_a == team_b {
        return Err(CoreError::InvalidArgument(
            "head-to-head needs two different teams".to_string(),
        ));
    }

    let mut out = HeadToHead {
        total_matches: 0,
        wins_a: 0,
        wins_b: 0,
    };
    for m in matches {
        let pair_matches = (m.team1 == team_a && m.team2 == team_b)
            || (m.team1 == team_b && m.team2 == team_a);
        if !pair_matches {
            continue;
        }
        out.total_matches += 1;
        if m.winner == team_a {
            out.wins_a += 1;
        } else if m.winner == team_b {
            out.wins_b += 1;
        }
    }
    Ok(out)
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchupReport {
    pub runs: u32,
    pub balls: u32,
    pub dismissals: u32,
    pub strike_rate: f64,
    /// `None` means the batsman was never dismissed by this bowler, so the
    /// average is undefined ("not out").
    pub average: Option<f64>,
}

/// Derived metrics for one batsman against one named bowler, from the
/// batsman's recorded h2h tally.
pub fn player_vs_player(
    players: &[Player],
    batsman: &str,
    bowler: &str,
) -> CoreResult<MatchupReport> {
    let player = players
        .iter()
        .find(|p| p.name == batsman)
        .ok_or_else(|| CoreError::NotFound(format!("unknown batsman '{batsman}'")))?;
    let entry = player.h2h_against(bowler).ok_or_else(|| {
        CoreError::NotFound(format!("no h2h record for {batsman} vs {bowler}"))
    })?;

    let strike_rate = if entry.balls > 0 {
        f64::from(entry.runs) / f64::from(entry.balls) * 100.0
    } else {
        0.0
    };
    let average = if entry.dismissals > 0 {
        Some(f64::from(entry.runs) / f64::from(entry.dismissals))
    } else {
        None
    };

    Ok(MatchupReport {
        runs: entry.runs,
        balls: entry.balls,
        dismissals: entry.dismissals,
        strike_rate,
        average,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunBreakdown {
    pub dots: i64,
    pub singles: i64,
    pub fours: i64,
    pub sixes: i64,
}

/// Deterministic decomposition of a run tally into boundary/single/dot
/// buckets for display. The split is declared arbitrary, not derived from
/// ball-by-ball data; `singles` can go negative for some run counts and is
/// reported as-is. Callers must not treat the output as authoritative.
pub fn simulated_run_breakdown(runs: u32, balls: u32) -> RunBreakdown {
    let runs = i64::from(runs);
    let fours = runs / 6;
    let sixes = runs / 10;
    let singles = runs - fours * 4 - sixes * 6;
    let dots = (i64::from(balls) - fours - sixes - singles).max(0);
    RunBreakdown {
        dots,
        singles,
        fours,
        sixes,
    }
}
