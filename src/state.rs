//! Terminal app state: active-era registry, screen/selection cursors,
//! predictor input fields, and the footer log ring. Everything here is
//! UI-side bookkeeping; the analytics themselves live in `queries` and
//! `predict`.

use std::collections::VecDeque;
use std::env;

use crate::datasets::{EraDataset, EraRegistry, Player};
use crate::predict::{self, ChaseInputs, ChaseOutlook};
use crate::CoreResult;

const MAX_LOG_LINES: usize = 200;
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Overview,
    Players,
    Predictor,
    Teams,
    Matchup,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Overview => "Overview",
            Screen::Players => "Player Analysis",
            Screen::Predictor => "Match Predictor",
            Screen::Teams => "Team Strategy",
            Screen::Matchup => "Player vs Player",
        }
    }
}

/// Which predictor input currently has focus; Tab cycles through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictorField {
    ChaseTarget,
    ChaseScore,
    ChaseOvers,
    ChaseWickets,
    ProjOvers,
    ProjRuns,
    ProjWickets,
}

impl PredictorField {
    pub fn next(self) -> Self {
        match self {
            PredictorField::ChaseTarget => PredictorField::ChaseScore,
            PredictorField::ChaseScore => PredictorField::ChaseOvers,
            PredictorField::ChaseOvers => PredictorField::ChaseWickets,
            PredictorField::ChaseWickets => PredictorField::ProjOvers,
            PredictorField::ProjOvers => PredictorField::ProjRuns,
            PredictorField::ProjRuns => PredictorField::ProjWickets,
            PredictorField::ProjWickets => PredictorField::ChaseTarget,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PredictorField::ChaseTarget => "Target",
            PredictorField::ChaseScore => "Score",
            PredictorField::ChaseOvers => "Overs",
            PredictorField::ChaseWickets => "Wickets",
            PredictorField::ProjOvers => "Overs",
            PredictorField::ProjRuns => "Runs",
            PredictorField::ProjWickets => "Wickets",
        }
    }
}

/// Chase predictor inputs, with overs held as a legal-ball count so +/-
/// steps move one ball at a time and never produce an illegal `.6`.
#[derive(Debug, Clone)]
pub struct ChaseForm {
    pub batting_team_idx: usize,
    pub bowling_team_idx: usize,
    pub target: u32,
    pub score: u32,
    pub balls: u32,
    pub wickets: u32,
}

impl ChaseForm {
    pub fn overs(&self) -> f64 {
        f64::from(self.balls / 6) + f64::from(self.balls % 6) / 10.0
    }
}

#[derive(Debug, Clone)]
pub struct ProjectionForm {
    /// Plain decimal overs, stepped by 0.1 like the source dashboard.
    pub overs_tenths: u32,
    pub runs: u32,
    pub wickets: u32,
}

impl ProjectionForm {
    pub fn overs(&self) -> f64 {
        f64::from(self.overs_tenths) / 10.0
    }
}

pub struct AppState {
    pub registry: EraRegistry,
    pub screen: Screen,
    pub top_n: usize,
    pub help_overlay: bool,
    pub logs: VecDeque<String>,

    // Players screen.
    pub batsman_idx: usize,
    pub bowler_idx: usize,
    // Teams screen.
    pub team_a_idx: usize,
    pub team_b_idx: usize,
    // Matchup screen.
    pub matchup_batsman_idx: usize,
    pub matchup_bowler_idx: usize,
    // Predictor screen.
    pub predictor_focus: PredictorField,
    pub chase: ChaseForm,
    pub projection: ProjectionForm,
}

impl AppState {
    pub fn new() -> Self {
        let mut registry = EraRegistry::new();
        let mut logs = VecDeque::new();
        if let Ok(key) = env::var("CRICVISION_ERA") {
            match registry.set_active(&key) {
                Ok(()) => logs.push_back(format!("[INFO] Era '{key}' selected from env")),
                Err(err) => logs.push_back(format!("[WARN] CRICVISION_ERA ignored: {err}")),
            }
        }
        let top_n = env::var("CRICVISION_TOP_N")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_TOP_N)
            .max(1);

        Self {
            registry,
            screen: Screen::Overview,
            top_n,
            help_overlay: false,
            logs,
            batsman_idx: 0,
            bowler_idx: 0,
            team_a_idx: 0,
            team_b_idx: 1,
            matchup_batsman_idx: 0,
            matchup_bowler_idx: 0,
            predictor_focus: PredictorField::ChaseTarget,
            // Defaults mirror the predictor's worked example.
            chase: ChaseForm {
                batting_team_idx: 0,
                bowling_team_idx: 1,
                target: 180,
                score: 90,
                balls: 60,
                wickets: 3,
            },
            projection: ProjectionForm {
                overs_tenths: 80,
                runs: 64,
                wickets: 1,
            },
        }
    }

    pub fn era(&self) -> &'static EraDataset {
        self.registry.active()
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        self.logs.push_back(line.into());
        while self.logs.len() > MAX_LOG_LINES {
            self.logs.pop_front();
        }
    }

    /// Switch to the next era and reset every per-era cursor.
    pub fn cycle_era(&mut self) {
        self.registry.cycle();
        self.batsman_idx = 0;
        self.bowler_idx = 0;
        self.team_a_idx = 0;
        self.team_b_idx = 1;
        self.matchup_batsman_idx = 0;
        self.matchup_bowler_idx = 0;
        self.chase.batting_team_idx = 0;
        self.chase.bowling_team_idx = 1;
        let name = self.era().name;
        self.push_log(format!("[INFO] Switched to {name}"));
    }

    pub fn batsmen(&self) -> Vec<&'static Player> {
        self.era()
            .players
            .iter()
            .filter(|p| p.stats.batting().is_some())
            .collect()
    }

    pub fn bowlers(&self) -> Vec<&'static Player> {
        self.era()
            .players
            .iter()
            .filter(|p| p.stats.bowling().is_some())
            .collect()
    }

    /// Batsmen with at least one recorded h2h tally; the matchup screen only
    /// offers these.
    pub fn matchup_batsmen(&self) -> Vec<&'static Player> {
        self.era()
            .players
            .iter()
            .filter(|p| p.stats.batting().is_some() && !p.h2h.is_empty())
            .collect()
    }

    pub fn selected_batsman(&self) -> Option<&'static Player> {
        self.batsmen().get(self.batsman_idx).copied()
    }

    pub fn selected_bowler(&self) -> Option<&'static Player> {
        self.bowlers().get(self.bowler_idx).copied()
    }

    pub fn selected_matchup_batsman(&self) -> Option<&'static Player> {
        self.matchup_batsmen().get(self.matchup_batsman_idx).copied()
    }

    pub fn selected_matchup_bowler(&self) -> Option<&'static str> {
        let batsman = self.selected_matchup_batsman()?;
        batsman
            .h2h
            .get(self.matchup_bowler_idx)
            .map(|e| e.bowler.as_str())
    }

    pub fn team_name(&self, idx: usize) -> Option<&'static str> {
        self.era().teams.get(idx).map(String::as_str)
    }

    pub fn chase_outlook(&self) -> CoreResult<ChaseOutlook> {
        let teams = &self.era().teams;
        let batting = teams
            .get(self.chase.batting_team_idx)
            .cloned()
            .unwrap_or_default();
        let bowling = teams
            .get(self.chase.bowling_team_idx)
            .cloned()
            .unwrap_or_default();
        predict::chase_win_probability(&ChaseInputs {
            batting_team: batting,
            bowling_team: bowling,
            target: self.chase.target,
            current_score: self.chase.score,
            overs_completed: self.chase.overs(),
            wickets_down: self.chase.wickets,
        })
    }

    pub fn projection(&self) -> CoreResult<i64> {
        predict::project_first_innings(
            self.projection.overs(),
            self.projection.runs,
            self.projection.wickets,
        )
    }

    /// Move the primary selection cursor on the current screen.
    pub fn select_next(&mut self) {
        match self.screen {
            Screen::Players => {
                self.batsman_idx = wrap_next(self.batsman_idx, self.batsmen().len());
            }
            Screen::Teams => {
                self.team_a_idx = wrap_next(self.team_a_idx, self.era().teams.len());
            }
            Screen::Matchup => {
                self.matchup_batsman_idx =
                    wrap_next(self.matchup_batsman_idx, self.matchup_batsmen().len());
                self.matchup_bowler_idx = 0;
            }
            _ => {}
        }
    }

    pub fn select_prev(&mut self) {
        match self.screen {
            Screen::Players => {
                self.batsman_idx = wrap_prev(self.batsman_idx, self.batsmen().len());
            }
            Screen::Teams => {
                self.team_a_idx = wrap_prev(self.team_a_idx, self.era().teams.len());
            }
            Screen::Matchup => {
                self.matchup_batsman_idx =
                    wrap_prev(self.matchup_batsman_idx, self.matchup_batsmen().len());
                self.matchup_bowler_idx = 0;
            }
            _ => {}
        }
    }

    /// Move the secondary cursor (bowler / second team / matchup bowler).
    pub fn select_next_secondary(&mut self) {
        match self.screen {
            Screen::Players => {
                self.bowler_idx = wrap_next(self.bowler_idx, self.bowlers().len());
            }
            Screen::Teams => {
                self.team_b_idx = wrap_next(self.team_b_idx, self.era().teams.len());
            }
            Screen::Matchup => {
                let len = self
                    .selected_matchup_batsman()
                    .map(|p| p.h2h.len())
                    .unwrap_or(0);
                self.matchup_bowler_idx = wrap_next(self.matchup_bowler_idx, len);
            }
            _ => {}
        }
    }

    pub fn adjust_focused_field(&mut self, up: bool) {
        match self.predictor_focus {
            PredictorField::ChaseTarget => {
                self.chase.target = step_u32(self.chase.target, up, 1, 400);
            }
            PredictorField::ChaseScore => {
                self.chase.score = step_u32(self.chase.score, up, 0, 400);
            }
            PredictorField::ChaseOvers => {
                // One legal ball per step, capped at 19.5 overs.
                self.chase.balls = step_u32(self.chase.balls, up, 0, 119);
            }
            PredictorField::ChaseWickets => {
                self.chase.wickets = step_u32(self.chase.wickets, up, 0, 10);
            }
            PredictorField::ProjOvers => {
                self.projection.overs_tenths =
                    step_u32(self.projection.overs_tenths, up, 0, 195);
            }
            PredictorField::ProjRuns => {
                self.projection.runs = step_u32(self.projection.runs, up, 0, 400);
            }
            PredictorField::ProjWickets => {
                self.projection.wickets = step_u32(self.projection.wickets, up, 0, 10);
            }
        }
    }

    pub fn cycle_chase_batting_team(&mut self) {
        self.chase.batting_team_idx =
            wrap_next(self.chase.batting_team_idx, self.era().teams.len());
    }

    pub fn cycle_chase_bowling_team(&mut self) {
        self.chase.bowling_team_idx =
            wrap_next(self.chase.bowling_team_idx, self.era().teams.len());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap_next(idx: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (idx + 1) % len }
}

fn wrap_prev(idx: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (idx + len - 1) % len
    }
}

fn step_u32(value: u32, up: bool, min: u32, max: u32) -> u32 {
    if up {
        value.saturating_add(1).min(max)
    } else {
        value.saturating_sub(1).max(min)
    }
}
