use cricvision_terminal::datasets::{
    BattingStats, BowlingStats, H2hEntry, MatchRecord, Player, PlayerStats, ERA_CATALOG,
};
use cricvision_terminal::queries::{
    head_to_head, player_vs_player, simulated_run_breakdown, top_run_scorers, top_wicket_takers,
};
use cricvision_terminal::CoreError;

fn stub_batsman(name: &str, runs: u32) -> Player {
    Player {
        name: name.to_string(),
        seasons: Vec::new(),
        stats: PlayerStats::Batting(BattingStats {
            runs,
            average: 30.0,
            strike_rate: 130.0,
            dismissals: 10,
        }),
        h2h: Vec::new(),
    }
}

fn stub_bowler(name: &str, wickets: u32) -> Player {
    Player {
        name: name.to_string(),
        seasons: Vec::new(),
        stats: PlayerStats::Bowling(BowlingStats {
            wickets,
            economy: 7.5,
            average: 22.0,
            overs: 400.0,
        }),
        h2h: Vec::new(),
    }
}

fn stub_match(team1: &str, team2: &str, winner: &str) -> MatchRecord {
    MatchRecord {
        team1: team1.to_string(),
        team2: team2.to_string(),
        winner: winner.to_string(),
        venue: "Test Ground".to_string(),
    }
}

#[test]
fn top_run_scorers_sorted_descending() {
    let players = vec![stub_batsman("B", 50), stub_batsman("A", 100)];
    let rows = top_run_scorers(&players, 5);
    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].player.as_str(), rows[0].value), ("A", 100));
    assert_eq!((rows[1].player.as_str(), rows[1].value), ("B", 50));
}

#[test]
fn leaderboards_exclude_players_without_the_stat() {
    let players = vec![
        stub_batsman("Bat", 500),
        stub_bowler("Bowl", 120),
    ];
    let runs = top_run_scorers(&players, 5);
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].player, "Bat");

    let wickets = top_wicket_takers(&players, 5);
    assert_eq!(wickets.len(), 1);
    assert_eq!(wickets[0].player, "Bowl");
}

#[test]
fn leaderboard_length_capped_by_n() {
    let players: Vec<Player> = (0..8)
        .map(|i| stub_batsman(&format!("P{i}"), 100 + i))
        .collect();
    assert_eq!(top_run_scorers(&players, 5).len(), 5);
    assert_eq!(top_run_scorers(&players, 20).len(), 8);
    assert!(top_run_scorers(&[], 5).is_empty());
}

#[test]
fn all_rounders_appear_on_both_leaderboards() {
    // DJ Bravo carries both sides of the stats variant in the historic era.
    let era = ERA_CATALOG
        .iter()
        .find(|e| e.key == "historic")
        .expect("historic era bundled");
    let runs = top_run_scorers(&era.players, era.players.len());
    let wickets = top_wicket_takers(&era.players, era.players.len());
    assert!(runs.iter().any(|r| r.player == "DJ Bravo"));
    assert!(wickets.iter().any(|r| r.player == "DJ Bravo"));
    // Pure bowlers never show up among run scorers.
    assert!(!runs.iter().any(|r| r.player == "SL Malinga"));
}

#[test]
fn head_to_head_counts_unordered_pairs() {
    let matches = vec![
        stub_match("X", "Y", "X"),
        stub_match("Y", "X", "Y"),
        stub_match("X", "Z", "X"),
    ];
    let h2h = head_to_head(&matches, "X", "Y").unwrap();
    assert_eq!(h2h.total_matches, 2);
    assert_eq!(h2h.wins_a, 1);
    assert_eq!(h2h.wins_b, 1);
    assert!(h2h.wins_a + h2h.wins_b <= h2h.total_matches);
}

#[test]
fn head_to_head_is_symmetric() {
    let matches = vec![
        stub_match("X", "Y", "X"),
        stub_match("Y", "X", "X"),
        stub_match("X", "Y", "Y"),
    ];
    let ab = head_to_head(&matches, "X", "Y").unwrap();
    let ba = head_to_head(&matches, "Y", "X").unwrap();
    assert_eq!(ab.total_matches, ba.total_matches);
    assert_eq!(ab.wins_a, ba.wins_b);
    assert_eq!(ab.wins_b, ba.wins_a);
}

#[test]
fn head_to_head_rejects_same_team() {
    let err = head_to_head(&[], "X", "X").unwrap_err();
    assert!(matches!(err, CoreError::InvalidArgument(_)));
}

#[test]
fn player_vs_player_reports_bundled_matchup() {
    let era = ERA_CATALOG
        .iter()
        .find(|e| e.key == "modern")
        .expect("modern era bundled");
    let report = player_vs_player(&era.players, "V Kohli", "JJ Bumrah").unwrap();
    assert_eq!(report.runs, 140);
    assert_eq!(report.balls, 105);
    assert_eq!(report.dismissals, 4);
    assert!((report.strike_rate - 140.0 / 105.0 * 100.0).abs() < 1e-9);
    assert_eq!(report.average, Some(35.0));
}

#[test]
fn player_vs_player_unknown_matchup_is_not_found() {
    let era = ERA_CATALOG
        .iter()
        .find(|e| e.key == "modern")
        .expect("modern era bundled");
    let err = player_vs_player(&era.players, "V Kohli", "SL Malinga").unwrap_err();
    assert!(matches!(err, CoreError::NotFound(_)));

    let err = player_vs_player(&era.players, "Nobody", "JJ Bumrah").unwrap_err();
    assert!(matches!(err, CoreError::NotFound(_)));
}

#[test]
fn player_vs_player_never_dismissed_has_no_average() {
    let mut batsman = stub_batsman("Opener", 900);
    batsman.h2h.push(H2hEntry {
        bowler: "Quick".to_string(),
        runs: 30,
        balls: 12,
        dismissals: 0,
    });
    let players = vec![batsman];
    let report = player_vs_player(&players, "Opener", "Quick").unwrap();
    assert_eq!(report.average, None);
    assert!((report.strike_rate - 250.0).abs() < 1e-9);
}

#[test]
fn player_vs_player_zero_balls_has_zero_strike_rate() {
    let mut batsman = stub_batsman("Opener", 900);
    batsman.h2h.push(H2hEntry {
        bowler: "Quick".to_string(),
        runs: 0,
        balls: 0,
        dismissals: 1,
    });
    let players = vec![batsman];
    let report = player_vs_player(&players, "Opener", "Quick").unwrap();
    assert_eq!(report.strike_rate, 0.0);
    assert_eq!(report.average, Some(0.0));
}

#[test]
fn run_breakdown_follows_declared_split() {
    // runs=80, balls=40: fours=13, sixes=8, singles=80-52-48=-20, dots=40-13-8+20=39
    let b = simulated_run_breakdown(80, 40);
    assert_eq!(b.fours, 13);
    assert_eq!(b.sixes, 8);
    assert_eq!(b.singles, -20);
    assert_eq!(b.dots, 39);

    // Small tallies stay non-negative throughout.
    let b = simulated_run_breakdown(5, 10);
    assert_eq!((b.fours, b.sixes, b.singles, b.dots), (0, 0, 5, 5));
}
