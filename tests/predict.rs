use cricvision_terminal::predict::{chase_win_probability, project_first_innings, ChaseInputs};
use cricvision_terminal::CoreError;

fn inputs(target: u32, score: u32, overs: f64, wickets: u32) -> ChaseInputs {
    ChaseInputs {
        batting_team: "Chennai Super Kings".to_string(),
        bowling_team: "Mumbai Indians".to_string(),
        target,
        current_score: score,
        overs_completed: overs,
        wickets_down: wickets,
    }
}

#[test]
fn chase_worked_example() {
    let out = chase_win_probability(&inputs(180, 90, 10.0, 3)).unwrap();
    assert_eq!(out.batting_win, 48.0);
    assert_eq!(out.bowling_win, 52.0);
}

#[test]
fn chase_target_already_reached_is_certain() {
    let out = chase_win_probability(&inputs(100, 150, 12.0, 5)).unwrap();
    assert_eq!(out.batting_win, 100.0);
    assert_eq!(out.bowling_win, 0.0);
}

#[test]
fn chase_all_out_or_no_balls_is_lost() {
    let all_out = chase_win_probability(&inputs(180, 120, 15.0, 10)).unwrap();
    assert_eq!(all_out.batting_win, 0.0);

    // 19.5 completed overs leaves one legal ball; probability stays defined
    // and inside the clamp band for an undecided chase.
    let last_ball = chase_win_probability(&inputs(121, 118, 19.5, 6)).unwrap();
    assert!(last_ball.batting_win >= 5.0);
}

#[test]
fn chase_probability_non_increasing_as_runs_left_grows() {
    let mut prev = f64::INFINITY;
    for target in (95..=295).step_by(5) {
        let out = chase_win_probability(&inputs(target, 90, 11.3, 2)).unwrap();
        assert!(
            out.batting_win <= prev,
            "target {target}: {} > {prev}",
            out.batting_win
        );
        prev = out.batting_win;
    }
}

#[test]
fn chase_probabilities_always_sum_to_100() {
    for overs in [0.0, 5.4, 10.0, 14.2, 19.5] {
        for wickets in [0, 3, 7, 10] {
            let out = chase_win_probability(&inputs(190, 85, overs, wickets)).unwrap();
            assert_eq!(out.batting_win + out.bowling_win, 100.0);
        }
    }
}

#[test]
fn chase_lower_clamp_applies() {
    let out = chase_win_probability(&inputs(260, 40, 18.0, 8)).unwrap();
    assert_eq!(out.batting_win, 5.0);
}

#[test]
fn chase_validates_team_distinctness() {
    let mut bad = inputs(180, 90, 10.0, 3);
    bad.bowling_team = bad.batting_team.clone();
    let err = chase_win_probability(&bad).unwrap_err();
    assert!(matches!(err, CoreError::InvalidArgument(_)));
}

#[test]
fn chase_validates_numeric_ranges() {
    for bad_overs in [-0.1, 12.7, 19.9, 25.0] {
        let err = chase_win_probability(&inputs(180, 90, bad_overs, 3)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)), "overs {bad_overs}");
    }
    let err = chase_win_probability(&inputs(180, 90, 10.0, 11)).unwrap_err();
    assert!(matches!(err, CoreError::InvalidArgument(_)));
}

#[test]
fn projection_zero_overs_defaults_to_175() {
    assert_eq!(project_first_innings(0.0, 0, 0).unwrap(), 175);
    // The default applies regardless of runs/wickets on the board.
    assert_eq!(project_first_innings(0.0, 12, 2).unwrap(), 175);
}

#[test]
fn projection_full_innings_returns_current_runs() {
    for runs in [0, 37, 164, 221] {
        for wickets in [0, 4, 9] {
            assert_eq!(
                project_first_innings(20.0, runs, wickets).unwrap(),
                i64::from(runs)
            );
        }
    }
}

#[test]
fn projection_worked_examples() {
    // rr 8.0 over 8 overs, 1 down: 64 + 12*(8.0 + 1.5 - 0.1) = 176.8 -> 177
    assert_eq!(project_first_innings(8.0, 64, 1).unwrap(), 177);
    // rr 10.0 over 10 overs, 0 down: 100 + 10*11.5 = 215
    assert_eq!(project_first_innings(10.0, 100, 0).unwrap(), 215);
}

#[test]
fn projection_unclamped_for_extreme_inputs() {
    // A crawling start still projects something; the formula never clamps.
    let low = project_first_innings(15.0, 20, 9).unwrap();
    assert_eq!(low, 20 + (5.0_f64 * (20.0 / 15.0 + 1.5 - 0.9)).round() as i64);
}

#[test]
fn projection_validates_ranges() {
    assert!(matches!(
        project_first_innings(-1.0, 50, 2),
        Err(CoreError::InvalidArgument(_))
    ));
    assert!(matches!(
        project_first_innings(20.5, 50, 2),
        Err(CoreError::InvalidArgument(_))
    ));
    assert!(matches!(
        project_first_innings(10.0, 50, 11),
        Err(CoreError::InvalidArgument(_))
    ));
}
