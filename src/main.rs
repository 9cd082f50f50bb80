use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::style::Style;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph};

use cricvision_terminal::datasets::Player;
use cricvision_terminal::export;
use cricvision_terminal::queries;
use cricvision_terminal::state::{AppState, PredictorField, Screen};

struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        Self {
            state: AppState::new(),
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.state.screen = Screen::Overview,
            KeyCode::Char('2') => self.state.screen = Screen::Players,
            KeyCode::Char('3') => self.state.screen = Screen::Predictor,
            KeyCode::Char('4') => self.state.screen = Screen::Teams,
            KeyCode::Char('5') => self.state.screen = Screen::Matchup,
            KeyCode::Char('e') | KeyCode::Char('E') => self.state.cycle_era(),
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Char('n') => self.state.select_next_secondary(),
            KeyCode::Tab => {
                if self.state.screen == Screen::Predictor {
                    self.state.predictor_focus = self.state.predictor_focus.next();
                }
            }
            KeyCode::Char('+') | KeyCode::Char('l') | KeyCode::Right => {
                if self.state.screen == Screen::Predictor {
                    self.state.adjust_focused_field(true);
                }
            }
            KeyCode::Char('-') | KeyCode::Char('h') | KeyCode::Left => {
                if self.state.screen == Screen::Predictor {
                    self.state.adjust_focused_field(false);
                }
            }
            KeyCode::Char('t') => {
                if self.state.screen == Screen::Predictor {
                    self.state.cycle_chase_batting_team();
                }
            }
            KeyCode::Char('g') => {
                if self.state.screen == Screen::Predictor {
                    self.state.cycle_chase_bowling_team();
                }
            }
            KeyCode::Char('x') => self.export_report(),
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            _ => {}
        }
    }

    fn export_report(&mut self) {
        match export::export_era_report(self.state.era(), self.state.top_n) {
            Ok(path) => self
                .state
                .push_log(format!("[INFO] Report written to {}", path.display())),
            Err(err) => self.state.push_log(format!("[WARN] Export failed: {err:#}")),
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.screen {
        Screen::Overview => render_overview(frame, chunks[1], &app.state),
        Screen::Players => render_players(frame, chunks[1], &app.state),
        Screen::Predictor => render_predictor(frame, chunks[1], &app.state),
        Screen::Teams => render_teams(frame, chunks[1], &app.state),
        Screen::Matchup => render_matchup(frame, chunks[1], &app.state),
    }

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::TOP));
    frame.render_widget(console, chunks[2]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let era = state.era();
    format!(
        "CRICKET VISION | {} | Era: {} (e to switch)\n{}",
        state.screen.title(),
        era.name,
        footer_hint(state)
    )
}

fn footer_hint(state: &AppState) -> &'static str {
    match state.screen {
        Screen::Overview => "1-5 Screens | e Era | x Export | ? Help | q Quit",
        Screen::Players => "j/k Batsman | n Bowler | e Era | ? Help | q Quit",
        Screen::Predictor => {
            "Tab Field | +/- Adjust | t Batting team | g Bowling team | ? Help | q Quit"
        }
        Screen::Teams => "j/k Team A | n Team B | e Era | ? Help | q Quit",
        Screen::Matchup => "j/k Batsman | n Bowler | e Era | ? Help | q Quit",
    }
}

fn render_overview(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(1)])
        .split(area);

    let era = state.era();
    let summary = format!(
        "Era: {}\nPlayers analyzed: {}\nTeams covered: {}\nRecorded matches: {}",
        era.name,
        era.players.len(),
        era.teams.len(),
        era.matches.len()
    );
    let overview = Paragraph::new(summary)
        .block(Block::default().title("Dataset Overview").borders(Borders::ALL));
    frame.render_widget(overview, rows[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let scorers = queries::top_run_scorers(&era.players, state.top_n);
    let scorers_text = if scorers.is_empty() {
        "No batting data for this era".to_string()
    } else {
        scorers
            .iter()
            .enumerate()
            .map(|(i, r)| format!("{:>2}. {:<18} {:>5}", i + 1, r.player, r.value))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let scorers_panel = Paragraph::new(scorers_text)
        .block(Block::default().title("Top Run Scorers").borders(Borders::ALL));
    frame.render_widget(scorers_panel, cols[0]);

    let takers = queries::top_wicket_takers(&era.players, state.top_n);
    let takers_text = if takers.is_empty() {
        "No bowling data for this era".to_string()
    } else {
        takers
            .iter()
            .enumerate()
            .map(|(i, r)| format!("{:>2}. {:<18} {:>5}", i + 1, r.player, r.value))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let takers_panel = Paragraph::new(takers_text)
        .block(Block::default().title("Top Wicket Takers").borders(Borders::ALL));
    frame.render_widget(takers_panel, cols[1]);
}

fn render_players(frame: &mut Frame, area: Rect, state: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_batting_panel(frame, cols[0], state.selected_batsman());
    render_bowling_panel(frame, cols[1], state.selected_bowler());
}

fn render_batting_panel(frame: &mut Frame, area: Rect, player: Option<&Player>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(1)])
        .split(area);

    let Some(player) = player else {
        let empty = Paragraph::new("No batsman available")
            .block(Block::default().title("Batting Analysis").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let text = match player.stats.batting() {
        Some(b) => format!(
            "{} ({})\nTotal runs: {}\nAverage: {:.2}\nStrike rate: {:.2}\nDismissals: {}",
            player.name,
            player.role().label(),
            b.runs,
            b.average,
            b.strike_rate,
            b.dismissals
        ),
        None => format!("{} has no batting record", player.name),
    };
    let panel = Paragraph::new(text)
        .block(Block::default().title("Batting Analysis").borders(Borders::ALL));
    frame.render_widget(panel, rows[0]);

    render_season_chart(frame, rows[1], player, "Runs per Season");
}

fn render_bowling_panel(frame: &mut Frame, area: Rect, player: Option<&Player>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(1)])
        .split(area);

    let Some(player) = player else {
        let empty = Paragraph::new("No bowler available")
            .block(Block::default().title("Bowling Analysis").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let text = match player.stats.bowling() {
        Some(b) => format!(
            "{} ({})\nTotal wickets: {}\nEconomy: {:.2}\nBowling avg: {:.2}\nOvers bowled: {:.1}",
            player.name,
            player.role().label(),
            b.wickets,
            b.economy,
            b.average,
            b.overs
        ),
        None => format!("{} has no bowling record", player.name),
    };
    let panel = Paragraph::new(text)
        .block(Block::default().title("Bowling Analysis").borders(Borders::ALL));
    frame.render_widget(panel, rows[0]);

    render_season_chart(frame, rows[1], player, "Wickets per Season");
}

fn render_season_chart(frame: &mut Frame, area: Rect, player: &Player, title: &str) {
    if player.seasons.is_empty() {
        let empty = Paragraph::new("No seasonal data")
            .block(Block::default().title(title.to_string()).borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let bars: Vec<Bar> = player
        .seasons
        .iter()
        .map(|(year, value)| {
            Bar::default()
                .value(u64::from(*value))
                .label(year.to_string().into())
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(1)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    frame.render_widget(chart, area);
}

fn render_predictor(frame: &mut Frame, area: Rect, state: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_chase_panel(frame, cols[0], state);
    render_projection_panel(frame, cols[1], state);
}

fn render_chase_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let batting = state
        .team_name(state.chase.batting_team_idx)
        .unwrap_or("-");
    let bowling = state
        .team_name(state.chase.bowling_team_idx)
        .unwrap_or("-");

    let mut lines = vec![
        format!("Batting (chasing): {batting}"),
        format!("Bowling: {bowling}"),
        String::new(),
        field_line(state, PredictorField::ChaseTarget, state.chase.target.to_string()),
        field_line(state, PredictorField::ChaseScore, state.chase.score.to_string()),
        field_line(
            state,
            PredictorField::ChaseOvers,
            format!("{:.1}", state.chase.overs()),
        ),
        field_line(state, PredictorField::ChaseWickets, state.chase.wickets.to_string()),
        String::new(),
    ];

    match state.chase_outlook() {
        Ok(outlook) => {
            lines.push(format!(
                "{batting}: {:.2}% | {bowling}: {:.2}%",
                outlook.batting_win, outlook.bowling_win
            ));
            lines.push(format!(
                "Need {} off {} with {} wickets in hand",
                outlook.runs_left.max(0),
                outlook.balls_left.max(0),
                outlook.wickets_left
            ));
        }
        Err(err) => lines.push(format!("! {err}")),
    }

    let panel = Paragraph::new(lines.join("\n")).block(
        Block::default()
            .title("Win Probability (Chasing Team)")
            .borders(Borders::ALL),
    );
    frame.render_widget(panel, area);
}

fn render_projection_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        field_line(
            state,
            PredictorField::ProjOvers,
            format!("{:.1}", state.projection.overs()),
        ),
        field_line(state, PredictorField::ProjRuns, state.projection.runs.to_string()),
        field_line(
            state,
            PredictorField::ProjWickets,
            state.projection.wickets.to_string(),
        ),
        String::new(),
    ];

    match state.projection() {
        Ok(total) => lines.push(format!("Predicted final score: ~{total}")),
        Err(err) => lines.push(format!("! {err}")),
    }

    let panel = Paragraph::new(lines.join("\n")).block(
        Block::default()
            .title("First Innings Projection")
            .borders(Borders::ALL),
    );
    frame.render_widget(panel, area);
}

fn field_line(state: &AppState, field: PredictorField, value: String) -> String {
    let marker = if state.predictor_focus == field { ">" } else { " " };
    format!("{marker} {:<8} {value}", field.label())
}

fn render_teams(frame: &mut Frame, area: Rect, state: &AppState) {
    let era = state.era();
    let team_a = state.team_name(state.team_a_idx).unwrap_or("-");
    let team_b = state.team_name(state.team_b_idx).unwrap_or("-");

    let mut lines = vec![
        format!("Team A: {team_a}"),
        format!("Team B: {team_b}"),
        String::new(),
    ];

    match queries::head_to_head(&era.matches, team_a, team_b) {
        Ok(h2h) if h2h.total_matches == 0 => {
            lines.push(format!("No head-to-head data between {team_a} and {team_b}"));
        }
        Ok(h2h) => {
            lines.push(format!("Matches played: {}", h2h.total_matches));
            lines.push(format!("{team_a} wins: {}", h2h.wins_a));
            lines.push(format!("{team_b} wins: {}", h2h.wins_b));
        }
        Err(err) => lines.push(format!("! {err}")),
    }

    let panel = Paragraph::new(lines.join("\n")).block(
        Block::default()
            .title("Head-to-Head Analysis")
            .borders(Borders::ALL),
    );
    frame.render_widget(panel, area);
}

fn render_matchup(frame: &mut Frame, area: Rect, state: &AppState) {
    let era = state.era();
    let Some(batsman) = state.selected_matchup_batsman() else {
        let empty = Paragraph::new("No simulated player-vs-player data for this era").block(
            Block::default()
                .title("Player vs Player")
                .borders(Borders::ALL),
        );
        frame.render_widget(empty, area);
        return;
    };
    let Some(bowler) = state.selected_matchup_bowler() else {
        let empty = Paragraph::new(format!("No h2h opponents recorded for {}", batsman.name))
            .block(
                Block::default()
                    .title("Player vs Player")
                    .borders(Borders::ALL),
            );
        frame.render_widget(empty, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(1)])
        .split(area);

    let mut lines = vec![
        format!("Matchup: {} (bat) vs {bowler} (bowl)", batsman.name),
        String::new(),
    ];

    let report = queries::player_vs_player(&era.players, &batsman.name, bowler);
    match &report {
        Ok(r) => {
            lines.push(format!("Runs: {}  Balls: {}  Dismissals: {}", r.runs, r.balls, r.dismissals));
            lines.push(format!("Strike rate: {:.2}", r.strike_rate));
            match r.average {
                Some(avg) => lines.push(format!("Average: {avg:.2}")),
                None => lines.push("Average: not out".to_string()),
            }
        }
        Err(err) => lines.push(format!("! {err}")),
    }

    let panel = Paragraph::new(lines.join("\n")).block(
        Block::default()
            .title("Player vs Player")
            .borders(Borders::ALL),
    );
    frame.render_widget(panel, rows[0]);

    if let Ok(r) = report {
        render_breakdown_chart(frame, rows[1], r.runs, r.balls);
    }
}

fn render_breakdown_chart(frame: &mut Frame, area: Rect, runs: u32, balls: u32) {
    let b = queries::simulated_run_breakdown(runs, balls);
    let clamp = |v: i64| u64::try_from(v).unwrap_or(0);

    let bars = [
        Bar::default().value(clamp(b.dots)).label("Dots".into()),
        Bar::default().value(clamp(b.singles)).label("1s-3s".into()),
        Bar::default().value(clamp(b.fours)).label("4s".into()),
        Bar::default().value(clamp(b.sixes)).label("6s".into()),
    ];

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(2)
        .block(
            Block::default()
                .title("Simulated Run Breakdown (display only)")
                .borders(Borders::ALL),
        );
    frame.render_widget(chart, area);
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No alerts yet".to_string();
    }
    state
        .logs
        .iter()
        .rev()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Cricket Vision - Help",
        "",
        "Global:",
        "  1            Overview",
        "  2            Player Analysis",
        "  3            Match Predictor",
        "  4            Team Strategy",
        "  5            Player vs Player",
        "  e            Switch era",
        "  x            Export era report (JSON)",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Selection:",
        "  j/k or ↑/↓   Primary cursor",
        "  n            Secondary cursor",
        "",
        "Predictor:",
        "  Tab          Next field",
        "  +/- or h/l   Adjust field",
        "  t / g        Cycle batting / bowling team",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
