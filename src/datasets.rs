use once_cell::sync::Lazy;

use crate::{CoreError, CoreResult};

/// Broad player classification. Determined entirely by which stats variant a
/// player carries; kept as its own enum for display and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Batsman,
    Bowler,
    AllRounder,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Batsman => "Batsman",
            Role::Bowler => "Bowler",
            Role::AllRounder => "All-Rounder",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BattingStats {
    pub runs: u32,
    pub average: f64,
    pub strike_rate: f64,
    pub dismissals: u32,
}

#[derive(Debug, Clone)]
pub struct BowlingStats {
    pub wickets: u32,
    pub economy: f64,
    pub average: f64,
    pub overs: f64,
}

/// Role-dependent career stats. The variant is the role: a pure bowler has
/// no batting fields to misread, and an all-rounder always carries both.
#[derive(Debug, Clone)]
pub enum PlayerStats {
    Batting(BattingStats),
    Bowling(BowlingStats),
    AllRounder {
        batting: BattingStats,
        bowling: BowlingStats,
    },
}

impl PlayerStats {
    pub fn role(&self) -> Role {
        match self {
            PlayerStats::Batting(_) => Role::Batsman,
            PlayerStats::Bowling(_) => Role::Bowler,
            PlayerStats::AllRounder { .. } => Role::AllRounder,
        }
    }

    pub fn batting(&self) -> Option<&BattingStats> {
        match self {
            PlayerStats::Batting(b) => Some(b),
            PlayerStats::AllRounder { batting, .. } => Some(batting),
            PlayerStats::Bowling(_) => None,
        }
    }

    pub fn bowling(&self) -> Option<&BowlingStats> {
        match self {
            PlayerStats::Bowling(b) => Some(b),
            PlayerStats::AllRounder { bowling, .. } => Some(bowling),
            PlayerStats::Batting(_) => None,
        }
    }
}

/// Ball-by-ball-style tally of one batsman against one named bowler.
#[derive(Debug, Clone)]
pub struct H2hEntry {
    pub bowler: String,
    pub runs: u32,
    pub balls: u32,
    pub dismissals: u32,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    /// Season -> runs (batsmen) or wickets (bowlers), in chronological order.
    pub seasons: Vec<(u16, u32)>,
    pub stats: PlayerStats,
    pub h2h: Vec<H2hEntry>,
}

impl Player {
    pub fn role(&self) -> Role {
        self.stats.role()
    }

    pub fn h2h_against(&self, bowler: &str) -> Option<&H2hEntry> {
        self.h2h.iter().find(|e| e.bowler == bowler)
    }
}

#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub team1: String,
    pub team2: String,
    pub winner: String,
    pub venue: String,
}

/// One named snapshot of teams/players/matches for a historical period.
/// Player order is the authoring order and is the leaderboard tie-break.
#[derive(Debug)]
pub struct EraDataset {
    pub key: &'static str,
    pub name: &'static str,
    pub teams: Vec<String>,
    pub players: Vec<Player>,
    pub matches: Vec<MatchRecord>,
}

impl EraDataset {
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }
}

pub const DEFAULT_ERA_KEY: &str = "modern";

/// Bundled era catalog, built once at first use and read-only thereafter.
pub static ERA_CATALOG: Lazy<Vec<EraDataset>> =
    Lazy::new(|| vec![historic_era(), modern_era(), future_era()]);

/// Active-era selector over the static catalog. Owned by the app state and
/// passed explicitly to callers; the only mutation is swapping the index.
#[derive(Debug)]
pub struct EraRegistry {
    active: usize,
}

impl EraRegistry {
    pub fn new() -> Self {
        Self::with_active(DEFAULT_ERA_KEY).unwrap_or(Self { active: 0 })
    }

    pub fn with_active(key: &str) -> CoreResult<Self> {
        let active = index_of(key)?;
        Ok(Self { active })
    }

    /// `(key, display name)` pairs in catalog order.
    pub fn list_eras(&self) -> Vec<(&'static str, &'static str)> {
        ERA_CATALOG.iter().map(|e| (e.key, e.name)).collect()
    }

    pub fn get(&self, key: &str) -> CoreResult<&'static EraDataset> {
        Ok(&ERA_CATALOG[index_of(key)?])
    }

    /// Validate first, then swap. An unknown key leaves the current era
    /// untouched.
    pub fn set_active(&mut self, key: &str) -> CoreResult<()> {
        self.active = index_of(key)?;
        Ok(())
    }

    pub fn active(&self) -> &'static EraDataset {
        &ERA_CATALOG[self.active]
    }

    /// Advance to the next era in catalog order, wrapping around.
    pub fn cycle(&mut self) {
        self.active = (self.active + 1) % ERA_CATALOG.len();
    }
}

impl Default for EraRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn index_of(key: &str) -> CoreResult<usize> {
    ERA_CATALOG
        .iter()
        .position(|e| e.key == key)
        .ok_or_else(|| CoreError::NotFound(format!("unknown era key '{key}'")))
}

fn batsman(
    name: &str,
    seasons: &[(u16, u32)],
    runs: u32,
    average: f64,
    strike_rate: f64,
    dismissals: u32,
    h2h: Vec<H2hEntry>,
) -> Player {
    Player {
        name: name.to_string(),
        seasons: seasons.to_vec(),
        stats: PlayerStats::Batting(BattingStats {
            runs,
            average,
            strike_rate,
            dismissals,
        }),
        h2h,
    }
}

fn bowler(
    name: &str,
    seasons: &[(u16, u32)],
    wickets: u32,
    economy: f64,
    average: f64,
    overs: f64,
) -> Player {
    Player {
        name: name.to_string(),
        seasons: seasons.to_vec(),
        stats: PlayerStats::Bowling(BowlingStats {
            wickets,
            economy,
            average,
            overs,
        }),
        h2h: Vec::new(),
    }
}

fn all_rounder(
    name: &str,
    seasons: &[(u16, u32)],
    batting: BattingStats,
    bowling: BowlingStats,
) -> Player {
    Player {
        name: name.to_string(),
        seasons: seasons.to_vec(),
        stats: PlayerStats::AllRounder { batting, bowling },
        h2h: Vec::new(),
    }
}

fn h2h(bowler: &str, runs: u32, balls: u32, dismissals: u32) -> H2hEntry {
    H2hEntry {
        bowler: bowler.to_string(),
        runs,
        balls,
        dismissals,
    }
}

fn match_record(team1: &str, team2: &str, winner: &str, venue: &str) -> MatchRecord {
    MatchRecord {
        team1: team1.to_string(),
        team2: team2.to_string(),
        winner: winner.to_string(),
        venue: venue.to_string(),
    }
}

fn historic_era() -> EraDataset {
    EraDataset {
        key: "historic",
        name: "Historic Era (2008-2016)",
        teams: [
            "Chennai Super Kings",
            "Mumbai Indians",
            "Royal Challengers Bangalore",
            "Kolkata Knight Riders",
            "Kings XI Punjab",
            "Rajasthan Royals",
            "Deccan Chargers",
            "Pune Warriors",
        ]
        .map(String::from)
        .to_vec(),
        players: vec![
            batsman(
                "SR Tendulkar",
                &[(2010, 618), (2011, 553), (2012, 324), (2013, 287)],
                2334,
                34.83,
                119.81,
                67,
                vec![h2h("SL Malinga", 45, 30, 2), h2h("A Mishra", 60, 45, 1)],
            ),
            batsman(
                "CH Gayle",
                &[(2011, 608), (2012, 733), (2013, 720), (2015, 491)],
                3420,
                43.29,
                152.75,
                79,
                vec![h2h("Harbhajan Singh", 80, 40, 1)],
            ),
            batsman(
                "V Sehwag",
                &[(2011, 424), (2012, 495), (2014, 455)],
                2728,
                27.55,
                155.44,
                99,
                Vec::new(),
            ),
            batsman(
                "G Gambhir",
                &[(2012, 590), (2016, 501)],
                4217,
                31.01,
                123.88,
                136,
                Vec::new(),
            ),
            batsman(
                "SK Raina",
                &[(2010, 520), (2013, 548), (2014, 523)],
                5528,
                32.51,
                136.76,
                170,
                Vec::new(),
            ),
            bowler(
                "SL Malinga",
                &[(2011, 28), (2012, 22), (2013, 20), (2015, 24)],
                170,
                7.14,
                19.8,
                471.1,
            ),
            bowler(
                "A Mishra",
                &[(2011, 19), (2013, 21), (2016, 13)],
                166,
                7.35,
                23.95,
                541.1,
            ),
            bowler(
                "Harbhajan Singh",
                &[(2013, 24), (2015, 18)],
                150,
                7.07,
                26.44,
                569.2,
            ),
            all_rounder(
                "DJ Bravo",
                &[(2013, 32), (2015, 26)],
                BattingStats {
                    runs: 1538,
                    average: 24.81,
                    strike_rate: 128.93,
                    dismissals: 62,
                },
                BowlingStats {
                    wickets: 183,
                    economy: 8.38,
                    average: 23.82,
                    overs: 543.2,
                },
            ),
            all_rounder(
                "SR Watson",
                &[(2013, 543), (2016, 179)],
                BattingStats {
                    runs: 3874,
                    average: 30.99,
                    strike_rate: 139.53,
                    dismissals: 125,
                },
                BowlingStats {
                    wickets: 92,
                    economy: 7.93,
                    average: 29.15,
                    overs: 343.4,
                },
            ),
        ],
        matches: vec![
            match_record(
                "Mumbai Indians",
                "Chennai Super Kings",
                "Mumbai Indians",
                "Wankhede Stadium, Mumbai",
            ),
            match_record(
                "Mumbai Indians",
                "Chennai Super Kings",
                "Chennai Super Kings",
                "MA Chidambaram Stadium, Chennai",
            ),
            match_record(
                "Royal Challengers Bangalore",
                "Kolkata Knight Riders",
                "Kolkata Knight Riders",
                "Eden Gardens, Kolkata",
            ),
            match_record(
                "Kings XI Punjab",
                "Rajasthan Royals",
                "Kings XI Punjab",
                "Sawai Mansingh Stadium, Jaipur",
            ),
            match_record(
                "Deccan Chargers",
                "Pune Warriors",
                "Deccan Chargers",
                "DY Patil Stadium, Mumbai",
            ),
            match_record(
                "Mumbai Indians",
                "Kolkata Knight Riders",
                "Mumbai Indians",
                "Wankhede Stadium, Mumbai",
            ),
        ],
    }
}

fn modern_era() -> EraDataset {
    EraDataset {
        key: "modern",
        name: "Modern Era (2017-2022)",
        teams: [
            "Chennai Super Kings",
            "Mumbai Indians",
            "Royal Challengers Bangalore",
            "Kolkata Knight Riders",
            "Delhi Capitals",
            "Punjab Kings",
            "Rajasthan Royals",
            "Sunrisers Hyderabad",
            "Gujarat Titans",
        ]
        .map(String::from)
        .to_vec(),
        players: vec![
            batsman(
                "V Kohli",
                &[
                    (2018, 530),
                    (2019, 464),
                    (2020, 466),
                    (2021, 405),
                    (2022, 341),
                ],
                6624,
                36.2,
                129.15,
                183,
                vec![
                    h2h("JJ Bumrah", 140, 105, 4),
                    h2h("K Rabada", 90, 60, 2),
                    h2h("R Ashwin", 120, 110, 1),
                ],
            ),
            batsman(
                "RG Sharma",
                &[
                    (2018, 286),
                    (2019, 405),
                    (2020, 332),
                    (2021, 381),
                    (2022, 268),
                ],
                5879,
                29.54,
                129.89,
                199,
                vec![h2h("YS Chahal", 95, 70, 3)],
            ),
            batsman(
                "KL Rahul",
                &[(2018, 659), (2020, 670), (2022, 616)],
                3889,
                47.43,
                136.22,
                82,
                Vec::new(),
            ),
            batsman(
                "S Dhawan",
                &[(2019, 521), (2020, 618), (2022, 460)],
                6244,
                35.08,
                126.35,
                178,
                Vec::new(),
            ),
            batsman(
                "DA Warner",
                &[(2017, 641), (2019, 692), (2020, 548)],
                5881,
                41.13,
                140.69,
                143,
                Vec::new(),
            ),
            bowler(
                "JJ Bumrah",
                &[(2018, 17), (2019, 19), (2020, 27), (2021, 21), (2022, 15)],
                145,
                7.39,
                23.31,
                457.1,
            ),
            bowler(
                "YS Chahal",
                &[(2018, 12), (2019, 18), (2020, 21), (2021, 18), (2022, 27)],
                170,
                7.61,
                21.69,
                483.1,
            ),
            bowler(
                "K Rabada",
                &[(2019, 25), (2020, 30), (2022, 23)],
                99,
                8.21,
                20.52,
                382.2,
            ),
            bowler(
                "R Ashwin",
                &[(2018, 14), (2019, 15), (2022, 12)],
                157,
                6.94,
                28.46,
                649.3,
            ),
            all_rounder(
                "AD Russell",
                &[(2018, 316), (2019, 510), (2022, 335)],
                BattingStats {
                    runs: 2035,
                    average: 29.07,
                    strike_rate: 177.88,
                    dismissals: 70,
                },
                BowlingStats {
                    wickets: 89,
                    economy: 9.19,
                    average: 26.5,
                    overs: 271.1,
                },
            ),
        ],
        matches: vec![
            match_record(
                "Mumbai Indians",
                "Chennai Super Kings",
                "Mumbai Indians",
                "Wankhede Stadium, Mumbai",
            ),
            match_record(
                "Gujarat Titans",
                "Rajasthan Royals",
                "Gujarat Titans",
                "Narendra Modi Stadium, Ahmedabad",
            ),
            match_record(
                "Delhi Capitals",
                "Sunrisers Hyderabad",
                "Delhi Capitals",
                "Arun Jaitley Stadium, Delhi",
            ),
            match_record(
                "Royal Challengers Bangalore",
                "Punjab Kings",
                "Royal Challengers Bangalore",
                "M. Chinnaswamy Stadium, Bengaluru",
            ),
        ],
    }
}

fn future_era() -> EraDataset {
    EraDataset {
        key: "future",
        name: "Future Era (Simulated 2023-2025)",
        teams: [
            "Gujarat Titans",
            "Lucknow Super Giants",
            "Rajasthan Royals",
            "Royal Challengers Bangalore",
            "Delhi Capitals",
            "Punjab Kings",
            "Kolkata Knight Riders",
            "Sunrisers Hyderabad",
            "Chennai Super Kings",
            "Mumbai Indians",
        ]
        .map(String::from)
        .to_vec(),
        players: vec![
            batsman(
                "JC Buttler",
                &[(2023, 392), (2024, 570), (2025, 650)],
                4000,
                38.5,
                150.1,
                105,
                Vec::new(),
            ),
            batsman(
                "Shubman Gill",
                &[(2023, 890), (2024, 420), (2025, 750)],
                4000,
                40.0,
                140.0,
                100,
                Vec::new(),
            ),
            all_rounder(
                "H Pandya",
                &[(2023, 346), (2024, 250), (2025, 450)],
                BattingStats {
                    runs: 3000,
                    average: 30.0,
                    strike_rate: 148.0,
                    dismissals: 100,
                },
                BowlingStats {
                    wickets: 80,
                    economy: 8.9,
                    average: 30.0,
                    overs: 300.0,
                },
            ),
            bowler(
                "R Khan",
                &[(2023, 27), (2024, 22), (2025, 30)],
                180,
                6.5,
                20.0,
                600.0,
            ),
        ],
        matches: Vec::new(),
    }
}
