//! Static stat catalog
//!
//! Which statistics a player can be wagered on, by position, and which
//! prediction endpoint answers for each one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roster position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
}

impl Position {
    pub fn as_str(self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            other => Err(format!("unsupported position: {other}")),
        }
    }
}

/// Statistic a leg can be placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKey {
    PassingYards,
    PassingTds,
    Interceptions,
    RushingYards,
    RushingTds,
    Receptions,
    ReceivingYards,
    ReceivingTds,
}

/// Coarse classification of a stat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Yardage,
    Touchdown,
    Count,
}

/// Endpoint that serves a stat's probability table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Yardage-shaped table for the given stat type
    Yardage(StatKey),
    /// Touchdown-count table
    Touchdown,
}

/// Resolved lookup for a stat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatRoute {
    pub endpoint: Endpoint,
    /// The table belongs to a different stat and only approximates this one
    pub proxy: bool,
}

const ALL_STATS: [StatKey; 8] = [
    StatKey::PassingYards,
    StatKey::PassingTds,
    StatKey::Interceptions,
    StatKey::RushingYards,
    StatKey::RushingTds,
    StatKey::Receptions,
    StatKey::ReceivingYards,
    StatKey::ReceivingTds,
];

impl StatKey {
    /// Wire key, e.g. `passing_yards`
    pub fn as_str(self) -> &'static str {
        match self {
            StatKey::PassingYards => "passing_yards",
            StatKey::PassingTds => "passing_tds",
            StatKey::Interceptions => "interceptions",
            StatKey::RushingYards => "rushing_yards",
            StatKey::RushingTds => "rushing_tds",
            StatKey::Receptions => "receptions",
            StatKey::ReceivingYards => "receiving_yards",
            StatKey::ReceivingTds => "receiving_tds",
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            StatKey::PassingYards => "Passing Yards",
            StatKey::PassingTds => "Passing TDs",
            StatKey::Interceptions => "Interceptions",
            StatKey::RushingYards => "Rushing Yards",
            StatKey::RushingTds => "Rushing TDs",
            StatKey::Receptions => "Receptions",
            StatKey::ReceivingYards => "Receiving Yards",
            StatKey::ReceivingTds => "Receiving TDs",
        }
    }

    pub fn kind(self) -> StatKind {
        match self {
            StatKey::PassingYards | StatKey::RushingYards | StatKey::ReceivingYards => {
                StatKind::Yardage
            }
            StatKey::PassingTds | StatKey::RushingTds | StatKey::ReceivingTds => {
                StatKind::Touchdown
            }
            StatKey::Interceptions | StatKey::Receptions => StatKind::Count,
        }
    }

    /// Endpoint that answers for this stat.
    ///
    /// Interceptions and receptions have no distribution of their own; they
    /// are served from the passing- and receiving-yards tables respectively
    /// and flagged as proxies.
    pub fn route(self) -> StatRoute {
        match self {
            StatKey::Interceptions => StatRoute {
                endpoint: Endpoint::Yardage(StatKey::PassingYards),
                proxy: true,
            },
            StatKey::Receptions => StatRoute {
                endpoint: Endpoint::Yardage(StatKey::ReceivingYards),
                proxy: true,
            },
            stat => match stat.kind() {
                StatKind::Touchdown => StatRoute {
                    endpoint: Endpoint::Touchdown,
                    proxy: false,
                },
                _ => StatRoute {
                    endpoint: Endpoint::Yardage(stat),
                    proxy: false,
                },
            },
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        ALL_STATS
            .iter()
            .copied()
            .find(|stat| stat.as_str() == key)
            .ok_or_else(|| format!("unknown stat: {s}"))
    }
}

/// Stats offered for a position, in display order
pub fn stats_for(position: Position) -> &'static [StatKey] {
    match position {
        Position::QB => &[
            StatKey::PassingYards,
            StatKey::PassingTds,
            StatKey::Interceptions,
            StatKey::RushingYards,
        ],
        Position::RB => &[
            StatKey::RushingYards,
            StatKey::RushingTds,
            StatKey::Receptions,
            StatKey::ReceivingYards,
        ],
        Position::WR | Position::TE => &[
            StatKey::ReceivingYards,
            StatKey::Receptions,
            StatKey::ReceivingTds,
        ],
    }
}

/// Whether `stat` can be selected for `position`
pub fn is_offered(position: Position, stat: StatKey) -> bool {
    stats_for(position).contains(&stat)
}
