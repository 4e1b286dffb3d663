//! Session-type classification into CSV buckets.
//!
//! A layout is an ordered decision list. A session goes to the first bucket
//! whose pattern is a substring of its `sessionType`, or to no bucket at all.

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One CSV output file and the session-type substring that selects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Short label used in logs and reports.
    pub name: &'static str,
    /// Substring matched against `sessionType`.
    pub pattern: &'static str,
    /// Output path, relative to the output directory.
    pub path: &'static str,
}

impl Bucket {
    pub fn matches(&self, session_type: &str) -> bool {
        session_type.contains(self.pattern)
    }
}

const DETAILED: [Bucket; 3] = [
    Bucket {
        name: "bo45",
        pattern: "Breakout: 45 Minute",
        path: "session/bo45/all.csv",
    },
    Bucket {
        name: "bo75",
        pattern: "Breakout: 75 Minute",
        path: "session/bo75/all.csv",
    },
    Bucket {
        name: "th20",
        pattern: "Theater: 20 Minute",
        path: "session/th20/all.csv",
    },
];

const SIMPLE: [Bucket; 2] = [
    Bucket {
        name: "breakout",
        pattern: "Breakout",
        path: "ignite_breakout_sessions.csv",
    },
    Bucket {
        name: "theater",
        pattern: "Theater",
        path: "ignite_theater_sessions.csv",
    },
];

/// How sessions are split across CSV files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// 45-minute breakouts, 75-minute breakouts and 20-minute theater sessions
    #[default]
    Detailed,
    /// All breakouts and all theater sessions
    Simple,
}

impl Layout {
    /// Buckets in match precedence order.
    pub fn buckets(&self) -> &'static [Bucket] {
        match self {
            Layout::Detailed => &DETAILED,
            Layout::Simple => &SIMPLE,
        }
    }

    /// Index of the first bucket matching `session_type`.
    pub fn classify(&self, session_type: &str) -> Option<usize> {
        self.buckets().iter().position(|b| b.matches(session_type))
    }

    /// Full path of every bucket under `output_dir`.
    pub fn paths(&self, output_dir: &Path) -> Vec<std::path::PathBuf> {
        self.buckets()
            .iter()
            .map(|b| output_dir.join(b.path))
            .collect()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Detailed => write!(f, "detailed"),
            Layout::Simple => write!(f, "simple"),
        }
    }
}
