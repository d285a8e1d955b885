use serde::{Deserialize, Serialize};

/// Regions a runner can be placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunnerRegion {
    #[serde(rename = "eu")]
    Eu,
    #[serde(rename = "us")]
    Us,
    #[serde(rename = "asia")]
    Asia,
}

impl RunnerRegion {
    pub const ALL: [RunnerRegion; 3] = [RunnerRegion::Eu, RunnerRegion::Us, RunnerRegion::Asia];

    pub fn as_code(&self) -> &'static str {
        match self {
            RunnerRegion::Eu => "eu",
            RunnerRegion::Us => "us",
            RunnerRegion::Asia => "asia",
        }
    }

    pub fn from_code<S: AsRef<str>>(code: S) -> Option<Self> {
        match code.as_ref().trim().to_ascii_lowercase().as_str() {
            "eu" => Some(RunnerRegion::Eu),
            "us" => Some(RunnerRegion::Us),
            "asia" => Some(RunnerRegion::Asia),
            _ => None,
        }
    }
}
