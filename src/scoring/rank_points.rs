use std::fmt;

use strum_macros::EnumIter;

use super::SEAT_COUNT;

/// Placement bonuses in thousand-point units, indexed by sorted
/// position. Index 0 is never read: the winner's score is derived as
/// the residual that closes the round to zero.
pub type RankPointTable = [i32; SEAT_COUNT];

/// The rank-point spreads a session can be configured with, named after
/// the 2nd-place and 4th-place magnitudes.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    EnumIter,
)]
pub enum RankPointOption {
    #[serde(rename = "5-10")]
    FiveTen,
    #[serde(rename = "5-15")]
    FiveFifteen,
    #[serde(rename = "10-20")]
    TenTwenty,
    #[default]
    #[serde(rename = "10-30")]
    TenThirty,
    #[serde(rename = "20-30")]
    TwentyThirty,
}

impl RankPointOption {
    pub fn table(&self) -> RankPointTable {
        match self {
            RankPointOption::FiveTen => [0, 5, -5, -10],
            RankPointOption::FiveFifteen => [0, 5, -5, -15],
            RankPointOption::TenTwenty => [0, 10, -10, -20],
            RankPointOption::TenThirty => [0, 10, -10, -30],
            RankPointOption::TwentyThirty => [0, 20, -20, -30],
        }
    }
}

impl fmt::Display for RankPointOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RankPointOption::FiveTen => "5-10",
                RankPointOption::FiveFifteen => "5-15",
                RankPointOption::TenTwenty => "10-20",
                RankPointOption::TenThirty => "10-30",
                RankPointOption::TwentyThirty => "20-30",
            }
        )
    }
}

impl TryFrom<&str> for RankPointOption {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "5-10" => Ok(RankPointOption::FiveTen),
            "5-15" => Ok(RankPointOption::FiveFifteen),
            "10-20" => Ok(RankPointOption::TenTwenty),
            "10-30" => Ok(RankPointOption::TenThirty),
            "20-30" => Ok(RankPointOption::TwentyThirty),
            _ => Err(s.to_string()),
        }
    }
}
