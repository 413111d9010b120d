use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// City codes accepted by the TDX bus endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum City {
    Taipei,
    NewTaipei,
    Taoyuan,
    Taichung,
    Tainan,
    Kaohsiung,
    Keelung,
    Hsinchu,
    HsinchuCounty,
    MiaoliCounty,
    ChanghuaCounty,
    NantouCounty,
    YunlinCounty,
    ChiayiCounty,
    Chiayi,
    PingtungCounty,
    YilanCounty,
    HualienCounty,
    TaitungCounty,
    KinmenCounty,
    PenghuCounty,
    LienchiangCounty,
}

impl City {
    pub const ALL: [City; 22] = [
        City::Taipei,
        City::NewTaipei,
        City::Taoyuan,
        City::Taichung,
        City::Tainan,
        City::Kaohsiung,
        City::Keelung,
        City::Hsinchu,
        City::HsinchuCounty,
        City::MiaoliCounty,
        City::ChanghuaCounty,
        City::NantouCounty,
        City::YunlinCounty,
        City::ChiayiCounty,
        City::Chiayi,
        City::PingtungCounty,
        City::YilanCounty,
        City::HualienCounty,
        City::TaitungCounty,
        City::KinmenCounty,
        City::PenghuCounty,
        City::LienchiangCounty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            City::Taipei => "Taipei",
            City::NewTaipei => "NewTaipei",
            City::Taoyuan => "Taoyuan",
            City::Taichung => "Taichung",
            City::Tainan => "Tainan",
            City::Kaohsiung => "Kaohsiung",
            City::Keelung => "Keelung",
            City::Hsinchu => "Hsinchu",
            City::HsinchuCounty => "HsinchuCounty",
            City::MiaoliCounty => "MiaoliCounty",
            City::ChanghuaCounty => "ChanghuaCounty",
            City::NantouCounty => "NantouCounty",
            City::YunlinCounty => "YunlinCounty",
            City::ChiayiCounty => "ChiayiCounty",
            City::Chiayi => "Chiayi",
            City::PingtungCounty => "PingtungCounty",
            City::YilanCounty => "YilanCounty",
            City::HualienCounty => "HualienCounty",
            City::TaitungCounty => "TaitungCounty",
            City::KinmenCounty => "KinmenCounty",
            City::PenghuCounty => "PenghuCounty",
            City::LienchiangCounty => "LienchiangCounty",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct UnknownCity(pub String);

impl fmt::Display for UnknownCity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown city: {}", self.0)
    }
}

impl FromStr for City {
    type Err = UnknownCity;

    /// Case-insensitive, so "newtaipei" resolves to `City::NewTaipei`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        City::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCity(s.to_string()))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
