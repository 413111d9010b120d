use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::services::tdx_service::types::{
    tdx_estimated_time_of_arrival_response::EstimatedTimeOfArrival, tdx_name_type::NameType,
    tdx_stop_of_route_response::StopOfRoute,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Outbound,
    Inbound,
}

impl Direction {
    /// TDX also reports loop (2) and unknown (255) directions, which have no
    /// place in the outbound/inbound view.
    pub fn from_tdx(value: u8) -> Option<Self> {
        match value {
            0 => Some(Direction::Outbound),
            1 => Some(Direction::Inbound),
            _ => None,
        }
    }
}

/// Seconds until arrival. `NoEstimate` serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Estimate {
    Seconds(u32),
    NoEstimate,
}

impl Estimate {
    /// Negative values are TDX sentinels and count as no estimate.
    pub fn from_tdx(value: Option<i64>) -> Self {
        value
            .and_then(|v| u32::try_from(v).ok())
            .map_or(Estimate::NoEstimate, Estimate::Seconds)
    }

    /// Whether `self` should replace `other` for the same stop.
    pub fn is_better_than(&self, other: &Estimate) -> bool {
        match (self, other) {
            (Estimate::Seconds(a), Estimate::Seconds(b)) => a < b,
            (Estimate::Seconds(_), Estimate::NoEstimate) => true,
            (Estimate::NoEstimate, _) => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub zh: Option<String>,
    pub en: Option<String>,
}

impl From<Option<&NameType>> for LocalizedName {
    fn from(name: Option<&NameType>) -> Self {
        LocalizedName {
            zh: name.and_then(|n| n.Zh_tw.clone()),
            en: name.and_then(|n| n.En.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StopRecord {
    pub sequence: u32,
    pub stop_uid: String,
    pub stop_id: Option<String>,
    pub name: LocalizedName,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EtaRecord {
    pub stop_uid: String,
    pub direction: Direction,
    pub estimate: Estimate,
    pub stop_status: Option<u8>,
    pub plate_numb: Option<String>,
    pub next_bus_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedEntry {
    pub stop_sequence: u32,
    pub stop_uid: String,
    pub stop_id: Option<String>,
    pub name: LocalizedName,
    pub direction: Direction,
    #[serde(rename = "estimate_seconds")]
    pub estimate: Estimate,
    pub stop_status: Option<u8>,
    pub plate_numb: Option<String>,
    pub next_bus_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedStopEtas {
    pub outbound: Vec<MergedEntry>,
    pub inbound: Vec<MergedEntry>,
}

/// Flattens stop-of-route rows into stop records.
///
/// A stop listed by several sub-routes of the same direction is kept once
/// (first occurrence). Stops without a UID or outside outbound/inbound are
/// dropped.
pub fn stop_records_from_routes(rows: &[StopOfRoute]) -> Vec<StopRecord> {
    let mut seen: HashSet<(String, Direction)> = HashSet::new();
    let mut records = Vec::new();

    for row in rows {
        let Some(direction) = row.Direction.and_then(Direction::from_tdx) else {
            debug!("Skipping stop-of-route row with direction {:?}", row.Direction);
            continue;
        };

        for stop in row.Stops.iter().flatten() {
            let Some(uid) = stop.StopUID.as_ref() else {
                continue;
            };
            if !seen.insert((uid.clone(), direction)) {
                continue;
            }

            records.push(StopRecord {
                sequence: stop.StopSequence.unwrap_or(0),
                stop_uid: uid.clone(),
                stop_id: stop.StopID.clone(),
                name: LocalizedName::from(stop.StopName.as_ref()),
                direction,
            });
        }
    }

    records
}

pub fn eta_records_from_rows(rows: &[EstimatedTimeOfArrival]) -> Vec<EtaRecord> {
    rows.iter()
        .filter_map(|row| {
            let stop_uid = row.StopUID.clone()?;
            let direction = row.Direction.and_then(Direction::from_tdx)?;

            Some(EtaRecord {
                stop_uid,
                direction,
                estimate: Estimate::from_tdx(row.EstimateTime),
                stop_status: row.StopStatus,
                plate_numb: row.PlateNumb.clone(),
                next_bus_time: row.NextBusTime.clone(),
            })
        })
        .collect()
}
