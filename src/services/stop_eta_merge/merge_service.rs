use std::collections::HashMap;

use super::types::records::{
    Direction, EtaRecord, Estimate, MergedEntry, MergedStopEtas, StopRecord,
};

/// Joins stops with their ETAs, one entry per stop, ordered by stop sequence
/// within each direction.
///
/// When several ETA records exist for the same stop and direction (one per
/// approaching vehicle) the smallest estimate wins. A stop without any ETA
/// record keeps `Estimate::NoEstimate`.
pub fn merge(stops: &[StopRecord], etas: &[EtaRecord]) -> MergedStopEtas {
    let mut best: HashMap<(&str, Direction), &EtaRecord> = HashMap::new();
    for eta in etas {
        best.entry((eta.stop_uid.as_str(), eta.direction))
            .and_modify(|current| {
                if eta.estimate.is_better_than(&current.estimate) {
                    *current = eta;
                }
            })
            .or_insert(eta);
    }

    let mut merged = MergedStopEtas::default();
    for stop in stops {
        let eta = best.get(&(stop.stop_uid.as_str(), stop.direction));
        let entry = MergedEntry {
            stop_sequence: stop.sequence,
            stop_uid: stop.stop_uid.clone(),
            stop_id: stop.stop_id.clone(),
            name: stop.name.clone(),
            direction: stop.direction,
            estimate: eta.map_or(Estimate::NoEstimate, |e| e.estimate),
            stop_status: eta.and_then(|e| e.stop_status),
            plate_numb: eta.and_then(|e| e.plate_numb.clone()),
            next_bus_time: eta.and_then(|e| e.next_bus_time.clone()),
        };

        match stop.direction {
            Direction::Outbound => merged.outbound.push(entry),
            Direction::Inbound => merged.inbound.push(entry),
        }
    }

    // sort_by_key is stable, equal sequences keep their input order
    merged.outbound.sort_by_key(|e| e.stop_sequence);
    merged.inbound.sort_by_key(|e| e.stop_sequence);

    merged
}
