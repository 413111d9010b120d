#![allow(non_snake_case)]
use serde::{Deserialize, Serialize};

use super::tdx_name_type::NameType;

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct EstimatedTimeOfArrival {
    pub PlateNumb: Option<String>,
    pub StopUID: Option<String>,
    pub StopID: Option<String>,
    pub StopName: Option<NameType>,
    pub RouteUID: Option<String>,
    pub RouteName: Option<NameType>,
    pub SubRouteName: Option<NameType>,
    pub Direction: Option<u8>,
    // Seconds; absent when the stop has no vehicle approaching
    pub EstimateTime: Option<i64>,
    // 0 normal, 1 not departed, 2 traffic control, 3 last bus passed, 4 not operating today
    pub StopStatus: Option<u8>,
    pub NextBusTime: Option<String>,
    pub UpdateTime: Option<String>,
}
