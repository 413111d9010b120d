#![allow(non_snake_case)]
use serde::{Deserialize, Serialize};

use super::tdx_name_type::NameType;

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct RouteStop {
    pub StopUID: Option<String>,
    pub StopID: Option<String>,
    pub StopName: Option<NameType>,
    pub StopSequence: Option<u32>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct StopOfRoute {
    pub RouteUID: Option<String>,
    pub RouteName: Option<NameType>,
    pub SubRouteUID: Option<String>,
    pub SubRouteName: Option<NameType>,
    pub Direction: Option<u8>,
    pub Headsign: Option<String>,
    pub Stops: Option<Vec<RouteStop>>,
    pub UpdateTime: Option<String>,
}
