#![allow(non_snake_case)]
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct NameType {
    pub Zh_tw: Option<String>,
    pub En: Option<String>,
}
