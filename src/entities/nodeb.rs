//! Node records.

use super::cell::{ServedCellInfo, ServedNrCell};

/// Kind of RAN node. Its name doubles as the identity group in the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum NodeType {
    Unknown = 0,
    Enb = 1,
    Gnb = 2,
}

impl NodeType {
    /// Wire name, e.g. `GNB`.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Unknown => "UNKNOWN",
            NodeType::Enb => "ENB",
            NodeType::Gnb => "GNB",
        }
    }
}

/// Connection state between the node and the RIC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ConnectionStatus {
    UnknownConnectionStatus = 0,
    Connected = 1,
    Disconnected = 2,
    ConnectedSetupFailed = 3,
    Connecting = 4,
    ShuttingDown = 5,
    ShutDown = 6,
}

/// PLMN-scoped global node id.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GlobalNbId {
    #[prost(string, tag = "1")]
    pub plmn_id: String,
    #[prost(string, tag = "2")]
    pub nb_id: String,
}

/// Lightweight node identity stored as a group member.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NbIdentity {
    #[prost(string, tag = "1")]
    pub inventory_name: String,
    #[prost(message, optional, tag = "2")]
    pub global_nb_id: Option<GlobalNbId>,
    #[prost(enumeration = "ConnectionStatus", tag = "3")]
    pub connection_status: i32,
    #[prost(int64, tag = "4")]
    pub health_check_timestamp_sent: i64,
    #[prost(int64, tag = "5")]
    pub health_check_timestamp_received: i64,
}

/// LTE node configuration.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Enb {
    #[prost(message, repeated, tag = "2")]
    pub served_cells: Vec<ServedCellInfo>,
}

/// NR node configuration.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Gnb {
    #[prost(message, repeated, tag = "1")]
    pub served_nr_cells: Vec<ServedNrCell>,
}

/// Full node record, stored under `RAN:<name>` and `<type>:<plmn>:<nb>`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NodebInfo {
    #[prost(string, tag = "1")]
    pub ran_name: String,
    #[prost(string, tag = "2")]
    pub ip: String,
    #[prost(uint32, tag = "3")]
    pub port: u32,
    #[prost(enumeration = "ConnectionStatus", tag = "4")]
    pub connection_status: i32,
    #[prost(message, optional, tag = "5")]
    pub global_nb_id: Option<GlobalNbId>,
    #[prost(enumeration = "NodeType", tag = "6")]
    pub node_type: i32,
    #[prost(oneof = "nodeb_info::Configuration", tags = "7, 8")]
    pub configuration: Option<nodeb_info::Configuration>,
}

pub mod nodeb_info {
    /// Type-specific node configuration.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Configuration {
        #[prost(message, tag = "7")]
        Enb(super::Enb),
        #[prost(message, tag = "8")]
        Gnb(super::Gnb),
    }
}

impl NodebInfo {
    /// LTE configuration, if this is an eNB.
    pub fn enb(&self) -> Option<&Enb> {
        match &self.configuration {
            Some(nodeb_info::Configuration::Enb(enb)) => Some(enb),
            _ => None,
        }
    }

    /// NR configuration, if this is a gNB.
    pub fn gnb(&self) -> Option<&Gnb> {
        match &self.configuration {
            Some(nodeb_info::Configuration::Gnb(gnb)) => Some(gnb),
            _ => None,
        }
    }
}
