//! Load information records.

/// Per-cell load report.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CellLoadInformation {
    #[prost(string, tag = "1")]
    pub cell_id: String,
    #[prost(string, tag = "2")]
    pub ul_high_interference_indication: String,
}

/// Load snapshot of a node, stored under `LOAD:<name>`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RanLoadInformation {
    #[prost(uint64, tag = "1")]
    pub load_timestamp: u64,
    #[prost(message, repeated, tag = "2")]
    pub cell_load_infos: Vec<CellLoadInformation>,
}
