//! Cell records.

/// Radio access technology of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CellType {
    UnknownCell = 0,
    LteCell = 1,
    NrCell = 2,
}

impl CellType {
    /// Wire name, e.g. `LTE_CELL`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::UnknownCell => "UNKNOWN_CELL",
            CellType::LteCell => "LTE_CELL",
            CellType::NrCell => "NR_CELL",
        }
    }
}

/// LTE cell served by an eNB.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServedCellInfo {
    #[prost(uint32, tag = "1")]
    pub pci: u32,
    #[prost(string, tag = "2")]
    pub cell_id: String,
    #[prost(string, tag = "3")]
    pub tac: String,
    #[prost(string, repeated, tag = "4")]
    pub broadcast_plmns: Vec<String>,
}

/// NR cell served by a gNB.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServedNrCell {
    #[prost(uint32, tag = "1")]
    pub nr_pci: u32,
    #[prost(string, tag = "2")]
    pub cell_id: String,
    #[prost(string, repeated, tag = "3")]
    pub served_plmns: Vec<String>,
}

/// Standalone cell record, stored under `CELL:`, `NRCELL:` and `PCI:` keys.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Cell {
    #[prost(enumeration = "CellType", tag = "1")]
    pub cell_type: i32,
    #[prost(oneof = "cell::Info", tags = "2, 3")]
    pub info: Option<cell::Info>,
}

pub mod cell {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Info {
        #[prost(message, tag = "2")]
        ServedCellInfo(super::ServedCellInfo),
        #[prost(message, tag = "3")]
        ServedNrCell(super::ServedNrCell),
    }
}

/// Cells served by one node: either all LTE or all NR, never both.
#[derive(Clone, Debug, PartialEq)]
pub enum Cells {
    Lte(Vec<ServedCellInfo>),
    Nr(Vec<ServedNrCell>),
}

impl Cells {
    pub fn cell_type(&self) -> CellType {
        match self {
            Cells::Lte(_) => CellType::LteCell,
            Cells::Nr(_) => CellType::NrCell,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Cells::Lte(cells) => cells.len(),
            Cells::Nr(cells) => cells.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
