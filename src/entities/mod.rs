//! Domain records held in the shared data layer.
//!
//! Node, cell and load records are protobuf messages; E2T instances and the
//! general configuration are JSON documents.

mod cell;
mod e2t;
mod load;
mod nodeb;

pub use self::cell::{cell as cell_info, Cell, CellType, Cells, ServedCellInfo, ServedNrCell};
pub use e2t::{E2TInstance, E2TInstanceState, GeneralConfiguration};
pub use load::{CellLoadInformation, RanLoadInformation};
pub use nodeb::{
    nodeb_info, ConnectionStatus, Enb, GlobalNbId, Gnb, NbIdentity, NodeType, NodebInfo,
};
