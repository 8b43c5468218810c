//! Test helpers and utilities

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use prost::Message;
use rnib::config::ReaderConfig;
use rnib::entities::{
    nodeb_info, CellType, ConnectionStatus, E2TInstance, Enb, GlobalNbId, Gnb, NbIdentity,
    NodeType, NodebInfo, ServedCellInfo, ServedNrCell,
};
use rnib::storage::MemoryStorage;
use rnib::ReaderPool;

/// Namespace used by every seeded record.
pub const NS: &str = "e2Manager";

/// Counter for resources constructed and destroyed by a pool.
#[derive(Clone, Default)]
pub struct Lifecycle {
    pub constructed: Arc<AtomicUsize>,
    pub destroyed: Arc<AtomicUsize>,
}

impl Lifecycle {
    pub fn constructed(&self) -> usize {
        self.constructed.load(Ordering::SeqCst)
    }

    pub fn destroyed(&self) -> usize {
        self.destroyed.load(Ordering::SeqCst)
    }
}

/// Pool of readers sharing one in-memory store.
pub fn reader_pool(storage: &Arc<MemoryStorage>, size: usize) -> ReaderPool<Arc<MemoryStorage>> {
    let config = ReaderConfig::new(NS, NonZeroUsize::new(size).unwrap());
    let storage = Arc::clone(storage);
    ReaderPool::open(&config, move || Arc::clone(&storage))
}

pub fn identity(name: &str, nb_id: &str) -> NbIdentity {
    NbIdentity {
        inventory_name: name.into(),
        global_nb_id: Some(GlobalNbId {
            plmn_id: "02f829".into(),
            nb_id: nb_id.into(),
        }),
        connection_status: ConnectionStatus::Connected as i32,
        ..Default::default()
    }
}

pub fn enb(name: &str, cells: &[u32]) -> NodebInfo {
    NodebInfo {
        ran_name: name.into(),
        ip: "10.0.0.1".into(),
        port: 36422,
        connection_status: ConnectionStatus::Connected as i32,
        node_type: NodeType::Enb as i32,
        configuration: Some(nodeb_info::Configuration::Enb(Enb {
            served_cells: cells
                .iter()
                .map(|&pci| ServedCellInfo {
                    pci,
                    cell_id: format!("{}-cell-{}", name, pci),
                    ..Default::default()
                })
                .collect(),
        })),
        ..Default::default()
    }
}

pub fn gnb(name: &str, cells: &[u32]) -> NodebInfo {
    NodebInfo {
        ran_name: name.into(),
        ip: "10.0.0.2".into(),
        port: 38000,
        connection_status: ConnectionStatus::Connected as i32,
        node_type: NodeType::Gnb as i32,
        configuration: Some(nodeb_info::Configuration::Gnb(Gnb {
            served_nr_cells: cells
                .iter()
                .map(|&nr_pci| ServedNrCell {
                    nr_pci,
                    cell_id: format!("{}-nrcell-{}", name, nr_pci),
                    ..Default::default()
                })
                .collect(),
        })),
        ..Default::default()
    }
}

/// Seed a small topology: two eNBs, three gNBs, one unknown node and two
/// E2T instances, one of them corrupt.
pub fn seed_topology(storage: &MemoryStorage) {
    let enbs = [("enb_1", "e1"), ("enb_2", "e2")];
    let gnbs = [("gnb_1", "g1"), ("gnb_2", "g2"), ("gnb_3", "g3")];

    for (i, (name, nb_id)) in enbs.iter().enumerate() {
        let pci = i as u32 + 1;
        storage.set(NS, format!("RAN:{}", name), enb(name, &[pci]).encode_to_vec());
        storage.set(
            NS,
            format!("ENB:02f829:{}", nb_id),
            enb(name, &[pci]).encode_to_vec(),
        );
        storage.add_member(NS, "ENB", identity(name, nb_id).encode_to_vec());
    }

    for (i, (name, nb_id)) in gnbs.iter().enumerate() {
        let pci = i as u32 + 10;
        storage.set(NS, format!("RAN:{}", name), gnb(name, &[pci]).encode_to_vec());
        storage.set(
            NS,
            format!("GNB:02f829:{}", nb_id),
            gnb(name, &[pci]).encode_to_vec(),
        );
        storage.add_member(NS, "GNB", identity(name, nb_id).encode_to_vec());
    }

    storage.add_member(NS, "UNKNOWN", identity("unknown_1", "u1").encode_to_vec());

    let e2t = E2TInstance::new("10.0.2.15:38000", "e2term-1");
    storage.set(
        NS,
        "E2TInstance:10.0.2.15:38000",
        serde_json::to_vec(&e2t).unwrap(),
    );
    storage.set(NS, "E2TInstance:10.0.2.16:38000", "{not json");
    storage.set(
        NS,
        "E2TAddresses",
        serde_json::to_vec(&["10.0.2.15:38000", "10.0.2.16:38000"]).unwrap(),
    );
    storage.set(NS, "GENERAL", r#"{"enableRic":true}"#);
}

/// Cell type the seeded node `name` serves.
pub fn seeded_cell_type(name: &str) -> CellType {
    if name.starts_with("enb") {
        CellType::LteCell
    } else {
        CellType::NrCell
    }
}
