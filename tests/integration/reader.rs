//! Reader facade end to end over the in-memory store

use std::sync::Arc;
use std::thread;

use rnib::entities::{CellType, GlobalNbId, NodeType};
use rnib::storage::MemoryStorage;
use rnib::AsyncReader;

use crate::helpers::{reader_pool, seed_topology, seeded_cell_type, NS};

fn seeded_storage() -> Arc<MemoryStorage> {
    let storage = Arc::new(MemoryStorage::new());
    seed_topology(&storage);
    storage
}

#[test]
fn test_topology_queries() {
    let storage = seeded_storage();
    let pool = reader_pool(&storage, 2);
    let reader = pool.get().unwrap();

    let names: Vec<_> = reader
        .get_list_nodeb_ids()
        .unwrap()
        .into_iter()
        .map(|id| id.inventory_name)
        .collect();
    assert_eq!(
        names,
        vec!["enb_1", "enb_2", "gnb_1", "gnb_2", "gnb_3", "unknown_1"]
    );
    assert_eq!(reader.get_list_enb_ids().unwrap().len(), 2);
    assert_eq!(reader.get_list_gnb_ids().unwrap().len(), 3);
    assert_eq!(reader.get_count_gnb_list().unwrap(), 3);

    let by_id = reader
        .get_nodeb_by_global_nb_id(
            NodeType::Gnb,
            &GlobalNbId {
                plmn_id: "02f829".into(),
                nb_id: "g2".into(),
            },
        )
        .unwrap();
    assert_eq!(by_id, reader.get_nodeb("gnb_2").unwrap());

    for name in ["enb_1", "gnb_3"] {
        let cells = reader.get_cell_list(name).unwrap();
        assert_eq!(cells.cell_type(), seeded_cell_type(name));
        assert_eq!(cells.len(), 1);
    }

    assert!(reader.get_general_configuration().unwrap().enable_ric);
}

#[test]
fn test_e2t_lookup_is_best_effort() {
    let storage = seeded_storage();
    let pool = reader_pool(&storage, 1);
    let reader = pool.get().unwrap();

    let addresses = reader.get_e2t_addresses().unwrap();
    assert_eq!(addresses.len(), 2);

    let instances = reader.get_e2t_instances(&addresses).unwrap();
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].address, "10.0.2.15:38000");

    let err = reader.get_e2t_instance("10.0.2.16:38000").unwrap_err();
    assert!(err.is_internal());
}

#[test]
fn test_error_classification() {
    let storage = seeded_storage();
    let pool = reader_pool(&storage, 1);
    let reader = pool.get().unwrap();

    let err = reader.get_nodeb("missing").unwrap_err();
    assert_eq!(err.code(), 1);
    assert_eq!(
        err.to_string(),
        "1 RESOURCE_NOT_FOUND - entity of type NodebInfo not found. Key: RAN:missing"
    );

    let err = reader.get_cell_by_id(CellType::UnknownCell, "x").unwrap_err();
    assert_eq!(err.code(), 3);

    storage.add_member(NS, "GNB", &b"\xff\xff\xff"[..]);
    let err = reader.get_list_gnb_ids().unwrap_err();
    assert_eq!(err.code(), 2);
}

#[test]
fn test_readers_shared_across_threads() {
    let storage = seeded_storage();
    let pool = Arc::new(reader_pool(&storage, 2));

    let handles: Vec<_> = (0..6)
        .map(|i| {
            let pool = Arc::clone(&pool);
            thread::spawn(move || {
                let name = if i % 2 == 0 { "enb_1" } else { "gnb_1" };
                for _ in 0..50 {
                    let reader = pool.get().unwrap();
                    assert_eq!(reader.get_nodeb(name).unwrap().ran_name, name);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(pool.stats().created <= 2);
    pool.shutdown();
    assert!(storage.is_closed());
    assert!(pool.get().unwrap_err().is_internal());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_async_reader() {
    let storage = seeded_storage();
    let reader = AsyncReader::new(Arc::new(reader_pool(&storage, 2)));

    let calls: Vec<_> = ["enb_1", "enb_2", "gnb_1", "gnb_2", "gnb_3"]
        .into_iter()
        .map(|name| {
            let reader = reader.clone();
            tokio::spawn(async move { reader.get_nodeb(name).await })
        })
        .collect();

    for call in calls {
        assert!(call.await.unwrap().is_ok());
    }

    let count = reader
        .run(|reader| reader.get_count_gnb_list())
        .await
        .unwrap();
    assert_eq!(count, 3);
}
