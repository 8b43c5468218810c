//! Typed read access to RAN node state.
//!
//! [`RNibReader`] turns typed requests into key lookups against a
//! [`SyncStorage`], decodes the payloads and classifies every failure as an
//! [`RNibError`]:
//!
//! - invalid identifiers fail with `Validation` before the store is touched
//! - store failures and undecodable payloads fail with `Internal`
//! - absent keys fail with `ResourceNotFound`
//!
//! # Variants
//!
//! | Type | Store handle | Use |
//! |------|--------------|-----|
//! | [`RNibReader`] | owned directly | single-threaded callers, tests |
//! | [`ReaderPool`] / [`PooledReader`] | one per pooled reader | concurrent callers |
//! | [`AsyncReader`] | pooled, on tokio's blocking pool | async controllers |
//!
//! # Example
//!
//! ```rust,ignore
//! use rnib::reader::RNibReader;
//! use rnib::storage::MemoryStorage;
//!
//! let reader = RNibReader::new(MemoryStorage::new(), "e2Manager");
//! let nodeb = reader.get_nodeb("gnb_208_092_303030")?;
//! ```

mod async_reader;
mod pooled;

pub use async_reader::AsyncReader;
pub use pooled::{PooledReader, ReaderPool};

use std::collections::HashMap;

use bytes::Bytes;
use prost::Message;
use serde::de::DeserializeOwned;

use crate::entities::{
    nodeb_info, Cell, CellType, Cells, E2TInstance, GeneralConfiguration, GlobalNbId, NbIdentity,
    NodeType, NodebInfo, RanLoadInformation,
};
use crate::error::{RNibError, Result};
use crate::keys;
use crate::storage::SyncStorage;

/// Reader over a single store handle.
#[derive(Debug)]
pub struct RNibReader<S> {
    storage: S,
    namespace: String,
}

impl<S: SyncStorage> RNibReader<S> {
    /// Create a reader issuing every call in `namespace`.
    pub fn new(storage: S, namespace: impl Into<String>) -> Self {
        Self {
            storage,
            namespace: namespace.into(),
        }
    }

    /// Get the store namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Get the underlying store handle.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Get a node by inventory name.
    pub fn get_nodeb(&self, inventory_name: &str) -> Result<NodebInfo> {
        let key = keys::build_node_name_key(inventory_name)?;
        self.get_proto(&key, "NodebInfo")
    }

    /// Get a node by type and global id.
    pub fn get_nodeb_by_global_nb_id(
        &self,
        node_type: NodeType,
        global_nb_id: &GlobalNbId,
    ) -> Result<NodebInfo> {
        let key = keys::build_node_id_key(
            node_type.as_str(),
            &global_nb_id.plmn_id,
            &global_nb_id.nb_id,
        )?;
        self.get_proto(&key, "NodebInfo")
    }

    /// Get the cells served by a node.
    ///
    /// Returns LTE cells for a populated eNB, NR cells for a populated gNB,
    /// and `ResourceNotFound` when the node serves no cells.
    pub fn get_cell_list(&self, inventory_name: &str) -> Result<Cells> {
        let nodeb = self.get_nodeb(inventory_name)?;
        match nodeb.configuration {
            Some(nodeb_info::Configuration::Enb(enb)) if !enb.served_cells.is_empty() => {
                Ok(Cells::Lte(enb.served_cells))
            }
            Some(nodeb_info::Configuration::Gnb(gnb)) if !gnb.served_nr_cells.is_empty() => {
                Ok(Cells::Nr(gnb.served_nr_cells))
            }
            _ => Err(RNibError::resource_not_found(format!(
                "get_cell_list: served cells not found. Responding node RAN name: {}",
                inventory_name
            ))),
        }
    }

    /// Get the identities of every gNB.
    pub fn get_list_gnb_ids(&self) -> Result<Vec<NbIdentity>> {
        self.get_identities(&[NodeType::Gnb])
    }

    /// Get the identities of every eNB.
    pub fn get_list_enb_ids(&self) -> Result<Vec<NbIdentity>> {
        self.get_identities(&[NodeType::Enb])
    }

    /// Get the identities of every node: eNBs, then gNBs, then unknown nodes.
    pub fn get_list_nodeb_ids(&self) -> Result<Vec<NbIdentity>> {
        self.get_identities(&[NodeType::Enb, NodeType::Gnb, NodeType::Unknown])
    }

    /// Count the gNBs.
    pub fn get_count_gnb_list(&self) -> Result<usize> {
        let size = self
            .storage
            .group_size(&self.namespace, NodeType::Gnb.as_str())
            .map_err(RNibError::internal)?;
        usize::try_from(size).map_err(RNibError::internal)
    }

    /// Get a cell by node inventory name and physical cell id.
    pub fn get_cell(&self, inventory_name: &str, pci: u32) -> Result<Cell> {
        let key = keys::build_cell_name_pci_key(inventory_name, pci)?;
        self.get_proto(&key, "Cell")
    }

    /// Get a cell by type and cell id.
    pub fn get_cell_by_id(&self, cell_type: CellType, cell_id: &str) -> Result<Cell> {
        let key = match cell_type {
            CellType::LteCell => keys::build_cell_id_key(cell_id)?,
            CellType::NrCell => keys::build_nr_cell_id_key(cell_id)?,
            CellType::UnknownCell => {
                return Err(RNibError::validation(format!(
                    "get_cell_by_id: invalid cell type: {}",
                    cell_type.as_str()
                )))
            }
        };
        self.get_proto(&key, "Cell")
    }

    /// Get the load information of a node.
    pub fn get_ran_load_information(&self, inventory_name: &str) -> Result<RanLoadInformation> {
        let key = keys::build_ran_load_information_key(inventory_name)?;
        self.get_proto(&key, "RanLoadInformation")
    }

    /// Get one E2T instance by address.
    pub fn get_e2t_instance(&self, address: &str) -> Result<E2TInstance> {
        let key = keys::build_e2t_instance_key(address)?;
        self.get_json(&key, "E2TInstance")
    }

    /// Get the E2T instances at `addresses`, in address order.
    ///
    /// Best effort: empty addresses, absent keys and undecodable payloads
    /// are skipped. Fails with `ResourceNotFound` only when nothing is left.
    pub fn get_e2t_instances<A: AsRef<str>>(&self, addresses: &[A]) -> Result<Vec<E2TInstance>> {
        let keys = keys::map_addresses_to_keys(addresses);
        if keys.is_empty() {
            return Err(RNibError::resource_not_found(
                "get_e2t_instances: no E2T address received",
            ));
        }

        let data = self.fetch(&keys)?;
        let instances: Vec<E2TInstance> = keys
            .iter()
            .filter_map(|key| data.get(key).map(|value| (key, value)))
            .filter_map(|(key, value)| match serde_json::from_slice(value) {
                Ok(instance) => Some(instance),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "skipping undecodable E2T instance");
                    None
                }
            })
            .collect();

        if instances.is_empty() {
            return Err(RNibError::resource_not_found(
                "get_e2t_instances: E2T instances not found",
            ));
        }
        Ok(instances)
    }

    /// Get the addresses of every known E2T instance.
    pub fn get_e2t_addresses(&self) -> Result<Vec<String>> {
        self.get_json(keys::E2T_ADDRESSES_KEY, "E2TAddresses")
    }

    /// Get the platform-wide configuration.
    pub fn get_general_configuration(&self) -> Result<GeneralConfiguration> {
        self.get_json(keys::GENERAL_CONFIGURATION_KEY, "GeneralConfiguration")
    }

    /// Close the underlying store handle.
    pub fn close(&self) -> Result<()> {
        self.storage.close().map_err(RNibError::internal)
    }

    fn fetch(&self, keys: &[String]) -> Result<HashMap<String, Bytes>> {
        tracing::debug!(namespace = %self.namespace, keys = ?keys, "reading keys");
        self.storage
            .get(&self.namespace, keys)
            .map_err(RNibError::internal)
    }

    fn get_value(&self, key: &str, entity: &str) -> Result<Bytes> {
        let mut data = self.fetch(&[key.to_string()])?;
        data.remove(key).ok_or_else(|| {
            RNibError::resource_not_found(format!(
                "entity of type {} not found. Key: {}",
                entity, key
            ))
        })
    }

    fn get_proto<M: Message + Default>(&self, key: &str, entity: &str) -> Result<M> {
        let value = self.get_value(key, entity)?;
        M::decode(value).map_err(RNibError::internal)
    }

    fn get_json<M: DeserializeOwned>(&self, key: &str, entity: &str) -> Result<M> {
        let value = self.get_value(key, entity)?;
        serde_json::from_slice(&value).map_err(RNibError::internal)
    }

    /// Read `groups` and decode every member. One bad member fails the call.
    fn get_identities(&self, groups: &[NodeType]) -> Result<Vec<NbIdentity>> {
        let mut members = Vec::new();
        for group in groups {
            let group_members = self
                .storage
                .get_members(&self.namespace, group.as_str())
                .map_err(RNibError::internal)?;
            members.extend(group_members);
        }

        members
            .iter()
            .map(|member| NbIdentity::decode(member.as_ref()).map_err(RNibError::internal))
            .collect()
    }
}
