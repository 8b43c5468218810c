//! Store key construction.
//!
//! Key formats are shared with every other consumer of the data layer, so the
//! prefixes and the `:` separator must never change:
//!
//! | Concept | Format |
//! |---------|--------|
//! | Cell by LTE id | `CELL:<cellId>` |
//! | Cell by NR id | `NRCELL:<cellId>` |
//! | Node by name | `RAN:<inventoryName>` |
//! | Node by global id | `<nodeType>:<plmnId>:<nbId>` |
//! | Cell by name and PCI | `PCI:<inventoryName>:<pci as hex>` |
//! | Load information | `LOAD:<inventoryName>` |
//! | E2T instance | `E2TInstance:<address>` |

use crate::error::{RNibError, Result};

/// Fixed key holding the JSON list of known E2T addresses.
pub const E2T_ADDRESSES_KEY: &str = "E2TAddresses";

/// Fixed key holding the JSON general configuration.
pub const GENERAL_CONFIGURATION_KEY: &str = "GENERAL";

const E2T_INSTANCE_PREFIX: &str = "E2TInstance";

fn require(value: &str, function: &str, param: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RNibError::validation(format!(
            "{}: empty {} received",
            function, param
        )));
    }
    Ok(())
}

/// Build the key of an LTE cell: `CELL:<cellId>`.
pub fn build_cell_id_key(cell_id: &str) -> Result<String> {
    require(cell_id, "build_cell_id_key", "cell id")?;
    Ok(format!("CELL:{}", cell_id))
}

/// Build the key of an NR cell: `NRCELL:<cellId>`.
pub fn build_nr_cell_id_key(cell_id: &str) -> Result<String> {
    require(cell_id, "build_nr_cell_id_key", "cell id")?;
    Ok(format!("NRCELL:{}", cell_id))
}

/// Build the key of a node by inventory name: `RAN:<inventoryName>`.
pub fn build_node_name_key(inventory_name: &str) -> Result<String> {
    require(inventory_name, "build_node_name_key", "inventory name")?;
    Ok(format!("RAN:{}", inventory_name))
}

/// Build the key of a node by global id: `<nodeType>:<plmnId>:<nbId>`.
///
/// Arguments are checked left to right; the first empty one is reported.
pub fn build_node_id_key(node_type: &str, plmn_id: &str, nb_id: &str) -> Result<String> {
    require(node_type, "build_node_id_key", "node type")?;
    require(plmn_id, "build_node_id_key", "plmn id")?;
    require(nb_id, "build_node_id_key", "nb id")?;
    Ok(format!("{}:{}:{}", node_type, plmn_id, nb_id))
}

/// Build the key of a cell by node name and PCI: `PCI:<inventoryName>:<pci>`.
///
/// The PCI is rendered as lowercase hex, zero-padded to at least two digits.
pub fn build_cell_name_pci_key(inventory_name: &str, pci: u32) -> Result<String> {
    require(inventory_name, "build_cell_name_pci_key", "inventory name")?;
    Ok(format!("PCI:{}:{:02x}", inventory_name, pci))
}

/// Build the key of a node's load information: `LOAD:<inventoryName>`.
pub fn build_ran_load_information_key(inventory_name: &str) -> Result<String> {
    require(inventory_name, "build_ran_load_information_key", "inventory name")?;
    Ok(format!("LOAD:{}", inventory_name))
}

/// Build the key of an E2T instance: `E2TInstance:<address>`.
pub fn build_e2t_instance_key(address: &str) -> Result<String> {
    require(address, "build_e2t_instance_key", "E2T address")?;
    Ok(format!("{}:{}", E2T_INSTANCE_PREFIX, address))
}

/// Map E2T addresses to instance keys, silently dropping empty addresses.
pub fn map_addresses_to_keys<A: AsRef<str>>(addresses: &[A]) -> Vec<String> {
    addresses
        .iter()
        .map(AsRef::as_ref)
        .filter(|address| !address.is_empty())
        .map(|address| format!("{}:{}", E2T_INSTANCE_PREFIX, address))
        .collect()
}
