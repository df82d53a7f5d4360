//! # Inventory Index
//!
//! SKU lookup over a borrowed inventory snapshot.
//!
//! Built once per processor, so each line lookup is a hash probe instead
//! of a scan of the whole snapshot.
//!
//! ## Duplicate SKUs
//! The first valid record for a SKU wins; later records with the same SKU
//! are ignored. Records failing [`validate_inventory_item`] are left out,
//! so lines naming only such records resolve to "not found".

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::types::InventoryItem;
use crate::validation::validate_inventory_item;

/// Read-only SKU → record map over an inventory snapshot.
#[derive(Debug, Clone, Default)]
pub struct InventoryIndex<'a> {
    by_sku: HashMap<&'a str, &'a InventoryItem>,
}

impl<'a> InventoryIndex<'a> {
    /// Indexes `inventory`.
    pub fn build(inventory: &'a [InventoryItem]) -> Self {
        let mut by_sku = HashMap::with_capacity(inventory.len());
        let mut skipped = 0usize;

        for item in inventory {
            if let Err(e) = validate_inventory_item(item) {
                warn!(sku = %item.sku, error = %e, "Skipping invalid inventory record");
                skipped += 1;
                continue;
            }
            by_sku.entry(item.sku.as_str()).or_insert(item);
        }

        debug!(
            records = inventory.len(),
            indexed = by_sku.len(),
            skipped,
            "Inventory index built"
        );

        InventoryIndex { by_sku }
    }

    /// Returns the record for `sku`, if any.
    #[inline]
    pub fn get(&self, sku: &str) -> Option<&'a InventoryItem> {
        self.by_sku.get(sku).copied()
    }

    /// Number of distinct indexed SKUs.
    #[inline]
    pub fn len(&self) -> usize {
        self.by_sku.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_sku.is_empty()
    }
}
