//! # UTXO Set
//!
//! Per-asset arenas of unspent outputs.
//!
//! Each arena is a dense `Vec<Utxo>` plus an `outpoint -> slot` index.
//! Removal swaps the last slot into the vacated one, so spends are O(1) and
//! iteration order (slot order) is deterministic. A running total per asset
//! is kept in step with every insert and removal and never exceeds
//! `Amount::MAX`.

use shared_types::{Amount, AssetId, Utxo, UtxoRef};
use std::collections::HashMap;

/// Unspent outputs of one asset.
#[derive(Debug, Default, Clone)]
struct AssetArena {
    slots: Vec<Utxo>,
    index: HashMap<UtxoRef, usize>,
    total: Amount,
}

impl AssetArena {
    fn insert(&mut self, utxo: Utxo) -> bool {
        let outpoint = utxo.outpoint();
        if self.index.contains_key(&outpoint) {
            return false;
        }
        let Some(total) = self.total.checked_add(utxo.amount) else {
            return false;
        };
        self.total = total;
        self.index.insert(outpoint, self.slots.len());
        self.slots.push(utxo);
        true
    }

    fn remove(&mut self, outpoint: &UtxoRef) -> Option<Utxo> {
        let slot = self.index.remove(outpoint)?;
        let removed = self.slots.swap_remove(slot);
        if let Some(moved) = self.slots.get(slot) {
            self.index.insert(moved.outpoint(), slot);
        }
        self.total -= removed.amount;
        Some(removed)
    }
}

/// All unspent outputs held by one account, keyed by asset.
#[derive(Debug, Default, Clone)]
pub struct UtxoSet {
    assets: HashMap<AssetId, AssetArena>,
}

impl UtxoSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a UTXO. Returns `false` if its outpoint is already present or the
    /// asset total would overflow.
    pub fn insert(&mut self, utxo: Utxo) -> bool {
        self.assets.entry(utxo.asset_id).or_default().insert(utxo)
    }

    /// Remove and return the UTXO at `outpoint`, if held.
    pub fn remove(&mut self, asset_id: &AssetId, outpoint: &UtxoRef) -> Option<Utxo> {
        self.assets.get_mut(asset_id)?.remove(outpoint)
    }

    pub fn get(&self, asset_id: &AssetId, outpoint: &UtxoRef) -> Option<&Utxo> {
        let arena = self.assets.get(asset_id)?;
        arena.index.get(outpoint).map(|&slot| &arena.slots[slot])
    }

    pub fn contains(&self, asset_id: &AssetId, outpoint: &UtxoRef) -> bool {
        self.get(asset_id, outpoint).is_some()
    }

    /// UTXOs of `asset_id` in slot order.
    pub fn utxos(&self, asset_id: &AssetId) -> &[Utxo] {
        self.assets
            .get(asset_id)
            .map(|a| a.slots.as_slice())
            .unwrap_or(&[])
    }

    /// Sum of the amounts of `asset_id`.
    pub fn balance(&self, asset_id: &AssetId) -> Amount {
        self.assets.get(asset_id).map(|a| a.total).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.assets.values().map(|a| a.slots.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
