//! # Applying Committed Transactions
//!
//! Moves a committed transaction's effects into one account's `UtxoSet`.
//!
//! Only the account's own records change: inputs owned by its `OmniAddress`
//! that it holds are removed and outputs addressed to it are credited.
//! Output `k` of `outputs ++ feeOutputs` becomes UTXO `(txid, k)`. Spending
//! outputs carry the transaction's asset, fee outputs the fee asset.
//!
//! Callers run `check_credit` (and, for their own submissions,
//! `first_missing_input`) first; applying cannot fail.

use super::errors::AccountError;
use super::utxo_set::UtxoSet;
use shared_types::{Amount, AssetId, OmniAddress, OmniverseTx, TxId, Utxo, UtxoRef};
use std::collections::{HashMap, HashSet};

/// Net effect of one application, for logging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Applied {
    pub spent: usize,
    pub credited: usize,
}

/// Inputs owned by `owner`, paired with the asset they are held under.
fn own_spends(
    tx: &OmniverseTx,
    owner: OmniAddress,
    fee_asset: AssetId,
) -> impl Iterator<Item = (AssetId, UtxoRef)> + '_ {
    let spending = tx
        .asset_id()
        .into_iter()
        .flat_map(move |asset_id| tx.inputs().iter().map(move |i| (asset_id, i)));
    let fees = tx.fee_inputs().iter().map(move |i| (fee_asset, i));
    spending
        .chain(fees)
        .filter(move |(_, input)| input.owner == owner)
        .map(|(asset_id, input)| {
            (
                asset_id,
                UtxoRef {
                    txid: input.txid,
                    index: input.index,
                },
            )
        })
}

/// UTXOs the transaction creates for `owner`.
fn own_credits(
    tx: &OmniverseTx,
    txid: TxId,
    owner: OmniAddress,
    fee_asset: AssetId,
) -> impl Iterator<Item = Utxo> + '_ {
    let spending_asset = tx.asset_id();
    let spending = tx.outputs().iter().map(move |o| (spending_asset, o));
    let fees = tx.fee_outputs().iter().map(move |o| (Some(fee_asset), o));

    spending
        .chain(fees)
        .enumerate()
        .filter_map(move |(k, (asset_id, output))| {
            let asset_id = asset_id?;
            (output.owner == owner).then(|| Utxo {
                txid,
                index: k as u64,
                amount: output.amount,
                owner,
                asset_id,
            })
        })
}

/// First input owned by `owner` that `set` no longer holds.
pub fn first_missing_input(
    set: &UtxoSet,
    tx: &OmniverseTx,
    owner: OmniAddress,
    fee_asset: AssetId,
) -> Option<UtxoRef> {
    own_spends(tx, owner, fee_asset)
        .find(|(asset_id, outpoint)| !set.contains(asset_id, outpoint))
        .map(|(_, outpoint)| outpoint)
}

/// Fails if applying `tx` would push any balance past `Amount::MAX`.
///
/// Spends are netted out first, matching the order `apply_tx` uses.
pub fn check_credit(
    set: &UtxoSet,
    tx: &OmniverseTx,
    txid: TxId,
    owner: OmniAddress,
    fee_asset: AssetId,
) -> Result<(), AccountError> {
    let mut totals: HashMap<AssetId, Amount> = HashMap::new();
    let mut spent = HashSet::new();

    for (asset_id, outpoint) in own_spends(tx, owner, fee_asset) {
        let Some(utxo) = set.get(&asset_id, &outpoint) else {
            continue;
        };
        if spent.insert(outpoint) {
            let total = totals
                .entry(asset_id)
                .or_insert_with(|| set.balance(&asset_id));
            *total -= utxo.amount;
        }
    }

    for utxo in own_credits(tx, txid, owner, fee_asset) {
        let total = totals
            .entry(utxo.asset_id)
            .or_insert_with(|| set.balance(&utxo.asset_id));
        *total = total
            .checked_add(utxo.amount)
            .ok_or(AccountError::BalanceOverflow(utxo.asset_id))?;
    }
    Ok(())
}

pub fn apply_tx(
    set: &mut UtxoSet,
    tx: &OmniverseTx,
    txid: TxId,
    owner: OmniAddress,
    fee_asset: AssetId,
) -> Applied {
    let mut applied = Applied::default();

    for (asset_id, outpoint) in own_spends(tx, owner, fee_asset) {
        if set.remove(&asset_id, &outpoint).is_some() {
            applied.spent += 1;
        }
    }
    for utxo in own_credits(tx, txid, owner, fee_asset) {
        if set.insert(utxo) {
            applied.credited += 1;
        }
    }

    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Input, Mint, Output, Transfer, GAS_ASSET_ID};

    const ME: OmniAddress = OmniAddress([0x0A; 32]);
    const OTHER: OmniAddress = OmniAddress([0x0B; 32]);
    const TOKEN: AssetId = [0x01; 32];

    fn held(set: &mut UtxoSet, seq: u8, amount: u128, asset_id: AssetId) -> Input {
        let utxo = Utxo {
            txid: [seq; 32],
            index: 0,
            amount,
            owner: ME,
            asset_id,
        };
        let input = Input::from(&utxo);
        set.insert(utxo);
        input
    }

    #[test]
    fn test_mint_credits_own_outputs_with_global_numbering() {
        let mut set = UtxoSet::new();
        let fee_in = held(&mut set, 1, 1000, GAS_ASSET_ID);
        let tx = OmniverseTx::Mint(Mint {
            asset_id: TOKEN,
            signature: Vec::new(),
            outputs: vec![
                Output { owner: ME, amount: 10 },
                Output { owner: OTHER, amount: 10 },
            ],
            fee_inputs: vec![fee_in],
            fee_outputs: vec![
                Output { owner: OTHER, amount: 10 },
                Output { owner: ME, amount: 990 },
            ],
        });

        let applied = apply_tx(&mut set, &tx, [9u8; 32], ME, GAS_ASSET_ID);
        assert_eq!(applied, Applied { spent: 1, credited: 2 });

        assert_eq!(set.utxos(&TOKEN).len(), 1);
        assert_eq!(set.utxos(&TOKEN)[0].index, 0);
        let change = &set.utxos(&GAS_ASSET_ID)[0];
        assert_eq!(change.index, 3);
        assert_eq!(change.amount, 990);
    }

    #[test]
    fn test_transfer_removes_only_held_inputs() {
        let mut set = UtxoSet::new();
        let mine = held(&mut set, 1, 50, TOKEN);
        let foreign = Input {
            txid: [7u8; 32],
            index: 0,
            amount: 50,
            owner: OTHER,
        };
        let tx = OmniverseTx::Transfer(Transfer {
            asset_id: TOKEN,
            signature: Vec::new(),
            inputs: vec![mine, foreign],
            outputs: vec![Output { owner: OTHER, amount: 100 }],
            fee_inputs: Vec::new(),
            fee_outputs: Vec::new(),
        });

        let applied = apply_tx(&mut set, &tx, [9u8; 32], ME, GAS_ASSET_ID);
        assert_eq!(applied, Applied { spent: 1, credited: 0 });
        assert_eq!(set.balance(&TOKEN), 0);
    }

    #[test]
    fn test_missing_input_reported_under_fee_asset() {
        let mut set = UtxoSet::new();
        let fee_in = held(&mut set, 1, 1000, GAS_ASSET_ID);
        let tx = OmniverseTx::Mint(Mint {
            asset_id: TOKEN,
            signature: Vec::new(),
            outputs: Vec::new(),
            fee_inputs: vec![fee_in.clone()],
            fee_outputs: Vec::new(),
        });
        assert_eq!(first_missing_input(&set, &tx, ME, GAS_ASSET_ID), None);

        // same outpoint looked up under another fee asset is not held
        let outpoint = UtxoRef {
            txid: fee_in.txid,
            index: fee_in.index,
        };
        assert_eq!(first_missing_input(&set, &tx, ME, [0x77; 32]), Some(outpoint));

        set.remove(&GAS_ASSET_ID, &outpoint);
        assert_eq!(first_missing_input(&set, &tx, ME, GAS_ASSET_ID), Some(outpoint));
    }

    #[test]
    fn test_credit_past_max_balance_rejected() {
        let mut set = UtxoSet::new();
        held(&mut set, 1, 10, TOKEN);
        let tx = OmniverseTx::Mint(Mint {
            asset_id: TOKEN,
            signature: Vec::new(),
            outputs: vec![
                Output { owner: ME, amount: Amount::MAX - 10 },
                Output { owner: ME, amount: 1 },
            ],
            fee_inputs: Vec::new(),
            fee_outputs: Vec::new(),
        });
        assert_eq!(
            check_credit(&set, &tx, [9u8; 32], ME, GAS_ASSET_ID),
            Err(AccountError::BalanceOverflow(TOKEN))
        );
        assert_eq!(set.balance(&TOKEN), 10);
    }

    #[test]
    fn test_spends_are_netted_before_credit() {
        let mut set = UtxoSet::new();
        let input = held(&mut set, 1, 10, TOKEN);
        let tx = OmniverseTx::Transfer(Transfer {
            asset_id: TOKEN,
            signature: Vec::new(),
            inputs: vec![input],
            outputs: vec![Output { owner: ME, amount: Amount::MAX }],
            fee_inputs: Vec::new(),
            fee_outputs: Vec::new(),
        });
        assert_eq!(check_credit(&set, &tx, [9u8; 32], ME, GAS_ASSET_ID), Ok(()));
        apply_tx(&mut set, &tx, [9u8; 32], ME, GAS_ASSET_ID);
        assert_eq!(set.balance(&TOKEN), Amount::MAX);
    }
}
