//! # Transaction Construction
//!
//! Builds unsigned Deploy, Mint and Transfer payloads from an account's UTXOs.
//!
//! ## Selection
//!
//! UTXOs are taken in arena slot order until their sum covers the target.
//! Spending inputs are selected first; fee inputs come from the gas asset
//! excluding anything already selected.
//!
//! ## Fee I/O
//!
//! With a non-zero fee the fee outputs are `[receiver <- fee]` followed by a
//! change output to the owner when the selected sum exceeds the fee.
//!
//! ## Limit
//!
//! `inputs + outputs + feeInputs + feeOutputs` must not exceed `max_tx_utxo`.

use super::config::SystemConfig;
use super::errors::AccountError;
use super::utxo_set::UtxoSet;
use shared_types::{
    Amount, AssetId, Deploy, Input, Metadata, Mint, OmniAddress, OmniverseTx, Output, Transfer,
    Utxo, UtxoRef, GAS_ASSET_ID, MAX_TOKEN_NAME_BYTES,
};
use std::collections::HashSet;

/// Take UTXOs in order, skipping `reserved`, until `target` is covered.
///
/// Returns the selection and its sum, or `None` if everything together falls short.
pub fn select_covering<'a>(
    utxos: &'a [Utxo],
    target: Amount,
    reserved: &HashSet<UtxoRef>,
) -> Option<(Vec<&'a Utxo>, Amount)> {
    let mut selected = Vec::new();
    let mut sum: Amount = 0;
    for utxo in utxos {
        if sum >= target {
            break;
        }
        if reserved.contains(&utxo.outpoint()) {
            continue;
        }
        sum = sum.checked_add(utxo.amount)?;
        selected.push(utxo);
    }
    (sum >= target).then_some((selected, sum))
}

/// Fee inputs and outputs of one transaction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FeePart {
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
}

impl FeePart {
    fn count(&self) -> usize {
        self.inputs.len() + self.outputs.len()
    }
}

/// Payload builder over a snapshot of the account's UTXOs.
pub struct TxBuilder<'a> {
    utxos: &'a UtxoSet,
    config: &'a SystemConfig,
    owner: OmniAddress,
}

impl<'a> TxBuilder<'a> {
    pub fn new(utxos: &'a UtxoSet, config: &'a SystemConfig, owner: OmniAddress) -> Self {
        Self {
            utxos,
            config,
            owner,
        }
    }

    /// Unsigned Deploy paying only the fee.
    pub fn deploy(&self, metadata: Metadata) -> Result<OmniverseTx, AccountError> {
        let name_len = metadata.name.len();
        if name_len > MAX_TOKEN_NAME_BYTES {
            return Err(AccountError::TokenNameLengthExceedLimit(name_len));
        }
        let fee = self.fee(&HashSet::new())?;
        self.check_limit(fee.count())?;

        Ok(OmniverseTx::Deploy(Deploy {
            metadata,
            signature: Vec::new(),
            fee_inputs: fee.inputs,
            fee_outputs: fee.outputs,
        }))
    }

    /// Unsigned Mint of `outputs`; only fee inputs are consumed.
    pub fn mint(&self, asset_id: AssetId, outputs: Vec<Output>) -> Result<OmniverseTx, AccountError> {
        if asset_id == self.config.fee.asset_id || asset_id == GAS_ASSET_ID {
            return Err(AccountError::GasTokenCanNotBeMinted);
        }
        let fee = self.fee(&HashSet::new())?;
        self.check_limit(outputs.len() + fee.count())?;

        Ok(OmniverseTx::Mint(Mint {
            asset_id,
            signature: Vec::new(),
            outputs,
            fee_inputs: fee.inputs,
            fee_outputs: fee.outputs,
        }))
    }

    /// Unsigned Transfer of `outputs`, with change back to the owner.
    pub fn transfer(
        &self,
        asset_id: AssetId,
        mut outputs: Vec<Output>,
    ) -> Result<OmniverseTx, AccountError> {
        let not_enough = AccountError::TokenOfAAContractNotEnough(asset_id);
        let total = outputs
            .iter()
            .try_fold(0u128, |acc, o| acc.checked_add(o.amount))
            .ok_or_else(|| not_enough.clone())?;

        let (selected, sum) = select_covering(self.utxos.utxos(&asset_id), total, &HashSet::new())
            .ok_or(not_enough)?;
        let reserved: HashSet<UtxoRef> = selected.iter().map(|u| u.outpoint()).collect();
        let inputs: Vec<Input> = selected.into_iter().map(Input::from).collect();
        if sum > total {
            outputs.push(Output {
                owner: self.owner,
                amount: sum - total,
            });
        }

        let fee = self.fee(&reserved)?;
        self.check_limit(inputs.len() + outputs.len() + fee.count())?;

        Ok(OmniverseTx::Transfer(Transfer {
            asset_id,
            signature: Vec::new(),
            inputs,
            outputs,
            fee_inputs: fee.inputs,
            fee_outputs: fee.outputs,
        }))
    }

    fn fee(&self, reserved: &HashSet<UtxoRef>) -> Result<FeePart, AccountError> {
        let fee = &self.config.fee;
        if fee.amount == 0 {
            return Ok(FeePart::default());
        }
        let (selected, sum) = select_covering(self.utxos.utxos(&fee.asset_id), fee.amount, reserved)
            .ok_or(AccountError::TokenOfAAContractNotEnough(fee.asset_id))?;

        let mut outputs = vec![Output {
            owner: fee.receiver,
            amount: fee.amount,
        }];
        if sum > fee.amount {
            outputs.push(Output {
                owner: self.owner,
                amount: sum - fee.amount,
            });
        }
        Ok(FeePart {
            inputs: selected.into_iter().map(Input::from).collect(),
            outputs,
        })
    }

    fn check_limit(&self, count: usize) -> Result<(), AccountError> {
        if count > self.config.max_tx_utxo {
            return Err(AccountError::UTXONumberExceedLimit(count));
        }
        Ok(())
    }
}
