//! # Inclusion Policies
//!
//! | Policy | Oracle needed | customData | Accepts when |
//! |--------|---------------|------------|--------------|
//! | `LocalTrusted` | no | ignored | always |
//! | `BeaconProof` | yes | non-empty | oracle reports the txid included |

use crate::ports::inbound::InclusionPolicy;
use crate::ports::outbound::InclusionOracle;
use shared_types::TxId;
use tracing::debug;

/// Origin and destination are the same ledger; no external proof needed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalTrusted;

impl InclusionPolicy for LocalTrusted {
    fn name(&self) -> &'static str {
        "local-trusted"
    }

    fn is_included(
        &self,
        _oracle: Option<&dyn InclusionOracle>,
        _txid: &TxId,
        _custom_data: &[u8],
    ) -> bool {
        true
    }
}

/// Require a positive state-keeper answer for the txid and its proof context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BeaconProof;

impl InclusionPolicy for BeaconProof {
    fn name(&self) -> &'static str {
        "beacon-proof"
    }

    fn is_included(
        &self,
        oracle: Option<&dyn InclusionOracle>,
        txid: &TxId,
        custom_data: &[u8],
    ) -> bool {
        let Some(oracle) = oracle else {
            debug!("[oa-04] No state keeper bound");
            return false;
        };
        if custom_data.is_empty() {
            debug!("[oa-04] Missing proof context");
            return false;
        }
        oracle.is_included(txid, custom_data)
    }
}
