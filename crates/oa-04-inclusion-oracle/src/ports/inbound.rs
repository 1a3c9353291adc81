//! # Inbound Ports

use crate::ports::outbound::InclusionOracle;
use shared_types::TxId;

/// Decides whether an inbound txid counts as finalized on its origin chain.
pub trait InclusionPolicy: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// `oracle` is the currently bound state keeper, if any.
    fn is_included(
        &self,
        oracle: Option<&dyn InclusionOracle>,
        txid: &TxId,
        custom_data: &[u8],
    ) -> bool;
}
