//! Registration helpers for tests.

use crate::domain::registration_message;
use oa_01_signature_domain::test_utils::TestSigner;
use shared_types::Address;

/// One registration signature per signer, each authorizing `caller`.
pub fn registration_signatures(
    signers: &[TestSigner],
    caller: &Address,
    chain_id: u64,
) -> Vec<Vec<u8>> {
    let message = registration_message(caller, chain_id);
    signers
        .iter()
        .map(|s| s.sign_personal(message.as_bytes()))
        .collect()
}
