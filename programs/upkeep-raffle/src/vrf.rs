use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use arrayref::array_ref;

/// Blocks the oracle waits before answering a request.
pub const REQUEST_CONFIRMATIONS: u16 = 3;
/// Random words delivered per request.
pub const NUM_WORDS: u32 = 1;

/// Request picked up by the off-chain oracle.
///
/// The oracle answers with `fulfill_random_words`, signed by the coordinator
/// key stored in the raffle config and carrying the same `request_id`.
#[event]
pub struct RandomWordsRequested {
    /// Oracle key identifier (gas lane)
    pub key_hash: [u8; 32],
    /// Identifier the fulfillment must echo back
    pub request_id: u64,
    /// Subscription charged for the request
    pub subscription_id: u64,
    /// Confirmations to wait before answering
    pub request_confirmations: u16,
    /// Compute budget for the callback
    pub callback_gas_limit: u32,
    /// Number of random words to deliver
    pub num_words: u32,
    /// The raffle waiting for the answer
    pub requester: Pubkey,
}

/// Derives the id of a randomness request.
///
/// The nonce makes every request from the same raffle unique.
pub fn request_id(
    key_hash: &[u8; 32],
    requester: &Pubkey,
    subscription_id: u64,
    nonce: u64,
) -> u64 {
    let digest = hashv(&[
        &key_hash[..],
        requester.as_ref(),
        &subscription_id.to_le_bytes(),
        &nonce.to_le_bytes(),
    ])
    .to_bytes();

    u64::from_le_bytes(*array_ref![digest, 0, 8])
}
