use anchor_lang::prelude::*;

// 8 entrance_fee + 8 interval + 32 vrf_coordinator + 32 key_hash + 8 subscription_id + 4 callback_gas_limit
pub const RAFFLE_CONFIG_SIZE: usize = 8 + 8 + 32 + 32 + 8 + 4;

/// Parameters fixed when a raffle is initialized. Nothing writes them afterwards.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct RaffleConfig {
    /// Lamports a player must pay to enter
    pub entrance_fee: u64,
    /// Minimum number of seconds between two draws
    pub interval: u64,
    /// The only signer allowed to deliver random words
    pub vrf_coordinator: Pubkey,
    /// Oracle key identifier (gas lane)
    pub key_hash: [u8; 32],
    /// Oracle subscription that pays for requests
    pub subscription_id: u64,
    /// Compute budget the oracle may spend on the callback
    pub callback_gas_limit: u32,
}
