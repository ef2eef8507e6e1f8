use crate::{
    error::RaffleError,
    state::{Raffle, RaffleConfig, Treasury, RAFFLE_ACCOUNT_SIZE, TREASURY_ACCOUNT_SIZE},
};
use anchor_lang::prelude::*;

/// Event emitted when a raffle is initialized
#[event]
pub struct RaffleInitialized {
    /// The pubkey of the created raffle
    pub raffle: Pubkey,
    /// Lamports required to enter
    pub entrance_fee: u64,
    /// Seconds between draws
    pub interval: u64,
    /// Signer allowed to deliver randomness
    pub vrf_coordinator: Pubkey,
    /// When the first round opened
    pub opened_at: i64,
}

/// Instruction to create a raffle and its treasury
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `entrance_fee` - Lamports a player pays to enter
/// * `interval` - Seconds that must pass between draws
/// * `key_hash` - Oracle key identifier used for every request
/// * `subscription_id` - Oracle subscription charged for requests
/// * `callback_gas_limit` - Compute budget granted to the oracle callback (must be > 0)
///
/// # Account Validations
/// * Raffle - New PDA with seeds ["raffle", creator_key]
/// * Treasury - New PDA with seeds ["treasury", raffle_key]
/// * VRF Coordinator - Becomes the only account allowed to fulfill randomness
///
/// # Implementation Notes
/// - The config is written once here and never modified
/// - The first round opens immediately and the interval counts from now
pub fn initialize_raffle(
    ctx: Context<InitializeRaffle>,
    entrance_fee: u64,
    interval: u64,
    key_hash: [u8; 32],
    subscription_id: u64,
    callback_gas_limit: u32,
) -> Result<()> {
    require!(callback_gas_limit > 0, RaffleError::InvalidCallbackGasLimit);

    let current_time = Clock::get()?.unix_timestamp;
    let config = RaffleConfig {
        entrance_fee,
        interval,
        vrf_coordinator: ctx.accounts.vrf_coordinator.key(),
        key_hash,
        subscription_id,
        callback_gas_limit,
    };

    ctx.accounts.raffle.set_inner(Raffle::new(
        config,
        ctx.accounts.treasury.key(),
        ctx.bumps.raffle,
        current_time,
    ));
    ctx.accounts.treasury.raffle = ctx.accounts.raffle.key();
    ctx.accounts.treasury.bump = ctx.bumps.treasury;

    emit!(RaffleInitialized {
        raffle: ctx.accounts.raffle.key(),
        entrance_fee,
        interval,
        vrf_coordinator: ctx.accounts.vrf_coordinator.key(),
        opened_at: current_time,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRaffle<'info> {
    #[account(
        init,
        payer = creator,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [
            b"raffle",
            creator.key().as_ref(),
        ],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        init,
        payer = creator,
        space = TREASURY_ACCOUNT_SIZE,
        seeds = [
            b"treasury",
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub creator: Signer<'info>,

    /// CHECK: Only its address is stored; the oracle signs fulfillments with this key.
    pub vrf_coordinator: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
