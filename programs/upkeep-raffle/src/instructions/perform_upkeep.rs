use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Raffle, Treasury},
    vrf::{self, RandomWordsRequested, NUM_WORDS, REQUEST_CONFIRMATIONS},
};

/// Event emitted when a draw starts
#[event]
pub struct RequestedRaffleWinner {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Id of the randomness request the fulfillment must answer
    pub request_id: u64,
}

/// Starts a draw by requesting randomness from the oracle.
/// Anyone may call it; in practice the upkeep scheduler does once
/// `check_upkeep` reports true.
///
/// Execution requirements:
/// 1. The raffle must be in Open state
/// 2. More than `interval` seconds passed since the last draw
/// 3. At least one player entered
/// 4. The treasury holds lamports above its rent-exempt minimum
///
/// After execution:
/// - The raffle is Calculating and entries are refused
/// - The request id is stored as the pending request
/// - `RandomWordsRequested` is emitted for the oracle
///
/// # Errors
/// - `UpkeepNotNeeded` if any requirement fails; balance, player count and
///   state are written to the program log
/// - `InvalidTreasury` if the treasury does not belong to the raffle
pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    let clock = Clock::get()?;
    let balance = Treasury::held_balance(
        ctx.accounts.treasury.to_account_info().lamports(),
        &Rent::get()?,
    );
    let raffle_key = ctx.accounts.raffle.key();
    let raffle = &mut ctx.accounts.raffle;

    let request_id = vrf::request_id(
        &raffle.config.key_hash,
        &raffle_key,
        raffle.config.subscription_id,
        raffle.request_nonce,
    );
    raffle.begin_draw(request_id, clock.unix_timestamp, balance)?;

    emit!(RandomWordsRequested {
        key_hash: raffle.config.key_hash,
        request_id,
        subscription_id: raffle.config.subscription_id,
        request_confirmations: REQUEST_CONFIRMATIONS,
        callback_gas_limit: raffle.config.callback_gas_limit,
        num_words: NUM_WORDS,
        requester: raffle_key,
    });
    emit!(RequestedRaffleWinner {
        raffle: raffle_key,
        request_id,
    });

    Ok(())
}

/// Accounts required for the perform_upkeep instruction
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// The raffle to draw; eligibility is checked in the handler
    #[account(
        mut,
        has_one = treasury @ RaffleError::InvalidTreasury,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Treasury holding the pot, PDA with seeds ["treasury", raffle_key]
    #[account(
        seeds = [
            b"treasury",
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,
}
