use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Raffle, Treasury},
};

/// Reports whether `perform_upkeep` would start a draw right now.
///
/// Read-only; the result is returned as instruction return data so a scheduler
/// can simulate this instruction before submitting `perform_upkeep`.
pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    let balance = Treasury::held_balance(
        ctx.accounts.treasury.to_account_info().lamports(),
        &Rent::get()?,
    );

    let upkeep_needed = ctx.accounts.raffle.check_upkeep(now, balance);
    msg!("Upkeep needed: {}", upkeep_needed);

    Ok(upkeep_needed)
}

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(has_one = treasury @ RaffleError::InvalidTreasury)]
    pub raffle: Account<'info, Raffle>,

    #[account(
        seeds = [
            b"treasury",
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,
}
