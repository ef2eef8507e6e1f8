use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Raffle, Treasury},
};

/// Event emitted when a player enters the raffle
#[event]
pub struct RaffleEntered {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The player's address
    pub player: Pubkey,
}

/// Instruction to enter the current round
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `payment` - Lamports sent to the treasury; must cover the entrance fee
///
/// # Security Considerations
/// 1. Entry is refused unless the raffle is Open
/// 2. Payment below the entrance fee is refused
/// 3. Treasury must be the one recorded in the raffle
/// 4. Any amount above the fee stays in the pot
///
/// # Implementation Notes
/// - The player is recorded before the transfer; a failed transfer aborts the
///   whole instruction
/// - The same player may enter several times
pub fn enter_raffle(ctx: Context<EnterRaffle>, payment: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.raffle.enter(player, payment)?;

    let pre_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();

    anchor_lang::solana_program::program::invoke(
        &anchor_lang::solana_program::system_instruction::transfer(
            &player,
            &ctx.accounts.treasury.key(),
            payment,
        ),
        &[
            ctx.accounts.player.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
        ],
    )?;

    let post_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();
    verify_deposit(pre_transfer_balance, post_transfer_balance, payment)?;

    emit!(RaffleEntered {
        raffle: ctx.accounts.raffle.key(),
        player,
    });

    Ok(())
}

/// Fails unless the treasury gained exactly `payment` lamports.
pub fn verify_deposit(
    pre_transfer_balance: u64,
    post_transfer_balance: u64,
    payment: u64,
) -> Result<()> {
    let expected = pre_transfer_balance
        .checked_add(payment)
        .ok_or(RaffleError::Overflow)?;
    require!(
        post_transfer_balance == expected,
        RaffleError::TransferFailed
    );
    Ok(())
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    #[account(
        mut,
        has_one = treasury @ RaffleError::InvalidTreasury,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        seeds = [
            b"treasury",
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}
