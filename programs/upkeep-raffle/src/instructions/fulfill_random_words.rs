use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Raffle, Treasury},
};

/// Event emitted when a round is settled
#[event]
pub struct WinnerPicked {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The winner's address
    pub winner: Pubkey,
    /// Lamports paid to the winner
    pub prize: u64,
}

/// Oracle callback delivering the random words for a pending draw.
///
/// The winner is chosen as `random_words[0] % players`, paid the whole pot and
/// the raffle reopens. Only the configured VRF coordinator may sign, and only
/// for the request stored by `perform_upkeep`.
///
/// The winner is staged first, then paid, and the round is committed last. If
/// the payout fails the instruction aborts and the raffle stays Calculating.
pub fn fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<u64>,
) -> Result<()> {
    let winner = ctx.accounts.raffle.pick_winner(request_id, &random_words)?;
    require_keys_eq!(
        ctx.accounts.winner.key(),
        winner,
        RaffleError::WinnerAccountMismatch
    );

    let rent = Rent::get()?;
    let treasury_account = ctx.accounts.treasury.to_account_info();
    let prize = Treasury::held_balance(treasury_account.lamports(), &rent);
    pay_winner(
        &treasury_account,
        &ctx.accounts.winner.to_account_info(),
        prize,
        &rent,
    )?;

    let clock = Clock::get()?;
    ctx.accounts
        .raffle
        .complete_round(winner, clock.unix_timestamp);

    msg!("Winner {} paid {} lamports", winner, prize);
    emit!(WinnerPicked {
        raffle: ctx.accounts.raffle.key(),
        winner,
        prize,
    });

    Ok(())
}

/// Moves `prize` lamports from the treasury PDA to the winner.
///
/// Checked before any lamports move: the treasury must hold the prize and the
/// winner must end up rent exempt, since the runtime rejects a credit that
/// leaves the recipient below its minimum balance.
pub fn pay_winner<'info>(
    treasury: &AccountInfo<'info>,
    winner: &AccountInfo<'info>,
    prize: u64,
    rent: &Rent,
) -> Result<()> {
    require!(treasury.lamports() >= prize, RaffleError::PayoutFailed);
    let winner_balance = winner
        .lamports()
        .checked_add(prize)
        .ok_or(RaffleError::PayoutFailed)?;
    require!(
        rent.is_exempt(winner_balance, winner.data_len()),
        RaffleError::PayoutFailed
    );

    // Direct lamport moves only work because the treasury is owned by this program.
    treasury.sub_lamports(prize)?;
    winner.add_lamports(prize)?;

    Ok(())
}

/// Accounts required for the fulfill_random_words instruction
#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    /// The raffle waiting for randomness
    #[account(
        mut,
        has_one = treasury @ RaffleError::InvalidTreasury,
        constraint = raffle.config.vrf_coordinator == vrf_coordinator.key() @ RaffleError::NotVrfCoordinator,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Treasury paying the prize, PDA with seeds ["treasury", raffle_key]
    #[account(
        mut,
        seeds = [
            b"treasury",
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// The oracle's signing key
    pub vrf_coordinator: Signer<'info>,

    /// CHECK: Compared against the selected player in the handler.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}
