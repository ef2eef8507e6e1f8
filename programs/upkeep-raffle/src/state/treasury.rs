use anchor_lang::prelude::*;

// 8 discriminator, 32 raffle, 1 bump
pub const TREASURY_ACCOUNT_SIZE: usize = 8 + 32 + 1;

/// Program-owned PDA holding the entrance fees of the current round.
#[account]
pub struct Treasury {
    pub raffle: Pubkey,
    pub bump: u8,
}

impl Treasury {
    /// Lamports above the rent-exempt minimum, i.e. the prize pot.
    pub fn held_balance(lamports: u64, rent: &Rent) -> u64 {
        lamports.saturating_sub(rent.minimum_balance(TREASURY_ACCOUNT_SIZE))
    }
}
