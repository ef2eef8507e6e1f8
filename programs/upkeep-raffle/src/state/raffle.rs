use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::config::{RaffleConfig, RAFFLE_CONFIG_SIZE},
    vrf::{NUM_WORDS, REQUEST_CONFIRMATIONS},
};

/// Upper bound on entries per round; the account is allocated for it up front.
pub const MAX_PLAYERS: usize = 200;

// Space calculation:
// 8 (discriminator) +
// RAFFLE_CONFIG_SIZE (config) +
// 32 (treasury) +
// 1 (raffle_state) +
// 4 + 32 * MAX_PLAYERS (players) +
// 8 (last_timestamp) +
// 33 (recent_winner: Option<Pubkey>) +
// 9 (pending_request: Option<u64>) +
// 8 (request_nonce) +
// 1 (bump)
pub const RAFFLE_ACCOUNT_SIZE: usize =
    8 + RAFFLE_CONFIG_SIZE + 32 + 1 + 4 + 32 * MAX_PLAYERS + 8 + 33 + 9 + 8 + 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaffleState {
    Open,
    Calculating,
}

#[account]
pub struct Raffle {
    pub config: RaffleConfig,
    pub treasury: Pubkey,
    pub raffle_state: RaffleState,
    pub players: Vec<Pubkey>,
    pub last_timestamp: i64,
    pub recent_winner: Option<Pubkey>,
    pub pending_request: Option<u64>,
    pub request_nonce: u64,
    pub bump: u8,
}

impl Raffle {
    pub fn new(config: RaffleConfig, treasury: Pubkey, bump: u8, now: i64) -> Self {
        Self {
            config,
            treasury,
            raffle_state: RaffleState::Open,
            players: Vec::new(),
            last_timestamp: now,
            recent_winner: None,
            pending_request: None,
            request_nonce: 0,
            bump,
        }
    }

    /// Records a paid entry for `player`.
    ///
    /// The state is checked before the payment, so any entry attempt during a
    /// draw reports `RoundNotOpen`.
    pub fn enter(&mut self, player: Pubkey, payment: u64) -> Result<()> {
        require!(
            self.raffle_state == RaffleState::Open,
            RaffleError::RoundNotOpen
        );
        require!(
            payment >= self.config.entrance_fee,
            RaffleError::InsufficientPayment
        );
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);

        self.players.push(player);
        Ok(())
    }

    /// Whether a draw may be started at `now` with `balance` lamports in the pot.
    ///
    /// All of the following must hold:
    /// 1. The raffle is open
    /// 2. Strictly more than `interval` seconds passed since the last draw
    /// 3. At least one player entered
    /// 4. The pot is not empty
    pub fn check_upkeep(&self, now: i64, balance: u64) -> bool {
        let is_open = self.raffle_state == RaffleState::Open;
        let time_passed = now
            .checked_sub(self.last_timestamp)
            .and_then(|elapsed| u64::try_from(elapsed).ok())
            .map_or(false, |elapsed| elapsed > self.config.interval);
        let has_players = !self.players.is_empty();
        let has_balance = balance > 0;

        is_open && time_passed && has_players && has_balance
    }

    /// Locks the round while `request_id` is outstanding with the oracle.
    pub fn begin_draw(&mut self, request_id: u64, now: i64, balance: u64) -> Result<()> {
        if !self.check_upkeep(now, balance) {
            msg!(
                "Upkeep not needed: balance {}, players {}, state {:?}",
                balance,
                self.players.len(),
                self.raffle_state
            );
            return err!(RaffleError::UpkeepNotNeeded);
        }

        self.request_nonce = self
            .request_nonce
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;
        self.raffle_state = RaffleState::Calculating;
        self.pending_request = Some(request_id);
        Ok(())
    }

    /// Selects the winner for a fulfilled request without touching state.
    pub fn pick_winner(&self, request_id: u64, random_words: &[u64]) -> Result<Pubkey> {
        require!(
            self.raffle_state == RaffleState::Calculating,
            RaffleError::RaffleNotCalculating
        );
        require!(
            self.pending_request == Some(request_id),
            RaffleError::UnknownRequest
        );
        let word = random_words.first().ok_or(RaffleError::NoRandomWords)?;
        let index = winner_index(*word, self.players.len())?;

        Ok(self.players[index])
    }

    /// Closes the round in favour of `winner` and reopens entries.
    pub fn complete_round(&mut self, winner: Pubkey, now: i64) {
        self.recent_winner = Some(winner);
        self.raffle_state = RaffleState::Open;
        self.players.clear();
        self.last_timestamp = now;
        self.pending_request = None;
    }

    pub fn entrance_fee(&self) -> u64 {
        self.config.entrance_fee
    }

    pub fn interval(&self) -> u64 {
        self.config.interval
    }

    pub fn player(&self, index: usize) -> Option<Pubkey> {
        self.players.get(index).copied()
    }

    pub fn number_of_players(&self) -> usize {
        self.players.len()
    }

    pub fn recent_winner(&self) -> Option<Pubkey> {
        self.recent_winner
    }

    pub fn raffle_state(&self) -> RaffleState {
        self.raffle_state
    }

    pub fn last_timestamp(&self) -> i64 {
        self.last_timestamp
    }

    pub fn num_words(&self) -> u32 {
        NUM_WORDS
    }

    pub fn request_confirmations(&self) -> u16 {
        REQUEST_CONFIRMATIONS
    }

    pub fn pending_request(&self) -> Option<u64> {
        self.pending_request
    }
}

/// Index of the winning player for a random word.
pub fn winner_index(random_word: u64, player_count: usize) -> Result<usize> {
    require!(player_count > 0, RaffleError::NoPlayers);
    Ok((random_word % player_count as u64) as usize)
}
