use anchor_lang::prelude::*;
use instructions::*;

pub mod error;
pub mod instructions;
pub mod state;
pub mod vrf;

declare_id!("UpKRfLqJ7vq2h1MZsWdtNn4cbYjsrk8SxG3dDfXhJ5X");

#[program]
pub mod upkeep_raffle {
    use super::*;

    pub fn initialize_raffle(
        ctx: Context<InitializeRaffle>,
        entrance_fee: u64,
        interval: u64,
        key_hash: [u8; 32],
        subscription_id: u64,
        callback_gas_limit: u32,
    ) -> Result<()> {
        instructions::initialize_raffle::initialize_raffle(
            ctx,
            entrance_fee,
            interval,
            key_hash,
            subscription_id,
            callback_gas_limit,
        )
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, payment: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, payment)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
        instructions::check_upkeep::check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
        instructions::perform_upkeep::perform_upkeep(ctx)
    }

    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_words: Vec<u64>,
    ) -> Result<()> {
        instructions::fulfill_random_words::fulfill_random_words(ctx, request_id, random_words)
    }
}
