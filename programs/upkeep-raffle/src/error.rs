use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    #[msg("Payment is below the entrance fee")]
    InsufficientPayment,
    #[msg("Raffle is not open for entries")]
    RoundNotOpen,
    #[msg("Upkeep is not needed")]
    UpkeepNotNeeded,
    #[msg("Prize transfer to the winner failed")]
    PayoutFailed,
    #[msg("Raffle has reached its maximum number of players")]
    RaffleFull,
    #[msg("Only the configured VRF coordinator can fulfill randomness")]
    NotVrfCoordinator,
    #[msg("Raffle is not waiting for randomness")]
    RaffleNotCalculating,
    #[msg("Request id does not match the pending randomness request")]
    UnknownRequest,
    #[msg("No random words were supplied")]
    NoRandomWords,
    #[msg("Raffle has no players")]
    NoPlayers,
    #[msg("Winner account does not match the selected player")]
    WinnerAccountMismatch,
    InvalidTreasury,
    #[msg("Entrance fee transfer failed")]
    TransferFailed,
    #[msg("Callback gas limit must be greater than zero")]
    InvalidCallbackGasLimit,
}
