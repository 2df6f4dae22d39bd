use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_user_to_vault;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts required for depositing reward currency into a pool.
#[derive(Accounts)]
pub struct Distribute<'info> {
    /// The funder of the distribution; any account may fund a pool.
    #[account(mut)]
    pub funder: Signer<'info>,

    /// Artist whose pool receives the deposit.
    ///
    /// CHECK: Bound to the registry entry through the `artist_config` seeds.
    pub artist: UncheckedAccount<'info>,

    /// Global protocol configuration.
    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// Registry entry for the artist.
    #[account(
        seeds = [
            ARTIST_CONFIG_SEED.as_bytes(),
            artist.key().as_ref()
        ],
        bump = artist_config.bump,
        constraint = artist_config.registered @ ErrorCode::NotRegistered,
    )]
    pub artist_config: Box<Account<'info, ArtistConfig>>,

    /// Reward pool state for the artist.
    #[account(
        mut,
        seeds = [
            POOL_SEED.as_bytes(),
            artist.key().as_ref()
        ],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, PoolState>>,

    /// Reference currency mint.
    #[account(address = global_config.payment_mint @ ErrorCode::InvalidPaymentMint)]
    pub payment_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Reward vault the deposit moves into.
    #[account(mut, address = artist_config.reward_vault)]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Funder's reference currency account (debited).
    #[account(
        mut,
        associated_token::mint = payment_mint,
        associated_token::authority = funder,
        associated_token::token_program = token_program,
    )]
    pub funder_payment_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program interface.
    pub token_program: Interface<'info, TokenInterface>,
}

/// Deposits `amount` reward currency into the artist's pool.
///
/// O(1) regardless of staker count: only the global reward index moves;
/// stakers settle lazily at their next interaction. The index is advanced
/// before the currency is pulled in (checks-effects-interactions).
///
/// # Fails
/// - `ZeroAmount` for an empty deposit.
/// - `EmptyPool` when nothing is staked — currency paid into a staker-less
///   pool could never be claimed, so the deposit is refused rather than
///   silently stranded. Retry once staking resumes.
pub fn distribute(ctx: Context<Distribute>, amount: u64) -> Result<()> {
    let pool = &mut ctx.accounts.pool;

    let resulting_accumulator = pool.accrue(amount)?;

    transfer_from_user_to_vault(
        ctx.accounts.funder.to_account_info(),
        ctx.accounts.funder_payment_token.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.payment_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.payment_mint.decimals,
    )?;

    emit!(RewardsDistributed {
        funder: ctx.accounts.funder.key(),
        artist: ctx.accounts.artist.key(),
        amount,
        resulting_accumulator,
    });

    Ok(())
}
