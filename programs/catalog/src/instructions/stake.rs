use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_user_to_vault;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts required for staking share units into an artist's reward pool.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The staking account (pays for record creation on first stake).
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Artist whose pool is being staked into.
    ///
    /// CHECK: Bound to the registry entry through the `artist_config` seeds.
    pub artist: UncheckedAccount<'info>,

    /// Registry entry for the artist; must be registered.
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

    /// Per-staker record (created lazily on first stake).
    #[account(
        init_if_needed,
        seeds = [
            STAKER_INFO_SEED.as_bytes(),
            artist.key().as_ref(),
            owner.key().as_ref()
        ],
        bump,
        payer = owner,
        space = StakerInfo::LEN
    )]
    pub staker_info: Box<Account<'info, StakerInfo>>,

    /// Per-artist share unit mint.
    #[account(address = artist_config.share_mint)]
    pub share_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Pool custody vault the staked units move into.
    #[account(mut, address = artist_config.stake_vault)]
    pub stake_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Owner's share unit account (debited).
    #[account(
        mut,
        associated_token::mint = share_mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program,
    )]
    pub owner_share_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program interface.
    pub token_program: Interface<'info, TokenInterface>,

    /// Associated Token Program.
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// System Program (for record creation).
    pub system_program: Program<'info, System>,
}

/// Stakes `amount` share units.
///
/// Settlement happens first: rewards accrued on the existing stake are
/// folded into the claimable balance before the stake record changes, so
/// the new units only share in distributions made after this call. All
/// bookkeeping is committed before the token transfer.
pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let staker_info = &mut ctx.accounts.staker_info;

    // --- Lazy init of the per-staker record ---
    if staker_info.owner == Pubkey::default() {
        staker_info.bump = ctx.bumps.staker_info;
        staker_info.owner = ctx.accounts.owner.key();
        staker_info.artist = ctx.accounts.artist.key();
        staker_info.reward_per_share_completed = pool.reward_per_share_stored;
    }

    // --- Settle, then record the stake ---
    pool.record_stake(staker_info, amount)?;

    // --- Pull the units into pool custody ---
    transfer_from_user_to_vault(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_share_token.to_account_info(),
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.share_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.share_mint.decimals,
    )?;

    emit!(Staked {
        owner: ctx.accounts.owner.key(),
        artist: ctx.accounts.artist.key(),
        amount,
        total_staked: ctx.accounts.pool.total_staked,
        resulting_accumulator: ctx.accounts.pool.reward_per_share_stored,
    });

    Ok(())
}
