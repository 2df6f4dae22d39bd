use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_pool_vault_to_user;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts required for withdrawing staked share units.
#[derive(Accounts)]
pub struct Unstake<'info> {
    /// The withdrawing staker.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Artist whose pool is being withdrawn from.
    ///
    /// CHECK: Bound to the registry entry through the `artist_config` seeds.
    pub artist: UncheckedAccount<'info>,

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

    /// Program authority PDA (signs the vault transfer).
    ///
    /// CHECK: PDA derivation enforced by seeds; used only as a signer.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

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

    /// Per-staker record (must already exist).
    #[account(
        mut,
        seeds = [
            STAKER_INFO_SEED.as_bytes(),
            artist.key().as_ref(),
            owner.key().as_ref()
        ],
        bump = staker_info.bump,
    )]
    pub staker_info: Box<Account<'info, StakerInfo>>,

    /// Per-artist share unit mint.
    #[account(address = artist_config.share_mint)]
    pub share_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Pool custody vault the units return from.
    #[account(mut, address = artist_config.stake_vault)]
    pub stake_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Owner's share unit account (credited).
    #[account(
        mut,
        associated_token::mint = share_mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program,
    )]
    pub owner_share_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program interface.
    pub token_program: Interface<'info, TokenInterface>,
}

/// Withdraws `amount` staked share units.
///
/// Rewards accrued on the full stake are settled into the claimable
/// balance before the record shrinks; the withdrawal never forfeits
/// anything already earned. The record persists at zero stake.
///
/// # Fails
/// - `NoStake` when the record holds nothing.
/// - `InsufficientStake` when `amount` exceeds the record.
pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let staker_info = &mut ctx.accounts.staker_info;

    // --- Settle, then shrink the record ---
    pool.record_unstake(staker_info, amount)?;

    // --- Return the units from pool custody ---
    transfer_from_pool_vault_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.owner_share_token.to_account_info(),
        ctx.accounts.share_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.share_mint.decimals,
        &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]],
    )?;

    emit!(Unstaked {
        owner: ctx.accounts.owner.key(),
        artist: ctx.accounts.artist.key(),
        amount,
        total_staked: ctx.accounts.pool.total_staked,
        resulting_accumulator: ctx.accounts.pool.reward_per_share_stored,
    });

    Ok(())
}
