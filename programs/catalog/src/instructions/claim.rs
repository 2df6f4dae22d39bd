use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_pool_vault_to_user;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts required for claiming settled rewards.
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The claiming staker (payer for ATA creation if needed).
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Artist whose pool is being claimed from.
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

    /// Program authority PDA (signs the reward vault transfer).
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

    /// Reference currency mint.
    #[account(address = global_config.payment_mint @ ErrorCode::InvalidPaymentMint)]
    pub payment_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Reward vault the payout comes from.
    #[account(mut, address = artist_config.reward_vault)]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Owner's reference currency ATA; created on demand to receive rewards.
    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = payment_mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program,
    )]
    pub owner_payment_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program interface.
    pub token_program: Interface<'info, TokenInterface>,

    /// Associated Token Program (for ATA init).
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// System Program (for rent/ATA).
    pub system_program: Program<'info, System>,
}

/// Pays out the caller's settled rewards (pull pattern).
///
/// Steps:
/// 1) Settle rewards accrued since the last checkpoint into the claimable
///    balance, zero it and reset the reward debt — all before any CPI, so
///    a reentrant call can only ever observe a zero claimable balance.
/// 2) Transfer the claimed amount from the reward vault, if non-zero.
///    A zero claim is a successful no-op, not an error.
/// 3) Emit `RewardsClaimed` (with a zero amount for no-ops, so auditors
///    still see the touch).
pub fn claim(ctx: Context<Claim>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let staker_info = &mut ctx.accounts.staker_info;

    let amount = pool.take_claimable(staker_info)?;

    if amount > 0 {
        transfer_from_pool_vault_to_user(
            ctx.accounts.authority.to_account_info(),
            ctx.accounts.reward_vault.to_account_info(),
            ctx.accounts.owner_payment_token.to_account_info(),
            ctx.accounts.payment_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            amount,
            ctx.accounts.payment_mint.decimals,
            &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]],
        )?;
    }

    emit!(RewardsClaimed {
        owner: ctx.accounts.owner.key(),
        artist: ctx.accounts.artist.key(),
        amount,
        resulting_accumulator: ctx.accounts.pool.reward_per_share_stored,
    });

    Ok(())
}
