use crate::curve::RATE_DENOMINATOR;
use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::{transfer_from_pool_vault_to_user, transfer_from_user_to_vault};
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts required for routing a payment to an artist.
///
/// Flow summary:
/// 1) Price the payment against the artist's curve and check the reserve.
/// 2) Commit all ledger updates (reserve, cumulative counter, pool index).
/// 3) Move currency: the pool cut to the reward vault, the remainder to
///    the artist, and the issued share units from the reserve to the payer.
#[derive(Accounts)]
pub struct Pay<'info> {
    /// The payer buying share units with reference currency.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Artist wallet the payment is routed to (receives the non-pool cut).
    ///
    /// CHECK: Bound to the registry entry through the `artist_config` seeds.
    #[account(mut)]
    pub artist: UncheckedAccount<'info>,

    /// Global protocol configuration.
    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// Program authority PDA (signs the reserve vault transfer).
    ///
    /// CHECK: PDA derivation enforced by seeds; used only as a signer.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

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

    /// Issuance engine state for the artist.
    #[account(
        mut,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            artist.key().as_ref()
        ],
        bump = distributor.bump,
    )]
    pub distributor: Box<Account<'info, DistributorState>>,

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

    /// Per-artist share unit mint.
    #[account(address = artist_config.share_mint)]
    pub share_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Reference currency mint.
    #[account(address = global_config.payment_mint @ ErrorCode::InvalidPaymentMint)]
    pub payment_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Reserve vault the issued units are paid from.
    #[account(mut, address = artist_config.reserve_vault)]
    pub reserve_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Reward vault the pool cut is deposited into.
    #[account(mut, address = artist_config.reward_vault)]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Payer's reference currency account (debited).
    #[account(
        mut,
        associated_token::mint = payment_mint,
        associated_token::authority = payer,
        associated_token::token_program = token_program,
    )]
    pub payer_payment_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Payer's share unit ATA; created on demand to receive issued units.
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = share_mint,
        associated_token::authority = payer,
        associated_token::token_program = token_program,
    )]
    pub payer_share_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Artist's reference currency ATA; created on demand.
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = payment_mint,
        associated_token::authority = artist,
        associated_token::token_program = token_program,
    )]
    pub artist_payment_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program interface.
    pub token_program: Interface<'info, TokenInterface>,

    /// Associated Token Program (for ATA creation).
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// System Program (for ATA creation).
    pub system_program: Program<'info, System>,
}

/// Routes a payment of `amount_in` reference currency to the artist:
/// issues share units to the payer and forwards the pool cut.
///
/// # Mechanics
/// - `units_out` is the inverse-integral of the artist's price curve over
///   `[cumulative_issued, cumulative_issued + units_out]`, floored.
/// - The pool cut is `amount_in * pool_rate / RATE_DENOMINATOR`. While the
///   pool has no stakers the cut goes to the artist instead: currency must
///   never enter a pool where nobody could ever claim it.
/// - All ledger updates are committed before any token transfer, so a
///   reentrant call observes fully consistent state.
///
/// # Fails
/// - `ZeroAmount` for an empty payment.
/// - `ZeroUnitsIssued` when the payment prices below one unit.
/// - `InsufficientReserve` when the reserve cannot cover `units_out`;
///   nothing is committed.
pub fn pay(ctx: Context<Pay>, amount_in: u64) -> Result<()> {
    require!(amount_in > 0, ErrorCode::ZeroAmount);

    let distributor = &mut ctx.accounts.distributor;
    let pool = &mut ctx.accounts.pool;
    let global_config = &ctx.accounts.global_config;

    // --- 1) Price the payment against the curve ---
    let units_out = distributor
        .quote(amount_in)
        .ok_or(ErrorCode::MathOverflow)?;
    require!(units_out > 0, ErrorCode::ZeroUnitsIssued);

    // --- 2) Commit issuance (reserve debit + counter) ---
    distributor.apply_issue(units_out)?;

    // --- 3) Commit the pool cut to the reward index ---
    let mut pool_cut = u64::try_from(
        (amount_in as u128)
            .checked_mul(global_config.pool_rate as u128)
            .ok_or(ErrorCode::MathOverflow)?
            .checked_div(RATE_DENOMINATOR as u128)
            .ok_or(ErrorCode::MathOverflow)?,
    )
    .map_err(|_| ErrorCode::MathOverflow)?;

    if pool_cut > 0 && pool.total_staked > 0 {
        pool.accrue(pool_cut)?;
    } else {
        // No stakers to claim it: the whole payment goes to the artist.
        pool_cut = 0;
    }
    let artist_amount = amount_in
        .checked_sub(pool_cut)
        .ok_or(ErrorCode::MathOverflow)?;

    // --- 4) Move the currency: pool cut, then artist remainder ---
    if pool_cut > 0 {
        transfer_from_user_to_vault(
            ctx.accounts.payer.to_account_info(),
            ctx.accounts.payer_payment_token.to_account_info(),
            ctx.accounts.reward_vault.to_account_info(),
            ctx.accounts.payment_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            pool_cut,
            ctx.accounts.payment_mint.decimals,
        )?;
    }
    transfer_from_user_to_vault(
        ctx.accounts.payer.to_account_info(),
        ctx.accounts.payer_payment_token.to_account_info(),
        ctx.accounts.artist_payment_token.to_account_info(),
        ctx.accounts.payment_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        artist_amount,
        ctx.accounts.payment_mint.decimals,
    )?;

    // --- 5) Deliver the issued units from the reserve vault ---
    transfer_from_pool_vault_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.reserve_vault.to_account_info(),
        ctx.accounts.payer_share_token.to_account_info(),
        ctx.accounts.share_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        units_out,
        ctx.accounts.share_mint.decimals,
        &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]],
    )?;

    // --- 6) Event for indexers/auditors ---
    emit!(SharesIssued {
        payer: ctx.accounts.payer.key(),
        artist: ctx.accounts.artist.key(),
        amount_in,
        units_out,
        pool_cut,
        reserve_remaining: ctx.accounts.distributor.reserve,
        resulting_accumulator: ctx.accounts.pool.reward_per_share_stored,
    });

    Ok(())
}
