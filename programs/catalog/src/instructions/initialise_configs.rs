use crate::curve::{LinearCurve, RATE_DENOMINATOR};
use crate::error::ErrorCode;
use crate::states::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};

/// Accounts context for `initialise_configs`.
///
/// This handler:
/// - Initializes the global protocol configuration.
/// - Pins the reference currency mint every registered artist is paid in.
///
/// Per-artist vaults and mints are created later, at registration.
#[derive(Accounts)]
pub struct InitialiseConfigs<'info> {
    /// Admin signer (must match the program-level admin id).
    #[account(
        mut,
        address = crate::admin::id() @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    /// Program authority PDA, used as mint/vault authority for all
    /// per-artist components.
    ///
    /// CHECK: PDA derivation enforced via seeds. Not read as an account; used as Pubkey.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    /// Global configuration account holding protocol parameters.
    #[account(
        init,
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump,
        payer = owner,
        space = GlobalConfig::LEN
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// Reference currency mint (fixed for the lifetime of the protocol).
    pub payment_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Token program interface.
    pub token_program: Interface<'info, TokenInterface>,

    /// System Program (for account creation).
    pub system_program: Program<'info, System>,
}

/// One-time global setup.
///
/// # Parameters
/// - `admin`: Initial protocol admin (may differ from the hardcoded deployer).
/// - `pool_rate`: Fraction of each routed payment forwarded to the artist's
///   reward pool, numerator over `RATE_DENOMINATOR`.
/// - `initial_share_supply`: Share units minted into each new artist's reserve.
/// - `base_price` / `slope`: Default pricing-curve coefficients applied to
///   every new distributor, scaled by `PRECISION`.
pub fn initialise_configs(
    ctx: Context<InitialiseConfigs>,
    admin: Pubkey,
    pool_rate: u64,
    initial_share_supply: u64,
    base_price: u128,
    slope: u128,
) -> Result<()> {
    require!(pool_rate <= RATE_DENOMINATOR, ErrorCode::InvalidParam);
    require!(initial_share_supply > 0, ErrorCode::InvalidParam);
    // A zero-intercept curve with no slope could never price a payment.
    require!(
        LinearCurve::is_priceable(base_price, slope),
        ErrorCode::InvalidParam
    );

    let global_config = &mut ctx.accounts.global_config;
    global_config.bump = ctx.bumps.global_config;
    global_config.admin = admin;
    global_config.payment_mint = ctx.accounts.payment_mint.key();
    global_config.pool_rate = pool_rate;
    global_config.initial_share_supply = initial_share_supply;
    global_config.base_price = base_price;
    global_config.slope = slope;
    global_config.artist_count = 0;

    emit!(GlobalConfigInitialized {
        admin,
        payment_mint: global_config.payment_mint,
        pool_rate,
        initial_share_supply,
        base_price,
        slope,
    });

    Ok(())
}
