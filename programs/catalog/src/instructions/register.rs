use crate::curve::RATE_DENOMINATOR;
use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::mint_to_vault;
use crate::{RESERVE_VAULT_SEED, REWARD_VAULT_SEED, SHARE_MINT_SEED, STAKE_VAULT_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts context for `register`.
///
/// Deploys the full component set for one artist in a single call:
/// - the registry entry (`ArtistConfig`, insert-once),
/// - the per-artist share mint (mint authority: program PDA),
/// - the reserve / stake / reward vaults,
/// - the issuance engine, reward pool and splitter state accounts.
///
/// The initial share supply is minted into the reserve vault, so the
/// issuance engine owns the entire unsold supply from genesis.
#[derive(Accounts)]
pub struct Register<'info> {
    /// The registering artist (pays for account creation).
    #[account(mut)]
    pub artist: Signer<'info>,

    /// Global protocol configuration.
    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// Program authority PDA (mint/vault authority for all components).
    ///
    /// CHECK: PDA derivation enforced by seeds; used only as a signer.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    /// Registry entry; the `registered` flag makes registration
    /// insert-once. Declared before the component accounts so a repeat
    /// call fails here, with `AlreadyRegistered`, not on a vault init.
    #[account(
        init_if_needed,
        seeds = [
            ARTIST_CONFIG_SEED.as_bytes(),
            artist.key().as_ref()
        ],
        bump,
        payer = artist,
        space = ArtistConfig::LEN,
        constraint = !artist_config.registered @ ErrorCode::AlreadyRegistered,
    )]
    pub artist_config: Box<Account<'info, ArtistConfig>>,

    /// Per-artist share unit mint.
    #[account(
        init,
        seeds = [
            SHARE_MINT_SEED.as_bytes(),
            artist.key().as_ref()
        ],
        bump,
        payer = artist,
        mint::decimals = 9,
        mint::authority = authority,
        mint::token_program = token_program,
    )]
    pub share_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Reference currency mint, pinned by the global config.
    #[account(
        address = global_config.payment_mint @ ErrorCode::InvalidPaymentMint
    )]
    pub payment_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Vault holding the unsold share reserve.
    #[account(
        init,
        seeds = [
            RESERVE_VAULT_SEED.as_bytes(),
            artist.key().as_ref()
        ],
        bump,
        payer = artist,
        token::mint = share_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub reserve_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Vault holding staked share units.
    #[account(
        init,
        seeds = [
            STAKE_VAULT_SEED.as_bytes(),
            artist.key().as_ref()
        ],
        bump,
        payer = artist,
        token::mint = share_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub stake_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Vault holding reward currency awaiting claims.
    #[account(
        init,
        seeds = [
            REWARD_VAULT_SEED.as_bytes(),
            artist.key().as_ref()
        ],
        bump,
        payer = artist,
        token::mint = payment_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Issuance engine state.
    #[account(
        init,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            artist.key().as_ref()
        ],
        bump,
        payer = artist,
        space = DistributorState::LEN
    )]
    pub distributor: Box<Account<'info, DistributorState>>,

    /// Reward pool state.
    #[account(
        init,
        seeds = [
            POOL_SEED.as_bytes(),
            artist.key().as_ref()
        ],
        bump,
        payer = artist,
        space = PoolState::LEN
    )]
    pub pool: Box<Account<'info, PoolState>>,

    /// Fixed splitter configuration.
    #[account(
        init,
        seeds = [
            SPLIT_CONFIG_SEED.as_bytes(),
            artist.key().as_ref()
        ],
        bump,
        payer = artist,
        space = SplitConfig::LEN
    )]
    pub split_config: Box<Account<'info, SplitConfig>>,

    /// Token program interface (for mint/vault creation and minting).
    pub token_program: Interface<'info, TokenInterface>,

    /// System Program (for account creation).
    pub system_program: Program<'info, System>,
}

/// Registers the calling artist and deploys their components.
///
/// # Parameters
/// - `split_partner`: Recipient one of the artist's fixed splitter.
/// - `split_ratio`: Fraction paid to the partner, numerator over
///   `RATE_DENOMINATOR`; the artist receives the remainder.
///
/// # Fails
/// - `AlreadyRegistered` on a second call for the same artist.
/// - `InvalidSplitRatio` if the ratio exceeds the denominator.
pub fn register(ctx: Context<Register>, split_partner: Pubkey, split_ratio: u64) -> Result<()> {
    require!(split_ratio <= RATE_DENOMINATOR, ErrorCode::InvalidSplitRatio);

    let initial_share_supply = ctx.accounts.global_config.initial_share_supply;
    let artist = ctx.accounts.artist.key();

    let distributor = &mut ctx.accounts.distributor;
    distributor.bump = ctx.bumps.distributor;
    distributor.artist = artist;
    distributor.reserve = initial_share_supply;
    distributor.cumulative_issued = 0;
    distributor.initial_supply = initial_share_supply;
    distributor.base_price = ctx.accounts.global_config.base_price;
    distributor.slope = ctx.accounts.global_config.slope;

    let pool = &mut ctx.accounts.pool;
    pool.bump = ctx.bumps.pool;
    pool.artist = artist;

    let split_config = &mut ctx.accounts.split_config;
    split_config.bump = ctx.bumps.split_config;
    split_config.artist = artist;
    split_config.ratio = split_ratio;
    split_config.recipient_one = split_partner;
    split_config.recipient_two = artist;

    let artist_config = &mut ctx.accounts.artist_config;
    artist_config.bump = ctx.bumps.artist_config;
    artist_config.artist = artist;
    artist_config.registered = true;
    artist_config.share_mint = ctx.accounts.share_mint.key();
    artist_config.reserve_vault = ctx.accounts.reserve_vault.key();
    artist_config.stake_vault = ctx.accounts.stake_vault.key();
    artist_config.reward_vault = ctx.accounts.reward_vault.key();
    artist_config.distributor = ctx.accounts.distributor.key();
    artist_config.pool = ctx.accounts.pool.key();
    artist_config.splitter = ctx.accounts.split_config.key();

    let global_config = &mut ctx.accounts.global_config;
    global_config.artist_count = global_config
        .artist_count
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;

    // Mint the entire unsold supply into the reserve vault.
    mint_to_vault(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.share_mint.to_account_info(),
        ctx.accounts.reserve_vault.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        initial_share_supply,
        &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]],
    )?;

    emit!(ArtistRegistered {
        artist,
        share_mint: ctx.accounts.share_mint.key(),
        distributor: ctx.accounts.distributor.key(),
        pool: ctx.accounts.pool.key(),
        splitter: ctx.accounts.split_config.key(),
        initial_supply: initial_share_supply,
    });

    Ok(())
}
