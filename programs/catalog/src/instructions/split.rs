use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_user_to_vault;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts required for a fixed-ratio split payment.
#[derive(Accounts)]
pub struct Split<'info> {
    /// The payer whose currency is divided; signing is the authorization.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Artist whose splitter configuration is used.
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

    /// Fixed splitter configuration for the artist.
    #[account(
        seeds = [
            SPLIT_CONFIG_SEED.as_bytes(),
            artist.key().as_ref()
        ],
        bump = split_config.bump,
    )]
    pub split_config: Box<Account<'info, SplitConfig>>,

    /// Recipient one of the split.
    ///
    /// CHECK: Pinned by the splitter configuration.
    #[account(address = split_config.recipient_one)]
    pub recipient_one: UncheckedAccount<'info>,

    /// Recipient two of the split.
    ///
    /// CHECK: Pinned by the splitter configuration.
    #[account(address = split_config.recipient_two)]
    pub recipient_two: UncheckedAccount<'info>,

    /// Reference currency mint.
    #[account(address = global_config.payment_mint @ ErrorCode::InvalidPaymentMint)]
    pub payment_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Payer's reference currency account (debited).
    #[account(
        mut,
        associated_token::mint = payment_mint,
        associated_token::authority = payer,
        associated_token::token_program = token_program,
    )]
    pub payer_payment_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Recipient one's reference currency ATA; created on demand.
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = payment_mint,
        associated_token::authority = recipient_one,
        associated_token::token_program = token_program,
    )]
    pub recipient_one_payment_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Recipient two's reference currency ATA; created on demand.
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = payment_mint,
        associated_token::authority = recipient_two,
        associated_token::token_program = token_program,
    )]
    pub recipient_two_payment_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program interface.
    pub token_program: Interface<'info, TokenInterface>,

    /// Associated Token Program (for ATA creation).
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// System Program (for ATA creation).
    pub system_program: Program<'info, System>,
}

/// Divides `amount` between the two configured recipients at the fixed
/// ratio. The second share is the exact remainder, so the two parts
/// always sum to `amount` regardless of rounding.
pub fn split(ctx: Context<Split>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::ZeroAmount);

    let split_config = &ctx.accounts.split_config;
    let (share_one, share_two) = SplitConfig::split_amounts(amount, split_config.ratio)
        .ok_or(ErrorCode::MathOverflow)?;

    if share_one > 0 {
        transfer_from_user_to_vault(
            ctx.accounts.payer.to_account_info(),
            ctx.accounts.payer_payment_token.to_account_info(),
            ctx.accounts.recipient_one_payment_token.to_account_info(),
            ctx.accounts.payment_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            share_one,
            ctx.accounts.payment_mint.decimals,
        )?;
    }
    if share_two > 0 {
        transfer_from_user_to_vault(
            ctx.accounts.payer.to_account_info(),
            ctx.accounts.payer_payment_token.to_account_info(),
            ctx.accounts.recipient_two_payment_token.to_account_info(),
            ctx.accounts.payment_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            share_two,
            ctx.accounts.payment_mint.decimals,
        )?;
    }

    emit!(PaymentSplit {
        payer: ctx.accounts.payer.key(),
        artist: ctx.accounts.artist.key(),
        amount,
        share_one,
        share_two,
    });

    Ok(())
}
