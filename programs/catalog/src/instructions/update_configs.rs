use crate::curve::{LinearCurve, RATE_DENOMINATOR};
use crate::error::ErrorCode;
use crate::states::{ConfigUpdated, GlobalConfig, GLOBAL_CONFIG_SEED};
use anchor_lang::prelude::*;

/// Accounts context for the `update_config` instruction.
///
/// Only the current `admin` in `global_config` or the program-level admin
/// defined in `crate::admin::id()` may update configuration parameters.
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Authorized signer: must be the stored admin or the hardcoded program admin.
    #[account(
        constraint = (owner.key() == global_config.admin || owner.key() == crate::admin::id()) @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    /// Global configuration account to be updated.
    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// System program (not directly used in updates but required for Anchor context).
    pub system_program: Program<'info, System>,
}

/// Updates selected fields of the global configuration.
///
/// # Param Mapping
/// - `0`: **Admin change** → Expects a new admin Pubkey passed via `remaining_accounts[0]`.
/// - `1`: **pool_rate** → Fraction of payments forwarded to reward pools (u64).
/// - `2`: **initial_share_supply** → Supply minted per registration (u64).
/// - `3`: **base_price** → Default curve intercept (u64, widened to u128).
/// - `4`: **slope** → Default curve slope (u64, widened to u128).
///
/// Any other `param` value returns `ErrorCode::InvalidParam`. Changes only
/// affect artists registered after the update; deployed distributors keep
/// the coefficients they were created with.
pub fn update_config(ctx: Context<UpdateConfig>, param: u8, value: u64) -> Result<()> {
    let global_config = &mut ctx.accounts.global_config;
    match param {
        // Update admin (requires new admin key from remaining_accounts[0])
        0 => {
            let new_admin = *ctx
                .remaining_accounts
                .iter()
                .next()
                .ok_or(error!(ErrorCode::MissingRemainingAccount))?
                .key;
            require_keys_neq!(new_admin, Pubkey::default());
            global_config.admin = new_admin;
        }
        // Update pool rate
        1 => {
            require!(value <= RATE_DENOMINATOR, ErrorCode::InvalidParam);
            global_config.pool_rate = value;
        }
        // Update initial share supply for future registrations
        2 => {
            require!(value > 0, ErrorCode::InvalidParam);
            global_config.initial_share_supply = value;
        }
        // Update default curve intercept
        3 => {
            require!(
                LinearCurve::is_priceable(value as u128, global_config.slope),
                ErrorCode::InvalidParam
            );
            global_config.base_price = value as u128;
        }
        // Update default curve slope
        4 => {
            require!(
                LinearCurve::is_priceable(global_config.base_price, value as u128),
                ErrorCode::InvalidParam
            );
            global_config.slope = value as u128;
        }
        // Invalid parameter selector
        _ => return Err(error!(ErrorCode::InvalidParam)),
    }

    emit!(ConfigUpdated {
        admin: global_config.admin,
        pool_rate: global_config.pool_rate,
        initial_share_supply: global_config.initial_share_supply,
        base_price: global_config.base_price,
        slope: global_config.slope,
    });
    Ok(())
}
