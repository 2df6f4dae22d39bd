use anchor_lang::prelude::*;

declare_id!("EMYQ9YFjYCdVswTbdWsPZGyx2EwoXYBJRjayxoHJ9via");

pub mod admin {
    use anchor_lang::prelude::declare_id;
    declare_id!("FKbrAkp6xVFLBq2MTwJXzYpxhX3qcZL37YHhW9TPgADY");
}

pub const AUTH_SEED: &str = "catalog_auth";
pub const SHARE_MINT_SEED: &str = "share_mint";
pub const RESERVE_VAULT_SEED: &str = "reserve_vault";
pub const STAKE_VAULT_SEED: &str = "stake_vault";
pub const REWARD_VAULT_SEED: &str = "reward_vault";
pub const PRECISION: u128 = 1_000_000_000;

pub mod curve;
pub mod error;
pub mod instructions;
pub mod states;
pub mod utils;

use instructions::*;

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Catalog",
    project_url: "https://github.com/catalog-protocol/catalog",
    contacts: "email:security@catalog-protocol.io",
    policy: "https://github.com/catalog-protocol/catalog/blob/master/SECURITY.md",
    preferred_languages: "en"
}

#[program]
pub mod catalog {

    use super::*;

    pub fn initialise_configs(
        ctx: Context<InitialiseConfigs>,
        admin: Pubkey,
        pool_rate: u64,
        initial_share_supply: u64,
        base_price: u128,
        slope: u128,
    ) -> Result<()> {
        instructions::initialise_configs(
            ctx,
            admin,
            pool_rate,
            initial_share_supply,
            base_price,
            slope,
        )
    }

    pub fn update_config(ctx: Context<UpdateConfig>, param: u8, value: u64) -> Result<()> {
        instructions::update_config(ctx, param, value)
    }

    pub fn register(
        ctx: Context<Register>,
        split_partner: Pubkey,
        split_ratio: u64,
    ) -> Result<()> {
        instructions::register(ctx, split_partner, split_ratio)
    }

    pub fn pay(ctx: Context<Pay>, amount_in: u64) -> Result<()> {
        instructions::pay(ctx, amount_in)
    }

    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake(ctx, amount)
    }

    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake(ctx, amount)
    }

    pub fn distribute(ctx: Context<Distribute>, amount: u64) -> Result<()> {
        instructions::distribute(ctx, amount)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim(ctx)
    }

    pub fn split(ctx: Context<Split>, amount: u64) -> Result<()> {
        instructions::split(ctx, amount)
    }
}
