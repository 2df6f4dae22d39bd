use anchor_client::{Client, Cluster};
use anchor_lang::prelude::AccountMeta;
use anyhow::Ok;
use anyhow::Result;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, system_program};

use catalog::accounts as catalog_accounts;
use catalog::instruction as catalog_instructions;
use std::rc::Rc;

use crate::instructions::utils::get_artist_config_address;
use crate::instructions::utils::get_authority_address;
use crate::instructions::utils::get_distributor_address;
use crate::instructions::utils::get_global_config_address;
use crate::instructions::utils::get_pool_address;
use crate::instructions::utils::get_reserve_vault_address;
use crate::instructions::utils::get_reward_vault_address;
use crate::instructions::utils::get_share_mint_address;
use crate::instructions::utils::get_split_config_address;
use crate::instructions::utils::get_stake_vault_address;
use crate::instructions::utils::get_staker_info_address;

use super::super::{read_keypair_file, ClientConfig};

pub fn initialise_configs_instr(
    config: &ClientConfig,
    admin: Pubkey,
    payment_mint: Pubkey,
    pool_rate: u64,
    initial_share_supply: u64,
    base_price: u128,
    slope: u128,
) -> Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    // Client.
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.catalog_program)?;

    let instructions = program
        .request()
        .accounts(catalog_accounts::InitialiseConfigs {
            owner: program.payer(),
            authority: get_authority_address(&program.id()),
            global_config: get_global_config_address(&program.id()),
            payment_mint,
            token_program: spl_token::id(),
            system_program: system_program::id(),
        })
        .args(catalog_instructions::InitialiseConfigs {
            admin,
            pool_rate,
            initial_share_supply,
            base_price,
            slope,
        })
        .instructions()?;
    Ok(instructions)
}

pub fn update_config_instr(
    config: &ClientConfig,
    param: u8,
    value: u64,
    new_admin: Option<Pubkey>,
) -> anyhow::Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.catalog_program)?;

    let mut ixs = program
        .request()
        .accounts(catalog_accounts::UpdateConfig {
            owner: program.payer(),
            global_config: get_global_config_address(&program.id()),
            system_program: system_program::id(),
        })
        .args(catalog_instructions::UpdateConfig { param, value })
        .instructions()?; // build the instruction(s)

    if let Some(admin) = new_admin {
        ixs[0]
            .accounts
            .push(AccountMeta::new_readonly(admin, false));
    }

    Ok(ixs)
}

pub fn register_instr(
    config: &ClientConfig,
    payment_mint: Pubkey,
    split_partner: Pubkey,
    split_ratio: u64,
) -> anyhow::Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.catalog_program)?;
    let artist = program.payer();

    let ixs = program
        .request()
        .accounts(catalog_accounts::Register {
            artist,
            global_config: get_global_config_address(&program.id()),
            authority: get_authority_address(&program.id()),
            artist_config: get_artist_config_address(&artist, &program.id()),
            share_mint: get_share_mint_address(&artist, &program.id()),
            payment_mint,
            reserve_vault: get_reserve_vault_address(&artist, &program.id()),
            stake_vault: get_stake_vault_address(&artist, &program.id()),
            reward_vault: get_reward_vault_address(&artist, &program.id()),
            distributor: get_distributor_address(&artist, &program.id()),
            pool: get_pool_address(&artist, &program.id()),
            split_config: get_split_config_address(&artist, &program.id()),
            token_program: spl_token::id(),
            system_program: system_program::id(),
        })
        .args(catalog_instructions::Register {
            split_partner,
            split_ratio,
        })
        .instructions()?; // build the instruction(s)

    Ok(ixs)
}

pub fn pay_instr(
    config: &ClientConfig,
    artist: Pubkey,
    payment_mint: Pubkey,
    amount_in: u64,
) -> anyhow::Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.catalog_program)?;
    let share_mint = get_share_mint_address(&artist, &program.id());

    let ixs = program
        .request()
        .accounts(catalog_accounts::Pay {
            payer: program.payer(),
            artist,
            global_config: get_global_config_address(&program.id()),
            authority: get_authority_address(&program.id()),
            artist_config: get_artist_config_address(&artist, &program.id()),
            distributor: get_distributor_address(&artist, &program.id()),
            pool: get_pool_address(&artist, &program.id()),
            share_mint,
            payment_mint,
            reserve_vault: get_reserve_vault_address(&artist, &program.id()),
            reward_vault: get_reward_vault_address(&artist, &program.id()),
            payer_payment_token: spl_associated_token_account::get_associated_token_address(
                &program.payer(),
                &payment_mint,
            ),
            payer_share_token: spl_associated_token_account::get_associated_token_address(
                &program.payer(),
                &share_mint,
            ),
            artist_payment_token: spl_associated_token_account::get_associated_token_address(
                &artist,
                &payment_mint,
            ),
            token_program: spl_token::id(),
            associated_token_program: spl_associated_token_account::id(),
            system_program: system_program::id(),
        })
        .args(catalog_instructions::Pay { amount_in })
        .instructions()?; // build the instruction(s)

    Ok(ixs)
}

pub fn stake_instr(
    config: &ClientConfig,
    artist: Pubkey,
    amount: u64,
) -> anyhow::Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.catalog_program)?;
    let share_mint = get_share_mint_address(&artist, &program.id());

    let ixs = program
        .request()
        .accounts(catalog_accounts::Stake {
            owner: program.payer(),
            artist,
            artist_config: get_artist_config_address(&artist, &program.id()),
            pool: get_pool_address(&artist, &program.id()),
            staker_info: get_staker_info_address(&artist, &program.payer(), &program.id()),
            share_mint,
            stake_vault: get_stake_vault_address(&artist, &program.id()),
            owner_share_token: spl_associated_token_account::get_associated_token_address(
                &program.payer(),
                &share_mint,
            ),
            token_program: spl_token::id(),
            associated_token_program: spl_associated_token_account::id(),
            system_program: system_program::id(),
        })
        .args(catalog_instructions::Stake { amount })
        .instructions()?; // build the instruction(s)

    Ok(ixs)
}

pub fn unstake_instr(
    config: &ClientConfig,
    artist: Pubkey,
    amount: u64,
) -> anyhow::Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.catalog_program)?;
    let share_mint = get_share_mint_address(&artist, &program.id());

    let ixs = program
        .request()
        .accounts(catalog_accounts::Unstake {
            owner: program.payer(),
            artist,
            artist_config: get_artist_config_address(&artist, &program.id()),
            authority: get_authority_address(&program.id()),
            pool: get_pool_address(&artist, &program.id()),
            staker_info: get_staker_info_address(&artist, &program.payer(), &program.id()),
            share_mint,
            stake_vault: get_stake_vault_address(&artist, &program.id()),
            owner_share_token: spl_associated_token_account::get_associated_token_address(
                &program.payer(),
                &share_mint,
            ),
            token_program: spl_token::id(),
        })
        .args(catalog_instructions::Unstake { amount })
        .instructions()?; // build the instruction(s)

    Ok(ixs)
}

pub fn distribute_instr(
    config: &ClientConfig,
    artist: Pubkey,
    payment_mint: Pubkey,
    amount: u64,
) -> anyhow::Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.catalog_program)?;

    let ixs = program
        .request()
        .accounts(catalog_accounts::Distribute {
            funder: program.payer(),
            artist,
            global_config: get_global_config_address(&program.id()),
            artist_config: get_artist_config_address(&artist, &program.id()),
            pool: get_pool_address(&artist, &program.id()),
            payment_mint,
            reward_vault: get_reward_vault_address(&artist, &program.id()),
            funder_payment_token: spl_associated_token_account::get_associated_token_address(
                &program.payer(),
                &payment_mint,
            ),
            token_program: spl_token::id(),
        })
        .args(catalog_instructions::Distribute { amount })
        .instructions()?; // build the instruction(s)

    Ok(ixs)
}

pub fn claim_instr(
    config: &ClientConfig,
    artist: Pubkey,
    payment_mint: Pubkey,
) -> anyhow::Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.catalog_program)?;

    let ixs = program
        .request()
        .accounts(catalog_accounts::Claim {
            owner: program.payer(),
            artist,
            global_config: get_global_config_address(&program.id()),
            artist_config: get_artist_config_address(&artist, &program.id()),
            authority: get_authority_address(&program.id()),
            pool: get_pool_address(&artist, &program.id()),
            staker_info: get_staker_info_address(&artist, &program.payer(), &program.id()),
            payment_mint,
            reward_vault: get_reward_vault_address(&artist, &program.id()),
            owner_payment_token: spl_associated_token_account::get_associated_token_address(
                &program.payer(),
                &payment_mint,
            ),
            token_program: spl_token::id(),
            associated_token_program: spl_associated_token_account::id(),
            system_program: system_program::id(),
        })
        .args(catalog_instructions::Claim {})
        .instructions()?; // build the instruction(s)

    Ok(ixs)
}

pub fn split_instr(
    config: &ClientConfig,
    artist: Pubkey,
    payment_mint: Pubkey,
    recipient_one: Pubkey,
    recipient_two: Pubkey,
    amount: u64,
) -> anyhow::Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.catalog_program)?;

    let ixs = program
        .request()
        .accounts(catalog_accounts::Split {
            payer: program.payer(),
            artist,
            global_config: get_global_config_address(&program.id()),
            artist_config: get_artist_config_address(&artist, &program.id()),
            split_config: get_split_config_address(&artist, &program.id()),
            recipient_one,
            recipient_two,
            payment_mint,
            payer_payment_token: spl_associated_token_account::get_associated_token_address(
                &program.payer(),
                &payment_mint,
            ),
            recipient_one_payment_token: spl_associated_token_account::get_associated_token_address(
                &recipient_one,
                &payment_mint,
            ),
            recipient_two_payment_token: spl_associated_token_account::get_associated_token_address(
                &recipient_two,
                &payment_mint,
            ),
            token_program: spl_token::id(),
            associated_token_program: spl_associated_token_account::id(),
            system_program: system_program::id(),
        })
        .args(catalog_instructions::Split { amount })
        .instructions()?; // build the instruction(s)

    Ok(ixs)
}
