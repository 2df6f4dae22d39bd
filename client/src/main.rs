#![allow(dead_code)]
use anchor_client::{Client, Cluster};
use anyhow::{format_err, Result};
use clap::Parser;
use configparser::ini::Ini;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use std::rc::Rc;
use std::str::FromStr;

mod instructions;
use catalog::states::{GlobalConfig, PoolState, SplitConfig, StakerInfo};
use instructions::catalog_instructions::*;
use instructions::rpc::*;
use instructions::utils::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    http_url: String,
    ws_url: String,
    payer_path: String,
    admin_path: String,
    catalog_program: Pubkey,
}

fn load_cfg(client_config: &String) -> Result<ClientConfig> {
    let mut config = Ini::new();
    let _map = config.load(client_config).unwrap();
    let http_url = config.get("Global", "http_url").unwrap();
    if http_url.is_empty() {
        panic!("http_url must not be empty");
    }
    let ws_url = config.get("Global", "ws_url").unwrap();
    if ws_url.is_empty() {
        panic!("ws_url must not be empty");
    }
    let payer_path = config.get("Global", "payer_path").unwrap();
    if payer_path.is_empty() {
        panic!("payer_path must not be empty");
    }
    let admin_path = config.get("Global", "admin_path").unwrap();
    if admin_path.is_empty() {
        panic!("admin_path must not be empty");
    }

    let catalog_program_str = config.get("Global", "catalog_program").unwrap();
    if catalog_program_str.is_empty() {
        panic!("catalog_program must not be empty");
    }
    let catalog_program = Pubkey::from_str(&catalog_program_str).unwrap();

    Ok(ClientConfig {
        http_url,
        ws_url,
        payer_path,
        admin_path,
        catalog_program,
    })
}

fn read_keypair_file(s: &str) -> Result<Keypair> {
    solana_sdk::signature::read_keypair_file(s)
        .map_err(|_| format_err!("failed to read keypair from {}", s))
}

/// Reads the global config off-chain to learn the payment mint.
fn fetch_payment_mint(rpc_client: &RpcClient, program_id: &Pubkey) -> Result<Pubkey> {
    let global_config_key = get_global_config_address(program_id);
    let account = rpc_client.get_account(&global_config_key)?;
    let global_config: GlobalConfig = deserialize_anchor_account(&account)?;
    Ok(global_config.payment_mint)
}

#[derive(Debug, Parser)]
pub struct Opts {
    #[clap(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Debug, Parser)]
pub enum CatalogCommands {
    InitialiseConfigs {
        #[arg(long)]
        admin: Pubkey,
        #[arg(long)]
        payment_mint: Pubkey,
        #[arg(long)]
        pool_rate: u64,
        #[arg(long)]
        initial_share_supply: u64,
        #[arg(long)]
        base_price: u128,
        #[arg(long)]
        slope: u128,
    },
    UpdateConfig {
        #[arg(long)]
        param: u8,
        #[arg(long)]
        value: u64,
        #[arg(long)]
        admin: Option<Pubkey>,
    },
    Register {
        #[arg(long)]
        split_partner: Pubkey,
        #[arg(long)]
        split_ratio: u64,
    },
    Pay {
        #[arg(long)]
        artist: Pubkey,
        #[arg(long)]
        amount_in: u64,
    },
    Stake {
        #[arg(long)]
        artist: Pubkey,
        #[arg(long)]
        amount: u64,
    },
    Unstake {
        #[arg(long)]
        artist: Pubkey,
        #[arg(long)]
        amount: u64,
    },
    Distribute {
        #[arg(long)]
        artist: Pubkey,
        #[arg(long)]
        amount: u64,
    },
    Claim {
        #[arg(long)]
        artist: Pubkey,
    },
    Split {
        #[arg(long)]
        artist: Pubkey,
        #[arg(long)]
        amount: u64,
    },
    /// Off-chain view of a staker's claimable rewards.
    Pending {
        #[arg(long)]
        artist: Pubkey,
        #[arg(long)]
        owner: Option<Pubkey>,
    },
}

fn main() -> Result<()> {
    let client_config = "client_config.ini";
    let pool_config = load_cfg(&client_config.to_string()).unwrap();
    // cluster params.
    let payer = read_keypair_file(&pool_config.payer_path)?;
    // solana rpc client
    let rpc_client = RpcClient::new(pool_config.http_url.to_string());

    // anchor client.
    let anchor_config = pool_config.clone();
    let url = Cluster::Custom(anchor_config.http_url, anchor_config.ws_url);
    let wallet = read_keypair_file(&pool_config.payer_path)?;
    let anchor_client = Client::new(url, Rc::new(wallet));
    let program = anchor_client.program(pool_config.catalog_program)?;

    let opts = Opts::parse();
    match opts.command {
        CatalogCommands::InitialiseConfigs {
            admin,
            payment_mint,
            pool_rate,
            initial_share_supply,
            base_price,
            slope,
        } => {
            let mut instructions = Vec::new();
            let initialise_ix = initialise_configs_instr(
                &pool_config,
                admin,
                payment_mint,
                pool_rate,
                initial_share_supply,
                base_price,
                slope,
            )?;
            instructions.extend(initialise_ix);
            let signers = vec![&payer];
            let recent_hash = rpc_client.get_latest_blockhash()?;
            let txn = Transaction::new_signed_with_payer(
                &instructions,
                Some(&payer.pubkey()),
                &signers,
                recent_hash,
            );
            let signature = send_txn(&rpc_client, &txn, true)?;
            println!("{}", signature);
        }
        CatalogCommands::UpdateConfig {
            param,
            value,
            admin,
        } => {
            let mut instructions = Vec::new();
            let update_config_ix = update_config_instr(&pool_config, param, value, admin)?;
            instructions.extend(update_config_ix);
            let signers = vec![&payer];
            let recent_hash = rpc_client.get_latest_blockhash()?;
            let txn = Transaction::new_signed_with_payer(
                &instructions,
                Some(&payer.pubkey()),
                &signers,
                recent_hash,
            );
            let signature = send_txn(&rpc_client, &txn, true)?;
            println!("{}", signature);
        }
        CatalogCommands::Register {
            split_partner,
            split_ratio,
        } => {
            let payment_mint = fetch_payment_mint(&rpc_client, &pool_config.catalog_program)?;
            let mut instructions = Vec::new();
            let register_ix =
                register_instr(&pool_config, payment_mint, split_partner, split_ratio)?;
            instructions.extend(register_ix);
            let signers = vec![&payer];
            let recent_hash = rpc_client.get_latest_blockhash()?;
            let txn = Transaction::new_signed_with_payer(
                &instructions,
                Some(&payer.pubkey()),
                &signers,
                recent_hash,
            );
            let signature = send_txn(&rpc_client, &txn, true)?;
            println!("{}", signature);
        }
        CatalogCommands::Pay { artist, amount_in } => {
            let payment_mint = fetch_payment_mint(&rpc_client, &pool_config.catalog_program)?;
            let mut instructions = Vec::new();
            let pay_ix = pay_instr(&pool_config, artist, payment_mint, amount_in)?;
            instructions.extend(pay_ix);
            let signers = vec![&payer];
            let recent_hash = rpc_client.get_latest_blockhash()?;
            let txn = Transaction::new_signed_with_payer(
                &instructions,
                Some(&payer.pubkey()),
                &signers,
                recent_hash,
            );
            let signature = send_txn(&rpc_client, &txn, true)?;
            println!("{}", signature);
        }
        CatalogCommands::Stake { artist, amount } => {
            let mut instructions = Vec::new();
            let stake_ix = stake_instr(&pool_config, artist, amount)?;
            instructions.extend(stake_ix);
            let signers = vec![&payer];
            let recent_hash = rpc_client.get_latest_blockhash()?;
            let txn = Transaction::new_signed_with_payer(
                &instructions,
                Some(&payer.pubkey()),
                &signers,
                recent_hash,
            );
            let signature = send_txn(&rpc_client, &txn, true)?;
            println!("{}", signature);
        }
        CatalogCommands::Unstake { artist, amount } => {
            let mut instructions = Vec::new();
            let unstake_ix = unstake_instr(&pool_config, artist, amount)?;
            instructions.extend(unstake_ix);
            let signers = vec![&payer];
            let recent_hash = rpc_client.get_latest_blockhash()?;
            let txn = Transaction::new_signed_with_payer(
                &instructions,
                Some(&payer.pubkey()),
                &signers,
                recent_hash,
            );
            let signature = send_txn(&rpc_client, &txn, true)?;
            println!("{}", signature);
        }
        CatalogCommands::Distribute { artist, amount } => {
            let payment_mint = fetch_payment_mint(&rpc_client, &pool_config.catalog_program)?;
            let mut instructions = Vec::new();
            let distribute_ix = distribute_instr(&pool_config, artist, payment_mint, amount)?;
            instructions.extend(distribute_ix);
            let signers = vec![&payer];
            let recent_hash = rpc_client.get_latest_blockhash()?;
            let txn = Transaction::new_signed_with_payer(
                &instructions,
                Some(&payer.pubkey()),
                &signers,
                recent_hash,
            );
            let signature = send_txn(&rpc_client, &txn, true)?;
            println!("{}", signature);
        }
        CatalogCommands::Claim { artist } => {
            let payment_mint = fetch_payment_mint(&rpc_client, &pool_config.catalog_program)?;
            let mut instructions = Vec::new();
            let claim_ix = claim_instr(&pool_config, artist, payment_mint)?;
            instructions.extend(claim_ix);
            let signers = vec![&payer];
            let recent_hash = rpc_client.get_latest_blockhash()?;
            let txn = Transaction::new_signed_with_payer(
                &instructions,
                Some(&payer.pubkey()),
                &signers,
                recent_hash,
            );
            let signature = send_txn(&rpc_client, &txn, true)?;
            println!("{}", signature);
        }
        CatalogCommands::Split { artist, amount } => {
            let payment_mint = fetch_payment_mint(&rpc_client, &pool_config.catalog_program)?;
            let split_config_key = get_split_config_address(&artist, &pool_config.catalog_program);
            let split_config_account = rpc_client.get_account(&split_config_key)?;
            let split_config: SplitConfig = deserialize_anchor_account(&split_config_account)?;

            let mut instructions = Vec::new();
            let split_ix = split_instr(
                &pool_config,
                artist,
                payment_mint,
                split_config.recipient_one,
                split_config.recipient_two,
                amount,
            )?;
            instructions.extend(split_ix);
            let signers = vec![&payer];
            let recent_hash = rpc_client.get_latest_blockhash()?;
            let txn = Transaction::new_signed_with_payer(
                &instructions,
                Some(&payer.pubkey()),
                &signers,
                recent_hash,
            );
            let signature = send_txn(&rpc_client, &txn, true)?;
            println!("{}", signature);
        }
        CatalogCommands::Pending { artist, owner } => {
            let owner = owner.unwrap_or_else(|| program.payer());
            let pool_key = get_pool_address(&artist, &pool_config.catalog_program);
            let staker_info_key =
                get_staker_info_address(&artist, &owner, &pool_config.catalog_program);

            let pool_account = rpc_client.get_account(&pool_key)?;
            let pool: PoolState = deserialize_anchor_account(&pool_account)?;
            let staker_info_account = rpc_client.get_account(&staker_info_key)?;
            let staker_info: StakerInfo = deserialize_anchor_account(&staker_info_account)?;

            let pending = pool
                .pending(&staker_info)
                .ok_or_else(|| format_err!("pending reward overflowed"))?;
            println!("owner: {}", owner);
            println!("staked: {}", staker_info.amount);
            println!("pending: {}", pending);
        }
    }
    Ok(())
}
