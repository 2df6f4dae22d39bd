use anchor_lang::AccountDeserialize;
use anyhow::Result;
use catalog::states::{
    ARTIST_CONFIG_SEED, DISTRIBUTOR_SEED, GLOBAL_CONFIG_SEED, POOL_SEED, SPLIT_CONFIG_SEED,
    STAKER_INFO_SEED,
};
use solana_sdk::{account::Account, pubkey::Pubkey};

pub fn deserialize_anchor_account<T: AccountDeserialize>(account: &Account) -> Result<T> {
    let mut data: &[u8] = &account.data;
    T::try_deserialize(&mut data).map_err(Into::into)
}

pub fn get_global_config_address(program_id: &Pubkey) -> Pubkey {
    let (global_config, _bump) =
        Pubkey::find_program_address(&[GLOBAL_CONFIG_SEED.as_bytes()], &program_id);
    global_config
}

pub fn get_authority_address(program_id: &Pubkey) -> Pubkey {
    let (authority, _bump) =
        Pubkey::find_program_address(&[catalog::AUTH_SEED.as_bytes()], &program_id);
    authority
}

pub fn get_artist_config_address(artist: &Pubkey, program_id: &Pubkey) -> Pubkey {
    let (artist_config, _bump) = Pubkey::find_program_address(
        &[ARTIST_CONFIG_SEED.as_bytes(), artist.as_ref()],
        &program_id,
    );
    artist_config
}

pub fn get_share_mint_address(artist: &Pubkey, program_id: &Pubkey) -> Pubkey {
    let (share_mint, _bump) = Pubkey::find_program_address(
        &[catalog::SHARE_MINT_SEED.as_bytes(), artist.as_ref()],
        &program_id,
    );
    share_mint
}

pub fn get_reserve_vault_address(artist: &Pubkey, program_id: &Pubkey) -> Pubkey {
    let (reserve_vault, _bump) = Pubkey::find_program_address(
        &[catalog::RESERVE_VAULT_SEED.as_bytes(), artist.as_ref()],
        &program_id,
    );
    reserve_vault
}

pub fn get_stake_vault_address(artist: &Pubkey, program_id: &Pubkey) -> Pubkey {
    let (stake_vault, _bump) = Pubkey::find_program_address(
        &[catalog::STAKE_VAULT_SEED.as_bytes(), artist.as_ref()],
        &program_id,
    );
    stake_vault
}

pub fn get_reward_vault_address(artist: &Pubkey, program_id: &Pubkey) -> Pubkey {
    let (reward_vault, _bump) = Pubkey::find_program_address(
        &[catalog::REWARD_VAULT_SEED.as_bytes(), artist.as_ref()],
        &program_id,
    );
    reward_vault
}

pub fn get_distributor_address(artist: &Pubkey, program_id: &Pubkey) -> Pubkey {
    let (distributor, _bump) = Pubkey::find_program_address(
        &[DISTRIBUTOR_SEED.as_bytes(), artist.as_ref()],
        &program_id,
    );
    distributor
}

pub fn get_pool_address(artist: &Pubkey, program_id: &Pubkey) -> Pubkey {
    let (pool, _bump) =
        Pubkey::find_program_address(&[POOL_SEED.as_bytes(), artist.as_ref()], &program_id);
    pool
}

pub fn get_split_config_address(artist: &Pubkey, program_id: &Pubkey) -> Pubkey {
    let (split_config, _bump) = Pubkey::find_program_address(
        &[SPLIT_CONFIG_SEED.as_bytes(), artist.as_ref()],
        &program_id,
    );
    split_config
}

pub fn get_staker_info_address(artist: &Pubkey, owner: &Pubkey, program_id: &Pubkey) -> Pubkey {
    let (staker_info, _bump) = Pubkey::find_program_address(
        &[STAKER_INFO_SEED.as_bytes(), artist.as_ref(), owner.as_ref()],
        &program_id,
    );
    staker_info
}
