use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, MintTo, TransferChecked};

/// Transfers tokens out of a caller-owned account; the caller signs.
pub fn transfer_from_user_to_vault<'info>(
    authority: AccountInfo<'info>,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    mint_decimals: u8,
) -> Result<()> {
    token_interface::transfer_checked(
        CpiContext::new(
            token_program,
            TransferChecked {
                from,
                mint,
                to,
                authority,
            },
        ),
        amount,
        mint_decimals,
    )
}

/// Transfers tokens out of a program-owned vault; the program authority
/// PDA signs via `signer_seeds`.
pub fn transfer_from_pool_vault_to_user<'info>(
    authority: AccountInfo<'info>,
    from_vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    mint_decimals: u8,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            token_program,
            TransferChecked {
                from: from_vault,
                mint,
                to,
                authority,
            },
            signer_seeds,
        ),
        amount,
        mint_decimals,
    )
}

/// Mints share units into a program-owned vault; the program authority
/// PDA is the mint authority and signs via `signer_seeds`.
pub fn mint_to_vault<'info>(
    authority: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    to_vault: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    token_interface::mint_to(
        CpiContext::new_with_signer(
            token_program,
            MintTo {
                mint,
                to: to_vault,
                authority,
            },
            signer_seeds,
        ),
        amount,
    )
}
