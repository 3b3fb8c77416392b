use crate::PauseContract;
use anchor_lang::prelude::*;

/// Event emitted whenever the admin sets the pause flag
#[event]
pub struct PauseStateChangedEvent {
    pub pool: Pubkey,
    pub admin: Pubkey,
    pub paused: bool,
    pub timestamp: i64,
}

/// Sets the pool's pause flag. Setting the current value again is not an error.
pub fn handler(ctx: Context<PauseContract>, paused: bool) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let pool = &mut ctx.accounts.pool;

    pool.set_paused(&admin, paused)?;

    emit!(PauseStateChangedEvent {
        pool: pool.key(),
        admin,
        paused,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Pool {} paused: {}", pool.key(), paused);

    Ok(())
}
