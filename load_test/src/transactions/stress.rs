// Stress transaction - one GET, then a half second pause

use std::time::Duration;

use goose::prelude::*;

use super::TARGET_PATH;

/// Pause between iterations for stress profiles.
pub const PAUSE: Duration = Duration::from_millis(500);

pub async fn stress(user: &mut GooseUser) -> TransactionResult {
    let _goose = user.get(TARGET_PATH).await?;

    Ok(())
}
