// Smoke transaction - one GET, then a one second pause

use std::time::Duration;

use goose::prelude::*;

use super::TARGET_PATH;

/// Pause between iterations for smoke profiles.
pub const PAUSE: Duration = Duration::from_secs(1);

/// Issue a single GET against the target endpoint.
///
/// Status codes and transport errors are recorded by goose; the pause is
/// applied as the scenario's wait time.
pub async fn smoke(user: &mut GooseUser) -> TransactionResult {
    let _goose = user.get(TARGET_PATH).await?;

    Ok(())
}
