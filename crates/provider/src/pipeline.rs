use tracing::{debug, info, instrument, warn};

use crate::error::EmailError;
use crate::provider::EmailProvider;
use crate::receipt::SendReceipt;

/// Drive a provider through validate, prepare, transmit and parse.
///
/// The first failing step aborts the run and its error is returned as is.
/// Nothing is transmitted unless validation succeeded.
#[instrument(skip(provider), fields(provider = provider.name()))]
pub async fn run<P: EmailProvider>(provider: &P) -> Result<SendReceipt, EmailError> {
    if let Err(e) = provider.validate_input() {
        debug!(error = %e, "draft rejected by validation");
        return Err(e);
    }

    let payload = provider.prepare_payload();

    let response = provider.send_request(&payload).await.map_err(|e| {
        warn!(error = %e, "transmission failed");
        e
    })?;

    let receipt = provider.parse_response(response).map_err(|e| {
        warn!(error = %e, "provider reported a failure");
        e
    })?;

    info!(message_id = %receipt.message_id, "email accepted by provider");
    Ok(receipt)
}
