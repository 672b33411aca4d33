use serde::{Deserialize, Serialize};

/// Delivery status reported in a [`SendReceipt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    /// The provider accepted the message for delivery.
    Sent,
}

/// Standardized result of a successful send, independent of the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    pub status: DeliveryStatus,
    /// Name of the provider that accepted the message.
    pub provider: String,
    /// Provider-assigned message identifier.
    pub message_id: String,
}

impl SendReceipt {
    /// Build a `sent` receipt.
    pub fn sent(provider: impl Into<String>, message_id: impl Into<String>) -> Self {
        Self {
            status: DeliveryStatus::Sent,
            provider: provider.into(),
            message_id: message_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_standard_shape() {
        let receipt = SendReceipt::sent("sendgrid", "abc-123");
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "sent",
                "provider": "sendgrid",
                "message_id": "abc-123"
            })
        );
    }
}
