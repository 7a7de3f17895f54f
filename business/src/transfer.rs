//! Transfer records shown in the transfers table.
//!
//! Type, status and method are closed sets upstream, but records come from
//! outside the dashboard, so each enum keeps unknown values verbatim in an
//! `Other` variant instead of failing to deserialize.

use serde::{Deserialize, Serialize};

/// Color family of a tag. The UI maps each tone to concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Green,
    Red,
    Blue,
    Yellow,
    Gray,
}

/// Direction of a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransferType {
    /// Incoming payment (`PAYIN`).
    PayIn,
    /// Outgoing payment (`PAYOUT`).
    PayOut,
    Invoice,
    Other(String),
}

impl TransferType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::PayIn => "PAYIN",
            Self::PayOut => "PAYOUT",
            Self::Invoice => "Invoice",
            Self::Other(raw) => raw,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::PayIn => Tone::Green,
            Self::PayOut => Tone::Red,
            Self::Invoice => Tone::Blue,
            Self::Other(_) => Tone::Gray,
        }
    }
}

impl From<String> for TransferType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PAYIN" => Self::PayIn,
            "PAYOUT" => Self::PayOut,
            "Invoice" => Self::Invoice,
            _ => Self::Other(raw),
        }
    }
}

impl From<TransferType> for String {
    fn from(value: TransferType) -> Self {
        match value {
            TransferType::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

/// Processing status of a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransferStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Other(String),
}

impl TransferStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Other(raw) => raw,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Completed => Tone::Green,
            Self::Processing => Tone::Blue,
            Self::Pending => Tone::Yellow,
            Self::Failed => Tone::Red,
            Self::Other(_) => Tone::Gray,
        }
    }
}

impl From<String> for TransferStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => Self::Pending,
            "processing" => Self::Processing,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::Other(raw),
        }
    }
}

impl From<TransferStatus> for String {
    fn from(value: TransferStatus) -> Self {
        match value {
            TransferStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

/// Channel a transfer was submitted through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransferMethod {
    Web,
    Api,
    Upload,
    Other(String),
}

impl TransferMethod {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Web => "Web",
            Self::Api => "API",
            Self::Upload => "Upload",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for TransferMethod {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Web" => Self::Web,
            "API" => Self::Api,
            "Upload" => Self::Upload,
            _ => Self::Other(raw),
        }
    }
}

impl From<TransferMethod> for String {
    fn from(value: TransferMethod) -> Self {
        match value {
            TransferMethod::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

/// One payment, payout or invoice record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: String,
    pub beneficiary_name: String,
    pub beneficiary_id: String,
    pub amount: f64,
    pub currency: String,
    #[serde(rename = "type")]
    pub kind: TransferType,
    pub status: TransferStatus,
    pub method: TransferMethod,
    pub fee: f64,
    pub created_at: String,
}

impl Transfer {
    /// Parses `created_at` as RFC 3339.
    pub fn created_at_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|time| time.with_timezone(&chrono::Utc))
    }

    /// Human readable creation time, or the raw value when it does not parse.
    pub fn created_at_display(&self) -> String {
        self.created_at_utc()
            .map(|time| time.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| self.created_at.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json(kind: &str, status: &str, method: &str) -> String {
        format!(
            r#"{{
                "id": "T1",
                "beneficiaryName": "Acme",
                "beneficiaryId": "B1",
                "amount": 1234.5,
                "currency": "USD",
                "type": "{kind}",
                "status": "{status}",
                "method": "{method}",
                "fee": 2.5,
                "createdAt": "2024-03-01T10:15:00Z"
            }}"#
        )
    }

    #[test]
    fn test_deserializes_known_values() {
        let transfer: Transfer =
            serde_json::from_str(&sample_json("PAYOUT", "completed", "API")).unwrap();

        assert_eq!(transfer.kind, TransferType::PayOut);
        assert_eq!(transfer.status, TransferStatus::Completed);
        assert_eq!(transfer.method, TransferMethod::Api);
        assert_eq!(transfer.beneficiary_name, "Acme");
    }

    #[test]
    fn test_unknown_values_are_kept_verbatim() {
        let transfer: Transfer =
            serde_json::from_str(&sample_json("REFUND", "on_hold", "Batch")).unwrap();

        assert_eq!(transfer.kind, TransferType::Other("REFUND".to_owned()));
        assert_eq!(transfer.kind.as_str(), "REFUND");
        assert_eq!(transfer.status.as_str(), "on_hold");
        assert_eq!(transfer.method.as_str(), "Batch");
    }

    #[test]
    fn test_serializes_back_to_wire_names() {
        let transfer: Transfer =
            serde_json::from_str(&sample_json("PAYIN", "pending", "Web")).unwrap();
        let value = serde_json::to_value(&transfer).unwrap();

        assert_eq!(value["type"], "PAYIN");
        assert_eq!(value["status"], "pending");
        assert_eq!(value["method"], "Web");
        assert_eq!(value["beneficiaryId"], "B1");
    }

    #[test]
    fn test_type_tones() {
        assert_eq!(TransferType::PayIn.tone(), Tone::Green);
        assert_eq!(TransferType::PayOut.tone(), Tone::Red);
        assert_eq!(TransferType::Invoice.tone(), Tone::Blue);
        assert_eq!(TransferType::Other("x".to_owned()).tone(), Tone::Gray);
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(TransferStatus::Completed.tone(), Tone::Green);
        assert_eq!(TransferStatus::Processing.tone(), Tone::Blue);
        assert_eq!(TransferStatus::Pending.tone(), Tone::Yellow);
        assert_eq!(TransferStatus::Failed.tone(), Tone::Red);
        assert_eq!(TransferStatus::Other("x".to_owned()).tone(), Tone::Gray);
    }

    #[test]
    fn test_created_at_display_falls_back_to_raw() {
        let mut transfer: Transfer =
            serde_json::from_str(&sample_json("PAYIN", "pending", "Web")).unwrap();
        assert_eq!(transfer.created_at_display(), "2024-03-01 10:15 UTC");

        transfer.created_at = "yesterday".to_owned();
        assert_eq!(transfer.created_at_display(), "yesterday");
    }
}
