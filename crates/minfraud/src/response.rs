//! Response bodies for the three minFraud endpoints.
//!
//! [`ScoreResponse`] is the common core. [`InsightsResponse`] embeds it and adds
//! enrichment objects; [`FactorsResponse`] embeds Insights and adds the
//! disposition and subscores. The embedding is flattened, so each type parses
//! the flat JSON object the matching endpoint returns. Callers pick the type
//! from the endpoint they called; nothing here inspects a body to decide.
//!
//! Every scalar is optional. The service omits keys it cannot compute, and
//! re-serializing a parsed response leaves them out again. Numbers keep the
//! representation they arrived in (`100` stays `100`), and keys not modelled
//! here land in the innermost type's `extra` map. `InsightsResponse` and
//! `FactorsResponse` carry no map of their own; their unknown keys end up in
//! `score.extra`, so each key is stored exactly once.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Response from `/score`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResponse {
    /// UUID of this minFraud response, for log searches and support requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 0.01 to 99. A score of 20 means a 20% chance of fraud.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<Number>,
    /// Approximate USD left on the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funds_remaining: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queries_remaining: Option<u64>,
    /// Absent and empty are kept apart so a parsed body re-serializes as it came in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<Warning>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<IpAddress>,
    /// Keys this crate does not model, kept so nothing the service sends is lost.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response from `/insights`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightsResponse {
    #[serde(flatten)]
    pub score: ScoreResponse,
    /// Absent when no IIN was sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCardInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<DeviceInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<BillingAddress>,
}

/// Response from `/factors`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorsResponse {
    #[serde(flatten)]
    pub insights: InsightsResponse,
    /// Only present when the account has custom rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<Disposition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscores: Option<Subscores>,
}

impl ScoreResponse {
    /// Warnings in the response, empty when the key was absent.
    pub fn warnings(&self) -> &[Warning] {
        self.warnings.as_deref().unwrap_or_default()
    }

    /// `risk_score` as a float.
    pub fn risk_score_f64(&self) -> Option<f64> {
        self.risk_score.as_ref().and_then(Number::as_f64)
    }
}

impl InsightsResponse {
    pub fn as_score(&self) -> &ScoreResponse {
        &self.score
    }

    pub fn into_score(self) -> ScoreResponse {
        self.score
    }
}

impl FactorsResponse {
    pub fn as_insights(&self) -> &InsightsResponse {
        &self.insights
    }

    pub fn as_score(&self) -> &ScoreResponse {
        &self.insights.score
    }

    pub fn into_insights(self) -> InsightsResponse {
        self.insights
    }
}

impl From<InsightsResponse> for ScoreResponse {
    fn from(r: InsightsResponse) -> Self {
        r.score
    }
}

impl From<FactorsResponse> for InsightsResponse {
    fn from(r: FactorsResponse) -> Self {
        r.insights
    }
}

/// An issue with the request that did not stop it from being scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub code: WarningCode,
    /// Human-readable text. It may change at any time; match on `code` instead.
    pub warning: String,
    /// JSON Pointer (RFC 6901) to the offending input, e.g. `/shopping_cart/1/price`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_pointer: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCode {
    BillingCityNotFound,
    /// Billing address given without a billing country.
    BillingCountryMissing,
    BillingCountryNotFound,
    BillingPostalNotFound,
    /// A value does not meet its constraints, e.g. "United States" as a country code.
    InputInvalid,
    /// Unknown key in the request body.
    InputUnknown,
    /// The IP address could not be geolocated.
    IpAddressNotFound,
    ShippingCityNotFound,
    ShippingCountryMissing,
    ShippingCountryNotFound,
    ShippingPostalNotFound,
}

impl WarningCode {
    pub fn as_str(self) -> &'static str {
        match self {
            WarningCode::BillingCityNotFound => "BILLING_CITY_NOT_FOUND",
            WarningCode::BillingCountryMissing => "BILLING_COUNTRY_MISSING",
            WarningCode::BillingCountryNotFound => "BILLING_COUNTRY_NOT_FOUND",
            WarningCode::BillingPostalNotFound => "BILLING_POSTAL_NOT_FOUND",
            WarningCode::InputInvalid => "INPUT_INVALID",
            WarningCode::InputUnknown => "INPUT_UNKNOWN",
            WarningCode::IpAddressNotFound => "IP_ADDRESS_NOT_FOUND",
            WarningCode::ShippingCityNotFound => "SHIPPING_CITY_NOT_FOUND",
            WarningCode::ShippingCountryMissing => "SHIPPING_COUNTRY_MISSING",
            WarningCode::ShippingCountryNotFound => "SHIPPING_COUNTRY_NOT_FOUND",
            WarningCode::ShippingPostalNotFound => "SHIPPING_POSTAL_NOT_FOUND",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk data for the request's IP address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpAddress {
    /// 0.01 to 99.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<IpCountry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<IpLocation>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpCountry {
    /// Absent when the IP country could not be identified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_high_risk: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpLocation {
    /// RFC 3339 time of the transaction in the IP's time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditCardInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<CreditCardIssuer>,
    /// "Visa", "Discover", "American Express", ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Where most holders of this IIN bill from, else the issuing bank's country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_issued_in_billing_address_country: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_prepaid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_virtual: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardType>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Charge,
    Credit,
    Debit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardIssuer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches_provided_name: Option<bool>,
    /// May be out of date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches_provided_phone_number: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Device MaxMind associates with the IP address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// 0.01 to 99 confidence that `id` is one device rather than a cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Number>,
    /// Requires the Device Tracking Add-on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailInfo {
    /// `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_high_risk: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillingAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_postal_in_city: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<Number>,
    /// Kilometres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_to_ip_location: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_in_ip_country: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddress {
    #[serde(flatten)]
    pub address: BillingAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_high_risk: Option<bool>,
    /// Kilometres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_to_billing_address: Option<Number>,
}

/// Outcome of the account's custom rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disposition {
    pub action: Action,
    pub reason: Reason,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Accept,
    Reject,
    ManualReview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    Default,
    CustomRule,
}

/// Per-component risk that feeds `risk_score`. Each value is 0.01 to 99 when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscores {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avs_result: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_distance_to_ip_location: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser: Option<Number>,
    /// Only for accounts that send chargeback data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chargeback: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_mismatch: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv_result: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_domain: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_tenure: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_tenure: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_id_number: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_amount: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_distance_to_ip_location: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
