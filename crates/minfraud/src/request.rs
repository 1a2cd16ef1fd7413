//! Request body sent to every minFraud endpoint.
//!
//! Only `device.ip_address` is required. Everything else is optional and is
//! left out of the JSON when unset. Documented ranges and formats (RFC 3339
//! times, ISO country codes, MD5 hex strings) are checked by the service, not
//! here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub device: Device,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<Event>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Billing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Shipping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopping_cart: Option<Vec<ShoppingCartItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_inputs: Option<BTreeMap<String, CustomInputValue>>,
}

impl Request {
    pub fn new(device: Device) -> Self {
        Self {
            device,
            event: None,
            account: None,
            email: None,
            billing: None,
            shipping: None,
            payment: None,
            order: None,
            credit_card: None,
            shopping_cart: None,
            custom_inputs: None,
        }
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.event = Some(event);
        self
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.account = Some(account);
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_billing(mut self, billing: Billing) -> Self {
        self.billing = Some(billing);
        self
    }

    pub fn with_shipping(mut self, shipping: Shipping) -> Self {
        self.shipping = Some(shipping);
        self
    }

    pub fn with_payment(mut self, payment: Payment) -> Self {
        self.payment = Some(payment);
        self
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_credit_card(mut self, credit_card: CreditCard) -> Self {
        self.credit_card = Some(credit_card);
        self
    }

    /// Append a line item, creating the cart on first use. Order is preserved,
    /// so warnings like `/shopping_cart/1/price` point at the second call.
    pub fn add_shopping_cart_item(mut self, item: ShoppingCartItem) -> Self {
        self.shopping_cart.get_or_insert_with(Vec::new).push(item);
        self
    }

    /// Set a custom input. Keys must match the ones configured on the account.
    pub fn insert_custom_input(
        mut self,
        key: impl Into<String>,
        value: impl Into<CustomInputValue>,
    ) -> Self {
        self.custom_inputs
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// The device used in the transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// IPv4 or IPv6 presentation format.
    pub ip_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    /// Seconds since the start of the user's first visit, not the current one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_age: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl Device {
    pub fn new(ip_address: impl Into<String>) -> Self {
        Self {
            ip_address: ip_address.into(),
            ..Default::default()
        }
    }
}

/// General information about the event being scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Required for resellers, payment providers, gateways and affiliate networks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<String>,
    /// RFC 3339 date-time within the past 10 years. The service uses "now" when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    AccountCreation,
    AccountLogin,
    EmailChange,
    PasswordReset,
    PayoutChange,
    Purchase,
    RecurringPurchase,
    Referral,
    Survey,
}

/// End-user account on the site where the event took place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Stable internal ID, not the login name and not the MaxMind account ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_md5: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Email {
    /// A full address, or the MD5 of the lowercased address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

/// Billing name, address and phone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Billing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// ISO 3166-2 subdivision code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal: Option<String>,
    /// Without the country code. Punctuation is stripped server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_country_code: Option<String>,
}

/// Shipping takes every billing field plus a delivery speed. On the wire the
/// billing fields sit at the same level as `delivery_speed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shipping {
    #[serde(flatten)]
    pub address: Billing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_speed: Option<DeliverySpeed>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliverySpeed {
    SameDay,
    Overnight,
    Expedited,
    Standard,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor: Option<PaymentProcessor>,
    /// Leave unset while the transaction is neither approved nor denied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub was_authorized: Option<bool>,
    /// Leave unset unless the transaction was declined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decline_code: Option<String>,
}

/// Payment processors recognised by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentProcessor {
    Adyen,
    Altapay,
    AmazonPayments,
    AmericanExpressPaymentGateway,
    Authorizenet,
    Balanced,
    Beanstream,
    Bluepay,
    Bluesnap,
    Bpoint,
    Braintree,
    Ccavenue,
    Ccnow,
    ChasePaymentech,
    CheckoutCom,
    Cielo,
    Collector,
    Commdoo,
    Compropago,
    ConceptPayments,
    Conekta,
    CtPayments,
    Cuentadigital,
    Curopayments,
    Cybersource,
    Dalenys,
    Dalpay,
    Datacash,
    Dibs,
    DigitalRiver,
    Ebs,
    Ecomm365,
    Elavon,
    Emerchantpay,
    Epay,
    EprocessingNetwork,
    Eway,
    Exact,
    FirstData,
    GlobalPayments,
    Gocardless,
    Heartland,
    Hipay,
    Ingenico,
    Internetsecure,
    IntuitQuickbooksPayments,
    Iugu,
    LemonWay,
    MastercardPaymentGateway,
    Mercadopago,
    MerchantEsolutions,
    Mirjeh,
    Mollie,
    MonerisSolutions,
    Nmi,
    Oceanpayment,
    Oney,
    Openpaymx,
    OptimalPayments,
    Orangepay,
    Other,
    PacnetServices,
    Payeezy,
    Payfast,
    Paygate,
    Paylike,
    PaymentExpress,
    Paymentwall,
    Payone,
    Paypal,
    Payplus,
    Paystation,
    Paytrace,
    Paytrail,
    Payture,
    Payu,
    Payulatam,
    Payway,
    Payza,
    Pinpayments,
    Posconnect,
    PrincetonPaymentSolutions,
    Psigate,
    Qiwi,
    Quickpay,
    Raberil,
    Rede,
    Redpagos,
    Rewardspay,
    Sagepay,
    Securetrading,
    SimplifyCommerce,
    Skrill,
    Smartcoin,
    Smartdebit,
    SolidtrustPay,
    SpsDecidir,
    Stripe,
    Synapsefi,
    Telerecargas,
    Towah,
    TransactPro,
    UsaEpay,
    Vantiv,
    Verepay,
    Vericheck,
    Vindicia,
    VirtualCardServices,
    Vme,
    Vpos,
    Wirecard,
    Worldpay,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Total before taxes and discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Comma-separated when several codes were used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaffiliate_id: Option<String>,
    /// Absolute URI including the scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_gift: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_gift_message: Option<bool>,
}

/// Card details. Never the full card number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    /// First six digits (IIN).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_id_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_4_digits: Option<String>,
    /// Printable ASCII without spaces. All-digit tokens must be longer than 19 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_phone_country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_phone_number: Option<String>,
    /// AVS result code as returned by the processor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avs_result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv_result: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingCartItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
    /// Per-unit price in the order currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Value of a caller-defined custom input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomInputValue {
    Bool(bool),
    Number(f64),
    String(String),
}

impl From<bool> for CustomInputValue {
    fn from(v: bool) -> Self {
        CustomInputValue::Bool(v)
    }
}

impl From<f64> for CustomInputValue {
    fn from(v: f64) -> Self {
        CustomInputValue::Number(v)
    }
}

// Only integer types that fit an f64 exactly.
impl From<i32> for CustomInputValue {
    fn from(v: i32) -> Self {
        CustomInputValue::Number(f64::from(v))
    }
}

impl From<u32> for CustomInputValue {
    fn from(v: u32) -> Self {
        CustomInputValue::Number(f64::from(v))
    }
}

impl From<String> for CustomInputValue {
    fn from(v: String) -> Self {
        CustomInputValue::String(v)
    }
}

impl From<&str> for CustomInputValue {
    fn from(v: &str) -> Self {
        CustomInputValue::String(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_request_only_has_ip() {
        let request = Request::new(Device::new("81.2.69.142"));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "device": { "ip_address": "81.2.69.142" } }));
    }

    #[test]
    fn test_shipping_flattens_billing_fields() {
        let shipping = Shipping {
            address: Billing {
                city: Some("London".to_string()),
                country: Some("GB".to_string()),
                ..Default::default()
            },
            delivery_speed: Some(DeliverySpeed::SameDay),
        };
        let value = serde_json::to_value(&shipping).unwrap();
        assert_eq!(
            value,
            json!({ "city": "London", "country": "GB", "delivery_speed": "same_day" })
        );

        let back: Shipping = serde_json::from_value(value).unwrap();
        assert_eq!(back, shipping);
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_value(EventType::RecurringPurchase).unwrap(),
            "recurring_purchase"
        );
        assert_eq!(
            serde_json::to_value(PaymentProcessor::AmericanExpressPaymentGateway).unwrap(),
            "american_express_payment_gateway"
        );
        assert_eq!(
            serde_json::to_value(PaymentProcessor::Ecomm365).unwrap(),
            "ecomm365"
        );
        assert_eq!(
            serde_json::to_value(PaymentProcessor::CheckoutCom).unwrap(),
            "checkout_com"
        );
    }

    #[test]
    fn test_event_type_field_is_named_type() {
        let event = Event {
            event_type: Some(EventType::Purchase),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({ "type": "purchase" })
        );
    }

    #[test]
    fn test_builder_populates_cart_and_custom_inputs() {
        let request = Request::new(Device::new("2001:db8::1"))
            .add_shopping_cart_item(ShoppingCartItem {
                item_id: Some("sku-1".to_string()),
                quantity: Some(2),
                price: Some(9.99),
                ..Default::default()
            })
            .add_shopping_cart_item(ShoppingCartItem {
                item_id: Some("sku-2".to_string()),
                ..Default::default()
            })
            .insert_custom_input("loyalty_member", true)
            .insert_custom_input("previous_orders", 12)
            .insert_custom_input("segment", "vip");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["shopping_cart"][0]["item_id"], "sku-1");
        assert_eq!(value["shopping_cart"][1]["item_id"], "sku-2");
        assert_eq!(value["custom_inputs"]["loyalty_member"], true);
        assert_eq!(value["custom_inputs"]["previous_orders"], 12.0);
        assert_eq!(value["custom_inputs"]["segment"], "vip");
    }

    #[test]
    fn test_integer_custom_inputs_convert_exactly() {
        assert_eq!(
            CustomInputValue::from(i32::MAX),
            CustomInputValue::Number(2_147_483_647.0)
        );
        assert_eq!(
            CustomInputValue::from(i32::MIN),
            CustomInputValue::Number(-2_147_483_648.0)
        );
        assert_eq!(
            CustomInputValue::from(u32::MAX),
            CustomInputValue::Number(4_294_967_295.0)
        );
    }

    #[test]
    fn test_custom_input_untagged_parse() {
        let inputs: BTreeMap<String, CustomInputValue> =
            serde_json::from_value(json!({ "a": false, "b": 3.5, "c": "x" })).unwrap();
        assert_eq!(inputs["a"], CustomInputValue::Bool(false));
        assert_eq!(inputs["b"], CustomInputValue::Number(3.5));
        assert_eq!(inputs["c"], CustomInputValue::String("x".to_string()));
    }

    #[test]
    fn test_full_request_shape() {
        let request = Request::new(Device {
            ip_address: "81.2.69.142".to_string(),
            user_agent: Some("Mozilla/5.0".to_string()),
            session_age: Some(3600.5),
            ..Default::default()
        })
        .with_event(Event {
            transaction_id: Some("txn-1".to_string()),
            time: Some("2012-04-12T23:20:50.52Z".to_string()),
            ..Default::default()
        })
        .with_email(Email {
            address: Some("test@maxmind.com".to_string()),
            ..Default::default()
        })
        .with_payment(Payment {
            processor: Some(PaymentProcessor::Stripe),
            was_authorized: Some(false),
            decline_code: Some("invalid number".to_string()),
        })
        .with_order(Order {
            amount: Some(323.21),
            currency: Some("USD".to_string()),
            is_gift: Some(true),
            ..Default::default()
        })
        .with_credit_card(CreditCard {
            issuer_id_number: Some("411111".to_string()),
            last_4_digits: Some("7643".to_string()),
            ..Default::default()
        });

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["device"]["session_age"], 3600.5);
        assert_eq!(value["event"]["time"], "2012-04-12T23:20:50.52Z");
        assert_eq!(value["payment"]["processor"], "stripe");
        assert_eq!(value["payment"]["was_authorized"], false);
        assert_eq!(value["order"]["amount"], 323.21);
        assert_eq!(value["credit_card"]["last_4_digits"], "7643");
        assert!(value.get("billing").is_none());
        assert!(value.get("shopping_cart").is_none());
    }
}
