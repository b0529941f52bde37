//! Dependency inversion: the store talks to a payment capability, not to a
//! particular payment provider.

use std::fmt;

pub const BIKE_PRICE_DOLLARS: u64 = 200;
pub const HELMET_PRICE_DOLLARS: u64 = 15;

/// An amount of money held in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(u64);

impl Money {
    pub fn from_dollars(dollars: u64) -> Self {
        Money(dollars * 100)
    }

    pub fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    pub fn dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn times(self, quantity: u32) -> Self {
        Money(self.0 * u64::from(quantity))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "${}", self.0 / 100)
        } else {
            write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub payer: String,
    pub amount: Money,
    pub provider: &'static str,
    pub item: Option<String>,
}

impl fmt::Display for PaymentReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} made payment of {} via {} payment",
            self.payer, self.amount, self.provider
        )?;
        if let Some(item) = &self.item {
            write!(f, " for {item}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Milestone 1: Store wired to one concrete provider
// =============================================================================

/// Stripe's native API takes an amount in cents.
#[derive(Debug)]
pub struct Stripe {
    user: String,
}

impl Stripe {
    pub fn new(user: impl Into<String>) -> Self {
        Stripe { user: user.into() }
    }

    pub fn make_payment(&self, amount_in_cents: u64) -> PaymentReceipt {
        PaymentReceipt {
            payer: self.user.clone(),
            amount: Money::from_cents(amount_in_cents),
            provider: "Stripe",
            item: None,
        }
    }
}

/// Swapping providers means editing this type.
#[derive(Debug)]
pub struct LegacyStore {
    stripe: Stripe,
}

impl LegacyStore {
    pub fn new(user: impl Into<String>) -> Self {
        LegacyStore {
            stripe: Stripe::new(user),
        }
    }

    pub fn purchase_bike(&self, quantity: u32) -> PaymentReceipt {
        self.stripe
            .make_payment(BIKE_PRICE_DOLLARS * u64::from(quantity) * 100)
    }

    pub fn purchase_helmet(&self, quantity: u32) -> PaymentReceipt {
        self.stripe
            .make_payment(HELMET_PRICE_DOLLARS * u64::from(quantity) * 100)
    }
}

// =============================================================================
// Milestone 2: Store depending on an abstraction
// =============================================================================

pub trait PaymentProcessor {
    fn make_payment(&self, payer: &str, amount: Money, item: &str) -> PaymentReceipt;
}

#[derive(Debug, Default)]
pub struct StripePaymentProcessor;

impl StripePaymentProcessor {
    fn charge_cents(&self, payer: &str, amount_in_cents: u64, item: &str) -> PaymentReceipt {
        PaymentReceipt {
            payer: payer.to_string(),
            amount: Money::from_cents(amount_in_cents),
            provider: "Stripe",
            item: Some(item.to_string()),
        }
    }
}

impl PaymentProcessor for StripePaymentProcessor {
    fn make_payment(&self, payer: &str, amount: Money, item: &str) -> PaymentReceipt {
        self.charge_cents(payer, amount.cents(), item)
    }
}

#[derive(Debug, Default)]
pub struct PaypalPaymentProcessor;

impl PaypalPaymentProcessor {
    fn charge_dollars(&self, payer: &str, amount_in_dollars: f64, item: &str) -> PaymentReceipt {
        PaymentReceipt {
            payer: payer.to_string(),
            amount: Money::from_cents((amount_in_dollars * 100.0).round() as u64),
            provider: "Paypal",
            item: Some(item.to_string()),
        }
    }
}

impl PaymentProcessor for PaypalPaymentProcessor {
    fn make_payment(&self, payer: &str, amount: Money, item: &str) -> PaymentReceipt {
        self.charge_dollars(payer, amount.dollars(), item)
    }
}

pub struct Store<P> {
    user: String,
    processor: P,
}

impl<P: PaymentProcessor> Store<P> {
    pub fn new(user: impl Into<String>, processor: P) -> Self {
        Store {
            user: user.into(),
            processor,
        }
    }

    pub fn purchase_bike(&self, quantity: u32) -> PaymentReceipt {
        let amount = Money::from_dollars(BIKE_PRICE_DOLLARS).times(quantity);
        self.processor.make_payment(&self.user, amount, "bike")
    }

    pub fn purchase_helmet(&self, quantity: u32) -> PaymentReceipt {
        let amount = Money::from_dollars(HELMET_PRICE_DOLLARS).times(quantity);
        self.processor.make_payment(&self.user, amount, "helmet")
    }
}

// =============================================================================
// Milestone 3: Closures as processors
// =============================================================================

impl<F> PaymentProcessor for F
where
    F: Fn(&str, Money, &str) -> PaymentReceipt,
{
    fn make_payment(&self, payer: &str, amount: Money, item: &str) -> PaymentReceipt {
        self(payer, amount, item)
    }
}

pub fn create_stripe_payment_processor() -> impl PaymentProcessor {
    |payer: &str, amount: Money, item: &str| StripePaymentProcessor.make_payment(payer, amount, item)
}

pub fn create_paypal_payment_processor() -> impl PaymentProcessor {
    |payer: &str, amount: Money, item: &str| PaypalPaymentProcessor.make_payment(payer, amount, item)
}

pub fn create_store<P: PaymentProcessor>(user: &str, processor: P) -> Store<P> {
    Store::new(user, processor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingProcessor {
        calls: RefCell<Vec<(String, Money, String)>>,
    }

    impl PaymentProcessor for RecordingProcessor {
        fn make_payment(&self, payer: &str, amount: Money, item: &str) -> PaymentReceipt {
            self.calls
                .borrow_mut()
                .push((payer.to_string(), amount, item.to_string()));
            PaymentReceipt {
                payer: payer.to_string(),
                amount,
                provider: "Test",
                item: Some(item.to_string()),
            }
        }
    }

    #[test]
    fn test_legacy_store_uses_stripe() {
        let store = LegacyStore::new("Robin");
        assert_eq!(
            store.purchase_bike(2).to_string(),
            "Robin made payment of $400 via Stripe payment"
        );
        assert_eq!(
            store.purchase_helmet(2).to_string(),
            "Robin made payment of $30 via Stripe payment"
        );
    }

    #[test]
    fn test_providers_agree_on_amount() {
        let stripe = Store::new("Robin", StripePaymentProcessor);
        let paypal = Store::new("Robin", PaypalPaymentProcessor);

        assert_eq!(stripe.purchase_bike(2).amount, paypal.purchase_bike(2).amount);
        assert_eq!(
            paypal.purchase_helmet(2).to_string(),
            "Robin made payment of $30 via Paypal payment for helmet"
        );
        assert_eq!(
            stripe.purchase_bike(2).to_string(),
            "Robin made payment of $400 via Stripe payment for bike"
        );
    }

    #[test]
    fn test_store_only_sees_the_capability() {
        let store = Store::new(
            "John",
            RecordingProcessor {
                calls: RefCell::new(Vec::new()),
            },
        );
        store.purchase_bike(1);
        store.purchase_helmet(2);

        let calls = store.processor.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], ("John".to_string(), Money::from_dollars(200), "bike".to_string()));
        assert_eq!(calls[1].1, Money::from_cents(3000));
    }

    #[test]
    fn test_closure_processors() {
        let store = create_store("John", create_paypal_payment_processor());
        assert_eq!(
            store.purchase_bike(1).to_string(),
            "John made payment of $200 via Paypal payment for bike"
        );

        let store = create_store("Robin", create_stripe_payment_processor());
        assert_eq!(store.purchase_helmet(2).provider, "Stripe");
    }

    #[test]
    fn test_money_display_with_cents() {
        assert_eq!(Money::from_cents(1505).to_string(), "$15.05");
        assert_eq!(Money::from_dollars(15).dollars(), 15.0);
    }
}
