//! Dependency inversion demo.
//!
//! Run with: cargo run --bin dependency_inversion

use design_patterns::banner;
use design_patterns::dependency_inversion::{
    create_paypal_payment_processor, create_store, create_stripe_payment_processor, LegacyStore,
    PaypalPaymentProcessor, Store, StripePaymentProcessor,
};

fn main() {
    design_patterns::init_tracing();

    banner("Principle Violation");
    let store = LegacyStore::new("Robin");
    println!("{}", store.purchase_bike(2));
    println!("{}", store.purchase_helmet(2));

    banner("Principle Adhered");
    let stripe_store = Store::new("Robin", StripePaymentProcessor);
    println!("{}", stripe_store.purchase_bike(2));
    println!("{}", stripe_store.purchase_helmet(2));

    let paypal_store = Store::new("John", PaypalPaymentProcessor);
    println!("{}", paypal_store.purchase_bike(1));
    println!("{}", paypal_store.purchase_helmet(2));

    banner("Functional Version");
    let stripe_store = create_store("Robin", create_stripe_payment_processor());
    println!("{}", stripe_store.purchase_bike(2));
    println!("{}", stripe_store.purchase_helmet(2));

    let paypal_store = create_store("John", create_paypal_payment_processor());
    println!("{}", paypal_store.purchase_bike(1));
    println!("{}", paypal_store.purchase_helmet(2));
}
