//! Builder pattern demo.
//!
//! Run with: cargo run --bin builder_pattern

use anyhow::Result;
use design_patterns::banner;
use design_patterns::builder::{create_address, create_user, Address, User, UserBuilder, UserOptions};

fn main() -> Result<()> {
    design_patterns::init_tracing();

    banner("Positional Constructor");
    let user = User::new("Bob", None, None, None);
    println!("{}", user.to_json());
    // Only the address is known, but every slot before it must be filled.
    let user_address = User::new("Bob", None, None, Some(Address::new("12345", "Main St.")));
    println!("{}", user_address.to_json());

    banner("Consuming Builder");
    let bare = UserBuilder::new("Bob").build()?;
    let user_two = UserBuilder::new("Bob").age(37).phone("1234567890").build()?;
    println!("{}", bare.to_json());
    println!("{}", user_two.to_json());

    match UserBuilder::new("").age(37).build() {
        Ok(user) => println!("Unexpected success: {user:?}"),
        Err(e) => println!("Expected error: {e}"),
    }

    banner("Options With Defaults");
    let user_three = User::with_options(
        "Bob",
        UserOptions {
            age: Some(40),
            address: Some(Address::new("12345", "Main St.")),
            ..Default::default()
        },
    )?;
    println!("{}", user_three.to_json());

    let from_json = UserOptions::from_json(r#"{"age": 40}"#)?;
    println!("Options parsed from JSON: {from_json:?}");
    if let Err(e) = UserOptions::from_json(r#"{"age": 40, "nickname": "bobby"}"#) {
        println!("Expected error: {e}");
    }

    banner("Functional Version");
    let user_four = create_user(
        "Bob",
        UserOptions {
            age: Some(40),
            address: Some(create_address("12345", "Main St.")),
            ..Default::default()
        },
    )?;
    println!("{}", user_four.to_json());

    Ok(())
}
