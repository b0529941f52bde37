//! Liskov substitution demo.
//!
//! Run with: cargo run --bin liskov_substitution

use design_patterns::banner;
use design_patterns::liskov::{
    increase_width, make_any_bird_fly, make_any_bird_swim, make_bird_fly, make_bird_swim,
    make_legacy_bird_fly, Duck, LegacyDuck, LegacyPenguin, Penguin, Quacker, Rectangle, Resizable,
    Square,
};

fn main() {
    design_patterns::init_tracing();

    banner("Rectangle And Square");
    let mut rectangle1 = Rectangle::new(10, 5);
    let mut rectangle2 = Rectangle::new(4, 8);
    increase_width(&mut rectangle1);
    increase_width(&mut rectangle2);
    println!("{}", rectangle1.area());
    println!("{}", rectangle2.area());

    let mut square = Square::new(5);
    increase_width(&mut square);
    println!("square: expected 30, got {}", square.area());

    banner("Every Bird Flies");
    println!("{}", make_legacy_bird_fly(&LegacyDuck));
    println!("{}", make_legacy_bird_fly(&LegacyPenguin));

    banner("Separate Capabilities");
    let duck = Duck::new("Daffy");
    let penguin = Penguin::new("Pingu");
    println!("{}", make_bird_fly(&duck));
    println!("{}", duck.quack());
    println!("{}", make_bird_swim(&penguin));

    banner("Asking What A Bird Can Do");
    println!("{}", make_any_bird_fly(&duck));
    println!("{}", make_any_bird_fly(&penguin));
    println!("{}", make_any_bird_swim(&duck));
    println!("{}", make_any_bird_swim(&penguin));
}
