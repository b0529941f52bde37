//! Interface segregation demo.
//!
//! Run with: cargo run --bin interface_segregation

use design_patterns::banner;
use design_patterns::interface_segregation::{
    Attacker, Character, FatEntity, FatTurret, FatWall, Mover, Turret, Wall,
};

fn print_all(lines: impl IntoIterator<Item = String>) {
    for line in lines {
        println!("{line}");
    }
}

fn main() {
    design_patterns::init_tracing();

    banner("One Interface For Everything");
    let mut fat_wall = FatWall {
        name: "Wall".into(),
        health: 200,
    };
    let fat_turret = FatTurret {
        name: "Turret".into(),
        attack_damage: 5,
    };
    print_all(fat_turret.attack(&mut fat_wall));
    println!("Wall moved? {:?}", fat_wall.move_entity());

    banner("Capability Traits");
    let turret = Turret::new("Turret", 5);
    let mut character = Character::new("Character", 3, 100);
    let mut wall = Wall::new("Wall", 200);

    print_all(turret.attack(&mut character));
    println!("{}", character.move_entity());
    print_all(character.attack(&mut wall));
}
