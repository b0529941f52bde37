//! Interface segregation: game entities.
//!
//! A single "entity" interface forces walls to pretend to attack and turrets
//! to pretend to take damage. Small capability traits let each entity opt in
//! to exactly what it does.

// =============================================================================
// Milestone 1: One fat interface
// =============================================================================

pub trait FatEntity {
    fn name(&self) -> &str;
    fn move_entity(&mut self) -> Option<String>;
    fn attack(&self, target: &mut dyn FatEntity) -> Option<String>;
    fn take_damage(&mut self, amount: i32) -> Option<String>;
}

pub struct FatWall {
    pub name: String,
    pub health: i32,
}

impl FatEntity for FatWall {
    fn name(&self) -> &str {
        &self.name
    }

    // Walls cannot move or attack but must still answer.
    fn move_entity(&mut self) -> Option<String> {
        None
    }

    fn attack(&self, _target: &mut dyn FatEntity) -> Option<String> {
        None
    }

    fn take_damage(&mut self, amount: i32) -> Option<String> {
        self.health = self.health.saturating_sub(amount);
        Some(format!("{} took {} damage", self.name, amount))
    }
}

pub struct FatTurret {
    pub name: String,
    pub attack_damage: i32,
}

impl FatEntity for FatTurret {
    fn name(&self) -> &str {
        &self.name
    }

    fn move_entity(&mut self) -> Option<String> {
        None
    }

    fn attack(&self, target: &mut dyn FatEntity) -> Option<String> {
        let line = format!(
            "{} attacked {} for {} damage",
            self.name,
            target.name(),
            self.attack_damage
        );
        target.take_damage(self.attack_damage);
        Some(line)
    }

    fn take_damage(&mut self, _amount: i32) -> Option<String> {
        None
    }
}

// =============================================================================
// Milestone 2: Capability traits
// =============================================================================

pub trait Named {
    fn name(&self) -> &str;
}

pub trait Mover: Named {
    fn move_entity(&mut self) -> String {
        format!("{} moved", self.name())
    }
}

pub trait Damageable: Named {
    fn health(&self) -> i32;
    fn health_mut(&mut self) -> &mut i32;

    fn take_damage(&mut self, amount: i32) -> Vec<String> {
        let health = self.health_mut();
        *health = health.saturating_sub(amount);
        vec![
            format!("{} took {} damage", self.name(), amount),
            format!("{} has {} health remaining", self.name(), self.health()),
        ]
    }
}

pub trait Attacker: Named {
    fn attack_damage(&self) -> i32;

    fn attack(&self, target: &mut dyn Damageable) -> Vec<String> {
        let mut events = vec![format!(
            "{} attacked {} for {} damage",
            self.name(),
            target.name(),
            self.attack_damage()
        )];
        events.extend(target.take_damage(self.attack_damage()));
        events
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: String,
    attack_damage: i32,
    health: i32,
}

impl Character {
    pub fn new(name: impl Into<String>, attack_damage: i32, health: i32) -> Self {
        Character {
            name: name.into(),
            attack_damage,
            health,
        }
    }
}

impl Named for Character {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Mover for Character {}

impl Attacker for Character {
    fn attack_damage(&self) -> i32 {
        self.attack_damage
    }
}

impl Damageable for Character {
    fn health(&self) -> i32 {
        self.health
    }

    fn health_mut(&mut self) -> &mut i32 {
        &mut self.health
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wall {
    name: String,
    health: i32,
}

impl Wall {
    pub fn new(name: impl Into<String>, health: i32) -> Self {
        Wall {
            name: name.into(),
            health,
        }
    }
}

impl Named for Wall {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Damageable for Wall {
    fn health(&self) -> i32 {
        self.health
    }

    fn health_mut(&mut self) -> &mut i32 {
        &mut self.health
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turret {
    name: String,
    attack_damage: i32,
}

impl Turret {
    pub fn new(name: impl Into<String>, attack_damage: i32) -> Self {
        Turret {
            name: name.into(),
            attack_damage,
        }
    }
}

impl Named for Turret {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Attacker for Turret {
    fn attack_damage(&self) -> i32 {
        self.attack_damage
    }
}
