//! Liskov substitution principle.
//!
//! A `Square` that pretends to be a resizable rectangle, and a penguin that
//! pretends to be a flying bird, both surprise code written against the
//! broader contract. Splitting capabilities fixes it.

// =============================================================================
// Milestone 1: Rectangle and Square
// =============================================================================

/// Width and height are meant to be independent.
pub trait Resizable {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_width(&mut self, width: u32);
    fn set_height(&mut self, height: u32);

    fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Rectangle { width, height }
    }
}

impl Resizable for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}

/// Keeps both sides equal, which quietly changes what `set_width` means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    side: u32,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Square { side }
    }
}

impl Resizable for Square {
    fn width(&self) -> u32 {
        self.side
    }

    fn height(&self) -> u32 {
        self.side
    }

    fn set_width(&mut self, width: u32) {
        self.side = width;
    }

    fn set_height(&mut self, height: u32) {
        self.side = height;
    }
}

/// Callers expect the area to grow by exactly one height.
pub fn increase_width(shape: &mut dyn Resizable) {
    let width = shape.width();
    shape.set_width(width.saturating_add(1));
}

// =============================================================================
// Milestone 2: One bird trait for every bird
// =============================================================================

pub trait LegacyBird {
    fn fly(&self) -> String {
        "Flying...".to_string()
    }
}

pub struct LegacyDuck;

impl LegacyDuck {
    pub fn quack(&self) -> String {
        "Quacking...".to_string()
    }
}

impl LegacyBird for LegacyDuck {}

pub struct LegacyPenguin;

impl LegacyPenguin {
    pub fn swim(&self) -> String {
        "Swimming...".to_string()
    }
}

impl LegacyBird for LegacyPenguin {
    fn fly(&self) -> String {
        "Penguins cannot fly".to_string()
    }
}

pub fn make_legacy_bird_fly(bird: &dyn LegacyBird) -> String {
    bird.fly()
}

// =============================================================================
// Milestone 3: Separate capabilities
// =============================================================================

pub trait Flyer {
    fn fly(&self) -> String {
        "Flying...".to_string()
    }
}

pub trait Swimmer {
    fn swim(&self) -> String {
        "Swimming...".to_string()
    }
}

pub trait Quacker {
    fn quack(&self) -> String {
        "Quacking...".to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duck {
    pub name: String,
}

impl Duck {
    pub fn new(name: impl Into<String>) -> Self {
        Duck { name: name.into() }
    }
}

impl Flyer for Duck {}
impl Quacker for Duck {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Penguin {
    pub name: String,
}

impl Penguin {
    pub fn new(name: impl Into<String>) -> Self {
        Penguin { name: name.into() }
    }
}

impl Swimmer for Penguin {}

pub fn make_bird_fly<F: Flyer + ?Sized>(bird: &F) -> String {
    bird.fly()
}

pub fn make_bird_swim<S: Swimmer + ?Sized>(bird: &S) -> String {
    bird.swim()
}

// =============================================================================
// Milestone 4: Asking a bird what it can do
// =============================================================================

pub trait Bird {
    fn name(&self) -> &str;

    fn as_flyer(&self) -> Option<&dyn Flyer> {
        None
    }

    fn as_swimmer(&self) -> Option<&dyn Swimmer> {
        None
    }
}

impl Bird for Duck {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_flyer(&self) -> Option<&dyn Flyer> {
        Some(self as &dyn Flyer)
    }
}

impl Bird for Penguin {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_swimmer(&self) -> Option<&dyn Swimmer> {
        Some(self as &dyn Swimmer)
    }
}

pub fn make_any_bird_fly(bird: &dyn Bird) -> String {
    match bird.as_flyer() {
        Some(flyer) => flyer.fly(),
        None => format!("{} can't fly.", bird.name()),
    }
}

pub fn make_any_bird_swim(bird: &dyn Bird) -> String {
    match bird.as_swimmer() {
        Some(swimmer) => swimmer.swim(),
        None => format!("{} can't swim.", bird.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangles_grow_as_expected() {
        let mut first = Rectangle::new(10, 5);
        let mut second = Rectangle::new(4, 8);
        increase_width(&mut first);
        increase_width(&mut second);
        assert_eq!(first.area(), 55);
        assert_eq!(second.area(), 40);
    }

    #[test]
    fn test_square_breaks_the_rectangle_contract() {
        let mut square = Square::new(5);
        let height_before = square.height();
        increase_width(&mut square);

        assert_ne!(square.height(), height_before);
        assert_ne!(square.area(), 6 * u64::from(height_before));
        assert_eq!(square.area(), 36);
    }

    #[test]
    fn test_large_sides_do_not_overflow() {
        let rectangle = Rectangle::new(70_000, 70_000);
        assert_eq!(rectangle.area(), 4_900_000_000);

        let mut widest = Rectangle::new(u32::MAX, 2);
        increase_width(&mut widest);
        assert_eq!(widest.width(), u32::MAX);
        assert_eq!(widest.area(), u64::from(u32::MAX) * 2);
    }

    #[test]
    fn test_legacy_penguin_refuses_to_fly() {
        assert_eq!(make_legacy_bird_fly(&LegacyDuck), "Flying...");
        assert_eq!(make_legacy_bird_fly(&LegacyPenguin), "Penguins cannot fly");
        assert_eq!(LegacyDuck.quack(), "Quacking...");
        assert_eq!(LegacyPenguin.swim(), "Swimming...");
    }

    #[test]
    fn test_capabilities_only_where_they_exist() {
        let duck = Duck::new("Daffy");
        let penguin = Penguin::new("Pingu");
        assert_eq!(make_bird_fly(&duck), "Flying...");
        assert_eq!(duck.quack(), "Quacking...");
        assert_eq!(make_bird_swim(&penguin), "Swimming...");
    }

    #[test]
    fn test_capability_queries() {
        let birds: Vec<Box<dyn Bird>> = vec![Box::new(Duck::new("Daffy")), Box::new(Penguin::new("Pingu"))];
        let flights: Vec<String> = birds.iter().map(|b| make_any_bird_fly(b.as_ref())).collect();
        let swims: Vec<String> = birds.iter().map(|b| make_any_bird_swim(b.as_ref())).collect();

        assert_eq!(flights, vec!["Flying...", "Pingu can't fly."]);
        assert_eq!(swims, vec!["Daffy can't swim.", "Swimming..."]);
    }
}
