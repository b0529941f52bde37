//! Command pattern: every operation is an object that knows how to apply
//! itself and how to reverse itself, so a calculator can keep a history and
//! roll it back one step at a time.

use crate::error::{PatternError, Result};
use std::fmt;
use std::rc::Rc;

// =============================================================================
// Milestone 1: Plain calculator (no undo possible)
// =============================================================================

#[derive(Debug, Default)]
pub struct OldCalculator {
    pub value: f64,
}

impl OldCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: f64) {
        self.value += value;
    }

    pub fn subtract(&mut self, value: f64) {
        self.value -= value;
    }

    pub fn multiply(&mut self, value: f64) {
        self.value *= value;
    }

    pub fn divide(&mut self, value: f64) {
        self.value /= value;
    }
}

// =============================================================================
// Milestone 2: Command trait and history-keeping calculator
// =============================================================================

/// An invertible operation on the calculator value.
///
/// Implementations must satisfy `undo(execute(x)) == x` up to `f64`
/// rounding. For integral operands and states well inside `±2^53` the
/// round trip is exact; fractional values such as `0.1` may come back one
/// rounding step off, and divide may do so for any operand. Constructors
/// reject non-finite operands, so a finite state never turns into NaN or
/// infinity through a command.
pub trait Command {
    fn execute(&self, current: f64) -> f64;
    fn undo(&self, current: f64) -> f64;
    fn name(&self) -> &str;
}

impl fmt::Debug for dyn Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Default)]
pub struct Calculator {
    value: f64,
    history: Vec<Box<dyn Command>>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn execute_command(&mut self, command: impl Command + 'static) {
        self.execute_boxed(Box::new(command));
    }

    pub fn execute_boxed(&mut self, command: Box<dyn Command>) {
        let before = self.value;
        self.value = command.execute(self.value);
        tracing::debug!(command = command.name(), before, after = self.value, "executed");
        self.history.push(command);
    }

    /// Reverts the most recent command.
    ///
    /// With nothing to undo the value is left alone and `EmptyHistory` is
    /// returned.
    pub fn undo(&mut self) -> Result<f64> {
        let command = self.history.pop().ok_or(PatternError::EmptyHistory)?;
        let before = self.value;
        self.value = command.undo(self.value);
        tracing::debug!(command = command.name(), before, after = self.value, "undone");
        Ok(self.value)
    }

    pub fn history_names(&self) -> Vec<&str> {
        self.history.iter().map(|command| command.name()).collect()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn print_history(&self) {
        println!("{:?}", self.history_names());
    }
}

fn finite_operand(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PatternError::InvalidOperand)
    }
}

/// Multiplying or dividing by `value` can be reversed.
fn invertible(value: f64, err: PatternError) -> Result<f64> {
    if value.is_finite() && value != 0.0 {
        Ok(value)
    } else {
        Err(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddCommand {
    value_to_add: f64,
}

impl AddCommand {
    pub fn new(value_to_add: f64) -> Result<Self> {
        Ok(Self {
            value_to_add: finite_operand(value_to_add)?,
        })
    }
}

impl Command for AddCommand {
    fn execute(&self, current: f64) -> f64 {
        current + self.value_to_add
    }

    fn undo(&self, current: f64) -> f64 {
        current - self.value_to_add
    }

    fn name(&self) -> &str {
        "AddCommand"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubtractCommand {
    value_to_subtract: f64,
}

impl SubtractCommand {
    pub fn new(value_to_subtract: f64) -> Result<Self> {
        Ok(Self {
            value_to_subtract: finite_operand(value_to_subtract)?,
        })
    }
}

impl Command for SubtractCommand {
    fn execute(&self, current: f64) -> f64 {
        current - self.value_to_subtract
    }

    fn undo(&self, current: f64) -> f64 {
        current + self.value_to_subtract
    }

    fn name(&self) -> &str {
        "SubtractCommand"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplyCommand {
    value_to_multiply: f64,
}

impl MultiplyCommand {
    /// Zero is rejected: its undo would divide by zero.
    pub fn new(value_to_multiply: f64) -> Result<Self> {
        Ok(Self {
            value_to_multiply: invertible(value_to_multiply, PatternError::InvalidFactor)?,
        })
    }
}

impl Command for MultiplyCommand {
    fn execute(&self, current: f64) -> f64 {
        current * self.value_to_multiply
    }

    fn undo(&self, current: f64) -> f64 {
        current / self.value_to_multiply
    }

    fn name(&self) -> &str {
        "MultiplyCommand"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivideCommand {
    value_to_divide: f64,
}

impl DivideCommand {
    pub fn new(value_to_divide: f64) -> Result<Self> {
        Ok(Self {
            value_to_divide: invertible(value_to_divide, PatternError::InvalidDivisor)?,
        })
    }
}

impl Command for DivideCommand {
    fn execute(&self, current: f64) -> f64 {
        current / self.value_to_divide
    }

    fn undo(&self, current: f64) -> f64 {
        current * self.value_to_divide
    }

    fn name(&self) -> &str {
        "DivideCommand"
    }
}

// =============================================================================
// Milestone 3: Composite command
// =============================================================================

/// Adds, then multiplies. Undo runs the inverses in reverse order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddThenMultiplyCommand {
    add: AddCommand,
    multiply: MultiplyCommand,
}

impl AddThenMultiplyCommand {
    pub fn new(value_to_add: f64, value_to_multiply: f64) -> Result<Self> {
        Ok(Self {
            add: AddCommand::new(value_to_add)?,
            multiply: MultiplyCommand::new(value_to_multiply)?,
        })
    }
}

impl Command for AddThenMultiplyCommand {
    fn execute(&self, current: f64) -> f64 {
        self.multiply.execute(self.add.execute(current))
    }

    fn undo(&self, current: f64) -> f64 {
        self.add.undo(self.multiply.undo(current))
    }

    fn name(&self) -> &str {
        "AddThenMultiplyCommand"
    }
}

// =============================================================================
// Milestone 4: Functional commands built from closures
// =============================================================================

pub struct FnCommand<E, U> {
    name: &'static str,
    execute: E,
    undo: U,
}

impl<E, U> FnCommand<E, U>
where
    E: Fn(f64) -> f64,
    U: Fn(f64) -> f64,
{
    pub fn new(name: &'static str, execute: E, undo: U) -> Self {
        Self { name, execute, undo }
    }
}

impl<E, U> Command for FnCommand<E, U>
where
    E: Fn(f64) -> f64,
    U: Fn(f64) -> f64,
{
    fn execute(&self, current: f64) -> f64 {
        (self.execute)(current)
    }

    fn undo(&self, current: f64) -> f64 {
        (self.undo)(current)
    }

    fn name(&self) -> &str {
        self.name
    }
}

pub fn add_fn(value: f64) -> Result<impl Command> {
    let value = finite_operand(value)?;
    Ok(FnCommand::new("add", move |x| x + value, move |x| x - value))
}

pub fn subtract_fn(value: f64) -> Result<impl Command> {
    let value = finite_operand(value)?;
    Ok(FnCommand::new("subtract", move |x| x - value, move |x| x + value))
}

pub fn multiply_fn(value: f64) -> Result<impl Command> {
    let value = invertible(value, PatternError::InvalidFactor)?;
    Ok(FnCommand::new("multiply", move |x| x * value, move |x| x / value))
}

pub fn divide_fn(value: f64) -> Result<impl Command> {
    let value = invertible(value, PatternError::InvalidDivisor)?;
    Ok(FnCommand::new("divide", move |x| x / value, move |x| x * value))
}

pub fn add_then_multiply_fn(to_add: f64, to_multiply: f64) -> Result<impl Command> {
    let add = add_fn(to_add)?;
    let multiply = multiply_fn(to_multiply)?;
    // Both closures need both sub-commands.
    let add = Rc::new(add);
    let multiply = Rc::new(multiply);
    let (add_undo, multiply_undo) = (Rc::clone(&add), Rc::clone(&multiply));

    Ok(FnCommand::new(
        "add_then_multiply",
        move |x| multiply.execute(add.execute(x)),
        move |x| add_undo.undo(multiply_undo.undo(x)),
    ))
}
