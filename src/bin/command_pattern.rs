//! Command pattern demo.
//!
//! Run with: cargo run --bin command_pattern

use anyhow::Result;
use design_patterns::banner;
use design_patterns::command::{
    add_fn, divide_fn, multiply_fn, subtract_fn, AddCommand, AddThenMultiplyCommand, Calculator,
    DivideCommand, MultiplyCommand, OldCalculator,
};

fn main() -> Result<()> {
    design_patterns::init_tracing();

    banner("Plain Calculator");
    let mut old = OldCalculator::new();
    old.add(10.0);
    println!("{}", old.value);
    old.subtract(5.0);
    println!("{}", old.value);
    old.multiply(2.0);
    println!("{}", old.value);
    old.divide(2.0);
    println!("{}", old.value);

    banner("Commands With Undo");
    let mut calculator = Calculator::new();
    calculator.execute_command(AddCommand::new(10.0)?);
    calculator.execute_command(MultiplyCommand::new(2.0)?);
    calculator.print_history();
    println!("{}", calculator.value());
    calculator.undo()?;
    println!("{}", calculator.value());
    calculator.undo()?;
    println!("{}", calculator.value());
    calculator.print_history();

    match calculator.undo() {
        Ok(value) => println!("Unexpected undo to {value}"),
        Err(e) => println!("Expected error: {e}"),
    }

    banner("Composite Command");
    calculator.execute_command(AddThenMultiplyCommand::new(10.0, 2.0)?);
    println!("{}", calculator.value());
    calculator.undo()?;
    println!("{}", calculator.value());

    if let Err(e) = DivideCommand::new(0.0) {
        println!("Expected error: {e}");
    }

    banner("Functional Commands");
    let mut functional = Calculator::new();
    functional.execute_command(add_fn(10.0)?);
    println!("add: {}", functional.value());
    functional.execute_command(subtract_fn(5.0)?);
    println!("subtract: {}", functional.value());
    functional.execute_command(multiply_fn(2.0)?);
    println!("multiply: {}", functional.value());
    functional.execute_command(divide_fn(2.0)?);
    println!("divide: {}", functional.value());
    functional.undo()?;
    println!("After undo: {}", functional.value());
    functional.print_history();

    Ok(())
}
