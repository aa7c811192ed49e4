use calcore::{CalcError, Calculator};

fn main() -> Result<(), CalcError> {
    pretty_env_logger::init();

    let mut calc = Calculator::new();

    calc.add(2.0, 3.0)?;
    calc.divide(10.0, 4.0)?;
    calc.power(2.0, 10.0)?;
    calc.evaluate("(2 + 3) * 4 - 1.5")?;

    let total = calc.evaluate("100 * 1.2")?;
    calc.memory_store(total);

    for entry in calc.history() {
        println!("{}", entry);
    }
    println!("memory: {}", calc.memory_recall());

    Ok(())
}
