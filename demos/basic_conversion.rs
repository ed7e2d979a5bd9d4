// ============================================================================
// Basic Conversion Example
// ============================================================================
//
// Run with `cargo run --example basic_conversion --features logging` to see
// the converter events on stderr.

use radix_converter::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    println!("=== Radix Converter Example ===\n");

    let converter = Converter::new(ConverterConfig::default(), Arc::new(LoggingEventHandler));

    let inputs = [
        ("A.F", Radix::HEXADECIMAL),
        ("1010", Radix::BINARY),
        ("0.1", Radix::DECIMAL),
        ("0x7FFFFFFFFFFFFFFFFFFFFFFF.8", Radix::HEXADECIMAL),
        ("755", Radix::OCTAL),
    ];

    for (text, source) in inputs {
        println!("{} (base {}):", text, source);
        match converter.convert(text, source) {
            Ok(columns) => {
                println!("  exact value: {}", columns.value());
                for (radix, rendered) in &columns {
                    println!("  base {:>2}: {}", radix, rendered);
                }
            },
            Err(error) => println!("  error: {}", error),
        }
        println!();
    }

    // Rejected inputs carry the reason
    println!("=== Invalid Input ===");
    for (text, source) in [("", Radix::DECIMAL), ("1.2.3", Radix::DECIMAL), ("102", Radix::BINARY)] {
        match parse(text, source) {
            Ok(value) => println!("  {:?} parsed as {}", text, value),
            Err(error) => println!("  {:?}: {}", text, error),
        }
    }

    // Precision is a truncating budget
    println!("\n=== Precision ===");
    let tenth = parse("0.1", Radix::DECIMAL).unwrap();
    for precision in [4, 8, 16, 32] {
        println!("  0.1 -> base 2 @ {:>2}: {}", precision, render(&tenth, Radix::BINARY, precision));
    }
}
