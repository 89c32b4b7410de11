// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_literals::engine::factory::LiteralReaderBuilder;
use decimal_literals::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Decimal Literals Example ===\n");

    let reader = match LiteralReaderBuilder::new()
        .with_event_handler(Arc::new(LoggingEventHandler))
        .build()
    {
        Ok(reader) => reader,
        Err(err) => {
            eprintln!("Invalid configuration: {}", err);
            return;
        },
    };

    let source = "Price = 12.50, Qty = 1_000, Mask = 16#ff, Rate = 2.5e-2, \
                  Nl = $\\n, Bad = 1__6, Oct = 8#19.";
    println!("Source:\n  {}\n", source);

    // Scan and evaluate every literal
    let output = reader.read(source);

    println!("=== Literals ===");
    for literal in &output.literals {
        match &literal.value {
            Ok(value) => println!(
                "  {:<20} {:<18} = {}",
                literal.span.text,
                literal.span.kind().name(),
                value
            ),
            Err(err) => println!("  {:<20} {:<18} ! {}", literal.span.text, "rejected", err),
        }
    }

    println!("\nResidual:\n  {}", output.residual);

    // Exact arithmetic on the values
    println!("\n=== Arithmetic ===");
    let values: Vec<&DecimalValue> = output.values().collect();
    if let [price, qty, mask, rate, ..] = values.as_slice() {
        match price
            .checked_mul(qty)
            .and_then(|total| Ok((total.checked_mul(rate)?, total)))
        {
            Ok((taxed, total)) => {
                println!("  price × qty       = {}", total);
                println!("  total × rate      = {}", taxed);
            },
            Err(err) => println!("  price × qty       ! {}", err),
        }
        println!("  mask - qty        = {}", *mask - *qty);

        match qty.div_rem(mask) {
            Ok((quotient, remainder)) => {
                println!("  qty div mask      = {} rem {}", quotient, remainder)
            },
            Err(err) => println!("  qty div mask      ! {}", err),
        }
    }

    let minus_nine = DecimalValue::from(-9);
    for divisor in [7i64, -7] {
        if let Ok((q, r)) = minus_nine.div_rem(&DecimalValue::from(divisor)) {
            println!("  -9 div {:<2}        = {} rem {}", divisor, q, r);
        }
    }

    if let Err(err) = DecimalValue::one().div_rem(&DecimalValue::zero()) {
        println!("  1 div 0           ! {}", err);
    }

    println!("\n=== Example Complete ===");
}
