//! Mock DOM Calculator Demo
//!
//! Clicks keypad buttons on the in-memory page and prints what the page shows.
//!
//! Run with: cargo run --example keypad_dom_demo

use keypad_calc::driver::{run_full_specification, CalculatorDriver};
use keypad_calc::wasm::{DomDriver, RESULT_ID};

fn main() {
    let mut driver = DomDriver::new();

    println!("Keypad:");
    for key in driver.keypad().keys() {
        println!("   {:<14} {:>2}  -> {}", key.id, key.label, key.token());
    }
    println!();

    let clicks = [
        "btn-3",
        "btn-add",
        "btn-4",
        "btn-multiply",
        "btn-2",
        "btn-calc",
    ];
    println!("Clicking: {}", clicks.join(" "));
    for id in clicks {
        driver.click(id);
        println!(
            "   {id:<14} display = {}",
            driver.dom().get_element_text(RESULT_ID).unwrap_or_default()
        );
    }
    println!();

    println!("Clicking: btn-percent");
    driver.click("btn-percent");
    println!("   notice = {:?}", driver.message());
    println!();

    println!("DOM event history:");
    for (i, event) in driver.dom().event_history().iter().enumerate() {
        println!("   [{i}] {event:?}");
    }
    println!();

    driver.clear();
    run_full_specification(&mut driver);
    println!("All behaviour checks passed on the mock DOM page.");
}
