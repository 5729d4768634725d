//! Vending Machine Walkthrough
//!
//! This example drives one controller through the reference scenario, prods
//! the boundaries, and resumes a second controller from a checkpoint.
//!
//! Key concepts:
//! - Total operations: a request that does not apply is a no-op with a line
//! - Exactly one current state at all times
//! - Audit history, no-ops included
//! - Checkpoint, validate, resume
//!
//! Run with: cargo run --example vending_cli
//! Set RUST_LOG=trace to watch each dispatch.

use vendo::{Catalog, Checkpoint, Controller, VendRequest};

fn drive(machine: &Controller, requests: &[VendRequest]) {
    for request in requests {
        let line = machine.handle(*request);
        println!(
            "  {request:<14} -> {line:<34} [{}]",
            machine.current_state()
        );
    }
}

fn main() {
    env_logger::init();

    println!("=== Vending Machine Walkthrough ===\n");

    let machine = Controller::new();
    println!("Initial state: {}\n", machine.current_state());

    println!("Reference scenario:");
    drive(
        &machine,
        &[
            VendRequest::EjectMoney,
            VendRequest::Vend,
            VendRequest::InsertMoney,
            VendRequest::SelectBeverage,
            VendRequest::Vend,
        ],
    );

    println!("\nBoundary prods (none of these change the state):");
    machine.insert_money();
    machine.select_beverage();
    drive(
        &machine,
        &[
            VendRequest::InsertMoney,
            VendRequest::EjectMoney,
            VendRequest::SelectBeverage,
        ],
    );
    machine.vend();

    let history = machine.history();
    let noops = history.records().iter().filter(|r| r.is_noop()).count();
    println!(
        "\nHandled {} requests ({} no-ops), visited {} states",
        history.len(),
        noops,
        history.path().len()
    );

    // Checkpoint mid-cycle, then resume in a fresh controller.
    println!("\nCheckpoint and resume:");
    machine.insert_money();
    let json = match machine.checkpoint().to_json() {
        Ok(json) => json,
        Err(e) => {
            eprintln!("checkpoint failed: {e}");
            return;
        }
    };
    println!("  Captured {} bytes of JSON mid-cycle", json.len());

    match Checkpoint::from_json(&json).and_then(|cp| Controller::restore(cp, Catalog::default())) {
        Ok(resumed) => {
            println!("  Resumed in state {}", resumed.current_state());
            drive(&resumed, &[VendRequest::SelectBeverage, VendRequest::Vend]);
        }
        Err(e) => eprintln!("restore failed: {e}"),
    }

    println!("\nKey Takeaways:");
    println!("- Every (state, request) pair has a defined line; nothing errors");
    println!("- A full insert/select/vend cycle returns to NoMoney");
    println!("- The history is a complete audit, ready for checkpointing");

    println!("\n=== Example Complete ===");
}
