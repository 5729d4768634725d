//! Concurrent Vending Sessions
//!
//! This example shares one machine across several threads through the
//! channel-served worker in `vendo::service`.
//!
//! Key concepts:
//! - Single-owner worker: the controller lives on one thread
//! - Cheap cloneable handles, one bounded reply channel per call
//! - Linearizable effects: the audit history is one total order
//!
//! Run with: cargo run --example concurrent_sessions

use std::thread;
use vendo::service;
use vendo::Controller;

const SESSIONS: usize = 4;
const CYCLES_PER_SESSION: usize = 5;

fn main() {
    env_logger::init();

    println!("=== Concurrent Vending Sessions ===\n");

    let (handle, worker) = service::spawn(Controller::new());

    let mut sessions = Vec::new();
    for session in 0..SESSIONS {
        let handle = handle.clone();
        sessions.push(thread::spawn(move || {
            let mut replies = 0;
            for _ in 0..CYCLES_PER_SESSION {
                for reply in [
                    handle.insert_money(),
                    handle.select_beverage(),
                    handle.vend(),
                ] {
                    if let Ok(reply) = reply {
                        println!("  [session {session}] {:<34} [{}]", reply.line, reply.state);
                        replies += 1;
                    }
                }
            }
            replies
        }));
    }

    let mut total = 0;
    for session in sessions {
        total += session.join().unwrap_or(0);
    }

    handle.stop().ok();
    let machine = match worker.join() {
        Ok(machine) => machine,
        Err(_) => {
            eprintln!("worker panicked");
            return;
        }
    };

    let history = machine.history();
    println!("\n{total} replies across {SESSIONS} sessions");
    println!(
        "History holds {} records in one total order; final state: {}",
        history.len(),
        machine.current_state()
    );

    println!("\nKey Takeaways:");
    println!("- Sessions interleave, but every request sees a consistent state");
    println!("- Callers never lock anything; the worker owns the machine");
    println!("- The audit history doubles as the linearization order");

    println!("\n=== Example Complete ===");
}
