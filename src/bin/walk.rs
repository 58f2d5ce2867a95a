extern crate quatrot;

use auto_args::AutoArgs;
use quatrot::checkpoint;
use quatrot::walk::{basic_walk, run_walk, WalkParams};

fn main() {
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    let params = WalkParams::from_args();

    println!("BASIC EXAMPLE");
    println!("Turning left by {}", params.turn());
    println!("{}", basic_walk(params.turn()));
    println!();

    println!("ADVANCED EXAMPLE");
    println!(
        "Walking {} steps of {} in a half circle",
        params.steps(),
        params.step_size()
    );
    let walker = run_walk(&params);
    println!("{}", walker);

    if let Some(ref save_as) = params.save_as {
        checkpoint::save(save_as, &walker).expect(&format!("error writing file {:?}", save_as));
        println!("Saved final state to {:?}", save_as);
    }
}
