use areotime::MarsSolDate;
use chrono::Utc;

fn main() {
    let msd = MarsSolDate::from_utc(Utc::now());
    let clock = msd.clock().expect("finite sol count");

    println!("MSD: {msd}");
    println!("Sol: {}", msd.sol());
    println!("Martian year: {}", msd.martian_year());
    println!("MTC: {clock} ({:?})", clock.phase());
}
