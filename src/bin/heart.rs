//! heart - console heart printer.
//!
//! Reads a line count from standard input and prints a two-part star heart,
//! each star styled white-on-red with a short typing delay. Input is not
//! validated: a malformed count terminates the process, as the original did.

use crossterm::style::Stylize;
use curvetrail::heart;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Delay after each printed star, for the typing effect.
const STAR_DELAY: Duration = Duration::from_millis(20);

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    print!("Enter the number of lines: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    let lines: i32 = input
        .trim()
        .parse()
        .expect("line count must be an integer");

    println!();

    let mut stdout = io::stdout();
    for row in heart::pattern(lines) {
        for ch in row.chars() {
            if ch == '*' {
                write!(stdout, "{}", "*".white().on_red())?;
                stdout.flush()?;
                thread::sleep(STAR_DELAY);
            } else {
                write!(stdout, "{ch}")?;
            }
        }
        writeln!(stdout)?;
    }

    Ok(())
}
