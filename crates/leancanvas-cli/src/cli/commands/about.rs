use crate::exit_codes;
use leancanvas_core::report::{format_about, TITLE};

pub fn run() -> i32 {
    println!("{}", TITLE);
    println!();
    print!("{}", format_about());
    exit_codes::OK
}
