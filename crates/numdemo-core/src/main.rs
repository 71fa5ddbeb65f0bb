use std::io::{self, BufWriter};

use numdemo_core::routine::run_default;

fn main() {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Err(e) = run_default(&mut out) {
        eprintln!("[numdemo] error: {e}");
        std::process::exit(1);
    }
}
