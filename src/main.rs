use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process;

use mp4len::{read_duration, Error};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: mp4len <filename>");
        eprintln!();
        eprintln!("Prints the length of an mp4 video in seconds.");
        eprintln!("mp4len version {}", env!("CARGO_PKG_VERSION"));
        process::exit(1);
    }
    let path = &args[1];

    let f = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            eprintln!("mp4len: {}: {}", path, err);
            process::exit(2);
        }
    };
    let size = match f.metadata() {
        Ok(m) => m.len(),
        Err(err) => {
            eprintln!("mp4len: {}: {}", path, err);
            process::exit(2);
        }
    };

    let mut reader = BufReader::new(f);
    match read_duration(&mut reader, size) {
        Ok(mvhd) => println!("{:.6}", mvhd.duration_seconds()),
        Err(err) => {
            eprintln!("mp4len: {}: {}", path, err);
            process::exit(exit_code(&err));
        }
    }
}

// All error-to-exit-code mapping lives here; the library reports kinds.
fn exit_code(err: &Error) -> i32 {
    match err {
        Error::FileTooSmall(_) => 3,
        Error::UnrecognizedFormat => 4,
        Error::IoError(_) => 10,
        Error::BoxNotFound(_) => 30,
        Error::ZeroTimescale => 31,
    }
}
