//! Headless Linework exporter.
//!
//! Usage: `linework <shapes.txt> <out.png> [WIDTHxHEIGHT]`
//!
//! Loads a shapes file in the line-oriented text format, renders it onto an
//! offscreen pixmap, and writes a PNG snapshot. Malformed shape lines are
//! skipped with a warning, exactly as an interactive load would.

use linework_core::{FileStorage, Storage};
use linework_raster::{render_document, write_png};
use std::path::Path;
use std::process::ExitCode;

/// Default viewport size, matching the editor window.
const DEFAULT_SIZE: (u32, u32) = (800, 600);

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (input, output, size) = match args.as_slice() {
        [input, output] => (input, output, DEFAULT_SIZE),
        [input, output, size] => (input, output, parse_size(size)?),
        _ => {
            eprintln!("usage: linework <shapes.txt> <out.png> [WIDTHxHEIGHT]");
            return Err("expected 2 or 3 arguments".into());
        }
    };

    let document = FileStorage::new(input).load()?;
    log::info!("rendering {} shapes at {}x{}", document.len(), size.0, size.1);

    let pixmap = render_document(&document, None, size.0, size.1);
    write_png(Path::new(output), &pixmap)?;
    log::info!("wrote {}", output);
    Ok(())
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let parse = |v: &str| {
        v.parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| format!("invalid size {s:?}: expected WIDTHxHEIGHT"))
    };
    match s.split_once('x') {
        Some((w, h)) => Ok((parse(w)?, parse(h)?)),
        None => Err(format!("invalid size {s:?}: expected WIDTHxHEIGHT")),
    }
}
