//! Build script for gallows-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates game.toml at compile time, first as TOML and then with the
//!   same parser the device runs

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use gallows_core::config::{parse_config, ParseError};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate game.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=game.toml");

    let config_path = Path::new("game.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: game.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds game.toml from the gallows-firmware         ║\n\
            ║  directory. Restore it or create an empty one for defaults.      ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read game.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    if let Err(e) = toml::from_str::<toml::Value>(&content) {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid game.toml                                        ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&e.to_string())
        );
    }

    // The device reads the file with its own line-based parser, which takes
    // a subset of TOML. Anything it rejects must fail the build.
    if let Err(e) = parse_config(&content) {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: game.toml rejected by the device parser                  ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&format!("{:?}\n{}", e, describe(e)))
        );
    }

    println!("cargo:warning=game.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Explain a device parser error in terms of the accepted grammar
fn describe(error: ParseError) -> &'static str {
    match error {
        ParseError::UnknownSection => {
            "Headers must be [game], [input] or [display], and every\n\
             key must follow one. Dotted keys and inline tables are\n\
             not supported."
        }
        ParseError::InvalidLine => "Each line must be a [section] header or key = value.",
        ParseError::UnknownKey => "Key is not known in its section.",
        ParseError::InvalidValue => "Values must be decimal or 0x hex integers.",
        ParseError::OutOfRange => {
            "Allowed: strike_limit 1-6, frame_delay_ms 0-1000,\n\
             settle_ms 0-1000, reset_hold_ms 20-1000, vop 0-0x7F,\n\
             temp_coefficient 0-3, bias 0-7."
        }
    }
}
