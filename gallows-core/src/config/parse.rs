//! `game.toml` parser
//!
//! A minimal line-based parser for the small subset of TOML the device
//! configuration needs. It does NOT support the full TOML language.
//!
//! Supported:
//! - `[section]` headers for `game`, `input` and `display`
//! - `key = integer` pairs, decimal or `0x` hex, `_` separators allowed
//! - Comments (`# ...`), whole-line or trailing
//!
//! Keys that are not set keep their defaults.

use super::types::{GameConfig, MAX_DELAY_MS};
use crate::game::MAX_STRIKES;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Section header is not one of `game`, `input`, `display`, or a key
    /// appears before any header
    UnknownSection,
    /// Line is neither a `[section]` header nor `key = value`
    InvalidLine,
    /// Key is not known in its section
    UnknownKey,
    /// Value is not an integer
    InvalidValue,
    /// Integer is outside the range the key accepts
    OutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Game,
    Input,
    Display,
}

/// Parse configuration text into a [`GameConfig`]
pub fn parse_config(input: &str) -> Result<GameConfig, ParseError> {
    let mut config = GameConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "game" => Ok(Section::Game),
        "input" => Ok(Section::Input),
        "display" => Ok(Section::Display),
        _ => Err(ParseError::UnknownSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Parse a decimal or `0x` hex integer
fn parse_int(value: &str) -> Result<u32, ParseError> {
    let mut digits = heapless::String::<16>::new();
    for ch in value.chars().filter(|c| *c != '_') {
        digits.push(ch).map_err(|_| ParseError::InvalidValue)?;
    }

    let parsed = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => digits.parse(),
    };
    parsed.map_err(|_| ParseError::InvalidValue)
}

/// Parse an integer and check it against an inclusive range
fn parse_ranged(value: &str, min: u32, max: u32) -> Result<u32, ParseError> {
    let n = parse_int(value)?;
    if n < min || n > max {
        return Err(ParseError::OutOfRange);
    }
    Ok(n)
}

fn parse_u8(value: &str, min: u8, max: u8) -> Result<u8, ParseError> {
    // Range is checked, so the narrowing cannot truncate
    parse_ranged(value, min as u32, max as u32).map(|n| n as u8)
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut GameConfig,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Game, "seed") => config.game.seed = parse_int(value)?,
        (Section::Game, "strike_limit") => {
            config.game.strike_limit = parse_u8(value, 1, MAX_STRIKES)?
        }
        (Section::Game, "frame_delay_ms") => {
            config.game.frame_delay_ms = parse_ranged(value, 0, MAX_DELAY_MS)?
        }
        (Section::Input, "settle_ms") => {
            config.input.settle_ms = parse_ranged(value, 0, MAX_DELAY_MS)?
        }
        (Section::Display, "reset_hold_ms") => {
            config.display.reset_hold_ms = parse_ranged(value, 20, MAX_DELAY_MS)?
        }
        (Section::Display, "vop") => config.display.vop = parse_u8(value, 0, 0x7F)?,
        (Section::Display, "temp_coefficient") => {
            config.display.temp_coefficient = parse_u8(value, 0, 3)?
        }
        (Section::Display, "bias") => config.display.bias = parse_u8(value, 0, 7)?,
        (Section::Root, _) => return Err(ParseError::UnknownSection),
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE: &str = r#"
# Gallows device configuration

[game]
seed = 1234
strike_limit = 4     # easier
frame_delay_ms = 80

[input]
settle_ms = 25

[display]
reset_hold_ms = 40
vop = 0x3F
temp_coefficient = 2
bias = 3
"#;

    #[test]
    fn test_parse_full_file() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.game.seed, 1234);
        assert_eq!(config.game.strike_limit, 4);
        assert_eq!(config.game.frame_delay_ms, 80);
        assert_eq!(config.input.settle_ms, 25);
        assert_eq!(config.display.reset_hold_ms, 40);
        assert_eq!(config.display.vop, 0x3F);
        assert_eq!(config.display.temp_coefficient, 2);
        assert_eq!(config.display.bias, 3);
        assert_eq!(
            config.display.init_params().command_sequence(),
            [0x21, 0xBF, 0x06, 0x13, 0x20, 0x0C]
        );
    }

    #[test]
    fn test_empty_input_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), GameConfig::default());
        assert_eq!(
            parse_config("# nothing\n\n[game]\n").unwrap(),
            GameConfig::default()
        );
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = parse_config("[display]\nbias = 5\n").unwrap();
        assert_eq!(config.display.bias, 5);
        assert_eq!(config.display.vop, 0x21);
        assert_eq!(config.game, GameConfig::default().game);
    }

    #[test]
    fn test_integer_forms() {
        assert_eq!(parse_int("42"), Ok(42));
        assert_eq!(parse_int("0x2A"), Ok(42));
        assert_eq!(parse_int("0X2a"), Ok(42));
        assert_eq!(parse_int("1_000"), Ok(1000));
        assert_eq!(parse_int("-1"), Err(ParseError::InvalidValue));
        assert_eq!(parse_int("\"67\""), Err(ParseError::InvalidValue));
        assert_eq!(parse_int("0x"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(
            parse_config("[sound]\nvolume = 3\n"),
            Err(ParseError::UnknownSection)
        );
    }

    #[test]
    fn test_key_outside_section() {
        assert_eq!(parse_config("seed = 3\n"), Err(ParseError::UnknownSection));
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            parse_config("[game]\nlives = 3\n"),
            Err(ParseError::UnknownKey)
        );
        // Keys belong to one section only
        assert_eq!(
            parse_config("[input]\nseed = 3\n"),
            Err(ParseError::UnknownKey)
        );
    }

    #[test]
    fn test_malformed_line() {
        assert_eq!(parse_config("[game]\nseed\n"), Err(ParseError::InvalidLine));
        assert_eq!(parse_config("[game]\n= 5\n"), Err(ParseError::InvalidLine));
        assert_eq!(parse_config("[game]\nseed =\n"), Err(ParseError::InvalidLine));
        assert_eq!(parse_config("[game\n"), Err(ParseError::InvalidLine));
        assert_eq!(
            parse_config("[game]\nseed = abc\n"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_rejects_toml_beyond_line_subset() {
        // Dotted keys
        assert_eq!(parse_config("game.seed = 5\n"), Err(ParseError::UnknownSection));
        assert_eq!(
            parse_config("[game]\ngame.seed = 5\n"),
            Err(ParseError::UnknownKey)
        );
        // Octal and binary literals
        assert_eq!(
            parse_config("[game]\nseed = 0o103\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nvop = 0b101\n"),
            Err(ParseError::InvalidValue)
        );
        // Inline tables and nested headers
        assert_eq!(
            parse_config("game = { strike_limit = 3 }\n"),
            Err(ParseError::UnknownSection)
        );
        assert_eq!(
            parse_config("[game]\nstrike_limit = { value = 3 }\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(parse_config("[[game]]\n"), Err(ParseError::UnknownSection));
        assert_eq!(
            parse_config("[game.extra]\nseed = 1\n"),
            Err(ParseError::UnknownSection)
        );
        // Strings and floats
        assert_eq!(
            parse_config("[game]\nseed = \"67\"\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[game]\nframe_delay_ms = 5.0\n"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_ranges() {
        assert_eq!(
            parse_config("[game]\nstrike_limit = 0\n"),
            Err(ParseError::OutOfRange)
        );
        assert_eq!(
            parse_config("[game]\nstrike_limit = 7\n"),
            Err(ParseError::OutOfRange)
        );
        assert_eq!(
            parse_config("[display]\nreset_hold_ms = 19\n"),
            Err(ParseError::OutOfRange)
        );
        assert_eq!(
            parse_config("[display]\nvop = 0x80\n"),
            Err(ParseError::OutOfRange)
        );
        assert_eq!(
            parse_config("[display]\ntemp_coefficient = 4\n"),
            Err(ParseError::OutOfRange)
        );
        assert_eq!(
            parse_config("[display]\nbias = 8\n"),
            Err(ParseError::OutOfRange)
        );
    }

    #[test]
    fn test_device_config_file_parses() {
        let config = parse_config(include_str!("../../../gallows-firmware/game.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    proptest! {
        #[test]
        fn prop_seed_accepts_any_u32(seed in any::<u32>(), hex in any::<bool>()) {
            let text = if hex {
                std::format!("[game]\nseed = {:#x}\n", seed)
            } else {
                std::format!("[game]\nseed = {}\n", seed)
            };
            prop_assert_eq!(parse_config(&text).unwrap().game.seed, seed);
        }

        #[test]
        fn prop_arbitrary_text_never_panics(text in "\\PC{0,200}") {
            let _ = parse_config(&text);
        }
    }
}
