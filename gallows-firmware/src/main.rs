//! Gallows - word-guessing game firmware
//!
//! Drives a PCD8544 84x48 LCD over bit-banged GPIO and reads four direction
//! buttons. Everything runs in one polling loop: debounce a button, apply
//! it, resolve game logic, redraw if needed.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use embedded_hal::delay::DelayNs;
use {defmt_rtt as _, panic_probe as _};

use gallows_core::ui::{Page, Session, Update};
use gallows_hal_rp2040::board::{pins, Board};

mod config;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Gallows firmware starting...");

    let config = config::load();
    debug!("{}", config);

    let p = embassy_rp::init(Default::default());
    let mut board = Board::new(p, config.input.settle_ms);
    info!(
        "Display on SCLK={} DIN={} DC={} RST={}",
        pins::SCLK,
        pins::DIN,
        pins::DC,
        pins::RST
    );
    info!(
        "Buttons on UP={} DOWN={} LEFT={} RIGHT={}",
        pins::UP,
        pins::DOWN,
        pins::LEFT,
        pins::RIGHT
    );

    let mut delay = Delay;
    board
        .display
        .initialize(&mut delay, &config.display.init_params());
    board.display.clear_screen();
    info!("Display initialized");

    let mut session = Session::new(&config.game);
    info!("Page: {}", session.page());

    loop {
        let page = session.page();

        if let Some(button) = board.buttons.poll(&mut delay) {
            debug!("Button {}", button);
            session.handle(button);
        }

        match session.update() {
            Update::Idle => {}
            Update::RoundStarted { index, word } => {
                debug!("Round started: word #{} ({} letters)", index, word.len());
            }
            Update::Guessed {
                letter,
                guess,
                outcome,
            } => {
                debug!("Guess {}: {} -> {}", letter, guess, outcome);
            }
        }

        let now = session.page();
        if now != page {
            match now {
                Page::Win => info!("Round won"),
                Page::Lose => info!("Round lost"),
                _ => {}
            }
            info!("Page: {} -> {}", page, now);
        }

        if session.render(&mut board.display) && now == Page::Play {
            delay.delay_ms(config.game.frame_delay_ms);
        }
    }
}
