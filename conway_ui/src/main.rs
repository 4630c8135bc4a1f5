// main.rs - Conway's Game of Life: egui window or headless text run

use eframe::egui;
use std::process::exit;

mod headless; // tokio-driven runner without a window
mod settings; // JSON presentation settings
mod ui;       // egui renderer and input surface

use headless::HeadlessOptions;
use settings::Settings;

const USAGE: &str = "usage: conway_ui [--headless [--preset NAME] [--ticks N]]";

#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Window,
    Headless(HeadlessOptions),
}

fn parse_args(args: &[String]) -> Result<Mode, String> {
    let mut headless = false;
    let mut options = HeadlessOptions::default();
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--headless" => headless = true,
            "--preset" => {
                let name = args.next().ok_or("--preset needs a name")?;
                options.preset = Some(name.clone());
            }
            "--ticks" => {
                let value = args.next().ok_or("--ticks needs a number")?;
                options.ticks = value.parse().map_err(|_| format!("invalid tick count: {value}"))?;
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    if headless {
        Ok(Mode::Headless(options))
    } else if options != HeadlessOptions::default() {
        Err("--preset and --ticks require --headless".to_string())
    } else {
        Ok(Mode::Window)
    }
}

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = parse_args(&args).unwrap_or_else(|e| {
        log::error!("{e}");
        eprintln!("{USAGE}");
        exit(2);
    });
    let settings = Settings::load();

    match mode {
        Mode::Headless(options) => {
            match headless::run(&options, &settings) {
                Ok(board) => print!("{board}"),
                Err(e) => {
                    log::error!("headless run failed: {e}");
                    exit(1);
                }
            }
            Ok(())
        }
        Mode::Window => {
            log::info!("starting Conway's Game of Life");
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([800.0, 950.0]),
                ..Default::default()
            };

            eframe::run_native(
                "Conway's Game of Life",
                options,
                Box::new(move |cc| Box::new(ui::GameOfLife::new(cc, &settings))),
            )
        }
    }
}
