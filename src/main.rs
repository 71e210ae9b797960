use std::io::{self, BufRead, Write};

use log::debug;

use mealdb_search::{render, App, AppConfig, MealDb};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;
    debug!("using search endpoint {}", config.endpoint);

    let api = MealDb::new(&config)?;
    let mut app = App::new(Box::new(api));

    print!("{}", render::render(&app.view));

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        match input {
            "q" | "quit" => break,
            _ if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) => {
                if app.toggle(input).is_none() {
                    println!("No card {input} to toggle.");
                    continue;
                }
            }
            _ => app.submit(input).await,
        }

        print!("{}", render::render(&app.view));
    }

    Ok(())
}
