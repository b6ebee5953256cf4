mod display;
mod parser;
mod schedule;
mod web;

use display::{print_week_schedule, write_schedule_csv};
use parser::load_roster;
use schedule::{allocate_flights, generate_week, week_dates};

const OUTPUT_DIR: &str = "files";
const OUTPUT_FILE: &str = "files/FlightSchedules.csv";
const DEFAULT_NORMAL_FLIGHTS: u32 = 3;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Check if we should run in web mode
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "web" {
        let port = args.get(2).and_then(|p| p.parse::<u16>().ok()).unwrap_or(8080);
        let password = std::env::var("ADMIN_PASSWORD")
            .unwrap_or_else(|_| "admin123".to_string()); // Default password, change this!

        println!("Starting web server on port {}...", port);
        println!("Admin password: {}", password);
        println!("Access the site at http://localhost:{}", port);

        web::start_server(port, password).await?;
        return Ok(());
    }

    // CLI mode: <roster.csv> <start-date M/D/YYYY> [normal flights per day, comma-separated]
    if args.len() < 3 {
        eprintln!("Usage: {} <roster.csv> <start-date M/D/YYYY> [counts e.g. 3,3,3,3,3,3,3]", args[0]);
        eprintln!("       {} web [port]", args[0]);
        std::process::exit(2);
    }

    let csv_path = &args[1];
    let start_date = &args[2];
    let normal_flights: Vec<u32> = match args.get(3) {
        Some(raw) => raw
            .split(',')
            .map(|part| part.trim().parse::<u32>())
            .collect::<Result<_, _>>()
            .map_err(|_| format!("invalid normal-flight counts: {:?}", raw))?,
        None => vec![DEFAULT_NORMAL_FLIGHTS; 7],
    };

    println!("Loading crew roster from {}...", csv_path);
    let crew = load_roster(csv_path)?;
    println!("Loaded {} crew members", crew.len());

    println!("\n=== Generating Flight Schedule ===");
    let dates = week_dates(start_date)?;
    let mut schedule = generate_week(&dates, &normal_flights)?;
    allocate_flights(&mut schedule, &crew);

    print_week_schedule(&schedule);

    println!("\n=== Writing Schedule to File ===");
    if !std::path::Path::new(OUTPUT_DIR).exists() {
        std::fs::create_dir(OUTPUT_DIR)?;
    }
    write_schedule_csv(&schedule, OUTPUT_FILE)?;
    println!("Schedule saved to {}", OUTPUT_FILE);

    Ok(())
}
