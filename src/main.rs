use clap::Parser;
use dmy::{Date, leading_int};

/// Prints a day/month/year triple as slash-separated text
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    #[arg(value_name = "day", allow_hyphen_values = true)]
    day: String,
    #[arg(value_name = "month", allow_hyphen_values = true)]
    month: String,
    #[arg(value_name = "year", allow_hyphen_values = true)]
    year: String,
}

fn main() {
    let cli = Cli::parse();
    let date = Date::new(
        leading_int(&cli.day),
        leading_int(&cli.month),
        leading_int(&cli.year),
    );
    println!("{date}");
}
