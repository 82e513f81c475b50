// Passenger booking from the command line: validate, price and optionally confirm.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use tripfare::{
    models::{BookingConfirmation, BookingInput, PricingResult},
    utils::BookingError,
    BookingConfig, BookingForm,
};

#[derive(Parser, Debug)]
#[command(name = "tripfare", version, about = "Validate a passenger booking and quote its fare")]
struct Cli {
    /// JSON file with the booking fields (camelCase keys); field flags override it
    #[arg(long)]
    input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    address: Option<String>,

    #[arg(long = "id-card")]
    id_card: Option<String>,

    /// Date of birth, dd/mm/yyyy
    #[arg(long)]
    dob: Option<String>,

    /// economy or business
    #[arg(long = "class")]
    travel_class: Option<String>,

    /// Departure date, dd/mm/yyyy
    #[arg(long)]
    departure: Option<String>,

    /// Price as of this day (dd/mm/yyyy) instead of today
    #[arg(long)]
    today: Option<String>,

    /// Confirm the booking once it is priced
    #[arg(long)]
    confirm: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn booking_input(&self) -> Result<BookingInput, BookingError> {
        let mut input = match &self.input {
            Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
            None => BookingInput::default(),
        };
        let overrides = [
            (&self.name, &mut input.name),
            (&self.address, &mut input.address),
            (&self.id_card, &mut input.id_card),
            (&self.dob, &mut input.date_of_birth),
            (&self.travel_class, &mut input.travel_class),
            (&self.departure, &mut input.departure_date),
        ];
        for (flag, slot) in overrides {
            if let Some(value) = flag {
                *slot = value.clone();
            }
        }
        Ok(input)
    }

    fn booking_config(&self) -> Result<BookingConfig, BookingError> {
        let mut config = match &self.config {
            Some(path) => BookingConfig::load(path)?,
            None => BookingConfig::default(),
        };
        if let Some(today) = &self.today {
            config.reference_date = Some(today.clone());
            config.today()?;
        }
        Ok(config)
    }
}

fn print_quote(pricing: &PricingResult) {
    println!("\nFARE QUOTE:");
    println!("  Travel class:   {}", pricing.travel_class);
    println!("  Age:            {}", pricing.age);
    println!("  Classification: {}", pricing.classification);
    println!("  Price:          {}", pricing.price);
}

fn print_confirmation(confirmation: &BookingConfirmation) {
    println!("\nBOOKING CONFIRMED:");
    println!("  Passenger: {}", confirmation.booking.name);
    println!("  ID card:   {}", confirmation.booking.id_card);
    if let Some(address) = &confirmation.booking.address {
        println!("  Address:   {}", address);
    }
    if let Some(departure) = confirmation.booking.departure_date {
        println!("  Departure: {}", departure.format("%d/%m/%Y"));
    }
    println!("  Total:     {}", confirmation.pricing.price);
}

fn run(cli: &Cli) -> Result<(), BookingError> {
    let config = cli.booking_config()?;
    let mut form = BookingForm::from_config(&config)?;
    form.fill(cli.booking_input()?)?;

    let pricing = *form.submit()?;
    let confirmation = if cli.confirm {
        Some(form.confirm()?)
    } else {
        None
    };

    if cli.json {
        let mut out = serde_json::to_value(pricing)?;
        out["booked"] = serde_json::Value::Bool(confirmation.is_some());
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_quote(&pricing);
        if let Some(confirmation) = &confirmation {
            print_confirmation(confirmation);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(BookingError::Validation(errors)) => {
            eprintln!("The booking form has errors:");
            for (field, message) in &errors {
                eprintln!("  - {}: {}", field, message);
            }
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
