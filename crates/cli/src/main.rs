use clap::{Parser, Subcommand};
use std::sync::Arc;

use enrol_core::{
    constants::DEFAULT_FORWARD_ENDPOINT, validate, CoreConfig, RegistrationInput,
    RegistrationService,
};

#[derive(Parser)]
#[command(name = "enrol")]
#[command(about = "enrol user registration CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check registration fields without storing anything
    Validate {
        /// Given name
        name: String,
        /// First surname
        first_surname: String,
        /// Phone number (10 digits)
        phone: String,
        /// National ID (18 upper-case alphanumerics)
        national_id: String,
        /// Email address
        email: String,
        /// Second surname (optional)
        #[arg(long)]
        second_surname: Option<String>,
    },
    /// Validate and register, printing the accepted record
    Register {
        /// Given name
        name: String,
        /// First surname
        first_surname: String,
        /// Phone number (10 digits)
        phone: String,
        /// National ID (18 upper-case alphanumerics)
        national_id: String,
        /// Email address
        email: String,
        /// Second surname (optional)
        #[arg(long)]
        second_surname: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Validate {
            name,
            first_surname,
            phone,
            national_id,
            email,
            second_surname,
        }) => {
            let input = RegistrationInput::from_raw(
                &name,
                &first_surname,
                second_surname.as_deref(),
                &phone,
                &national_id,
                &email,
            );
            let errors = validate(&input);
            if errors.is_empty() {
                println!("All fields are valid.");
            } else {
                eprintln!("Validation failed:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
            }
        }
        Some(Commands::Register {
            name,
            first_surname,
            phone,
            national_id,
            email,
            second_surname,
        }) => {
            let cfg = Arc::new(CoreConfig::new(DEFAULT_FORWARD_ENDPOINT.to_string())?);
            let mut service = RegistrationService::new(cfg);

            let input = RegistrationInput::from_raw(
                &name,
                &first_surname,
                second_surname.as_deref(),
                &phone,
                &national_id,
                &email,
            );
            match service.submit(input) {
                Ok(record) => {
                    println!("Registered {} with ID: {}", record.full_name, record.id);
                    println!("Session token: {}", record.session_token);
                    println!("Created at: {}", record.created_at.to_rfc3339());
                }
                Err(failure) => {
                    eprintln!("Validation failed:");
                    for error in failure.errors {
                        eprintln!("  - {}", error);
                    }
                }
            }
        }
        None => {
            println!("Use 'enrol --help' for commands");
        }
    }

    Ok(())
}
