//! Booking server for a bilingual (Italian/English) tourism operator
//!
//! Serves the site catalog (tours, adventures, special events, restaurants,
//! B&Bs, cultural sites, gastronomy, team, site content) and runs the
//! booking pipeline: reservation persistence, PDF receipt with QR code,
//! email notification dispatch and hosted payment checkout.
//!
//! # Module structure
//!
//! ```text
//! booking-server/src/
//! ├── core/          # Config, state, server, startup errors
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Embedded SurrealDB: models and repositories
//! ├── bookings/      # Booking pipeline (price math, submission service)
//! ├── receipt/       # PDF receipt rendering (with QR code)
//! ├── services/      # Notification, payment and federated search
//! └── utils/         # Error types, logging, retry, validation helpers
//! ```

pub mod api;
pub mod bookings;
pub mod core;
pub mod db;
pub mod receipt;
pub mod services;
pub mod utils;

// Re-export public types
pub use bookings::BookingService;
pub use core::{Config, Server, ServerState};
pub use services::{NotifyService, PaymentService, SearchService};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging. Call once, before anything else.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____              __   _
   / __ )____  ____  / /__(_)___  ____ _
  / __  / __ \/ __ \/ //_/ / __ \/ __ `/
 / /_/ / /_/ / /_/ / ,< / / / / / /_/ /
/_____/\____/\____/_/|_/_/_/ /_/\__, /
                               /____/
    "#
    );
}
