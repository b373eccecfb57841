//! Database Models

// Serde helpers
pub mod serde_helpers;

// Bookable catalog
pub mod item;

// Read-only catalog
pub mod catalog;
pub mod site_content;
pub mod team_member;

// Bookings
pub mod booking;

// Re-exports
pub use booking::Booking;
pub use catalog::{CatalogEntry, CatalogView};
pub use item::{BookableItem, ItemView};
pub use site_content::{SiteContent, SiteContentView};
pub use team_member::{TeamMember, TeamMemberView};
