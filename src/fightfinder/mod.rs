//! Scraper for the fight-finder site: a blocking client plus one parser
//! per page kind, with the site's structural markers isolated in `markup`.

pub mod crawler;
pub mod event;
pub mod fighter;
pub mod markup;

pub use crawler::FightFinder;
pub use event::parse_event;
pub use fighter::parse_fighter;
