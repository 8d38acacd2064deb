use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An event scraped from the fight finder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub promotion: String,
    pub date: NaiveDate,
    /// Empty when the venue line is absent or malformed
    pub venue: String,
    /// Empty when the venue line is absent or malformed
    pub city: String,
    pub fights: Vec<FightRecord>,
}

/// One bout on an event card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FightRecord {
    pub id: String,
    pub fighter1_id: String,
    pub fighter2_id: String,
    /// Only ever fighter1's id; empty when the card shows no winner marker
    pub winner_id: String,
    pub result: String,
    pub round: u32,
    /// Kept verbatim as shown on the card (mm:ss)
    pub time: String,
}

impl FightRecord {
    pub fn involves(&self, fighter_id: &str) -> bool {
        self.fighter1_id == fighter_id || self.fighter2_id == fighter_id
    }
}

/// A fighter profile scraped from the fight finder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FighterRecord {
    pub id: String,
    pub name: String,
    pub nick_name: String,
    pub association: String,
    pub height: String,
    pub weight: String,
    pub birth_date: String,
    pub city: String,
    pub country: String,
    pub thumb_url: String,
}

impl FighterRecord {
    /// Profile with every descriptive field defaulted, ready for best-effort fill
    pub fn empty(id: &str, thumb_url: String) -> Self {
        Self {
            id: id.to_string(),
            name: String::new(),
            nick_name: String::new(),
            association: String::new(),
            height: String::new(),
            weight: String::new(),
            birth_date: String::new(),
            city: String::new(),
            country: String::new(),
            thumb_url,
        }
    }
}

/// Mapping from a cataloged event id to its directory on disk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibraryEntry {
    pub id: String,
    pub path: PathBuf,
}

/// A playable file found under an event directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoFile {
    pub filename: String,
    pub extension: String,
    pub path: PathBuf,
    /// What a listing shows for this file
    pub display_title: String,
}
