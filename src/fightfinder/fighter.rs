use crate::error::{LibraryError, Result};
use crate::records::FighterRecord;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::markup::{self, Role};

static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// Parses a fight-finder fighter page into a `FighterRecord`.
///
/// The portrait is required; every descriptive field is best-effort and
/// keeps its empty-string default when the profile table does not list it.
pub fn parse_fighter(raw_html: &str, fighter_id: &str) -> Result<FighterRecord> {
    let document = Html::parse_document(raw_html);

    let thumb_url = markup::find(&document, Role::FighterPortrait)
        .and_then(|img| img.value().attr("src"))
        .map(str::to_string)
        .ok_or(LibraryError::MissingField("thumbUrl"))?;

    let mut fighter = FighterRecord::empty(fighter_id, thumb_url);

    if let Some(profile) = markup::find(&document, Role::FighterProfile) {
        for row in profile.select(&ROW) {
            let mut cells = row.select(&CELL);
            let (label_cell, value_cell) = match (cells.next(), cells.next()) {
                (Some(label), Some(value)) => (label, value),
                _ => continue,
            };

            let label = markup::text_of(label_cell);
            if label.is_empty() {
                continue;
            }

            // Label matching is exact; unrecognized labels are ignored
            match label.as_str() {
                "Name" => fighter.name = markup::text_of(value_cell),
                "Nick Name" => fighter.nick_name = markup::text_of(value_cell),
                "Association" => {
                    if let Some(link) = value_cell.select(&LINK).next() {
                        fighter.association = markup::text_of(link);
                    }
                }
                "Height" => fighter.height = markup::text_of(value_cell),
                "Weight" => fighter.weight = markup::text_of(value_cell),
                "Birth Date" => fighter.birth_date = markup::text_of(value_cell),
                "City" => fighter.city = markup::text_of(value_cell),
                "Country" => fighter.country = markup::text_of(value_cell),
                _ => {}
            }
        }
    }

    Ok(fighter)
}
