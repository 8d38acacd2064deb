use crate::error::{LibraryError, Result};
use crate::records::{EventRecord, FightRecord};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::markup::{self, Role};

static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// Fighter links end in "-<numeric id>"; the id is the trailing segment
/// after the last hyphen.
static LINK_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"-(\d+)$").unwrap());

/// Parses a fight-finder event page into an `EventRecord`.
///
/// Title, promotion and date are required; venue and city degrade to empty
/// strings; malformed fight rows are skipped without failing the event.
pub fn parse_event(raw_html: &str, event_id: &str) -> Result<EventRecord> {
    let document = Html::parse_document(raw_html);

    let title = markup::find(&document, Role::EventTitle)
        .map(markup::text_of)
        .ok_or(LibraryError::MissingField("title"))?;
    let promotion = markup::find(&document, Role::EventPromotion)
        .map(markup::text_of)
        .ok_or(LibraryError::MissingField("promotion"))?;
    let date_text = markup::find(&document, Role::EventDate)
        .map(markup::text_of)
        .ok_or(LibraryError::MissingField("date"))?;
    let date = parse_date(&date_text)?;
    let (venue, city) = venue_city(&document);
    let fights = fight_card(&document);

    Ok(EventRecord {
        id: event_id.to_string(),
        title,
        promotion,
        date,
        venue,
        city,
        fights,
    })
}

/// Converts "Month DD, YYYY" (comma after the day) into a calendar date.
fn parse_date(text: &str) -> Result<NaiveDate> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(invalid("date", text));
    }

    let month = month_number(tokens[0])?;
    let day: u32 = tokens[1]
        .trim_end_matches(',')
        .parse()
        .map_err(|_| invalid("date", text))?;
    let year: i32 = tokens[2].parse().map_err(|_| invalid("date", text))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid("date", text))
}

fn month_number(name: &str) -> Result<u32> {
    match name {
        "January" => Ok(1),
        "February" => Ok(2),
        "March" => Ok(3),
        "April" => Ok(4),
        "May" => Ok(5),
        "June" => Ok(6),
        "July" => Ok(7),
        "August" => Ok(8),
        "September" => Ok(9),
        "October" => Ok(10),
        "November" => Ok(11),
        "December" => Ok(12),
        other => Err(LibraryError::InvalidMonth(other.to_string())),
    }
}

/// Venue and city are best-effort: any structural mismatch leaves the
/// field empty rather than failing the event.
fn venue_city(document: &Html) -> (String, String) {
    match markup::find(document, Role::EventVenue) {
        Some(block) => {
            let mut nodes = markup::text_nodes(&block);
            let venue = nodes
                .next()
                .map(|text| text.trim_end().trim_end_matches(',').to_string())
                .unwrap_or_default();
            let city = nodes
                .next()
                .map(|text| text.trim().to_string())
                .unwrap_or_default();
            (venue, city)
        }
        None => (String::new(), String::new()),
    }
}

fn fight_card(document: &Html) -> Vec<FightRecord> {
    let table = match markup::find(document, Role::FightCard) {
        Some(table) => table,
        None => return Vec::new(),
    };

    let mut fights = Vec::new();
    // First row is the column header
    for row in table.select(&ROW).skip(1) {
        match parse_fight_row(row) {
            Ok(fight) => fights.push(fight),
            Err(e) => debug!("Skipping malformed fight row: {}", e),
        }
    }
    fights
}

/// Columns in fixed position order: fight id, fighter1, "vs", fighter2,
/// result, round, time.
fn parse_fight_row(row: ElementRef<'_>) -> Result<FightRecord> {
    let cells: Vec<ElementRef<'_>> = row.select(&CELL).collect();
    if cells.len() < 7 {
        return Err(invalid("fight row", &format!("{} columns", cells.len())));
    }

    let id = markup::text_of(cells[0]);
    let (fighter1_id, fighter1_won) = fighter_cell(cells[1])?;
    let (fighter2_id, _) = fighter_cell(cells[3])?;
    if fighter1_id == fighter2_id {
        return Err(invalid("fighter2", &fighter2_id));
    }

    let winner_id = if fighter1_won {
        fighter1_id.clone()
    } else {
        String::new()
    };

    Ok(FightRecord {
        id,
        fighter1_id,
        fighter2_id,
        winner_id,
        result: markup::text_of(cells[4]),
        round: parse_round(cells[5])?,
        time: markup::text_of(cells[6]),
    })
}

/// Fighter id from the cell's link target, plus whether the "Winner" marker
/// immediately follows the name. The source only ever marks fighter1, so a
/// missing marker can mean a draw or a fighter2 win.
fn fighter_cell(cell: ElementRef<'_>) -> Result<(String, bool)> {
    let link = cell
        .select(&LINK)
        .next()
        .ok_or_else(|| invalid("fighter", &markup::text_of(cell)))?;
    let href = link
        .value()
        .attr("href")
        .ok_or_else(|| invalid("fighter link", &markup::text_of(cell)))?;
    let id = link_id(href)?;
    let won = markup::text_nodes(&cell).nth(1).map(str::trim) == Some("Winner");
    Ok((id, won))
}

fn link_id(href: &str) -> Result<String> {
    LINK_ID
        .captures(href.trim())
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| invalid("fighter link", href))
}

fn parse_round(cell: ElementRef<'_>) -> Result<u32> {
    let text = markup::text_of(cell);
    match text.parse::<u32>() {
        Ok(round) if round > 0 => Ok(round),
        _ => Err(invalid("round", &text)),
    }
}

fn invalid(field: &'static str, value: &str) -> LibraryError {
    LibraryError::InvalidField {
        field,
        value: value.to_string(),
    }
}
