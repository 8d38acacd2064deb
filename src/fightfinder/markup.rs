use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

/// Semantic page regions the scrapers read. Each role maps to the source
/// site's structural markers (container class/id strings); a site redesign
/// is absorbed here instead of in every field extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    EventTitle,
    EventPromotion,
    EventDate,
    EventVenue,
    FightCard,
    FighterPortrait,
    FighterProfile,
}

static EVENT_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.Txt30Blue.Bold.SpacerLeft8 h1").unwrap());
static EVENT_PROMOTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.Txt13Orange.Bold.SpacerLeft8 a").unwrap());
static EVENT_DATE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.Txt13White.Bold.SpacerLeft8").unwrap());
static EVENT_VENUE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.Txt13Gray.Bold.SpacerLeftBottom8").unwrap());
static FIGHT_CARD: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table.fight_event_card").unwrap());
static FIGHTER_PORTRAIT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span#fighter_picture img").unwrap());
static FIGHTER_PROFILE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span#fighter_profile").unwrap());

impl Role {
    fn selector(self) -> &'static Selector {
        match self {
            Role::EventTitle => &EVENT_TITLE,
            Role::EventPromotion => &EVENT_PROMOTION,
            Role::EventDate => &EVENT_DATE,
            Role::EventVenue => &EVENT_VENUE,
            Role::FightCard => &FIGHT_CARD,
            Role::FighterPortrait => &FIGHTER_PORTRAIT,
            Role::FighterProfile => &FIGHTER_PROFILE,
        }
    }
}

/// First element filling `role`, in document order.
pub fn find<'a>(document: &'a Html, role: Role) -> Option<ElementRef<'a>> {
    document.select(role.selector()).next()
}

/// All descendant text of `element`, joined and trimmed.
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Descendant text nodes of `element` that hold more than whitespace.
/// Positional reads (the venue/city lines, the winner marker) use this so
/// formatting-only nodes cannot shift the indexes.
pub fn text_nodes<'a>(element: &ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element.text().filter(|text| !text.trim().is_empty())
}
