use std::sync::LazyLock;

use podium_core::{ChallengeList, ChallengeSummary, ScrapeResult};
use scraper::Selector;

use super::last_path_segment;
use crate::document::{Document, Node, selector};

static LIST: LazyLock<Selector> = LazyLock::new(|| selector("div.defiList"));
static CARD: LazyLock<Selector> = LazyLock::new(|| selector("div.defi"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("div.title"));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static THUMBNAIL: LazyLock<Selector> = LazyLock::new(|| selector("div.thumbnail"));
static IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("img"));
static PARTICIPANTS: LazyLock<Selector> = LazyLock::new(|| selector("div.participants"));
static COUNT: LazyLock<Selector> = LazyLock::new(|| selector("div.count"));

/// The challenge catalogue.
///
/// Required anchor: `div.defiList`. Every `div.defi` below it becomes one
/// entry, in page order.
pub fn extract_challenge_list(document: &Document) -> ScrapeResult<ChallengeList> {
    let Some(list) = document.find(&LIST) else {
        return ScrapeResult::failure("Challenge list not found");
    };

    let challenges: Vec<_> = list.find_all(&CARD).iter().map(parse_challenge).collect();
    let total = challenges.len();
    ScrapeResult::success_with_total(ChallengeList { challenges }, total)
}

fn parse_challenge(item: &Node<'_>) -> ChallengeSummary {
    let mut summary = ChallengeSummary::default();

    if let Some(title) = item.find(&TITLE) {
        let link = title.find(&LINK);
        let mut category = title.stripped_text();

        if let Some(link) = link {
            let name = link.text();
            summary.id = last_path_segment(link.attr("href"));
            // Whatever label surrounds the link is the category
            category = category.replacen(&name, "", 1).trim().to_string();
            summary.name = Some(name);
        }

        summary.category = (!category.is_empty()).then_some(category);
    }

    summary.thumbnail = item
        .find(&THUMBNAIL)
        .and_then(|thumb| thumb.find(&IMAGE))
        .and_then(|img| img.attr("src"))
        .map(str::to_string);

    summary.participants = item
        .find(&PARTICIPANTS)
        .and_then(|p| p.find(&COUNT))
        .map(|count| parse_participants(&count.text()))
        .unwrap_or(0);

    summary
}

/// Participant count shown on a challenge card; 0 when it is not a number.
pub fn parse_participants(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}
