use std::sync::LazyLock;

use podium_core::{ChallengeDetail, ScrapeResult};
use scraper::Selector;

use super::team_links;
use crate::document::{Document, Node, selector};

static PANEL: LazyLock<Selector> = LazyLock::new(|| selector("div.panel-info"));
static IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("img"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("h1"));
static ORGANIZER: LazyLock<Selector> = LazyLock::new(|| selector("span"));
static HEADING: LazyLock<Selector> = LazyLock::new(|| selector("h2"));
static THEME_BOX: LazyLock<Selector> = LazyLock::new(|| selector("div.alert-info"));
static PRIZE_BOX: LazyLock<Selector> = LazyLock::new(|| selector("div.alert-warning"));
static BOX_LINE: LazyLock<Selector> = LazyLock::new(|| selector("h4"));
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| selector("p"));
static LIST: LazyLock<Selector> = LazyLock::new(|| selector("ul"));
static LIST_ITEM: LazyLock<Selector> = LazyLock::new(|| selector("li"));
static LIST_GROUP: LazyLock<Selector> = LazyLock::new(|| selector("div.list-group"));

const NAME_PREFIX: &str = "Le défi:";
const EXPECTED_ELEMENTS_HEADING: &str = "Elements attendus";
const SUBMISSION_MODE_HEADING: &str = "Mode de restitution";

/// Details of a challenge page.
///
/// The page is read by position: the n-th `div.panel-info` of the whole
/// document carries a fixed part of the record.
///
/// | panel | fields |
/// |---|---|
/// | 0 | `logo` |
/// | 1 | `organizer` |
/// | 2 | `name`, `theme`, `prize`, `description`, `expectedElements`, `submissionMode` |
/// | 3 | `teams` |
///
/// A missing panel leaves its fields empty; this extractor never fails.
pub fn extract_challenge_detail(document: &Document) -> ScrapeResult<ChallengeDetail> {
    let panels = document.find_all(&PANEL);
    let mut detail = ChallengeDetail::default();

    if let Some(panel) = panels.first() {
        detail.logo = panel
            .find(&IMAGE)
            .and_then(|img| img.attr("src"))
            .map(str::to_string);
    }

    if let Some(panel) = panels.get(1) {
        detail.organizer = panel
            .find(&TITLE)
            .and_then(|h1| h1.find(&ORGANIZER))
            .map(|span| span.text());
    }

    if let Some(panel) = panels.get(2) {
        read_details_panel(panel, &mut detail);
    }

    if let Some(panel) = panels.get(3) {
        detail.teams = panel
            .find(&LIST_GROUP)
            .map(|group| team_links(&group))
            .unwrap_or_default();
    }

    ScrapeResult::success(detail)
}

fn read_details_panel(panel: &Node<'_>, detail: &mut ChallengeDetail) {
    detail.name = panel
        .find(&HEADING)
        .map(|h2| strip_challenge_prefix(&h2.text()));

    detail.theme = second_h4(panel, &THEME_BOX).map(|h4| h4.text());
    detail.prize = second_h4(panel, &PRIZE_BOX).map(|h4| h4.stripped_text());

    detail.description = panel.find(&PARAGRAPH).map(|p| p.stripped_text());

    detail.expected_elements = section_heading(panel, EXPECTED_ELEMENTS_HEADING)
        .and_then(|h2| h2.find_next(&LIST))
        .map(|ul| ul.find_all(&LIST_ITEM).iter().map(|li| li.stripped_text()).collect());

    detail.submission_mode = section_heading(panel, SUBMISSION_MODE_HEADING)
        .and_then(|h2| h2.find_next(&PARAGRAPH))
        .map(|p| p.stripped_text());
}

/// The `h4` at index 1 inside the first `alert` box; `None` with fewer than two.
fn second_h4<'a>(panel: &Node<'a>, alert: &Selector) -> Option<Node<'a>> {
    panel.find(alert)?.find_all(&BOX_LINE).get(1).copied()
}

/// First `h2` whose text contains `title`.
fn section_heading<'a>(panel: &Node<'a>, title: &str) -> Option<Node<'a>> {
    panel
        .find_all(&HEADING)
        .into_iter()
        .find(|h2| h2.text().contains(title))
}

/// Drop the literal `"Le défi:"` prefix of a challenge heading.
pub fn strip_challenge_prefix(heading: &str) -> String {
    let heading = heading.trim();
    heading
        .strip_prefix(NAME_PREFIX)
        .unwrap_or(heading)
        .trim()
        .to_string()
}
