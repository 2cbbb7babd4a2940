use std::sync::LazyLock;

use podium_core::{ScrapeResult, TeamList};
use scraper::Selector;

use super::team_links;
use crate::document::{Document, selector};

static PANEL: LazyLock<Selector> = LazyLock::new(|| selector("div.panel-info"));
static LIST_GROUP: LazyLock<Selector> = LazyLock::new(|| selector("div.list-group"));

/// Teams registered on a challenge page.
///
/// Required anchors: the first `div.panel-info` and the `div.list-group`
/// inside it. Every `a.list-group-item` in that group is a team; duplicates
/// are kept and the order is the page order.
pub fn extract_team_list(document: &Document) -> ScrapeResult<TeamList> {
    let Some(panel) = document.find(&PANEL) else {
        return ScrapeResult::failure("Panel not found");
    };

    let Some(list_group) = panel.find(&LIST_GROUP) else {
        return ScrapeResult::failure("List group not found");
    };

    let teams = team_links(&list_group);
    let total = teams.len();
    ScrapeResult::success_with_total(TeamList { teams }, total)
}
