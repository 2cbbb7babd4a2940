use std::sync::LazyLock;

use podium_core::{ChallengeLink, ScrapeResult, TeamDetail};
use scraper::Selector;

use super::last_path_segment;
use crate::document::{Document, selector};

static HEADING: LazyLock<Selector> = LazyLock::new(|| selector("div.panel-heading"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("h1"));
static BODY: LazyLock<Selector> = LazyLock::new(|| selector("div.panel-body"));
static MEMBER_LIST: LazyLock<Selector> = LazyLock::new(|| selector("ul.list-group"));
static MEMBER: LazyLock<Selector> = LazyLock::new(|| selector("li.list-group-item"));
static CHALLENGE_GROUP: LazyLock<Selector> = LazyLock::new(|| selector("div.list-group"));
static CHALLENGE_LINK: LazyLock<Selector> = LazyLock::new(|| selector("a.list-group-item"));

/// Name, members and selected challenges of a team page.
///
/// Required anchor: a `div` whose classes are exactly `panel panel-info`.
/// Members come from the `ul.list-group` of the panel body and selected
/// challenges from its `div.list-group`; the tag disambiguates the two.
pub fn extract_team_detail(document: &Document) -> ScrapeResult<TeamDetail> {
    let Some(panel) = document.find_with_classes("div", &["panel", "panel-info"]) else {
        return ScrapeResult::failure("Panel not found");
    };

    let name = panel
        .find(&HEADING)
        .and_then(|heading| heading.find(&TITLE))
        .map(|h1| h1.text());

    let body = panel.find(&BODY);

    let members = body
        .and_then(|body| body.find(&MEMBER_LIST))
        .map(|list| {
            list.find_all(&MEMBER)
                .iter()
                .map(|item| item.text())
                .collect()
        })
        .unwrap_or_default();

    let selected_challenges = body
        .and_then(|body| body.find(&CHALLENGE_GROUP))
        .map(|group| {
            group
                .find_all(&CHALLENGE_LINK)
                .iter()
                .map(|link| ChallengeLink {
                    id: last_path_segment(link.attr("href")),
                    name: link.text(),
                })
                .collect()
        })
        .unwrap_or_default();

    ScrapeResult::success(TeamDetail {
        name,
        members,
        selected_challenges,
    })
}
