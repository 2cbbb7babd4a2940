//! Structure-specific extractors for nuitdelinfo.com pages.
//!
//! Each extractor is a pure function from a parsed [`Document`] to a
//! [`ScrapeResult`](podium_core::ScrapeResult). Missing optional elements
//! leave their field empty; only the required anchors documented on each
//! function produce a failure.

mod challenge_detail;
mod challenge_list;
mod team_detail;
mod team_list;

pub use challenge_detail::{extract_challenge_detail, strip_challenge_prefix};
pub use challenge_list::{extract_challenge_list, parse_participants};
pub use team_detail::extract_team_detail;
pub use team_list::extract_team_list;

use std::sync::LazyLock;

use podium_core::Team;
use scraper::Selector;

use crate::document::{Node, selector};

static LIST_GROUP_LINK: LazyLock<Selector> = LazyLock::new(|| selector("a.list-group-item"));

/// Last `/`-delimited segment of a link target, `None` if there is no target.
pub(crate) fn last_path_segment(href: Option<&str>) -> Option<String> {
    href.filter(|h| !h.is_empty())
        .and_then(|h| h.rsplit('/').next())
        .map(str::to_string)
}

/// `a.list-group-item` anchors inside `list_group`, as teams in document order.
pub(crate) fn team_links(list_group: &Node<'_>) -> Vec<Team> {
    list_group
        .find_all(&LIST_GROUP_LINK)
        .iter()
        .map(|link| Team {
            id: last_path_segment(link.attr("href")),
            name: link.text(),
        })
        .collect()
}
