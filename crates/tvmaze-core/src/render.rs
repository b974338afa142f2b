//! Markup rendering for shows and episodes
//!
//! Cards and list entries are rendered through askama templates, which
//! escape every interpolated value. Show summaries arrive as HTML from the
//! API; they are reduced to plain text before rendering.

use askama::Template;
use scraper::{Html, Node};

use crate::error::Result;
use crate::types::{Episode, Show};

#[derive(Template)]
#[template(path = "show_card.html")]
struct ShowCardTemplate<'a> {
    id: u32,
    name: &'a str,
    summary: String,
    image: &'a str,
}

#[derive(Template)]
#[template(path = "episode_item.html")]
struct EpisodeItemTemplate<'a> {
    name: &'a str,
    season: u32,
    number: u32,
}

/// Elements that break words apart even without surrounding whitespace
const BLOCK_ELEMENTS: &[&str] = &[
    "p", "br", "div", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote",
];

/// Reduce an HTML fragment to its text content with collapsed whitespace.
///
/// Block elements separate words; inline elements do not.
///
/// # Example
/// ```
/// use tvmaze_core::render::summary_text;
/// assert_eq!(summary_text("<p>An <b>island</b>.</p>"), "An island.");
/// assert_eq!(summary_text("<p>One.</p><p>Two.</p>"), "One. Two.");
/// ```
pub fn summary_text(summary_html: &str) -> String {
    let fragment = Html::parse_fragment(summary_html);
    let mut text = String::new();

    for node in fragment.root_element().descendants() {
        match node.value() {
            Node::Text(t) => text.push_str(t),
            Node::Element(el) if BLOCK_ELEMENTS.contains(&el.name()) => text.push(' '),
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render the card markup for one show.
pub fn render_show_card(show: &Show) -> Result<String> {
    let template = ShowCardTemplate {
        id: show.id,
        name: &show.name,
        summary: summary_text(&show.summary),
        image: &show.image,
    };
    Ok(template.render()?)
}

/// Render the list entry markup for one episode.
pub fn render_episode_item(episode: &Episode) -> Result<String> {
    let template = EpisodeItemTemplate {
        name: &episode.name,
        season: episode.season,
        number: episode.number,
    };
    Ok(template.render()?)
}
