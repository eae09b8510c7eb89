//! HTML rendering of the guestbook page.
//!
//! The page template is compiled into the binary and rendered with
//! `minijinja`. `.html` templates are autoescaped, so user text is always
//! inserted as text.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::shared::ChatMessage;

/// Name of the feed template
pub const INDEX_TEMPLATE: &str = "index.html";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One entry of the feed, as the template sees it
#[derive(Debug, Serialize)]
struct FeedEntry<'a> {
    prenom: &'a str,
    filiaire: &'a str,
    commentaire: &'a str,
    created_at: String,
}

/// Compile the embedded templates
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(INDEX_TEMPLATE, include_str!("templates/index.html"))?;
    Ok(env)
}

/// Render the feed page; `messages` are expected newest first
pub fn render_index(
    env: &Environment<'static>,
    messages: &[ChatMessage],
) -> Result<String, minijinja::Error> {
    let entries: Vec<FeedEntry<'_>> = messages
        .iter()
        .map(|m| FeedEntry {
            prenom: &m.prenom,
            filiaire: &m.filiaire,
            commentaire: &m.commentaire,
            created_at: m.created_at.format(DISPLAY_FORMAT).to_string(),
        })
        .collect();

    env.get_template(INDEX_TEMPLATE)?
        .render(context! { messages => entries })
}
