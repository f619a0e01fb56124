//! Presentational primitives: stateless wrappers that turn data into markup.
//!
//! Each primitive is an askama template; nested content is any `Display` value
//! (usually another template) and is inserted unescaped.

use std::fmt::Display;

use askama::Template;

/// Titled vertical block.
#[derive(Template)]
#[template(path = "section.html")]
pub struct Section<B: Display> {
    pub id: &'static str,
    pub title: &'static str,
    pub body: B,
}

/// One chip per item, in input order. Empty input renders nothing.
#[derive(Template)]
#[template(path = "tag_row.html")]
pub struct TagRow<'a> {
    pub items: &'a [String],
}

/// Visually bounded fragment for one record. Always carries the `reveal` entrance class.
#[derive(Template)]
#[template(path = "card.html")]
pub struct Card<B: Display> {
    pub class: &'static str,
    pub body: B,
}

#[derive(Template)]
#[template(path = "grid.html")]
pub struct Grid<T: Display> {
    pub kind: &'static str,
    pub cards: Vec<T>,
}

pub fn section<B: Display>(id: &'static str, title: &'static str, body: B) -> Section<B> {
    Section { id, title, body }
}

pub fn tag_row(items: &[String]) -> TagRow<'_> {
    TagRow { items }
}

pub fn card<B: Display>(class: &'static str, body: B) -> Card<B> {
    Card { class, body }
}

pub fn grid<T: Display>(kind: &'static str, cards: impl IntoIterator<Item = T>) -> Grid<T> {
    Grid {
        kind,
        cards: cards.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_section_has_id_and_heading() {
        let html = section("skills", "Skills", "<p>body</p>").render().unwrap();
        assert!(html.starts_with("<section id=\"skills\""));
        assert!(html.contains("<h2>Skills</h2>"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_section_escapes_title() {
        let html = section("x", "Q&A", "").render().unwrap();
        assert!(html.contains("<h2>Q&amp;A</h2>"));
    }

    #[test]
    fn test_tag_row_empty_renders_nothing() {
        let empty: Vec<String> = vec![];
        assert!(tag_row(&empty).render().unwrap().trim().is_empty());
    }

    #[test]
    fn test_tag_row_keeps_order_and_duplicates() {
        let items = strings(&["b", "a", "b"]);
        let html = tag_row(&items).render().unwrap();
        assert_eq!(
            html,
            "<div class=\"tags\"><span class=\"chip\">b</span><span class=\"chip\">a</span><span class=\"chip\">b</span></div>"
        );
    }

    #[test]
    fn test_tag_row_escapes_items() {
        let items = strings(&["<b>"]);
        let html = tag_row(&items).render().unwrap();
        assert!(html.contains("<span class=\"chip\">&lt;b&gt;</span>"));
    }

    #[test]
    fn test_card_always_carries_reveal() {
        let html = card("project", "x").render().unwrap();
        assert!(html.contains("class=\"card reveal project\""));
    }

    #[test]
    fn test_grid_renders_cards_in_order() {
        let html = grid("skills", ["first", "second"]).render().unwrap();
        assert!(html.starts_with("<div class=\"grid skills\">"));
        assert!(html.find("first") < html.find("second"));
    }
}
