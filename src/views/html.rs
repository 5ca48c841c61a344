//! Built-in HTML renderer.
//!
//! Pages are maud templates. They read the view-model as plain JSON, so any
//! record shape the content service returns renders without failing; missing
//! or null values render as empty states. All dynamic content is escaped by
//! maud.

use maud::{html, Markup, DOCTYPE};
use serde_json::Value;
use std::collections::HashMap;

use crate::config::ListingConfig;
use crate::views::{RenderError, Renderer, Template, ViewModel};

/// Renders the three site pages as complete HTML documents.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    /// Squad name → listing path narrowed to that squad.
    squad_links: HashMap<String, String>,
}

impl HtmlRenderer {
    /// Link each squad that has its own listing route to that route.
    pub fn from_listings(listings: &[ListingConfig]) -> Self {
        let squad_links = listings
            .iter()
            .filter_map(|l| l.squad.as_ref().map(|squad| (squad.clone(), l.path.clone())))
            .collect();
        Self { squad_links }
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, template: Template, model: &ViewModel) -> Result<String, RenderError> {
        let body = match template {
            Template::Index => self.index_page(model),
            Template::Student => self.student_page(model),
            Template::Messages => messages_page(model),
        };
        Ok(layout(title(template), body).into_string())
    }
}

fn title(template: Template) -> &'static str {
    match template {
        Template::Index => "Squad page",
        Template::Student => "Student",
        Template::Messages => "Berichten",
    }
}

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="nl" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="/styles.css";
            }
            body {
                (body)
                script src="/scripts.js" defer {}
            }
        }
    }
}

impl HtmlRenderer {
    fn index_page(&self, model: &ViewModel) -> Markup {
        let persons = items(model.get("persons"));
        html! {
            header {
                h1 { "Squad page" }
                (self.squad_nav(model.get("squads")))
                label for="filter-select" { "Sort" }
                select id="filter-select" {
                    option value="az" { "A-Z" }
                    option value="za" { "Z-A" }
                    option value="birthdate" { "Birthdate" }
                }
            }
            @if persons.is_empty() {
                p class="empty" { "No students found." }
            } @else {
                ul class="persons" {
                    @for person in persons {
                        li class="person" {
                            a href={ "/student/" (scalar(person.get("id"))) } { (display_name(person)) }
                            @if let Some(birthdate) = text(person.get("birthdate")) {
                                time datetime=(birthdate) { (birthdate) }
                            }
                            (heart_button())
                        }
                    }
                }
            }
        }
    }

    fn student_page(&self, model: &ViewModel) -> Markup {
        let person = match model.get("person") {
            Some(person @ Value::Object(_)) => Some(person),
            _ => None,
        };
        html! {
            header {
                a href="/" { "Back to overview" }
                (self.squad_nav(model.get("squads")))
            }
            @match person {
                Some(person) => {
                    article class="student" {
                        h1 { (display_name(person)) }
                        (heart_button())
                        dl {
                            @for (label, key) in [("Nickname", "nickname"), ("Birthdate", "birthdate"), ("Bio", "bio")] {
                                @if let Some(value) = text(person.get(key)) {
                                    dt { (label) }
                                    dd { (value) }
                                }
                            }
                        }
                    }
                }
                None => {
                    p class="empty" { "Student not found." }
                }
            }
        }
    }

    fn squad_nav(&self, squads: Option<&Value>) -> Markup {
        html! {
            nav class="squads" {
                a href="/" { "All" }
                @for name in items(squads).iter().filter_map(|s| text(s.get("name"))) {
                    @if let Some(path) = self.squad_links.get(name) {
                        a href=(path) { (name) }
                    } @else {
                        span class="squad" { (name) }
                    }
                }
                a href="/berichten" { "Berichten" }
            }
        }
    }
}

fn messages_page(model: &ViewModel) -> Markup {
    let messages = items(model.get("messages"));
    html! {
        header {
            a href="/" { "Back to overview" }
            h1 { "Berichten" }
        }
        @if messages.is_empty() {
            p class="empty" { "No messages yet." }
        } @else {
            ul class="messages" {
                @for message in messages {
                    li {
                        strong { (text(message.get("from")).unwrap_or("anonymous")) }
                        " "
                        p { (text(message.get("text")).unwrap_or_default()) }
                    }
                }
            }
        }
        form method="post" action="/berichten" {
            label for="afzender" { "Name" }
            input id="afzender" name="afzender" type="text";
            label for="message" { "Message" }
            textarea id="message" name="message" required {}
            button type="submit" { "Send" }
        }
    }
}

fn heart_button() -> Markup {
    html! {
        button class="heart" type="button" aria-label="Favorite" { "♥" }
    }
}

fn items(value: Option<&Value>) -> &[Value] {
    match value {
        Some(Value::Array(items)) => items,
        _ => &[],
    }
}

fn text(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn scalar(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn display_name(person: &Value) -> String {
    text(person.get("name"))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Student {}", scalar(person.get("id"))))
}
