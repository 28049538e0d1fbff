//! Page shell shared by every view.

use maud::{html, Markup, DOCTYPE};

/// Wrap a view body in the document shell with the top navigation.
pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                nav {
                    a href="/hotels" { "Hotels" }
                }
                main { (body) }
            }
        }
    }
}

/// Page shown when no route matches.
pub fn not_found(path: &str) -> Markup {
    page(
        "Page not found",
        html! {
            h2 { "Page not found" }
            p { "No page exists at " code { (path) } "." }
        },
    )
}
