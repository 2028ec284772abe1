//! Signed-in shell: header, tab navigation and the overview tab.

use super::components::{Button, ButtonVariant, card, icons};
use super::{escape, generators};
use crate::auth::User;
use crate::generate::GeneratorKind;
use crate::session::{SessionSnapshot, Tab};

/// Dashboard body for `user`.
#[must_use]
pub fn render(user: &User, snapshot: &SessionSnapshot) -> String {
    let name = escape(&user.name);
    let body = match snapshot.tab.generator() {
        None => overview(&name),
        Some(kind) => generators::render(kind, snapshot),
    };

    format!(
        r#"<div id="dashboard" class="flex flex-col flex-1" data-tab="{tab}">
    <header class="border-b border-panelBorder">
        <div class="container mx-auto flex h-16 items-center justify-between px-6">
            <div class="flex items-center gap-8">
                <span class="flex items-center gap-2 text-2xl font-bold">Clip<span class="text-primary">Gen</span>{sparkles}</span>
                <nav class="hidden md:flex gap-2">{nav}</nav>
            </div>
            <div class="flex items-center gap-4">
                <span class="text-sm text-textMuted">Welcome, {name}!</span>
                <form method="post" action="/logout">
                    {logout}
                </form>
            </div>
        </div>
    </header>
    <main class="container mx-auto flex-1 px-6 py-8">
        {body}
    </main>
</div>"#,
        tab = snapshot.tab.as_str(),
        sparkles = icons::sparkles("h-6 w-6 text-primary"),
        nav = nav(snapshot.tab),
        logout = Button::new()
            .variant(ButtonVariant::Outline)
            .submit()
            .attrs(r#"id="logout""#)
            .render("Logout"),
    )
}

fn nav(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|&tab| {
            let (variant, current) = if tab == active {
                (ButtonVariant::Secondary, r#" aria-current="page""#)
            } else {
                (ButtonVariant::Ghost, "")
            };
            format!(
                r#"<form method="post" action="/tabs/{key}">{button}</form>"#,
                key = tab.as_str(),
                button = Button::new()
                    .variant(variant)
                    .submit()
                    .attrs(format!(r#"id="tab-{}"{current}"#, tab.as_str()))
                    .render(tab.label()),
            )
        })
        .collect()
}

fn overview(name: &str) -> String {
    let cards: String = GeneratorKind::ALL
        .iter()
        .map(|&kind| {
            let (title, description, action) = match kind {
                GeneratorKind::Thumbnail => (
                    "Thumbnail Generator",
                    "Create eye-catching thumbnails for your content",
                    "Generate Thumbnails",
                ),
                GeneratorKind::Script => (
                    "Script Generator",
                    "Generate compelling scripts for videos and podcasts",
                    "Generate Scripts",
                ),
                GeneratorKind::Video => (
                    "Video Generator",
                    "Transform ideas into stunning videos",
                    "Generate Videos",
                ),
            };
            let button = Button::new().submit().class("w-full").render(action);
            card(
                title,
                description,
                &format!(
                    r#"<form method="post" action="/tabs/{}">{button}</form>"#,
                    Tab::from(kind).as_str()
                ),
            )
        })
        .collect();

    format!(
        r#"<section id="overview" class="space-y-8">
    <div>
        <h1 class="text-3xl font-bold mb-2">Welcome back, {name}!</h1>
        <p class="text-textMuted">Choose a tool to start creating amazing content with AI.</p>
    </div>
    <div class="grid gap-6 md:grid-cols-3">{cards}</div>
</section>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            name: "Ada <3".into(),
            email: "ada@example.com".into(),
        }
    }

    #[test]
    fn test_overview_greets_and_links_generators() {
        let html = render(&user(), &SessionSnapshot::default());
        assert!(html.contains("Welcome back, Ada &lt;3!"));
        assert!(html.contains(r#"id="overview""#));
        for tab in ["thumbnail", "script", "video"] {
            assert!(html.contains(&format!(r#"action="/tabs/{tab}""#)));
        }
    }

    #[test]
    fn test_active_tab_marked() {
        let snapshot = SessionSnapshot {
            tab: Tab::Script,
            ..SessionSnapshot::default()
        };
        let html = render(&user(), &snapshot);
        assert!(html.contains(r#"id="tab-script" aria-current="page""#));
        assert!(!html.contains(r#"id="tab-overview" aria-current"#));
        assert!(!html.contains(r#"id="overview""#));
        assert!(html.contains(r#"id="generator-script""#));
    }
}
