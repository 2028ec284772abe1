//! Document shell shared by every page.

use super::escape;

/// Wrap `content` in the full HTML document.
#[must_use]
pub fn html_shell(title: &str, content: &str) -> String {
    let title = escape(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="AI-powered thumbnails, scripts and videos">
    <title>{title} - ClipGen</title>

    <!-- HTMX and Alpine (local, no CDN) -->
    <script src="/static/vendor/htmx-2.0.8.min.js"></script>
    <script defer src="/static/vendor/alpine.min.js"></script>

    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="min-h-screen bg-background text-textPrimary antialiased" hx-boost="true">
    <div id="app" class="flex flex-col min-h-screen">
        {content}
    </div>
</body>
</html>"#
    )
}
