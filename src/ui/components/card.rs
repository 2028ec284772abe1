//! Card container markup.

/// Card with a title, optional description and a body.
#[must_use]
pub fn card(title: &str, description: &str, body: &str) -> String {
    let description = if description.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="text-sm text-textMuted">{description}</p>"#)
    };
    format!(
        r#"<div class="rounded-xl border border-panelBorder bg-panel text-textPrimary shadow-sm">
    <div class="flex flex-col space-y-1.5 p-6">
        <h3 class="text-lg font-semibold">{title}</h3>
        {description}
    </div>
    <div class="p-6 pt-0 space-y-6">{body}</div>
</div>"#
    )
}

/// Small card used on the landing page feature grid.
#[must_use]
pub fn feature_card(title: &str, description: &str) -> String {
    format!(
        r#"<div class="p-5 rounded-2xl bg-surfaceVariant hover:bg-surfaceContainer transition-colors">
    <h3 class="font-semibold mb-2">{title}</h3>
    <p class="text-sm text-textMuted">{description}</p>
</div>"#
    )
}
