//! Labelled form fields.

use super::super::escape;
use crate::generate::Choice;

const INPUT_CLASSES: &str = "flex h-10 w-full rounded-lg border border-panelBorder bg-background \
                             px-3 py-2 text-sm text-textPrimary placeholder:text-textMuted \
                             focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary \
                             focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";

const TEXTAREA_CLASSES: &str = "flex min-h-[100px] w-full rounded-lg border border-panelBorder bg-background \
                                px-3 py-2 text-sm text-textPrimary placeholder:text-textMuted \
                                focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary \
                                focus-visible:ring-offset-2 resize-none";

fn field(id: &str, label: &str, control: &str) -> String {
    format!(
        r#"<div class="space-y-2">
    <label for="{id}" class="text-sm font-medium">{label}</label>
    {control}
</div>"#
    )
}

/// A single-line input.
#[derive(Debug, Clone, Copy)]
pub struct Input<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub input_type: &'a str,
    pub placeholder: &'a str,
    pub value: &'a str,
    pub required: bool,
    /// Extra raw attributes, already escaped (e.g. `min="1"`).
    pub attrs: &'a str,
}

impl Input<'_> {
    #[must_use]
    pub fn render(&self) -> String {
        let control = format!(
            r#"<input id="{id}" name="{id}" type="{ty}" class="{INPUT_CLASSES}" placeholder="{placeholder}" value="{value}"{required} {attrs}/>"#,
            id = self.id,
            ty = self.input_type,
            placeholder = escape(self.placeholder),
            value = escape(self.value),
            required = if self.required { " required" } else { "" },
            attrs = self.attrs,
        );
        field(self.id, self.label, &control)
    }
}

/// Multi-line text input.
#[must_use]
pub fn textarea(id: &str, label: &str, placeholder: &str, value: &str, attrs: &str) -> String {
    let control = format!(
        r#"<textarea id="{id}" name="{id}" class="{TEXTAREA_CLASSES}" placeholder="{placeholder}" {attrs}>{value}</textarea>"#,
        placeholder = escape(placeholder),
        value = escape(value),
    );
    field(id, label, &control)
}

/// `<select>` over every value of `C`, with `selected` pre-chosen.
#[must_use]
pub fn select<C: Choice>(id: &str, label: &str, selected: C) -> String {
    let options: String = C::ALL
        .iter()
        .map(|choice| {
            format!(
                r#"<option value="{value}"{sel}>{label}</option>"#,
                value = choice.value(),
                sel = if *choice == selected { " selected" } else { "" },
                label = escape(choice.label()),
            )
        })
        .collect();
    let control = format!(
        r#"<select id="{id}" name="{id}" class="{INPUT_CLASSES}">{options}</select>"#
    );
    field(id, label, &control)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::ScriptTone;

    #[test]
    fn test_select_marks_choice() {
        let html = select("tone", "Tone & Style", ScriptTone::Casual);
        assert!(html.contains(r#"<option value="casual" selected>Casual &amp; Friendly</option>"#));
        assert_eq!(html.matches(" selected").count(), 1);
    }

    #[test]
    fn test_values_are_escaped() {
        let html = textarea("prompt", "Prompt", "", "<b>\"hi\"</b>", "");
        assert!(html.contains("&lt;b&gt;&quot;hi&quot;&lt;/b&gt;"));
    }
}
