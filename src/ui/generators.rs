//! Generator panels: one form plus a results area per [`GeneratorKind`].

use super::components::{
    Button, ButtonSize, ButtonVariant, Input, card, icons, select, textarea,
};
use super::escape;
use crate::generate::{
    GenerationResult, GeneratorKind, MediaRef, SCRIPT_DURATION_RANGE, VIDEO_DURATION_RANGE,
};
use crate::session::{GeneratorSlot, SessionSnapshot};

/// Panel for `kind`, filled from the session's last submitted form and slot.
#[must_use]
pub fn render(kind: GeneratorKind, snapshot: &SessionSnapshot) -> String {
    let slot = snapshot.slots.get(kind);
    let (title, description, results_title) = match kind {
        GeneratorKind::Thumbnail => (
            "Thumbnail Generator",
            "Create eye-catching thumbnails with AI",
            "Generated Thumbnails",
        ),
        GeneratorKind::Script => (
            "Script Generator",
            "Generate compelling scripts with AI",
            "Generated Script",
        ),
        GeneratorKind::Video => (
            "Video Generator",
            "Transform ideas into stunning videos with AI",
            "Generated Videos",
        ),
    };

    let form = card(title, description, &form(kind, snapshot));
    let results = card(results_title, "", &results(kind, slot));
    let poll = if slot.in_flight {
        format!(
            r##" hx-get="/" hx-trigger="every 1s" hx-select="#generator-{k}" hx-target="this" hx-swap="outerHTML""##,
            k = kind.as_str()
        )
    } else {
        String::new()
    };

    format!(
        r#"<section id="generator-{k}" class="grid gap-8 lg:grid-cols-2"{poll}>
    {form}
    {results}
</section>"#,
        k = kind.as_str()
    )
}

fn form(kind: GeneratorKind, snapshot: &SessionSnapshot) -> String {
    let forms = &snapshot.forms;
    let slot = snapshot.slots.get(kind);
    let prompt_attrs = r#"x-on:input="prompt = $event.target.value""#;

    let (prompt_id, fields) = match kind {
        GeneratorKind::Thumbnail => (
            "prompt",
            format!(
                "{}{}",
                textarea(
                    "prompt",
                    "Describe your thumbnail",
                    "e.g., A vibrant YouTube thumbnail for a cooking video with bright colors and bold text",
                    &forms.thumbnail.prompt,
                    prompt_attrs,
                ),
                select("style", "Style", forms.thumbnail.style),
            ),
        ),
        GeneratorKind::Script => {
            let duration = forms.script.duration.to_string();
            let range = format!(
                r#"min="{}" max="{}""#,
                SCRIPT_DURATION_RANGE.0, SCRIPT_DURATION_RANGE.1
            );
            (
                "topic",
                format!(
                    "{}{}{}",
                    Input {
                        id: "topic",
                        label: "Topic",
                        input_type: "text",
                        placeholder: "e.g., How to make the perfect pasta",
                        value: &forms.script.topic,
                        required: false,
                        attrs: prompt_attrs,
                    }
                    .render(),
                    Input {
                        id: "duration",
                        label: "Duration (minutes)",
                        input_type: "number",
                        placeholder: "5",
                        value: &duration,
                        required: false,
                        attrs: &range,
                    }
                    .render(),
                    select("tone", "Tone", forms.script.tone),
                ),
            )
        }
        GeneratorKind::Video => {
            let duration = forms.video.duration.to_string();
            let range = format!(
                r#"min="{}" max="{}""#,
                VIDEO_DURATION_RANGE.0, VIDEO_DURATION_RANGE.1
            );
            (
                "concept",
                format!(
                    "{}{}{}",
                    textarea(
                        "concept",
                        "Video Concept",
                        "e.g., A product showcase video for a new smartphone with dynamic transitions",
                        &forms.video.concept,
                        prompt_attrs,
                    ),
                    Input {
                        id: "duration",
                        label: "Duration (seconds)",
                        input_type: "number",
                        placeholder: "30",
                        value: &duration,
                        required: false,
                        attrs: &range,
                    }
                    .render(),
                    select("style", "Style", forms.video.style),
                ),
            )
        }
    };

    let idle_label = match kind {
        GeneratorKind::Thumbnail => "Generate Thumbnails",
        GeneratorKind::Script => "Generate Script",
        GeneratorKind::Video => "Generate Video",
    };
    let label = if slot.in_flight {
        "Generating..."
    } else {
        idle_label
    };
    let button = Button::new()
        .submit()
        .class("w-full")
        .disabled(!snapshot.trigger_enabled(kind))
        .attrs(format!(
            r#"id="generate-{k}" x-bind:disabled="busy || !prompt.trim()""#,
            k = kind.as_str()
        ))
        .render(&format!(
            r#"<span x-show="busy">{loader}</span><span x-text="busy ? 'Generating...' : '{idle_label}'">{label}</span>"#,
            loader = icons::loader("mr-2"),
        ));

    let error = slot
        .error
        .as_ref()
        .map(|msg| {
            format!(
                r#"<p id="generate-error" role="alert" class="text-sm text-danger">{}</p>"#,
                escape(msg)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<form id="form-{k}" method="post" action="/generate/{k}" class="space-y-4"
      x-data="{{ prompt: '', busy: {busy} }}"
      x-init="prompt = $el.querySelector('#{prompt_id}').value"
      x-on:submit="busy = true">
    {fields}
    {error}
    {button}
</form>"#,
        k = kind.as_str(),
        busy = slot.in_flight,
    )
}

fn results(kind: GeneratorKind, slot: &GeneratorSlot) -> String {
    if slot.in_flight {
        return format!(
            r#"<div class="flex flex-col items-center justify-center py-12 text-textMuted">{}<p>Generating...</p></div>"#,
            icons::loader("h-8 w-8 mb-4")
        );
    }
    let Some(result) = &slot.result else {
        let what = match kind {
            GeneratorKind::Thumbnail => "thumbnails",
            GeneratorKind::Script => "script",
            GeneratorKind::Video => "videos",
        };
        return format!(
            r#"<div id="results-empty" class="flex flex-col items-center justify-center py-12 text-textMuted">{}<p>Your generated {what} will appear here</p></div>"#,
            icons::sparkles("h-12 w-12 mb-4 opacity-50")
        );
    };

    let body = match result {
        GenerationResult::Thumbnails(items) => thumbnails(items),
        GenerationResult::Script(text) => script(text),
        GenerationResult::Videos(items) => videos(items),
    };
    format!(
        r#"<div id="results-{k}" class="space-y-4">
    {body}
    <form method="post" action="/generate/{k}/clear">{clear}</form>
</div>"#,
        k = kind.as_str(),
        clear = Button::new()
            .variant(ButtonVariant::Ghost)
            .size(ButtonSize::Sm)
            .submit()
            .attrs(format!(r#"id="clear-{}""#, kind.as_str()))
            .render("Clear"),
    )
}

fn thumbnails(items: &[MediaRef]) -> String {
    let tiles: String = items
        .iter()
        .map(|item| {
            let url = escape(&item.url);
            let label = escape(&item.label);
            format!(
                r#"<figure class="group relative">
    <img src="{url}" alt="{label}" class="w-full rounded-lg border border-panelBorder"/>
    <figcaption class="text-xs text-textMuted mt-1">{label}</figcaption>
    <a href="{url}" download class="text-sm text-primary">Download</a>
</figure>"#
            )
        })
        .collect();
    format!(r#"<div class="grid gap-4 grid-cols-2">{tiles}</div>"#)
}

fn script(text: &str) -> String {
    format!(
        r#"<div x-data class="space-y-2">
    <textarea id="script-output" x-ref="script" aria-label="Generated script" class="min-h-[400px] w-full rounded-lg border border-panelBorder bg-background p-3 font-mono text-sm">{text}</textarea>
    {copy}
</div>"#,
        text = escape(text),
        copy = Button::new()
            .variant(ButtonVariant::Outline)
            .size(ButtonSize::Sm)
            .attrs(r#"id="copy-script" x-on:click="navigator.clipboard.writeText($refs.script.value)""#)
            .render("Copy"),
    )
}

fn videos(items: &[MediaRef]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let url = escape(&item.url);
            format!(
                r#"<div class="flex items-center justify-between rounded-lg border border-panelBorder p-4">
    <div>
        <p class="font-medium">Video {n}</p>
        <p class="text-sm text-textMuted">{label}</p>
    </div>
    <div class="flex gap-2">
        <a href="{url}" target="_blank" rel="noopener" class="text-sm">Preview</a>
        <a href="{url}" download class="text-sm text-primary">Download</a>
    </div>
</div>"#,
                n = i + 1,
                label = escape(&item.label),
            )
        })
        .collect()
}
