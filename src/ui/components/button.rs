//! Button markup with variants and sizes.

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Secondary action button.
    Secondary,
    /// Subtle ghost button.
    Ghost,
    /// Outline button.
    Outline,
    /// Light button for dark backgrounds.
    Inverse,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-white hover:bg-primaryMuted",
            Self::Secondary => "bg-panel text-textPrimary border border-panelBorder hover:bg-panelBorder",
            Self::Ghost => "bg-transparent text-textPrimary hover:bg-panel",
            Self::Outline => "bg-transparent border border-panelBorder text-textPrimary hover:bg-panel",
            Self::Inverse => "bg-white text-primary hover:bg-surface",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button.
    Sm,
    /// Medium button (default).
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 px-3 text-xs",
            Self::Md => "h-10 px-4 text-sm",
            Self::Lg => "h-12 px-6 text-base",
        }
    }
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center rounded-lg font-medium \
                            transition-colors focus-visible:outline-none focus-visible:ring-2 \
                            focus-visible:ring-primary focus-visible:ring-offset-2 \
                            disabled:pointer-events-none disabled:opacity-50";

/// Button builder.
///
/// ```rust
/// use clipgen::ui::components::{Button, ButtonVariant};
///
/// let html = Button::new().variant(ButtonVariant::Outline).submit().render("Save");
/// assert!(html.starts_with("<button type=\"submit\""));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Button {
    variant: ButtonVariant,
    size: ButtonSize,
    submit: bool,
    disabled: bool,
    class: &'static str,
    attrs: String,
}

impl Button {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Render as `type="submit"` instead of `type="button"`.
    #[must_use]
    pub fn submit(mut self) -> Self {
        self.submit = true;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    /// Extra raw attributes, already escaped.
    #[must_use]
    pub fn attrs(mut self, attrs: impl Into<String>) -> Self {
        self.attrs = attrs.into();
        self
    }

    /// Render with `content` (already escaped markup) inside.
    #[must_use]
    pub fn render(&self, content: &str) -> String {
        format!(
            r#"<button type="{ty}" class="{BASE_CLASSES} {variant} {size} {class}"{attrs}{disabled}>{content}</button>"#,
            ty = if self.submit { "submit" } else { "button" },
            variant = self.variant.classes(),
            size = self.size.classes(),
            class = self.class,
            attrs = if self.attrs.is_empty() {
                String::new()
            } else {
                format!(" {}", self.attrs)
            },
            disabled = if self.disabled { " disabled" } else { "" },
        )
    }
}
