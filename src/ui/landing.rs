//! Marketing page and the sign-in / sign-up dialog.

use super::components::{Button, ButtonSize, ButtonVariant, Input, feature_card, icons};
use super::escape;
use crate::auth::{AuthDialog, AuthMode};

/// Landing page body, with the auth dialog when it is open.
#[must_use]
pub fn render(dialog: &AuthDialog) -> String {
    let features = [
        (
            "Thumbnail Generation",
            "Create eye-catching thumbnails that boost your click-through rates with AI-powered design suggestions.",
        ),
        (
            "Script Generation",
            "Generate compelling scripts for videos, podcasts, and presentations with intelligent AI writing.",
        ),
        (
            "Video Generation",
            "Transform your ideas into stunning videos with AI-powered video creation and editing tools.",
        ),
    ]
    .iter()
    .map(|(title, description)| feature_card(title, description))
    .collect::<String>();

    let dialog_html = if dialog.open {
        render_dialog(dialog)
    } else {
        String::new()
    };

    format!(
        r#"<div id="landing" class="flex flex-col flex-1">
    <header class="container mx-auto flex h-16 items-center justify-between px-6">
        <a href="/" class="flex items-center gap-2 text-2xl font-bold">
            Clip<span class="text-primary">Gen</span>{sparkles}
        </a>
        <nav class="flex gap-4">
            <a href="/auth/signin">{sign_in}</a>
            <a href="/auth/signup">{sign_up}</a>
        </nav>
    </header>

    <main class="flex-1">
        <section class="container mx-auto px-6 py-20 text-center">
            <h1 class="text-5xl font-bold mb-8">Create Amazing Content with <span class="text-primary">AI Magic</span></h1>
            <p class="text-xl text-textMuted mb-12 max-w-2xl mx-auto">
                Generate stunning thumbnails, compelling scripts, and engaging videos with our powerful AI tools. Transform your content creation workflow today.
            </p>
            <a href="/auth/signup">{start}</a>
        </section>

        <section class="container mx-auto px-6 py-20">
            <div class="text-center mb-12">
                <h2 class="text-4xl font-bold mb-6">Everything You Need to Create</h2>
                <p class="text-textMuted text-lg max-w-2xl mx-auto">Our AI-powered tools help you create professional content in minutes, not hours.</p>
            </div>
            <div class="grid gap-6 md:grid-cols-3">{features}</div>
        </section>

        <section class="container mx-auto px-6 py-20 text-center">
            <h2 class="text-3xl font-bold mb-6">Ready to Transform Your Content?</h2>
            <p class="text-textMuted mb-8 text-lg">Join thousands of creators who are already using ClipGen to create amazing content.</p>
            <a href="/auth/signup">{get_started}</a>
        </section>
    </main>
    {dialog_html}
</div>"#,
        sparkles = icons::sparkles("h-6 w-6 text-primary"),
        sign_in = Button::new().variant(ButtonVariant::Outline).render("Sign In"),
        sign_up = Button::new().render("Sign Up"),
        start = Button::new().size(ButtonSize::Lg).render("Start Creating for Free"),
        get_started = Button::new()
            .variant(ButtonVariant::Inverse)
            .size(ButtonSize::Lg)
            .render("Get Started Now"),
    )
}

/// The modal auth form.
#[must_use]
pub fn render_dialog(dialog: &AuthDialog) -> String {
    let mode = dialog.mode;
    let sign_up = mode == AuthMode::SignUp;

    let mut fields = String::new();
    if sign_up {
        fields.push_str(
            &Input {
                id: "name",
                label: "Full Name",
                input_type: "text",
                placeholder: "Enter your full name",
                value: &dialog.form.name,
                required: false,
                attrs: r#"autocomplete="name""#,
            }
            .render(),
        );
    }
    fields.push_str(
        &Input {
            id: "email",
            label: "Email",
            input_type: "email",
            placeholder: "Enter your email",
            value: &dialog.form.email,
            required: true,
            attrs: r#"autocomplete="email""#,
        }
        .render(),
    );
    fields.push_str(
        &Input {
            id: "password",
            label: "Password",
            input_type: "password",
            placeholder: "Enter your password",
            value: "",
            required: true,
            attrs: "",
        }
        .render(),
    );
    if sign_up {
        fields.push_str(
            &Input {
                id: "confirm_password",
                label: "Confirm Password",
                input_type: "password",
                placeholder: "Confirm your password",
                value: "",
                required: true,
                attrs: "",
            }
            .render(),
        );
    }

    let error = dialog
        .error
        .as_ref()
        .map(|err| {
            format!(
                r#"<p id="auth-error" role="alert" class="text-sm text-danger">{}</p>"#,
                escape(&err.to_string())
            )
        })
        .unwrap_or_default();

    let description = if sign_up {
        "Create your account to get started"
    } else {
        "Sign in to your account to continue"
    };

    let submit = Button::new()
        .submit()
        .class("w-full mt-6")
        .attrs(r#"id="auth-submit" x-bind:disabled="loading""#)
        .render(&format!(
            r#"<span x-text="loading ? 'Loading...' : '{label}'">{label}</span>"#,
            label = mode.submit_label()
        ));

    format!(
        r#"<div class="fixed inset-0 z-50 flex items-center justify-center bg-black/60">
<dialog id="auth-dialog" open data-mode="{mode_key}" class="w-full max-w-md rounded-2xl bg-surface p-6 shadow-lg">
    <form method="post" action="/auth/close" class="flex justify-end">
        <button type="submit" aria-label="Close">{close}</button>
    </form>
    <h2 class="text-center text-2xl font-bold">{title}</h2>
    <p class="text-center text-textMuted mb-4">{description}</p>
    <form id="auth-form" method="post" action="/auth/{mode_key}" class="space-y-4"
          x-data="{{ loading: false }}" x-on:submit="loading = true">
        {fields}
        {error}
        {submit}
    </form>
</dialog>
</div>"#,
        mode_key = mode.as_str(),
        close = icons::close(""),
        title = mode.title(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthForm;
    use crate::error::ValidationError;

    #[test]
    fn test_dialog_hidden_when_closed() {
        let html = render(&AuthDialog::default());
        assert!(!html.contains("auth-dialog"));
    }

    #[test]
    fn test_signup_dialog_fields() {
        let mut dialog = AuthDialog::default();
        dialog.open(AuthMode::SignUp);
        let html = render(&dialog);
        assert!(html.contains(r#"action="/auth/signup""#));
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"name="confirm_password""#));
        assert!(html.contains("Create Account"));
    }

    #[test]
    fn test_signin_dialog_has_no_name_field() {
        let mut dialog = AuthDialog::default();
        dialog.open(AuthMode::SignIn);
        let html = render_dialog(&dialog);
        assert!(!html.contains(r#"name="name""#));
        assert!(!html.contains(r#"name="confirm_password""#));
        assert!(html.contains("Welcome Back"));
    }

    #[test]
    fn test_error_and_values_rendered() {
        let dialog = AuthDialog {
            open: true,
            mode: AuthMode::SignUp,
            form: AuthForm {
                email: "a<b@x.io".into(),
                ..AuthForm::default()
            },
            error: Some(ValidationError::PasswordMismatch),
        };
        let html = render_dialog(&dialog);
        assert!(html.contains("passwords do not match"));
        assert!(html.contains(r#"value="a&lt;b@x.io""#));
    }
}
