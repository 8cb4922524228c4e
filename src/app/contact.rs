use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout;
use leptos::{either::*, prelude::*};
use leptos_meta::Title;
use thiserror::Error;

use super::widgets::{ResponseTimeIndicator, SocialLinks, WorldClock};

pub const MAX_MESSAGE_LEN: usize = 500;
/// Simulated network latency for the fake submit.
const SEND_DELAY_MS: u64 = 2_000;
/// How long the success/error state stays up before returning to idle.
const STATUS_RESET_MS: u64 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in your {0}.")]
    MissingField(&'static str),
    #[error("That email address doesn't look right.")]
    InvalidEmail,
    #[error("Messages are limited to {MAX_MESSAGE_LEN} characters.")]
    MessageTooLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Sending,
    Success,
    Failed,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

fn valid_email(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}

impl FormData {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(FormError::MissingField("email"));
        }
        if !valid_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        if self.subject.trim().is_empty() {
            return Err(FormError::MissingField("subject"));
        }
        if self.message.trim().is_empty() {
            return Err(FormError::MissingField("message"));
        }
        if self.message.chars().count() > MAX_MESSAGE_LEN {
            return Err(FormError::MessageTooLong);
        }
        Ok(())
    }

    /// Cheap check used to enable the submit button; full validation runs
    /// on submit.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.subject.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <div class="space-y-8">
            <div>
                <h2 class="text-3xl font-bold mb-4">"Contact"</h2>
                <p class="text-muted">
                    "Let's connect! I'm always interested in discussing new \
                    opportunities, collaborations, or just having a chat about \
                    technology."
                </p>
            </div>

            <ResponseTimeIndicator />

            <SocialLinks />

            <div class="grid lg:grid-cols-2 gap-8">
                <WorldClock />
                <ContactForm />
            </div>
        </div>
    }
}

/// Message form with a simulated network call: two seconds of "sending",
/// then a pseudo-random success or failure that resets a few seconds later.
#[component]
fn ContactForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(FormStatus::Idle);
    let (error, set_error) = signal(None::<FormError>);

    let is_complete = move || {
        FormData {
            name: name.get(),
            email: email.get(),
            subject: subject.get(),
            message: message.get(),
        }
        .is_complete()
    };
    let sending = move || status.get() == FormStatus::Sending;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == FormStatus::Sending {
            return;
        }
        let form = FormData {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(err) = form.validate() {
            set_error(Some(err));
            return;
        }
        set_error(None);
        set_status(FormStatus::Sending);
        log::debug!("contact form: simulating send for {}", form.email);

        set_timeout(
            move || {
                let success = js_sys::Math::random() > 0.3;
                if success {
                    set_name(String::new());
                    set_email(String::new());
                    set_subject(String::new());
                    set_message(String::new());
                    set_status(FormStatus::Success);
                } else {
                    set_status(FormStatus::Failed);
                }
                set_timeout(
                    move || set_status(FormStatus::Idle),
                    Duration::from_millis(STATUS_RESET_MS),
                );
            },
            Duration::from_millis(SEND_DELAY_MS),
        );
    };

    let field_class = "w-full px-3 py-2 rounded-md border border-muted/30 bg-background text-foreground focus:outline-none focus:ring-2 focus:ring-blue/50";

    view! {
        <div class="bg-brightBlack/20 rounded-lg border border-muted/30 p-6 h-full flex flex-col">
            <h3 class="text-lg font-semibold flex items-center gap-2 mb-4">
                <i class="extra-send text-blue"></i>
                "Send a Message"
            </h3>

            <form class="space-y-4 flex-1 flex flex-col" on:submit=on_submit>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <input
                        type="text"
                        placeholder="Your name"
                        class=field_class
                        prop:value=name
                        prop:disabled=sending
                        on:input=move |ev| set_name(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        placeholder="Your email"
                        class=field_class
                        prop:value=email
                        prop:disabled=sending
                        on:input=move |ev| set_email(event_target_value(&ev))
                    />
                </div>

                <input
                    type="text"
                    placeholder="Subject"
                    class=field_class
                    prop:value=subject
                    prop:disabled=sending
                    on:input=move |ev| set_subject(event_target_value(&ev))
                />

                <div class="relative flex-1">
                    <textarea
                        placeholder="Your message"
                        rows=8
                        maxlength=MAX_MESSAGE_LEN
                        class="w-full h-full px-3 py-2 rounded-md border border-muted/30 bg-background text-foreground focus:outline-none focus:ring-2 focus:ring-blue/50 resize-none"
                        prop:value=message
                        prop:disabled=sending
                        on:input=move |ev| set_message(event_target_value(&ev))
                    ></textarea>
                    <div class="absolute bottom-2 right-2 text-xs text-muted">
                        {move || format!("{}/{}", message.get().chars().count(), MAX_MESSAGE_LEN)}
                    </div>
                </div>

                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <p class="text-sm text-red">{err.to_string()}</p>
                            }
                        })
                }}

                <button
                    type="submit"
                    class="w-full bg-blue/20 hover:bg-blue/30 text-blue border border-blue/30 px-4 py-2 rounded-md font-medium transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed"
                    prop:disabled=move || !is_complete() || sending()
                >
                    {move || match status.get() {
                        FormStatus::Sending => {
                            EitherOf4::A(
                                view! {
                                    <span class="flex items-center justify-center gap-2">
                                        <i class="extra-loader animate-spin"></i>
                                        "Sending..."
                                    </span>
                                },
                            )
                        }
                        FormStatus::Success => {
                            EitherOf4::B(
                                view! {
                                    <span class="flex items-center justify-center gap-2">
                                        <i class="extra-check-circle"></i>
                                        "Message Sent!"
                                    </span>
                                },
                            )
                        }
                        FormStatus::Failed => {
                            EitherOf4::C(
                                view! {
                                    <span class="flex items-center justify-center gap-2">
                                        <i class="extra-alert-circle"></i>
                                        "Try Again"
                                    </span>
                                },
                            )
                        }
                        FormStatus::Idle => {
                            EitherOf4::D(
                                view! {
                                    <span class="flex items-center justify-center gap-2">
                                        <i class="extra-send"></i>
                                        "Send Message"
                                    </span>
                                },
                            )
                        }
                    }}
                </button>
            </form>

            {move || match status.get() {
                FormStatus::Success => {
                    EitherOf3::A(
                        view! {
                            <div class="mt-4 p-3 bg-green/10 border border-green/30 rounded-lg">
                                <div class="flex items-center gap-2 text-green">
                                    <i class="extra-check-circle text-xs"></i>
                                    <span class="text-sm">
                                        "Thanks! I'll get back to you within 24 hours."
                                    </span>
                                </div>
                            </div>
                        },
                    )
                }
                FormStatus::Failed => {
                    EitherOf3::B(
                        view! {
                            <div class="mt-4 p-3 bg-red/10 border border-red/30 rounded-lg">
                                <div class="flex items-center gap-2 text-red">
                                    <i class="extra-alert-circle text-xs"></i>
                                    <span class="text-sm">
                                        "Something went wrong. Please try again or email me directly."
                                    </span>
                                </div>
                            </div>
                        },
                    )
                }
                _ => EitherOf3::C(()),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormData {
        FormData {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site!".to_string(),
        }
    }

    #[test]
    fn complete_form_validates() {
        assert_eq!(filled().validate(), Ok(()));
        assert!(filled().is_complete());
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let empty = FormData::default();
        assert_eq!(empty.validate(), Err(FormError::MissingField("name")));

        let mut form = filled();
        form.subject = "  ".to_string();
        assert_eq!(form.validate(), Err(FormError::MissingField("subject")));
        assert!(!form.is_complete());
    }

    #[test]
    fn email_validation() {
        for bad in ["nope", "@example.com", "a@", "a@b", "a@.com", "a@b.", "a@b@c.com"] {
            let mut form = filled();
            form.email = bad.to_string();
            assert_eq!(form.validate(), Err(FormError::InvalidEmail), "{bad}");
        }
        let mut form = filled();
        form.email = " ada@sub.example.org ".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn overlong_message_is_rejected() {
        let mut form = filled();
        form.message = "x".repeat(MAX_MESSAGE_LEN);
        assert_eq!(form.validate(), Ok(()));
        form.message.push('x');
        assert_eq!(form.validate(), Err(FormError::MessageTooLong));
    }

    #[test]
    fn error_messages_read_cleanly() {
        assert_eq!(
            FormError::MissingField("email").to_string(),
            "Please fill in your email."
        );
        assert_eq!(
            FormError::MessageTooLong.to_string(),
            "Messages are limited to 500 characters."
        );
    }
}
