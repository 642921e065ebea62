use async_trait::async_trait;
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::{
    ContactForm, ContactParams, ErrorSlot, Field, Mailer, Notice, Notifier, SubmissionStatus,
    SubmitError, SUCCESS_NOTICE,
};
use crate::portfolio::PROFILE;

const TOAST_MS: f64 = 4000.0;

/// Validates again on the server and hands the message to the mail
/// provider. The provider credentials only exist on this side.
#[server]
pub async fn send_contact_message(params: ContactParams) -> Result<(), ServerFnError> {
    use crate::contact::{brevo::BrevoMailer, validate, FormData};

    let errors = validate::validate(&FormData::from(&params));
    if let Some((slot, message)) = errors.iter().next() {
        tracing::warn!(%slot, reason = message, "rejected contact message that skipped validation");
        return Err(ServerFnError::new(message));
    }

    let mailer = use_context::<BrevoMailer>()
        .ok_or_else(|| ServerFnError::new("Contact form is not configured"))?;
    mailer
        .deliver(&params)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Browser-side mailer that goes through [`send_contact_message`].
struct ServerFnMailer;

#[async_trait(?Send)]
impl Mailer for ServerFnMailer {
    async fn send(&self, params: &ContactParams) -> Result<(), SubmitError> {
        send_contact_message(params.clone())
            .await
            .map_err(SubmitError::from)
    }
}

#[derive(Debug, Clone, Copy)]
struct ToastNotifier {
    notice: RwSignal<Option<Notice>>,
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        self.notice.set(Some(notice));
    }
}

#[component]
fn Toast(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(move |_: ()| notice.set(None), TOAST_MS);
    Effect::watch(
        move || notice.get(),
        move |current, _, _| {
            if current.is_some() {
                start(());
            }
        },
        false,
    );

    move || {
        notice.get().map(|n| {
            let class = if n.is_error() {
                "fixed bottom-6 right-6 z-50 rounded-md px-4 py-3 shadow-lg bg-red-600 text-white"
            } else {
                "fixed bottom-6 right-6 z-50 rounded-md px-4 py-3 shadow-lg bg-green-600 text-white"
            };
            view! {
                <div role="status" class=class>
                    {n.text().to_string()}
                </div>
            }
        })
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm<ToastNotifier>>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] error_slot: Option<ErrorSlot>,
    #[prop(optional)] hint: Option<&'static str>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let id = field.id();
    let error = move || error_slot.and_then(|slot| form.with(|f| f.errors().get(slot).map(str::to_string)));
    let value = move || form.with(|f| f.data().get(field).to_string());
    let disabled = move || form.with(|f| f.is_submitting());
    let set_value = move |value: String| form.update(|f| f.update_field(field, value));
    let class = move || {
        if error().is_some() {
            "w-full rounded-md border border-red-500 px-3 py-2 bg-background focus:border-red-500"
        } else {
            "w-full rounded-md border px-3 py-2 bg-background"
        }
    };
    let error_id = format!("{id}-error");
    let described_by = {
        let error_id = error_id.clone();
        move || error().map(|_| error_id.clone())
    };

    let input = if multiline {
        view! {
            <textarea
                id=id
                rows="4"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| set_value(event_target_value(&ev))
                disabled=disabled
                class=class
                aria-invalid=move || error().is_some().to_string()
                aria-describedby=described_by
            />
        }
        .into_any()
    } else {
        view! {
            <input
                id=id
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| set_value(event_target_value(&ev))
                disabled=disabled
                class=class
                aria-invalid=move || error().is_some().to_string()
                aria-describedby=described_by
            />
        }
        .into_any()
    };

    view! {
        <div class="space-y-2">
            <label for=id class="text-sm font-medium">
                {label}
            </label>
            {input}
            {move || {
                error().map(|e| view! { <p id=error_id.clone() class="text-sm text-red-600">{e}</p> })
            }}
            {hint.map(|h| view! { <p class="text-xs text-muted-foreground">{h}</p> })}
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let notice = RwSignal::new(None::<Notice>);
    let form = RwSignal::new(ContactForm::new(ToastNotifier { notice }));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.is_submitting()) {
            return;
        }
        let Some(params) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = ServerFnMailer.send(&params).await;
            form.update(|f| {
                f.complete_submit(result);
            });
        });
    };

    let status = move || form.with(|f| f.status());
    let submitting = move || status() == SubmissionStatus::Submitting;
    let general_error =
        move || form.with(|f| f.errors().get(ErrorSlot::General).map(str::to_string));

    view! {
        <section id="contact" class="py-16 px-4">
            <div class="container mx-auto">
                <h2 class="text-3xl font-bold mb-8 text-center">"Contact"</h2>
                <div class="max-w-md mx-auto">
                    <div class="rounded-lg border bg-card shadow-sm p-6 space-y-4">
                        <div>
                            <h3 class="text-xl font-semibold">"Send me a message"</h3>
                            <p class="text-sm text-muted-foreground">
                                "Fill in the form and I'll get back to you as soon as possible."
                            </p>
                        </div>
                        <Show when=move || status() == SubmissionStatus::Success>
                            <div class="rounded-md border border-green-200 bg-green-50 p-3 text-green-800">
                                {SUCCESS_NOTICE}
                            </div>
                        </Show>
                        {move || {
                            general_error()
                                .map(|e| {
                                    view! {
                                        <div class="rounded-md border border-red-200 bg-red-50 p-3 text-red-800">
                                            {e}
                                        </div>
                                    }
                                })
                        }}
                        <form class="space-y-4" novalidate=true on:submit=on_submit>
                            <FormField
                                form
                                field=Field::Name
                                label="Name *"
                                placeholder="Your full name"
                                error_slot=ErrorSlot::Name
                            />
                            <FormField
                                form
                                field=Field::Email
                                label="Email *"
                                placeholder="you@email.com"
                                input_type="email"
                                error_slot=ErrorSlot::Email
                            />
                            <FormField
                                form
                                field=Field::Phone
                                label="Phone (optional)"
                                placeholder="+57 300 123 4567"
                                input_type="tel"
                                hint="Format: +57 followed by the mobile number"
                            />
                            <FormField
                                form
                                field=Field::Message
                                label="Message *"
                                placeholder="Tell me about your project or question..."
                                error_slot=ErrorSlot::Message
                                hint="At least 10 characters"
                                multiline=true
                            />
                            <button
                                type="submit"
                                class="w-full rounded-md bg-primary text-primary-foreground py-2 disabled:opacity-50"
                                disabled=submitting
                            >
                                {move || {
                                    if submitting() { "Sending message..." } else { "Send message" }
                                }}
                            </button>
                        </form>
                    </div>
                    <div class="mt-8 flex flex-col space-y-4">
                        <a href=PROFILE.mailto() class="hover:text-primary">
                            "✉ "
                            {PROFILE.email}
                        </a>
                        <a href=PROFILE.tel() class="hover:text-primary">
                            "☎ "
                            {PROFILE.phone}
                        </a>
                        <span>"⌂ " {PROFILE.location}</span>
                    </div>
                </div>
            </div>
            <Toast notice />
        </section>
    }
}
