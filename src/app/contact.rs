use leptos::{html, prelude::*};

use crate::{
    contact::{ContactOutcome, MAX_MESSAGE_LEN, MAX_SENDER_EMAIL_LEN},
    data::OWNER_EMAIL,
    section::SectionName,
};

use super::{
    section::{use_section_in_view, DEFAULT_THRESHOLD},
    toast::ToastContext,
    SectionHeading,
};

const SENT_MESSAGE: &str = "🤗 You have sent email Successfully!";

/// Forwards a contact form submission to the site owner by email.
///
/// Validation and provider failures come back as [`ContactOutcome::Failure`];
/// an `Err` only means the mail service was never set up on the server.
#[server]
pub async fn send_email(
    sender_email: String,
    message: String,
) -> Result<ContactOutcome, ServerFnError> {
    use std::sync::Arc;

    use crate::{contact::send_contact_message, mailer::ResendMailer};

    let mailer = use_context::<Arc<ResendMailer>>()
        .ok_or_else(|| ServerFnError::new("Email service unavailable"))?;

    Ok(send_contact_message(
        mailer.as_ref(),
        mailer.config(),
        Some(&sender_email),
        Some(&message),
    )
    .await)
}

#[component]
pub fn Contact() -> impl IntoView {
    let node = use_section_in_view(SectionName::Contact, DEFAULT_THRESHOLD);
    let toasts = expect_context::<ToastContext>();
    let send = ServerAction::<SendEmail>::new();
    let pending = send.pending();

    let form_ref = NodeRef::<html::Form>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    Effect::watch(
        move || send.version().get(),
        move |_, _, _| match send.value().get_untracked() {
            Some(Ok(ContactOutcome::Success { .. })) => {
                toasts.success(SENT_MESSAGE);
                if let Some(form) = form_ref.get_untracked() {
                    form.reset();
                }
            }
            Some(Ok(ContactOutcome::Failure { error })) => toasts.error(error),
            Some(Err(err)) => {
                log::error!("send_email failed: {err}");
                toasts.error("Something went wrong, please try again later.");
            }
            None => {}
        },
        false,
    );

    view! {
        <section
            node_ref=node
            id="contact"
            class="mb-20 sm:mb-28 w-[min(100%,38rem)] text-center animate-fade-in"
        >
            <SectionHeading>"Contact me"</SectionHeading>
            <p class="text-gray-700 -mt-6 dark:text-white/80">
                "Please contact me directly at "
                <a class="underline" href=format!("mailto:{OWNER_EMAIL}")>
                    {OWNER_EMAIL}
                </a>
                " or through this form."
            </p>

            <form
                node_ref=form_ref
                class="mt-10 flex flex-col dark:text-black"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let (Some(email), Some(message)) = (
                        email_ref.get_untracked(),
                        message_ref.get_untracked(),
                    ) else {
                        return;
                    };
                    send.dispatch(SendEmail {
                        sender_email: email.value(),
                        message: message.value(),
                    });
                }
            >
                <input
                    node_ref=email_ref
                    class="h-14 shadow-sm px-4 rounded-lg borderBlack dark:bg-white dark:bg-opacity-80 dark:focus:bg-opacity-100 transition-all dark:outline-none"
                    name="senderEmail"
                    type="email"
                    required
                    maxlength=MAX_SENDER_EMAIL_LEN.to_string()
                    placeholder="Your email @gmail.com"
                />
                <textarea
                    node_ref=message_ref
                    class="h-52 shadow-md my-3 rounded-lg borderBlack p-4 dark:bg-white dark:bg-opacity-80 dark:focus:bg-opacity-100 transition-all dark:outline-none"
                    name="message"
                    placeholder="Your message"
                    required
                    maxlength=MAX_MESSAGE_LEN.to_string()
                ></textarea>
                <button
                    type="submit"
                    data-particle-target=""
                    class="group flex items-center justify-center gap-2 h-[3rem] w-[8rem] bg-gray-900 text-white rounded-full outline-none transition-all focus:scale-110 hover:scale-110 hover:bg-gray-950 active:scale-105 dark:bg-white dark:bg-opacity-10 disabled:scale-100 disabled:bg-opacity-65"
                    disabled=move || pending.get()
                >
                    {move || {
                        if pending.get() {
                            view! {
                                <div class="h-5 w-5 animate-spin rounded-full border-b-2 border-white"></div>
                            }
                                .into_any()
                        } else {
                            view! {
                                "Submit "
                                <span class="text-xs opacity-70 transition-all group-hover:translate-x-1 group-hover:-translate-y-1">
                                    "➤"
                                </span>
                            }
                                .into_any()
                        }
                    }}
                </button>
            </form>
        </section>
    }
}
