use leptos::{ev::SubmitEvent, html, prelude::*};

use crate::{
    contact::{ContactError, ContactSubmission, FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME},
    content::{Icon, Profile},
    section::SectionId,
};

use super::components::{IconGlyph, RevealOnScroll, SectionHeading};

const INPUT_CLASS: &str = "w-full bg-slate-900 border border-slate-700 rounded-lg px-4 py-3 text-white focus:outline-none focus:border-cyan-500 focus:ring-2 focus:ring-cyan-500/20 transition-all placeholder-slate-600";

#[component]
pub fn Contact(profile: Profile) -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (error, set_error) = signal(None::<ContactError>);

    // The browser posts the form to the relay itself; this only stops
    // submissions its required/type="email" constraints would block.
    let on_submit = move |ev: SubmitEvent| {
        let submission = ContactSubmission {
            name: name_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
            email: email_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
            message: message_ref
                .get_untracked()
                .map(|el| el.value())
                .unwrap_or_default(),
        };
        match submission.validate() {
            Ok(()) => {
                log::info!("Sending contact form to relay");
                set_error.set(None);
            }
            Err(e) => {
                ev.prevent_default();
                log::debug!("Contact form rejected: {e}");
                set_error.set(Some(e));
            }
        }
    };

    let mailto = format!("mailto:{}", profile.email);

    view! {
        <section id=SectionId::Contact.as_str() class="py-20 scroll-mt-20 mb-20">
            <SectionHeading icon=Icon::Mail title="Me Contacter" />
            <RevealOnScroll delay=200>
                <div class="bg-slate-800 p-8 rounded-2xl border border-slate-700 shadow-2xl relative overflow-hidden group hover:border-cyan-500/50 transition-colors">
                    <div class="absolute top-0 right-0 w-64 h-64 bg-cyan-500/5 rounded-full blur-3xl pointer-events-none group-hover:bg-cyan-500/10 transition-colors"></div>
                    <p class="text-slate-400 mb-8 text-center text-lg">
                        "N'hésitez pas à me contacter pour un projet, une opportunité ou simplement pour échanger !"
                    </p>
                    <form
                        action=profile.relay_endpoint
                        method="post"
                        on:submit=on_submit
                        class="space-y-6 max-w-2xl mx-auto relative z-10"
                    >
                        <div class="grid md:grid-cols-2 gap-6">
                            <div>
                                <label for=FIELD_NAME class="block text-sm font-medium text-slate-300 mb-2">
                                    "Nom"
                                </label>
                                <input
                                    node_ref=name_ref
                                    type="text"
                                    id=FIELD_NAME
                                    name=FIELD_NAME
                                    required
                                    class=INPUT_CLASS
                                    placeholder="Votre nom"
                                />
                            </div>
                            <div>
                                <label for=FIELD_EMAIL class="block text-sm font-medium text-slate-300 mb-2">
                                    "Email"
                                </label>
                                <input
                                    node_ref=email_ref
                                    type="email"
                                    id=FIELD_EMAIL
                                    name=FIELD_EMAIL
                                    required
                                    class=INPUT_CLASS
                                    placeholder="votre@email.com"
                                />
                            </div>
                        </div>
                        <div>
                            <label for=FIELD_MESSAGE class="block text-sm font-medium text-slate-300 mb-2">
                                "Message"
                            </label>
                            <textarea
                                node_ref=message_ref
                                id=FIELD_MESSAGE
                                name=FIELD_MESSAGE
                                rows="5"
                                required
                                class=format!("{INPUT_CLASS} resize-none")
                                placeholder="Votre message..."
                            ></textarea>
                        </div>
                        {move || {
                            error
                                .get()
                                .map(|e| {
                                    view! {
                                        <p role="alert" class="text-sm text-red-400">
                                            {e.to_string()}
                                        </p>
                                    }
                                })
                        }}
                        <button
                            type="submit"
                            class="w-full bg-gradient-to-r from-cyan-600 to-blue-600 hover:from-cyan-500 hover:to-blue-500 text-white font-bold py-4 rounded-lg transition-all transform hover:scale-[1.02] active:scale-95 flex items-center justify-center gap-2 shadow-lg hover:shadow-cyan-500/30"
                        >
                            <IconGlyph icon=Icon::Send class="text-xl" />
                            "Envoyer le message"
                        </button>
                    </form>
                    <div class="mt-12 flex justify-center gap-8 pt-8 border-t border-slate-700">
                        <SocialLink href=mailto icon=Icon::Mail label="Email" external=false />
                        <SocialLink href=profile.linkedin icon=Icon::Linkedin label="LinkedIn" />
                        <SocialLink href=profile.github icon=Icon::Github label="GitHub" />
                    </div>
                </div>
            </RevealOnScroll>
        </section>
    }
}

#[component]
fn SocialLink(
    href: String,
    icon: Icon,
    label: &'static str,
    #[prop(default = true)] external: bool,
) -> impl IntoView {
    view! {
        <a
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            class="flex flex-col items-center gap-2 text-slate-400 hover:text-cyan-400 transition-colors group"
        >
            <div class="p-4 bg-slate-900 rounded-full border border-slate-700 group-hover:border-cyan-400 group-hover:bg-cyan-900/20 transition-all transform group-hover:-translate-y-2">
                <IconGlyph icon class="text-2xl" />
            </div>
            <span class="text-sm font-medium">{label}</span>
        </a>
    }
}
