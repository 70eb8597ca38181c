//! Shared login view: character name plus birth year as the password.

use dioxus::prelude::*;

use crate::Icon;
use crate::icons::{FaArrowRight, FaLock, FaSpinner, FaUser};
use crate::{use_catalog, use_session};

/// Login form.
///
/// On success the session is signed in and `on_signed_in` fires; the
/// platform package decides where to navigate. Both fields are required by
/// the browser only; whatever is typed is sent as-is.
#[component]
pub fn LoginView(on_signed_in: EventHandler<()>) -> Element {
    let mut session = use_session();
    let catalog = use_catalog();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = catalog.client.clone();
        spawn(async move {
            loading.set(true);
            error.set(None);

            let name = username();
            let birth_year = password();
            let result = store::auth::verify_credentials(&client, &name, &birth_year).await;
            loading.set(false);

            match result {
                Ok(user) => {
                    session.write().login(user);
                    on_signed_in.call(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-[#0B0B0F] relative overflow-hidden",

            div { class: "absolute inset-0 bg-stars animate-twinkle" }

            div {
                class: "max-w-md w-full space-y-8 p-10 bg-black/40 backdrop-blur-xl rounded-2xl border border-yellow-500/20 relative z-10 shadow-xl shadow-yellow-500/5",

                div {
                    class: "text-center",
                    h1 {
                        class: "text-5xl font-starwars text-yellow-400 mb-2 tracking-wider animate-glow",
                        "STAR WARS"
                    }
                    h2 {
                        class: "text-xl text-gray-400 tracking-[0.2em] font-thin",
                        "AUTHENTICATION PORTAL"
                    }
                }

                if let Some(err) = error() {
                    div {
                        class: "bg-red-900/50 border border-red-500/50 text-red-200 px-4 py-3 rounded-lg text-sm animate-shake",
                        "{err}"
                    }
                }

                form {
                    class: "mt-8 space-y-6",
                    onsubmit: handle_login,

                    div {
                        class: "space-y-4",
                        LoginField {
                            id: "username",
                            label: "USERNAME",
                            input_type: "text",
                            placeholder: "e.g. Luke Skywalker",
                            value: username(),
                            oninput: move |value| username.set(value),
                            Icon { icon: FaUser, width: 20, height: 20 }
                        }
                        LoginField {
                            id: "password",
                            label: "PASSWORD",
                            input_type: "password",
                            placeholder: "e.g. 19BBY",
                            value: password(),
                            oninput: move |value| password.set(value),
                            Icon { icon: FaLock, width: 20, height: 20 }
                        }
                    }

                    button {
                        class: "group relative w-full flex justify-center py-4 px-4 border border-yellow-500/30 text-sm font-medium rounded-lg text-black bg-gradient-to-r from-yellow-400 to-yellow-500 hover:from-yellow-500 hover:to-yellow-600 transition-all disabled:opacity-50 disabled:cursor-not-allowed shadow-lg shadow-yellow-500/20",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() {
                            span {
                                class: "flex items-center",
                                Icon { class: "animate-spin -ml-1 mr-3", icon: FaSpinner, width: 20, height: 20 }
                                "Authenticating..."
                            }
                        } else {
                            span {
                                class: "flex items-center group-hover:scale-105 transition-transform",
                                "SIGN IN"
                                Icon { class: "ml-2", icon: FaArrowRight, width: 20, height: 20 }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Labelled, required input with a trailing icon.
#[component]
fn LoginField(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: String,
    oninput: EventHandler<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "relative",
            label {
                r#for: id,
                class: "text-yellow-400/80 text-sm font-medium block mb-2 tracking-wider",
                "{label}"
            }
            input {
                id: id,
                r#type: input_type,
                required: true,
                class: "appearance-none relative block w-full px-4 py-3 border border-yellow-500/20 bg-black/50 text-yellow-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-yellow-500/50 focus:border-transparent placeholder-gray-500 transition-all",
                placeholder: placeholder,
                value: value,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            div {
                class: "absolute right-3 top-[38px] w-5 h-5 text-yellow-500/50",
                {children}
            }
        }
    }
}
