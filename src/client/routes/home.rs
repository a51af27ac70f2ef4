use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::{DiscordLogin, Page},
    router::Route,
    state::UserState,
};

#[component]
pub fn LoginButton() -> Element {
    let user_state = use_context::<Signal<UserState>>();

    rsx!(
        ul { class: "flex gap-2",
            if user_state.read().user.is_some() {
                li {
                    Link {
                        to: Route::Dashboard {},
                        class: "btn btn-primary w-32",
                        "Dashboard"
                    }
                }
                li {
                    a { href: "/api/docs",
                        button {
                            class: "btn btn-secondary w-32",
                            "API Docs"
                        }
                    }
                }
            } else if user_state.read().fetched {
                li {
                    DiscordLogin {}
                }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Roster" }
        Meta {
            name: "description",
            content: "Alliance rosters for Politics & War, kept in sync from the game API."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                div { class: "flex items-center gap-2",
                    p { class: "text-2xl",
                        "Roster"
                    }
                    p {
                        "v0.1.0-Alpha.1"
                    }
                }
                div {
                    LoginButton {}
                }
                div { class: "flex flex-col gap-2 px-4 max-w-256",
                    p {
                        "Sign in with Discord, then link your Politics & War API key on the dashboard. Once your nation is verified you can open your alliance's page and sync its member list straight from the game."
                    }
                }
            }
        }
    )
}
