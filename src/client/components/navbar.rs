use dioxus::prelude::*;

use crate::client::{
    components::{DiscordLogin, RosterTitleButton},
    router::Route,
    state::UserState,
};

#[component]
pub fn Navbar() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let state = user_state.read();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                RosterTitleButton {}
            }
            div {
                class: "navbar-end",
                if let Some(user) = &state.user {
                    div { class: "flex items-center gap-2",
                        Link {
                            to: Route::Dashboard {},
                            class: "btn btn-ghost",
                            "{user.username}"
                        }
                        a { href: "/api/auth/logout",
                            button {
                                class: "btn btn-outline",
                                "Logout"
                            }
                        }
                    }
                } else if state.fetched {
                    DiscordLogin {}
                }
            }
        }

        Outlet::<Route> {}
    }
}
