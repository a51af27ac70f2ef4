use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaDiscord;
use dioxus_free_icons::Icon;

#[component]
pub fn DiscordLogin() -> Element {
    rsx!(
        a { href: "/api/auth/login",
            button { class: "btn btn-primary w-56 flex gap-2",
                Icon {
                    width: 24,
                    height: 24,
                    icon: FaDiscord
                }
                p {
                    "Sign in with Discord"
                }
            }
        }
    )
}
