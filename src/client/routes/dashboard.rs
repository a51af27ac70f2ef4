use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaLink;
use dioxus_free_icons::Icon;

use crate::client::{
    components::{DiscordLogin, Page},
    router::Route,
    state::UserState,
    util::time::format_relative_time,
};

#[component]
pub fn Dashboard() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let state = user_state.read();

    rsx!(
        Title { "Dashboard | Roster" }
        Meta {
            name: "description",
            content: "Link your Politics & War nation to your Roster account."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full h-full max-w-[1440px] p-6 flex flex-wrap justify-center gap-2",
                if state.user.is_some() {
                    AccountCard {}
                    ApiKeyCard {}
                } else if state.fetched {
                    div { class: "flex flex-col items-center gap-4",
                        p { "Sign in to manage your account." }
                        DiscordLogin {}
                    }
                }
            }
        }
    )
}

#[component]
fn AccountCard() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let state = user_state.read();
    let Some(user) = state.user.as_ref() else {
        return rsx!();
    };

    rsx!(
        div {
            class: "card shadow-sm w-full max-w-96",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Account"
                }
                div { class: "flex flex-col justify-center items-center p-2",
                    if let Some(avatar) = &user.avatar {
                        div { class: "avatar",
                            div {
                                class: "w-24 rounded-full",
                                img {
                                    src: "{avatar}",
                                    alt: "{user.username}",
                                }
                            }
                        }
                    }
                    p {
                        class: "text-lg font-semibold mt-2",
                        "{user.username}"
                    }
                }
                if let Some(nation) = &user.nation {
                    div { class: "flex flex-col gap-1",
                        p { "Nation: {nation.nation_name}" }
                        if let Some(leader_name) = &nation.leader_name {
                            p { "Leader: {leader_name}" }
                        }
                        if let Some(alliance) = &nation.alliance {
                            p {
                                "Alliance: {alliance.name}"
                                if let Some(position) = &alliance.position {
                                    " ({position})"
                                }
                            }
                            if let Some(slug) = &alliance.slug {
                                Link {
                                    to: Route::Alliance { slug: slug.clone() },
                                    class: "btn btn-primary mt-2",
                                    "Open alliance page"
                                }
                            }
                        } else {
                            p { "Not in an alliance" }
                        }
                        if let Some(last_sync) = &user.last_sync {
                            p { class: "text-xs",
                                "Verified {format_relative_time(last_sync)}"
                            }
                        }
                    }
                } else {
                    p { "No nation linked yet, add your API key to get started." }
                }
            }
        }
    )
}

#[component]
fn ApiKeyCard() -> Element {
    let mut api_key = use_signal(String::new);
    let mut pending = use_signal(|| false);
    let mut message = use_signal(|| None::<Result<String, String>>);
    let user_state = use_context::<Signal<UserState>>();

    let submit = move |event: FormEvent| {
        event.prevent_default();
        let key = api_key.read().trim().to_string();
        if key.is_empty() {
            message.set(Some(Err("API key is required".to_string())));
            return;
        }

        pending.set(true);

        #[cfg(feature = "web")]
        {
            use crate::client::util::api::{get_user, link_api_key};

            let mut user_state = user_state;
            spawn(async move {
                match link_api_key(key).await {
                    Ok(response) => {
                        let alliance = response
                            .alliance_name
                            .map(|name| format!(" in {}", name))
                            .unwrap_or_default();
                        message.set(Some(Ok(format!(
                            "Linked {}{}",
                            response.nation_name, alliance
                        ))));
                        api_key.set(String::new());

                        if let Ok(user) = get_user().await {
                            user_state.set(UserState {
                                user,
                                fetched: true,
                            });
                        }
                    }
                    Err(err) => message.set(Some(Err(err))),
                }
                pending.set(false);
            });
        }

        #[cfg(not(feature = "web"))]
        let _ = (key, user_state);
    };

    rsx!(
        div {
            class: "card shadow-sm w-full max-w-96",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Politics & War API Key"
                }
                p { class: "text-sm",
                    "Find your key under Account > API Key in Politics & War. It is only used to read your nation and alliance."
                }
                form { class: "flex flex-col gap-2",
                    onsubmit: submit,
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        placeholder: "API key",
                        value: "{api_key}",
                        oninput: move |event| api_key.set(event.value()),
                    }
                    button {
                        class: "btn btn-outline flex gap-2",
                        r#type: "submit",
                        disabled: pending(),
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaLink
                        }
                        p { "Verify & Link" }
                    }
                }
                match &*message.read() {
                    Some(Ok(text)) => rsx!(p { class: "text-success", "{text}" }),
                    Some(Err(text)) => rsx!(p { class: "text-error", "{text}" }),
                    None => rsx!(),
                }
            }
        }
    )
}
