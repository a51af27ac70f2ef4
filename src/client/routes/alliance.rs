use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowsRotate;
use dioxus_free_icons::Icon;

use crate::{
    client::{components::Page, util::time::format_relative_time},
    model::alliance::{AllianceDto, AllianceMemberDto, AlliancePageDto, ViewerDto},
};

#[component]
pub fn Alliance(slug: String) -> Element {
    let mut page = use_signal(|| None::<Result<AlliancePageDto, String>>);
    // Bumped after a sync so the page is read again
    let reload = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    use_effect(use_reactive!(|(slug,)| {
        use crate::client::util::api::get_alliance;

        let _ = reload();
        spawn(async move {
            page.set(Some(get_alliance(&slug).await));
        });
    }));

    #[cfg(not(feature = "web"))]
    let _ = (&mut page, &slug);

    let title = match &*page.read() {
        Some(Ok(data)) => format!("{} | Roster", data.alliance.name),
        _ => "Alliance | Roster".to_string(),
    };

    rsx!(
        Title { "{title}" }
        Meta {
            name: "description",
            content: "Alliance member roster from Politics & War."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                match &*page.read() {
                    Some(Ok(data)) => rsx!(
                        AllianceHeader {
                            alliance: data.alliance.clone(),
                            viewer: data.viewer.clone(),
                            reload: reload,
                        }
                        MemberTable { members: data.members.clone() }
                    ),
                    Some(Err(err)) => rsx!(
                        p { class: "text-error text-center", "{err}" }
                    ),
                    None => rsx!(
                        div { class: "skeleton h-32 w-full" }
                        div { class: "skeleton h-96 w-full" }
                    ),
                }
            }
        }
    )
}

#[component]
fn AllianceHeader(alliance: AllianceDto, viewer: ViewerDto, reload: Signal<u32>) -> Element {
    let score = alliance
        .score
        .map(|score| format!("{:.2}", score))
        .unwrap_or_else(|| "-".to_string());

    rsx!(
        div {
            class: "card shadow-sm w-full",
            div {
                class: "card-body flex flex-row flex-wrap justify-between gap-4",
                div { class: "flex flex-col gap-1",
                    h1 { class: "text-2xl font-bold",
                        "{alliance.name}"
                        if let Some(acronym) = &alliance.acronym {
                            span { class: "text-base font-normal ml-2", "[{acronym}]" }
                        }
                    }
                    p { "Score: {score}" }
                    p { "Members: {alliance.member_count}" }
                    if let Some(color) = &alliance.color {
                        p { "Color: {color}" }
                    }
                    p { class: "text-xs",
                        "Last updated {format_relative_time(&alliance.updated_at)}"
                    }
                }
                div { class: "flex flex-col items-end gap-2",
                    if viewer.is_member {
                        p {
                            "You are a member"
                            if let Some(position) = &viewer.position {
                                " ({position})"
                            }
                        }
                    }
                    if viewer.can_sync {
                        SyncButton { alliance_id: alliance.alliance_id, reload: reload }
                    }
                }
            }
        }
    )
}

#[component]
fn SyncButton(alliance_id: i64, reload: Signal<u32>) -> Element {
    let mut pending = use_signal(|| false);
    let mut status = use_signal(|| None::<Result<String, String>>);

    let sync = move |_| {
        pending.set(true);
        status.set(None);

        #[cfg(feature = "web")]
        {
            use crate::client::util::api::sync_alliance;

            let mut reload = reload;
            spawn(async move {
                match sync_alliance(alliance_id).await {
                    Ok(response) => {
                        let mut text = format!(
                            "Synced {} of {} members",
                            response.synced_members, response.total_members
                        );
                        if let Some(warning) = response.warning {
                            text = format!("{}. {}", text, warning);
                        }
                        status.set(Some(Ok(text)));
                        reload += 1;
                    }
                    Err(err) => status.set(Some(Err(err))),
                }
                pending.set(false);
            });
        }

        #[cfg(not(feature = "web"))]
        let _ = (alliance_id, reload);
    };

    rsx!(
        button {
            class: "btn btn-primary flex gap-2",
            disabled: pending(),
            onclick: sync,
            Icon {
                width: 20,
                height: 20,
                icon: FaArrowsRotate
            }
            p {
                if pending() { "Syncing..." } else { "Sync members" }
            }
        }
        match &*status.read() {
            Some(Ok(text)) => rsx!(p { class: "text-success text-sm", "{text}" }),
            Some(Err(text)) => rsx!(p { class: "text-error text-sm", "{text}" }),
            None => rsx!(),
        }
    )
}

#[component]
fn MemberTable(members: Vec<AllianceMemberDto>) -> Element {
    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-md",
                thead {
                    tr {
                        th { "Nation" }
                        th { "Leader" }
                        th { "Position" }
                        th { "Score" }
                        th { "Cities" }
                        th { "Soldiers" }
                        th { "Tanks" }
                        th { "Aircraft" }
                        th { "Ships" }
                        th { "Missiles" }
                        th { "Nukes" }
                        th { "War Policy" }
                        th { "Color" }
                        th { "Last Active" }
                    }
                }
                tbody {
                    {members.iter().map(|member| rsx! {
                        tr { key: "{member.nation_id}",
                            td {
                                a {
                                    href: format!("https://politicsandwar.com/nation/id={}", member.nation_id),
                                    class: "link",
                                    {member.nation_name.clone().unwrap_or_else(|| member.nation_id.to_string())}
                                }
                                if member.linked {
                                    span { class: "badge badge-sm badge-success ml-2", "linked" }
                                }
                            }
                            td { {text(&member.leader_name)} }
                            td { {text(&member.position)} }
                            td { {member.score.map(|score| format!("{:.2}", score)).unwrap_or_else(|| "-".to_string())} }
                            td { {number(member.cities)} }
                            td { {number(member.soldiers)} }
                            td { {number(member.tanks)} }
                            td { {number(member.aircraft)} }
                            td { {number(member.ships)} }
                            td { {number(member.missiles)} }
                            td { {number(member.nukes)} }
                            td { {text(&member.war_policy)} }
                            td { {text(&member.color)} }
                            td { {member.last_active.as_ref().map(format_relative_time).unwrap_or_else(|| "-".to_string())} }
                        }
                    })}
                }
            }
        }
    )
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn number(value: Option<i32>) -> String {
    value.map(|value| value.to_string()).unwrap_or_else(|| "-".to_string())
}
