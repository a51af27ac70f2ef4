use dioxus::prelude::*;

use crate::client::{router::Route, state::UserState};

#[component]
pub fn App() -> Element {
    let user_state = use_context_provider(|| Signal::new(UserState::default()));

    #[cfg(feature = "web")]
    {
        use dioxus_logger::tracing;

        use crate::client::util::api::get_user;

        let mut user_state = user_state;
        use_future(move || async move {
            let user = match get_user().await {
                Ok(user) => user,
                Err(err) => {
                    tracing::error!(err);
                    None
                }
            };

            user_state.set(UserState {
                user,
                fetched: true,
            });
        });
    }

    #[cfg(not(feature = "web"))]
    let _ = user_state;

    rsx! {
        Router::<Route> {}
    }
}
