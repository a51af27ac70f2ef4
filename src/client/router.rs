use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Alliance, Dashboard, Home, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/dashboard")]
    Dashboard {},

    #[route("/:slug")]
    Alliance { slug: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
