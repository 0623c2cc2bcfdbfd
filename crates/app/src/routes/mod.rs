pub mod home;
pub mod not_found;

use dioxus::prelude::*;

use home::PredictPage;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    PredictPage {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
