//! Pokemon route handlers

use dioxus::prelude::*;

use super::Route;
use crate::ui::presentation::views::{AddPokemonView, PokemonListView, UpdatePokemonView};
use crate::ui::use_platform;

const APP_TITLE: &str = "Pokedex Admin";

fn page_title(page: &str) -> String {
    format!("{page} | {APP_TITLE}")
}

/// List route
#[component]
pub fn PokemonListRoute() -> Element {
    let platform = use_platform();

    use_effect(move || {
        platform.set_page_title(&page_title("Pokemon List"));
    });

    rsx! {
        PokemonListView {}
    }
}

/// Create route
#[component]
pub fn AddPokemonRoute() -> Element {
    let platform = use_platform();

    use_effect(move || {
        platform.set_page_title(&page_title("Add Pokemon"));
    });

    rsx! {
        AddPokemonView {}
    }
}

/// Edit route
#[component]
pub fn UpdatePokemonRoute(id: String) -> Element {
    let platform = use_platform();

    use_effect(move || {
        platform.set_page_title(&page_title("Update Pokemon"));
    });

    rsx! {
        UpdatePokemonView { id }
    }
}

/// Unknown paths fall back to the list
#[component]
pub fn NotFoundRoute(segments: Vec<String>) -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        tracing::debug!("Unknown route /{}, redirecting", segments.join("/"));
        navigator.replace(Route::PokemonListRoute {});
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_parse_from_paths() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::PokemonListRoute {}));
        assert_eq!(
            "/add-pokemon".parse::<Route>().ok(),
            Some(Route::AddPokemonRoute {})
        );
        assert_eq!(
            "/update-pokemon/66b0c1".parse::<Route>().ok(),
            Some(Route::UpdatePokemonRoute {
                id: "66b0c1".to_string()
            })
        );
    }

    #[test]
    fn routes_render_to_paths() {
        let route = Route::UpdatePokemonRoute {
            id: "66b0c1".to_string(),
        };
        assert_eq!(route.to_string(), "/update-pokemon/66b0c1");
        assert_eq!(Route::AddPokemonRoute {}.to_string(), "/add-pokemon");
    }

    #[test]
    fn unknown_path_is_caught() {
        assert!(matches!(
            "/no/such/page".parse::<Route>(),
            Ok(Route::NotFoundRoute { .. })
        ));
    }

    #[test]
    fn titles_carry_app_name() {
        assert_eq!(page_title("Add Pokemon"), "Add Pokemon | Pokedex Admin");
    }
}
