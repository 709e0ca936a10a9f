use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod hooks;
pub mod logs;
mod pages;
pub mod verification;

use pages::{LoginPage, NotFoundPage, RegisterPage, VerifyEmailPage};

/// API base used when the build sets no `API_BASE_URL`.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

// Global API client - configurable at build time, local backend fallback
pub fn get_api_client() -> APIClient {
    APIClient {
        address: api_base(option_env!("API_BASE_URL")),
        inner_client: reqwest::Client::new(),
    }
}

fn api_base(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .to_string()
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white dark:bg-gray-900 \
                        text-gray-900 dark:text-gray-100 transition-colors">
                <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/verify-email/:token")]
    VerifyEmail { token: String },
    // A verification link with the token stripped off
    #[at("/verify-email")]
    VerifyEmailMissing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::Login} /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::VerifyEmail { token } => {
            html! { <VerifyEmailPage token={Some(token)} /> }
        }
        Route::VerifyEmailMissing => html! { <VerifyEmailPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
