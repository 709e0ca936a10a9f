use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Not Found");

    html! {
        <div class="text-center">
            <h1 class="text-4xl font-bold text-gray-900 dark:text-white">
                {"404"}
            </h1>
            <p class="text-gray-600 dark:text-gray-300 mb-4">
                {"Page not found"}
            </p>
            <Link<Route> to={Route::Login} classes="underline">
                {"Back to sign in"}
            </Link<Route>>
        </div>
    }
}
