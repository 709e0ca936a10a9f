use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

/// Landing spot for the post-verification redirect. The sign-in form itself
/// is served by the host application.
#[function_component]
pub fn LoginPage() -> Html {
    use_title("Sign In");

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 \
                        rounded-lg shadow-md text-center">
                <h1 class="text-2xl font-bold text-neutral-900 \
                           dark:text-neutral-100 mb-2">
                    {"Sign in"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400 mb-6">
                    {"Enter your credentials to continue"}
                </p>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Register}
                                 classes="font-medium underline">
                        {"Create one"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
