use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

/// Registration entry point linked from a failed verification. The sign-up
/// form itself is served by the host application.
#[function_component]
pub fn RegisterPage() -> Html {
    use_title("Create Account");

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 \
                        rounded-lg shadow-md text-center">
                <h1 class="text-2xl font-bold text-neutral-900 \
                           dark:text-neutral-100 mb-2">
                    {"Create your account"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400 mb-6">
                    {"A new verification email is sent after sign-up"}
                </p>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login}
                                 classes="font-medium underline">
                        {"Sign in"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
