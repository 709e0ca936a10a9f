use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::{use_email_verification, use_title};
use crate::verification::{REDIRECT_DELAY, VerificationStatus};

/// Reasons a verification link can fail, shown alongside the error.
const FAILURE_CAUSES: &[&str] = &[
    "The verification link has expired",
    "The link has already been used",
    "The link was copied incorrectly",
];

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Token from the route; `None` when the link had no token segment.
    #[prop_or_default]
    pub token: Option<String>,
}

#[function_component]
pub fn VerifyEmailPage(props: &Props) -> Html {
    use_title("Verify Email");
    let status = use_email_verification(props.token.clone());

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 \
                        rounded-lg shadow-md">
                <div class="mb-8 text-center">
                    <h1 class="text-2xl font-bold text-neutral-900 \
                               dark:text-neutral-100 mb-2">
                        {"Email Verification"}
                    </h1>
                </div>

                {status_view(&status)}
            </div>
        </div>
    }
}

fn status_view(status: &VerificationStatus) -> Html {
    match status {
        VerificationStatus::Verifying => verifying_view(),
        VerificationStatus::Success { message } => success_view(message),
        VerificationStatus::Error { message } => error_view(message),
    }
}

fn verifying_view() -> Html {
    html! {
        <div class="text-center py-8" role="status">
            <div class="animate-spin rounded-full h-12 w-12 \
                        border-b-2 border-neutral-600 \
                        dark:border-neutral-400 mx-auto mb-4">
            </div>
            <p class="text-neutral-600 dark:text-neutral-400">
                {"Verifying your email..."}
            </p>
        </div>
    }
}

fn success_view(message: &str) -> Html {
    html! {
        <div class="text-center py-8">
            <div class="mb-4">
                <svg class="mx-auto h-12 w-12 text-green-600 \
                            dark:text-green-400"
                     fill="none"
                     stroke="currentColor"
                     viewBox="0 0 24 24">
                    <path stroke-linecap="round"
                          stroke-linejoin="round"
                          stroke-width="2"
                          d="M5 13l4 4L19 7" />
                </svg>
            </div>
            <p class="text-neutral-900 dark:text-neutral-100 \
                      font-medium mb-2">
                {message}
            </p>
            <p class="text-sm text-neutral-600 dark:text-neutral-400 mb-6">
                {redirect_notice()}
            </p>
            <Link<Route> to={Route::Login} classes={primary_button()}>
                {"Go to Login"}
            </Link<Route>>
        </div>
    }
}

fn error_view(message: &str) -> Html {
    html! {
        <>
            <div class="text-center mb-4">
                <svg class="mx-auto h-12 w-12 text-red-600 \
                            dark:text-red-400"
                     fill="none"
                     stroke="currentColor"
                     viewBox="0 0 24 24">
                    <path stroke-linecap="round"
                          stroke-linejoin="round"
                          stroke-width="2"
                          d="M6 18L18 6M6 6l12 12" />
                </svg>
            </div>
            <div class="mb-6 p-4 rounded-md bg-red-50 \
                        dark:bg-red-900 border border-red-200 \
                        dark:border-red-800"
                 role="alert">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {message}
                </p>
            </div>
            <div class="mb-6 text-sm text-neutral-600 dark:text-neutral-400">
                <p class="mb-2">{"This can happen when:"}</p>
                <ul class="list-disc list-inside space-y-1">
                    {for FAILURE_CAUSES.iter().map(|cause| html! {
                        <li>{*cause}</li>
                    })}
                </ul>
            </div>
            <div class="space-y-3">
                <Link<Route> to={Route::Login} classes={primary_button()}>
                    {"Go to Login"}
                </Link<Route>>
                <Link<Route> to={Route::Register} classes={secondary_button()}>
                    {"Create a new account"}
                </Link<Route>>
            </div>
        </>
    }
}

fn redirect_notice() -> String {
    format!(
        "Redirecting to login in {} seconds...",
        REDIRECT_DELAY.as_secs()
    )
}

fn primary_button() -> Classes {
    classes!(
        "w-full",
        "flex",
        "justify-center",
        "py-2",
        "px-4",
        "rounded-md",
        "shadow-sm",
        "text-sm",
        "font-medium",
        "text-white",
        "bg-neutral-900",
        "hover:bg-neutral-800",
        "dark:bg-neutral-100",
        "dark:text-neutral-900",
        "dark:hover:bg-neutral-200",
        "transition-colors",
        "duration-200"
    )
}

fn secondary_button() -> Classes {
    classes!(
        "w-full",
        "flex",
        "justify-center",
        "py-2",
        "px-4",
        "rounded-md",
        "border",
        "border-neutral-300",
        "dark:border-neutral-600",
        "text-sm",
        "font-medium",
        "text-neutral-700",
        "dark:text-neutral-300",
        "hover:bg-neutral-50",
        "dark:hover:bg-neutral-700",
        "transition-colors",
        "duration-200"
    )
}

#[cfg(test)]
mod tests {
    use tokio::task::LocalSet;
    use yew::LocalServerRenderer;
    use yew::prelude::*;
    use yew_router::Router;
    use yew_router::history::{AnyHistory, MemoryHistory};

    use super::{FAILURE_CAUSES, redirect_notice, status_view};
    use crate::verification::VerificationStatus;

    #[derive(Properties, PartialEq)]
    struct FixtureProps {
        status: VerificationStatus,
    }

    /// Links need a router in context to resolve their targets.
    #[function_component]
    fn Fixture(props: &FixtureProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        html! {
            <Router {history}>
                {status_view(&props.status)}
            </Router>
        }
    }

    async fn render(status: VerificationStatus) -> String {
        let renderer = LocalServerRenderer::<Fixture>::with_props(
            FixtureProps { status },
        )
        .hydratable(false);
        LocalSet::new().run_until(renderer.render()).await
    }

    #[test]
    fn test_redirect_notice_matches_delay() {
        assert_eq!(redirect_notice(), "Redirecting to login in 3 seconds...");
    }

    #[tokio::test]
    async fn test_render_verifying() {
        let html = render(VerificationStatus::Verifying).await;

        assert!(html.contains("Verifying your email..."));
        assert!(html.contains(r#"role="status""#));
        assert!(!html.contains("<a"), "No navigation while verifying");
    }

    #[tokio::test]
    async fn test_render_success() {
        let html = render(VerificationStatus::Success {
            message: "Welcome aboard".to_string(),
        })
        .await;

        assert!(html.contains("Welcome aboard"));
        assert!(html.contains("Redirecting to login in 3 seconds..."));
        assert!(html.contains(r#"href="/login""#));
        assert!(html.contains("Go to Login"));
        assert!(!html.contains(r#"href="/register""#));
        assert!(!html.contains(r#"role="alert""#));
    }

    #[tokio::test]
    async fn test_render_error() {
        let html = render(VerificationStatus::Error {
            message: "Token expired".to_string(),
        })
        .await;

        assert!(html.contains("Token expired"));
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("This can happen when:"));
        for cause in FAILURE_CAUSES {
            assert!(html.contains(cause), "Missing cause: {cause}");
        }
        assert!(html.contains(r#"href="/login""#));
        assert!(html.contains(r#"href="/register""#));
        assert!(html.contains("Create a new account"));
        assert!(!html.contains("Redirecting to login"));
    }
}
