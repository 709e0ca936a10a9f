use yew::prelude::*;

use crate::Route;
use crate::hooks::use_push_route;
use crate::verification::{
    BrowserTimer, VerificationStatus, cancellable, run_verification,
};

/// Verifies the given token once per mount and per distinct token, and
/// redirects to login a few seconds after a successful verification.
///
/// Changing the token or unmounting aborts the attempt in flight, including
/// a pending redirect.
#[hook]
pub fn use_email_verification(token: Option<String>) -> VerificationStatus {
    let status = use_state_eq(VerificationStatus::default);
    let push_route = use_push_route();

    {
        let status = status.clone();

        use_effect_with(token, move |token| {
            let token = token.clone();

            let (task, handle) = cancellable(async move {
                let api_client = crate::get_api_client();
                run_verification(
                    &api_client,
                    &BrowserTimer,
                    token.as_deref(),
                    |next| status.set(next),
                    move || push_route.emit(Route::Login),
                )
                .await;
            });
            yew::platform::spawn_local(task);

            // Cleanup: runs when the token changes or the page unmounts
            move || handle.abort()
        });
    }

    (*status).clone()
}
