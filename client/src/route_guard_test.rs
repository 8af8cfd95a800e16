use super::*;

// =============================================================
// Guard table: auth-gated paths x both states
// =============================================================

#[test]
fn login_renders_when_anonymous() {
    assert_eq!(resolve("/login", false), Decision::Render(View::Login));
}

#[test]
fn login_redirects_to_dashboard_when_authenticated() {
    assert_eq!(resolve("/login", true), Decision::Redirect("/dashboard"));
}

#[test]
fn dashboard_renders_when_authenticated() {
    assert_eq!(resolve("/dashboard", true), Decision::Render(View::Dashboard));
}

#[test]
fn dashboard_redirects_to_login_when_anonymous() {
    assert_eq!(resolve("/dashboard", false), Decision::Redirect("/login"));
}

#[test]
fn upgrade_renders_when_authenticated() {
    assert_eq!(resolve("/upgrade", true), Decision::Render(View::Upgrade));
}

#[test]
fn upgrade_redirects_to_login_when_anonymous() {
    assert_eq!(resolve("/upgrade", false), Decision::Redirect("/login"));
}

// =============================================================
// Callback routes ignore auth state
// =============================================================

#[test]
fn oauth_redirect_renders_in_both_states() {
    for authenticated in [false, true] {
        assert_eq!(resolve("/oauth2/redirect", authenticated), Decision::Render(View::OAuthRedirect));
    }
}

#[test]
fn payment_callback_renders_in_both_states() {
    for authenticated in [false, true] {
        assert_eq!(
            resolve("/payment/callback", authenticated),
            Decision::Render(View::PaymentCallback)
        );
    }
}

// =============================================================
// Root and fallback
// =============================================================

#[test]
fn root_redirects_by_auth_state() {
    assert_eq!(resolve("/", true), Decision::Redirect("/dashboard"));
    assert_eq!(resolve("/", false), Decision::Redirect("/login"));
    assert_eq!(resolve("", false), Decision::Redirect("/login"));
}

#[test]
fn unknown_paths_render_not_found() {
    assert_eq!(resolve("/settings", true), Decision::Render(View::NotFound));
    assert_eq!(resolve("/oauth2", false), Decision::Render(View::NotFound));
    assert_eq!(resolve("/dashboard/extra", true), Decision::Render(View::NotFound));
}

#[test]
fn trailing_slash_and_query_are_ignored() {
    assert_eq!(resolve("/dashboard/", false), Decision::Redirect("/login"));
    assert_eq!(
        resolve("/payment/callback?status=success&orderId=o1", false),
        Decision::Render(View::PaymentCallback)
    );
    assert_eq!(resolve("/login#top", true), Decision::Redirect("/dashboard"));
}

// =============================================================
// Auth dependence
// =============================================================

#[test]
fn only_gated_paths_depend_on_auth() {
    for path in ["/", "/login", "/dashboard", "/upgrade/"] {
        assert!(depends_on_auth(path), "{path}");
    }
    for path in ["/oauth2/redirect", "/payment/callback", "/nope"] {
        assert!(!depends_on_auth(path), "{path}");
    }
}
