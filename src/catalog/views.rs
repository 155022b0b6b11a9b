//! Built-in view declarations for the target application
//!
//! Mirrors the target site's URL layout: four anonymous views, the
//! authenticated feed/opinion/comment/profile views (each list view also has
//! a `-val-test` variant exercising the markup-validator URL prefix), and
//! the moderator review views.

use super::{Catalog, ViewDescriptor, ViewGroup};
use crate::CatalogError;

/// Fixed login endpoint, relative to the base URL
pub const LOGIN_PATH: &str = "/accounts/login/";

/// Fixed logout endpoint, relative to the base URL
pub const LOGOUT_PATH: &str = "/accounts/logout/";

fn view(name: &str, requires_auth: bool, template: &str, desc: &str) -> ViewDescriptor {
    ViewDescriptor::new(name, requires_auth, template, desc)
}

/// Builds the full built-in catalog
///
/// Fallible only because catalog construction validates; the built-in
/// declarations are expected to always pass.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    let pre_login = ViewGroup::new(
        "pre-login",
        false,
        vec![
            view("landing", false, "/", "landing view"),
            view("login", false, LOGIN_PATH, "login view"),
            view("signup", false, "/accounts/signup/", "signup view"),
            view(
                "social-login",
                false,
                "/accounts/google/login/",
                "social account login view",
            ),
        ],
    );

    let post_login = ViewGroup::new(
        "post-login",
        true,
        vec![
            view(
                "following",
                true,
                "/feed/following/",
                "following authors opinion feed",
            ),
            view(
                "following-val-test",
                true,
                "/feed/val-test/following/",
                "following authors opinion feed (validater path)",
            ),
            view(
                "category",
                true,
                "/feed/category/",
                "following categories opinion feed",
            ),
            view(
                "category-val-test",
                true,
                "/feed/val-test/category/",
                "following categories opinion feed (validater path)",
            ),
            view(
                "opinion-new",
                true,
                "/opinions/new/",
                "create new opinion view",
            ),
            view(
                "opinion-new-val-test",
                true,
                "/opinions/val-test/new/",
                "create new opinion view (validater path)",
            ),
            view(
                "opinion-read",
                true,
                "/opinions/<opinion_id>/?mode=read-only",
                "opinion read view",
            ),
            view(
                "opinion-read-val-test",
                true,
                "/opinions/val-test/<opinion_id>/?mode=read-only",
                "opinion read view (validater path)",
            ),
            view(
                "opinion-edit",
                true,
                "/opinions/<opinion_id>/?mode=edit",
                "edit opinion view",
            ),
            view(
                "opinion-edit-val-test",
                true,
                "/opinions/val-test/<opinion_id>/?mode=edit",
                "edit opinion view (validater path)",
            ),
            view(
                "opinion-draft",
                true,
                "/opinions/<opinion_id>/?mode=read-only",
                "draft opinion readonly view",
            ),
            view(
                "opinion-preview",
                true,
                "/opinions/<opinion_id>/?mode=read-only",
                "preview opinion readonly view",
            ),
            view(
                "opinions-list-draft",
                true,
                "/opinions/?author=<username>&status=draft",
                "all user's draft opinions view",
            ),
            view(
                "opinions-list-preview",
                true,
                "/opinions/?author=<username>&status=preview",
                "all user's preview opinions view",
            ),
            view(
                "opinions-list-review",
                true,
                "/opinions/in_review/?author=<username>",
                "all user's in review opinions view",
            ),
            view(
                "opinions-mine",
                true,
                "/opinions/?author=<username>&status=all",
                "all user's opinions view",
            ),
            view(
                "opinions-pinned",
                true,
                "/opinions/?pinned=yes",
                "all user's pinned opinions view",
            ),
            view(
                "opinions-follow-new",
                true,
                "/opinions/followed/?filter=new",
                "all user's following authors new opinions since last login view",
            ),
            view(
                "opinions-follow-all",
                true,
                "/opinions/followed/?filter=all",
                "all user's following authors opinions login view",
            ),
            view("opinions-all", true, "/opinions/", "all published opinions view"),
            view(
                "opinions-all-val-test",
                true,
                "/opinions/val-test/",
                "all published opinions view (validater path)",
            ),
            view(
                "comments-review",
                true,
                "/opinions/comments/in_review/?author=<username>",
                "all user's in review comments view",
            ),
            view(
                "comments-mine",
                true,
                "/opinions/comments/?author=<username>&status=all",
                "all user's comments view",
            ),
            view("comments-all", true, "/opinions/comments/", "all comments view"),
            view(
                "comments-all-val-test",
                true,
                "/opinions/val-test/comments/",
                "all comments view (validater path)",
            ),
            view(
                "user-profile",
                true,
                "/users/<username>/",
                "user's profile view",
            ),
            view(
                "user-profile-val-test",
                true,
                "/users/val-test/<username>/",
                "user's profile view (validater path)",
            ),
            view("logout", true, LOGOUT_PATH, "logout view"),
            view(
                "logout-val-test",
                true,
                "/val-test/logout/",
                "logout view (validater path)",
            ),
        ],
    );

    let moderator = ViewGroup::new(
        "moderator",
        true,
        vec![
            view(
                "mod-opinions-pending",
                true,
                "/opinions/in_review/?review=pending-review",
                "moderator's opinions pending review view",
            ),
            view(
                "mod-opinions-pending-val-test",
                true,
                "/opinions/val-test/in_review/?review=pending-review",
                "moderator's opinions pending review view (validater path)",
            ),
            view(
                "mod-opinions-under",
                true,
                "/opinions/in_review/?review=under-review",
                "moderator's opinions under review view",
            ),
            view(
                "mod-opinions-unacceptable",
                true,
                "/opinions/in_review/?review=unacceptable",
                "moderator's opinions which failed review view",
            ),
            view(
                "mod-comments-pending",
                true,
                "/opinions/comments/in_review/?review=pending-review",
                "moderator's comments pending review view",
            ),
            view(
                "mod-comments-under",
                true,
                "/opinions/comments/in_review/?review=under-review",
                "moderator's comments under review view",
            ),
            view(
                "mod-comments-unacceptable",
                true,
                "/opinions/comments/in_review/?review=unacceptable",
                "moderator's comments which failed review view",
            ),
            view(
                "mod-opinion-review-pre-assign",
                true,
                "/opinions/<opinion_pre_id>/?mode=review",
                "moderator's opinion pending review pre-assignment view",
            ),
            view(
                "mod-opinion-review-pre-assign-val-test",
                true,
                "/opinions/val-test/<opinion_pre_id>/?mode=review",
                "moderator's opinion pending review pre-assignment view (validater path)",
            ),
            view(
                "mod-opinion-review-post-assign",
                true,
                "/opinions/<opinion_post_id>/?mode=review",
                "moderator's opinion under review post-assignment view",
            ),
            view(
                "mod-opinion-review-post-assign-val-test",
                true,
                "/opinions/val-test/<opinion_post_id>/?mode=review",
                "moderator's opinion under review post-assignment view (validater path)",
            ),
            view(
                "mod-opinion-review-unacceptable",
                true,
                "/opinions/<opinion_ua_id>/?mode=review",
                "moderator's opinion unacceptable view",
            ),
            view(
                "mod-comment-review-pre-assign",
                true,
                "/opinions/comments/<comment_pre_id>/?mode=review",
                "moderator's comment pending review pre-assignment view",
            ),
            view(
                "mod-comment-review-post-assign",
                true,
                "/opinions/comments/<comment_post_id>/?mode=review",
                "moderator's comment under review post-assignment view",
            ),
            view(
                "mod-comment-review-unacceptable",
                true,
                "/opinions/comments/<comment_ua_id>/?mode=review",
                "moderator's comment unacceptable view",
            ),
        ],
    );

    Catalog::from_groups(vec![pre_login, post_login, moderator])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Token;

    #[test]
    fn test_builtin_catalog_validates() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.groups().len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_builtin_group_sizes() {
        let catalog = builtin_catalog().unwrap();
        let sizes: Vec<_> = catalog.groups().iter().map(|g| g.views.len()).collect();
        assert_eq!(sizes, vec![4, 29, 15]);
        assert_eq!(catalog.len(), 48);
    }

    #[test]
    fn test_builtin_all_matches_group_sum() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.resolve("all").len(), catalog.len());
    }

    #[test]
    fn test_builtin_templates_use_known_tokens_only() {
        let catalog = builtin_catalog().unwrap();
        for view in catalog.resolve("all") {
            let mut stripped = view.url_template.clone();
            for token in Token::ALL {
                stripped = stripped.replace(token.tag(), "");
            }
            assert!(
                !stripped.contains('<') && !stripped.contains('>'),
                "view {} has an unrecognized placeholder: {}",
                view.name,
                view.url_template
            );
        }
    }

    #[test]
    fn test_login_and_logout_views_use_fixed_endpoints() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.resolve("login")[0].url_template, LOGIN_PATH);
        assert_eq!(catalog.resolve("logout")[0].url_template, LOGOUT_PATH);
    }
}
