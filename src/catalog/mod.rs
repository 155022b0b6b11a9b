//! View catalog: the immutable registry of capturable pages
//!
//! The catalog is an ordered registry of view descriptors partitioned into
//! three groups: pre-login (anonymous), post-login (authenticated), and
//! moderator (authenticated, privileged role). Construction is an explicit
//! validated step that rejects duplicate names and descriptors whose
//! `requires_auth` flag contradicts their group.

mod views;

pub use views::{builtin_catalog, LOGIN_PATH, LOGOUT_PATH};

use crate::CatalogError;
use std::collections::HashSet;
use std::io::{self, Write};

/// Reserved selector matching the whole catalog
pub const SELECTOR_ALL: &str = "all";

/// One capturable page definition
///
/// Immutable once constructed; created only at catalog-build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDescriptor {
    /// Unique name, catalog-wide; doubles as the output file stem
    pub name: String,
    /// Whether the browser session must be authenticated for this view
    pub requires_auth: bool,
    /// Relative URL template, possibly containing placeholder tokens
    pub url_template: String,
    /// Human-readable description, shown by the `--list` report
    pub description: String,
}

impl ViewDescriptor {
    pub fn new(
        name: impl Into<String>,
        requires_auth: bool,
        url_template: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            requires_auth,
            url_template: url_template.into(),
            description: description.into(),
        }
    }
}

/// A named, ordered sequence of view descriptors sharing one auth requirement
#[derive(Debug, Clone)]
pub struct ViewGroup {
    /// Reserved group name usable as a selector (e.g. "pre-login")
    pub name: String,
    /// The auth requirement every member must declare
    pub requires_auth: bool,
    /// Members, in declaration (traversal) order
    pub views: Vec<ViewDescriptor>,
}

impl ViewGroup {
    pub fn new(name: impl Into<String>, requires_auth: bool, views: Vec<ViewDescriptor>) -> Self {
        Self {
            name: name.into(),
            requires_auth,
            views,
        }
    }
}

/// The validated, immutable view catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    groups: Vec<ViewGroup>,
}

impl Catalog {
    /// Builds a catalog from ordered groups, validating every descriptor
    ///
    /// # Errors
    ///
    /// * `CatalogError::DuplicateName` - two descriptors share a name
    /// * `CatalogError::AuthMismatch` - a descriptor's `requires_auth` flag
    ///   contradicts its group's declared requirement
    pub fn from_groups(groups: Vec<ViewGroup>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for group in &groups {
            for view in &group.views {
                if view.requires_auth != group.requires_auth {
                    return Err(CatalogError::AuthMismatch {
                        name: view.name.clone(),
                        group: group.name.clone(),
                        requires_auth: view.requires_auth,
                    });
                }
                if !seen.insert(view.name.clone()) {
                    return Err(CatalogError::DuplicateName(view.name.clone()));
                }
            }
        }
        Ok(Self { groups })
    }

    /// The groups in fixed traversal order
    pub fn groups(&self) -> &[ViewGroup] {
        &self.groups
    }

    /// Total number of descriptors across all groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.views.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.views.is_empty())
    }

    /// Resolves a selector to an ordered list of descriptors
    ///
    /// Evaluated case-insensitively:
    /// * `"all"` - every group concatenated in fixed order
    /// * a group name - that group's member list
    /// * anything else - the single descriptor whose name matches exactly,
    ///   or an empty list if none does (a no-op crawl, not an error)
    pub fn resolve(&self, selector: &str) -> Vec<&ViewDescriptor> {
        let target = selector.to_lowercase();

        if target == SELECTOR_ALL {
            return self
                .groups
                .iter()
                .flat_map(|g| g.views.iter())
                .collect();
        }

        if let Some(group) = self.groups.iter().find(|g| g.name == target) {
            return group.views.iter().collect();
        }

        self.groups
            .iter()
            .flat_map(|g| g.views.iter())
            .filter(|v| v.name == target)
            .collect()
    }

    /// Writes the discovery report: every group name and every descriptor
    /// name with its description
    pub fn write_listing(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(w, "{:<35}: all views", SELECTOR_ALL)?;
        for group in &self.groups {
            writeln!(w, "{:<35}: all {} views", group.name, group.name)?;
        }
        for group in &self.groups {
            for view in &group.views {
                writeln!(w, "{:<35}: {}", view.name, view.description)?;
            }
        }
        Ok(())
    }

    /// Prints the discovery report to stdout
    pub fn print_listing(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_listing(&mut lock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> Catalog {
        Catalog::from_groups(vec![
            ViewGroup::new(
                "pre-login",
                false,
                vec![
                    ViewDescriptor::new("landing", false, "/", "landing view"),
                    ViewDescriptor::new("login", false, "/accounts/login/", "login view"),
                ],
            ),
            ViewGroup::new(
                "post-login",
                true,
                vec![ViewDescriptor::new(
                    "opinion-read",
                    true,
                    "/opinions/<opinion_id>/?mode=read-only",
                    "opinion read view",
                )],
            ),
            ViewGroup::new(
                "moderator",
                true,
                vec![ViewDescriptor::new(
                    "mod-opinions-pending",
                    true,
                    "/opinions/in_review/?review=pending-review",
                    "moderator's opinions pending review view",
                )],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_all_concatenates_groups_in_order() {
        let catalog = small_catalog();
        let resolved = catalog.resolve("all");
        assert_eq!(resolved.len(), catalog.len());
        let names: Vec<_> = resolved.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["landing", "login", "opinion-read", "mod-opinions-pending"]
        );
    }

    #[test]
    fn test_resolve_group_name() {
        let catalog = small_catalog();
        let resolved = catalog.resolve("pre-login");
        assert_eq!(resolved.len(), 2);
        assert!(resolved.iter().all(|v| !v.requires_auth));
    }

    #[test]
    fn test_resolve_single_view_name() {
        let catalog = small_catalog();
        let resolved = catalog.resolve("opinion-read");
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "opinion-read");
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let catalog = small_catalog();
        assert_eq!(catalog.resolve("ALL").len(), catalog.len());
        assert_eq!(catalog.resolve("Pre-Login").len(), 2);
        assert_eq!(catalog.resolve("OPINION-READ").len(), 1);
    }

    #[test]
    fn test_resolve_unknown_name_is_empty_not_error() {
        let catalog = small_catalog();
        assert!(catalog.resolve("no-such-view").is_empty());
    }

    #[test]
    fn test_auth_mismatch_rejected_at_build() {
        let result = Catalog::from_groups(vec![ViewGroup::new(
            "pre-login",
            false,
            vec![ViewDescriptor::new("rogue", true, "/rogue/", "rogue view")],
        )]);
        assert!(matches!(
            result,
            Err(CatalogError::AuthMismatch { name, .. }) if name == "rogue"
        ));
    }

    #[test]
    fn test_duplicate_name_rejected_at_build() {
        let result = Catalog::from_groups(vec![
            ViewGroup::new(
                "pre-login",
                false,
                vec![ViewDescriptor::new("landing", false, "/", "landing view")],
            ),
            ViewGroup::new(
                "post-login",
                true,
                vec![ViewDescriptor::new("landing", true, "/other/", "dup")],
            ),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateName(name)) if name == "landing"));
    }

    #[test]
    fn test_listing_mentions_every_name() {
        let catalog = small_catalog();
        let mut buf = Vec::new();
        catalog.write_listing(&mut buf).unwrap();
        let listing = String::from_utf8(buf).unwrap();

        assert!(listing.contains("all"));
        for group in catalog.groups() {
            assert!(listing.contains(&group.name));
            for view in &group.views {
                assert!(listing.contains(&view.name));
                assert!(listing.contains(&view.description));
            }
        }
    }
}
