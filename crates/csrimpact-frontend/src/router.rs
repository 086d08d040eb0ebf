//! The route table: a closed mapping from path strings to views.
//!
//! Parsing is total — any path resolves to a route, with [`Route::NotFound`]
//! as the catch-all. There is deliberately no guard layer: every route is
//! reachable regardless of session state, and views handle their own
//! unknown-id fallbacks.

use csrimpact_bridge::session::UserRole;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The login form; `?tab=ngo` preselects the NGO tab.
    Login { tab: Option<UserRole> },
    Dashboard,
    /// Project listing for one sector.
    Projects { sector_id: String },
    /// Detail view for one project.
    Project { project_id: String },
    SubmitProposal,
    TrackStatus,
    ImpactReports,
    NotFound { path: String },
}

impl Default for Route {
    fn default() -> Self {
        Route::Login { tab: None }
    }
}

impl Route {
    /// Maps a path string to its route. Unknown paths become
    /// [`Route::NotFound`]; this function cannot fail.
    pub fn parse(path: &str) -> Route {
        let (path_part, query) = match path.split_once('?') {
            Some((path_part, query)) => (path_part, Some(query)),
            None => (path, None),
        };
        let segments: Vec<&str> = path_part.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Login {
                tab: login_tab(query),
            },
            ["dashboard"] => Route::Dashboard,
            ["projects", sector_id] => Route::Projects {
                sector_id: (*sector_id).to_string(),
            },
            ["project", project_id] => Route::Project {
                project_id: (*project_id).to_string(),
            },
            ["submit-proposal"] => Route::SubmitProposal,
            ["track-status"] => Route::TrackStatus,
            ["impact-reports"] => Route::ImpactReports,
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }
}

/// The only query parameter in the application: an initial tab selector on
/// the login path.
fn login_tab(query: Option<&str>) -> Option<UserRole> {
    let tab = query?
        .split('&')
        .find_map(|pair| pair.strip_prefix("tab="))?;
    (tab == "ngo").then_some(UserRole::Ngo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_path_maps_to_its_route() {
        assert_eq!(Route::parse("/"), Route::Login { tab: None });
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(
            Route::parse("/projects/edu"),
            Route::Projects {
                sector_id: "edu".into()
            }
        );
        assert_eq!(
            Route::parse("/project/p1"),
            Route::Project {
                project_id: "p1".into()
            }
        );
        assert_eq!(Route::parse("/submit-proposal"), Route::SubmitProposal);
        assert_eq!(Route::parse("/track-status"), Route::TrackStatus);
        assert_eq!(Route::parse("/impact-reports"), Route::ImpactReports);
    }

    #[test]
    fn login_tab_selector_is_honored() {
        assert_eq!(
            Route::parse("/?tab=ngo"),
            Route::Login {
                tab: Some(UserRole::Ngo)
            }
        );
        // Anything but the NGO tab falls back to the default.
        assert_eq!(Route::parse("/?tab=company"), Route::Login { tab: None });
        assert_eq!(Route::parse("/?foo=bar"), Route::Login { tab: None });
    }

    #[test]
    fn unknown_paths_become_not_found() {
        assert_eq!(
            Route::parse("/admin/secrets"),
            Route::NotFound {
                path: "/admin/secrets".into()
            }
        );
        assert_eq!(
            Route::parse("/projects"),
            Route::NotFound {
                path: "/projects".into()
            }
        );
        assert_eq!(
            Route::parse("/project/p1/extra"),
            Route::NotFound {
                path: "/project/p1/extra".into()
            }
        );
    }

    #[test]
    fn unknown_catalog_ids_still_route() {
        // Routing never validates ids; the views render their own
        // not-found states.
        assert_eq!(
            Route::parse("/projects/space"),
            Route::Projects {
                sector_id: "space".into()
            }
        );
    }
}
