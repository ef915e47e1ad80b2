use std::collections::HashSet;
use std::fmt;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::route::is_active;
use crate::structs::{Brand, NavigationEntry, PanelSide};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    pub brand: Brand,
    pub trigger_icon: String,
    #[serde(default)]
    pub side: PanelSide,
    #[serde(default)]
    pub links: Vec<NavigationEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    EmptyRoute { label: String },
    DuplicateRoute { route: String },
    OverlappingRoutes { outer: String, inner: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::EmptyRoute { label } => {
                write!(f, "link `{label}` has an empty route and will never be active")
            }
            ConfigWarning::DuplicateRoute { route } => {
                write!(f, "route `{route}` is listed more than once")
            }
            ConfigWarning::OverlappingRoutes { outer, inner } => {
                write!(
                    f,
                    "route `{inner}` is nested under `{outer}`, both will be active together"
                )
            }
        }
    }
}

impl NavConfig {
    pub fn from_json(s: &str) -> anyhow::Result<Self> {
        let (config, warnings) = Self::load(s)?;
        for warning in warnings {
            log::warn!("{warning}");
        }
        Ok(config)
    }

    /// Parses the config and hands its warnings back to the caller, for hosts
    /// that report them somewhere other than the `log` facade.
    pub fn load(s: &str) -> anyhow::Result<(Self, Vec<ConfigWarning>)> {
        let config: NavConfig =
            serde_json::from_str(s).context("failed to parse navigation config")?;
        let warnings = config.validate();
        Ok((config, warnings))
    }

    /// Problems with the link data that do not stop the menu from rendering.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        let mut seen = HashSet::new();

        for entry in &self.links {
            if entry.route.is_empty() {
                warnings.push(ConfigWarning::EmptyRoute {
                    label: entry.label.clone(),
                });
                continue;
            }
            if !seen.insert(entry.route.as_str()) {
                warnings.push(ConfigWarning::DuplicateRoute {
                    route: entry.route.clone(),
                });
            }
        }

        for outer in &self.links {
            for inner in &self.links {
                if outer.route != inner.route && is_active(&inner.route, &outer.route) {
                    warnings.push(ConfigWarning::OverlappingRoutes {
                        outer: outer.route.clone(),
                        inner: inner.route.clone(),
                    });
                }
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "brand": { "name": "Horizon", "logo": "/icons/logo.svg" },
        "trigger_icon": "/icons/hamburger.svg",
        "links": [
            { "route": "/", "label": "Home", "imgURL": "/icons/home.svg" },
            { "route": "/my-banks", "label": "My Banks", "imgURL": "/icons/dollar-circle.svg" }
        ]
    }"#;

    #[test]
    fn parses_links_in_order() {
        let config = NavConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.brand.name, "Horizon");
        assert_eq!(config.brand.home, "/");
        let routes: Vec<_> = config.links.iter().map(|l| l.route.as_str()).collect();
        assert_eq!(routes, vec!["/", "/my-banks"]);
        assert_eq!(config.links[1].icon, "/icons/dollar-circle.svg");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn accepts_icon_alias() {
        let config = NavConfig::from_json(
            r#"{"brand":{"name":"H","logo":"l.svg","home":"/dash"},"trigger_icon":"t.svg",
                "links":[{"route":"/a","label":"A","icon":"a.svg"}]}"#,
        )
        .unwrap();
        assert_eq!(config.brand.home, "/dash");
        assert_eq!(config.links[0].icon, "a.svg");
    }

    #[test]
    fn missing_links_is_empty_menu() {
        let config = NavConfig::from_json(
            r#"{"brand":{"name":"H","logo":"l.svg"},"trigger_icon":"t.svg"}"#,
        )
        .unwrap();
        assert!(config.links.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = NavConfig::from_json("{ not json").unwrap_err();
        assert!(err.to_string().contains("navigation config"));
    }

    #[test]
    fn load_returns_warnings_to_the_caller() {
        let (config, warnings) = NavConfig::load(
            r#"{"brand":{"name":"H","logo":"l.svg"},"trigger_icon":"t.svg",
                "links":[{"route":"/a","label":"A","imgURL":"a.svg"},
                         {"route":"/a","label":"Again","imgURL":"a.svg"}]}"#,
        )
        .unwrap();
        assert_eq!(config.links.len(), 2);
        assert_eq!(
            warnings,
            vec![ConfigWarning::DuplicateRoute {
                route: "/a".to_owned()
            }]
        );
        assert!(warnings[0].to_string().contains("/a"));
    }

    #[test]
    fn side_defaults_to_left() {
        let config = NavConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.side, PanelSide::Left);
        let config = NavConfig::from_json(
            r#"{"brand":{"name":"H","logo":"l.svg"},"trigger_icon":"t.svg","side":"bottom"}"#,
        )
        .unwrap();
        assert_eq!(config.side, PanelSide::Bottom);
    }

    #[test]
    fn flags_bad_link_data() {
        let mut config = NavConfig::from_json(SAMPLE).unwrap();
        let entry = |route: &str, label: &str| NavigationEntry {
            route: route.to_owned(),
            label: label.to_owned(),
            icon: String::new(),
        };
        config.links.push(entry("", "Broken"));
        config.links.push(entry("/my-banks", "Again"));
        config.links.push(entry("/my-banks/new", "Add"));

        let warnings = config.validate();
        assert!(warnings.contains(&ConfigWarning::EmptyRoute {
            label: "Broken".to_owned()
        }));
        assert!(warnings.contains(&ConfigWarning::DuplicateRoute {
            route: "/my-banks".to_owned()
        }));
        assert!(warnings.contains(&ConfigWarning::OverlappingRoutes {
            outer: "/my-banks".to_owned(),
            inner: "/my-banks/new".to_owned(),
        }));
        assert!(!warnings
            .iter()
            .any(|w| matches!(w, ConfigWarning::OverlappingRoutes { outer, .. } if outer == "/")));
    }
}
