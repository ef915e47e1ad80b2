use serde::{Deserialize, Serialize};

/// A single configured link in the navigation menu.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NavigationEntry {
    pub route: String,
    pub label: String,
    #[serde(rename = "imgURL", alias = "icon")]
    pub icon: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    pub fn is_guest(&self) -> bool {
        self.id.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    pub name: String,
    pub logo: String,
    #[serde(default = "default_home")]
    pub home: String,
}

fn default_home() -> String {
    "/".to_owned()
}

/// Screen edge the menu panel slides in from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PanelSide {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

/// Presentation state of a rendered link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkVariant {
    Active,
    Inactive,
}

impl LinkVariant {
    pub fn from_flag(active: bool) -> Self {
        if active {
            LinkVariant::Active
        } else {
            LinkVariant::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, LinkVariant::Active)
    }

    pub fn container_class(&self) -> &'static str {
        match self {
            LinkVariant::Active => "mobilenav-sheet_close w-full bg-bank-gradient",
            LinkVariant::Inactive => "mobilenav-sheet_close w-full",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            LinkVariant::Active => "brightness-[3] invert-0",
            LinkVariant::Inactive => "",
        }
    }

    pub fn label_class(&self) -> &'static str {
        match self {
            LinkVariant::Active => "text-16 font-semibold text-black-2 !text-white",
            LinkVariant::Inactive => "text-16 font-semibold text-black-2",
        }
    }
}

/// One entry as it should be drawn for the current location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub route: String,
    pub label: String,
    pub icon: String,
    pub variant: LinkVariant,
}
