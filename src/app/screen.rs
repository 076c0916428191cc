// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.
//!
//! Each screen has a route path. The menu compares paths, not screens, so
//! nested routes under a top-level link still highlight it.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    GeneralSettings,
    DnsSettings,
    EncryptionSettings,
    ClientSettings,
    DhcpSettings,
    Blocklist,
    Allowlist,
    CustomRules,
    QueryLog,
    SetupGuide,
}

impl Screen {
    pub const ALL: [Screen; 11] = [
        Screen::Dashboard,
        Screen::GeneralSettings,
        Screen::DnsSettings,
        Screen::EncryptionSettings,
        Screen::ClientSettings,
        Screen::DhcpSettings,
        Screen::Blocklist,
        Screen::Allowlist,
        Screen::CustomRules,
        Screen::QueryLog,
        Screen::SetupGuide,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Screen::Dashboard => "/",
            Screen::GeneralSettings => "/settings",
            Screen::DnsSettings => "/dns",
            Screen::EncryptionSettings => "/encryption",
            Screen::ClientSettings => "/clients",
            Screen::DhcpSettings => "/dhcp",
            Screen::Blocklist => "/filters",
            Screen::Allowlist => "/dns_allowlists",
            Screen::CustomRules => "/custom_rules",
            Screen::QueryLog => "/logs",
            Screen::SetupGuide => "/guide",
        }
    }

    /// Exact-match lookup; unknown paths yield `None`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|screen| screen.path() == path)
    }

    /// i18n key of the screen's title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Screen::Dashboard => "nav-dashboard",
            Screen::GeneralSettings => "nav-general-settings",
            Screen::DnsSettings => "nav-dns-settings",
            Screen::EncryptionSettings => "nav-encryption-settings",
            Screen::ClientSettings => "nav-client-settings",
            Screen::DhcpSettings => "nav-dhcp-settings",
            Screen::Blocklist => "nav-dns-blocklist",
            Screen::Allowlist => "nav-dns-allowlist",
            Screen::CustomRules => "nav-custom-rules",
            Screen::QueryLog => "nav-query-log",
            Screen::SetupGuide => "nav-setup-guide",
        }
    }

    /// Screens whose content is driven by the filtering status.
    #[must_use]
    pub fn shows_filtering(self) -> bool {
        matches!(self, Screen::Blocklist | Screen::CustomRules)
    }
}
