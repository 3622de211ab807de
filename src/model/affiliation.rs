//! Community roles that drive how a request is rendered.
//!
//! Faction roles select the `Affiliation` of a request author, which in turn picks
//! the embed colour and templates. Runner and playstyle roles are listed as tags on
//! the embed. All ids belong to the community server the bot serves.

use serenity::all::RoleId;

/// Runner roles (Locus, Glitch, Blackbird, Void), named `RUNNER://<name>`.
pub const RUNNER_ROLES: [RoleId; 4] = [
    RoleId::new(1365736777704276118),
    RoleId::new(1365736778467901550),
    RoleId::new(1365736779134664704),
    RoleId::new(1365736780078252257),
];

/// Playstyle roles (PvP, PvE), named `FOCUS://<name>`.
pub const PLAYSTYLE_ROLES: [RoleId; 2] = [
    RoleId::new(1365736951323557980),
    RoleId::new(1365736953676300388),
];

pub const RUNNER_PREFIX: &str = "RUNNER://";
pub const PLAYSTYLE_PREFIX: &str = "FOCUS://";

/// Faction of a request author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affiliation {
    CyberAcme,
    NuCaloric,
    Traxus,
    SekiguchiGenetics,
    Mida,
    /// No recognized faction role.
    Default,
}

impl Affiliation {
    /// Factions in selection priority order.
    pub const FACTIONS: [Affiliation; 5] = [
        Affiliation::CyberAcme,
        Affiliation::NuCaloric,
        Affiliation::Traxus,
        Affiliation::SekiguchiGenetics,
        Affiliation::Mida,
    ];

    /// Role granting this affiliation; `None` for `Default`.
    pub fn role_id(self) -> Option<RoleId> {
        match self {
            Self::CyberAcme => Some(RoleId::new(1367066118266556416)),
            Self::NuCaloric => Some(RoleId::new(1367066155591925810)),
            Self::Traxus => Some(RoleId::new(1367066328057249833)),
            Self::SekiguchiGenetics => Some(RoleId::new(1367066427542077530)),
            Self::Mida => Some(RoleId::new(1367066480407216240)),
            Self::Default => None,
        }
    }

    /// Selects the affiliation for a member's role set.
    ///
    /// The first faction in `FACTIONS` order the member holds wins; members holding
    /// none of them get `Default`.
    pub fn from_roles(roles: &[RoleId]) -> Self {
        Self::FACTIONS
            .into_iter()
            .find(|faction| faction.role_id().is_some_and(|id| roles.contains(&id)))
            .unwrap_or(Self::Default)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::CyberAcme => "CyberAcme",
            Self::NuCaloric => "NuCaloric",
            Self::Traxus => "Traxus",
            Self::SekiguchiGenetics => "Sekiguchi Genetics",
            Self::Mida => "MIDA",
            Self::Default => "Runner",
        }
    }

    pub fn colour(self) -> u32 {
        match self {
            Self::CyberAcme => 0x01d838,
            Self::NuCaloric => 0xff125d,
            Self::Traxus => 0xff7300,
            Self::SekiguchiGenetics => 0xc2fe0b,
            Self::Mida => 0xbe72e4,
            Self::Default => 0x5865f2,
        }
    }
}
