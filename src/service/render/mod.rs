//! Embed rendering for LFG notifications.
//!
//! Rendering is selected by the author's `Affiliation`: every faction has its own
//! colour and templates, with a default arm for authors without a faction role.
//! Output is a plain `RequestEmbed`; templates go through `safe_substitute` so a
//! placeholder without a value stays visible instead of failing the render.

pub mod template;

use std::collections::HashMap;

use serenity::all::{Mentionable, RoleId};

use crate::model::{
    affiliation::{Affiliation, PLAYSTYLE_PREFIX, PLAYSTYLE_ROLES, RUNNER_PREFIX, RUNNER_ROLES},
    embed::{EmbedField, RequestEmbed},
    guild::{MemberProfile, VoiceChannelInfo},
    request::LfgRequest,
};

use self::template::{safe_substitute, TemplateValues};

const DEFAULT_DESCRIPTION: &str = "User **$user_name** is looking to play with **$looking_for** \
     other player(s)!\nCurrently connected to $voice_channel ($currently_connected/$party_size)";

const COMPLETION_COLOUR: u32 = 0x2ecc71;
const COMPLETION_TITLE: &str = "Group complete!";
const COMPLETION_DESCRIPTION: &str = "$user_name's group in $voice_channel is full \
     ($currently_connected/$party_size). Good luck out there!";

/// Everything a renderer may draw from.
pub struct RenderContext<'a> {
    pub request: &'a LfgRequest,
    pub author: &'a MemberProfile,
    pub channel: &'a VoiceChannelInfo,
}

struct Templates {
    title: &'static str,
    description: &'static str,
}

fn templates(affiliation: Affiliation) -> Templates {
    match affiliation {
        Affiliation::CyberAcme => Templates {
            title: "LFG request: $players_label",
            description: DEFAULT_DESCRIPTION,
        },
        Affiliation::NuCaloric => Templates {
            title: "NuCaloric squad forming: $players_label wanted",
            description: "$user_name needs **$remaining_room** more for a run.\n\
                 Jump into $voice_channel ($currently_connected/$party_size)",
        },
        Affiliation::Traxus => Templates {
            title: "Traxus contract open: $players_label",
            description: "$user_name is staffing a Traxus crew of $party_size.\n\
                 **$remaining_room** slot(s) left in $voice_channel",
        },
        Affiliation::SekiguchiGenetics => Templates {
            title: "Sekiguchi Genetics: $players_label requested",
            description: "$user_name is looking for **$looking_for** compatible runner(s).\n\
                 Report to $voice_channel ($currently_connected/$party_size)",
        },
        Affiliation::Mida => Templates {
            title: "MIDA calls for $players_label",
            description: "$user_name wants **$looking_for** more. $remaining_room place(s) \
                 left in $voice_channel ($currently_connected/$party_size)",
        },
        Affiliation::Default => Templates {
            title: "LFG: $players_label wanted",
            description: DEFAULT_DESCRIPTION,
        },
    }
}

fn players_label(looking_for: u8) -> String {
    if looking_for > 1 {
        format!("{} runners", looking_for)
    } else {
        format!("{} runner", looking_for)
    }
}

fn template_values(ctx: &RenderContext) -> TemplateValues<'static> {
    let looking_for = ctx.request.looking_for;
    HashMap::from([
        ("user_name", ctx.request.author.mention().to_string()),
        ("voice_channel", ctx.channel.id.mention().to_string()),
        ("looking_for", looking_for.get().to_string()),
        ("players_label", players_label(looking_for.get())),
        ("party_size", looking_for.party_size().to_string()),
        (
            "remaining_room",
            ctx.request
                .remaining_places(ctx.channel.occupancy())
                .max(0)
                .to_string(),
        ),
        ("currently_connected", ctx.channel.occupancy().to_string()),
    ])
}

/// Role names of `author` that appear in `ids`, with `prefix` stripped.
fn role_tags(author: &MemberProfile, ids: &[RoleId], prefix: &str) -> Vec<String> {
    author
        .roles
        .iter()
        .filter(|role| ids.contains(&role.id))
        .map(|role| {
            role.name
                .strip_prefix(prefix)
                .unwrap_or(&role.name)
                .trim()
                .to_string()
        })
        .collect()
}

pub fn runner_tags(author: &MemberProfile) -> Vec<String> {
    role_tags(author, &RUNNER_ROLES, RUNNER_PREFIX)
}

pub fn playstyle_tags(author: &MemberProfile) -> Vec<String> {
    role_tags(author, &PLAYSTYLE_ROLES, PLAYSTYLE_PREFIX)
}

fn occupants_field(channel: &VoiceChannelInfo) -> EmbedField {
    let value = if channel.occupants.is_empty() {
        "Nobody connected".to_string()
    } else {
        channel
            .occupants
            .iter()
            .map(|user_id| user_id.mention().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    };

    EmbedField::new("Connected", value, true)
}

fn channel_field(channel: &VoiceChannelInfo) -> EmbedField {
    let limit = channel
        .user_limit
        .filter(|limit| *limit > 0)
        .map(|limit| format!(" (limit {})", limit))
        .unwrap_or_default();

    EmbedField::new(
        "Voice channel",
        format!("{}{}", channel.id.mention(), limit),
        true,
    )
}

/// Faction colour, or the author's own role colour for the default arm.
fn request_colour(affiliation: Affiliation, author: &MemberProfile) -> u32 {
    match affiliation {
        Affiliation::Default => author.colour.unwrap_or(affiliation.colour()),
        faction => faction.colour(),
    }
}

/// Renders the live status notification of a request.
pub fn render_request(ctx: &RenderContext) -> RequestEmbed {
    let affiliation = Affiliation::from_roles(&ctx.author.role_ids());
    let templates = templates(affiliation);
    let values = template_values(ctx);

    RequestEmbed {
        title: safe_substitute(templates.title, &values),
        description: safe_substitute(templates.description, &values),
        colour: request_colour(affiliation, ctx.author),
        voice_channel: ctx.channel.id,
        fields: vec![occupants_field(ctx.channel), channel_field(ctx.channel)],
        runners: runner_tags(ctx.author),
        playstyles: playstyle_tags(ctx.author),
        footer: Some(format!(
            "{} • requested by {}",
            affiliation.name(),
            ctx.author.display_name
        )),
        timestamp: Some(ctx.request.created_at),
    }
}

/// Renders the notice posted once a request's party is full.
pub fn render_completion(ctx: &RenderContext) -> RequestEmbed {
    let values = template_values(ctx);

    RequestEmbed {
        title: COMPLETION_TITLE.to_string(),
        description: safe_substitute(COMPLETION_DESCRIPTION, &values),
        colour: COMPLETION_COLOUR,
        voice_channel: ctx.channel.id,
        fields: vec![occupants_field(ctx.channel)],
        runners: Vec::new(),
        playstyles: Vec::new(),
        footer: None,
        timestamp: None,
    }
}
