use serenity::all::{ChannelId, GuildId, UserId};

use crate::{
    data::request::RequestRegistry,
    model::request::{LfgRequest, PlayerCount},
};

mod get_request_by_voice_channel;
mod guild_requests;
mod pop;
mod push;

const GUILD: GuildId = GuildId::new(1279299830442627074);
const OTHER_GUILD: GuildId = GuildId::new(1364692913438589098);
const TEXT_CHANNEL: ChannelId = ChannelId::new(900);

fn make_request(guild_id: GuildId, author: u64, voice_channel: u64, players: i64) -> LfgRequest {
    LfgRequest::new(
        guild_id,
        UserId::new(author),
        ChannelId::new(voice_channel),
        TEXT_CHANNEL,
        PlayerCount::new(players).unwrap(),
    )
}
