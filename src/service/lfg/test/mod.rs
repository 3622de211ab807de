use serenity::all::{ChannelId, GuildId, MessageId, UserId};

use crate::{
    data::RequestRegistry,
    error::{rejection::RequestRejection, AppError},
    model::{
        guild::GuildSnapshot,
        request::{LfgRequest, NotificationHandle, PlayerCount},
        voice::VoiceChange,
    },
    service::{
        lfg::{
            occupancy::{evaluate_change, OccupancyOutcome},
            validation::check_can_start_request,
            LfgService,
        },
        notifier::recording::{NotifierCall, RecordingNotifier},
    },
};

mod force_delete;
mod validation;

const GUILD: GuildId = GuildId::new(1279299830442627074);
const VOICE: ChannelId = ChannelId::new(1364881155559784539);
const OTHER_VOICE: ChannelId = ChannelId::new(1364881155559784540);
const TEXT: ChannelId = ChannelId::new(1364881154334789632);

const AUTHOR: UserId = UserId::new(10);
const SECOND: UserId = UserId::new(11);
const THIRD: UserId = UserId::new(12);

/// Guild with two voice channels (limit 4) and the given members connected to `VOICE`.
fn guild_with(occupants: &[UserId]) -> GuildSnapshot {
    occupants.iter().fold(
        GuildSnapshot::new()
            .with_voice_channel(VOICE, "Squad 1", Some(4))
            .with_voice_channel(OTHER_VOICE, "Squad 2", Some(4)),
        |guild, user_id| guild.with_connected(*user_id, VOICE),
    )
}

/// Registers a displayed request of `author` bound to `voice_channel`.
fn register(
    registry: &mut RequestRegistry,
    author: UserId,
    voice_channel: ChannelId,
    players: i64,
) -> LfgRequest {
    let mut request = LfgRequest::new(
        GUILD,
        author,
        voice_channel,
        TEXT,
        PlayerCount::new(players).unwrap(),
    );
    request.notification = Some(NotificationHandle {
        channel_id: TEXT,
        message_id: MessageId::new(author.get() + 1000),
    });
    registry.push(GUILD, author, request.clone());
    request
}
